pub use coordinator::{SessionCoordinator, SessionView};
pub use leaderboard::{RankedPlayer, Rankings};
pub use scorecard::{ScoreSheet, HOLES};

pub mod coordinator;
mod leaderboard;
mod scorecard;
