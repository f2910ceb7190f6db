mod player;
mod requests;
mod session_builder;

pub use player::Player;
pub use requests::{NewGame, NewPlayer, ScoreSubmission};
pub use session_builder::SessionBuilder;
