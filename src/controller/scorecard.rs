use std::collections::BTreeMap;

use crate::api::Error;

pub const HOLES: usize = 18;

/// One player's column on the score sheet: 18 stroke slots and the running
/// total. Invariant: `total` always equals the sum of the slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSheet {
    strokes: [i32; HOLES],
    total: i32,
}

impl Default for PlayerSheet {
    fn default() -> Self {
        Self {
            strokes: [0; HOLES],
            total: 0,
        }
    }
}

impl PlayerSheet {
    fn record(&mut self, hole_index: usize, strokes: i32) {
        self.strokes[hole_index] = strokes;
        self.total = self.strokes.iter().sum();
    }

    pub fn stroke(&self, hole_index: usize) -> i32 {
        self.strokes.get(hole_index).copied().unwrap_or_default()
    }

    pub fn total(&self) -> i32 {
        self.total
    }
}

/// The session's stroke matrix, keyed by 0-based roster index. A player gets
/// an entry on their first recorded stroke; until then they do not exist
/// here, even if registered.
///
/// Roster indices, not persisted player ids, key this map. The roster is
/// append-only for the life of a session, so the two cannot drift apart.
#[derive(Debug, Clone, Default)]
pub struct ScoreSheet {
    sheets: BTreeMap<usize, PlayerSheet>,
}

impl ScoreSheet {
    /// How the raw field value becomes strokes: anything that does not parse
    /// as an integer counts as 0. No error is surfaced for garbage input.
    pub fn parse_strokes(raw: &str) -> i32 {
        raw.trim().parse().unwrap_or(0)
    }

    pub fn record_stroke(
        &mut self,
        player_index: usize,
        hole_index: usize,
        raw: &str,
    ) -> Result<i32, Error> {
        if hole_index >= HOLES {
            return Err(Error::HoleOutOfRange(hole_index));
        }
        let strokes = Self::parse_strokes(raw);
        self.sheets
            .entry(player_index)
            .or_default()
            .record(hole_index, strokes);
        Ok(strokes)
    }

    pub fn sheet(&self, player_index: usize) -> Option<&PlayerSheet> {
        self.sheets.get(&player_index)
    }

    /// Sheets in ascending roster-index order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &PlayerSheet)> {
        self.sheets.iter().map(|(&index, sheet)| (index, sheet))
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}
