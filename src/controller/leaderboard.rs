use itertools::Itertools;
use rocket_okapi::okapi::schemars;
use schemars::JsonSchema;
use serde::Serialize;

use crate::controller::scorecard::ScoreSheet;

/// One row of the final standings. `position` is 1-based and shared between
/// tied players; `tied` marks rows rendered with a "T" prefix.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct RankedPlayer {
    pub name: String,
    pub total: i32,
    pub position: usize,
    pub tied: bool,
}

impl RankedPlayer {
    pub fn position_label(&self) -> String {
        if self.tied {
            format!("T{}", self.position)
        } else {
            self.position.to_string()
        }
    }
}

/// The standings, ascending by total strokes (fewer strokes wins in golf).
///
/// Only players with at least one recorded stroke appear; a registered
/// player who never touched the sheet is silently absent.
#[derive(Debug, Clone, Default)]
pub struct Rankings {
    players: Vec<RankedPlayer>,
}

impl Rankings {
    pub fn compute(sheet: &ScoreSheet, roster_names: &[String]) -> Self {
        let mut totals = sheet
            .entries()
            .map(|(index, player_sheet)| {
                let name = roster_names.get(index).cloned().unwrap_or_default();
                (name, player_sheet.total())
            })
            .collect_vec();
        // Stable, so equal totals keep roster order.
        totals.sort_by(|a, b| a.1.cmp(&b.1));

        let mut position = 1;
        let mut same_score_count = 0;
        let mut last_score = totals.first().map(|(_, total)| *total).unwrap_or_default();
        let players = totals
            .iter()
            .map(|(name, total)| {
                if *total != last_score {
                    position += same_score_count;
                    same_score_count = 0;
                }
                same_score_count += 1;
                last_score = *total;
                let tied = totals.iter().filter(|(_, other)| other == total).count() > 1;
                RankedPlayer {
                    name: name.clone(),
                    total: *total,
                    position,
                    tied,
                }
            })
            .collect_vec();

        Self { players }
    }

    pub fn players(&self) -> &[RankedPlayer] {
        &self.players
    }

    /// The top three, in order. Fewer if fewer players scored.
    pub fn podium(&self) -> &[RankedPlayer] {
        &self.players[..self.players.len().min(3)]
    }

    /// Everyone from rank four down.
    pub fn trailing(&self) -> &[RankedPlayer] {
        &self.players[self.players.len().min(3)..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::scorecard::HOLES;
    use fake::faker::name::en::FirstName;
    use fake::{Dummy, Fake, Faker};
    use itertools::Itertools;

    #[derive(Debug, Dummy)]
    struct TestingPlayer {
        #[dummy(faker = "FirstName()")]
        name: String,
        #[dummy(faker = "(Faker, 18)")]
        holes: Vec<TestingHole>,
    }

    #[derive(Debug, Dummy)]
    struct TestingHole {
        #[dummy(faker = "1..=8")]
        strokes: i32,
    }

    fn filled_session(player_count: usize) -> (ScoreSheet, Vec<String>) {
        let mut sheet = ScoreSheet::default();
        let mut names = vec![];
        for index in 0..player_count {
            let player: TestingPlayer = Faker.fake();
            for (hole, result) in player.holes.iter().enumerate() {
                sheet
                    .record_stroke(index, hole, &result.strokes.to_string())
                    .unwrap();
            }
            names.push(player.name);
        }
        (sheet, names)
    }

    #[test]
    fn standings_ascend_by_total() {
        let (sheet, names) = filled_session(10);
        let rankings = Rankings::compute(&sheet, &names);
        let totals = rankings
            .players()
            .iter()
            .map(|player| player.total)
            .collect_vec();
        let mut sorted = totals.clone();
        sorted.sort();
        assert_eq!(totals, sorted);
        assert_eq!(rankings.players().len(), 10);
    }

    #[test]
    fn fewer_strokes_takes_first() {
        let mut sheet = ScoreSheet::default();
        // Alice cards 72, Bob 68.
        for hole in 0..HOLES {
            sheet.record_stroke(0, hole, "4").unwrap();
        }
        for hole in 0..HOLES {
            let strokes = if hole < 4 { 3 } else { 4 };
            sheet.record_stroke(1, hole, &strokes.to_string()).unwrap();
        }
        let names = vec!["Alice".to_string(), "Bob".to_string()];
        let rankings = Rankings::compute(&sheet, &names);

        assert_eq!(rankings.players()[0].name, "Bob");
        assert_eq!(rankings.players()[0].total, 68);
        assert_eq!(rankings.players()[1].name, "Alice");
        assert_eq!(rankings.players()[1].total, 72);
    }

    #[test]
    fn ties_share_a_position_and_keep_roster_order() {
        let mut sheet = ScoreSheet::default();
        sheet.record_stroke(0, 0, "3").unwrap();
        sheet.record_stroke(1, 0, "3").unwrap();
        sheet.record_stroke(2, 0, "5").unwrap();
        let names = vec!["Aya".to_string(), "Badr".to_string(), "Celine".to_string()];
        let rankings = Rankings::compute(&sheet, &names);

        let labels = rankings
            .players()
            .iter()
            .map(RankedPlayer::position_label)
            .collect_vec();
        assert_eq!(labels, vec!["T1", "T1", "3"]);
        // Stable: the earlier roster entry stays first.
        assert_eq!(rankings.players()[0].name, "Aya");
        assert_eq!(rankings.players()[1].name, "Badr");
    }

    #[test]
    fn players_without_strokes_are_absent() {
        let mut sheet = ScoreSheet::default();
        sheet.record_stroke(1, 0, "2").unwrap();
        let names = vec!["Aya".to_string(), "Badr".to_string()];
        let rankings = Rankings::compute(&sheet, &names);

        assert_eq!(rankings.players().len(), 1);
        assert_eq!(rankings.players()[0].name, "Badr");
    }

    #[test]
    fn index_outside_the_roster_falls_back_to_an_empty_name() {
        let mut sheet = ScoreSheet::default();
        sheet.record_stroke(7, 0, "2").unwrap();
        let rankings = Rankings::compute(&sheet, &[]);
        assert_eq!(rankings.players()[0].name, "");
    }

    #[test]
    fn podium_is_the_top_three() {
        let (sheet, names) = filled_session(5);
        let rankings = Rankings::compute(&sheet, &names);
        assert_eq!(rankings.podium().len(), 3);
        assert_eq!(rankings.trailing().len(), 2);
        assert_eq!(rankings.podium()[0].name, rankings.players()[0].name);

        let (small_sheet, small_names) = filled_session(2);
        let small = Rankings::compute(&small_sheet, &small_names);
        assert_eq!(small.podium().len(), 2);
        assert!(small.trailing().is_empty());
    }
}
