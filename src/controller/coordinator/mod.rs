use itertools::Itertools;

use crate::api::Error;
use crate::controller::{Rankings, ScoreSheet};
use crate::lang::Locale;
use crate::store::{GameId, PlayerId, SessionStore};

/// The four screens of a session, in order. Forward-only: there is no way
/// back, and `Results` is terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionView {
    #[default]
    Registration,
    Instructions,
    ScoreSheet,
    Results,
}

impl SessionView {
    pub fn next(self) -> Self {
        match self {
            SessionView::Registration => SessionView::Instructions,
            SessionView::Instructions => SessionView::ScoreSheet,
            SessionView::ScoreSheet => SessionView::Results,
            SessionView::Results => SessionView::Results,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RosterEntry {
    pub name: String,
    pub player_id: Option<PlayerId>,
}

/// State container for one scoring session: the created game, the roster in
/// registration order, the live stroke matrix, and the current screen.
/// Replaces the original's pile of ambient view flags with one explicit
/// struct; dropped wholesale when the session ends.
#[derive(Debug, Clone)]
pub struct SessionCoordinator {
    game_id: GameId,
    roster: Vec<RosterEntry>,
    sheet: ScoreSheet,
    view: SessionView,
    locale: Locale,
}

impl SessionCoordinator {
    /// Creates the game record and seeds a roster of `player_count` unnamed
    /// slots. The count is taken as-is; out-of-hint values produce a
    /// malformed roster, not an error.
    pub fn create(store: &mut SessionStore, player_count: i64, locale: Locale) -> Self {
        let game_id = store.create_game(player_count);
        let configured = store
            .game(game_id)
            .map(|game| game.player_count)
            .unwrap_or_default();
        let slots = usize::try_from(configured).unwrap_or(0);
        Self {
            game_id,
            roster: vec![RosterEntry::default(); slots],
            sheet: ScoreSheet::default(),
            view: SessionView::default(),
            locale,
        }
    }

    pub fn game_id(&self) -> GameId {
        self.game_id
    }

    pub fn view(&self) -> SessionView {
        self.view
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    pub fn roster(&self) -> &[RosterEntry] {
        &self.roster
    }

    pub fn roster_names(&self) -> Vec<String> {
        self.roster
            .iter()
            .map(|entry| entry.name.clone())
            .collect_vec()
    }

    pub fn set_player_name(&mut self, index: usize, name: String) -> Result<(), Error> {
        let entry = self
            .roster
            .get_mut(index)
            .ok_or(Error::PlayerIndexOutOfRange(index))?;
        entry.name = name;
        Ok(())
    }

    /// The "next" button gate: every slot has a non-blank name.
    pub fn registration_complete(&self) -> bool {
        self.roster
            .iter()
            .all(|entry| !entry.name.trim().is_empty())
    }

    /// Persists the roster, one `add_player` call per slot in registration
    /// order, then moves on to the instructions screen. Sequential on
    /// purpose: the original submits N round trips in a row.
    pub fn submit_roster(&mut self, store: &mut SessionStore) -> Result<(), Error> {
        if !self.registration_complete() {
            return Err(Error::RosterIncomplete);
        }
        for entry in self.roster.iter_mut() {
            entry.player_id = Some(store.add_player(&entry.name, self.game_id)?);
        }
        info!(
            "registered {} players for game {}",
            self.roster.len(),
            self.game_id
        );
        self.view = SessionView::Instructions;
        Ok(())
    }

    pub fn record_stroke(
        &mut self,
        player_index: usize,
        hole_index: usize,
        raw: &str,
    ) -> Result<(), Error> {
        if player_index >= self.roster.len() {
            return Err(Error::PlayerIndexOutOfRange(player_index));
        }
        let strokes = self.sheet.record_stroke(player_index, hole_index, raw)?;
        debug!(
            "game {}: player {player_index} carded {strokes} on hole {}",
            self.game_id,
            hole_index + 1
        );
        Ok(())
    }

    pub fn sheet(&self) -> &ScoreSheet {
        &self.sheet
    }

    /// Hole-major grid for the score-sheet table; unscored slots show 0.
    pub fn sheet_rows(&self) -> Vec<Vec<i32>> {
        (0..crate::controller::HOLES)
            .map(|hole| {
                (0..self.roster.len())
                    .map(|player| {
                        self.sheet
                            .sheet(player)
                            .map(|sheet| sheet.stroke(hole))
                            .unwrap_or_default()
                    })
                    .collect_vec()
            })
            .collect_vec()
    }

    /// Running totals in roster order; players without a sheet sit at 0.
    pub fn totals(&self) -> Vec<i32> {
        (0..self.roster.len())
            .map(|player| {
                self.sheet
                    .sheet(player)
                    .map(|sheet| sheet.total())
                    .unwrap_or_default()
            })
            .collect_vec()
    }

    pub fn rankings(&self) -> Rankings {
        Rankings::compute(&self.sheet, &self.roster_names())
    }

    pub fn advance(&mut self) -> SessionView {
        self.view = self.view.next();
        self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(player_count: i64) -> (SessionStore, SessionCoordinator) {
        let mut store = SessionStore::default();
        let coordinator = SessionCoordinator::create(&mut store, player_count, Locale::default());
        (store, coordinator)
    }

    #[test]
    fn create_seeds_an_unnamed_roster() {
        let (store, coordinator) = seeded(3);
        assert_eq!(coordinator.roster().len(), 3);
        assert!(coordinator.roster().iter().all(|entry| entry.name.is_empty()));
        assert!(store.game(coordinator.game_id()).is_some());
        assert_eq!(coordinator.view(), SessionView::Registration);
    }

    #[test]
    fn registration_gate_requires_every_name() {
        let (_, mut coordinator) = seeded(2);
        assert!(!coordinator.registration_complete());
        coordinator.set_player_name(0, "Aya".to_string()).unwrap();
        coordinator.set_player_name(1, "   ".to_string()).unwrap();
        assert!(!coordinator.registration_complete());
        coordinator.set_player_name(1, "Badr".to_string()).unwrap();
        assert!(coordinator.registration_complete());
    }

    #[test]
    fn submitting_the_roster_persists_players_and_advances() {
        let (mut store, mut coordinator) = seeded(3);
        for (index, name) in ["Aya", "Badr", "Celine"].into_iter().enumerate() {
            coordinator.set_player_name(index, name.to_string()).unwrap();
        }
        coordinator.submit_roster(&mut store).unwrap();

        assert_eq!(coordinator.view(), SessionView::Instructions);
        let stored = store.players_by_game(coordinator.game_id());
        assert_eq!(stored.len(), 3);
        assert_eq!(stored[0].name, "Aya");
        let ids: Vec<_> = coordinator
            .roster()
            .iter()
            .map(|entry| entry.player_id.unwrap())
            .collect();
        assert_eq!(ids.iter().collect::<std::collections::HashSet<_>>().len(), 3);
    }

    #[test]
    fn incomplete_roster_does_not_submit() {
        let (mut store, mut coordinator) = seeded(2);
        coordinator.set_player_name(0, "Aya".to_string()).unwrap();
        assert!(matches!(
            coordinator.submit_roster(&mut store),
            Err(Error::RosterIncomplete)
        ));
        assert!(store.players_by_game(coordinator.game_id()).is_empty());
        assert_eq!(coordinator.view(), SessionView::Registration);
    }

    #[test]
    fn screens_only_move_forward() {
        let (_, mut coordinator) = seeded(1);
        assert_eq!(coordinator.advance(), SessionView::Instructions);
        assert_eq!(coordinator.advance(), SessionView::ScoreSheet);
        assert_eq!(coordinator.advance(), SessionView::Results);
        assert_eq!(coordinator.advance(), SessionView::Results);
    }

    #[test]
    fn strokes_only_land_on_registered_slots() {
        let (_, mut coordinator) = seeded(2);
        coordinator.record_stroke(1, 0, "4").unwrap();
        assert!(matches!(
            coordinator.record_stroke(2, 0, "4"),
            Err(Error::PlayerIndexOutOfRange(2))
        ));
        assert_eq!(coordinator.totals(), vec![0, 4]);
        assert!(coordinator.sheet().sheet(0).is_none());
        assert!(coordinator.sheet().sheet(1).is_some());
    }

    #[test]
    fn sheet_rows_default_unscored_slots_to_zero() {
        let (_, mut coordinator) = seeded(2);
        coordinator.record_stroke(0, 2, "5").unwrap();
        let rows = coordinator.sheet_rows();
        assert_eq!(rows.len(), crate::controller::HOLES);
        assert_eq!(rows[2], vec![5, 0]);
        assert_eq!(rows[3], vec![0, 0]);
    }

    #[test]
    fn rankings_use_the_live_roster_names() {
        let (_, mut coordinator) = seeded(2);
        coordinator.set_player_name(0, "Aya".to_string()).unwrap();
        coordinator.set_player_name(1, "Badr".to_string()).unwrap();
        coordinator.record_stroke(0, 0, "3").unwrap();
        let rankings = coordinator.rankings();
        assert_eq!(rankings.players().len(), 1);
        assert_eq!(rankings.players()[0].name, "Aya");
    }

    #[test]
    fn zero_player_games_yield_an_empty_roster() {
        let (_, coordinator) = seeded(0);
        assert!(coordinator.roster().is_empty());
        // Vacuously complete: the malformed count flows downstream unguarded.
        assert!(coordinator.registration_complete());
    }
}
