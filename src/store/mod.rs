use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use rocket::request::FromParam;
use rocket_okapi::okapi::schemars;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::api::Error;

/// Bounds the registration form hints at. The store accepts anything and
/// only logs when a count lands outside them.
pub const MIN_HINTED_PLAYERS: i64 = 1;
pub const MAX_HINTED_PLAYERS: i64 = 10;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
pub struct GameId(u64);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
pub struct PlayerId(u64);

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'r> FromParam<'r> for GameId {
    type Error = std::num::ParseIntError;

    fn from_param(param: &'r str) -> Result<Self, Self::Error> {
        param.parse().map(GameId)
    }
}

impl<'r> FromParam<'r> for PlayerId {
    type Error = std::num::ParseIntError;

    fn from_param(param: &'r str) -> Result<Self, Self::Error> {
        param.parse().map(PlayerId)
    }
}

/// `games` table row. Immutable after creation.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub id: GameId,
    pub player_count: i64,
    pub created_at: DateTime<Utc>,
}

/// `players` table row. Only `score` is ever mutated.
#[derive(Debug, Clone)]
pub struct PlayerRecord {
    pub id: PlayerId,
    pub name: String,
    pub game_id: GameId,
    pub score: i32,
    pub created_at: DateTime<Utc>,
}

/// The two tables backing a scoring session, with a secondary index on
/// `players.game_id`. Ids are allocated sequentially per table, so scan
/// order equals insertion order.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    games: Vec<GameRecord>,
    players: Vec<PlayerRecord>,
    by_game: HashMap<GameId, Vec<usize>>,
}

impl SessionStore {
    pub fn create_game(&mut self, player_count: i64) -> GameId {
        if !(MIN_HINTED_PLAYERS..=MAX_HINTED_PLAYERS).contains(&player_count) {
            warn!("game created with player count {player_count} outside the hinted 1..=10");
        }
        let id = GameId(self.games.len() as u64 + 1);
        self.games.push(GameRecord {
            id,
            player_count,
            created_at: Utc::now(),
        });
        info!("created game {id} for {player_count} players");
        id
    }

    pub fn add_player(&mut self, name: &str, game_id: GameId) -> Result<PlayerId, Error> {
        if self.game(game_id).is_none() {
            return Err(Error::GameNotFound(game_id));
        }
        if name.trim().is_empty() {
            warn!("storing player with empty name for game {game_id}");
        }
        let id = PlayerId(self.players.len() as u64 + 1);
        self.by_game
            .entry(game_id)
            .or_default()
            .push(self.players.len());
        self.players.push(PlayerRecord {
            id,
            name: name.to_string(),
            game_id,
            score: 0,
            created_at: Utc::now(),
        });
        Ok(id)
    }

    /// Overwrites the player's stored score. Decoupled from the live stroke
    /// matrix; used to persist a final total.
    pub fn submit_score(&mut self, player_id: PlayerId, score: i32) -> Result<(), Error> {
        let player = self
            .players
            .iter_mut()
            .find(|player| player.id == player_id)
            .ok_or(Error::PlayerNotFound(player_id))?;
        player.score = score;
        Ok(())
    }

    /// All players of a game in index-scan order. Unknown games scan to an
    /// empty list rather than an error.
    pub fn players_by_game(&self, game_id: GameId) -> Vec<&PlayerRecord> {
        self.by_game
            .get(&game_id)
            .map(|indices| indices.iter().map(|&index| &self.players[index]).collect())
            .unwrap_or_default()
    }

    pub fn game(&self, game_id: GameId) -> Option<&GameRecord> {
        self.games.iter().find(|game| game.id == game_id)
    }

    pub fn player(&self, player_id: PlayerId) -> Option<&PlayerRecord> {
        self.players.iter().find(|player| player.id == player_id)
    }
}
