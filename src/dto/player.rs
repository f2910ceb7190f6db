use rocket_okapi::okapi::schemars;
use schemars::JsonSchema;
use serde::Serialize;

use crate::store;
use crate::store::{GameId, PlayerId};

#[derive(Serialize, Debug, JsonSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub game_id: GameId,
    pub score: i32,
}

impl From<&store::PlayerRecord> for self::Player {
    fn from(value: &store::PlayerRecord) -> self::Player {
        self::Player {
            id: value.id,
            name: value.name.clone(),
            game_id: value.game_id,
            score: value.score,
        }
    }
}
