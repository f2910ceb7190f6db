use itertools::Itertools;
use rocket::serde::json::Json;
use rocket::State;
use rocket_okapi::openapi;

use crate::api::Store;
use crate::dto;
use crate::store::GameId;

/// # Players of a game
/// Everyone registered to the game, in index-scan order. An unknown game
/// scans to an empty list.
#[openapi(tag = "Game")]
#[get("/game/<game_id>/players")]
pub async fn players_by_game(store: &State<Store>, game_id: GameId) -> Json<Vec<dto::Player>> {
    store
        .lock()
        .await
        .players_by_game(game_id)
        .into_iter()
        .map(dto::Player::from)
        .collect_vec()
        .into()
}
