use rocket::serde::json::Json;
use rocket::State;
use rocket_okapi::openapi;

use crate::api::{Error, Store};
use crate::dto;
use crate::store::{GameId, PlayerId};

/// # Create a game
/// Registers a new game configured for `playerCount` players and returns its
/// identifier. The 1–10 bound is a form hint; any count is accepted here.
#[openapi(tag = "Game")]
#[post("/game", data = "<game>")]
pub async fn create_game(store: &State<Store>, game: Json<dto::NewGame>) -> Json<GameId> {
    Json(store.lock().await.create_game(game.player_count))
}

/// # Add a player
/// Creates a player under an existing game with a starting score of 0.
/// Names are stored verbatim; emptiness is only gated client-side.
#[openapi(tag = "Game")]
#[post("/game/<game_id>/player", data = "<player>")]
pub async fn add_player(
    store: &State<Store>,
    game_id: GameId,
    player: Json<dto::NewPlayer>,
) -> Result<Json<PlayerId>, Error> {
    Ok(Json(store.lock().await.add_player(&player.name, game_id)?))
}

/// # Submit a final score
/// Overwrites the player's persisted score field. Independent of the live
/// score sheet; the screen flow never calls this itself.
#[openapi(tag = "Player")]
#[post("/player/<player_id>/score", data = "<submission>")]
pub async fn submit_score(
    store: &State<Store>,
    player_id: PlayerId,
    submission: Json<dto::ScoreSubmission>,
) -> Result<(), Error> {
    store.lock().await.submit_score(player_id, submission.score)
}
