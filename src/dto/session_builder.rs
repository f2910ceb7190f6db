use rocket_okapi::okapi::{schemars, schemars::JsonSchema};
use serde::Deserialize;

use crate::controller::SessionCoordinator;
use crate::lang::Locale;
use crate::store::SessionStore;

#[derive(Default, Deserialize, JsonSchema, FromForm)]
pub struct SessionBuilder {
    player_count: i64,
    locale: Option<Locale>,
}

impl SessionBuilder {
    pub fn into_session(self, store: &mut SessionStore) -> SessionCoordinator {
        SessionCoordinator::create(store, self.player_count, self.locale.unwrap_or_default())
    }
}
