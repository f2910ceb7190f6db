mod guard;
mod mutation;
mod query;
mod webpage_responses;

pub use guard::Error;

use std::sync::Arc;

use rocket::{Build, Rocket};
use rocket_dyn_templates::Template;
use rocket_okapi::openapi_get_routes;
use rocket_okapi::rapidoc::{make_rapidoc, GeneralConfig, RapiDocConfig};
use rocket_okapi::settings::UrlObject;
use rocket_okapi::swagger_ui::{make_swagger_ui, SwaggerUIConfig};
use tokio::sync::{Mutex, MutexGuard};

use crate::api::mutation::*;
use crate::api::query::*;
use crate::api::webpage_responses::*;
use crate::controller::SessionCoordinator;
use crate::store::SessionStore;
use guard::SessionLoader;

/// Shared handle to the running session's coordinator.
#[derive(Debug, Clone)]
pub struct Session(Arc<Mutex<SessionCoordinator>>);

impl From<SessionCoordinator> for Session {
    fn from(value: SessionCoordinator) -> Self {
        Self(Arc::new(Mutex::new(value)))
    }
}

impl Session {
    async fn lock(&self) -> MutexGuard<'_, SessionCoordinator> {
        self.0.lock().await
    }
}

/// Shared handle to the two backing tables.
#[derive(Debug, Default)]
pub struct Store(Arc<Mutex<SessionStore>>);

impl Store {
    pub async fn lock(&self) -> MutexGuard<'_, SessionStore> {
        self.0.lock().await
    }
}

pub fn launch() -> Rocket<Build> {
    rocket::build()
        .manage(Store::default())
        .manage(SessionLoader(Mutex::new(None)))
        .attach(Template::fairing())
        .mount(
            "/",
            openapi_get_routes![create_game, add_player, submit_score, players_by_game],
        )
        .mount(
            "/",
            routes![
                index,
                init_session,
                submit_players,
                advance_view,
                record_stroke,
                set_language,
            ],
        )
        .mount(
            "/swagger",
            make_swagger_ui(&SwaggerUIConfig {
                url: "../openapi.json".to_owned(),
                ..Default::default()
            }),
        )
        .mount(
            "/rapidoc",
            make_rapidoc(&RapiDocConfig {
                general: GeneralConfig {
                    spec_urls: vec![UrlObject::new("General", "../openapi.json")],
                    ..Default::default()
                },
                ..Default::default()
            }),
        )
}
