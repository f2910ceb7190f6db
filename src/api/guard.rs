use rocket::http::Status;
use rocket::request::{FromRequest, Outcome};
use rocket::response::Responder;
use rocket::{response, Request};
use rocket_okapi::gen::OpenApiGenerator;
use rocket_okapi::okapi::openapi3::{MediaType, Responses};
use rocket_okapi::response::OpenApiResponderInner;
use tokio::sync::Mutex;

use crate::api::Session;
use crate::store::{GameId, PlayerId};

/// Holds the current session once the registration form has been submitted.
/// Until then, session-bound routes answer 424.
pub struct SessionLoader(pub Mutex<Option<Session>>);

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Session {
    type Error = Error;

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        match &*request
            .rocket()
            .state::<SessionLoader>()
            .unwrap()
            .0
            .lock()
            .await
        {
            None => Outcome::Error((Status::FailedDependency, Error::SessionNotLoaded)),
            Some(session) => Outcome::Success(session.clone()),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone)]
pub enum Error {
    #[error("No scoring session has been started yet")]
    SessionNotLoaded,
    #[error("Game `{0}` not found")]
    GameNotFound(GameId),
    #[error("Player `{0}` not found")]
    PlayerNotFound(PlayerId),
    #[error("Player index `{0}` does not exist in the roster")]
    PlayerIndexOutOfRange(usize),
    #[error("Hole index `{0}` is outside the 18-hole course")]
    HoleOutOfRange(usize),
    #[error("Every player needs a name before the roster can be submitted")]
    RosterIncomplete,
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, _req: &'r Request<'_>) -> response::Result<'o> {
        warn!("{}", self);

        use Error::*;
        match self {
            SessionNotLoaded => Err(Status::FailedDependency),
            GameNotFound(_) | PlayerNotFound(_) => Err(Status::NotFound),
            PlayerIndexOutOfRange(_) | HoleOutOfRange(_) | RosterIncomplete => {
                Err(Status::BadRequest)
            }
        }
    }
}

impl OpenApiResponderInner for self::Error {
    fn responses(gen: &mut OpenApiGenerator) -> rocket_okapi::Result<Responses> {
        use rocket_okapi::{okapi, okapi::openapi3::RefOr};

        Ok(Responses {
            responses: okapi::map! {
                "424".to_owned() => RefOr::Object(failed_dependency(gen)),
            },
            ..Default::default()
        })
    }
}

pub fn failed_dependency(_gen: &mut OpenApiGenerator) -> rocket_okapi::okapi::openapi3::Response {
    use rocket_okapi::okapi;
    okapi::openapi3::Response {
        description: "\
        # 424 Failed Dependency\n\
        No scoring session has been started; submit the registration form first. \
        "
        .to_owned(),
        content: okapi::map! {
            "application/json".to_owned() => MediaType::default()
        },
        ..Default::default()
    }
}
