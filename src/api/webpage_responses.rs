use itertools::Itertools;
use rocket::form::Form;
use rocket::State;
use rocket_dyn_templates::Template;
use serde_json::json;

use crate::api::guard::SessionLoader;
use crate::api::{Error, Session, Store};
use crate::controller::{RankedPlayer, SessionCoordinator, SessionView};
use crate::dto::SessionBuilder;
use crate::lang::{Locale, ScreenStrings};

#[derive(FromForm)]
pub struct RosterForm {
    names: Vec<String>,
}

#[derive(FromForm)]
pub struct StrokeForm {
    value: String,
}

/// The current screen. Before a session exists this is the player-count
/// form; `?lang=` switches its text bundle.
#[get("/?<lang>")]
pub async fn index(loader: &State<SessionLoader>, lang: Option<Locale>) -> Template {
    match &*loader.0.lock().await {
        Some(session) => render_screen(&*session.lock().await),
        None => {
            let locale = lang.unwrap_or_default();
            let strings = ScreenStrings::for_locale(locale);
            Template::render(
                "registration",
                json!({
                    "strings": strings,
                    "has_session": false,
                    "default_count": 2,
                    "locale": locale,
                    "other_locale": locale.toggled(),
                }),
            )
        }
    }
}

#[post("/session/init", data = "<builder>")]
pub async fn init_session(
    loader: &State<SessionLoader>,
    store: &State<Store>,
    builder: Form<SessionBuilder>,
) -> Template {
    let session = builder.into_inner().into_session(&mut *store.lock().await);
    let screen = render_screen(&session);
    *loader.0.lock().await = Some(session.into());
    screen
}

/// One `add_player` round trip per roster slot, in order, then the
/// instructions screen.
#[post("/session/players", data = "<roster>")]
pub async fn submit_players(
    session: Session,
    store: &State<Store>,
    roster: Form<RosterForm>,
) -> Result<Template, Error> {
    let mut session = session.lock().await;
    for (index, name) in roster.into_inner().names.into_iter().enumerate() {
        session.set_player_name(index, name)?;
    }
    session.submit_roster(&mut *store.lock().await)?;
    Ok(render_screen(&session))
}

/// Instructions → score sheet → results. No way back.
#[post("/session/advance")]
pub async fn advance_view(session: Session) -> Template {
    let mut session = session.lock().await;
    session.advance();
    render_screen(&session)
}

#[post("/session/score/<player_index>/<hole_index>", data = "<stroke>")]
pub async fn record_stroke(
    session: Session,
    player_index: usize,
    hole_index: usize,
    stroke: Form<StrokeForm>,
) -> Result<Template, Error> {
    let mut session = session.lock().await;
    session.record_stroke(player_index, hole_index, &stroke.value)?;
    Ok(render_screen(&session))
}

#[post("/session/language/<locale>")]
pub async fn set_language(session: Session, locale: Locale) -> Template {
    let mut session = session.lock().await;
    session.set_locale(locale);
    render_screen(&session)
}

fn ranked_row(player: &RankedPlayer) -> serde_json::Value {
    json!({
        "name": player.name,
        "total": player.total,
        "label": player.position_label(),
    })
}

fn render_screen(session: &SessionCoordinator) -> Template {
    let locale = session.locale();
    let strings = ScreenStrings::for_locale(locale);
    let other_locale = locale.toggled();
    match session.view() {
        SessionView::Registration => Template::render(
            "registration",
            json!({
                "strings": strings,
                "locale": locale,
                "other_locale": other_locale,
                "has_session": true,
                "roster": session.roster_names(),
            }),
        ),
        SessionView::Instructions => Template::render(
            "instructions",
            json!({"strings": strings, "other_locale": other_locale}),
        ),
        SessionView::ScoreSheet => {
            let rows = session
                .sheet_rows()
                .into_iter()
                .enumerate()
                .map(|(hole, cells)| json!({"hole": hole + 1, "hole_index": hole, "cells": cells}))
                .collect_vec();
            Template::render(
                "score_sheet",
                json!({
                    "strings": strings,
                    "other_locale": other_locale,
                    "players": session.roster_names(),
                    "rows": rows,
                    "totals": session.totals(),
                }),
            )
        }
        SessionView::Results => {
            let rankings = session.rankings();
            Template::render(
                "results",
                json!({
                    "strings": strings,
                    "other_locale": other_locale,
                    "podium": rankings.podium().iter().map(ranked_row).collect_vec(),
                    "trailing": rankings.trailing().iter().map(ranked_row).collect_vec(),
                }),
            )
        }
    }
}
