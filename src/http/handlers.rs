//! Route handlers.
//!
//! Each handler fetches fresh upstream data, reshapes it, and renders a page.
//! Faults (`AppError`) propagate to a 500; misses render their own page.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use tower_cookies::Cookies;

use crate::champions;
use crate::http::error::{status_page, AppError};
use crate::http::pages::{
    render, ChampErrorPage, ChampionPage, IdErrorPage, RosterPage, SearchResultsPage, TopPage,
};
use crate::http::server::AppState;
use crate::region;
use crate::session::Session;

/// Shown when a Riot ID cannot be resolved.
pub const IDENTITY_ERROR_MESSAGE: &str = "PUUIDを取得できませんでした。入力情報を確認してください。";
/// Shown when a champion's detail file cannot be fetched.
pub const DETAIL_ERROR_MESSAGE: &str = "チャンピオンの詳細を取得できませんでした。";

#[derive(Debug, Deserialize)]
pub struct IdentityForm {
    #[serde(alias = "name")]
    pub summoner_name: String,
    pub tagline: String,
    #[serde(alias = "platformCode", alias = "platform_code")]
    pub platform: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub query: String,
}

/// `GET /`
pub async fn top() -> Result<Html<String>, AppError> {
    render(TopPage {
        platforms: region::platform_codes().collect(),
    })
}

/// `POST /set_user`
pub async fn set_user(
    State(state): State<AppState>,
    cookies: Cookies,
    Form(form): Form<IdentityForm>,
) -> Result<Response, AppError> {
    let IdentityForm {
        summoner_name,
        tagline,
        platform,
    } = form;

    let resolved = state
        .players
        .resolve_identity(&summoner_name, &tagline, &platform)
        .await?;

    let Some((player_id, region)) = resolved else {
        tracing::info!(platform = %platform, "Riot ID lookup failed");
        return Ok(render(IdErrorPage {
            message: IDENTITY_ERROR_MESSAGE,
        })?
        .into_response());
    };

    tracing::info!(region = %region, platform = %platform, "Riot ID resolved");

    let session_id = state.cookies.session_id_or_new(&cookies);
    state.sessions.set(
        &session_id,
        Session {
            player_id,
            region,
            platform_code: platform,
            riot_id: format!("{}#{}", summoner_name, tagline),
        },
    );
    state.cookies.issue(&cookies, &session_id);

    Ok(Redirect::to("/index").into_response())
}

/// `GET /index`
pub async fn index(State(state): State<AppState>, cookies: Cookies) -> Result<Html<String>, AppError> {
    let version = state.game_data.current_version().await?;
    let roster = state.game_data.champion_catalog(&version).await?;
    let session = current_session(&state, &cookies);

    render(RosterPage {
        champions: &roster,
        image_base: state.game_data.image_base(&version),
        riot_id: session.as_ref().map(|s| s.riot_id.as_str()),
    })
}

/// `GET /champion/{short_id}/{key}`
pub async fn champion(
    State(state): State<AppState>,
    cookies: Cookies,
    Path((short_id, key)): Path<(String, String)>,
) -> Result<Html<String>, AppError> {
    let version = state.game_data.current_version().await?;

    let Some(details) = state.game_data.champion_detail(&short_id, &version).await? else {
        return render(ChampErrorPage {
            message: DETAIL_ERROR_MESSAGE,
        });
    };

    let mastery_level = match current_session(&state, &cookies) {
        Some(session) => {
            state
                .players
                .mastery_level(&session.player_id, &session.platform_code, &key)
                .await?
        }
        None => None,
    };

    render(ChampionPage {
        champion_id: &short_id,
        champion_key: &key,
        image_base: state.game_data.image_base(&version),
        mastery_level,
        details: &details,
    })
}

/// `GET /search`
pub async fn search_redirect() -> Redirect {
    Redirect::to("/index")
}

/// `POST /search`
pub async fn search(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>, AppError> {
    let version = state.game_data.current_version().await?;
    let roster = state.game_data.champion_catalog(&version).await?;
    let results = champions::search(&roster, &form.query);

    tracing::debug!(query = %form.query, hits = results.len(), "Champion search");

    render(SearchResultsPage {
        query: &form.query,
        search_results: &results,
        image_base: state.game_data.image_base(&version),
    })
}

/// `GET /logout`
pub async fn logout(State(state): State<AppState>, cookies: Cookies) -> Redirect {
    if let Some(session_id) = state.cookies.session_id(&cookies) {
        state.sessions.clear(&session_id);
    }
    state.cookies.revoke(&cookies);
    Redirect::to("/")
}

pub async fn not_found() -> Response {
    status_page(StatusCode::NOT_FOUND, "Page not found.")
}

fn current_session(state: &AppState, cookies: &Cookies) -> Option<Session> {
    state
        .cookies
        .session_id(cookies)
        .and_then(|id| state.sessions.get(&id))
}
