//! Page templates (askama, under `templates/`).

use askama::Template;
use axum::response::Html;

use crate::champions::{ChampionDetail, ChampionSummary};
use crate::http::error::AppError;

/// Riot ID entry form.
#[derive(Template)]
#[template(path = "top.html")]
pub struct TopPage {
    pub platforms: Vec<&'static str>,
}

#[derive(Template)]
#[template(path = "id_error.html")]
pub struct IdErrorPage<'a> {
    pub message: &'a str,
}

/// Full champion roster.
#[derive(Template)]
#[template(path = "index.html")]
pub struct RosterPage<'a> {
    pub champions: &'a [ChampionSummary],
    pub image_base: String,
    /// `name#tagline` of the signed-in player, if any.
    pub riot_id: Option<&'a str>,
}

#[derive(Template)]
#[template(path = "champion.html")]
pub struct ChampionPage<'a> {
    pub champion_id: &'a str,
    pub champion_key: &'a str,
    pub image_base: String,
    pub mastery_level: Option<i64>,
    pub details: &'a ChampionDetail,
}

#[derive(Template)]
#[template(path = "champ_error.html")]
pub struct ChampErrorPage<'a> {
    pub message: &'a str,
}

#[derive(Template)]
#[template(path = "search_results.html")]
pub struct SearchResultsPage<'a> {
    pub query: &'a str,
    pub search_results: &'a [ChampionSummary],
    pub image_base: String,
}

/// Generic status page (404, 500).
#[derive(Template)]
#[template(path = "status.html")]
pub struct StatusPage {
    pub status: u16,
    pub message: &'static str,
}

pub fn render<T: Template>(template: T) -> Result<Html<String>, AppError> {
    Ok(Html(template.render()?))
}
