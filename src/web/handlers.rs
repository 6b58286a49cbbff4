//! HTTP request handlers

use super::error::ApiError;
use super::state::AppState;
use crate::airports::{self, Airport};
use crate::query::SearchParams;
use crate::results::SearchResponse;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use chrono::Local;
use serde::{Deserialize, Serialize};
use tera::Context;
use tracing::{debug, error};

/// Default and maximum number of airport suggestions
const AIRPORT_SUGGESTIONS: usize = 8;
const MAX_AIRPORT_SUGGESTIONS: usize = 25;

#[derive(Debug, Serialize)]
struct CategoryTab {
    id: &'static str,
    label: &'static str,
}

/// Home page handler
pub async fn index(State(state): State<AppState>) -> Response {
    let categories: Vec<CategoryTab> = state
        .search
        .registry()
        .available_categories()
        .into_iter()
        .map(|c| CategoryTab {
            id: c.as_str(),
            label: c.label(),
        })
        .collect();

    let mut ctx = Context::new();
    ctx.insert("instance_name", state.instance_name());
    ctx.insert("version", crate::VERSION);
    ctx.insert("base_url", &state.settings.server.base_url);
    ctx.insert("categories", &categories);
    ctx.insert("default_category", &state.settings.search.default_category);

    match state.templates.render_with_context("index.html", &ctx) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("Template error: {:?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Template error").into_response()
        }
    }
}

/// `GET /api/search`: validate, route to the category's provider, normalize
pub async fn api_search(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Query(params) = params.map_err(|e| {
        debug!("Undecodable query string: {}", e.body_text());
        ApiError::from(e)
    })?;
    let today = Local::now().date_naive();
    let query = params.validate(&state.settings.search, today).map_err(|e| {
        debug!("Rejected search parameters: {}", e);
        e
    })?;

    let response = state.search.execute(&query).await?;
    Ok(Json(response))
}

#[derive(Debug, Deserialize)]
pub struct AirportParams {
    pub q: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct AirportSuggestion {
    pub code: &'static str,
    pub name: &'static str,
    pub city: &'static str,
    pub country: &'static str,
    pub label: String,
}

impl From<&Airport> for AirportSuggestion {
    fn from(airport: &Airport) -> Self {
        Self {
            code: airport.code,
            name: airport.name,
            city: airport.city,
            country: airport.country,
            label: airport.label(),
        }
    }
}

/// Airport autocomplete for the flight form
pub async fn airports(
    params: Result<Query<AirportParams>, QueryRejection>,
) -> Result<Json<Vec<AirportSuggestion>>, ApiError> {
    let Query(params) = params?;
    let limit = params
        .limit
        .unwrap_or(AIRPORT_SUGGESTIONS)
        .clamp(1, MAX_AIRPORT_SUGGESTIONS);
    let prefix = params.q.as_deref().unwrap_or("").trim();

    Ok(Json(
        airports::suggest(prefix, limit)
            .into_iter()
            .map(AirportSuggestion::from)
            .collect(),
    ))
}

/// Health check handler
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION,
        "providers": state.search.registry().names(),
    }))
}

/// Robots.txt handler
pub async fn robots_txt(State(state): State<AppState>) -> impl IntoResponse {
    let content = if state.is_public() {
        "User-agent: *\nAllow: /\nDisallow: /api/\n"
    } else {
        "User-agent: *\nDisallow: /\n"
    };
    ([(axum::http::header::CONTENT_TYPE, "text/plain")], content)
}

/// Favicon handler
pub async fn favicon() -> impl IntoResponse {
    StatusCode::NO_CONTENT
}
