use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::{EpisodeRecord, EpisodeRef, GenreMatch, MovieDetails, Recommendation},
    services::{genre_search, lookup, recommendations},
};

use super::AppState;

// Query parameters
//
// Every field is optional so that a missing parameter produces our own 400
// message rather than the extractor's rejection.

#[derive(Debug, Deserialize)]
pub struct MovieQuery {
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EpisodeQuery {
    pub series_title: Option<String>,
    pub season: Option<String>,
    pub episode_number: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GenreQuery {
    pub genre: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    pub favorite_movie: Option<String>,
}

/// Returns the trimmed value, or `None` when absent or blank
fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// Liveness probe
pub async fn ping() -> Json<Value> {
    Json(json!({ "message": "pong" }))
}

/// Look up a single movie by title
pub async fn get_movie(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<MovieQuery>,
) -> AppResult<Json<MovieDetails>> {
    let title = present(params.title)
        .ok_or_else(|| AppError::InvalidInput("Missing 'title' query parameter".to_string()))?;

    tracing::info!(request_id = %request_id, title = %title, "Processing movie lookup");

    let movie = lookup::get_movie(state.provider.as_ref(), &title).await?;
    Ok(Json(MovieDetails::from(movie)))
}

/// Look up a single episode of a series
pub async fn get_episode(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<EpisodeQuery>,
) -> AppResult<Json<EpisodeRecord>> {
    let (Some(series_title), Some(season), Some(episode_number)) = (
        present(params.series_title),
        present(params.season),
        present(params.episode_number),
    ) else {
        return Err(AppError::InvalidInput(
            "Missing series_title, season, or episode_number".to_string(),
        ));
    };

    let episode = EpisodeRef {
        season: lookup::parse_episode_number("season", &season)?,
        episode: lookup::parse_episode_number("episode_number", &episode_number)?,
    };

    tracing::info!(
        request_id = %request_id,
        series_title = %series_title,
        season = episode.season,
        episode = episode.episode,
        "Processing episode lookup"
    );

    let record = lookup::get_episode(state.provider.as_ref(), &series_title, episode).await?;
    Ok(Json(record))
}

/// Catalog titles in a genre, best rated first
pub async fn search_by_genre(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<GenreQuery>,
) -> AppResult<Json<Vec<GenreMatch>>> {
    let genre = present(params.genre)
        .ok_or_else(|| AppError::InvalidInput("Missing genre query parameter".to_string()))?;

    tracing::info!(request_id = %request_id, genre = %genre, "Processing genre search");

    let movies = genre_search::search_by_genre(
        state.provider.as_ref(),
        &state.catalog,
        &genre,
        &state.settings,
    )
    .await?;

    Ok(Json(movies.into_iter().map(GenreMatch::from).collect()))
}

/// Recommendations for fans of a favorite movie
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<RecommendationQuery>,
) -> AppResult<Json<Vec<Recommendation>>> {
    let favorite = present(params.favorite_movie).ok_or_else(|| {
        AppError::InvalidInput("Missing favorite_movie query parameter".to_string())
    })?;

    tracing::info!(
        request_id = %request_id,
        favorite = %favorite,
        "Processing recommendation request"
    );

    let movies = recommendations::get_recommendations(
        state.provider.as_ref(),
        &state.catalog,
        &favorite,
        &state.settings,
    )
    .await?;

    tracing::info!(
        request_id = %request_id,
        count = movies.len(),
        "Recommendations completed"
    );

    Ok(Json(movies.into_iter().map(Recommendation::from).collect()))
}
