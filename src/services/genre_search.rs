use tokio::time::Instant;

use crate::{
    config::ScanSettings,
    error::{AppError, AppResult},
    models::{Catalog, MovieRecord},
    services::{matcher, providers::MetadataProvider, ranking, scanner},
};

/// Finds catalog titles tagged with `genre`, best rated first
///
/// Every catalog title is looked up; records whose genre list contains `genre`
/// as a whole token (ignoring case) are kept, ranked by rating and capped at
/// the configured genre search limit.
pub async fn search_by_genre(
    provider: &dyn MetadataProvider,
    catalog: &Catalog,
    genre: &str,
    settings: &ScanSettings,
) -> AppResult<Vec<MovieRecord>> {
    let genre = genre.trim();
    if genre.is_empty() {
        return Err(AppError::InvalidInput(
            "Missing genre query parameter".to_string(),
        ));
    }

    let deadline = Instant::now() + settings.request_timeout;
    let report = scanner::scan(provider, catalog, settings.concurrency, deadline).await;

    let matches: Vec<MovieRecord> = report
        .records
        .into_iter()
        .filter(|movie| matcher::matches_genre(&movie.genre, genre))
        .collect();

    tracing::info!(
        genre = %genre,
        matches = matches.len(),
        limit = settings.genre_search_limit,
        "Genre search completed"
    );

    Ok(ranking::rank_and_cap(matches, settings.genre_search_limit))
}
