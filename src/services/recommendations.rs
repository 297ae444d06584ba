use tokio::time::Instant;

use crate::{
    config::ScanSettings,
    error::{AppError, AppResult},
    models::{Catalog, MovieRecord},
    services::{matcher, providers::MetadataProvider, ranking, scanner},
};

/// Generates recommendations for viewers of `favorite`
///
/// The favorite is resolved first; a miss, transport or decoding failure on
/// that lookup fails the request before any catalog title is fetched. The
/// catalog is then scanned and every candidate classified against the seed:
/// genre overlap beats director overlap, which beats actor overlap. Genre
/// matches are always kept, lower tiers only top up to the recommendation
/// limit, and the pool is ranked by rating and capped at that limit.
pub async fn get_recommendations(
    provider: &dyn MetadataProvider,
    catalog: &Catalog,
    favorite: &str,
    settings: &ScanSettings,
) -> AppResult<Vec<MovieRecord>> {
    let favorite = favorite.trim();
    if favorite.is_empty() {
        return Err(AppError::InvalidInput(
            "Missing favorite_movie query parameter".to_string(),
        ));
    }

    let deadline = Instant::now() + settings.request_timeout;

    let seed = match tokio::time::timeout_at(deadline, provider.lookup_title(favorite)).await {
        Ok(outcome) => outcome.into_result().map_err(|e| {
            if !matches!(e, AppError::NotFound(_)) {
                tracing::error!(favorite = %favorite, error = %e, "Seed lookup failed");
            }
            e
        })?,
        Err(_) => {
            return Err(AppError::Timeout(format!(
                "lookup of '{}' did not complete in time",
                favorite
            )))
        }
    };

    tracing::info!(
        favorite = %favorite,
        seed = %seed.title,
        "Resolved seed title"
    );

    let candidates = catalog.without(&seed.title);
    let report = scanner::scan(provider, &candidates, settings.concurrency, deadline).await;

    let tiers = matcher::classify(&seed, report.records);

    if tiers.is_empty() {
        tracing::info!(
            seed = %seed.title,
            scanned = candidates.len(),
            failures = report.failures.len(),
            "No catalog title shares genre, director or actor with the seed"
        );
        return Ok(Vec::new());
    }

    tracing::info!(
        seed = %seed.title,
        matched = tiers.len(),
        genre_matches = tiers.genre.len(),
        director_matches = tiers.director.len(),
        actor_matches = tiers.actor.len(),
        "Classified candidates"
    );

    Ok(ranking::merge_and_rank(
        tiers.into_ordered(),
        settings.recommendation_limit,
    ))
}
