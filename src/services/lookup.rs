use crate::{
    error::{AppError, AppResult},
    models::{EpisodeRecord, EpisodeRef, MovieRecord},
    services::providers::MetadataProvider,
};

/// Looks up a single title; any failure is surfaced to the caller
pub async fn get_movie(provider: &dyn MetadataProvider, title: &str) -> AppResult<MovieRecord> {
    let title = title.trim();
    if title.is_empty() {
        return Err(AppError::InvalidInput(
            "Missing 'title' query parameter".to_string(),
        ));
    }

    provider.lookup_title(title).await.into_result()
}

/// Looks up a single series episode; any failure is surfaced to the caller
pub async fn get_episode(
    provider: &dyn MetadataProvider,
    series_title: &str,
    episode: EpisodeRef,
) -> AppResult<EpisodeRecord> {
    let series_title = series_title.trim();
    if series_title.is_empty() {
        return Err(AppError::InvalidInput(
            "Missing series_title, season, or episode_number".to_string(),
        ));
    }

    provider
        .lookup_episode(series_title, episode)
        .await
        .into_result()
}

/// Parses a 1-based season or episode number from a query value
pub fn parse_episode_number(name: &str, raw: &str) -> AppResult<u32> {
    match raw.trim().parse::<u32>() {
        Ok(number) if number > 0 => Ok(number),
        _ => Err(AppError::InvalidInput(format!(
            "'{}' must be a positive integer, got '{}'",
            name, raw
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::providers::{LookupOutcome, MockMetadataProvider};
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_get_movie_trims_title() {
        let mut provider = MockMetadataProvider::new();
        provider
            .expect_lookup_title()
            .with(eq("Heat"))
            .times(1)
            .returning(|title| LookupOutcome::Found(MovieRecord::new(title, "8.3", "", "", "")));

        let movie = get_movie(&provider, "  Heat ").await.unwrap();
        assert_eq!(movie.title, "Heat");
    }

    #[tokio::test]
    async fn test_get_movie_not_found() {
        let mut provider = MockMetadataProvider::new();
        provider
            .expect_lookup_title()
            .returning(|_| LookupOutcome::NotFound("Movie not found!".to_string()));

        let result = get_movie(&provider, "Nope").await;
        assert!(matches!(result, Err(AppError::NotFound(msg)) if msg == "Movie not found!"));
    }

    #[tokio::test]
    async fn test_get_episode_passes_coordinates() {
        let mut provider = MockMetadataProvider::new();
        provider
            .expect_lookup_episode()
            .with(
                eq("Breaking Bad"),
                eq(EpisodeRef {
                    season: 5,
                    episode: 14,
                }),
            )
            .times(1)
            .returning(|_, _| {
                LookupOutcome::Found(EpisodeRecord {
                    title: "Ozymandias".to_string(),
                    ..Default::default()
                })
            });

        let episode = get_episode(
            &provider,
            "Breaking Bad",
            EpisodeRef {
                season: 5,
                episode: 14,
            },
        )
        .await
        .unwrap();
        assert_eq!(episode.title, "Ozymandias");
    }

    #[test]
    fn test_parse_episode_number() {
        assert_eq!(parse_episode_number("season", "3").unwrap(), 3);
        assert_eq!(parse_episode_number("season", " 12 ").unwrap(), 12);
        assert!(parse_episode_number("season", "0").is_err());
        assert!(parse_episode_number("episode_number", "two").is_err());
        assert!(parse_episode_number("episode_number", "-1").is_err());
    }
}
