/// Movie metadata provider abstraction
///
/// A provider resolves one free-text title (optionally narrowed to a series
/// episode) per call. Calls never fail with an `Err`: every outcome, including
/// transport and decoding problems, is reported as a `LookupOutcome` so that
/// callers decide whether a failure is fatal or skippable.
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    error::{AppError, AppResult},
    models::{EpisodeRecord, EpisodeRef, MovieRecord},
};

pub mod omdb;

pub use omdb::OmdbProvider;

/// Message used when the provider flags a miss without saying why
const DEFAULT_NOT_FOUND: &str = "Movie not found!";

/// Result of a single provider lookup
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome<T> {
    Found(T),
    /// The provider answered, explicitly reporting no match
    NotFound(String),
    /// The provider could not be reached or answered with an unexpected status
    TransportError(String),
    /// The provider answered with a payload that could not be decoded
    ParseError(String),
}

impl<T> LookupOutcome<T> {
    /// Short label for logs and failure counts
    pub fn kind(&self) -> &'static str {
        match self {
            LookupOutcome::Found(_) => "found",
            LookupOutcome::NotFound(_) => "not_found",
            LookupOutcome::TransportError(_) => "transport_error",
            LookupOutcome::ParseError(_) => "parse_error",
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> LookupOutcome<U> {
        match self {
            LookupOutcome::Found(value) => LookupOutcome::Found(f(value)),
            LookupOutcome::NotFound(msg) => LookupOutcome::NotFound(msg),
            LookupOutcome::TransportError(msg) => LookupOutcome::TransportError(msg),
            LookupOutcome::ParseError(msg) => LookupOutcome::ParseError(msg),
        }
    }

    /// Converts the outcome of a lookup whose failure is fatal to the request
    pub fn into_result(self) -> AppResult<T> {
        match self {
            LookupOutcome::Found(value) => Ok(value),
            LookupOutcome::NotFound(msg) => Err(AppError::NotFound(msg)),
            LookupOutcome::TransportError(msg) => Err(AppError::ExternalApi(msg)),
            LookupOutcome::ParseError(msg) => Err(AppError::Decode(msg)),
        }
    }
}

/// Trait for movie metadata providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Look up a movie or series by title
    async fn lookup_title(&self, title: &str) -> LookupOutcome<MovieRecord>;

    /// Look up a single episode of a series
    async fn lookup_episode(
        &self,
        series_title: &str,
        episode: EpisodeRef,
    ) -> LookupOutcome<EpisodeRecord>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Decodes a provider payload, honouring the explicit not-found envelope
///
/// OMDb signals a miss with `"Response": "False"` plus an `"Error"` message.
/// Anything that is not a JSON object, or whose fields have the wrong types,
/// is a parse error.
pub fn decode_payload<T: DeserializeOwned>(body: &str) -> LookupOutcome<T> {
    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) => return LookupOutcome::ParseError(format!("invalid JSON: {}", e)),
    };

    let Some(object) = value.as_object() else {
        return LookupOutcome::ParseError("expected a JSON object".to_string());
    };

    if object.get("Response").is_some_and(is_negative_flag) {
        let message = object
            .get("Error")
            .and_then(Value::as_str)
            .filter(|msg| !msg.trim().is_empty())
            .unwrap_or(DEFAULT_NOT_FOUND);
        return LookupOutcome::NotFound(message.to_string());
    }

    match serde_json::from_value::<T>(value) {
        Ok(record) => LookupOutcome::Found(record),
        Err(e) => LookupOutcome::ParseError(e.to_string()),
    }
}

fn is_negative_flag(flag: &Value) -> bool {
    match flag {
        Value::Bool(value) => !value,
        Value::String(value) => value.trim().eq_ignore_ascii_case("false"),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OmdbMovie;

    #[test]
    fn test_decode_found() {
        let outcome: LookupOutcome<OmdbMovie> =
            decode_payload(r#"{"Title": "Heat", "imdbRating": "8.3", "Response": "True"}"#);
        match outcome {
            LookupOutcome::Found(movie) => {
                assert_eq!(movie.title, "Heat");
                assert_eq!(movie.imdb_rating, "8.3");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_decode_found_yields_whole_record() {
        let outcome: LookupOutcome<OmdbMovie> =
            decode_payload(r#"{"Title": "Ronin", "Director": "John Frankenheimer"}"#);
        assert_eq!(
            outcome,
            LookupOutcome::Found(OmdbMovie {
                title: "Ronin".to_string(),
                director: "John Frankenheimer".to_string(),
                ..Default::default()
            })
        );
    }

    #[test]
    fn test_decode_not_found_echoes_provider_message() {
        let outcome: LookupOutcome<OmdbMovie> =
            decode_payload(r#"{"Response": "False", "Error": "Movie not found!"}"#);
        assert_eq!(outcome, LookupOutcome::NotFound("Movie not found!".to_string()));
    }

    #[test]
    fn test_decode_not_found_boolean_flag() {
        let outcome: LookupOutcome<OmdbMovie> =
            decode_payload(r#"{"Response": false, "Error": "Incorrect IMDb ID."}"#);
        assert_eq!(outcome, LookupOutcome::NotFound("Incorrect IMDb ID.".to_string()));
    }

    #[test]
    fn test_decode_not_found_without_message() {
        let outcome: LookupOutcome<OmdbMovie> = decode_payload(r#"{"Response": "false"}"#);
        assert_eq!(outcome, LookupOutcome::NotFound(DEFAULT_NOT_FOUND.to_string()));
    }

    #[test]
    fn test_decode_malformed_payloads() {
        let garbage: LookupOutcome<OmdbMovie> = decode_payload("<html>502 Bad Gateway</html>");
        assert_eq!(garbage.kind(), "parse_error");

        let array: LookupOutcome<OmdbMovie> = decode_payload(r#"[{"Title": "Heat"}]"#);
        assert_eq!(array.kind(), "parse_error");

        let wrong_type: LookupOutcome<OmdbMovie> = decode_payload(r#"{"Title": 42}"#);
        assert_eq!(wrong_type.kind(), "parse_error");
    }

    #[test]
    fn test_into_result_maps_each_failure() {
        assert!(matches!(
            LookupOutcome::<()>::NotFound("gone".into()).into_result(),
            Err(AppError::NotFound(msg)) if msg == "gone"
        ));
        assert!(matches!(
            LookupOutcome::<()>::TransportError("dns".into()).into_result(),
            Err(AppError::ExternalApi(_))
        ));
        assert!(matches!(
            LookupOutcome::<()>::ParseError("eof".into()).into_result(),
            Err(AppError::Decode(_))
        ));
        assert!(matches!(LookupOutcome::Found(7).into_result(), Ok(7)));
    }
}
