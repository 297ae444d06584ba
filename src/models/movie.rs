use serde::{Deserialize, Serialize};

/// A movie as resolved by a single metadata lookup
///
/// Records are built once from a provider payload and never mutated; every
/// list-valued attribute (genre, director, actors) keeps the provider's raw
/// comma-separated form so matching can tokenize it on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieRecord {
    pub title: String,
    /// Provider-formatted year, may be a range such as "2008–2013"
    pub year: String,
    /// Raw rating text; "N/A" and empty are legitimate values
    pub imdb_rating: String,
    pub genre: String,
    pub director: String,
    pub actors: String,
    pub plot: String,
    pub country: String,
    pub awards: String,
    pub ratings: Vec<SourceRating>,
}

impl MovieRecord {
    /// Creates a record carrying just the attributes used for matching and ranking
    pub fn new(
        title: impl Into<String>,
        imdb_rating: impl Into<String>,
        genre: impl Into<String>,
        director: impl Into<String>,
        actors: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            year: String::new(),
            imdb_rating: imdb_rating.into(),
            genre: genre.into(),
            director: director.into(),
            actors: actors.into(),
            plot: String::new(),
            country: String::new(),
            awards: String::new(),
            ratings: Vec::new(),
        }
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = year.into();
        self
    }
}

/// Rating attributed to a single review source (IMDb, Rotten Tomatoes, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SourceRating {
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub value: String,
}

// ============================================================================
// OMDb API Types
// ============================================================================

/// Raw title payload from OMDb
///
/// Every field is optional on the wire; absent fields become empty strings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OmdbMovie {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub year: String,
    #[serde(rename = "imdbRating", default)]
    pub imdb_rating: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub director: String,
    #[serde(default)]
    pub actors: String,
    #[serde(default)]
    pub plot: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub awards: String,
    #[serde(default)]
    pub ratings: Vec<SourceRating>,
}

impl From<OmdbMovie> for MovieRecord {
    fn from(movie: OmdbMovie) -> Self {
        MovieRecord {
            title: movie.title,
            year: movie.year,
            imdb_rating: movie.imdb_rating,
            genre: movie.genre,
            director: movie.director,
            actors: movie.actors,
            plot: movie.plot,
            country: movie.country,
            awards: movie.awards,
            ratings: movie.ratings,
        }
    }
}

// ============================================================================
// Response Types
// ============================================================================

/// Full detail view returned by the single-title lookup
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct MovieDetails {
    pub title: String,
    pub year: String,
    pub plot: String,
    pub country: String,
    pub awards: String,
    pub director: String,
    pub ratings: Vec<SourceRating>,
}

impl From<MovieRecord> for MovieDetails {
    fn from(movie: MovieRecord) -> Self {
        Self {
            title: movie.title,
            year: movie.year,
            plot: movie.plot,
            country: movie.country,
            awards: movie.awards,
            director: movie.director,
            ratings: movie.ratings,
        }
    }
}

/// Entry in a genre search result
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GenreMatch {
    pub title: String,
    pub year: String,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: String,
    pub genre: String,
}

impl From<MovieRecord> for GenreMatch {
    fn from(movie: MovieRecord) -> Self {
        Self {
            title: movie.title,
            year: movie.year,
            imdb_rating: movie.imdb_rating,
            genre: movie.genre,
        }
    }
}

/// Entry in a recommendation result
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Recommendation {
    pub title: String,
    pub year: String,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: String,
    pub genre: String,
    pub director: String,
    pub actors: String,
}

impl From<MovieRecord> for Recommendation {
    fn from(movie: MovieRecord) -> Self {
        Self {
            title: movie.title,
            year: movie.year,
            imdb_rating: movie.imdb_rating,
            genre: movie.genre,
            director: movie.director,
            actors: movie.actors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_omdb_movie_deserialization() {
        let json = r#"{
            "Title": "Inception",
            "Year": "2010",
            "Genre": "Action, Adventure, Sci-Fi",
            "Director": "Christopher Nolan",
            "Actors": "Leonardo DiCaprio, Joseph Gordon-Levitt, Elliot Page",
            "Plot": "A thief who steals corporate secrets...",
            "Country": "United States, United Kingdom",
            "Awards": "Won 4 Oscars",
            "Ratings": [{"Source": "Internet Movie Database", "Value": "8.8/10"}],
            "imdbRating": "8.8",
            "Response": "True"
        }"#;

        let movie: MovieRecord = serde_json::from_str::<OmdbMovie>(json).unwrap().into();
        assert_eq!(movie.title, "Inception");
        assert_eq!(movie.imdb_rating, "8.8");
        assert_eq!(movie.director, "Christopher Nolan");
        assert_eq!(movie.ratings.len(), 1);
        assert_eq!(movie.ratings[0].source, "Internet Movie Database");
        assert_eq!(movie.ratings[0].value, "8.8/10");
    }

    #[test]
    fn test_omdb_movie_missing_fields_default_to_empty() {
        let movie: OmdbMovie = serde_json::from_str(r#"{"Title": "Obscure"}"#).unwrap();
        assert_eq!(movie.title, "Obscure");
        assert_eq!(movie.imdb_rating, "");
        assert_eq!(movie.director, "");
        assert!(movie.ratings.is_empty());
    }

    #[test]
    fn test_recommendation_serialization_field_names() {
        let movie = MovieRecord::new(
            "Heat",
            "8.3",
            "Action, Crime",
            "Michael Mann",
            "Al Pacino, Robert De Niro",
        )
        .with_year("1995");

        let value = serde_json::to_value(Recommendation::from(movie)).unwrap();
        assert_eq!(value["Title"], "Heat");
        assert_eq!(value["Year"], "1995");
        assert_eq!(value["imdbRating"], "8.3");
        assert_eq!(value["Director"], "Michael Mann");
        assert_eq!(value["Actors"], "Al Pacino, Robert De Niro");
    }

    #[test]
    fn test_genre_match_omits_people() {
        let movie = MovieRecord::new("Heat", "8.3", "Crime", "Michael Mann", "Al Pacino");
        let value = serde_json::to_value(GenreMatch::from(movie)).unwrap();
        assert_eq!(value["Genre"], "Crime");
        assert!(value.get("Director").is_none());
        assert!(value.get("Actors").is_none());
    }
}
