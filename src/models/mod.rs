mod catalog;
mod episode;
mod movie;

pub use catalog::{Catalog, DEFAULT_TITLES};
pub use episode::{EpisodeRecord, EpisodeRef};
pub use movie::{
    GenreMatch, MovieDetails, MovieRecord, OmdbMovie, Recommendation, SourceRating,
};
