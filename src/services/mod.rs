pub mod genre_search;
pub mod lookup;
pub mod matcher;
pub mod providers;
pub mod ranking;
pub mod recommendations;
pub mod scanner;

pub use providers::{LookupOutcome, MetadataProvider, OmdbProvider};
