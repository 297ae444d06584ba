use serde::{Deserialize, Serialize};

/// Season/episode coordinates used to narrow a series lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpisodeRef {
    pub season: u32,
    pub episode: u32,
}

/// A single series episode, as returned by OMDb and echoed to clients
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EpisodeRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub released: String,
    #[serde(default)]
    pub season: String,
    #[serde(default)]
    pub episode: String,
    #[serde(rename = "imdbRating", default)]
    pub imdb_rating: String,
    #[serde(default)]
    pub plot: String,
}
