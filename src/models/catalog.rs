/// Titles scanned when no catalog is configured
pub const DEFAULT_TITLES: &[&str] = &[
    "Inception",
    "The Dark Knight",
    "Forrest Gump",
    "Pulp Fiction",
    "The Matrix",
    "Gladiator",
    "The Godfather",
    "Fight Club",
    "Interstellar",
    "Avengers: Endgame",
    "The Shawshank Redemption",
    "Titanic",
    "Avatar",
    "Joker",
    "The Lion King",
    "The Avengers",
    "Jurassic Park",
    "Back to the Future",
    "The Departed",
    "Skyfall",
    "Mad Max: Fury Road",
    "Braveheart",
    "Whiplash",
    "Goodfellas",
    "The Prestige",
];

/// Immutable list of candidate titles scanned on every genre search and
/// recommendation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    titles: Vec<String>,
}

impl Catalog {
    /// Creates a catalog, dropping blank entries and trimming the rest
    pub fn new<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let titles = titles
            .into_iter()
            .map(Into::into)
            .map(|title: String| title.trim().to_string())
            .filter(|title| !title.is_empty())
            .collect();

        Self { titles }
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Returns a copy without any entry equal (ignoring case) to `title`
    pub fn without(&self, title: &str) -> Catalog {
        let excluded = title.trim().to_lowercase();
        Self {
            titles: self
                .titles
                .iter()
                .filter(|candidate| candidate.to_lowercase() != excluded)
                .cloned()
                .collect(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(DEFAULT_TITLES.iter().copied())
    }
}
