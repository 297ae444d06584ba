use crate::models::MovieRecord;

/// Match categories in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    Genre,
    Director,
    Actor,
}

/// Candidates classified against a seed, each list in discovery order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tiers {
    pub genre: Vec<MovieRecord>,
    pub director: Vec<MovieRecord>,
    pub actor: Vec<MovieRecord>,
}

impl Tiers {
    /// Tiers from highest to lowest priority
    pub fn into_ordered(self) -> [Vec<MovieRecord>; 3] {
        [self.genre, self.director, self.actor]
    }

    pub fn len(&self) -> usize {
        self.genre.len() + self.director.len() + self.actor.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Splits a comma-separated attribute into normalized, non-empty tokens
fn tokens(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// True when `other` shares a token with the already normalized list
///
/// Comparison ignores case and surrounding whitespace. Empty tokens never
/// match, so two records that both lack a director are not related.
fn overlaps(normalized: &[String], other: &str) -> bool {
    if normalized.is_empty() {
        return false;
    }
    tokens(other).iter().any(|token| normalized.contains(token))
}

/// True when `genres` lists `target` as one of its tokens (whole token, not substring)
pub fn matches_genre(genres: &str, target: &str) -> bool {
    let target = target.trim().to_lowercase();
    if target.is_empty() {
        return false;
    }
    tokens(genres).contains(&target)
}

/// Seed attributes tokenized once for repeated comparisons
struct SeedProfile {
    title: String,
    genres: Vec<String>,
    directors: Vec<String>,
    actors: Vec<String>,
}

impl SeedProfile {
    fn new(base: &MovieRecord) -> Self {
        Self {
            title: base.title.trim().to_lowercase(),
            genres: tokens(&base.genre),
            directors: tokens(&base.director),
            actors: tokens(&base.actors),
        }
    }

    fn is_seed(&self, candidate: &MovieRecord) -> bool {
        candidate.title.trim().to_lowercase() == self.title
    }

    fn tier_of(&self, candidate: &MovieRecord) -> Option<MatchTier> {
        if self.is_seed(candidate) {
            return None;
        }
        if overlaps(&self.genres, &candidate.genre) {
            Some(MatchTier::Genre)
        } else if overlaps(&self.directors, &candidate.director) {
            Some(MatchTier::Director)
        } else if overlaps(&self.actors, &candidate.actors) {
            Some(MatchTier::Actor)
        } else {
            None
        }
    }
}

/// Partitions candidates into genre, director and actor tiers
///
/// Each candidate lands in at most one tier; candidates matching nothing are dropped.
pub fn classify<I>(base: &MovieRecord, candidates: I) -> Tiers
where
    I: IntoIterator<Item = MovieRecord>,
{
    let seed = SeedProfile::new(base);
    let mut tiers = Tiers::default();

    for candidate in candidates {
        match seed.tier_of(&candidate) {
            Some(MatchTier::Genre) => tiers.genre.push(candidate),
            Some(MatchTier::Director) => tiers.director.push(candidate),
            Some(MatchTier::Actor) => tiers.actor.push(candidate),
            None => {
                tracing::trace!(title = %candidate.title, "Candidate matched no tier");
            }
        }
    }

    tiers
}
