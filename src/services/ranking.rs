use crate::models::MovieRecord;

/// Parses a provider rating, treating anything unusable as 0.0
///
/// "N/A", empty strings and non-finite values all rank as the lowest rating
/// instead of failing. Negative zero is folded into zero so the two tie.
pub fn parse_rating(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|rating| rating.is_finite())
        .map(|rating| rating + 0.0)
        .unwrap_or(0.0)
}

/// Concatenates tiers in priority order up to `quota`
///
/// The first tier is always taken whole, even past the quota. Every following
/// tier only tops up the slots left over, preserving its own order.
pub fn merge_tiers<I>(tiers: I, quota: usize) -> Vec<MovieRecord>
where
    I: IntoIterator<Item = Vec<MovieRecord>>,
{
    let mut tiers = tiers.into_iter();
    let mut merged = tiers.next().unwrap_or_default();

    for tier in tiers {
        let remaining = quota.saturating_sub(merged.len());
        if remaining == 0 {
            break;
        }
        merged.extend(tier.into_iter().take(remaining));
    }

    merged
}

/// Stable sort by descending rating, then truncate to `cap`
pub fn rank_and_cap(items: Vec<MovieRecord>, cap: usize) -> Vec<MovieRecord> {
    let mut rated: Vec<(f64, MovieRecord)> = items
        .into_iter()
        .map(|movie| (parse_rating(&movie.imdb_rating), movie))
        .collect();

    // `sort_by` is stable, so equal ratings keep their incoming order
    rated.sort_by(|(a, _), (b, _)| b.total_cmp(a));

    rated.into_iter().take(cap).map(|(_, movie)| movie).collect()
}

/// Merges tiers under `quota`, ranks by rating and caps the result at `quota`
pub fn merge_and_rank<I>(tiers: I, quota: usize) -> Vec<MovieRecord>
where
    I: IntoIterator<Item = Vec<MovieRecord>>,
{
    rank_and_cap(merge_tiers(tiers, quota), quota)
}
