// Static lookup from the wall clock to one catalog filter.
// Nothing here adapts to history; the same inputs give the same filter
// (Similar aside, which draws one of its candidates at random).

use chrono::NaiveDateTime;
use rand::seq::SliceRandom;
use rand::Rng;

use super::value_objects::{DayPart, Holiday, RecommendationKind, SeasonBucket};
use crate::domain::catalog::CatalogFilter;

/// Genres offered for "similar" picks, in priority order
pub const SIMILAR_GENRES: [&str; 5] = ["action", "romance", "fantasy", "adventure", "comedy"];

/// At most this many of `SIMILAR_GENRES` are candidates
const SIMILAR_CANDIDATES: usize = 3;

/// Candidate genres for a user with `favorites_count` favorites
pub fn similar_candidates(favorites_count: usize) -> &'static [&'static str] {
    &SIMILAR_GENRES[..favorites_count.min(SIMILAR_CANDIDATES)]
}

/// Pick exactly one filter for `kind` at `now`
pub fn select_filter<R>(
    kind: RecommendationKind,
    now: NaiveDateTime,
    favorites_count: usize,
    rng: &mut R,
) -> CatalogFilter
where
    R: Rng + ?Sized,
{
    match kind {
        RecommendationKind::Similar => similar_candidates(favorites_count)
            .choose(rng)
            .map(|genre| CatalogFilter::category(genre))
            .unwrap_or(CatalogFilter::Trending),
        RecommendationKind::Mood => CatalogFilter::category(DayPart::at(now).genre()),
        RecommendationKind::Time => CatalogFilter::category(SeasonBucket::at(now).genre()),
        RecommendationKind::Event => upcoming_holiday(now)
            .map(|holiday| CatalogFilter::category(holiday.genre()))
            .unwrap_or(CatalogFilter::Trending),
    }
}

/// First holiday (Valentine, Halloween, Christmas) within its lookahead window
pub fn upcoming_holiday(now: NaiveDateTime) -> Option<Holiday> {
    Holiday::all().into_iter().find(|h| h.is_upcoming(now))
}

/// Heading shown above a recommendation row
pub fn recommendation_title(kind: RecommendationKind, now: NaiveDateTime) -> &'static str {
    match kind {
        RecommendationKind::Similar => "🎯 Recommended for You",
        RecommendationKind::Mood => DayPart::at(now).title(),
        RecommendationKind::Time => SeasonBucket::at(now).title(),
        RecommendationKind::Event => "🎉 Special Occasion",
    }
}
