pub mod heuristic;
pub mod value_objects;

pub use heuristic::{recommendation_title, select_filter, similar_candidates, upcoming_holiday};
pub use value_objects::{
    DayPart, Holiday, RecommendationInteraction, RecommendationKind, SeasonBucket,
};
