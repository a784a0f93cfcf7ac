// src/application/commands/recommendation_commands.rs
//
// Recommendation Command Handlers

use crate::application::dto::RecommendationDto;
use crate::application::error_handling::{ErrorResponse, IntoErrorResponse, Operation};
use crate::application::state::AppState;
use crate::domain::{RecommendationInteraction, RecommendationKind};

/// One recommendation row. `kind` is "similar", "mood", "time" or "event".
pub async fn get_recommendation(
    state: &AppState,
    kind: &str,
) -> Result<RecommendationDto, ErrorResponse> {
    let kind: RecommendationKind = kind.parse().map_err(ErrorResponse::validation)?;

    // Read the count up front; the store lock is not held across the fetch
    let favorites_count = state
        .favorites_lock()
        .map(|favorites| favorites.favorites().len())
        .for_op(Operation::Recommend)?;

    let recommendation = state
        .recommendations
        .recommend(kind, favorites_count)
        .await
        .for_op(Operation::Recommend)?;

    Ok(RecommendationDto::from_recommendation(&recommendation, |id| {
        state.is_favorite(id)
    }))
}

/// Newest first
pub fn recommendation_history(state: &AppState) -> Vec<RecommendationInteraction> {
    state.recommendations.history()
}
