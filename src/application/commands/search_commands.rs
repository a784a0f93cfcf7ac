// src/application/commands/search_commands.rs
//
// Search Command Handlers

use crate::application::dto::SearchResultDto;
use crate::application::error_handling::{ErrorResponse, IntoErrorResponse, Operation};
use crate::application::state::AppState;

/// Search as the user types. Short queries clear the results and stale
/// responses come back as `Superseded`.
pub async fn search_catalog(
    state: &AppState,
    query: &str,
) -> Result<SearchResultDto, ErrorResponse> {
    let outcome = state.search.search(query).await.for_op(Operation::Search)?;
    Ok(SearchResultDto::from_outcome(&outcome, |id| state.is_favorite(id)))
}

/// Next page of an already shown search
pub async fn search_more(
    state: &AppState,
    query: &str,
    offset: u32,
) -> Result<SearchResultDto, ErrorResponse> {
    let outcome = state
        .search
        .search_page(query, offset)
        .await
        .for_op(Operation::Search)?;
    Ok(SearchResultDto::from_outcome(&outcome, |id| state.is_favorite(id)))
}

/// The search box was closed; drop whatever is still in flight
pub fn cancel_search(state: &AppState) {
    state.search.cancel_pending();
}

pub fn recent_searches(state: &AppState) -> Vec<String> {
    state.search.recent_searches()
}

pub fn clear_recent_searches(state: &AppState) -> Result<(), ErrorResponse> {
    state.search.clear_recent().for_op(Operation::Search)
}
