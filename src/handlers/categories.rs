use axum::{Json, extract::State};

use crate::db::models::category_map;
use crate::middleware::IdPath;
use crate::types::{CategoriesResponse, QuestionListResponse};
use crate::{TriviaError, router::TriviaState};

/// GET /categories
pub async fn list_categories(
    State(state): State<TriviaState>,
) -> Result<Json<CategoriesResponse>, TriviaError> {
    let categories = state.storage.list_categories().await?;
    Ok(Json(CategoriesResponse {
        success: true,
        categories: category_map(categories),
    }))
}

/// GET /categories/{id}/questions
///
/// An id with no questions (or no category at all) yields an empty list.
pub async fn questions_by_category(
    State(state): State<TriviaState>,
    IdPath(id): IdPath,
) -> Result<Json<QuestionListResponse>, TriviaError> {
    let questions = state.storage.list_questions_by_category(id).await?;
    Ok(Json(QuestionListResponse::new(questions, Some(id))))
}
