use axum::{Json, extract::State, http::StatusCode};
use tracing::info;

use crate::config::QUESTIONS_PER_PAGE;
use crate::db::models::category_map;
use crate::middleware::{IdPath, TriviaJson, TriviaQuery};
use crate::service::pagination::{parse_page, select_page};
use crate::service::search::search;
use crate::types::{
    CreateQuestionRequest, CreatedResponse, DeletedResponse, QuestionListResponse,
    QuestionPageResponse, SearchRequest,
};
use crate::{TriviaError, router::TriviaState};

/// Query pairs in request order; repeated keys are kept.
type QueryPairs = Vec<(String, String)>;

/// GET /questions?page=N
///
/// Only the first `page` value counts when the parameter is repeated.
pub async fn list_questions(
    State(state): State<TriviaState>,
    TriviaQuery(query): TriviaQuery<QueryPairs>,
) -> Result<Json<QuestionPageResponse>, TriviaError> {
    let raw_page = query
        .iter()
        .find(|(key, _)| key == "page")
        .map(|(_, value)| value.as_str());
    let page = parse_page(raw_page);
    let questions = state.storage.list_questions().await?;
    let visible = select_page(&questions, page, QUESTIONS_PER_PAGE)?.to_vec();
    let categories = state.storage.list_categories().await?;

    Ok(Json(QuestionPageResponse {
        success: true,
        total_questions: questions.len(),
        questions: visible,
        categories: category_map(categories),
        current_category: None,
    }))
}

/// POST /questions
pub async fn create_question(
    State(state): State<TriviaState>,
    TriviaJson(body): TriviaJson<CreateQuestionRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), TriviaError> {
    let new_question = body.validate()?;
    let category = new_question.category;
    let id = state.storage.insert_question(new_question).await?;
    info!(id, category, "question created");
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            success: true,
            created: id,
        }),
    ))
}

/// DELETE /questions/{id}
pub async fn delete_question(
    State(state): State<TriviaState>,
    IdPath(id): IdPath,
) -> Result<Json<DeletedResponse>, TriviaError> {
    state.storage.delete_question(id).await?;
    info!(id, "question deleted");
    Ok(Json(DeletedResponse {
        success: true,
        deleted: id,
    }))
}

/// POST /questions/search
pub async fn search_questions(
    State(state): State<TriviaState>,
    TriviaJson(body): TriviaJson<SearchRequest>,
) -> Result<Json<QuestionListResponse>, TriviaError> {
    let questions = state.storage.list_questions().await?;
    let found = search(questions, &body.search_term);
    Ok(Json(QuestionListResponse::new(found, None)))
}
