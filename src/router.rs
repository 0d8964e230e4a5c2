use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::db::TriviaStorage;
use crate::error::TriviaError;
use crate::handlers::{categories, questions, quizzes};

/// Shared application context handed to every handler.
#[derive(Clone)]
pub struct TriviaState {
    pub storage: TriviaStorage,
}

impl TriviaState {
    pub fn new(storage: TriviaStorage) -> Self {
        Self { storage }
    }
}

/// Every route is served both at the root and under `/api`.
pub fn trivia_router(state: TriviaState) -> Router {
    Router::new()
        .merge(api_routes())
        .nest("/api", api_routes())
        .fallback(not_found)
        .with_state(state)
}

fn api_routes() -> Router<TriviaState> {
    Router::new()
        .route("/categories", get(categories::list_categories))
        .route(
            "/categories/{id}/questions",
            get(categories::questions_by_category),
        )
        .route(
            "/questions",
            get(questions::list_questions).post(questions::create_question),
        )
        .route("/questions/search", post(questions::search_questions))
        .route("/questions/{id}", delete(questions::delete_question))
        .route("/quizzes", post(quizzes::play_quiz))
        .method_not_allowed_fallback(method_not_allowed)
}

async fn not_found() -> TriviaError {
    TriviaError::NotFound
}

async fn method_not_allowed() -> TriviaError {
    TriviaError::MethodNotAllowed
}
