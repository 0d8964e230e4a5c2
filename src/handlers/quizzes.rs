use axum::{Json, extract::State};
use tracing::debug;

use crate::middleware::TriviaJson;
use crate::service::quiz::{QuizScope, next_question};
use crate::types::{QuizRequest, QuizResponse};
use crate::{TriviaError, router::TriviaState};

/// POST /quizzes -> one random unseen question, or `null` when done.
pub async fn play_quiz(
    State(state): State<TriviaState>,
    TriviaJson(body): TriviaJson<QuizRequest>,
) -> Result<Json<QuizResponse>, TriviaError> {
    let scope = body.scope()?;
    let pool = match scope {
        QuizScope::All => state.storage.list_questions().await?,
        QuizScope::Category(id) => state.storage.list_questions_by_category(id).await?,
    };

    let previous = body.previous_ids();
    let question = next_question(pool, &previous, &mut rand::rng());
    debug!(
        ?scope,
        previous = previous.len(),
        picked = ?question.as_ref().map(|q| q.id),
        "quiz round"
    );

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}
