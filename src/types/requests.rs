use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::HashSet;

use crate::db::models::NewQuestion;
use crate::error::TriviaError;
use crate::service::quiz::QuizScope;

/// Body of `POST /questions`.
///
/// Fields are kept as raw JSON so that a missing field (400) can be told
/// apart from a present one of the wrong type (422). A literal `null` counts
/// as present.
#[derive(Debug, Default, Deserialize)]
pub struct CreateQuestionRequest {
    #[serde(default, deserialize_with = "present")]
    pub question: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub answer: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub category: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub difficulty: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl CreateQuestionRequest {
    pub fn validate(self) -> Result<NewQuestion, TriviaError> {
        let question = self.question.ok_or(TriviaError::MissingField("question"))?;
        let answer = self.answer.ok_or(TriviaError::MissingField("answer"))?;
        let category = self.category.ok_or(TriviaError::MissingField("category"))?;
        let difficulty = self
            .difficulty
            .ok_or(TriviaError::MissingField("difficulty"))?;

        let Value::String(question) = question else {
            return Err(TriviaError::InvalidType("question"));
        };
        let Value::String(answer) = answer else {
            return Err(TriviaError::InvalidType("answer"));
        };
        let difficulty = difficulty
            .as_i64()
            .ok_or(TriviaError::InvalidType("difficulty"))?;
        let category = category_id(&category).ok_or(TriviaError::InvalidType("category"))?;

        Ok(NewQuestion {
            question,
            answer,
            category,
            difficulty,
        })
    }
}

/// Category ids arrive either as JSON integers or as numeric strings.
pub fn category_id(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Body of `POST /questions/search`.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

/// Body of `POST /quizzes`.
///
/// `previous_questions` entries that cannot equal a question id (strings,
/// fractional numbers, nulls) are ignored rather than failing the request.
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    pub previous_questions: Vec<Value>,
    pub quiz_category: QuizCategory,
}

#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    pub id: Value,
}

impl QuizRequest {
    pub fn scope(&self) -> Result<QuizScope, TriviaError> {
        category_id(&self.quiz_category.id)
            .map(QuizScope::from_category_id)
            .ok_or_else(|| TriviaError::BadRequest("quiz_category.id is not an id".to_string()))
    }

    pub fn previous_ids(&self) -> HashSet<i64> {
        self.previous_questions.iter().filter_map(question_id).collect()
    }
}

/// A JSON number equal to an integer id; `3.0` counts as `3`.
fn question_id(value: &Value) -> Option<i64> {
    let Value::Number(n) = value else {
        return None;
    };
    n.as_i64().or_else(|| {
        n.as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
            .map(|f| f as i64)
    })
}
