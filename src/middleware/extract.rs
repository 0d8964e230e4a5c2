use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::TriviaError;

/// JSON body extractor whose rejections are `TriviaError::BadRequest`, so
/// unparsable bodies get the same error envelope as every other failure.
pub struct TriviaJson<T>(pub T);

impl<S, T> FromRequest<S> for TriviaJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = TriviaError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(TriviaJson(value)),
            Err(rejection) => {
                debug!(reason = %rejection.body_text(), "rejected request body");
                Err(TriviaError::BadRequest(rejection.body_text()))
            }
        }
    }
}

/// Query string extractor with the same rejection handling as `TriviaJson`.
pub struct TriviaQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for TriviaQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = TriviaError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(TriviaQuery(value)),
            Err(rejection) => {
                debug!(reason = %rejection.body_text(), "rejected query string");
                Err(TriviaError::BadRequest(rejection.body_text()))
            }
        }
    }
}

/// Single integer path parameter. Anything that is not an integer is a 404,
/// the same as a path that matches no route.
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub i64);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = TriviaError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|_| TriviaError::NotFound)?;
        Ok(IdPath(id))
    }
}
