//! Form and query extractors whose rejections use the JSON error body.

use axum::{
    Form,
    extract::{
        FromRequest, FromRequestParts, Query, Request,
        rejection::{FormRejection, QueryRejection},
    },
    http::request::Parts,
    response::Response,
};

use super::handlers::error_response;

/// `Form` that rejects with `{error, code}` instead of plain text.
#[derive(Debug)]
pub struct FormBody<T>(pub T);

impl<S, T> FromRequest<S> for FormBody<T>
where
    Form<T>: FromRequest<S, Rejection = FormRejection>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Form::<T>::from_request(req, state).await {
            Ok(Form(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "Form rejected");
                Err(error_response(rejection.status(), rejection.body_text()))
            }
        }
    }
}

/// `Query` that rejects with `{error, code}` instead of plain text.
#[derive(Debug)]
pub struct QueryParams<T>(pub T);

impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    Query<T>: FromRequestParts<S, Rejection = QueryRejection>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "Query rejected");
                Err(error_response(rejection.status(), rejection.body_text()))
            }
        }
    }
}
