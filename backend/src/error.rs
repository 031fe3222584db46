use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use common::requests::{FieldError, ParamError};
use log::{debug, error};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Everything that can go wrong while serving a news request.
///
/// Handlers return `Result<_, NewsError>` and actix turns the error into a
/// JSON response through the `ResponseError` impl below.
#[derive(Debug, Error)]
pub enum NewsError {
    /// The create request broke one or more field rules.
    #[error("the given data was invalid")]
    Validation(Vec<FieldError>),

    /// A pagination parameter was not a number or out of bounds.
    #[error(transparent)]
    InvalidParameter(#[from] ParamError),

    #[error("news {0} not found")]
    NotFound(i64),

    #[error("news store failure: {0}")]
    Store(#[from] rusqlite::Error),
}

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
}

impl ErrorBody {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            error: status.as_u16(),
            message: message.into(),
            errors: Vec::new(),
        }
    }
}

/// Wraps an extractor failure (bad path segment, query string or body) so it
/// answers with an `ErrorBody` instead of actix's plain-text default.
pub fn rejected<E>(err: E, status: StatusCode) -> actix_web::Error
where
    E: fmt::Debug + fmt::Display + 'static,
{
    debug!("rejected request: {}", err);
    let response = HttpResponse::build(status).json(ErrorBody::new(status, err.to_string()));
    InternalError::from_response(err, response).into()
}

impl ResponseError for NewsError {
    fn status_code(&self) -> StatusCode {
        match self {
            NewsError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            NewsError::InvalidParameter(_) => StatusCode::BAD_REQUEST,
            NewsError::NotFound(_) => StatusCode::NOT_FOUND,
            NewsError::Store(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let body = match self {
            NewsError::Validation(errors) => ErrorBody {
                errors: errors.clone(),
                ..ErrorBody::new(status, self.to_string())
            },
            NewsError::Store(e) => {
                error!("news store failure: {}", e);
                ErrorBody::new(status, "the news store is unavailable")
            }
            _ => ErrorBody::new(status, self.to_string()),
        };
        HttpResponse::build(status).json(body)
    }
}
