use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use async_openai::error::OpenAIError;
use serde::Serialize;
use thiserror::Error;

pub const GENERIC_FAILURE: &str = "Something went wrong";

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Transport failure, timeout or non-2xx status from an outbound call.
    #[error("request to {target} failed")]
    Fetch {
        target: String,
        #[source]
        source: reqwest::Error,
    },

    /// An upstream response lacked a field the pipeline needs.
    #[error("{0}")]
    MissingData(&'static str),

    #[error("completion service failed")]
    Completion(#[from] OpenAIError),

    /// The completion service answered, but with nothing usable.
    #[error("unusable completion: {0}")]
    Enrichment(String),
}

impl ServiceError {
    /// The request URL is dropped from `source`: outbound API calls carry
    /// their key in the query string and this error gets logged.
    pub fn fetch(target: impl Into<String>, source: reqwest::Error) -> Self {
        ServiceError::Fetch {
            target: target.into(),
            source: source.without_url(),
        }
    }
}

#[derive(Serialize)]
pub struct ErrorBody<'a> {
    pub error: &'a str,
}

pub fn error_json(status: StatusCode, message: &str) -> HttpResponse {
    HttpResponse::build(status).json(ErrorBody { error: message })
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::MissingData(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ServiceError::MissingData(message) => error_json(self.status_code(), message),
            _ => error_json(self.status_code(), GENERIC_FAILURE),
        }
    }
}
