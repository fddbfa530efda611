use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::fetcher::{FetchError, FetchErrorKind};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("not found")]
    NotFound,
    #[error("{0}")]
    InvalidRequest(String),
    #[error("upstream error: {0}")]
    Upstream(FetchError),
    #[error("internal server error")]
    Template(#[from] minijinja::Error),
}

impl Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<FetchError> for Error {
    fn from(e: FetchError) -> Self {
        match e.kind() {
            FetchErrorKind::NotFound => Self::NotFound,
            FetchErrorKind::Network | FetchErrorKind::Malformed => Self::Upstream(e),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match &self {
            Self::Upstream(e) => error!("{e:?}"),
            Self::Template(e) => error!("{e:?}"),
            _ => {}
        }

        (self.status_code(), self.to_string()).into_response()
    }
}
