use std::io;

use thiserror::Error;

use crate::http::date::DateError;
use crate::http::response::StatusCode;

/// Why a handler refused a request. Each variant maps to one status code.
#[derive(Debug, Error)]
pub enum CrudError {
    #[error("missing required header: {0}")]
    MissingHeader(&'static str),

    #[error("request has no context")]
    MissingContext,

    #[error("Content-Length is required")]
    LengthRequired,

    #[error("only HTML documents may be accessed: {0}")]
    Forbidden(String),

    #[error("file not found: {0}")]
    NotFound(String),

    #[error("failed to open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Date(#[from] DateError),

    #[error("unsupported method: {0}")]
    UnsupportedMethod(String),
}

impl CrudError {
    /// Classifies a failed open of `path`.
    pub fn from_io(path: &str, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            CrudError::NotFound(path.to_string())
        } else {
            CrudError::Io {
                path: path.to_string(),
                source,
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            CrudError::LengthRequired => StatusCode::LengthRequired,
            CrudError::Forbidden(_) => StatusCode::Forbidden,
            CrudError::NotFound(_) => StatusCode::NotFound,
            CrudError::MissingHeader(_)
            | CrudError::MissingContext
            | CrudError::Io { .. }
            | CrudError::Date(_)
            | CrudError::UnsupportedMethod(_) => StatusCode::BadRequest,
        }
    }
}
