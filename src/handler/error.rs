//! Error types for the order handler.

use std::error::Error;
use std::fmt;

use crate::store::StoreError;

/// Everything that can go wrong while handling a request.
///
/// Validation and not-found conditions are detected per-branch before any
/// commit; only genuinely unexpected faults (`Store`, `Other`) reach the
/// 500 path, and their messages are surfaced to the caller verbatim.
#[derive(Debug)]
pub enum HandlerError {
    /// A required body field is absent or empty. Carries the operation's
    /// full required-field list, which is what the message reports.
    MissingFields(&'static [&'static str]),
    /// Lookup by tracking number or id yielded no row.
    NotFound,
    /// Method outside GET / POST / PUT / OPTIONS.
    UnsupportedMethod,
    /// Store error (connect, query, commit).
    Store(StoreError),
    /// Other runtime fault — JSON parse failures land here.
    Other(Box<dyn Error + Send + Sync>),
}

impl fmt::Display for HandlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandlerError::MissingFields(fields) => {
                write!(f, "Необходимы поля: {}", fields.join(", "))
            }
            HandlerError::NotFound => write!(f, "Заказ не найден"),
            HandlerError::UnsupportedMethod => write!(f, "Метод не поддерживается"),
            HandlerError::Store(e) => write!(f, "{}", e),
            HandlerError::Other(e) => write!(f, "{}", e),
        }
    }
}

impl Error for HandlerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            HandlerError::Store(e) => Some(e),
            HandlerError::Other(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

impl From<StoreError> for HandlerError {
    fn from(err: StoreError) -> Self {
        HandlerError::Store(err)
    }
}

impl From<serde_json::Error> for HandlerError {
    fn from(err: serde_json::Error) -> Self {
        HandlerError::Other(Box::new(err))
    }
}

impl HandlerError {
    /// Map this error to an HTTP status code.
    pub fn status_code(&self) -> u16 {
        match self {
            HandlerError::MissingFields(_) => 400,
            HandlerError::NotFound => 404,
            HandlerError::UnsupportedMethod => 405,
            HandlerError::Store(_) => 500,
            HandlerError::Other(_) => 500,
        }
    }
}
