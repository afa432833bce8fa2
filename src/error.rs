//! Errors that can happen when talking to a todo backend

use thiserror::Error;

/// How a failure is classified.
///
/// Every kind is handled the same way by the [`Planner`](crate::controller::Planner): it is logged, and the local state is left untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request was rejected or the server was unreachable
    NetworkFailure,
    /// The server answered with a non-2xx status
    ServerFailure,
    /// The input was empty, nothing has been sent
    ValidationSkip,
    /// The client is misconfigured (e.g. invalid base URL)
    Configuration,
}

#[derive(Debug, Error)]
pub enum TodoError {
    #[error("network failure: {0}")]
    Network(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("unexpected HTTP status code {status}")]
    Server { status: u16 },

    #[error("unable to decode the server reply: {0}")]
    Payload(String),

    #[error("task text is empty")]
    EmptyInput,

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("{0} cannot be used as a base URL")]
    CannotBeABase(url::Url),
}

impl TodoError {
    /// A network failure that does not originate from an actual HTTP stack (used by mocks)
    pub fn network<S: ToString>(description: S) -> Self {
        TodoError::Network(description.to_string().into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            TodoError::Network(_) => ErrorKind::NetworkFailure,
            TodoError::Server { .. } => ErrorKind::ServerFailure,
            TodoError::Payload(_) => ErrorKind::ServerFailure,
            TodoError::EmptyInput => ErrorKind::ValidationSkip,
            TodoError::InvalidUrl(_) => ErrorKind::Configuration,
            TodoError::CannotBeABase(_) => ErrorKind::Configuration,
        }
    }
}

impl From<reqwest::Error> for TodoError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return TodoError::Payload(err.to_string());
        }
        match err.status() {
            Some(status) => TodoError::Server { status: status.as_u16() },
            None => TodoError::Network(Box::new(err)),
        }
    }
}
