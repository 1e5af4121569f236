use thiserror::Error;

use crate::shared::errors::ErrorKind;

use super::value_objects::ProviderKind;

/// One provider operation's failure, carrying everything the batch log
/// needs: the classification, the URL (or logical operation) attempted,
/// and the raw response body or exception text.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{kind}: {request}: {detail}")]
pub struct ProviderFailure {
    pub kind: ErrorKind,
    pub request: String,
    pub detail: String,
}

pub type ProviderResult<T> = Result<T, ProviderFailure>;

impl ProviderFailure {
    pub fn new(kind: ErrorKind, request: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            kind,
            request: request.into(),
            detail: detail.into(),
        }
    }

    /// Transport failure or an explicit non-success status from the provider.
    pub fn network(request: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::NetworkError, request, detail)
    }

    /// Well-formed response without the expected result fields.
    pub fn no_result(request: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(ErrorKind::NoResult, request, body)
    }

    /// A required input field was blank; no network call was made.
    pub fn empty_input(operation: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::Empty, operation, detail)
    }

    /// Non-finite or unparseable coordinates; no network call was made.
    pub fn invalid_coord(operation: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidCoord, operation, detail)
    }

    /// The selected provider cannot perform this operation at all.
    pub fn unsupported(kind: ProviderKind, operation: &str) -> Self {
        Self::new(
            ErrorKind::ConfigError,
            operation,
            format!("{} is not supported by the {} provider", operation, kind),
        )
    }
}
