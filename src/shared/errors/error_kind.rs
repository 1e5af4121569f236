use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed classification of why a batch item failed.
///
/// The serialized form is what goes out on the progress channel as
/// `errorType`, so the snake_case spelling is part of the wire contract.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// A required input field was blank
    Empty,
    /// A coordinate string or column value could not be parsed
    InvalidCoord,
    /// Malformed coordinate text on a route leg
    Invalid,
    /// Missing endpoint or config for the selected provider/mode
    ConfigError,
    /// Token acquisition for the custom provider failed
    AuthError,
    /// Transport failure or explicit non-success status from a provider
    NetworkError,
    /// Well-formed response lacking the expected data
    NoResult,
    /// The inbound start message could not be decoded
    ParseError,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Empty => "empty",
            ErrorKind::InvalidCoord => "invalid_coord",
            ErrorKind::Invalid => "invalid",
            ErrorKind::ConfigError => "config_error",
            ErrorKind::AuthError => "auth_error",
            ErrorKind::NetworkError => "network_error",
            ErrorKind::NoResult => "no_result",
            ErrorKind::ParseError => "parse_error",
        };
        write!(f, "{}", name)
    }
}
