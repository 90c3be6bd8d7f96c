//! Errors surfaced by the game server client.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Message shown for every failure that is not a rule violation.
pub const GENERIC_FAILURE_MESSAGE: &str = "There is a problem with the server, please try again!";

/// Error body the game server sends with a non-success status.
#[derive(Debug, Clone, PartialEq, Eq, Display, Getters, Serialize, Deserialize)]
#[display("HTTP {}: {}", http_status, error_message)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Server-side time of the failure, in the server's own format.
    #[serde(default)]
    timestamp: Option<String>,
    /// HTTP status code.
    http_status: u16,
    /// Human-readable reason.
    error_message: String,
}

impl ErrorResponse {
    /// Creates an error body without a timestamp.
    #[instrument(skip(error_message))]
    pub fn new(http_status: u16, error_message: impl Into<String>) -> Self {
        Self {
            timestamp: None,
            http_status,
            error_message: error_message.into(),
        }
    }
}

/// Failure of a single game server request.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ClientError {
    /// The server refused the move (HTTP 403).
    #[display("Rule violation: {}", response)]
    RuleViolation {
        /// Error body from the server.
        #[error(not(source))]
        response: ErrorResponse,
    },
    /// Any other non-success status.
    #[display("Server returned {}: {}", status, message)]
    Status {
        /// HTTP status code.
        #[error(not(source))]
        status: u16,
        /// Message from the error body, or the status reason.
        #[error(not(source))]
        message: String,
    },
    /// The request never produced a response.
    #[display("Transport failure: {}", message)]
    Network {
        /// Description from the HTTP stack.
        #[error(not(source))]
        message: String,
    },
    /// A success response whose body is not a valid game.
    #[display("Malformed response: {}", message)]
    Decode {
        /// Decoder message.
        #[error(not(source))]
        message: String,
    },
}

impl ClientError {
    /// HTTP status, when the server answered.
    #[instrument]
    pub fn http_status(&self) -> Option<u16> {
        match self {
            ClientError::RuleViolation { response } => Some(response.http_status),
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Network { .. } | ClientError::Decode { .. } => None,
        }
    }

    /// Reason text for logs and rule-violation warnings.
    #[instrument]
    pub fn error_message(&self) -> String {
        match self {
            ClientError::RuleViolation { response } => response.error_message.clone(),
            ClientError::Status { message, .. }
            | ClientError::Network { message }
            | ClientError::Decode { message } => message.clone(),
        }
    }

    /// True when the server rejected the request as against the rules.
    #[instrument]
    pub fn is_rule_violation(&self) -> bool {
        matches!(self, ClientError::RuleViolation { .. })
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode {
                message: err.to_string(),
            }
        } else {
            ClientError::Network {
                message: err.to_string(),
            }
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode {
            message: err.to_string(),
        }
    }
}
