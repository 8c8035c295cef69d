use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of join-form errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum JoinErrorKind {
    /// The request never produced a readable response.
    Transport,
    /// The status container was not on the page when the handler wrote to it.
    StatusContainerMissing,
    /// `config.toml` could not be parsed.
    InvalidConfig,
    /// The join URL could not be encoded as a QR code.
    QrEncoding,
}

impl fmt::Display for JoinErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JoinErrorKind::Transport => write!(f, "Transport"),
            JoinErrorKind::StatusContainerMissing => write!(f, "StatusContainerMissing"),
            JoinErrorKind::InvalidConfig => write!(f, "InvalidConfig"),
            JoinErrorKind::QrEncoding => write!(f, "QrEncoding"),
        }
    }
}

/// Error raised while submitting the join form or loading its configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JoinError {
    pub kind: JoinErrorKind,
    pub message: String,
}

impl JoinError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: JoinErrorKind::Transport,
            message: message.into(),
        }
    }

    /// The status container identified by `element_id` could not be written.
    pub fn status_container_missing(element_id: &str) -> Self {
        Self {
            kind: JoinErrorKind::StatusContainerMissing,
            message: format!("no element with id `{element_id}` to render into"),
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self {
            kind: JoinErrorKind::InvalidConfig,
            message: message.into(),
        }
    }

    pub fn qr_encoding(message: impl Into<String>) -> Self {
        Self {
            kind: JoinErrorKind::QrEncoding,
            message: message.into(),
        }
    }

    pub fn is_transport(&self) -> bool {
        self.kind == JoinErrorKind::Transport
    }
}

impl fmt::Display for JoinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for JoinError {}
