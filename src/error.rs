//! Error types used when wiring the notifier into a host.
//!
//! This module defines a single error enum:
//!
//! - [`RegisterError`] — raised while binding handlers to a host, or while
//!   parsing an event name received from one.
//!
//! Rendering never fails: malformed payloads degrade to placeholders instead
//! of producing errors. The only fatal condition is a host that cannot accept
//! one of the notifier's event kinds.
//!
//! Like the rest of the crate, the enum provides `as_label`/`as_message`
//! helpers for logs.

use thiserror::Error;

use crate::events::EventKind;

/// # Errors produced while registering with a host.
///
/// These indicate a wiring defect (the host is malformed), not a runtime data
/// problem, and should be reported to whoever assembled the host.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegisterError {
    /// The host does not expose a subscription for this event kind.
    #[error("host does not support event `{kind}`")]
    Unsupported {
        /// The kind the host rejected.
        kind: EventKind,
    },

    /// An event name received from the host is not one of the known kinds.
    #[error("unknown event name `{name}`")]
    UnknownEvent {
        /// The raw name as received.
        name: String,
    },
}

impl RegisterError {
    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use outage_console::{EventKind, RegisterError};
    ///
    /// let err = RegisterError::Unsupported { kind: EventKind::ServiceOk };
    /// assert_eq!(err.as_label(), "register_unsupported");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            RegisterError::Unsupported { .. } => "register_unsupported",
            RegisterError::UnknownEvent { .. } => "register_unknown_event",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            RegisterError::Unsupported { kind } => format!("unsupported: {kind}"),
            RegisterError::UnknownEvent { name } => format!("unknown event: {name:?}"),
        }
    }
}
