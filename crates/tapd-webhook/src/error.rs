//! Error types for decoding and dispatch.

use std::fmt;

use thiserror::Error;

use crate::kind::EventKind;

/// Error returned by a listener.
///
/// Listeners are supplied by the embedding application, so any error type
/// can be boxed into this.
pub type ListenerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors produced while turning a raw payload into a typed event.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The payload has no string `event` field.
    #[error("webhook event type not found")]
    MissingDiscriminator,

    /// The `event` field names a kind with no registered payload shape.
    #[error("webhook event type [{0}] not supported")]
    UnsupportedKind(String),

    /// The payload is not a JSON object or does not fit the payload shape.
    #[error("malformed webhook payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
}

impl DecodeError {
    /// Returns true when the discriminator was present but unknown.
    ///
    /// Lets callers tell a vocabulary extension upstream apart from garbage.
    pub fn is_unsupported_kind(&self) -> bool {
        matches!(self, DecodeError::UnsupportedKind(_))
    }
}

/// A single failed listener invocation.
#[derive(Debug)]
pub struct ListenerFailure {
    /// Position of the listener in its bucket, when known.
    pub index: Option<usize>,
    /// What went wrong.
    pub error: ListenerError,
}

impl fmt::Display for ListenerFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(index) => write!(f, "listener #{}: {}", index, self.error),
            None => write!(f, "listener: {}", self.error),
        }
    }
}

/// Errors produced by [`Dispatcher`](crate::Dispatcher).
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The payload could not be decoded; no listener was invoked.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// One or more listeners failed. Every listener in the bucket still ran.
    #[error("{} of {attempted} listener(s) failed for {kind}: {}", .failures.len(), first_message(.failures))]
    Delivery {
        /// Kind of the dispatched event.
        kind: EventKind,
        /// Number of listeners invoked.
        attempted: usize,
        /// Failures in the order they were observed.
        failures: Vec<ListenerFailure>,
    },
}

impl DispatchError {
    /// Returns the first observed listener failure, if any.
    pub fn first(&self) -> Option<&ListenerFailure> {
        match self {
            DispatchError::Delivery { failures, .. } => failures.first(),
            DispatchError::Decode(_) => None,
        }
    }

    /// Returns all listener failures (empty for decode errors).
    pub fn failures(&self) -> &[ListenerFailure] {
        match self {
            DispatchError::Delivery { failures, .. } => failures,
            DispatchError::Decode(_) => &[],
        }
    }

    /// Returns true if the error happened before any listener ran.
    pub fn is_decode(&self) -> bool {
        matches!(self, DispatchError::Decode(_))
    }
}

fn first_message(failures: &[ListenerFailure]) -> String {
    failures
        .first()
        .map(|f| f.to_string())
        .unwrap_or_default()
}

/// Result type alias for decode operations.
pub type Result<T> = std::result::Result<T, DecodeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_display() {
        assert_eq!(
            DecodeError::MissingDiscriminator.to_string(),
            "webhook event type not found"
        );
        assert_eq!(
            DecodeError::UnsupportedKind("bogus::kind".into()).to_string(),
            "webhook event type [bogus::kind] not supported"
        );
    }

    #[test]
    fn test_is_unsupported_kind() {
        assert!(DecodeError::UnsupportedKind("x".into()).is_unsupported_kind());
        assert!(!DecodeError::MissingDiscriminator.is_unsupported_kind());
    }

    #[test]
    fn test_delivery_error_reports_first_failure() {
        let err = DispatchError::Delivery {
            kind: EventKind::BugCreate,
            attempted: 3,
            failures: vec![
                ListenerFailure {
                    index: Some(1),
                    error: "boom".into(),
                },
                ListenerFailure {
                    index: None,
                    error: "later".into(),
                },
            ],
        };

        assert_eq!(err.failures().len(), 2);
        assert_eq!(err.first().unwrap().index, Some(1));
        assert!(!err.is_decode());
        assert_eq!(
            err.to_string(),
            "2 of 3 listener(s) failed for bug::create: listener #1: boom"
        );
    }

    #[test]
    fn test_decode_variant_is_transparent() {
        let err = DispatchError::from(DecodeError::MissingDiscriminator);
        assert!(err.is_decode());
        assert!(err.first().is_none());
        assert_eq!(err.to_string(), "webhook event type not found");
    }
}
