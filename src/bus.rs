//! The cross-frame message bus between the note form and the page hosting it.
//!
//! Delivery is at-most-once with no acknowledgment. Both messages are idempotent for the
//! receiver, so a message that arrives when nobody is listening is simply lost.

use crate::api::{BusMessage, RawBusMessage};
use thiserror::Error;

#[cfg(feature = "wasm-js")]
mod wasm_js;

#[cfg(feature = "wasm-js")]
pub use wasm_js::{MessageListener, ParentWindowSink};

/// The error type for the message bus.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BusError {
    /// The message could not be handed to the receiving window.
    #[error("Failed to post message: {0}")]
    Post(String),
    /// The message could not be converted to its wire shape.
    #[error("Failed to encode message: {0}")]
    Encode(String),
    /// An incoming message was not a recognised bus message.
    #[error("Unrecognised message: {0}")]
    Decode(String),
    /// An incoming message came from an origin the policy does not accept.
    #[error("Message from rejected origin: {0}")]
    Origin(String),
}

/// Which sender origins a receiver accepts, and which target origin a sender posts to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OriginPolicy {
    /// Only the receiving document's own origin.
    #[default]
    SameOrigin,
    /// Exactly the given origin, e.g. `https://notes.example.com`.
    Exact(String),
    /// Any origin. Posting uses the `*` target origin.
    Any,
}

impl OriginPolicy {
    /// Returns whether a message from `sender_origin` is accepted by a document at `own_origin`.
    pub fn accepts(&self, sender_origin: &str, own_origin: &str) -> bool {
        match self {
            OriginPolicy::SameOrigin => sender_origin == own_origin,
            OriginPolicy::Exact(origin) => sender_origin == origin,
            OriginPolicy::Any => true,
        }
    }

    /// Returns the target origin to post with from a document at `own_origin`.
    pub fn target_origin<'a>(&'a self, own_origin: &'a str) -> &'a str {
        match self {
            OriginPolicy::SameOrigin => own_origin,
            OriginPolicy::Exact(origin) => origin,
            OriginPolicy::Any => "*",
        }
    }
}

/// Sends bus messages to the other side of the frame boundary.
pub trait MessageSink {
    /// Posts a single message. There is no acknowledgment and no retry.
    fn post(&self, message: &BusMessage) -> Result<(), BusError>;
}

impl<S: MessageSink + ?Sized> MessageSink for &S {
    fn post(&self, message: &BusMessage) -> Result<(), BusError> {
        (**self).post(message)
    }
}

/// Checks the origin of an incoming message and decodes it.
///
/// `raw` is the result of deserializing the event data; a deserialization failure is reported
/// as [`BusError::Decode`].
pub fn accept(
    policy: &OriginPolicy,
    own_origin: &str,
    sender_origin: &str,
    raw: Result<RawBusMessage, String>,
) -> Result<BusMessage, BusError> {
    if !policy.accepts(sender_origin, own_origin) {
        return Err(BusError::Origin(sender_origin.to_string()));
    }
    raw.and_then(|raw| raw.kind()).map_err(BusError::Decode)
}
