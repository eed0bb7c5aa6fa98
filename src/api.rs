use crate::note::NotePayload;
use serde::{Deserialize, Serialize};
#[cfg(feature = "tracing")]
use tracing::debug;

/// The `type` tag of a [`BusMessage::NoteSaved`] message.
pub const NOTE_SAVED: &str = "noteSaved";
/// The `type` tag of a [`BusMessage::CloseModal`] message.
pub const CLOSE_MODAL: &str = "closeModal";

/// A message exchanged between the note form frame and the page hosting it.
///
/// On the wire this is `{type: "noteSaved", data: {...}}` or `{type: "closeModal"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum BusMessage {
    /// A note was written to the repository. Carries the submitted payload when the sender
    /// provided a readable one.
    ///
    /// The receiver treats it as "persisted state changed, refresh", whatever the payload.
    NoteSaved(Option<NotePayload>),
    /// The receiver must close the modal hosting the form.
    CloseModal,
}

/// A message as received from another document, before its `type` is checked.
///
/// This struct is used to accept any structured payload first and reject unknown kinds in
/// [`RawBusMessage::kind`], so a message of an unknown kind never reaches the handlers.
#[derive(Debug, Clone, Deserialize)]
pub struct RawBusMessage {
    /// The kind of the message. Either "noteSaved" or "closeModal".
    #[serde(rename = "type")]
    kind: String,
    /// The payload. Optional for "noteSaved", ignored for "closeModal".
    #[serde(default)]
    data: Option<serde_json::Value>,
}

impl RawBusMessage {
    /// Returns the typed message, or a description of why it was not recognised.
    ///
    /// Only the `type` decides whether a message is accepted. A `noteSaved` payload that is
    /// missing or unreadable still yields [`BusMessage::NoteSaved`], without the payload.
    pub fn kind(&self) -> Result<BusMessage, String> {
        match self.kind.as_str() {
            NOTE_SAVED => Ok(BusMessage::NoteSaved(self.payload())),
            CLOSE_MODAL => Ok(BusMessage::CloseModal),
            other => Err(format!("Unknown message type: {other}")),
        }
    }

    fn payload(&self) -> Option<NotePayload> {
        let data = self.data.clone().filter(|data| !data.is_null())?;
        match serde_json::from_value(data) {
            Ok(payload) => Some(payload),
            Err(_e) => {
                #[cfg(feature = "tracing")]
                debug!("Ignoring malformed noteSaved data: {_e}");
                None
            }
        }
    }
}
