use crate::{bus::BusError, form::ValidationError, repository::RepositoryError};
use thiserror::Error;

/// The error type for the note stack client.
#[derive(Error, Debug)]
pub enum Error {
    /// An error from the notes API.
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
    /// The form input was rejected before reaching the network.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    /// An error from the cross-frame message bus.
    #[error("Message bus error: {0}")]
    Bus(#[from] BusError),
    /// A required element is missing or a browser API threw.
    #[error("DOM error: {0}")]
    Dom(String),
}

#[cfg(feature = "wasm-js")]
impl From<wasm_bindgen::JsValue> for Error {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Error::Dom(crate::util::dom::js_error_message(&value))
    }
}
