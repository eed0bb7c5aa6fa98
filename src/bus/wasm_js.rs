use super::{accept, BusError, MessageSink, OriginPolicy};
use crate::{
    api::{BusMessage, RawBusMessage},
    util::dom::{js_error_message, origin},
    Error,
};
use gloo_events::EventListener;
use gloo_utils::{format::JsValueSerdeExt, window};
use serde_wasm_bindgen::from_value;
#[cfg(feature = "tracing")]
use tracing::debug;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::MessageEvent;

/// Posts bus messages from the form frame to the window hosting it.
#[derive(Debug, Clone)]
pub struct ParentWindowSink {
    target_origin: String,
}

impl ParentWindowSink {
    /// Creates a sink posting with the target origin `policy` derives from this document.
    pub fn new(policy: &OriginPolicy) -> Result<Self, Error> {
        let own = origin()?;
        Ok(Self {
            target_origin: policy.target_origin(&own).to_string(),
        })
    }

    pub fn target_origin(&self) -> &str {
        &self.target_origin
    }
}

impl MessageSink for ParentWindowSink {
    fn post(&self, message: &BusMessage) -> Result<(), BusError> {
        let value = JsValue::from_serde(message).map_err(|e| BusError::Encode(e.to_string()))?;
        let parent = window()
            .parent()
            .map_err(|e| BusError::Post(js_error_message(&e)))?
            .ok_or_else(|| BusError::Post("No parent window".to_string()))?;
        parent
            .post_message(&value, &self.target_origin)
            .map_err(|e| BusError::Post(js_error_message(&e)))
    }
}

/// Receives bus messages on the current window.
///
/// Messages from origins the policy rejects and payloads that are not bus messages are dropped.
/// The listener is removed when this value is dropped.
pub struct MessageListener {
    _listener: EventListener,
}

impl MessageListener {
    pub fn new<F>(policy: OriginPolicy, mut on_message: F) -> Result<Self, Error>
    where
        F: FnMut(BusMessage) + 'static,
    {
        let own = origin()?;
        let callback = move |event: &web_sys::Event| {
            let event = match event.dyn_ref::<MessageEvent>() {
                Some(event) => event,
                None => return,
            };

            let raw = from_value::<RawBusMessage>(event.data()).map_err(|e| e.to_string());
            match accept(&policy, &own, &event.origin(), raw) {
                Ok(message) => on_message(message),
                Err(_e) => {
                    #[cfg(feature = "tracing")]
                    debug!("Ignoring message: {_e}");
                }
            }
        };

        Ok(Self {
            _listener: EventListener::new(&window(), "message", callback),
        })
    }
}
