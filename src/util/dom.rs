use crate::Error;
use gloo_utils::document;
use wasm_bindgen::{JsCast, JsValue};

/// Looks up the element with the given id and casts it to `T`.
pub(crate) fn element<T: JsCast>(id: &str) -> Result<T, Error> {
    document()
        .get_element_by_id(id)
        .ok_or_else(|| Error::Dom(format!("Missing element #{id}")))?
        .dyn_into::<T>()
        .map_err(|_| Error::Dom(format!("Element #{id} has an unexpected type")))
}

/// Shows or hides an element through its inline `display` style.
pub(crate) fn set_displayed(element: &web_sys::HtmlElement, displayed: bool) {
    let style = element.style();
    let result = if displayed {
        style.set_property("display", "block")
    } else {
        style.set_property("display", "none")
    };
    if let Err(_e) = result {
        #[cfg(feature = "tracing")]
        tracing::error!("Could not change display style: {}", js_error_message(&_e));
    }
}

/// The page origin, e.g. `https://notes.example.com`.
pub(crate) fn origin() -> Result<String, Error> {
    Ok(gloo_utils::window().location().origin()?)
}

pub(crate) fn js_error_message(error: &JsValue) -> String {
    error
        .as_string()
        .or_else(|| {
            error
                .dyn_ref::<web_sys::js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{error:?}"))
}
