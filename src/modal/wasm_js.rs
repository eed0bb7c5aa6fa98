use super::ModalView;
use crate::{
    option::wasm_js::ModalElements,
    util::dom::{element, set_displayed},
    Error,
};
use gloo_utils::body;
#[cfg(feature = "tracing")]
use crate::util::dom::js_error_message;
#[cfg(feature = "tracing")]
use tracing::error;
use web_sys::{HtmlElement, HtmlIFrameElement};

const OPEN_CLASS: &str = "open";
const BLANK_SRC: &str = "about:blank";

/// The modal elements of the page document.
#[derive(Debug, Clone)]
pub struct DomModalView {
    modal: HtmlElement,
    overlay: HtmlElement,
    frame: HtmlIFrameElement,
    title: HtmlElement,
}

impl DomModalView {
    /// Looks up every modal element by id.
    pub fn new(elements: &ModalElements) -> Result<Self, Error> {
        Ok(Self {
            modal: element(&elements.modal)?,
            overlay: element(&elements.overlay)?,
            frame: element(&elements.frame)?,
            title: element(&elements.title)?,
        })
    }

    pub fn overlay(&self) -> &HtmlElement {
        &self.overlay
    }
}

impl ModalView for DomModalView {
    fn set_title(&self, title: &str) {
        self.title.set_text_content(Some(title));
    }

    fn set_frame_src(&self, src: Option<&str>) {
        self.frame.set_src(src.unwrap_or(BLANK_SRC));
    }

    fn set_visible(&self, visible: bool) {
        set_displayed(&self.overlay, visible);
        if let Err(_e) = self
            .modal
            .class_list()
            .toggle_with_force(OPEN_CLASS, visible)
        {
            #[cfg(feature = "tracing")]
            error!("Could not toggle modal: {}", js_error_message(&_e));
        }
    }

    fn set_scroll_locked(&self, locked: bool) {
        let style = body().style();
        let result = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
        if let Err(_e) = result {
            #[cfg(feature = "tracing")]
            error!("Could not change page scrolling: {}", js_error_message(&_e));
        }
    }
}
