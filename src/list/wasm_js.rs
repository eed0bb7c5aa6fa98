use super::{ACTIVE_CLASS, CARD_CLASS, NOTE_ID_ATTRIBUTE};
use crate::{note::NoteId, util::dom::element, Error};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

/// The container the note cards are drawn into.
#[derive(Debug, Clone)]
pub struct StackView {
    container: HtmlElement,
}

impl StackView {
    /// Looks up the container by id.
    pub fn new(container_id: &str) -> Result<Self, Error> {
        Ok(Self {
            container: element(container_id)?,
        })
    }

    pub fn container(&self) -> &HtmlElement {
        &self.container
    }

    /// Replaces every card with `markup`.
    pub fn draw(&self, markup: &str) {
        self.container.set_inner_html(markup);
    }

    /// Moves the active highlight to the card of `id` without redrawing.
    pub fn highlight(&self, id: NoteId) -> Result<(), Error> {
        let cards = self
            .container
            .query_selector_all(&format!(".{CARD_CLASS}"))?;
        for index in 0..cards.length() {
            let Some(card) = cards.item(index).and_then(|node| node.dyn_into::<Element>().ok())
            else {
                continue;
            };
            let active = card.get_attribute(NOTE_ID_ATTRIBUTE) == Some(id.to_string());
            card.class_list().toggle_with_force(ACTIVE_CLASS, active)?;
        }
        Ok(())
    }

    /// The id of the card a click landed on, if it landed on one.
    pub fn card_id(event: &web_sys::Event) -> Option<NoteId> {
        let target = event.target()?.dyn_into::<Element>().ok()?;
        let card = target
            .closest(&format!("[{NOTE_ID_ATTRIBUTE}]"))
            .ok()??;
        card.get_attribute(NOTE_ID_ATTRIBUTE)?.parse().ok()
    }
}
