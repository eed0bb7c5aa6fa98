//! Options for mounting the page and the form in a browser document.

use super::DEFAULT_FORM_ENTRY_POINT;
use crate::{bus::OriginPolicy, form::CLOSE_DELAY};
use std::time::Duration;

/// Element ids of the modal in the page document.
#[derive(Debug, Clone, bon::Builder)]
#[builder(on(String, into))]
pub struct ModalElements {
    #[builder(default = "noteModal".to_string())]
    pub modal: String,
    #[builder(default = "modalOverlay".to_string())]
    pub overlay: String,
    #[builder(default = "noteFrame".to_string())]
    pub frame: String,
    #[builder(default = "modalTitle".to_string())]
    pub title: String,
    #[builder(default = "modalClose".to_string())]
    pub close: String,
}

impl Default for ModalElements {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Element ids of the page document.
#[derive(Debug, Clone, bon::Builder)]
#[builder(on(String, into))]
pub struct NotesPageElements {
    /// The container the cards are drawn into.
    #[builder(default = "notesStack".to_string())]
    pub stack: String,
    #[builder(default = "addNoteBtn".to_string())]
    pub add_button: String,
    #[builder(default)]
    pub modal: ModalElements,
}

impl Default for NotesPageElements {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Element ids of the form document.
#[derive(Debug, Clone, bon::Builder)]
#[builder(on(String, into))]
pub struct NoteFormElements {
    #[builder(default = "noteForm".to_string())]
    pub form: String,
    #[builder(default = "noteTitle".to_string())]
    pub title: String,
    #[builder(default = "noteContent".to_string())]
    pub content: String,
    #[builder(default = "cancelBtn".to_string())]
    pub cancel_button: String,
    /// The inline "title required" message.
    #[builder(default = "titleError".to_string())]
    pub title_error: String,
    #[builder(default = "successMessage".to_string())]
    pub success_message: String,
}

impl Default for NoteFormElements {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Options for [`NotesPage::mount`](crate::page::NotesPage::mount).
#[derive(Debug, Clone, bon::Builder)]
#[builder(on(String, into))]
pub struct NotesPageOptions {
    /// Root of the notes API. Relative values are resolved against the page origin. Defaults
    /// to [`DEFAULT_API_PATH`](super::DEFAULT_API_PATH).
    pub api_base: Option<String>,
    /// Route the modal frame loads the form from.
    #[builder(default = DEFAULT_FORM_ENTRY_POINT.to_string())]
    pub form_entry_point: String,
    /// Origins bus messages are accepted from.
    #[builder(default)]
    pub origin_policy: OriginPolicy,
    #[builder(default)]
    pub elements: NotesPageElements,
}

impl Default for NotesPageOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Options for [`NoteForm::mount`](crate::form::NoteForm::mount).
#[derive(Debug, Clone, bon::Builder)]
#[builder(on(String, into))]
pub struct NoteFormOptions {
    /// Root of the notes API. Relative values are resolved against the form origin.
    pub api_base: Option<String>,
    /// Origin bus messages are posted to.
    #[builder(default)]
    pub origin_policy: OriginPolicy,
    /// Time the success message stays visible before the modal is closed.
    #[builder(default = CLOSE_DELAY)]
    pub close_delay: Duration,
    #[builder(default)]
    pub elements: NoteFormElements,
}

impl Default for NoteFormOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}
