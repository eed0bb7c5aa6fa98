//! The modal dialog hosting the note form frame.

use crate::{api::BusMessage, note::NoteId};
#[cfg(feature = "tracing")]
use tracing::debug;

#[cfg(feature = "wasm-js")]
mod wasm_js;

#[cfg(feature = "wasm-js")]
pub use wasm_js::DomModalView;

/// Modal title while creating a note.
pub const NEW_NOTE_TITLE: &str = "New Note";
/// Modal title while editing a note.
pub const EDIT_NOTE_TITLE: &str = "Edit Note";

/// The document the form frame is pointed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormTarget {
    /// An empty form that creates a note.
    New,
    /// A form that loads and updates the given note.
    Edit(NoteId),
}

impl FormTarget {
    /// Builds the frame URL from the form entry point, adding `id` for edits.
    pub fn url(&self, entry_point: &str) -> String {
        match self {
            FormTarget::New => entry_point.to_string(),
            FormTarget::Edit(id) => {
                let query = url::form_urlencoded::Serializer::new(String::new())
                    .append_pair("id", &id.to_string())
                    .finish();
                let separator = if entry_point.contains('?') { '&' } else { '?' };
                format!("{entry_point}{separator}{query}")
            }
        }
    }

    /// The label shown above the frame.
    pub fn title(&self) -> &'static str {
        match self {
            FormTarget::New => NEW_NOTE_TITLE,
            FormTarget::Edit(_) => EDIT_NOTE_TITLE,
        }
    }
}

/// Lifecycle state of the modal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open(FormTarget),
}

/// The page elements the [`ModalController`] drives.
pub trait ModalView {
    /// Sets the label above the frame.
    fn set_title(&self, title: &str);
    /// Points the frame at `src`, or unloads it when `None`.
    fn set_frame_src(&self, src: Option<&str>);
    /// Shows or hides the modal and its overlay.
    fn set_visible(&self, visible: bool);
    /// Locks or unlocks scrolling of the page behind the modal.
    fn set_scroll_locked(&self, locked: bool);
}

/// Opens and closes the modal.
///
/// Only one form document is ever live: opening while already open unloads the current frame
/// before loading the new target.
#[derive(Debug)]
pub struct ModalController<V> {
    view: V,
    entry_point: String,
    state: ModalState,
}

impl<V: ModalView> ModalController<V> {
    /// Creates a closed modal whose frame loads forms from `entry_point`.
    pub fn new(view: V, entry_point: impl Into<String>) -> Self {
        Self {
            view,
            entry_point: entry_point.into(),
            state: ModalState::Closed,
        }
    }

    /// The current lifecycle state.
    pub fn state(&self) -> ModalState {
        self.state
    }

    /// Returns whether a form is currently shown.
    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open(_))
    }

    /// The view this controller drives.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Opens the modal on an empty form.
    pub fn open_new(&mut self) {
        self.open(FormTarget::New);
    }

    /// Opens the modal on the form for note `id`.
    pub fn open_edit(&mut self, id: NoteId) {
        self.open(FormTarget::Edit(id));
    }

    fn open(&mut self, target: FormTarget) {
        if self.is_open() {
            self.close();
        }
        #[cfg(feature = "tracing")]
        debug!("Opening note form: {target:?}");

        self.view.set_title(target.title());
        self.view.set_frame_src(Some(&target.url(&self.entry_point)));
        self.view.set_visible(true);
        self.view.set_scroll_locked(true);
        self.state = ModalState::Open(target);
    }

    /// Closes the modal and unloads the form document.
    ///
    /// Closing an already closed modal does nothing. Returns whether the modal was open.
    pub fn close(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        self.view.set_visible(false);
        self.view.set_frame_src(None);
        self.view.set_scroll_locked(false);
        self.state = ModalState::Closed;
        true
    }

    /// Applies a bus message. Only `closeModal` concerns the modal.
    ///
    /// Returns whether the modal was closed by the message.
    pub fn handle_message(&mut self, message: &BusMessage) -> bool {
        match message {
            BusMessage::CloseModal => self.close(),
            BusMessage::NoteSaved(_) => false,
        }
    }
}
