//! The main page: the note stack plus the modal hosting the form.
//!
//! [`NotesPage`] owns the state of the page document and routes bus messages to it. Saving a
//! note always ends in a full reload of the stack, never in a local merge of the saved payload.

use crate::{
    api::BusMessage,
    list::NoteList,
    modal::{ModalController, ModalView},
    note::{Note, NoteId},
    repository::RepositoryError,
};
#[cfg(feature = "tracing")]
use tracing::debug;

#[cfg(feature = "wasm-js")]
mod wasm_js;

#[cfg(feature = "wasm-js")]
pub use wasm_js::NotesPageHandle;

/// Follow-up work a handled message asks of the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    /// Nothing to do.
    None,
    /// Reload the note stack from the repository and draw it again.
    Reload,
}

/// Identifies one reload of the stack. See [`NotesPage::begin_reload`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReloadTicket(u64);

/// State of the page document.
#[derive(Debug)]
pub struct NotesPage<V> {
    list: NoteList,
    modal: ModalController<V>,
    reloads: u64,
}

impl<V: ModalView> NotesPage<V> {
    /// Creates a page with an empty stack and a closed modal.
    pub fn new(modal: ModalController<V>) -> Self {
        Self {
            list: NoteList::new(),
            modal,
            reloads: 0,
        }
    }

    pub fn list(&self) -> &NoteList {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut NoteList {
        &mut self.list
    }

    pub fn modal(&self) -> &ModalController<V> {
        &self.modal
    }

    pub fn modal_mut(&mut self) -> &mut ModalController<V> {
        &mut self.modal
    }

    /// Starts a reload of the stack. Any reload started earlier is superseded.
    pub fn begin_reload(&mut self) -> ReloadTicket {
        self.reloads += 1;
        ReloadTicket(self.reloads)
    }

    /// Applies the fetch made for `ticket`.
    ///
    /// Results of a superseded reload are dropped, so a slow response never overwrites a
    /// newer one. Returns whether the stack has to be drawn again.
    pub fn finish_reload(
        &mut self,
        ticket: ReloadTicket,
        result: Result<Vec<Note>, RepositoryError>,
    ) -> bool {
        if ticket.0 != self.reloads {
            #[cfg(feature = "tracing")]
            debug!("Dropping notes of superseded reload {}", ticket.0);
            return false;
        }
        self.list.apply_load(result)
    }

    /// Handles the "add" button.
    pub fn create_new(&mut self) {
        self.list.create_new(&mut self.modal);
    }

    /// Handles a click on a card: highlight it and open it for editing.
    ///
    /// Returns `false` if the id is not in the stack, in which case nothing happens.
    pub fn open_card(&mut self, id: NoteId) -> bool {
        if !self.list.select(id) {
            return false;
        }
        self.list.edit_existing(id, &mut self.modal);
        true
    }

    /// Handles a click on the overlay background or the close control.
    pub fn dismiss(&mut self) -> bool {
        self.modal.close()
    }

    /// Routes a message received from the form frame.
    pub fn handle_message(&mut self, message: &BusMessage) -> PageAction {
        #[cfg(feature = "tracing")]
        debug!("Received bus message: {message:?}");
        match message {
            BusMessage::NoteSaved(_) => PageAction::Reload,
            BusMessage::CloseModal => {
                self.modal.handle_message(message);
                PageAction::None
            }
        }
    }
}
