//! A sticky-note stack for the browser with a note editor hosted in a frame.
//!
//! The crate is split in two documents that never share memory:
//!
//! - the page, which draws the note stack and owns a modal hosting the form frame
//!   ([`page::NotesPage`]), and
//! - the form, which creates or edits a single note ([`form::FormController`]).
//!
//! The form talks to the notes API on its own and tells the page about the outcome through the
//! cross-frame [message bus](bus). The page never merges a saved note into its stack: every
//! `noteSaved` message triggers a full reload.
//!
//! Everything except the DOM wiring is platform neutral and can be driven natively with the
//! [`repository::NoteRepository`], [`bus::MessageSink`], [`modal::ModalView`] and
//! [`form::FormView`] seams. The browser bindings are enabled by the `wasm-js` feature:
//!
//! ```no_run
//! # #[cfg(feature = "wasm-js")]
//! # fn main() -> Result<(), note_stack::Error> {
//! use note_stack::{option::wasm_js::NotesPageOptions, page::NotesPage};
//!
//! let page = NotesPage::mount(NotesPageOptions::default())?;
//! # std::mem::forget(page);
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "wasm-js"))]
//! # fn main() {}
//! ```

pub mod api;
pub mod bus;
mod error;
pub mod form;
pub mod list;
pub mod modal;
pub mod note;
pub mod option;
pub mod page;
pub mod repository;
mod util;

pub use error::Error;
pub use note::{Note, NoteId, NotePayload};
pub use util::display;
