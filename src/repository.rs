//! Access to the external notes API.
//!
//! Every call is a single attempt. A failed call changes nothing on the client side, and it is
//! up to the caller whether the failure is shown to the user or only logged.

use crate::note::{Note, NoteId};
use futures::future::LocalBoxFuture;
use thiserror::Error;

mod http;

pub use self::http::HttpNoteRepository;

/// The future returned by [`NoteRepository`] methods.
pub type RepositoryFuture<'a, T> = LocalBoxFuture<'a, Result<T, RepositoryError>>;

/// The error type for the notes API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The request failed in transport, the API answered with a non-success status, or the
    /// response body could not be decoded.
    #[error("Network error: {0}")]
    Network(String),
    /// The note does not exist, or could not be fetched.
    #[error("Note {0} not found")]
    NotFound(NoteId),
}

/// Trait for reading and writing notes in the external repository.
pub trait NoteRepository {
    /// Fetches every persisted note, in repository order.
    fn list_notes(&self) -> RepositoryFuture<'_, Vec<Note>>;

    /// Fetches a single note.
    ///
    /// Any failure, including transport errors, is reported as [`RepositoryError::NotFound`].
    fn get_note(&self, id: NoteId) -> RepositoryFuture<'_, Note>;

    /// Creates a note. The repository assigns its id and timestamps.
    fn create_note<'a>(&'a self, title: &'a str, content: &'a str)
        -> RepositoryFuture<'a, Note>;

    /// Overwrites the title and content of an existing note. The repository refreshes
    /// `updated_at`.
    fn update_note<'a>(
        &'a self,
        id: NoteId,
        title: &'a str,
        content: &'a str,
    ) -> RepositoryFuture<'a, Note>;
}

macro_rules! forward_repository {
    ($ty:ty) => {
        impl<R: NoteRepository + ?Sized> NoteRepository for $ty {
            fn list_notes(&self) -> RepositoryFuture<'_, Vec<Note>> {
                (**self).list_notes()
            }

            fn get_note(&self, id: NoteId) -> RepositoryFuture<'_, Note> {
                (**self).get_note(id)
            }

            fn create_note<'a>(
                &'a self,
                title: &'a str,
                content: &'a str,
            ) -> RepositoryFuture<'a, Note> {
                (**self).create_note(title, content)
            }

            fn update_note<'a>(
                &'a self,
                id: NoteId,
                title: &'a str,
                content: &'a str,
            ) -> RepositoryFuture<'a, Note> {
                (**self).update_note(id, title, content)
            }
        }
    };
}

forward_repository!(&R);
forward_repository!(std::rc::Rc<R>);
