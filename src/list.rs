//! The note stack shown on the main page.
//!
//! [`NoteList`] is a cache of the repository. It is never patched in place after a write: a
//! `noteSaved` message makes the page reload the whole collection instead.

use crate::{
    modal::{ModalController, ModalView},
    note::{Note, NoteId},
    repository::{NoteRepository, RepositoryError},
    util::display::{escape_html, format_relative, preview},
};
use chrono::{DateTime, Utc};
#[cfg(feature = "tracing")]
use tracing::{debug, error};

#[cfg(feature = "wasm-js")]
mod wasm_js;

#[cfg(feature = "wasm-js")]
pub use wasm_js::StackView;

/// Title shown on a card whose note has an empty title.
pub const UNTITLED: &str = "Untitled";
/// Preview shown on a card whose note has no content.
pub const EMPTY_PREVIEW: &str = "Empty note";
/// Class of every card element.
pub const CARD_CLASS: &str = "post-it";
/// Extra class of the selected card.
pub const ACTIVE_CLASS: &str = "active";
/// Attribute carrying the note id on each card.
pub const NOTE_ID_ATTRIBUTE: &str = "data-note-id";

/// The collection of persisted notes and the current selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteList {
    notes: Vec<Note>,
    selected_id: Option<NoteId>,
}

impl NoteList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// The notes in the order they were fetched.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// The id of the highlighted card, if any.
    pub fn selected_id(&self) -> Option<NoteId> {
        self.selected_id
    }

    /// Replaces the collection. The selection survives if its note is still present.
    pub fn replace(&mut self, notes: Vec<Note>) {
        self.notes = notes;
        if let Some(id) = self.selected_id {
            if !self.contains(id) {
                self.selected_id = None;
            }
        }
    }

    /// Applies the result of [`NoteRepository::list_notes`].
    ///
    /// On failure the current notes are kept as they are and the error is only logged. Returns
    /// whether the collection was replaced and needs to be drawn again.
    pub fn apply_load(&mut self, result: Result<Vec<Note>, RepositoryError>) -> bool {
        match result {
            Ok(notes) => {
                #[cfg(feature = "tracing")]
                debug!("Loaded {} notes", notes.len());
                self.replace(notes);
                true
            }
            Err(_e) => {
                #[cfg(feature = "tracing")]
                error!("Error loading notes: {_e}");
                false
            }
        }
    }

    /// Fetches every note from `repository` and replaces the collection.
    ///
    /// See [`NoteList::apply_load`] for the failure behavior.
    pub async fn load<R>(&mut self, repository: &R) -> bool
    where
        R: NoteRepository + ?Sized,
    {
        let result = repository.list_notes().await;
        self.apply_load(result)
    }

    /// The notes in display order: most recently updated first.
    ///
    /// The sort is stable, so notes with equal timestamps keep their fetch order. Notes without
    /// `updated_at` come last.
    pub fn sorted(&self) -> Vec<&Note> {
        let mut sorted: Vec<&Note> = self.notes.iter().collect();
        sorted.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        sorted
    }

    /// Highlights the card of `id`, clearing any previous highlight.
    ///
    /// Returns `false` and leaves the selection alone if no note has that id.
    pub fn select(&mut self, id: NoteId) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.selected_id = Some(id);
        true
    }

    /// Opens the modal on an empty form.
    pub fn create_new<V: ModalView>(&self, modal: &mut ModalController<V>) {
        modal.open_new();
    }

    /// Opens the modal on the form for an existing note.
    pub fn edit_existing<V: ModalView>(&self, id: NoteId, modal: &mut ModalController<V>) {
        modal.open_edit(id);
    }

    /// Draws the whole stack as HTML markup. All note text is escaped.
    pub fn render(&self, now: DateTime<Utc>) -> String {
        self.sorted()
            .into_iter()
            .map(|note| render_card(note, self.selected_id == Some(note.id), now))
            .collect()
    }

    fn contains(&self, id: NoteId) -> bool {
        self.notes.iter().any(|note| note.id == id)
    }
}

fn render_card(note: &Note, active: bool, now: DateTime<Utc>) -> String {
    let title = if note.title.is_empty() {
        UNTITLED
    } else {
        note.title.as_str()
    };
    let preview = if note.content.is_empty() {
        EMPTY_PREVIEW.to_string()
    } else {
        preview(&note.content)
    };
    let class = if active {
        format!("{CARD_CLASS} {ACTIVE_CLASS}")
    } else {
        CARD_CLASS.to_string()
    };
    let updated = note
        .updated_at
        .map(|updated_at| {
            format!(
                r#"<div class="post-it-date">{}</div>"#,
                escape_html(&format_relative(updated_at, now))
            )
        })
        .unwrap_or_default();

    format!(
        r#"<div class="{class}" {attribute}="{id}"><div class="post-it-inner"><div class="post-it-title">{title}</div><div class="post-it-preview">{preview}</div>{updated}</div></div>"#,
        attribute = NOTE_ID_ATTRIBUTE,
        id = note.id,
        title = escape_html(title),
        preview = escape_html(&preview),
    )
}
