//! The note form running inside the modal frame.
//!
//! The form decides between create and edit from its own query string, talks to the
//! repository directly, and reports back to the hosting page only through the message bus.

use crate::{
    api::BusMessage,
    bus::MessageSink,
    note::{Note, NoteId, NotePayload},
    repository::{NoteRepository, RepositoryError},
    util::sleep::sleep,
};
use std::time::Duration;
use thiserror::Error;
#[cfg(feature = "tracing")]
use tracing::{debug, error, warn};

#[cfg(feature = "wasm-js")]
mod wasm_js;

#[cfg(feature = "wasm-js")]
pub use wasm_js::{DomFormView, NoteForm};

/// Delay between `noteSaved` and `closeModal`, leaving the success message visible.
pub const CLOSE_DELAY: Duration = Duration::from_millis(800);

/// Blocking notification shown when the repository rejects a write.
pub const SAVE_FAILED_MESSAGE: &str = "Failed to save note. Please try again.";

/// The error type for form input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The title is empty or only whitespace.
    #[error("Title is required")]
    EmptyTitle,
}

/// Whether the form creates a new note or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(NoteId),
}

impl FormMode {
    /// Reads the mode from a query string such as `?id=5`.
    ///
    /// A missing, empty or non-numeric `id` means [`FormMode::Create`].
    pub fn from_query(query: &str) -> Self {
        let query = query.trim_start_matches('?');
        let id = url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == "id")
            .map(|(_, value)| value.into_owned());

        match id {
            None => FormMode::Create,
            Some(value) if value.is_empty() => FormMode::Create,
            Some(value) => match value.parse::<NoteId>() {
                Ok(id) => FormMode::Edit(id),
                Err(_e) => {
                    #[cfg(feature = "tracing")]
                    warn!("Ignoring invalid note id {value:?}: {_e}");
                    FormMode::Create
                }
            },
        }
    }

    /// The note being edited, if any.
    pub fn note_id(&self) -> Option<NoteId> {
        match self {
            FormMode::Create => None,
            FormMode::Edit(id) => Some(*id),
        }
    }
}

/// Checks the raw field values and returns the trimmed payload to submit.
pub fn validate(title: &str, content: &str) -> Result<NotePayload, ValidationError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    Ok(NotePayload::new(title, content.trim()))
}

/// The form elements the [`FormController`] reads and drives.
pub trait FormView {
    /// The current title field value.
    fn title(&self) -> String;
    /// The current content field value.
    fn content(&self) -> String;
    /// Overwrites both fields.
    fn fill(&self, title: &str, content: &str);
    /// Shows or hides the inline "title required" message.
    fn show_title_error(&self, visible: bool);
    /// Moves input focus to the title field.
    fn focus_title(&self);
    /// Shows the transient "saved" acknowledgment.
    fn show_success(&self);
    /// Shows a notification the user has to dismiss.
    fn notify(&self, message: &str);
}

/// What a submit attempt ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The input was rejected before any request was made.
    Invalid(ValidationError),
    /// The repository stored the note and both bus messages were sent.
    Saved(Note),
    /// The repository rejected the write. The form keeps its values.
    Failed(RepositoryError),
}

/// Drives the note form: prefill, validation, submission and cancel.
pub struct FormController<R, S, V> {
    repository: R,
    sink: S,
    view: V,
    mode: FormMode,
    close_delay: Duration,
}

impl<R, S, V> FormController<R, S, V>
where
    R: NoteRepository,
    S: MessageSink,
    V: FormView,
{
    /// Creates a controller for a form in `mode`.
    pub fn new(repository: R, sink: S, view: V, mode: FormMode) -> Self {
        Self {
            repository,
            sink,
            view,
            mode,
            close_delay: CLOSE_DELAY,
        }
    }

    /// Overrides the delay between `noteSaved` and `closeModal`.
    pub fn with_close_delay(mut self, close_delay: Duration) -> Self {
        self.close_delay = close_delay;
        self
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Fills the fields from the repository when editing.
    ///
    /// A note that cannot be fetched leaves the fields blank without telling the user.
    /// Returns whether the fields were filled.
    pub async fn prefill(&self) -> bool {
        let FormMode::Edit(id) = self.mode else {
            return false;
        };
        match self.repository.get_note(id).await {
            Ok(note) => {
                self.view.fill(&note.title, &note.content);
                true
            }
            Err(_e) => {
                #[cfg(feature = "tracing")]
                error!("Error loading note: {_e}");
                false
            }
        }
    }

    /// Validates and saves the form.
    ///
    /// On success the page is told `noteSaved` right away and `closeModal` once the close
    /// delay has passed. On failure nothing is sent and the fields keep their values.
    pub async fn submit(&self) -> SubmitOutcome {
        let payload = match validate(&self.view.title(), &self.view.content()) {
            Ok(payload) => payload,
            Err(err) => {
                self.view.show_title_error(true);
                self.view.focus_title();
                return SubmitOutcome::Invalid(err);
            }
        };
        self.view.show_title_error(false);

        let result = match self.mode {
            FormMode::Edit(id) => {
                self.repository
                    .update_note(id, &payload.title, &payload.content)
                    .await
            }
            FormMode::Create => {
                self.repository
                    .create_note(&payload.title, &payload.content)
                    .await
            }
        };

        match result {
            Ok(note) => {
                #[cfg(feature = "tracing")]
                debug!("Saved note {}", note.id);
                self.view.show_success();
                self.post(&BusMessage::NoteSaved(Some(
                    payload.with_id(self.mode.note_id()),
                )));
                sleep(self.close_delay).await;
                self.post(&BusMessage::CloseModal);
                SubmitOutcome::Saved(note)
            }
            Err(err) => {
                #[cfg(feature = "tracing")]
                error!("Error saving note: {err}");
                self.view.notify(SAVE_FAILED_MESSAGE);
                SubmitOutcome::Failed(err)
            }
        }
    }

    /// Asks the page to close the modal, discarding whatever was typed.
    pub fn cancel(&self) {
        self.post(&BusMessage::CloseModal);
    }

    fn post(&self, message: &BusMessage) {
        if let Err(_e) = self.sink.post(message) {
            #[cfg(feature = "tracing")]
            error!("Could not notify the hosting page: {_e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_mode_from_query() {
        assert_eq!(FormMode::from_query(""), FormMode::Create);
        assert_eq!(FormMode::from_query("?id="), FormMode::Create);
        assert_eq!(FormMode::from_query("?id=5"), FormMode::Edit(NoteId(5)));
        assert_eq!(
            FormMode::from_query("?theme=dark&id=12"),
            FormMode::Edit(NoteId(12))
        );
        assert_eq!(FormMode::from_query("?id=abc"), FormMode::Create);
        assert_eq!(FormMode::Edit(NoteId(3)).note_id(), Some(NoteId(3)));
        assert_eq!(FormMode::Create.note_id(), None);
    }

    #[test]
    fn test_validate() {
        assert_eq!(validate("", "x"), Err(ValidationError::EmptyTitle));
        assert_eq!(validate(" \t\n ", "x"), Err(ValidationError::EmptyTitle));
        assert_eq!(
            validate("  Groceries ", "  milk\n"),
            Ok(NotePayload::new("Groceries", "milk"))
        );
    }

    #[cfg(not(target_family = "wasm"))]
    mod flows {
        use super::*;
        use crate::util::testing::{note_at, MemoryRepository, RecordingFormView, RecordingSink};
        use std::time::Instant;

        type Controller<'a> =
            FormController<&'a MemoryRepository, &'a RecordingSink, RecordingFormView>;

        fn controller<'a>(
            repository: &'a MemoryRepository,
            sink: &'a RecordingSink,
            mode: FormMode,
        ) -> Controller<'a> {
            FormController::new(repository, sink, RecordingFormView::default(), mode)
        }

        #[tokio::test]
        async fn test_empty_title_never_reaches_repository() {
            let repository = MemoryRepository::new(Vec::new());
            let sink = RecordingSink::default();

            for title in ["", "   ", "\t\n"] {
                let form = controller(&repository, &sink, FormMode::Create);
                form.view().fill(title, "some content");

                assert_eq!(
                    form.submit().await,
                    SubmitOutcome::Invalid(ValidationError::EmptyTitle)
                );
                assert!(form.view().title_error_visible());
                assert!(form.view().title_focused());
            }
            assert!(repository.calls().is_empty());
            assert!(sink.messages().is_empty());
        }

        #[tokio::test]
        async fn test_create_sends_saved_then_close_after_delay() {
            let repository = MemoryRepository::new(Vec::new());
            let sink = RecordingSink::default();
            let form = controller(&repository, &sink, FormMode::Create);
            form.view().fill("  Groceries ", "");

            let outcome = form.submit().await;

            let SubmitOutcome::Saved(note) = outcome else {
                panic!("unexpected outcome: {outcome:?}");
            };
            assert_eq!(note.title, "Groceries");
            assert_eq!(repository.calls(), vec!["POST /notes".to_string()]);
            assert!(form.view().success_visible());

            let sent = sink.sent();
            assert_eq!(sent.len(), 2);
            assert_eq!(
                sent[0].1,
                BusMessage::NoteSaved(Some(NotePayload::new("Groceries", "")))
            );
            assert_eq!(sent[1].1, BusMessage::CloseModal);
            assert!(sent[1].0.duration_since(sent[0].0) >= CLOSE_DELAY);
        }

        #[tokio::test]
        async fn test_edit_prefills_and_updates() {
            let repository = MemoryRepository::new(vec![note_at(5, "Ideas", "Blog", 10)]);
            let sink = RecordingSink::default();
            let form = controller(&repository, &sink, FormMode::Edit(NoteId(5)))
                .with_close_delay(Duration::from_millis(10));

            assert!(form.prefill().await);
            assert_eq!(form.view().title(), "Ideas");
            assert_eq!(form.view().content(), "Blog");

            form.view().fill("Ideas", "Blog posts");
            assert!(matches!(form.submit().await, SubmitOutcome::Saved(_)));

            assert_eq!(
                repository.calls(),
                vec!["GET /notes/5".to_string(), "PUT /notes/5".to_string()]
            );
            assert_eq!(repository.notes()[0].content, "Blog posts");
            assert_eq!(
                sink.messages(),
                vec![
                    BusMessage::NoteSaved(Some(
                        NotePayload::new("Ideas", "Blog posts").with_id(Some(NoteId(5)))
                    )),
                    BusMessage::CloseModal,
                ]
            );
        }

        #[tokio::test]
        async fn test_missing_note_leaves_fields_blank() {
            let repository = MemoryRepository::new(Vec::new());
            let sink = RecordingSink::default();
            let form = controller(&repository, &sink, FormMode::Edit(NoteId(5)));

            assert!(!form.prefill().await);
            assert_eq!(form.view().title(), "");
            assert_eq!(form.view().content(), "");
            assert!(form.view().notices().is_empty());
            assert!(sink.messages().is_empty());
        }

        #[tokio::test]
        async fn test_failed_update_keeps_form_open() {
            let repository = MemoryRepository::new(vec![note_at(5, "Ideas", "", 10)]);
            repository.fail_writes(Some(500));
            let sink = RecordingSink::default();
            let form = controller(&repository, &sink, FormMode::Edit(NoteId(5)));
            form.view().fill("Ideas v2", "typed");

            let outcome = form.submit().await;

            assert!(matches!(
                outcome,
                SubmitOutcome::Failed(RepositoryError::Network(_))
            ));
            assert_eq!(form.view().notices(), vec![SAVE_FAILED_MESSAGE.to_string()]);
            assert!(sink.messages().is_empty());
            assert_eq!(form.view().title(), "Ideas v2");
            assert_eq!(form.view().content(), "typed");
            assert!(!form.view().success_visible());
        }

        #[tokio::test]
        async fn test_valid_submit_clears_previous_validation_message() {
            let repository = MemoryRepository::new(Vec::new());
            let sink = RecordingSink::default();
            let form = controller(&repository, &sink, FormMode::Create)
                .with_close_delay(Duration::ZERO);

            form.submit().await;
            assert!(form.view().title_error_visible());

            form.view().fill("Title", "");
            assert!(matches!(form.submit().await, SubmitOutcome::Saved(_)));
            assert!(!form.view().title_error_visible());
        }

        #[test]
        fn test_cancel_closes_immediately() {
            let repository = MemoryRepository::new(Vec::new());
            let sink = RecordingSink::default();
            let form = controller(&repository, &sink, FormMode::Create);
            form.view().fill("", "unsaved");

            let before = Instant::now();
            form.cancel();

            assert_eq!(sink.messages(), vec![BusMessage::CloseModal]);
            assert!(sink.sent()[0].0 >= before);
            assert!(repository.calls().is_empty());
        }
    }
}
