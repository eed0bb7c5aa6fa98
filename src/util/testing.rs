//! In-memory stand-ins for the repository, the bus and the views.

use crate::{
    api::BusMessage,
    bus::{BusError, MessageSink},
    form::FormView,
    modal::ModalView,
    note::{Note, NoteId},
    repository::{NoteRepository, RepositoryError, RepositoryFuture},
};
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::{
    cell::{Cell, RefCell},
    time::Instant,
};

fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

/// A note last updated `seconds` after 2024-01-01T00:00:00Z.
pub(crate) fn note_at(id: i64, title: &str, content: &str, seconds: i64) -> Note {
    let timestamp = epoch() + Duration::seconds(seconds);
    Note {
        id: NoteId(id),
        title: title.to_string(),
        content: content.to_string(),
        created_at: Some(timestamp),
        updated_at: Some(timestamp),
    }
}

/// A repository holding notes in memory and recording each request as `METHOD /path`.
#[derive(Debug, Default)]
pub(crate) struct MemoryRepository {
    notes: RefCell<Vec<Note>>,
    calls: RefCell<Vec<String>>,
    clock: Cell<i64>,
    fail_list: Cell<bool>,
    write_failure: Cell<Option<u16>>,
}

impl MemoryRepository {
    pub(crate) fn new(notes: Vec<Note>) -> Self {
        let clock = notes
            .iter()
            .filter_map(|note| note.updated_at)
            .map(|updated_at| (updated_at - epoch()).num_seconds())
            .max()
            .unwrap_or_default();
        Self {
            notes: RefCell::new(notes),
            clock: Cell::new(clock),
            ..Self::default()
        }
    }

    pub(crate) fn notes(&self) -> Vec<Note> {
        self.notes.borrow().clone()
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub(crate) fn fail_list(&self, fail: bool) {
        self.fail_list.set(fail);
    }

    /// Makes every create and update answer with the given HTTP status.
    pub(crate) fn fail_writes(&self, status: Option<u16>) {
        self.write_failure.set(status);
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    fn tick(&self) -> DateTime<Utc> {
        self.clock.set(self.clock.get() + 1);
        epoch() + Duration::seconds(self.clock.get())
    }

    fn check_write(&self) -> Result<(), RepositoryError> {
        match self.write_failure.get() {
            Some(status) => Err(RepositoryError::Network(format!(
                "notes API responded with {status}"
            ))),
            None => Ok(()),
        }
    }
}

impl NoteRepository for MemoryRepository {
    fn list_notes(&self) -> RepositoryFuture<'_, Vec<Note>> {
        Box::pin(async move {
            self.record("GET /notes".to_string());
            if self.fail_list.get() {
                return Err(RepositoryError::Network(
                    "notes API responded with 500".to_string(),
                ));
            }
            Ok(self.notes())
        })
    }

    fn get_note(&self, id: NoteId) -> RepositoryFuture<'_, Note> {
        Box::pin(async move {
            self.record(format!("GET /notes/{id}"));
            self.notes
                .borrow()
                .iter()
                .find(|note| note.id == id)
                .cloned()
                .ok_or(RepositoryError::NotFound(id))
        })
    }

    fn create_note<'a>(
        &'a self,
        title: &'a str,
        content: &'a str,
    ) -> RepositoryFuture<'a, Note> {
        Box::pin(async move {
            self.record("POST /notes".to_string());
            self.check_write()?;
            let mut notes = self.notes.borrow_mut();
            let id = notes.iter().map(|note| note.id.0).max().unwrap_or_default() + 1;
            let now = self.tick();
            let note = Note {
                id: NoteId(id),
                title: title.to_string(),
                content: content.to_string(),
                created_at: Some(now),
                updated_at: Some(now),
            };
            notes.push(note.clone());
            Ok(note)
        })
    }

    fn update_note<'a>(
        &'a self,
        id: NoteId,
        title: &'a str,
        content: &'a str,
    ) -> RepositoryFuture<'a, Note> {
        Box::pin(async move {
            self.record(format!("PUT /notes/{id}"));
            self.check_write()?;
            let now = self.tick();
            let mut notes = self.notes.borrow_mut();
            let note = notes
                .iter_mut()
                .find(|note| note.id == id)
                .ok_or(RepositoryError::NotFound(id))?;
            note.title = title.to_string();
            note.content = content.to_string();
            note.updated_at = Some(now);
            Ok(note.clone())
        })
    }
}

/// A sink recording every posted message with the moment it was posted.
#[derive(Debug, Default)]
pub(crate) struct RecordingSink {
    sent: RefCell<Vec<(Instant, BusMessage)>>,
}

impl RecordingSink {
    pub(crate) fn sent(&self) -> Vec<(Instant, BusMessage)> {
        self.sent.borrow().clone()
    }

    pub(crate) fn messages(&self) -> Vec<BusMessage> {
        self.sent
            .borrow()
            .iter()
            .map(|(_, message)| message.clone())
            .collect()
    }

    /// Removes and returns the messages posted so far.
    pub(crate) fn drain(&self) -> Vec<BusMessage> {
        self.sent
            .borrow_mut()
            .drain(..)
            .map(|(_, message)| message)
            .collect()
    }
}

impl MessageSink for RecordingSink {
    fn post(&self, message: &BusMessage) -> Result<(), BusError> {
        self.sent
            .borrow_mut()
            .push((Instant::now(), message.clone()));
        Ok(())
    }
}

/// A modal view keeping the last value of everything it was told.
#[derive(Debug, Default)]
pub(crate) struct RecordingModalView {
    title: RefCell<String>,
    frame_history: RefCell<Vec<Option<String>>>,
    visible: Cell<bool>,
    scroll_locked: Cell<bool>,
}

impl RecordingModalView {
    pub(crate) fn title(&self) -> String {
        self.title.borrow().clone()
    }

    pub(crate) fn frame_src(&self) -> Option<String> {
        self.frame_history.borrow().last().cloned().flatten()
    }

    pub(crate) fn frame_history(&self) -> Vec<Option<String>> {
        self.frame_history.borrow().clone()
    }

    pub(crate) fn frame_loads(&self) -> usize {
        self.frame_history.borrow().len()
    }

    pub(crate) fn visible(&self) -> bool {
        self.visible.get()
    }

    pub(crate) fn scroll_locked(&self) -> bool {
        self.scroll_locked.get()
    }
}

impl ModalView for RecordingModalView {
    fn set_title(&self, title: &str) {
        *self.title.borrow_mut() = title.to_string();
    }

    fn set_frame_src(&self, src: Option<&str>) {
        self.frame_history
            .borrow_mut()
            .push(src.map(str::to_string));
    }

    fn set_visible(&self, visible: bool) {
        self.visible.set(visible);
    }

    fn set_scroll_locked(&self, locked: bool) {
        self.scroll_locked.set(locked);
    }
}

/// A form view backed by plain fields.
#[derive(Debug, Default)]
pub(crate) struct RecordingFormView {
    title: RefCell<String>,
    content: RefCell<String>,
    title_error: Cell<bool>,
    title_focused: Cell<bool>,
    success: Cell<bool>,
    notices: RefCell<Vec<String>>,
}

impl RecordingFormView {
    pub(crate) fn title_error_visible(&self) -> bool {
        self.title_error.get()
    }

    pub(crate) fn title_focused(&self) -> bool {
        self.title_focused.get()
    }

    pub(crate) fn success_visible(&self) -> bool {
        self.success.get()
    }

    pub(crate) fn notices(&self) -> Vec<String> {
        self.notices.borrow().clone()
    }
}

impl FormView for RecordingFormView {
    fn title(&self) -> String {
        self.title.borrow().clone()
    }

    fn content(&self) -> String {
        self.content.borrow().clone()
    }

    fn fill(&self, title: &str, content: &str) {
        *self.title.borrow_mut() = title.to_string();
        *self.content.borrow_mut() = content.to_string();
    }

    fn show_title_error(&self, visible: bool) {
        self.title_error.set(visible);
    }

    fn focus_title(&self) {
        self.title_focused.set(true);
    }

    fn show_success(&self) {
        self.success.set(true);
    }

    fn notify(&self, message: &str) {
        self.notices.borrow_mut().push(message.to_string());
    }
}
