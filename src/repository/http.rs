use super::{NoteRepository, RepositoryError, RepositoryFuture};
use crate::{
    note::{Note, NoteId, NotePayload},
    option::RepositoryOptions,
};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
#[cfg(feature = "tracing")]
use tracing::debug;

/// [`NoteRepository`] backed by the notes REST API.
///
/// | Call | Request |
/// |---|---|
/// | [`list_notes`](NoteRepository::list_notes) | `GET {base}/notes` |
/// | [`get_note`](NoteRepository::get_note) | `GET {base}/notes/{id}` |
/// | [`create_note`](NoteRepository::create_note) | `POST {base}/notes` with `{title, content}` |
/// | [`update_note`](NoteRepository::update_note) | `PUT {base}/notes/{id}` with `{id, title, content}` |
#[derive(Debug, Clone)]
pub struct HttpNoteRepository {
    client: Client,
    base_url: String,
}

impl HttpNoteRepository {
    /// Creates a repository talking to the API root in `options`.
    pub fn new(options: RepositoryOptions) -> Self {
        Self {
            client: Client::new(),
            base_url: options.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The API root this repository talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn notes_url(&self) -> String {
        format!("{}/notes", self.base_url)
    }

    fn note_url(&self, id: NoteId) -> String {
        format!("{}/notes/{id}", self.base_url)
    }
}

fn transport_error(err: reqwest::Error) -> RepositoryError {
    RepositoryError::Network(err.to_string())
}

/// Decodes a successful response, turning any other status into [`RepositoryError::Network`].
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, RepositoryError> {
    let status = response.status();
    if !status.is_success() {
        return Err(RepositoryError::Network(format!(
            "{} responded with {status}",
            response.url()
        )));
    }
    response.json::<T>().await.map_err(transport_error)
}

impl NoteRepository for HttpNoteRepository {
    fn list_notes(&self) -> RepositoryFuture<'_, Vec<Note>> {
        Box::pin(async move {
            let response = self
                .client
                .get(self.notes_url())
                .send()
                .await
                .map_err(transport_error)?;
            read_json(response).await
        })
    }

    fn get_note(&self, id: NoteId) -> RepositoryFuture<'_, Note> {
        Box::pin(async move {
            let result = match self.client.get(self.note_url(id)).send().await {
                Ok(response) => read_json(response).await,
                Err(err) => Err(transport_error(err)),
            };
            result.map_err(|_e| {
                #[cfg(feature = "tracing")]
                debug!("Could not fetch note {id}: {_e}");
                RepositoryError::NotFound(id)
            })
        })
    }

    fn create_note<'a>(
        &'a self,
        title: &'a str,
        content: &'a str,
    ) -> RepositoryFuture<'a, Note> {
        Box::pin(async move {
            let response = self
                .client
                .post(self.notes_url())
                .json(&NotePayload::new(title, content))
                .send()
                .await
                .map_err(transport_error)?;
            read_json(response).await
        })
    }

    fn update_note<'a>(
        &'a self,
        id: NoteId,
        title: &'a str,
        content: &'a str,
    ) -> RepositoryFuture<'a, Note> {
        Box::pin(async move {
            let response = self
                .client
                .put(self.note_url(id))
                .json(&NotePayload::new(title, content).with_id(Some(id)))
                .send()
                .await
                .map_err(transport_error)?;
            if response.status() == StatusCode::NOT_FOUND {
                return Err(RepositoryError::NotFound(id));
            }
            read_json(response).await
        })
    }
}
