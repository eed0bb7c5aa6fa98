//! Client configuration and options.
//!
//! This module provides the configuration shared by every target. Browser mounting options
//! live in [`wasm_js`].

#[cfg(feature = "wasm-js")]
pub mod wasm_js;

/// Path of the notes API relative to the page origin, used when no API base is configured.
pub const DEFAULT_API_PATH: &str = "/api";

/// Route of the document hosting the note form.
pub const DEFAULT_FORM_ENTRY_POINT: &str = "/note-form";

/// Options for the [`HttpNoteRepository`](crate::repository::HttpNoteRepository).
#[derive(Debug, Clone, bon::Builder)]
#[builder(on(String, into))]
pub struct RepositoryOptions {
    /// Absolute URL of the API root, e.g. `https://notes.example.com/api`. The note routes are
    /// appended to it as `/notes` and `/notes/{id}`.
    pub base_url: String,
}

/// Resolves the API root for a page at `origin`.
///
/// An absolute `api_base` is used as is, a relative one is joined to the origin, and no
/// `api_base` at all means [`DEFAULT_API_PATH`].
pub fn resolve_api_base(origin: &str, api_base: Option<&str>) -> String {
    let api_base = api_base.unwrap_or(DEFAULT_API_PATH);
    if api_base.starts_with("http://") || api_base.starts_with("https://") {
        return api_base.trim_end_matches('/').to_string();
    }
    format!(
        "{}/{}",
        origin.trim_end_matches('/'),
        api_base.trim_matches('/')
    )
    .trim_end_matches('/')
    .to_string()
}
