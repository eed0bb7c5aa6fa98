use super::{FormController, FormMode, FormView};
use crate::{
    bus::ParentWindowSink,
    option::{resolve_api_base, wasm_js::NoteFormOptions, RepositoryOptions},
    repository::HttpNoteRepository,
    util::dom::{element, origin, set_displayed},
    Error,
};
use gloo_events::{EventListener, EventListenerOptions};
use gloo_utils::window;
use std::rc::Rc;
#[cfg(feature = "tracing")]
use crate::util::dom::js_error_message;
#[cfg(feature = "tracing")]
use tracing::{debug, error};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlElement, HtmlInputElement, HtmlTextAreaElement};

/// The fields and messages of the form document.
#[derive(Debug, Clone)]
pub struct DomFormView {
    title: HtmlInputElement,
    content: HtmlTextAreaElement,
    title_error: HtmlElement,
    success_message: HtmlElement,
}

impl DomFormView {
    pub fn new(options: &NoteFormOptions) -> Result<Self, Error> {
        let elements = &options.elements;
        Ok(Self {
            title: element(&elements.title)?,
            content: element(&elements.content)?,
            title_error: element(&elements.title_error)?,
            success_message: element(&elements.success_message)?,
        })
    }
}

impl FormView for DomFormView {
    fn title(&self) -> String {
        self.title.value()
    }

    fn content(&self) -> String {
        self.content.value()
    }

    fn fill(&self, title: &str, content: &str) {
        self.title.set_value(title);
        self.content.set_value(content);
    }

    fn show_title_error(&self, visible: bool) {
        set_displayed(&self.title_error, visible);
    }

    fn focus_title(&self) {
        if let Err(_e) = self.title.focus() {
            #[cfg(feature = "tracing")]
            error!("Could not focus the title: {}", js_error_message(&_e));
        }
    }

    fn show_success(&self) {
        set_displayed(&self.success_message, true);
    }

    fn notify(&self, message: &str) {
        if let Err(_e) = window().alert_with_message(message) {
            #[cfg(feature = "tracing")]
            error!("Could not show alert: {}", js_error_message(&_e));
        }
    }
}

type DomFormController = FormController<HttpNoteRepository, ParentWindowSink, DomFormView>;

/// The note form mounted in its frame document.
///
/// Dropping the value removes the submit and cancel listeners.
pub struct NoteForm {
    controller: Rc<DomFormController>,
    _listeners: Vec<EventListener>,
}

impl NoteForm {
    /// Wires the form document: reads the mode from the query string, prefills when editing,
    /// and attaches the submit and cancel handlers.
    pub fn mount(options: NoteFormOptions) -> Result<Self, Error> {
        let mode = FormMode::from_query(&window().location().search()?);
        #[cfg(feature = "tracing")]
        debug!("Mounting note form: {mode:?}");

        let base_url = resolve_api_base(&origin()?, options.api_base.as_deref());
        let repository =
            HttpNoteRepository::new(RepositoryOptions::builder().base_url(base_url).build());
        let sink = ParentWindowSink::new(&options.origin_policy)?;
        let view = DomFormView::new(&options)?;
        let controller = Rc::new(
            FormController::new(repository, sink, view, mode)
                .with_close_delay(options.close_delay),
        );

        let form: HtmlElement = element(&options.elements.form)?;
        let cancel: HtmlElement = element(&options.elements.cancel_button)?;

        let on_submit = {
            let controller = controller.clone();
            EventListener::new_with_options(
                &form,
                "submit",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    event.prevent_default();
                    let controller = controller.clone();
                    spawn_local(async move {
                        controller.submit().await;
                    });
                },
            )
        };
        let on_cancel = {
            let controller = controller.clone();
            EventListener::new(&cancel, "click", move |_| controller.cancel())
        };

        if matches!(mode, FormMode::Edit(_)) {
            let controller = controller.clone();
            spawn_local(async move {
                controller.prefill().await;
            });
        }

        Ok(Self {
            controller,
            _listeners: vec![on_submit, on_cancel],
        })
    }

    pub fn mode(&self) -> FormMode {
        self.controller.mode()
    }
}
