use super::{NotesPage, PageAction};
use crate::{
    bus::MessageListener,
    list::StackView,
    modal::{DomModalView, ModalController},
    note::NoteId,
    option::{resolve_api_base, wasm_js::NotesPageOptions, RepositoryOptions},
    repository::{HttpNoteRepository, NoteRepository},
    util::dom::{element, origin},
    Error,
};
use chrono::Utc;
use gloo_events::EventListener;
use std::{cell::RefCell, rc::Rc};
#[cfg(feature = "tracing")]
use tracing::{debug, error};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlElement;

struct Mounted {
    page: RefCell<NotesPage<DomModalView>>,
    repository: HttpNoteRepository,
    stack: StackView,
}

impl Mounted {
    /// Fetches the notes and redraws the stack. A failed or superseded fetch leaves the stack
    /// as it is.
    fn reload(self: &Rc<Self>) {
        let ticket = self.page.borrow_mut().begin_reload();
        let mounted = self.clone();
        spawn_local(async move {
            let result = mounted.repository.list_notes().await;
            let mut page = mounted.page.borrow_mut();
            if page.finish_reload(ticket, result) {
                mounted.stack.draw(&page.list().render(Utc::now()));
            }
        });
    }

    fn open_card(&self, id: NoteId) {
        if !self.page.borrow_mut().open_card(id) {
            return;
        }
        if let Err(_e) = self.stack.highlight(id) {
            #[cfg(feature = "tracing")]
            error!("Could not highlight note {id}: {_e}");
        }
    }
}

/// The mounted page. Dropping it removes every listener it attached.
pub struct NotesPageHandle {
    mounted: Rc<Mounted>,
    _listeners: Vec<EventListener>,
    _messages: MessageListener,
}

impl NotesPageHandle {
    /// Fetches the notes again and redraws the stack.
    pub fn reload(&self) {
        self.mounted.reload();
    }

    /// Returns whether the modal is currently open.
    pub fn is_modal_open(&self) -> bool {
        self.mounted.page.borrow().modal().is_open()
    }
}

impl NotesPage<DomModalView> {
    /// Wires the page document and starts the first load of the stack.
    pub fn mount(options: NotesPageOptions) -> Result<NotesPageHandle, Error> {
        let elements = &options.elements;
        let base_url = resolve_api_base(&origin()?, options.api_base.as_deref());
        #[cfg(feature = "tracing")]
        debug!("Mounting notes page against {base_url}");

        let view = DomModalView::new(&elements.modal)?;
        let overlay = view.overlay().clone();
        let mounted = Rc::new(Mounted {
            page: RefCell::new(NotesPage::new(ModalController::new(
                view,
                options.form_entry_point.clone(),
            ))),
            repository: HttpNoteRepository::new(
                RepositoryOptions::builder().base_url(base_url).build(),
            ),
            stack: StackView::new(&elements.stack)?,
        });

        let add_button: HtmlElement = element(&elements.add_button)?;
        let close_button: HtmlElement = element(&elements.modal.close)?;

        let on_add = {
            let mounted = mounted.clone();
            EventListener::new(&add_button, "click", move |_| {
                mounted.page.borrow_mut().create_new();
            })
        };
        let on_card = {
            let mounted = mounted.clone();
            let container = mounted.stack.container().clone();
            EventListener::new(&container, "click", move |event| {
                if let Some(id) = StackView::card_id(event) {
                    mounted.open_card(id);
                }
            })
        };
        let on_overlay = {
            let mounted = mounted.clone();
            let background = overlay.clone();
            EventListener::new(&overlay, "click", move |event| {
                let on_background = event
                    .target()
                    .and_then(|target| target.dyn_into::<HtmlElement>().ok())
                    .is_some_and(|target| target == background);
                if on_background {
                    mounted.page.borrow_mut().dismiss();
                }
            })
        };
        let on_close = {
            let mounted = mounted.clone();
            EventListener::new(&close_button, "click", move |_| {
                mounted.page.borrow_mut().dismiss();
            })
        };

        let messages = {
            let mounted = mounted.clone();
            MessageListener::new(options.origin_policy.clone(), move |message| {
                let action = mounted.page.borrow_mut().handle_message(&message);
                if action == PageAction::Reload {
                    mounted.reload();
                }
            })?
        };

        mounted.reload();

        Ok(NotesPageHandle {
            mounted,
            _listeners: vec![on_add, on_card, on_overlay, on_close],
            _messages: messages,
        })
    }
}
