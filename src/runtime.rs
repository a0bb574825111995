//! Wires the mounted contact page to live DOM listeners.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use gamics_core::{
    ContactConfig, ContactPage, Dispatch, ElementId, EventKind, ListenTarget, PageEvent,
    Subscription,
};
use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, KeyboardEvent, MouseEvent};

use crate::web_page::{EventSink, WebPage};

struct Mounted {
    page: WebPage,
    app: ContactPage,
}

/// The contact page running in the browser.
///
/// Events are delivered one at a time. An event raised while another is
/// being handled (the synchronous `blur` fired by `HTMLElement.blur()`) is
/// queued and handled right after.
pub struct Runtime {
    mounted: RefCell<Option<Mounted>>,
    queue: RefCell<VecDeque<PageEvent>>,
    draining: Cell<bool>,
    listeners: RefCell<Vec<EventListener>>,
}

impl Runtime {
    pub fn boot(config: ContactConfig) -> Result<Rc<Self>, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let runtime = Rc::new_cyclic(|weak: &Weak<Runtime>| {
            let sink: EventSink = {
                let weak = weak.clone();
                Rc::new(move |event| {
                    if let Some(runtime) = weak.upgrade() {
                        runtime.deliver(event);
                    }
                })
            };
            let mut page = WebPage::new(window, document, sink);
            let app = ContactPage::mount(&mut page, config);
            let listeners = app
                .subscriptions()
                .into_iter()
                .filter_map(|subscription| listen(&page, weak.clone(), subscription))
                .collect();
            Runtime {
                mounted: RefCell::new(Some(Mounted { page, app })),
                queue: RefCell::new(VecDeque::new()),
                draining: Cell::new(false),
                listeners: RefCell::new(listeners),
            }
        });
        debug!(
            listeners = runtime.listeners.borrow().len(),
            "Contact page runtime started"
        );
        Ok(runtime)
    }

    /// Handle an event, plus anything it raises; the result is for `event`
    /// itself. Reentrant calls only queue.
    pub fn deliver(&self, event: PageEvent) -> Dispatch {
        self.queue.borrow_mut().push_back(event);
        if self.draining.replace(true) {
            return Dispatch::IGNORED;
        }

        let mut first: Option<Dispatch> = None;
        loop {
            let Some(event) = self.queue.borrow_mut().pop_front() else {
                break;
            };
            let outcome = self.dispatch(&event);
            first.get_or_insert(outcome);
        }
        self.draining.set(false);
        first.unwrap_or_default()
    }

    fn dispatch(&self, event: &PageEvent) -> Dispatch {
        let mut mounted = self.mounted.borrow_mut();
        let Some(Mounted { page, app }) = mounted.as_mut() else {
            return Dispatch::IGNORED;
        };
        let outcome = app.dispatch(page, event);
        if let PageEvent::Timer(timer) = event {
            page.timer_fired(*timer);
        }
        outcome
    }

    /// Drop every listener, timer and observer and take the page down
    pub fn shutdown(&self) {
        self.listeners.borrow_mut().clear();
        self.queue.borrow_mut().clear();
        if let Some(Mounted { mut page, app }) = self.mounted.borrow_mut().take() {
            app.teardown(&mut page);
            page.shutdown();
        }
        debug!("Contact page runtime stopped");
    }
}

fn listen(
    page: &WebPage,
    runtime: Weak<Runtime>,
    subscription: Subscription,
) -> Option<EventListener> {
    let name = subscription.kind.dom_name()?;
    let (target, element): (EventTarget, Option<ElementId>) = match subscription.target {
        ListenTarget::Window => (page.window().clone().into(), None),
        ListenTarget::Document => (page.document().clone().into(), None),
        ListenTarget::Element(id) => (page.element(id)?.into(), Some(id)),
    };
    let kind = subscription.kind;
    let listener = EventListener::new_with_options(
        &target,
        name,
        EventListenerOptions {
            phase: EventListenerPhase::Bubble,
            passive: false,
        },
        move |event: &Event| {
            let Some(runtime) = runtime.upgrade() else {
                return;
            };
            let Some(page_event) = translate(kind, element, event) else {
                warn!(?kind, "Unhandled DOM event");
                return;
            };
            if runtime.deliver(page_event).default_prevented {
                event.prevent_default();
            }
        },
    );
    Some(listener)
}

/// Build the page event for a DOM event caught by a `kind` listener
fn translate(kind: EventKind, element: Option<ElementId>, event: &Event) -> Option<PageEvent> {
    let page_event = match kind {
        EventKind::Scroll => PageEvent::Scroll,
        EventKind::KeyDown => PageEvent::KeyDown {
            key: event.dyn_ref::<KeyboardEvent>()?.key(),
        },
        EventKind::Click => PageEvent::Click { target: element? },
        EventKind::Focus => PageEvent::Focus { target: element? },
        EventKind::Blur => PageEvent::Blur { target: element? },
        EventKind::Input => PageEvent::Input { target: element? },
        EventKind::Submit => PageEvent::Submit { form: element? },
        EventKind::PointerMove => {
            let mouse = event.dyn_ref::<MouseEvent>()?;
            PageEvent::PointerMove {
                target: element?,
                client_x: f64::from(mouse.client_x()),
                client_y: f64::from(mouse.client_y()),
            }
        }
        EventKind::PointerLeave => PageEvent::PointerLeave { target: element? },
        EventKind::Intersection | EventKind::Timer => return None,
    };
    Some(page_event)
}
