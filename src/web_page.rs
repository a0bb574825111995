//! [`Page`] over the live browser document.
//!
//! Elements get an [`ElementId`] the first time a lookup returns them; the
//! same DOM node always maps to the same id. Timers, the intersection
//! observer and the notification's close control report back through the
//! event sink handed in at construction.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use gamics_core::{
    ElementId, IntersectionOptions, Notification, Page, PageEvent, Rect, ScrollBehavior, TimerId,
};
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, FormData, HtmlButtonElement, HtmlElement, HtmlFormElement,
    HtmlInputElement, HtmlTextAreaElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions,
    Window,
};

/// Where the page reports events it raises on its own
pub type EventSink = Rc<dyn Fn(PageEvent)>;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

struct Observer {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

struct MountedNotification {
    root: Element,
    close: ElementId,
    _close_listener: EventListener,
}

pub struct WebPage {
    window: Window,
    document: Document,
    elements: RefCell<Vec<Option<Element>>>,
    sink: EventSink,
    next_timer: u64,
    timers: HashMap<TimerId, Timeout>,
    observers: Vec<Observer>,
    notification: Option<MountedNotification>,
}

impl WebPage {
    pub fn new(window: Window, document: Document, sink: EventSink) -> Self {
        Self {
            window,
            document,
            elements: RefCell::new(Vec::new()),
            sink,
            next_timer: 0,
            timers: HashMap::new(),
            observers: Vec::new(),
            notification: None,
        }
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The DOM node behind an id
    pub fn element(&self, id: ElementId) -> Option<Element> {
        self.elements.borrow().get(id.0).cloned().flatten()
    }

    /// Forget a timer the browser has already run
    pub fn timer_fired(&mut self, id: TimerId) {
        self.timers.remove(&id);
    }

    /// Cancel pending timers and stop observing
    pub fn shutdown(&mut self) {
        self.timers.clear();
        for observer in self.observers.drain(..) {
            observer.observer.disconnect();
        }
        self.unmount_notification();
    }

    fn register(&self, element: Element) -> ElementId {
        register_in(&mut self.elements.borrow_mut(), element)
    }

    /// Release a node nothing will look up again; its id is not reused
    fn forget(&self, id: ElementId) {
        forget_in(&mut self.elements.borrow_mut(), id);
    }

    fn html(&self, id: ElementId) -> Option<HtmlElement> {
        self.element(id)?.dyn_into::<HtmlElement>().ok()
    }

    fn create(&self, tag: &str, class: &str) -> Option<Element> {
        match self.document.create_element(tag) {
            Ok(element) => {
                if !class.is_empty() {
                    element.set_class_name(class);
                }
                Some(element)
            }
            Err(err) => {
                warn!(?err, tag, "createElement failed");
                None
            }
        }
    }
}

fn register_in<T: PartialEq>(elements: &mut Vec<Option<T>>, element: T) -> ElementId {
    let known = elements
        .iter()
        .position(|slot| slot.as_ref() == Some(&element));
    if let Some(index) = known {
        return ElementId(index);
    }
    elements.push(Some(element));
    ElementId(elements.len() - 1)
}

fn forget_in<T>(elements: &mut [Option<T>], id: ElementId) {
    if let Some(slot) = elements.get_mut(id.0) {
        *slot = None;
    }
}

/// Log a failed DOM call and carry on
fn checked<T>(result: Result<T, JsValue>, call: &'static str) {
    if let Err(err) = result {
        warn!(?err, call, "DOM call failed");
    }
}

fn dom_behavior(behavior: ScrollBehavior) -> web_sys::ScrollBehavior {
    match behavior {
        ScrollBehavior::Auto => web_sys::ScrollBehavior::Auto,
        ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
    }
}

impl Page for WebPage {
    fn query(&self, selector: &str) -> Option<ElementId> {
        match self.document.query_selector(selector) {
            Ok(found) => found.map(|element| self.register(element)),
            Err(err) => {
                warn!(?err, selector, "querySelector failed");
                None
            }
        }
    }

    fn query_all(&self, selector: &str) -> Vec<ElementId> {
        let list = match self.document.query_selector_all(selector) {
            Ok(list) => list,
            Err(err) => {
                warn!(?err, selector, "querySelectorAll failed");
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|index| list.get(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(|element| self.register(element))
            .collect()
    }

    fn parent(&self, element: ElementId) -> Option<ElementId> {
        let parent = self.element(element)?.parent_element()?;
        Some(self.register(parent))
    }

    fn closest(&self, element: ElementId, selector: &str) -> Option<ElementId> {
        match self.element(element)?.closest(selector) {
            Ok(found) => found.map(|ancestor| self.register(ancestor)),
            Err(err) => {
                warn!(?err, selector, "closest failed");
                None
            }
        }
    }

    fn attribute(&self, element: ElementId, name: &str) -> Option<String> {
        self.element(element)?.get_attribute(name)
    }

    fn has_class(&self, element: ElementId, class: &str) -> bool {
        self.element(element)
            .map(|element| element.class_list().contains(class))
            .unwrap_or(false)
    }

    fn add_class(&mut self, element: ElementId, class: &str) {
        if let Some(element) = self.element(element) {
            if let Err(err) = element.class_list().add_1(class) {
                warn!(?err, class, "classList.add failed");
            }
        }
    }

    fn remove_class(&mut self, element: ElementId, class: &str) {
        if let Some(element) = self.element(element) {
            if let Err(err) = element.class_list().remove_1(class) {
                warn!(?err, class, "classList.remove failed");
            }
        }
    }

    fn set_style(&mut self, element: ElementId, property: &str, value: &str) {
        let Some(element) = self.html(element) else {
            return;
        };
        let style = element.style();
        let result = if value.is_empty() {
            style.remove_property(property).map(|_| ())
        } else {
            style.set_property(property, value)
        };
        if let Err(err) = result {
            warn!(?err, property, "style update failed");
        }
    }

    fn value(&self, element: ElementId) -> String {
        let Some(element) = self.element(element) else {
            return String::new();
        };
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
            textarea.value()
        } else {
            String::new()
        }
    }

    fn form_value(&self, form: ElementId, name: &str) -> Option<String> {
        let form = self.element(form)?.dyn_into::<HtmlFormElement>().ok()?;
        match FormData::new_with_form(&form) {
            Ok(data) => data.get(name).as_string(),
            Err(err) => {
                warn!(?err, "FormData failed");
                None
            }
        }
    }

    fn reset_form(&mut self, form: ElementId) {
        if let Some(form) = self
            .element(form)
            .and_then(|element| element.dyn_into::<HtmlFormElement>().ok())
        {
            form.reset();
        }
    }

    fn blur(&mut self, element: ElementId) {
        if let Some(element) = self.html(element) {
            if let Err(err) = element.blur() {
                warn!(?err, "blur failed");
            }
        }
    }

    fn text_content(&self, element: ElementId) -> String {
        self.element(element)
            .and_then(|element| element.text_content())
            .unwrap_or_default()
    }

    fn set_text_content(&mut self, element: ElementId, text: &str) {
        if let Some(element) = self.element(element) {
            element.set_text_content(Some(text));
        }
    }

    fn set_inner_html(&mut self, element: ElementId, html: &str) {
        if let Some(element) = self.element(element) {
            element.set_inner_html(html);
        }
    }

    fn set_disabled(&mut self, element: ElementId, disabled: bool) {
        let Some(element) = self.element(element) else {
            return;
        };
        if let Some(button) = element.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(disabled);
            return;
        }
        let result = if disabled {
            element.set_attribute("disabled", "")
        } else {
            element.remove_attribute("disabled")
        };
        if let Err(err) = result {
            warn!(?err, "disabled update failed");
        }
    }

    fn bounding_rect(&self, element: ElementId) -> Rect {
        self.element(element)
            .map(|element| {
                let rect = element.get_bounding_client_rect();
                Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
            })
            .unwrap_or_default()
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(dom_behavior(behavior));
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn scroll_into_view(&mut self, element: ElementId, behavior: ScrollBehavior) {
        let Some(element) = self.element(element) else {
            return;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(dom_behavior(behavior));
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn append_stylesheet(&mut self, css: &str) {
        let (Some(style), Some(head)) = (self.create("style", ""), self.document.head()) else {
            return;
        };
        style.set_text_content(Some(css));
        if let Err(err) = head.append_child(&style) {
            warn!(?err, "stylesheet injection failed");
        }
    }

    fn observe_intersection(&mut self, targets: &[ElementId], options: &IntersectionOptions) {
        let watched: Vec<(Element, ElementId)> = targets
            .iter()
            .filter_map(|id| self.element(*id).map(|element| (element, *id)))
            .collect();
        if watched.is_empty() {
            return;
        }

        let sink = Rc::clone(&self.sink);
        let lookup = watched.clone();
        let callback: ObserverCallback = Closure::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let target = entry.target();
                    let Some((_, id)) = lookup.iter().find(|(element, _)| *element == target)
                    else {
                        continue;
                    };
                    sink(PageEvent::Intersection {
                        target: *id,
                        is_intersecting: entry.is_intersecting(),
                    });
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin);
        let observer =
            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            {
                Ok(observer) => observer,
                Err(err) => {
                    warn!(?err, "IntersectionObserver unavailable");
                    return;
                }
            };
        for (element, _) in &watched {
            observer.observe(element);
        }
        self.observers.push(Observer {
            observer,
            _callback: callback,
        });
    }

    fn set_timeout(&mut self, delay: Duration) -> TimerId {
        let id = TimerId(self.next_timer);
        self.next_timer += 1;
        let sink = Rc::clone(&self.sink);
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        let timeout = Timeout::new(millis, move || sink(PageEvent::Timer(id)));
        self.timers.insert(id, timeout);
        id
    }

    fn mount_notification(&mut self, notification: &Notification) -> Option<ElementId> {
        let body = self.document.body()?;
        let root = self.create("div", &notification.severity.class_name())?;
        checked(root.set_attribute("role", Notification::ROLE), "setAttribute");
        checked(
            root.set_attribute("aria-live", Notification::ARIA_LIVE),
            "setAttribute",
        );

        let content = self.create("div", "notification-content")?;
        let icon = self.create("ion-icon", "")?;
        checked(
            icon.set_attribute("name", notification.severity.icon()),
            "setAttribute",
        );
        let message = self.create("span", "")?;
        message.set_text_content(Some(&notification.message));
        checked(content.append_child(&icon), "appendChild");
        checked(content.append_child(&message), "appendChild");

        let close = self.create("button", "notification-close")?;
        checked(
            close.set_attribute("aria-label", Notification::CLOSE_LABEL),
            "setAttribute",
        );
        let close_icon = self.create("ion-icon", "")?;
        checked(
            close_icon.set_attribute("name", Notification::CLOSE_ICON),
            "setAttribute",
        );
        checked(close.append_child(&close_icon), "appendChild");

        checked(root.append_child(&content), "appendChild");
        checked(root.append_child(&close), "appendChild");
        if let Err(err) = body.append_child(&root) {
            warn!(?err, "notification mount failed");
            return None;
        }

        let close_id = self.register(close.clone());
        let sink = Rc::clone(&self.sink);
        let close_listener = EventListener::new(&close, "click", move |_event| {
            sink(PageEvent::Click { target: close_id });
        });
        self.notification = Some(MountedNotification {
            root,
            close: close_id,
            _close_listener: close_listener,
        });
        Some(close_id)
    }

    fn unmount_notification(&mut self) {
        if let Some(mounted) = self.notification.take() {
            mounted.root.remove();
            self.forget(mounted.close);
        }
    }
}
