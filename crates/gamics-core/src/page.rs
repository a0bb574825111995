//! The page handle components are written against.
//!
//! A [`Page`] is whatever document the components run in: the real DOM in
//! the browser binding, or [`crate::memory::MemoryPage`] in tests and the
//! replay tool. Components never hold on to the page; every call receives it
//! as `&mut dyn Page`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::notification::Notification;

/// Opaque handle to an element, issued by the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(pub usize);

/// Handle to a pending timeout, issued by [`Page::set_timeout`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimerId(pub u64);

/// Element box in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Pointer offset from the center, each axis in `-0.5..=0.5`.
    ///
    /// Returns `None` for a collapsed box.
    pub fn relative_offset(&self, client_x: f64, client_y: f64) -> Option<(f64, f64)> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }
        let x = (client_x - self.left) / self.width - 0.5;
        let y = (client_y - self.top) / self.height - 0.5;
        Some((x, y))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    Auto,
    #[default]
    Smooth,
}

/// Viewport intersection settings for [`Page::observe_intersection`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntersectionOptions {
    /// Visible fraction at which an element counts as intersecting
    pub threshold: f64,
    /// CSS margin applied to the viewport, e.g. `0px 0px -40px 0px`
    pub root_margin: String,
}

/// Document surface used by every component.
///
/// Lookups that find nothing return `None`/empty; mutations on stale handles
/// are ignored by implementations.
pub trait Page {
    /// First element matching `selector`
    fn query(&self, selector: &str) -> Option<ElementId>;

    /// Every element matching `selector`, in document order
    fn query_all(&self, selector: &str) -> Vec<ElementId>;

    fn parent(&self, element: ElementId) -> Option<ElementId>;

    /// Nearest inclusive ancestor matching `selector`
    fn closest(&self, element: ElementId, selector: &str) -> Option<ElementId>;

    fn attribute(&self, element: ElementId, name: &str) -> Option<String>;

    fn has_class(&self, element: ElementId, class: &str) -> bool;

    fn add_class(&mut self, element: ElementId, class: &str);

    fn remove_class(&mut self, element: ElementId, class: &str);

    /// Flip `class` and return whether it is now present
    fn toggle_class(&mut self, element: ElementId, class: &str) -> bool {
        if self.has_class(element, class) {
            self.remove_class(element, class);
            false
        } else {
            self.add_class(element, class);
            true
        }
    }

    fn set_class(&mut self, element: ElementId, class: &str, on: bool) {
        if on {
            self.add_class(element, class);
        } else {
            self.remove_class(element, class);
        }
    }

    /// Set an inline style property; an empty value removes it
    fn set_style(&mut self, element: ElementId, property: &str, value: &str);

    /// Current value of an input or textarea (empty for anything else)
    fn value(&self, element: ElementId) -> String;

    /// Value of the named control inside `form`, as `FormData.get` sees it
    fn form_value(&self, form: ElementId, name: &str) -> Option<String>;

    /// Restore every control of `form` to its default (empty) value
    fn reset_form(&mut self, form: ElementId);

    fn blur(&mut self, element: ElementId);

    fn text_content(&self, element: ElementId) -> String;

    fn set_text_content(&mut self, element: ElementId, text: &str);

    fn set_inner_html(&mut self, element: ElementId, html: &str);

    fn set_disabled(&mut self, element: ElementId, disabled: bool);

    fn bounding_rect(&self, element: ElementId) -> Rect;

    /// Vertical scroll offset of the viewport in CSS pixels
    fn scroll_y(&self) -> f64;

    fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior);

    /// Scroll so the element's top aligns with the viewport top
    fn scroll_into_view(&mut self, element: ElementId, behavior: ScrollBehavior);

    fn append_stylesheet(&mut self, css: &str);

    /// Start watching `targets`; the host reports changes as
    /// [`crate::PageEvent::Intersection`]
    fn observe_intersection(&mut self, targets: &[ElementId], options: &IntersectionOptions);

    /// Schedule a one-shot timer; the host reports it as
    /// [`crate::PageEvent::Timer`]
    fn set_timeout(&mut self, delay: Duration) -> TimerId;

    /// Render the notification and return its close control, if any
    fn mount_notification(&mut self, notification: &Notification) -> Option<ElementId>;

    fn unmount_notification(&mut self);
}
