//! Events delivered by the host and the listeners components ask for.

use serde::{Deserialize, Serialize};

use crate::page::{ElementId, TimerId};

/// A browser event, already resolved to the element whose listener fired
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    Click { target: ElementId },
    KeyDown { key: String },
    /// Window scrolled; the offset is read from [`crate::Page::scroll_y`]
    Scroll,
    Focus { target: ElementId },
    Blur { target: ElementId },
    Input { target: ElementId },
    Submit { form: ElementId },
    PointerMove {
        target: ElementId,
        client_x: f64,
        client_y: f64,
    },
    PointerLeave { target: ElementId },
    Intersection {
        target: ElementId,
        is_intersecting: bool,
    },
    Timer(TimerId),
}

impl PageEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            PageEvent::Click { .. } => EventKind::Click,
            PageEvent::KeyDown { .. } => EventKind::KeyDown,
            PageEvent::Scroll => EventKind::Scroll,
            PageEvent::Focus { .. } => EventKind::Focus,
            PageEvent::Blur { .. } => EventKind::Blur,
            PageEvent::Input { .. } => EventKind::Input,
            PageEvent::Submit { .. } => EventKind::Submit,
            PageEvent::PointerMove { .. } => EventKind::PointerMove,
            PageEvent::PointerLeave { .. } => EventKind::PointerLeave,
            PageEvent::Intersection { .. } => EventKind::Intersection,
            PageEvent::Timer(_) => EventKind::Timer,
        }
    }
}

/// Listener type, named after the DOM event it maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    Click,
    KeyDown,
    Scroll,
    Focus,
    Blur,
    Input,
    Submit,
    PointerMove,
    PointerLeave,
    Intersection,
    Timer,
}

impl EventKind {
    /// DOM event type string, for the listener-based kinds
    pub fn dom_name(&self) -> Option<&'static str> {
        match self {
            EventKind::Click => Some("click"),
            EventKind::KeyDown => Some("keydown"),
            EventKind::Scroll => Some("scroll"),
            EventKind::Focus => Some("focus"),
            EventKind::Blur => Some("blur"),
            EventKind::Input => Some("input"),
            EventKind::Submit => Some("submit"),
            EventKind::PointerMove => Some("mousemove"),
            EventKind::PointerLeave => Some("mouseleave"),
            // Delivered by the observer and timer machinery, not listeners
            EventKind::Intersection | EventKind::Timer => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenTarget {
    Window,
    Document,
    Element(ElementId),
}

/// One listener a mounted component needs the host to register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription {
    pub target: ListenTarget,
    pub kind: EventKind,
}

impl Subscription {
    pub fn element(element: ElementId, kind: EventKind) -> Self {
        Self {
            target: ListenTarget::Element(element),
            kind,
        }
    }

    pub fn window(kind: EventKind) -> Self {
        Self {
            target: ListenTarget::Window,
            kind,
        }
    }

    pub fn document(kind: EventKind) -> Self {
        Self {
            target: ListenTarget::Document,
            kind,
        }
    }
}

/// What the host must do after an event was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dispatch {
    /// Suppress the browser's default action (`preventDefault`)
    pub default_prevented: bool,
}

impl Dispatch {
    pub const IGNORED: Dispatch = Dispatch {
        default_prevented: false,
    };

    pub const PREVENT_DEFAULT: Dispatch = Dispatch {
        default_prevented: true,
    };

    pub fn merge(self, other: Dispatch) -> Dispatch {
        Dispatch {
            default_prevented: self.default_prevented || other.default_prevented,
        }
    }
}
