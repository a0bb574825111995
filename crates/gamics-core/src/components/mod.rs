//! Contact page components.
//!
//! Each component looks up its own markup at mount, declares the listeners
//! it needs, and reacts to events on the elements it owns. Components never
//! talk to each other.

mod anchors;
mod back_to_top;
mod cards;
mod focus;
mod form;
mod header;
mod nav;
mod search;

pub use anchors::*;
pub use back_to_top::*;
pub use cards::*;
pub use focus::*;
pub use form::*;
pub use header::*;
pub use nav::*;
pub use search::*;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::ContactConfig;
use crate::event::{Dispatch, PageEvent, Subscription};
use crate::notification::NotificationCenter;
use crate::page::Page;

/// Everything a component may touch while handling an event
pub struct Context<'a> {
    pub page: &'a mut dyn Page,
    pub notifications: &'a mut NotificationCenter,
    pub config: &'a ContactConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentKind {
    Navigation,
    Search,
    Header,
    ContactForm,
    FieldFocus,
    Cards,
    Anchors,
    BackToTop,
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ComponentKind::Navigation => "navigation",
            ComponentKind::Search => "search",
            ComponentKind::Header => "header",
            ComponentKind::ContactForm => "contact-form",
            ComponentKind::FieldFocus => "field-focus",
            ComponentKind::Cards => "cards",
            ComponentKind::Anchors => "anchors",
            ComponentKind::BackToTop => "back-to-top",
        };
        f.write_str(name)
    }
}

pub trait Component {
    fn kind(&self) -> ComponentKind;

    /// Listeners the host must register for this component
    fn subscriptions(&self) -> Vec<Subscription>;

    fn handle(&mut self, cx: &mut Context<'_>, event: &PageEvent) -> Dispatch;
}
