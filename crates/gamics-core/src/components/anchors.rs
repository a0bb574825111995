//! Smooth scrolling for in-page anchors.

use tracing::debug;

use crate::event::{Dispatch, EventKind, PageEvent, Subscription};
use crate::markup;
use crate::page::{ElementId, Page, ScrollBehavior};

use super::{Component, ComponentKind, Context};

#[derive(Debug)]
pub struct AnchorScroll {
    anchors: Vec<ElementId>,
}

/// `href` values that name an in-page target (not a bare `#`)
pub fn in_page_target(href: Option<&str>) -> Option<&str> {
    match href {
        Some(href) if href.starts_with('#') && href != "#" => Some(href),
        _ => None,
    }
}

impl AnchorScroll {
    pub fn mount(page: &dyn Page) -> Option<Self> {
        let anchors = page.query_all(markup::IN_PAGE_ANCHOR);
        if anchors.is_empty() {
            return None;
        }
        Some(Self { anchors })
    }
}

impl Component for AnchorScroll {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Anchors
    }

    fn subscriptions(&self) -> Vec<Subscription> {
        self.anchors
            .iter()
            .map(|anchor| Subscription::element(*anchor, EventKind::Click))
            .collect()
    }

    fn handle(&mut self, cx: &mut Context<'_>, event: &PageEvent) -> Dispatch {
        let PageEvent::Click { target } = event else {
            return Dispatch::IGNORED;
        };
        if !self.anchors.contains(target) {
            return Dispatch::IGNORED;
        }

        let href = cx.page.attribute(*target, "href");
        let Some(selector) = in_page_target(href.as_deref()) else {
            return Dispatch::IGNORED;
        };
        match cx.page.query(selector) {
            Some(destination) => {
                cx.page.scroll_into_view(destination, ScrollBehavior::Smooth);
            }
            None => debug!(%selector, "Anchor target missing"),
        }
        Dispatch::PREVENT_DEFAULT
    }
}
