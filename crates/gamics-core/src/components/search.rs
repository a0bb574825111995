//! Search overlay toggle.

use crate::event::{Dispatch, EventKind, PageEvent, Subscription};
use crate::markup;
use crate::page::{ElementId, Page};

use super::{Component, ComponentKind, Context};

const ESCAPE: &str = "Escape";

/// Any search toggler flips the shared search box; Escape closes it
#[derive(Debug)]
pub struct SearchOverlay {
    search_box: ElementId,
    togglers: Vec<ElementId>,
}

impl SearchOverlay {
    pub fn mount(page: &dyn Page) -> Option<Self> {
        let search_box = page.query(markup::SEARCH_BOX)?;
        Some(Self {
            search_box,
            togglers: page.query_all(markup::SEARCH_TOGGLER),
        })
    }
}

impl Component for SearchOverlay {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Search
    }

    fn subscriptions(&self) -> Vec<Subscription> {
        let mut subscriptions: Vec<_> = self
            .togglers
            .iter()
            .map(|element| Subscription::element(*element, EventKind::Click))
            .collect();
        subscriptions.push(Subscription::document(EventKind::KeyDown));
        subscriptions
    }

    fn handle(&mut self, cx: &mut Context<'_>, event: &PageEvent) -> Dispatch {
        match event {
            PageEvent::Click { target } if self.togglers.contains(target) => {
                cx.page.toggle_class(self.search_box, markup::ACTIVE);
            }
            PageEvent::KeyDown { key }
                if key == ESCAPE && cx.page.has_class(self.search_box, markup::ACTIVE) =>
            {
                cx.page.remove_class(self.search_box, markup::ACTIVE);
            }
            _ => {}
        }
        Dispatch::IGNORED
    }
}
