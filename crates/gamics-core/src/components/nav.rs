//! Mobile navigation panel toggle.

use crate::event::{Dispatch, EventKind, PageEvent, Subscription};
use crate::markup;
use crate::page::{ElementId, Page};

use super::{Component, ComponentKind, Context};

/// Opens/closes the nav panel; any nav link closes it
#[derive(Debug)]
pub struct NavigationToggle {
    navbar: Option<ElementId>,
    toggler: Option<ElementId>,
    links: Vec<ElementId>,
}

impl NavigationToggle {
    pub fn mount(page: &dyn Page) -> Option<Self> {
        let toggler = page.query(markup::NAV_TOGGLER);
        let links = page.query_all(markup::NAV_LINK);
        if toggler.is_none() && links.is_empty() {
            return None;
        }
        Some(Self {
            navbar: page.query(markup::NAVBAR),
            toggler,
            links,
        })
    }

    fn close(&self, page: &mut dyn Page) {
        for element in self.navbar.iter().chain(self.toggler.iter()) {
            page.remove_class(*element, markup::ACTIVE);
        }
    }
}

impl Component for NavigationToggle {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Navigation
    }

    fn subscriptions(&self) -> Vec<Subscription> {
        self.toggler
            .iter()
            .chain(self.links.iter())
            .map(|element| Subscription::element(*element, EventKind::Click))
            .collect()
    }

    fn handle(&mut self, cx: &mut Context<'_>, event: &PageEvent) -> Dispatch {
        let PageEvent::Click { target } = event else {
            return Dispatch::IGNORED;
        };
        if Some(*target) == self.toggler {
            if let Some(navbar) = self.navbar {
                cx.page.toggle_class(navbar, markup::ACTIVE);
            }
            cx.page.toggle_class(*target, markup::ACTIVE);
        } else if self.links.contains(target) {
            self.close(cx.page);
        }
        Dispatch::IGNORED
    }
}
