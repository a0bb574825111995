//! Header scroll effect.

use crate::event::{Dispatch, EventKind, PageEvent, Subscription};
use crate::markup;
use crate::page::{ElementId, Page};

use super::{Component, ComponentKind, Context};

/// Header and back-to-top control are "active" while scrolled past the threshold
#[derive(Debug)]
pub struct HeaderScroll {
    header: Option<ElementId>,
    back_top: Option<ElementId>,
}

/// Inclusive: exactly at the threshold counts as scrolled
pub fn is_scrolled(offset_y: f64, threshold: f64) -> bool {
    offset_y >= threshold
}

impl HeaderScroll {
    pub fn mount(page: &dyn Page) -> Option<Self> {
        let header = page.query(markup::HEADER);
        let back_top = page.query(markup::BACK_TOP_BTN);
        if header.is_none() && back_top.is_none() {
            return None;
        }
        Some(Self { header, back_top })
    }
}

impl Component for HeaderScroll {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Header
    }

    fn subscriptions(&self) -> Vec<Subscription> {
        vec![Subscription::window(EventKind::Scroll)]
    }

    fn handle(&mut self, cx: &mut Context<'_>, event: &PageEvent) -> Dispatch {
        if !matches!(event, PageEvent::Scroll) {
            return Dispatch::IGNORED;
        }
        let scrolled = is_scrolled(cx.page.scroll_y(), cx.config.scroll_threshold);
        for element in self.header.iter().chain(self.back_top.iter()) {
            cx.page.set_class(*element, markup::ACTIVE, scrolled);
        }
        Dispatch::IGNORED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_inclusive() {
        assert!(is_scrolled(200.0, 200.0));
        assert!(!is_scrolled(199.0, 200.0));
        assert!(!is_scrolled(199.9, 200.0));
        assert!(is_scrolled(1000.0, 200.0));
    }
}
