//! Back-to-top control.

use crate::event::{Dispatch, EventKind, PageEvent, Subscription};
use crate::markup;
use crate::page::{ElementId, Page, ScrollBehavior};

use super::{Component, ComponentKind, Context};

#[derive(Debug)]
pub struct BackToTop {
    button: ElementId,
}

impl BackToTop {
    pub fn mount(page: &dyn Page) -> Option<Self> {
        page.query(markup::BACK_TOP_BTN)
            .map(|button| Self { button })
    }
}

impl Component for BackToTop {
    fn kind(&self) -> ComponentKind {
        ComponentKind::BackToTop
    }

    fn subscriptions(&self) -> Vec<Subscription> {
        vec![Subscription::element(self.button, EventKind::Click)]
    }

    fn handle(&mut self, cx: &mut Context<'_>, event: &PageEvent) -> Dispatch {
        match event {
            PageEvent::Click { target } if *target == self.button => {
                cx.page.scroll_to(0.0, ScrollBehavior::Smooth);
                Dispatch::PREVENT_DEFAULT
            }
            _ => Dispatch::IGNORED,
        }
    }
}
