//! Contact card reveal and pointer tilt.

use crate::config::ContactConfig;
use crate::event::{Dispatch, EventKind, PageEvent, Subscription};
use crate::markup;
use crate::page::{ElementId, Page};
use crate::visual::CardVisual;

use super::{Component, ComponentKind, Context};

/// Cards start hidden with a staggered delay and animate in each time they
/// enter the viewport; while hovered they tilt toward the pointer.
#[derive(Debug)]
pub struct CardAnimator {
    cards: Vec<ElementId>,
}

impl CardAnimator {
    pub fn mount(page: &mut dyn Page, config: &ContactConfig) -> Option<Self> {
        let cards = page.query_all(markup::CONTACT_CARD);
        if cards.is_empty() {
            return None;
        }
        for (index, card) in cards.iter().enumerate() {
            CardVisual::hidden(index, config.card_stagger_secs)
                .style_patch()
                .apply(page, *card);
        }
        page.observe_intersection(&cards, &config.reveal_options());
        Some(Self { cards })
    }

    fn owns(&self, target: &ElementId) -> bool {
        self.cards.contains(target)
    }
}

impl Component for CardAnimator {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Cards
    }

    fn subscriptions(&self) -> Vec<Subscription> {
        self.cards
            .iter()
            .flat_map(|card| {
                [EventKind::PointerMove, EventKind::PointerLeave]
                    .map(|kind| Subscription::element(*card, kind))
            })
            .collect()
    }

    fn handle(&mut self, cx: &mut Context<'_>, event: &PageEvent) -> Dispatch {
        let (card, visual) = match event {
            PageEvent::Intersection {
                target,
                is_intersecting: true,
            } if self.owns(target) => (*target, CardVisual::Revealed),
            PageEvent::PointerMove {
                target,
                client_x,
                client_y,
            } if self.owns(target) => {
                let rect = cx.page.bounding_rect(*target);
                let Some((x, y)) = rect.relative_offset(*client_x, *client_y) else {
                    return Dispatch::IGNORED;
                };
                (*target, CardVisual::tilted(x, y, cx.config.tilt_max_deg))
            }
            PageEvent::PointerLeave { target } if self.owns(target) => {
                (*target, CardVisual::Resting)
            }
            _ => return Dispatch::IGNORED,
        };
        visual.style_patch().apply(cx.page, card);
        Dispatch::IGNORED
    }
}
