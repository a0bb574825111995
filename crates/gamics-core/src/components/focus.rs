//! Field focus animator.
//!
//! The enclosing `.form-group` carries "focused" while its field has focus
//! or holds content, so floating labels stay up after blur.

use crate::event::{Dispatch, EventKind, PageEvent, Subscription};
use crate::markup;
use crate::page::{ElementId, Page};

use super::{Component, ComponentKind, Context};

#[derive(Debug, Clone, Copy)]
struct TrackedField {
    field: ElementId,
    group: Option<ElementId>,
}

#[derive(Debug)]
pub struct FieldFocus {
    fields: Vec<TrackedField>,
}

impl FieldFocus {
    pub fn mount(page: &dyn Page) -> Option<Self> {
        let fields: Vec<_> = page
            .query_all(markup::FORM_FIELD)
            .into_iter()
            .map(|field| TrackedField {
                field,
                group: page.closest(field, markup::FORM_GROUP),
            })
            .collect();
        if fields.is_empty() {
            return None;
        }
        Some(Self { fields })
    }

    fn tracked(&self, target: ElementId) -> Option<TrackedField> {
        self.fields.iter().copied().find(|f| f.field == target)
    }
}

impl Component for FieldFocus {
    fn kind(&self) -> ComponentKind {
        ComponentKind::FieldFocus
    }

    fn subscriptions(&self) -> Vec<Subscription> {
        self.fields
            .iter()
            .flat_map(|tracked| {
                [EventKind::Focus, EventKind::Blur, EventKind::Input]
                    .map(|kind| Subscription::element(tracked.field, kind))
            })
            .collect()
    }

    fn handle(&mut self, cx: &mut Context<'_>, event: &PageEvent) -> Dispatch {
        let (target, kind) = match event {
            PageEvent::Focus { target }
            | PageEvent::Blur { target }
            | PageEvent::Input { target } => (*target, event.kind()),
            _ => return Dispatch::IGNORED,
        };
        let Some(TrackedField {
            group: Some(group), ..
        }) = self.tracked(target)
        else {
            return Dispatch::IGNORED;
        };

        let has_content = !cx.page.value(target).is_empty();
        match kind {
            EventKind::Focus => cx.page.add_class(group, markup::FOCUSED),
            EventKind::Blur if !has_content => cx.page.remove_class(group, markup::FOCUSED),
            EventKind::Input => cx.page.set_class(group, markup::FOCUSED, has_content),
            _ => {}
        }
        Dispatch::IGNORED
    }
}
