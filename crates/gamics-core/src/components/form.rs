//! Contact form flow.
//!
//! `Idle -> Validating -> (Invalid -> Idle) | (Submitting -> Idle)`.
//! Validation failures show an error notification and leave the form as it
//! was. A valid submission disables the button, waits the simulated latency,
//! then shows the success notification and clears the form. Nothing is sent
//! anywhere.

use tracing::{debug, info};

use crate::config::ContactConfig;
use crate::event::{Dispatch, EventKind, PageEvent, Subscription};
use crate::markup;
use crate::notification::Severity;
use crate::page::{ElementId, Page, TimerId};
use crate::validation::ContactSubmission;
use crate::visual::ButtonVisual;

use super::{Component, ComponentKind, Context};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Idle,
    /// Waiting for the simulated send to finish
    Submitting { timer: TimerId },
}

#[derive(Debug)]
pub struct ContactForm {
    form: ElementId,
    button: Option<ElementId>,
    fields: Vec<ElementId>,
    /// Button label captured at mount, restored after each send
    label: String,
    state: FormState,
}

impl ContactForm {
    pub fn mount(page: &dyn Page, config: &ContactConfig) -> Option<Self> {
        let form = page.query(markup::CONTACT_FORM)?;
        let button = page.query(markup::FORM_BUTTON);
        let label = button
            .map(|button| page.text_content(button))
            .unwrap_or_else(|| config.fallback_button_label.clone());
        Some(Self {
            form,
            button,
            fields: page.query_all(markup::FORM_FIELD),
            label,
            state: FormState::Idle,
        })
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    fn submit(&mut self, cx: &mut Context<'_>) {
        if let FormState::Submitting { .. } = self.state {
            debug!("Submit ignored while a send is in flight");
            return;
        }

        let submission = ContactSubmission::from_page(&*cx.page, self.form);
        if let Err(err) = submission.validate() {
            info!(reason = ?err, "Contact form rejected");
            cx.notifications.show(cx.page, err.to_string(), Severity::Error);
            return;
        }

        if let Some(button) = self.button {
            ButtonVisual::Loading {
                label: cx.config.loading_label.clone(),
            }
            .apply(cx.page, button);
        }
        let timer = cx.page.set_timeout(cx.config.submit_latency());
        self.state = FormState::Submitting { timer };
        info!(subject = %submission.subject, "Contact form sending");
    }

    fn complete(&mut self, cx: &mut Context<'_>) {
        self.state = FormState::Idle;
        if let Some(button) = self.button {
            ButtonVisual::Idle {
                label: self.label.clone(),
            }
            .apply(cx.page, button);
        }
        cx.notifications
            .show(cx.page, cx.config.success_message.clone(), Severity::Success);

        cx.page.reset_form(self.form);
        for field in &self.fields {
            cx.page.blur(*field);
            if let Some(parent) = cx.page.parent(*field) {
                cx.page.remove_class(parent, markup::FOCUSED);
            }
        }
        info!("Contact form sent");
    }
}

impl Component for ContactForm {
    fn kind(&self) -> ComponentKind {
        ComponentKind::ContactForm
    }

    fn subscriptions(&self) -> Vec<Subscription> {
        vec![Subscription::element(self.form, EventKind::Submit)]
    }

    fn handle(&mut self, cx: &mut Context<'_>, event: &PageEvent) -> Dispatch {
        match event {
            PageEvent::Submit { form } if *form == self.form => {
                self.submit(cx);
                Dispatch::PREVENT_DEFAULT
            }
            PageEvent::Timer(timer)
                if self.state == (FormState::Submitting { timer: *timer }) =>
            {
                self.complete(cx);
                Dispatch::IGNORED
            }
            _ => Dispatch::IGNORED,
        }
    }
}
