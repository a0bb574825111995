//! Scripted visitor sessions against a [`MemoryPage`].
//!
//! [`Session`] plays the browser: each action updates the page the way a
//! real visitor would and dispatches the same events, in the same order,
//! that the browser binding delivers.

use std::time::Duration;

use tracing::debug;

use crate::app::ContactPage;
use crate::config::ContactConfig;
use crate::error::{ContactError, ContactResult};
use crate::event::{Dispatch, PageEvent};
use crate::markup;
use crate::memory::MemoryPage;
use crate::notification::Severity;
use crate::page::{ElementId, Page};

pub struct Session {
    page: MemoryPage,
    app: ContactPage,
}

impl Session {
    pub fn new(mut page: MemoryPage, config: ContactConfig) -> Self {
        let app = ContactPage::mount(&mut page, config);
        Self { page, app }
    }

    /// Session over the stock contact page with default settings
    pub fn contact_fixture() -> Self {
        Self::new(MemoryPage::contact_fixture(), ContactConfig::default())
    }

    pub fn page(&self) -> &MemoryPage {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut MemoryPage {
        &mut self.page
    }

    pub fn app(&self) -> &ContactPage {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut ContactPage {
        &mut self.app
    }

    pub fn dispatch(&mut self, event: PageEvent) -> Dispatch {
        debug!(?event, "Dispatching");
        self.app.dispatch(&mut self.page, &event)
    }

    pub fn find(&self, selector: &str) -> ContactResult<ElementId> {
        self.page
            .query(selector)
            .ok_or_else(|| ContactError::SelectorNotFound(selector.to_string()))
    }

    pub fn find_all(&self, selector: &str) -> ContactResult<Vec<ElementId>> {
        let found = self.page.query_all(selector);
        if found.is_empty() {
            return Err(ContactError::SelectorNotFound(selector.to_string()));
        }
        Ok(found)
    }

    pub fn click(&mut self, selector: &str) -> ContactResult<Dispatch> {
        let target = self.find(selector)?;
        Ok(self.dispatch(PageEvent::Click { target }))
    }

    /// Move focus to the element, blurring whatever had it
    pub fn focus(&mut self, selector: &str) -> ContactResult<()> {
        let target = self.find(selector)?;
        if self.page.focused() == Some(target) {
            return Ok(());
        }
        if let Some(previous) = self.page.focused() {
            self.page.blur(previous);
            self.dispatch(PageEvent::Blur { target: previous });
        }
        self.page.focus(target);
        self.dispatch(PageEvent::Focus { target });
        Ok(())
    }

    pub fn blur(&mut self, selector: &str) -> ContactResult<()> {
        let target = self.find(selector)?;
        if self.page.focused() == Some(target) {
            self.page.blur(target);
            self.dispatch(PageEvent::Blur { target });
        }
        Ok(())
    }

    /// Focus the control and replace its value, as typing would
    pub fn type_text(&mut self, selector: &str, text: &str) -> ContactResult<()> {
        self.focus(selector)?;
        let target = self.find(selector)?;
        self.page.set_value(target, text);
        self.dispatch(PageEvent::Input { target });
        Ok(())
    }

    /// Focus the control and delete its content
    pub fn clear(&mut self, selector: &str) -> ContactResult<()> {
        self.type_text(selector, "")
    }

    /// Submit the contact form
    pub fn submit(&mut self) -> ContactResult<Dispatch> {
        let form = self.find(markup::CONTACT_FORM)?;
        Ok(self.dispatch(PageEvent::Submit { form }))
    }

    pub fn press_key(&mut self, key: &str) -> Dispatch {
        self.dispatch(PageEvent::KeyDown {
            key: key.to_string(),
        })
    }

    pub fn scroll_to(&mut self, offset_y: f64) -> Dispatch {
        self.page.set_scroll_y(offset_y);
        self.dispatch(PageEvent::Scroll)
    }

    pub fn pointer_move(&mut self, selector: &str, client_x: f64, client_y: f64) -> ContactResult<()> {
        let target = self.find(selector)?;
        self.dispatch(PageEvent::PointerMove {
            target,
            client_x,
            client_y,
        });
        Ok(())
    }

    pub fn pointer_leave(&mut self, selector: &str) -> ContactResult<()> {
        let target = self.find(selector)?;
        self.dispatch(PageEvent::PointerLeave { target });
        Ok(())
    }

    /// Report every matching element as entering (or leaving) the viewport
    pub fn reveal(&mut self, selector: &str, is_intersecting: bool) -> ContactResult<()> {
        for target in self.find_all(selector)? {
            self.dispatch(PageEvent::Intersection {
                target,
                is_intersecting,
            });
        }
        Ok(())
    }

    /// Let time pass, firing timers as they come due (including timers
    /// scheduled by earlier ones inside the window)
    pub fn advance(&mut self, by: Duration) {
        let deadline = self.page.now() + by;
        while let Some(timer) = self.page.pop_due(deadline) {
            self.dispatch(PageEvent::Timer(timer));
        }
        self.page.set_now(deadline);
    }

    pub fn advance_ms(&mut self, millis: u64) {
        self.advance(Duration::from_millis(millis));
    }

    /// Check the visible notification; `None` fields are not checked
    pub fn expect_notification(
        &self,
        message: Option<&str>,
        severity: Option<Severity>,
    ) -> ContactResult<()> {
        let Some(shown) = self.page.notification() else {
            return Err(ContactError::ExpectationFailed {
                expected: "a notification".to_string(),
                actual: "none".to_string(),
            });
        };
        if let Some(message) = message {
            if shown.message != message {
                return Err(ContactError::ExpectationFailed {
                    expected: format!("message {:?}", message),
                    actual: format!("message {:?}", shown.message),
                });
            }
        }
        if let Some(severity) = severity {
            if shown.severity != severity {
                return Err(ContactError::ExpectationFailed {
                    expected: format!("severity {}", severity),
                    actual: format!("severity {}", shown.severity),
                });
            }
        }
        Ok(())
    }

    pub fn expect_no_notification(&self) -> ContactResult<()> {
        match self.page.notification() {
            None => Ok(()),
            Some(shown) => Err(ContactError::ExpectationFailed {
                expected: "no notification".to_string(),
                actual: format!("{:?}", shown.message),
            }),
        }
    }

    /// Tear the page down, returning the document as it was left
    pub fn finish(mut self) -> MemoryPage {
        self.app.teardown(&mut self.page);
        self.page
    }
}
