//! Replay scripts: a page to load and the visitor steps to play on it.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use gamics_core::memory::{MemoryPage, NodeSpec};
use gamics_core::session::Session;
use gamics_core::{ComponentKind, ContactError, ContactResult, Severity};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Script {
    /// Page body; the stock contact page when absent
    pub markup: Option<Vec<NodeSpec>>,
    pub steps: Vec<Step>,
}

impl Script {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse script {}", path.display()))
    }

    pub fn page(&self) -> MemoryPage {
        match &self.markup {
            Some(markup) => MemoryPage::from_markup(markup),
            None => MemoryPage::contact_fixture(),
        }
    }
}

fn visible() -> bool {
    true
}

/// One visitor action or check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    Click { selector: String },
    Focus { selector: String },
    Blur { selector: String },
    Type { selector: String, text: String },
    Clear { selector: String },
    Submit,
    PressKey { key: String },
    Scroll { y: f64 },
    PointerMove { selector: String, x: f64, y: f64 },
    PointerLeave { selector: String },
    Reveal {
        selector: String,
        #[serde(default = "visible")]
        visible: bool,
    },
    /// Let time pass, in milliseconds
    Wait { ms: u64 },
    Unmount { component: ComponentKind },
    ExpectNotification {
        #[serde(default)]
        message: Option<String>,
        #[serde(default)]
        severity: Option<Severity>,
    },
    ExpectNoNotification,
}

impl Step {
    pub fn name(&self) -> &'static str {
        match self {
            Step::Click { .. } => "click",
            Step::Focus { .. } => "focus",
            Step::Blur { .. } => "blur",
            Step::Type { .. } => "type",
            Step::Clear { .. } => "clear",
            Step::Submit => "submit",
            Step::PressKey { .. } => "press_key",
            Step::Scroll { .. } => "scroll",
            Step::PointerMove { .. } => "pointer_move",
            Step::PointerLeave { .. } => "pointer_leave",
            Step::Reveal { .. } => "reveal",
            Step::Wait { .. } => "wait",
            Step::Unmount { .. } => "unmount",
            Step::ExpectNotification { .. } => "expect_notification",
            Step::ExpectNoNotification => "expect_no_notification",
        }
    }

    pub fn run(&self, session: &mut Session) -> ContactResult<()> {
        match self {
            Step::Click { selector } => {
                session.click(selector)?;
            }
            Step::Focus { selector } => session.focus(selector)?,
            Step::Blur { selector } => session.blur(selector)?,
            Step::Type { selector, text } => session.type_text(selector, text)?,
            Step::Clear { selector } => session.clear(selector)?,
            Step::Submit => {
                session.submit()?;
            }
            Step::PressKey { key } => {
                session.press_key(key);
            }
            Step::Scroll { y } => {
                session.scroll_to(*y);
            }
            Step::PointerMove { selector, x, y } => session.pointer_move(selector, *x, *y)?,
            Step::PointerLeave { selector } => session.pointer_leave(selector)?,
            Step::Reveal { selector, visible } => session.reveal(selector, *visible)?,
            Step::Wait { ms } => session.advance_ms(*ms),
            Step::Unmount { component } => {
                let handle = session.app().handle_of(*component).ok_or_else(|| {
                    ContactError::ExpectationFailed {
                        expected: format!("{} mounted", component),
                        actual: "not mounted".to_string(),
                    }
                })?;
                session.app_mut().unmount(handle);
            }
            Step::ExpectNotification { message, severity } => {
                session.expect_notification(message.as_deref(), *severity)?
            }
            Step::ExpectNoNotification => session.expect_no_notification()?,
        }
        Ok(())
    }
}
