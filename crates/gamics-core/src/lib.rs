//! Gamics Contact Page Core Library
//!
//! Interaction behavior for the Gamics contact page, written against an
//! abstract page handle instead of a live browser document.
//!
//! ## Overview
//!
//! The contact page is a set of independent, event-driven components:
//!
//! - **Navigation toggle**: opens/closes the mobile nav panel
//! - **Search overlay**: toggles the search box, Escape closes it
//! - **Header scroll**: "active" header and back-to-top past 200px
//! - **Contact form**: validation, simulated submission, notifications
//! - **Field focus**: "focused" state on field groups
//! - **Card animator**: reveal on intersection plus pointer tilt
//! - **Anchor scroll**: smooth in-page navigation
//! - **Back to top**: smooth scroll to the origin
//!
//! A host (the browser binding, or [`memory::MemoryPage`] in tests) implements
//! [`Page`], delivers [`PageEvent`]s to [`ContactPage::dispatch`] and applies
//! the returned [`Dispatch`].
//!
//! ## Quick Start
//!
//! ```
//! use gamics_core::session::Session;
//!
//! let mut session = Session::contact_fixture();
//! session.type_text("[name=name]", "Ana").unwrap();
//! session.type_text("[name=email]", "ana@test.com").unwrap();
//! session.type_text("[name=subject]", "Hola").unwrap();
//! session.type_text("[name=message]", "Hi").unwrap();
//! session.submit().unwrap();
//! session.advance_ms(1200);
//!
//! let shown = session.page().notification().unwrap();
//! assert_eq!(shown.message, "¡Mensaje enviado con éxito! Te contactaremos pronto.");
//! ```

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod event;
pub mod markup;
pub mod memory;
pub mod notification;
pub mod page;
pub mod session;
pub mod validation;
pub mod visual;

// Re-exports
pub use app::{ComponentHandle, ComponentKind, ContactPage};
pub use config::ContactConfig;
pub use error::{ContactError, ContactResult, ValidationError};
pub use event::{Dispatch, EventKind, ListenTarget, PageEvent, Subscription};
pub use notification::{Notification, NotificationCenter, NotificationId, Severity};
pub use page::{ElementId, IntersectionOptions, Page, Rect, ScrollBehavior, TimerId};
