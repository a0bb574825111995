//! Page controller: mounts the components and routes events to them.

use tracing::{debug, info};

use crate::components::{
    AnchorScroll, BackToTop, CardAnimator, Component, ContactForm, Context, FieldFocus,
    HeaderScroll, NavigationToggle, SearchOverlay,
};
use crate::config::ContactConfig;
use crate::event::{Dispatch, PageEvent, Subscription};
use crate::markup;
use crate::notification::NotificationCenter;
use crate::page::Page;

pub use crate::components::ComponentKind;

/// Line logged once the page is wired
pub const LOADED_MESSAGE: &str = "Gamics Contact Page - scriptContacto.js cargado correctamente ✅";

/// Disposer for one mounted component, see [`ContactPage::unmount`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentHandle {
    pub kind: ComponentKind,
    slot: usize,
}

struct Mounted {
    slot: usize,
    component: Box<dyn Component>,
}

/// The contact page with every component whose markup was found.
///
/// # Example
///
/// ```
/// use gamics_core::memory::MemoryPage;
/// use gamics_core::{ContactConfig, ContactPage, PageEvent};
///
/// let mut page = MemoryPage::contact_fixture();
/// let mut app = ContactPage::mount(&mut page, ContactConfig::default());
///
/// page.set_scroll_y(250.0);
/// app.dispatch(&mut page, &PageEvent::Scroll);
/// ```
pub struct ContactPage {
    config: ContactConfig,
    notifications: NotificationCenter,
    components: Vec<Mounted>,
}

impl ContactPage {
    /// Wire the page with a fresh notification center
    pub fn mount(page: &mut dyn Page, config: ContactConfig) -> Self {
        let notifications = NotificationCenter::new(config.notification_lifetime());
        Self::mount_with(page, config, notifications)
    }

    /// Wire the page around an existing notification center
    pub fn mount_with(
        page: &mut dyn Page,
        config: ContactConfig,
        notifications: NotificationCenter,
    ) -> Self {
        let mut components: Vec<Box<dyn Component>> = Vec::new();
        if let Some(nav) = NavigationToggle::mount(&*page) {
            components.push(Box::new(nav));
        }
        if let Some(search) = SearchOverlay::mount(&*page) {
            components.push(Box::new(search));
        }
        if let Some(header) = HeaderScroll::mount(&*page) {
            components.push(Box::new(header));
        }
        if let Some(form) = ContactForm::mount(&*page, &config) {
            components.push(Box::new(form));
        }
        if let Some(focus) = FieldFocus::mount(&*page) {
            components.push(Box::new(focus));
        }
        if let Some(cards) = CardAnimator::mount(page, &config) {
            components.push(Box::new(cards));
        }
        page.append_stylesheet(markup::KEYFRAMES_CSS);
        if let Some(anchors) = AnchorScroll::mount(&*page) {
            components.push(Box::new(anchors));
        }
        if let Some(back_to_top) = BackToTop::mount(&*page) {
            components.push(Box::new(back_to_top));
        }

        let components: Vec<_> = components
            .into_iter()
            .enumerate()
            .map(|(slot, component)| Mounted { slot, component })
            .collect();
        for mounted in &components {
            debug!(component = %mounted.component.kind(), "Component mounted");
        }
        info!("{}", LOADED_MESSAGE);

        Self {
            config,
            notifications,
            components,
        }
    }

    pub fn config(&self) -> &ContactConfig {
        &self.config
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn handles(&self) -> Vec<ComponentHandle> {
        self.components
            .iter()
            .map(|mounted| ComponentHandle {
                kind: mounted.component.kind(),
                slot: mounted.slot,
            })
            .collect()
    }

    pub fn handle_of(&self, kind: ComponentKind) -> Option<ComponentHandle> {
        self.handles().into_iter().find(|handle| handle.kind == kind)
    }

    pub fn is_mounted(&self, kind: ComponentKind) -> bool {
        self.handle_of(kind).is_some()
    }

    /// Listeners the host must register for all mounted components
    pub fn subscriptions(&self) -> Vec<Subscription> {
        let mut subscriptions: Vec<Subscription> = Vec::new();
        for mounted in &self.components {
            for subscription in mounted.component.subscriptions() {
                if !subscriptions.contains(&subscription) {
                    subscriptions.push(subscription);
                }
            }
        }
        subscriptions
    }

    /// Detach one component; returns false if it was already gone
    pub fn unmount(&mut self, handle: ComponentHandle) -> bool {
        let before = self.components.len();
        self.components.retain(|mounted| mounted.slot != handle.slot);
        let removed = self.components.len() != before;
        if removed {
            debug!(component = %handle.kind, "Component unmounted");
        }
        removed
    }

    /// Detach everything and take down a visible notification
    pub fn teardown(mut self, page: &mut dyn Page) {
        self.components.clear();
        self.notifications.dismiss(page);
        debug!("Contact page torn down");
    }

    /// Route one event to the notification center and every component
    pub fn dispatch(&mut self, page: &mut dyn Page, event: &PageEvent) -> Dispatch {
        let mut outcome = self.notifications.handle(page, event);
        let mut cx = Context {
            page,
            notifications: &mut self.notifications,
            config: &self.config,
        };
        for mounted in &mut self.components {
            outcome = outcome.merge(mounted.component.handle(&mut cx, event));
        }
        outcome
    }
}
