//! In-memory page.
//!
//! A small element tree that implements [`Page`] well enough to run every
//! component without a browser: classes, attributes, inline styles, control
//! values, a virtual clock for timers, and a log of scroll requests.
//!
//! Selectors are compound only (`tag`, `.class`, `#id`, `[attr]`,
//! `[attr="v"]`, `[attr^="v"]`) and may be comma separated. Combinators are
//! not supported and match nothing.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::notification::Notification;
use crate::page::{ElementId, IntersectionOptions, Page, Rect, ScrollBehavior, TimerId};

/// Controls whose value `FormData` would pick up
const FORM_CONTROLS: [&str; 3] = ["input", "textarea", "select"];

#[derive(Debug, Clone, Default)]
struct Node {
    tag: String,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    value: String,
    text: String,
    inner_html: Option<String>,
    disabled: bool,
    rect: Rect,
    attached: bool,
}

/// A scroll the page was asked to perform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScrollRequest {
    To { top: f64, behavior: ScrollBehavior },
    IntoView { element: ElementId, behavior: ScrollBehavior },
}

#[derive(Debug, Clone)]
struct MountedNotification {
    root: ElementId,
    close: ElementId,
    notification: Notification,
}

#[derive(Debug, Clone, Copy)]
struct PendingTimer {
    id: TimerId,
    due: Duration,
}

/// Element description used to build a page from data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeSpec {
    pub tag: String,
    pub classes: Vec<String>,
    pub attributes: BTreeMap<String, String>,
    pub text: Option<String>,
    pub value: Option<String>,
    pub rect: Option<Rect>,
    pub children: Vec<NodeSpec>,
}

#[derive(Debug, Clone)]
pub struct MemoryPage {
    nodes: Vec<Node>,
    scroll_y: f64,
    focused: Option<ElementId>,
    now: Duration,
    next_timer: u64,
    timers: Vec<PendingTimer>,
    stylesheets: Vec<String>,
    observed: Vec<(ElementId, IntersectionOptions)>,
    scrolls: Vec<ScrollRequest>,
    notification: Option<MountedNotification>,
}

impl Default for MemoryPage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryPage {
    /// Empty document with only a `body`
    pub fn new() -> Self {
        let body = Node {
            tag: "body".to_string(),
            attached: true,
            ..Node::default()
        };
        Self {
            nodes: vec![body],
            scroll_y: 0.0,
            focused: None,
            now: Duration::ZERO,
            next_timer: 0,
            timers: Vec::new(),
            stylesheets: Vec::new(),
            observed: Vec::new(),
            scrolls: Vec::new(),
            notification: None,
        }
    }

    pub fn body(&self) -> ElementId {
        ElementId(0)
    }

    /// Build a page whose body holds `markup`
    pub fn from_markup(markup: &[NodeSpec]) -> Self {
        let mut page = Self::new();
        let body = page.body();
        for spec in markup {
            page.append_spec(body, spec);
        }
        page
    }

    fn append_spec(&mut self, parent: ElementId, spec: &NodeSpec) -> ElementId {
        let element = self.append(parent, &spec.tag);
        for class in &spec.classes {
            self.add_class(element, class);
        }
        for (name, value) in &spec.attributes {
            self.set_attribute(element, name, value);
        }
        if let Some(text) = &spec.text {
            self.node_mut(element).text = text.clone();
        }
        if let Some(value) = &spec.value {
            self.node_mut(element).value = value.clone();
        }
        if let Some(rect) = spec.rect {
            self.set_rect(element, rect);
        }
        for child in &spec.children {
            self.append_spec(element, child);
        }
        element
    }

    /// Create an element as the last child of `parent`
    pub fn append(&mut self, parent: ElementId, tag: &str) -> ElementId {
        let id = ElementId(self.nodes.len());
        let attached = self.node(parent).map(|p| p.attached).unwrap_or(false);
        self.nodes.push(Node {
            tag: tag.to_ascii_lowercase(),
            parent: Some(parent),
            attached,
            ..Node::default()
        });
        self.node_mut(parent).children.push(id);
        id
    }

    /// `append` plus classes and attributes in one call
    pub fn append_with(
        &mut self,
        parent: ElementId,
        tag: &str,
        classes: &[&str],
        attributes: &[(&str, &str)],
    ) -> ElementId {
        let id = self.append(parent, tag);
        for class in classes {
            self.add_class(id, class);
        }
        for (name, value) in attributes {
            self.set_attribute(id, name, value);
        }
        id
    }

    pub fn set_attribute(&mut self, element: ElementId, name: &str, value: &str) {
        if name == "disabled" {
            self.node_mut(element).disabled = true;
        }
        self.node_mut(element)
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    /// Change a control's value without raising events (the user typing is
    /// modelled by [`crate::session::Session`])
    pub fn set_value(&mut self, element: ElementId, value: &str) {
        self.node_mut(element).value = value.to_string();
    }

    pub fn set_rect(&mut self, element: ElementId, rect: Rect) {
        self.node_mut(element).rect = rect;
    }

    pub fn set_scroll_y(&mut self, offset: f64) {
        self.scroll_y = offset;
    }

    pub fn focus(&mut self, element: ElementId) {
        self.focused = Some(element);
    }

    pub fn focused(&self) -> Option<ElementId> {
        self.focused
    }

    pub fn tag(&self, element: ElementId) -> Option<&str> {
        self.node(element).map(|node| node.tag.as_str())
    }

    pub fn classes(&self, element: ElementId) -> Vec<String> {
        self.node(element)
            .map(|node| node.classes.clone())
            .unwrap_or_default()
    }

    pub fn style(&self, element: ElementId, property: &str) -> Option<&str> {
        self.node(element)
            .and_then(|node| node.styles.get(property))
            .map(String::as_str)
    }

    pub fn inner_html(&self, element: ElementId) -> Option<&str> {
        self.node(element).and_then(|node| node.inner_html.as_deref())
    }

    pub fn is_disabled(&self, element: ElementId) -> bool {
        self.node(element).map(|node| node.disabled).unwrap_or(false)
    }

    pub fn is_attached(&self, element: ElementId) -> bool {
        self.node(element).map(|node| node.attached).unwrap_or(false)
    }

    pub fn stylesheets(&self) -> &[String] {
        &self.stylesheets
    }

    pub fn observed(&self) -> &[(ElementId, IntersectionOptions)] {
        &self.observed
    }

    pub fn scroll_requests(&self) -> &[ScrollRequest] {
        &self.scrolls
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref().map(|mounted| &mounted.notification)
    }

    pub fn notification_close(&self) -> Option<ElementId> {
        self.notification.as_ref().map(|mounted| mounted.close)
    }

    /// Number of attached `.notification` elements
    pub fn notification_count(&self) -> usize {
        self.query_all(".notification").len()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Pop the earliest timer due at or before `deadline`, moving the clock
    /// to its due time
    pub fn pop_due(&mut self, deadline: Duration) -> Option<TimerId> {
        let (index, timer) = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.due <= deadline)
            .min_by_key(|(_, timer)| (timer.due, timer.id))
            .map(|(index, timer)| (index, *timer))?;
        self.timers.remove(index);
        self.now = self.now.max(timer.due);
        Some(timer.id)
    }

    /// Move the clock forward, returning the timers that came due in order
    pub fn advance(&mut self, by: Duration) -> Vec<TimerId> {
        let deadline = self.now + by;
        let mut due = Vec::new();
        while let Some(timer) = self.pop_due(deadline) {
            due.push(timer);
        }
        self.now = deadline;
        due
    }

    pub fn set_now(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }

    /// Serializable view of every attached element
    pub fn snapshot(&self) -> PageSnapshot {
        let elements = self
            .document_order()
            .into_iter()
            .filter_map(|id| {
                let node = self.node(id)?;
                Some(ElementSnapshot {
                    id,
                    label: self.label(id),
                    classes: node.classes.clone(),
                    styles: node.styles.clone(),
                    value: FORM_CONTROLS
                        .contains(&node.tag.as_str())
                        .then(|| node.value.clone()),
                    disabled: node.disabled,
                })
            })
            .collect();
        PageSnapshot {
            scroll_y: self.scroll_y,
            elapsed_ms: self.now.as_millis() as u64,
            elements,
            notification: self.notification().cloned(),
            scrolls: self.scrolls.clone(),
            stylesheets: self.stylesheets.len(),
        }
    }

    /// `tag#id.class[name=..]`, enough to recognise an element in output
    pub fn label(&self, element: ElementId) -> String {
        let Some(node) = self.node(element) else {
            return format!("<stale {}>", element.0);
        };
        let mut label = node.tag.clone();
        if let Some(id) = node.attributes.get("id") {
            label.push('#');
            label.push_str(id);
        }
        for class in &node.classes {
            label.push('.');
            label.push_str(class);
        }
        if let Some(name) = node.attributes.get("name") {
            label.push_str(&format!("[name={}]", name));
        }
        label
    }

    fn node(&self, element: ElementId) -> Option<&Node> {
        self.nodes.get(element.0)
    }

    fn node_mut(&mut self, element: ElementId) -> &mut Node {
        &mut self.nodes[element.0]
    }

    fn document_order(&self) -> Vec<ElementId> {
        let mut order = Vec::new();
        let mut stack = vec![self.body()];
        while let Some(id) = stack.pop() {
            order.push(id);
            if let Some(node) = self.node(id) {
                stack.extend(node.children.iter().rev().copied());
            }
        }
        order
    }

    fn descendants(&self, root: ElementId) -> Vec<ElementId> {
        let mut found = Vec::new();
        let mut stack: Vec<ElementId> = self
            .node(root)
            .map(|node| node.children.iter().rev().copied().collect())
            .unwrap_or_default();
        while let Some(id) = stack.pop() {
            found.push(id);
            if let Some(node) = self.node(id) {
                stack.extend(node.children.iter().rev().copied());
            }
        }
        found
    }

    fn matches(&self, element: ElementId, selector: &SelectorList) -> bool {
        self.node(element)
            .map(|node| selector.matches(node))
            .unwrap_or(false)
    }

    fn detach(&mut self, element: ElementId) {
        if let Some(parent) = self.node(element).and_then(|node| node.parent) {
            self.node_mut(parent).children.retain(|child| *child != element);
        }
        let mut stack = vec![element];
        while let Some(id) = stack.pop() {
            let node = self.node_mut(id);
            node.attached = false;
            stack.extend(node.children.iter().copied());
        }
        if self.focused.is_some_and(|focused| !self.is_attached(focused)) {
            self.focused = None;
        }
    }

    fn clear_children(&mut self, element: ElementId) {
        let children = std::mem::take(&mut self.node_mut(element).children);
        for child in children {
            self.node_mut(child).parent = None;
            self.detach(child);
        }
    }

    fn text_of(&self, element: ElementId, out: &mut String) {
        let Some(node) = self.node(element) else {
            return;
        };
        out.push_str(&node.text);
        for child in &node.children {
            self.text_of(*child, out);
        }
    }
}

impl Page for MemoryPage {
    fn query(&self, selector: &str) -> Option<ElementId> {
        let selector = SelectorList::parse(selector)?;
        self.document_order()
            .into_iter()
            .find(|id| self.matches(*id, &selector))
    }

    fn query_all(&self, selector: &str) -> Vec<ElementId> {
        let Some(selector) = SelectorList::parse(selector) else {
            return Vec::new();
        };
        self.document_order()
            .into_iter()
            .filter(|id| self.matches(*id, &selector))
            .collect()
    }

    fn parent(&self, element: ElementId) -> Option<ElementId> {
        self.node(element).and_then(|node| node.parent)
    }

    fn closest(&self, element: ElementId, selector: &str) -> Option<ElementId> {
        let selector = SelectorList::parse(selector)?;
        let mut current = Some(element);
        while let Some(id) = current {
            if self.matches(id, &selector) {
                return Some(id);
            }
            current = self.parent(id);
        }
        None
    }

    fn attribute(&self, element: ElementId, name: &str) -> Option<String> {
        self.node(element)
            .and_then(|node| node.attributes.get(name))
            .cloned()
    }

    fn has_class(&self, element: ElementId, class: &str) -> bool {
        self.node(element)
            .map(|node| node.classes.iter().any(|c| c == class))
            .unwrap_or(false)
    }

    fn add_class(&mut self, element: ElementId, class: &str) {
        if self.node(element).is_none() || self.has_class(element, class) {
            return;
        }
        self.node_mut(element).classes.push(class.to_string());
    }

    fn remove_class(&mut self, element: ElementId, class: &str) {
        if self.node(element).is_some() {
            self.node_mut(element).classes.retain(|c| c != class);
        }
    }

    fn set_style(&mut self, element: ElementId, property: &str, value: &str) {
        if self.node(element).is_none() {
            return;
        }
        let styles = &mut self.node_mut(element).styles;
        if value.is_empty() {
            styles.remove(property);
        } else {
            styles.insert(property.to_string(), value.to_string());
        }
    }

    fn value(&self, element: ElementId) -> String {
        self.node(element)
            .filter(|node| FORM_CONTROLS.contains(&node.tag.as_str()))
            .map(|node| node.value.clone())
            .unwrap_or_default()
    }

    fn form_value(&self, form: ElementId, name: &str) -> Option<String> {
        self.descendants(form).into_iter().find_map(|id| {
            let node = self.node(id)?;
            let is_control = FORM_CONTROLS.contains(&node.tag.as_str());
            let named = node.attributes.get("name").map(String::as_str) == Some(name);
            (is_control && named).then(|| node.value.clone())
        })
    }

    fn reset_form(&mut self, form: ElementId) {
        for id in self.descendants(form) {
            let node = self.node_mut(id);
            if FORM_CONTROLS.contains(&node.tag.as_str()) {
                node.value = node.attributes.get("value").cloned().unwrap_or_default();
            }
        }
    }

    fn blur(&mut self, element: ElementId) {
        if self.focused == Some(element) {
            self.focused = None;
        }
    }

    fn text_content(&self, element: ElementId) -> String {
        let mut text = String::new();
        self.text_of(element, &mut text);
        text
    }

    fn set_text_content(&mut self, element: ElementId, text: &str) {
        if self.node(element).is_none() {
            return;
        }
        self.clear_children(element);
        let node = self.node_mut(element);
        node.text = text.to_string();
        node.inner_html = None;
    }

    fn set_inner_html(&mut self, element: ElementId, html: &str) {
        if self.node(element).is_none() {
            return;
        }
        self.clear_children(element);
        let node = self.node_mut(element);
        node.text = strip_tags(html);
        node.inner_html = Some(html.to_string());
    }

    fn set_disabled(&mut self, element: ElementId, disabled: bool) {
        if self.node(element).is_none() {
            return;
        }
        let node = self.node_mut(element);
        node.disabled = disabled;
        if disabled {
            node.attributes.insert("disabled".to_string(), String::new());
        } else {
            node.attributes.remove("disabled");
        }
    }

    fn bounding_rect(&self, element: ElementId) -> Rect {
        self.node(element).map(|node| node.rect).unwrap_or_default()
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior) {
        self.scroll_y = top;
        self.scrolls.push(ScrollRequest::To { top, behavior });
    }

    fn scroll_into_view(&mut self, element: ElementId, behavior: ScrollBehavior) {
        self.scroll_y = self.bounding_rect(element).top;
        self.scrolls.push(ScrollRequest::IntoView { element, behavior });
    }

    fn append_stylesheet(&mut self, css: &str) {
        self.stylesheets.push(css.to_string());
    }

    fn observe_intersection(&mut self, targets: &[ElementId], options: &IntersectionOptions) {
        self.observed
            .extend(targets.iter().map(|target| (*target, options.clone())));
    }

    fn set_timeout(&mut self, delay: Duration) -> TimerId {
        let id = TimerId(self.next_timer);
        self.next_timer += 1;
        self.timers.push(PendingTimer {
            id,
            due: self.now + delay,
        });
        id
    }

    fn mount_notification(&mut self, notification: &Notification) -> Option<ElementId> {
        let body = self.body();
        let severity_class = format!("notification-{}", notification.severity.tag());
        let root = self.append_with(
            body,
            "div",
            &["notification", severity_class.as_str()],
            &[
                ("role", Notification::ROLE),
                ("aria-live", Notification::ARIA_LIVE),
            ],
        );
        let content = self.append_with(root, "div", &["notification-content"], &[]);
        self.append_with(
            content,
            "ion-icon",
            &[],
            &[("name", notification.severity.icon())],
        );
        let message = self.append(content, "span");
        self.node_mut(message).text = notification.message.clone();
        let close = self.append_with(
            root,
            "button",
            &["notification-close"],
            &[("aria-label", Notification::CLOSE_LABEL)],
        );
        self.append_with(close, "ion-icon", &[], &[("name", Notification::CLOSE_ICON)]);

        self.notification = Some(MountedNotification {
            root,
            close,
            notification: notification.clone(),
        });
        Some(close)
    }

    fn unmount_notification(&mut self) {
        if let Some(mounted) = self.notification.take() {
            self.detach(mounted.root);
        }
    }
}

fn strip_tags(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => text.push(ch),
            _ => {}
        }
    }
    text
}

/// Visible state of a page, for reports and assertions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSnapshot {
    pub scroll_y: f64,
    pub elapsed_ms: u64,
    pub elements: Vec<ElementSnapshot>,
    pub notification: Option<Notification>,
    pub scrolls: Vec<ScrollRequest>,
    pub stylesheets: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementSnapshot {
    pub id: ElementId,
    pub label: String,
    pub classes: Vec<String>,
    pub styles: BTreeMap<String, String>,
    pub value: Option<String>,
    pub disabled: bool,
}

// ============================================================================
// Selectors
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
enum AttrMatch {
    Exists,
    Equals(String),
    Prefix(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<(String, AttrMatch)>,
}

impl Compound {
    fn parse(source: &str) -> Option<Self> {
        let source = source.trim();
        if source.is_empty() {
            return None;
        }
        let mut compound = Compound::default();
        let boundary = |c: char| matches!(c, '.' | '#' | '[');

        let tag_end = source.find(boundary).unwrap_or(source.len());
        let tag = &source[..tag_end];
        if !tag.is_empty() && tag != "*" {
            if !is_ident(tag) {
                return None;
            }
            compound.tag = Some(tag.to_ascii_lowercase());
        }

        let mut rest = &source[tag_end..];
        while let Some(marker) = rest.chars().next() {
            let tail = &rest[marker.len_utf8()..];
            match marker {
                '.' | '#' => {
                    let end = tail.find(boundary).unwrap_or(tail.len());
                    let name = &tail[..end];
                    if !is_ident(name) {
                        return None;
                    }
                    if marker == '.' {
                        compound.classes.push(name.to_string());
                    } else {
                        compound.id = Some(name.to_string());
                    }
                    rest = &tail[end..];
                }
                '[' => {
                    let end = tail.find(']')?;
                    compound.attributes.push(parse_attribute(&tail[..end])?);
                    rest = &tail[end + 1..];
                }
                _ => return None,
            }
        }
        Some(compound)
    }

    fn matches(&self, node: &Node) -> bool {
        if !node.attached {
            return false;
        }
        if self.tag.as_ref().is_some_and(|tag| *tag != node.tag) {
            return false;
        }
        if let Some(id) = &self.id {
            if node.attributes.get("id") != Some(id) {
                return false;
            }
        }
        if !self
            .classes
            .iter()
            .all(|class| node.classes.iter().any(|c| c == class))
        {
            return false;
        }
        self.attributes.iter().all(|(name, rule)| {
            let Some(value) = node.attributes.get(name) else {
                return false;
            };
            match rule {
                AttrMatch::Exists => true,
                AttrMatch::Equals(expected) => value == expected,
                AttrMatch::Prefix(prefix) => !prefix.is_empty() && value.starts_with(prefix),
            }
        })
    }
}

fn parse_attribute(body: &str) -> Option<(String, AttrMatch)> {
    let (name, rule) = if let Some((name, value)) = body.split_once("^=") {
        (name, AttrMatch::Prefix(unquote(value)))
    } else if let Some((name, value)) = body.split_once('=') {
        (name, AttrMatch::Equals(unquote(value)))
    } else {
        (body, AttrMatch::Exists)
    };
    let name = name.trim();
    is_ident(name).then(|| (name.to_string(), rule))
}

fn unquote(value: &str) -> String {
    let value = value.trim();
    let quoted = value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\'')));
    if quoted {
        value[1..value.len() - 1].to_string()
    } else {
        value.to_string()
    }
}

fn is_ident(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[derive(Debug, Clone, PartialEq)]
struct SelectorList(Vec<Compound>);

impl SelectorList {
    fn parse(source: &str) -> Option<Self> {
        let compounds = source
            .split(',')
            .map(Compound::parse)
            .collect::<Option<Vec<_>>>()?;
        Some(Self(compounds))
    }

    fn matches(&self, node: &Node) -> bool {
        self.0.iter().any(|compound| compound.matches(node))
    }
}

// ============================================================================
// Contact page fixture
// ============================================================================

impl MemoryPage {
    /// The Gamics contact page markup: header with nav and search, three
    /// contact cards, the contact form, in-page anchors and back-to-top.
    pub fn contact_fixture() -> Self {
        let mut page = Self::new();
        let body = page.body();

        let header = page.append_with(body, "header", &["header"], &[("data-header", ""), ("id", "top")]);
        let navbar = page.append_with(header, "nav", &["navbar"], &[("data-navbar", "")]);
        for (href, label) in [("./index.html", "Inicio"), ("#contact-form", "Contacto")] {
            let link = page.append_with(
                navbar,
                "a",
                &["navbar-link"],
                &[("data-nav-link", ""), ("href", href)],
            );
            page.node_mut(link).text = label.to_string();
        }
        page.append_with(header, "button", &["nav-toggle-btn"], &[("data-nav-toggler", "")]);
        page.append_with(header, "button", &["search-btn"], &[("data-search-toggler", "")]);

        let search_box = page.append_with(body, "div", &["search-container"], &[("data-search-box", "")]);
        page.append_with(search_box, "input", &["search-field"], &[("type", "search")]);
        page.append_with(search_box, "button", &["search-close-btn"], &[("data-search-toggler", "")]);

        let main = page.append(body, "main");
        let cards = page.append_with(main, "ul", &["contact-list"], &[("id", "contact-cards")]);
        for index in 0..3 {
            let card = page.append_with(cards, "li", &["contact-card"], &[]);
            page.set_rect(card, Rect::new(40.0, 600.0 + index as f64 * 220.0, 300.0, 200.0));
        }

        let form = page.append_with(main, "form", &["form"], &[("id", "contact-form")]);
        page.set_rect(form, Rect::new(40.0, 1300.0, 600.0, 500.0));
        for (name, kind) in [("name", "text"), ("email", "email"), ("subject", "text")] {
            let group = page.append_with(form, "div", &["form-group"], &[]);
            page.append_with(group, "input", &["form-input"], &[("name", name), ("type", kind)]);
        }
        let group = page.append_with(form, "div", &["form-group"], &[]);
        page.append_with(group, "textarea", &["form-textarea"], &[("name", "message")]);
        let button = page.append_with(form, "button", &["form-btn"], &[("type", "submit")]);
        page.node_mut(button).text = "Enviar Mensaje".to_string();

        page.append_with(main, "a", &["placeholder-link"], &[("href", "#")]);
        page.append_with(main, "a", &["missing-link"], &[("href", "#missing")]);

        page.append_with(
            body,
            "a",
            &["back-top-btn"],
            &[("href", "#top"), ("data-back-top-btn", "")],
        );
        page
    }
}
