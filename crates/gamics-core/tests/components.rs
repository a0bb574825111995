//! Page component tests
//!
//! Navigation, search, header scroll, field focus, card animation, anchors,
//! back-to-top, and the mount/teardown lifecycle, all against the stock
//! contact page fixture.

use gamics_core::memory::{MemoryPage, NodeSpec, ScrollRequest};
use gamics_core::session::Session;
use gamics_core::{
    ComponentKind, ContactConfig, ContactPage, EventKind, ListenTarget, Page, PageEvent,
    ScrollBehavior, Subscription,
};

fn active(session: &Session, selector: &str) -> bool {
    let page = session.page();
    page.has_class(page.query(selector).unwrap(), "active")
}

fn group_focused(session: &Session, field: &str) -> bool {
    let page = session.page();
    let input = page.query(&format!("[name={}]", field)).unwrap();
    page.has_class(page.parent(input).unwrap(), "focused")
}

// ============================================================================
// Navigation
// ============================================================================

#[test]
fn test_nav_toggler_opens_and_closes() {
    let mut session = Session::contact_fixture();
    assert!(!active(&session, "[data-navbar]"));

    session.click("[data-nav-toggler]").unwrap();
    assert!(active(&session, "[data-navbar]"));
    assert!(active(&session, "[data-nav-toggler]"));

    session.click("[data-nav-toggler]").unwrap();
    assert!(!active(&session, "[data-navbar]"));
    assert!(!active(&session, "[data-nav-toggler]"));
}

#[test]
fn test_nav_link_closes_panel() {
    let mut session = Session::contact_fixture();
    session.click("[data-nav-toggler]").unwrap();

    let outcome = session.click("[href=\"./index.html\"]").unwrap();
    assert!(!outcome.default_prevented, "external links navigate normally");
    assert!(!active(&session, "[data-navbar]"));
    assert!(!active(&session, "[data-nav-toggler]"));

    // Closing an already closed panel keeps it closed
    session.click("[href=\"./index.html\"]").unwrap();
    assert!(!active(&session, "[data-navbar]"));
}

// ============================================================================
// Search
// ============================================================================

#[test]
fn test_search_togglers_share_the_box() {
    let mut session = Session::contact_fixture();
    let togglers = session.find_all("[data-search-toggler]").unwrap();
    assert_eq!(togglers.len(), 2);

    session.dispatch(PageEvent::Click { target: togglers[0] });
    assert!(active(&session, "[data-search-box]"));

    session.dispatch(PageEvent::Click { target: togglers[1] });
    assert!(!active(&session, "[data-search-box]"));
}

#[test]
fn test_escape_closes_search() {
    let mut session = Session::contact_fixture();
    session.click("[data-search-toggler]").unwrap();

    session.press_key("Enter");
    assert!(active(&session, "[data-search-box]"));

    session.press_key("Escape");
    assert!(!active(&session, "[data-search-box]"));

    // Escape never opens it
    session.press_key("Escape");
    assert!(!active(&session, "[data-search-box]"));
}

// ============================================================================
// Header Scroll
// ============================================================================

#[test]
fn test_header_activates_at_threshold() {
    let mut session = Session::contact_fixture();

    session.scroll_to(199.0);
    assert!(!active(&session, "[data-header]"));
    assert!(!active(&session, "[data-back-top-btn]"));

    session.scroll_to(200.0);
    assert!(active(&session, "[data-header]"));
    assert!(active(&session, "[data-back-top-btn]"));

    session.scroll_to(0.0);
    assert!(!active(&session, "[data-header]"));
    assert!(!active(&session, "[data-back-top-btn]"));
}

#[test]
fn test_custom_scroll_threshold() {
    let config = ContactConfig {
        scroll_threshold: 50.0,
        ..ContactConfig::default()
    };
    let mut session = Session::new(MemoryPage::contact_fixture(), config);

    session.scroll_to(50.0);
    assert!(active(&session, "[data-header]"));
}

// ============================================================================
// Field Focus
// ============================================================================

#[test]
fn test_focus_marks_group() {
    let mut session = Session::contact_fixture();
    session.focus("[name=name]").unwrap();
    assert!(group_focused(&session, "name"));

    // Leaving an empty field drops the state
    session.focus("[name=email]").unwrap();
    assert!(!group_focused(&session, "name"));
    assert!(group_focused(&session, "email"));
}

#[test]
fn test_content_keeps_group_focused() {
    let mut session = Session::contact_fixture();
    session.type_text("[name=subject]", "Hola").unwrap();
    session.blur("[name=subject]").unwrap();
    assert!(group_focused(&session, "subject"));

    // Deleting everything while focused drops it immediately
    session.clear("[name=subject]").unwrap();
    assert!(!group_focused(&session, "subject"));

    session.type_text("[name=subject]", "x").unwrap();
    assert!(group_focused(&session, "subject"));
}

#[test]
fn test_textarea_is_tracked() {
    let mut session = Session::contact_fixture();
    session.type_text("[name=message]", "Hola").unwrap();
    session.focus("[name=name]").unwrap();
    assert!(group_focused(&session, "message"));
}

// ============================================================================
// Cards
// ============================================================================

#[test]
fn test_cards_start_hidden_with_stagger() {
    let session = Session::contact_fixture();
    let page = session.page();
    let cards = page.query_all(".contact-card");
    assert_eq!(cards.len(), 3);

    let delays: Vec<_> = cards
        .iter()
        .map(|card| page.style(*card, "animation-delay"))
        .collect();
    assert_eq!(delays, vec![Some("0s"), Some("0.08s"), Some("0.16s")]);
    for card in &cards {
        assert_eq!(page.style(*card, "opacity"), Some("0"));
        assert_eq!(page.style(*card, "transform"), Some("translateY(20px)"));
    }

    let observed: Vec<_> = page.observed().iter().map(|(id, _)| *id).collect();
    assert_eq!(observed, cards);
    let (_, options) = &page.observed()[0];
    assert_eq!(options.threshold, 0.12);
    assert_eq!(options.root_margin, "0px 0px -40px 0px");
}

#[test]
fn test_cards_reveal_on_intersection() {
    let mut session = Session::contact_fixture();
    session.reveal(".contact-card", false).unwrap();
    let first = session.find(".contact-card").unwrap();
    assert_eq!(session.page().style(first, "opacity"), Some("0"));

    session.reveal(".contact-card", true).unwrap();
    for card in session.find_all(".contact-card").unwrap() {
        assert_eq!(
            session.page().style(card, "animation"),
            Some("fadeInUp 0.6s ease forwards")
        );
        assert_eq!(session.page().style(card, "opacity"), Some("1"));
    }

    // Leaving the viewport does not hide them again
    session.reveal(".contact-card", false).unwrap();
    assert_eq!(session.page().style(first, "opacity"), Some("1"));
}

#[test]
fn test_card_tilts_toward_pointer() {
    let mut session = Session::contact_fixture();
    let card = session.find(".contact-card").unwrap();

    // Top-right corner of the first card (40, 600, 300x200)
    session.pointer_move(".contact-card", 340.0, 600.0).unwrap();
    assert_eq!(
        session.page().style(card, "transform"),
        Some("rotateX(3.00deg) rotateY(3.00deg) translateZ(6px)")
    );
    assert_eq!(session.page().style(card, "transition"), Some("transform 0.08s"));

    session.pointer_move(".contact-card", 190.0, 700.0).unwrap();
    assert_eq!(
        session.page().style(card, "transform"),
        Some("rotateX(0.00deg) rotateY(0.00deg) translateZ(6px)")
    );

    session.pointer_leave(".contact-card").unwrap();
    assert_eq!(session.page().style(card, "transform"), None);
    assert_eq!(
        session.page().style(card, "transition"),
        Some("transform 0.35s cubic-bezier(.2,.9,.2,1)")
    );
}

#[test]
fn test_collapsed_card_ignores_pointer() {
    let mut session = Session::contact_fixture();
    let card = session.find(".contact-card").unwrap();
    session
        .page_mut()
        .set_rect(card, gamics_core::Rect::new(0.0, 0.0, 0.0, 0.0));

    session.pointer_move(".contact-card", 10.0, 10.0).unwrap();
    assert_eq!(session.page().style(card, "transform"), Some("translateY(20px)"));
}

#[test]
fn test_tilt_rounds_halves_away_from_zero() {
    let mut session = Session::contact_fixture();
    let card = session.find(".contact-card").unwrap();
    session
        .page_mut()
        .set_rect(card, gamics_core::Rect::new(0.0, 0.0, 16.0, 16.0));

    session.pointer_move(".contact-card", 11.0, 8.0).unwrap();
    assert_eq!(
        session.page().style(card, "transform"),
        Some("rotateX(0.00deg) rotateY(1.13deg) translateZ(6px)")
    );

    session.pointer_move(".contact-card", 5.0, 8.0).unwrap();
    assert_eq!(
        session.page().style(card, "transform"),
        Some("rotateX(0.00deg) rotateY(-1.13deg) translateZ(6px)")
    );
}

#[test]
fn test_keyframes_injected_once() {
    let session = Session::contact_fixture();
    let sheets = session.page().stylesheets();
    assert_eq!(sheets.len(), 1);
    assert!(sheets[0].contains("@keyframes fadeInUp"));
    assert!(sheets[0].contains("@keyframes spin"));
}

// ============================================================================
// Anchors and Back-to-top
// ============================================================================

#[test]
fn test_anchor_scrolls_to_target() {
    let mut session = Session::contact_fixture();
    let form = session.find("#contact-form").unwrap();

    let outcome = session.click("[href=\"#contact-form\"]").unwrap();
    assert!(outcome.default_prevented);
    assert_eq!(
        session.page().scroll_requests().last(),
        Some(&ScrollRequest::IntoView {
            element: form,
            behavior: ScrollBehavior::Smooth,
        })
    );
    assert_eq!(session.page().scroll_y(), 1300.0);
}

#[test]
fn test_bare_hash_anchor_is_left_alone() {
    let mut session = Session::contact_fixture();
    let outcome = session.click(".placeholder-link").unwrap();
    assert!(!outcome.default_prevented);
    assert!(session.page().scroll_requests().is_empty());
}

#[test]
fn test_missing_anchor_target_still_prevents_default() {
    let mut session = Session::contact_fixture();
    let outcome = session.click(".missing-link").unwrap();
    assert!(outcome.default_prevented);
    assert!(session.page().scroll_requests().is_empty());
}

#[test]
fn test_anchor_with_unparsable_target_is_missing() {
    let mut page = MemoryPage::contact_fixture();
    let body = page.body();
    page.append_with(body, "a", &["odd-link"], &[("href", "#a[x]é")]);
    let mut session = Session::new(page, ContactConfig::default());

    let outcome = session.click(".odd-link").unwrap();
    assert!(outcome.default_prevented);
    assert!(session.page().scroll_requests().is_empty());
}

#[test]
fn test_back_to_top_scrolls_to_origin() {
    let mut session = Session::contact_fixture();
    session.scroll_to(900.0);

    let outcome = session.click("[data-back-top-btn]").unwrap();
    assert!(outcome.default_prevented);
    assert_eq!(
        session.page().scroll_requests().last(),
        Some(&ScrollRequest::To {
            top: 0.0,
            behavior: ScrollBehavior::Smooth,
        })
    );
    assert_eq!(session.page().scroll_y(), 0.0);
}

// ============================================================================
// Lifecycle
// ============================================================================

#[test]
fn test_fixture_mounts_every_component() {
    let session = Session::contact_fixture();
    let kinds: Vec<_> = session.app().handles().iter().map(|h| h.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ComponentKind::Navigation,
            ComponentKind::Search,
            ComponentKind::Header,
            ComponentKind::ContactForm,
            ComponentKind::FieldFocus,
            ComponentKind::Cards,
            ComponentKind::Anchors,
            ComponentKind::BackToTop,
        ]
    );
}

#[test]
fn test_empty_page_mounts_nothing() {
    let mut page = MemoryPage::new();
    let mut app = ContactPage::mount(&mut page, ContactConfig::default());
    assert!(app.handles().is_empty());
    assert!(app.subscriptions().is_empty());

    let body = page.body();
    let outcome = app.dispatch(&mut page, &PageEvent::Click { target: body });
    assert!(!outcome.default_prevented);
    app.dispatch(&mut page, &PageEvent::Scroll);
    app.dispatch(&mut page, &PageEvent::KeyDown { key: "Escape".to_string() });
}

#[test]
fn test_partial_markup_mounts_what_it_finds() {
    let markup = vec![NodeSpec {
        tag: "header".to_string(),
        attributes: [("data-header".to_string(), String::new())].into(),
        ..NodeSpec::default()
    }];
    let mut page = MemoryPage::from_markup(&markup);
    let mut app = ContactPage::mount(&mut page, ContactConfig::default());
    assert!(app.is_mounted(ComponentKind::Header));
    assert!(!app.is_mounted(ComponentKind::ContactForm));
    assert!(!app.is_mounted(ComponentKind::BackToTop));

    page.set_scroll_y(300.0);
    app.dispatch(&mut page, &PageEvent::Scroll);
    let header = page.query("[data-header]").unwrap();
    assert!(page.has_class(header, "active"));
}

#[test]
fn test_subscriptions_cover_listeners() {
    let session = Session::contact_fixture();
    let subscriptions = session.app().subscriptions();

    assert!(subscriptions.contains(&Subscription::window(EventKind::Scroll)));
    assert!(subscriptions.contains(&Subscription::document(EventKind::KeyDown)));
    let form = session.find(".form").unwrap();
    assert!(subscriptions.contains(&Subscription::element(form, EventKind::Submit)));

    // Nav link is also an in-page anchor: one listener, not two
    let link = session.find("[href=\"#contact-form\"]").unwrap();
    let clicks = subscriptions
        .iter()
        .filter(|s| s.target == ListenTarget::Element(link) && s.kind == EventKind::Click)
        .count();
    assert_eq!(clicks, 1);
}

#[test]
fn test_unmount_detaches_one_component() {
    let mut session = Session::contact_fixture();
    let handle = session.app().handle_of(ComponentKind::Header).unwrap();

    assert!(session.app_mut().unmount(handle));
    assert!(!session.app_mut().unmount(handle));
    assert!(!session.app().is_mounted(ComponentKind::Header));

    session.scroll_to(500.0);
    assert!(!active(&session, "[data-header]"));

    // The rest keeps working
    session.click("[data-nav-toggler]").unwrap();
    assert!(active(&session, "[data-navbar]"));
}

#[test]
fn test_teardown_removes_notification() {
    let mut session = Session::contact_fixture();
    session.submit().unwrap();
    assert_eq!(session.page().notification_count(), 1);

    let page = session.finish();
    assert_eq!(page.notification_count(), 0);
    assert!(page.notification().is_none());
}
