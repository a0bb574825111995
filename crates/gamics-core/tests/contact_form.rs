//! Contact form flow tests
//!
//! Drive the form through a scripted session: validation failures,
//! simulated sending, notification replacement and expiry.

use gamics_core::components::{Component, ContactForm, FormState};
use gamics_core::memory::MemoryPage;
use gamics_core::session::Session;
use gamics_core::{ContactConfig, Page, Severity};

const SUCCESS: &str = "¡Mensaje enviado con éxito! Te contactaremos pronto.";
const MISSING: &str = "Por favor, completa todos los campos";
const INVALID_EMAIL: &str = "Por favor, ingresa un email válido";

// ============================================================================
// Test Utilities
// ============================================================================

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("gamics_core=debug")
        .try_init();
}

fn fill(session: &mut Session, name: &str, email: &str, subject: &str, message: &str) {
    session.type_text("[name=name]", name).unwrap();
    session.type_text("[name=email]", email).unwrap();
    session.type_text("[name=subject]", subject).unwrap();
    session.type_text("[name=message]", message).unwrap();
}

fn field(session: &Session, name: &str) -> String {
    let page = session.page();
    page.value(page.query(&format!("[name={}]", name)).unwrap())
}

// ============================================================================
// Successful Submission
// ============================================================================

#[test]
fn test_valid_submission_succeeds_after_latency() {
    init_tracing();
    let mut session = Session::contact_fixture();
    fill(&mut session, "Ana", "ana@test.com", "Hola", "Hi");

    let outcome = session.submit().unwrap();
    assert!(outcome.default_prevented, "native submission must be suppressed");

    // Loading state right away, no notification yet
    let button = session.find(".form-btn").unwrap();
    assert!(session.page().is_disabled(button));
    assert_eq!(session.page().text_content(button), "Enviando...");
    session.expect_no_notification().unwrap();

    session.advance_ms(1199);
    session.expect_no_notification().unwrap();

    session.advance_ms(1);
    session
        .expect_notification(Some(SUCCESS), Some(Severity::Success))
        .unwrap();
    assert_eq!(session.page().notification_count(), 1);

    // Button restored, form cleared
    assert!(!session.page().is_disabled(button));
    assert_eq!(session.page().text_content(button), "Enviar Mensaje");
    for name in ["name", "email", "subject", "message"] {
        assert_eq!(field(&session, name), "", "{name} should be cleared");
    }
}

#[test]
fn test_success_clears_focus_state() {
    let mut session = Session::contact_fixture();
    fill(&mut session, "Ana", "ana@test.com", "Hola", "Hi");

    let groups = session.page().query_all(".form-group");
    assert!(groups
        .iter()
        .all(|group| session.page().has_class(*group, "focused")));

    session.submit().unwrap();
    session.advance_ms(1200);

    assert_eq!(session.page().focused(), None);
    assert!(groups
        .iter()
        .all(|group| !session.page().has_class(*group, "focused")));
}

#[test]
fn test_fields_are_trimmed_before_validation() {
    let mut session = Session::contact_fixture();
    fill(&mut session, "  Ana ", " ana@test.com ", "Hola\n", "\tHi");

    session.submit().unwrap();
    session.advance_ms(1200);

    session
        .expect_notification(Some(SUCCESS), Some(Severity::Success))
        .unwrap();
}

#[test]
fn test_resubmit_while_sending_is_ignored() {
    let mut session = Session::contact_fixture();
    fill(&mut session, "Ana", "ana@test.com", "Hola", "Hi");

    session.submit().unwrap();
    session.advance_ms(600);
    let outcome = session.submit().unwrap();
    assert!(outcome.default_prevented);

    // Only the first send is pending
    assert_eq!(session.page().pending_timers(), 1);

    session.advance_ms(600);
    session
        .expect_notification(Some(SUCCESS), Some(Severity::Success))
        .unwrap();
    // Only the success notification's expiry remains
    assert_eq!(session.page().pending_timers(), 1);
}

#[test]
fn test_form_state_machine() {
    let mut page = MemoryPage::contact_fixture();
    let config = ContactConfig::default();
    let form = ContactForm::mount(&page, &config).unwrap();
    assert_eq!(form.state(), FormState::Idle);
    assert_eq!(form.subscriptions().len(), 1);

    // Form without markup
    let empty = MemoryPage::new();
    assert!(ContactForm::mount(&empty, &config).is_none());

    let button = page.query(".form-btn").unwrap();
    page.set_text_content(button, "Mandar");
    let relabeled = ContactForm::mount(&page, &config).unwrap();
    assert_eq!(relabeled.state(), FormState::Idle);
}

// ============================================================================
// Validation Failures
// ============================================================================

#[test]
fn test_missing_field_reports_immediately() {
    let mut session = Session::contact_fixture();
    fill(&mut session, "", "ana@test.com", "Hola", "Hi");

    let outcome = session.submit().unwrap();
    assert!(outcome.default_prevented);

    session
        .expect_notification(Some(MISSING), Some(Severity::Error))
        .unwrap();

    // No loading state, values kept
    let button = session.find(".form-btn").unwrap();
    assert!(!session.page().is_disabled(button));
    assert_eq!(field(&session, "email"), "ana@test.com");
    assert_eq!(field(&session, "subject"), "Hola");

    // Only the notification expiry is pending
    assert_eq!(session.page().pending_timers(), 1);
}

#[test]
fn test_whitespace_only_field_is_missing() {
    let mut session = Session::contact_fixture();
    fill(&mut session, "Ana", "ana@test.com", "   ", "Hi");

    session.submit().unwrap();
    session
        .expect_notification(Some(MISSING), Some(Severity::Error))
        .unwrap();
}

#[test]
fn test_invalid_email_reports_immediately() {
    let mut session = Session::contact_fixture();
    fill(&mut session, "Ana", "not-an-email", "Hola", "Hi");

    session.submit().unwrap();
    session
        .expect_notification(Some(INVALID_EMAIL), Some(Severity::Error))
        .unwrap();
    assert_eq!(field(&session, "email"), "not-an-email");

    // Nothing else happens later
    session.advance_ms(1200);
    session
        .expect_notification(Some(INVALID_EMAIL), Some(Severity::Error))
        .unwrap();
}

#[test]
fn test_missing_fields_checked_before_email() {
    let mut session = Session::contact_fixture();
    fill(&mut session, "Ana", "not-an-email", "", "Hi");

    session.submit().unwrap();
    session
        .expect_notification(Some(MISSING), Some(Severity::Error))
        .unwrap();
}

#[test]
fn test_failed_then_fixed_submission() {
    let mut session = Session::contact_fixture();
    fill(&mut session, "Ana", "ana@test", "Hola", "Hi");
    session.submit().unwrap();
    session
        .expect_notification(Some(INVALID_EMAIL), None)
        .unwrap();

    session.type_text("[name=email]", "ana@test.com").unwrap();
    session.submit().unwrap();
    // Error stays until it is replaced or expires
    session
        .expect_notification(Some(INVALID_EMAIL), None)
        .unwrap();

    session.advance_ms(1200);
    session
        .expect_notification(Some(SUCCESS), Some(Severity::Success))
        .unwrap();
    assert_eq!(session.page().notification_count(), 1);
}

// ============================================================================
// Notifications
// ============================================================================

#[test]
fn test_notification_expires_after_five_seconds() {
    let mut session = Session::contact_fixture();
    session.submit().unwrap();
    session.expect_notification(Some(MISSING), None).unwrap();

    session.advance_ms(4999);
    assert!(session.page().notification().is_some());

    session.advance_ms(1);
    session.expect_no_notification().unwrap();
    assert_eq!(session.page().notification_count(), 0);
}

#[test]
fn test_new_notification_replaces_old_one() {
    let mut session = Session::contact_fixture();
    session.submit().unwrap();
    let first = session.page().notification().unwrap().id;

    session.advance_ms(3000);
    session.submit().unwrap();
    let second = session.page().notification().unwrap().id;
    assert_ne!(first, second);
    assert_eq!(session.page().notification_count(), 1);

    // The first notification's expiry must not remove the second
    session.advance_ms(2000);
    assert_eq!(session.page().notification().map(|n| n.id), Some(second));

    session.advance_ms(3000);
    session.expect_no_notification().unwrap();
}

#[test]
fn test_close_control_dismisses() {
    let mut session = Session::contact_fixture();
    session.submit().unwrap();

    let close = session.page().notification_close().unwrap();
    session.dispatch(gamics_core::PageEvent::Click { target: close });

    session.expect_no_notification().unwrap();
    assert_eq!(session.page().notification_count(), 0);
}

#[test]
fn test_notification_markup() {
    let mut session = Session::contact_fixture();
    session.submit().unwrap();

    let page = session.page();
    let root = page.query(".notification").unwrap();
    assert!(page.has_class(root, "notification-error"));
    assert_eq!(page.attribute(root, "role").as_deref(), Some("status"));
    assert_eq!(page.attribute(root, "aria-live").as_deref(), Some("polite"));
    assert_eq!(page.text_content(root), MISSING);

    let icon = page.query("ion-icon[name=alert-circle]");
    assert!(icon.is_some(), "error notifications use the alert icon");
}
