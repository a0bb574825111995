//! Markup contract: the selectors and state classes the page is wired by.

pub const NAVBAR: &str = "[data-navbar]";
pub const NAV_LINK: &str = "[data-nav-link]";
pub const NAV_TOGGLER: &str = "[data-nav-toggler]";

pub const SEARCH_TOGGLER: &str = "[data-search-toggler]";
pub const SEARCH_BOX: &str = "[data-search-box]";

pub const HEADER: &str = "[data-header]";
pub const BACK_TOP_BTN: &str = "[data-back-top-btn]";

pub const CONTACT_FORM: &str = ".form";
pub const FORM_FIELD: &str = ".form-input, .form-textarea";
pub const FORM_BUTTON: &str = ".form-btn";
pub const FORM_GROUP: &str = ".form-group";

pub const CONTACT_CARD: &str = ".contact-card";

/// In-page anchors; a bare `#` is filtered out at click time
pub const IN_PAGE_ANCHOR: &str = "a[href^=\"#\"]";

/// Named controls of the contact form, in validation order
pub const FIELD_NAMES: [&str; 4] = ["name", "email", "subject", "message"];

/// State class for open panels and scrolled chrome
pub const ACTIVE: &str = "active";
/// State class for field groups with focus or content
pub const FOCUSED: &str = "focused";

/// Keyframes injected once at mount
pub const KEYFRAMES_CSS: &str = "
    @keyframes fadeInUp {
      from { opacity: 0; transform: translateY(30px); }
      to { opacity: 1; transform: translateY(0); }
    }
    @keyframes spin {
      0% { transform: rotate(0deg); }
      100% { transform: rotate(360deg); }
    }";
