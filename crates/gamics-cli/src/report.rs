//! Plain-text rendering of a page snapshot.

use std::fmt::Write;

use gamics_core::memory::PageSnapshot;

/// Summary first, then one line per element that carries state
pub fn render(snapshot: &PageSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Elapsed: {} ms", snapshot.elapsed_ms);
    let _ = writeln!(out, "Scroll: {} px", snapshot.scroll_y);
    match &snapshot.notification {
        Some(notification) => {
            let _ = writeln!(
                out,
                "Notification: [{}] {}",
                notification.severity, notification.message
            );
        }
        None => {
            let _ = writeln!(out, "Notification: none");
        }
    }
    let _ = writeln!(out, "Scroll requests: {}", snapshot.scrolls.len());
    let _ = writeln!(out, "Stylesheets: {}", snapshot.stylesheets);

    let _ = writeln!(out, "Elements:");
    for element in &snapshot.elements {
        let value = element.value.as_deref().filter(|value| !value.is_empty());
        if element.styles.is_empty() && value.is_none() && !element.disabled {
            continue;
        }
        let _ = write!(out, "  {}", element.label);
        if let Some(value) = value {
            let _ = write!(out, " value={:?}", value);
        }
        if element.disabled {
            let _ = write!(out, " disabled");
        }
        if !element.styles.is_empty() {
            let styles: Vec<_> = element
                .styles
                .iter()
                .map(|(property, value)| format!("{}: {}", property, value))
                .collect();
            let _ = write!(out, " {{ {} }}", styles.join("; "));
        }
        out.push('\n');
    }
    out
}
