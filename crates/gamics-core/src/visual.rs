//! Declarative visual states.
//!
//! Components describe how an element should look as a state value; the
//! state renders to a [`StylePatch`] (or button content) that is written
//! through the page in one place.

use crate::page::{ElementId, Page};

/// Inline style properties to write; an empty value clears the property
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StylePatch(Vec<(&'static str, String)>);

impl StylePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.0.push((property, value.into()));
        self
    }

    pub fn clear(self, property: &'static str) -> Self {
        self.set(property, "")
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.0
            .iter()
            .rev()
            .find(|(name, _)| *name == property)
            .map(|(_, value)| value.as_str())
    }

    pub fn apply(&self, page: &mut dyn Page, element: ElementId) {
        for (property, value) in &self.0 {
            page.set_style(element, property, value);
        }
    }
}

/// Appearance of a contact card
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CardVisual {
    /// Before the reveal: transparent, shifted down, delay staggered by position
    Hidden { delay_secs: f64 },
    /// Entrance animation playing or finished
    Revealed,
    /// Following the pointer; angles in degrees
    Tilted { rotate_x: f64, rotate_y: f64 },
    /// Pointer left; easing back to neutral
    Resting,
}

impl CardVisual {
    pub fn hidden(index: usize, stagger_secs: f64) -> Self {
        CardVisual::Hidden {
            delay_secs: index as f64 * stagger_secs,
        }
    }

    /// Tilt for a pointer offset from the card center (each axis `-0.5..=0.5`)
    pub fn tilted(offset_x: f64, offset_y: f64, max_deg: f64) -> Self {
        CardVisual::Tilted {
            rotate_x: -offset_y * max_deg,
            rotate_y: offset_x * max_deg,
        }
    }

    pub fn style_patch(&self) -> StylePatch {
        match self {
            CardVisual::Hidden { delay_secs } => StylePatch::new()
                .set("opacity", "0")
                .set("transform", "translateY(20px)")
                .set("animation-delay", format!("{}s", delay_secs)),
            CardVisual::Revealed => StylePatch::new()
                .set("animation", "fadeInUp 0.6s ease forwards")
                .set("opacity", "1"),
            CardVisual::Tilted { rotate_x, rotate_y } => StylePatch::new()
                .set(
                    "transform",
                    format!(
                        "rotateX({}deg) rotateY({}deg) translateZ(6px)",
                        fixed2(*rotate_x),
                        fixed2(*rotate_y)
                    ),
                )
                .set("transition", "transform 0.08s"),
            CardVisual::Resting => StylePatch::new()
                .clear("transform")
                .set("transition", "transform 0.35s cubic-bezier(.2,.9,.2,1)"),
        }
    }
}

/// Two decimals, with `-0` printed as `0.00`.
///
/// Exact halves round away from zero, so `1.125` prints as `1.13`.
fn fixed2(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    // Only odd multiples of 1/8 sit exactly between two hundredths.
    let eighths = value * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
        return format!("{:.2}", (value * 100.0).round() / 100.0);
    }
    format!("{:.2}", value)
}

/// Appearance of the submit button
#[derive(Debug, Clone, PartialEq)]
pub enum ButtonVisual {
    Loading { label: String },
    Idle { label: String },
}

impl ButtonVisual {
    pub fn apply(&self, page: &mut dyn Page, button: ElementId) {
        match self {
            ButtonVisual::Loading { label } => {
                page.set_inner_html(button, &loading_html(label));
                page.set_disabled(button, true);
            }
            ButtonVisual::Idle { label } => {
                page.set_text_content(button, label);
                page.set_disabled(button, false);
            }
        }
    }
}

fn loading_html(label: &str) -> String {
    format!(
        "<span style=\"display:flex;align-items:center;gap:10px\">\
         <span style=\"width:16px;height:16px;border:2px solid transparent;\
         border-top:2px solid currentColor;border-radius:50%;\
         animation:spin 1s linear infinite\"></span>{}</span>",
        label
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_delay_is_staggered() {
        let first = CardVisual::hidden(0, 0.08).style_patch();
        assert_eq!(first.get("animation-delay"), Some("0s"));
        assert_eq!(first.get("opacity"), Some("0"));

        let second = CardVisual::hidden(1, 0.08).style_patch();
        assert_eq!(second.get("animation-delay"), Some("0.08s"));
    }

    #[test]
    fn tilt_follows_pointer() {
        let patch = CardVisual::tilted(0.5, -0.5, 6.0).style_patch();
        assert_eq!(
            patch.get("transform"),
            Some("rotateX(3.00deg) rotateY(3.00deg) translateZ(6px)")
        );
        assert_eq!(patch.get("transition"), Some("transform 0.08s"));
    }

    #[test]
    fn centered_tilt_has_no_negative_zero() {
        let patch = CardVisual::tilted(0.0, 0.0, 6.0).style_patch();
        assert_eq!(
            patch.get("transform"),
            Some("rotateX(0.00deg) rotateY(0.00deg) translateZ(6px)")
        );
    }

    #[test]
    fn tilt_ties_round_away_from_zero() {
        // pointer 11px into a 16px card
        let patch = CardVisual::tilted(0.1875, 0.0, 6.0).style_patch();
        assert_eq!(
            patch.get("transform"),
            Some("rotateX(0.00deg) rotateY(1.13deg) translateZ(6px)")
        );
        assert_eq!(fixed2(2.625), "2.63");
        assert_eq!(fixed2(-1.125), "-1.13");
        assert_eq!(fixed2(1.375), "1.38");
        assert_eq!(fixed2(1.005), "1.00");
        assert_eq!(fixed2(2.999), "3.00");
    }

    #[test]
    fn resting_clears_transform() {
        let patch = CardVisual::Resting.style_patch();
        assert_eq!(patch.get("transform"), Some(""));
        assert_eq!(
            patch.get("transition"),
            Some("transform 0.35s cubic-bezier(.2,.9,.2,1)")
        );
    }

    #[test]
    fn loading_markup_carries_label() {
        let html = loading_html("Enviando...");
        assert!(html.contains("animation:spin 1s linear infinite"));
        assert!(html.ends_with("Enviando...</span>"));
    }
}
