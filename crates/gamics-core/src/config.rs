//! Tunables for the contact page components.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::page::IntersectionOptions;

/// Timings, thresholds and copy used by the components.
///
/// Every field has a default, so a partial JSON document is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Scroll offset (inclusive) at which header and back-to-top activate
    pub scroll_threshold: f64,
    /// Simulated latency of a form submission
    pub submit_latency_ms: u64,
    /// Auto-dismiss lifetime of a notification
    pub notification_lifetime_ms: u64,
    /// Reveal animation delay added per card index, in seconds
    pub card_stagger_secs: f64,
    /// Maximum tilt on each axis, in degrees
    pub tilt_max_deg: f64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub success_message: String,
    pub loading_label: String,
    /// Button label used when the page has no submit button text to restore
    pub fallback_button_label: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: 200.0,
            submit_latency_ms: 1200,
            notification_lifetime_ms: 5000,
            card_stagger_secs: 0.08,
            tilt_max_deg: 6.0,
            reveal_threshold: 0.12,
            reveal_root_margin: "0px 0px -40px 0px".to_string(),
            success_message: "¡Mensaje enviado con éxito! Te contactaremos pronto.".to_string(),
            loading_label: "Enviando...".to_string(),
            fallback_button_label: "Enviar".to_string(),
        }
    }
}

impl ContactConfig {
    pub fn submit_latency(&self) -> Duration {
        Duration::from_millis(self.submit_latency_ms)
    }

    pub fn notification_lifetime(&self) -> Duration {
        Duration::from_millis(self.notification_lifetime_ms)
    }

    pub fn reveal_options(&self) -> IntersectionOptions {
        IntersectionOptions {
            threshold: self.reveal_threshold,
            root_margin: self.reveal_root_margin.clone(),
        }
    }
}
