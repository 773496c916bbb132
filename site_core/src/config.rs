//! Configuration for the landing page behaviour.
//!
//! The landing embeds `site.toml` at build time. Every section and key is
//! optional; missing keys take the defaults below.

use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

/// Largest delay a browser timer accepts.
const MAX_TIMER_MS: u64 = i32::MAX as u64;

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub carousel: CarouselConfig,
    pub highlight: HighlightConfig,
    pub header: HeaderConfig,
    pub reveal: RevealConfig,
    pub contact: ContactConfig,
    /// Location widget. Absent section means the defaults; set
    /// `enabled = false` to drop the widget entirely.
    pub map: MapConfig,
}

/// Testimonial auto-advance
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Milliseconds between auto-advance ticks.
    pub interval_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self { interval_ms: 5000 }
    }
}

impl CarouselConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// Active-section detection
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// Pixels a section is considered "current" before its top reaches the header.
    pub lookahead: f64,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self { lookahead: 100.0 }
    }
}

/// Header backdrop
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Scroll offset past which the header switches to its scrolled look.
    pub scroll_threshold: f64,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: 100.0,
        }
    }
}

/// Reveal-on-scroll animation
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// CSS selector list of elements that fade in.
    pub selector: String,
    /// Intersection ratio that counts as "entered".
    pub threshold: f64,
    /// Observer root margin, CSS shorthand.
    pub root_margin: String,
    /// Delay between the offset snap and the transition.
    pub delay_ms: u64,
    /// Starting vertical offset in pixels.
    pub offset_px: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selector: ".category-card, .feature-card, .portfolio-item, .stat".into(),
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".into(),
            delay_ms: 100,
            offset_px: 20.0,
        }
    }
}

impl RevealConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Contact form submit simulation
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Time spent showing "Sending...".
    pub sending_ms: u64,
    /// Time spent showing "Message Sent!" before the button resets.
    pub sent_ms: u64,
    /// Resting label of the submit button.
    pub submit_label: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            sending_ms: 1500,
            sent_ms: 2000,
            submit_label: "Send Message".into(),
        }
    }
}

impl ContactConfig {
    pub fn sending(&self) -> Duration {
        Duration::from_millis(self.sending_ms)
    }

    pub fn sent(&self) -> Duration {
        Duration::from_millis(self.sent_ms)
    }
}

/// Business location widget
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub enabled: bool,
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
    pub tile_url: String,
    pub attribution: String,
    pub business_name: String,
    pub address_lines: Vec<String>,
    /// Layout refresh after the widget mounts (it may start hidden).
    pub refresh_after_mount_ms: u64,
    /// Layout refresh after the location nav link is clicked.
    pub refresh_after_nav_ms: u64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            latitude: 40.712776,
            longitude: -74.005974,
            zoom: 13,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".into(),
            attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors".into(),
            business_name: "ElectroTools Headquarters".into(),
            address_lines: vec![
                "123 Electrical Avenue".into(),
                "Power City, PC 12345".into(),
            ],
            refresh_after_mount_ms: 100,
            refresh_after_nav_ms: 400,
        }
    }
}

impl MapConfig {
    /// External directions link for the configured coordinates.
    pub fn directions_url(&self) -> String {
        format!(
            "https://maps.google.com/?q={},{}",
            self.latitude, self.longitude
        )
    }

    /// HTML shown in the marker popup.
    pub fn popup_html(&self) -> String {
        let mut html = format!("<strong>{}</strong><br>", self.business_name);
        for line in &self.address_lines {
            html.push_str(line);
            html.push_str("<br>");
        }
        html.push_str(&format!(
            "<a href=\"{}\" target=\"_blank\">Get Directions</a>",
            self.directions_url()
        ));
        html
    }

    pub fn refresh_after_mount(&self) -> Duration {
        Duration::from_millis(self.refresh_after_mount_ms)
    }

    pub fn refresh_after_nav(&self) -> Duration {
        Duration::from_millis(self.refresh_after_nav_ms)
    }
}

impl SiteConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML document, falling back to defaults on any error.
    pub fn load_or_default(content: &str) -> Self {
        match Self::from_toml_str(content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{e}; using default site config");
                Self::default()
            }
        }
    }

    /// Reject values that would stall timers or break layout math.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Browser timers take a signed 32-bit millisecond count.
        let timers = [
            ("carousel.interval_ms", self.carousel.interval_ms),
            ("reveal.delay_ms", self.reveal.delay_ms),
            ("contact.sending_ms", self.contact.sending_ms),
            ("contact.sent_ms", self.contact.sent_ms),
            ("map.refresh_after_mount_ms", self.map.refresh_after_mount_ms),
            ("map.refresh_after_nav_ms", self.map.refresh_after_nav_ms),
        ];
        for (field, ms) in timers {
            if ms > MAX_TIMER_MS {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must fit a browser timer (at most 2147483647 ms)",
                });
            }
        }
        if self.carousel.interval_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "carousel.interval_ms",
                reason: "must be greater than zero",
            });
        }
        if !self.highlight.lookahead.is_finite() {
            return Err(ConfigError::Invalid {
                field: "highlight.lookahead",
                reason: "must be a finite number",
            });
        }
        if !self.header.scroll_threshold.is_finite() {
            return Err(ConfigError::Invalid {
                field: "header.scroll_threshold",
                reason: "must be a finite number",
            });
        }
        if !self.reveal.offset_px.is_finite() {
            return Err(ConfigError::Invalid {
                field: "reveal.offset_px",
                reason: "must be a finite number",
            });
        }
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(ConfigError::Invalid {
                field: "reveal.threshold",
                reason: "must be between 0 and 1",
            });
        }
        if self.map.enabled {
            if !(-90.0..=90.0).contains(&self.map.latitude) {
                return Err(ConfigError::Invalid {
                    field: "map.latitude",
                    reason: "must be between -90 and 90",
                });
            }
            if !(-180.0..=180.0).contains(&self.map.longitude) {
                return Err(ConfigError::Invalid {
                    field: "map.longitude",
                    reason: "must be between -180 and 180",
                });
            }
        }
        Ok(())
    }
}
