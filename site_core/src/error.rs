//! Error types for page interaction state.

use thiserror::Error;

/// Result type alias for controller operations.
pub type Result<T> = std::result::Result<T, SiteError>;

/// Errors raised by the page controllers.
///
/// None of these reach the visitor. The host logs them and leaves the
/// affected widget as it was.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SiteError {
    /// An indicator pointed past the end of the testimonial set.
    #[error("testimonial index {index} out of range (have {len})")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of testimonials.
        len: usize,
    },
}

/// Errors raised while loading [`crate::SiteConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML document could not be parsed into the config shape.
    #[error("failed to parse site config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value parsed but cannot drive the page.
    #[error("invalid site config: {field} {reason}")]
    Invalid {
        /// Dotted path of the offending key.
        field: &'static str,
        /// What is wrong with it.
        reason: &'static str,
    },
}
