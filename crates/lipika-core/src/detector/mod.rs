//! # Scheme Detector
//!
//! Two-phase classification: a code-point scan for the Brahmic blocks,
//! then ordered signature rules for the Romanizations.

pub mod brahmic;
pub mod config;
mod roman;

use std::sync::LazyLock;

use tracing::{debug, trace};

use crate::error::Result;
use crate::types::{Detection, Scheme};

pub use brahmic::{brahmic_scheme, BRAHMIC_FIRST_CODE_POINT, BRAHMIC_LAST_CODE_POINT};
pub use config::DetectorConfig;
use roman::RomanRules;

/// Detector with pre-compiled Romanization patterns.
///
/// Holds no mutable state; share one instance freely across threads.
pub struct Detector {
    config: DetectorConfig,
    roman: RomanRules,
}

impl Detector {
    /// Constructs a detector with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns `LipikaError::RegexError` if any pattern fails to compile
    /// (should never happen with the static patterns defined internally).
    pub fn new() -> Result<Self> {
        Self::with_config(DetectorConfig::default())
    }

    /// Constructs a detector with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `LipikaError::InvalidConfig` if the configuration names a
    /// Brahmic script where a Romanization is required, or
    /// `LipikaError::RegexError` if pattern compilation fails.
    pub fn with_config(config: DetectorConfig) -> Result<Self> {
        config.validate()?;
        let roman = RomanRules::new()?;
        debug!(
            ambiguous_roman = %config.ambiguous_roman,
            fallback = %config.fallback,
            "built scheme detector"
        );
        Ok(Self { config, roman })
    }

    /// Detects the scheme of `text`.
    ///
    /// Never fails: empty or unrecognisable text gets the fallback scheme.
    ///
    /// # Examples
    /// ```
    /// use lipika_core::{Detector, Scheme};
    ///
    /// let detector = Detector::new().unwrap();
    /// assert_eq!(detector.detect("अ"), Scheme::Devanagari);
    /// assert_eq!(detector.detect("rāga"), Scheme::IAST);
    /// assert_eq!(detector.detect("rAga"), Scheme::HK);
    /// ```
    pub fn detect(&self, text: &str) -> Scheme {
        self.explain(text).scheme
    }

    /// Detects the scheme of `text` and reports which rule decided it.
    pub fn explain(&self, text: &str) -> Detection {
        if let Some((offset, c, scheme)) = brahmic::scan(text) {
            trace!(%scheme, offset, code_point = u32::from(c), "brahmic block");
            return Detection::brahmic(scheme, c, offset);
        }

        let detection = self.roman.classify(text, &self.config);
        trace!(scheme = %detection.scheme, signature = ?detection.signature, "romanization");
        detection
    }

    /// Get the detector configuration.
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }
}

static DEFAULT_DETECTOR: LazyLock<Detector> =
    LazyLock::new(|| Detector::new().expect("static detection patterns compile"));

/// Convenience function to detect a scheme with default settings.
///
/// The underlying detector is built once per process.
pub fn detect(text: &str) -> Scheme {
    DEFAULT_DETECTOR.detect(text)
}

/// Convenience function to explain a detection with default settings.
pub fn explain(text: &str) -> Detection {
    DEFAULT_DETECTOR.explain(text)
}
