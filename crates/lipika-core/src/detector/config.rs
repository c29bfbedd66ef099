use crate::error::{LipikaError, Result};
use crate::types::Scheme;

/// Configuration for the detector.
///
/// The defaults reproduce the standard rule order exactly; the two knobs
/// only change what the last two Romanization rules answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectorConfig {
    /// Scheme reported for text whose only marks are the bigrams ITRANS and
    /// Velthuis share (`aa`, `ii`, `uu`, `~n`).
    pub ambiguous_roman: Scheme,
    /// Scheme reported when no signature matches at all.
    pub fallback: Scheme,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            ambiguous_roman: Scheme::ITRANS,
            fallback: Scheme::HK,
        }
    }
}

impl DetectorConfig {
    /// Create a new detector configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the scheme reported for shared ITRANS/Velthuis bigrams.
    ///
    /// # Errors
    ///
    /// Returns `LipikaError::InvalidConfig` if `scheme` is a Brahmic script.
    pub fn with_ambiguous_roman(mut self, scheme: Scheme) -> Result<Self> {
        self.ambiguous_roman = require_roman(scheme, "ambiguous_roman")?;
        Ok(self)
    }

    /// Set the scheme reported when nothing matches.
    ///
    /// # Errors
    ///
    /// Returns `LipikaError::InvalidConfig` if `scheme` is a Brahmic script.
    pub fn with_fallback(mut self, scheme: Scheme) -> Result<Self> {
        self.fallback = require_roman(scheme, "fallback")?;
        Ok(self)
    }

    /// Check that a configuration built by struct literal is usable.
    ///
    /// # Errors
    ///
    /// Returns `LipikaError::InvalidConfig` if either field names a Brahmic script.
    pub fn validate(&self) -> Result<()> {
        require_roman(self.ambiguous_roman, "ambiguous_roman")?;
        require_roman(self.fallback, "fallback")?;
        Ok(())
    }
}

fn require_roman(scheme: Scheme, field: &str) -> Result<Scheme> {
    if scheme.is_roman() {
        Ok(scheme)
    } else {
        Err(LipikaError::InvalidConfig(format!(
            "{field} must be a romanization scheme, got {scheme}"
        )))
    }
}
