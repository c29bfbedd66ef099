//! # Lipika Core
//!
//! Detects which Brahmic script or Romanization scheme a piece of
//! Sanskrit-family text is written in, so a transliterator knows its
//! source scheme.
//!
//! ## Quick Start
//!
//! ```rust
//! use lipika_core::{detect, Scheme};
//!
//! assert_eq!(detect("संस्कृतम्"), Scheme::Devanagari);
//! assert_eq!(detect("saṃskṛtam"), Scheme::IAST);
//! assert_eq!(detect("saMskRtam"), Scheme::HK);
//! ```
pub mod detector;
pub mod error;
pub mod types;

// Re-export primary API
pub use detector::{brahmic_scheme, detect, explain, Detector, DetectorConfig};
pub use error::{LipikaError, Result};
pub use types::{Detection, Scheme, Signature};
