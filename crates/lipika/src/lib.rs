//! # Lipika
//!
//! Tells a transliterator which scheme its input is written in: one of nine
//! Brahmic scripts (Devanagari, Bengali, Tamil, ...) or six Romanizations
//! (HK, IAST, ITRANS, Kolkata, SLP1, Velthuis).
//!
//! ```rust
//! use lipika::{detect, Scheme};
//!
//! assert_eq!(detect("ধর্ম"), Scheme::Bengali);
//! assert_eq!(detect("dharmakShetre"), Scheme::ITRANS);
//! ```
pub use lipika_core::*;
