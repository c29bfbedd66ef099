use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LipikaError;

/// A writing system or Romanization scheme for Sanskrit-family text.
///
/// The set is closed: nine Brahmic scripts identified by their Unicode
/// block, and six Latin-alphabet Romanizations identified by lexical
/// signatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Scheme {
    // Brahmic
    Bengali,
    Devanagari,
    Gujarati,
    Gurmukhi,
    Kannada,
    Malayalam,
    Oriya,
    Tamil,
    Telugu,

    // Romanizations
    /// Harvard-Kyoto
    HK,
    /// International Alphabet of Sanskrit Transliteration
    IAST,
    ITRANS,
    /// IAST variant with distinct long `ē` and `ō`
    Kolkata,
    /// Sanskrit Library Phonetic Basic
    SLP1,
    Velthuis,
}

impl Scheme {
    /// Every scheme, Brahmic scripts first.
    pub const ALL: [Scheme; 15] = [
        Self::Bengali,
        Self::Devanagari,
        Self::Gujarati,
        Self::Gurmukhi,
        Self::Kannada,
        Self::Malayalam,
        Self::Oriya,
        Self::Tamil,
        Self::Telugu,
        Self::HK,
        Self::IAST,
        Self::ITRANS,
        Self::Kolkata,
        Self::SLP1,
        Self::Velthuis,
    ];

    /// Canonical label, as used by transliteration tables.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bengali => "Bengali",
            Self::Devanagari => "Devanagari",
            Self::Gujarati => "Gujarati",
            Self::Gurmukhi => "Gurmukhi",
            Self::Kannada => "Kannada",
            Self::Malayalam => "Malayalam",
            Self::Oriya => "Oriya",
            Self::Tamil => "Tamil",
            Self::Telugu => "Telugu",
            Self::HK => "HK",
            Self::IAST => "IAST",
            Self::ITRANS => "ITRANS",
            Self::Kolkata => "Kolkata",
            Self::SLP1 => "SLP1",
            Self::Velthuis => "Velthuis",
        }
    }

    /// First code point of the script's Unicode block, or `None` for
    /// Romanizations.
    #[must_use]
    pub fn block_start(self) -> Option<u32> {
        match self {
            Self::Devanagari => Some(0x0900),
            Self::Bengali => Some(0x0980),
            Self::Gurmukhi => Some(0x0A00),
            Self::Gujarati => Some(0x0A80),
            Self::Oriya => Some(0x0B00),
            Self::Tamil => Some(0x0B80),
            Self::Telugu => Some(0x0C00),
            Self::Kannada => Some(0x0C80),
            Self::Malayalam => Some(0x0D00),
            Self::HK | Self::IAST | Self::ITRANS | Self::Kolkata | Self::SLP1 | Self::Velthuis => {
                None
            }
        }
    }

    #[must_use]
    pub fn is_brahmic(self) -> bool {
        self.block_start().is_some()
    }

    #[must_use]
    pub fn is_roman(self) -> bool {
        !self.is_brahmic()
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scheme {
    type Err = LipikaError;

    /// Parses a canonical label, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|scheme| scheme.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| LipikaError::UnknownScheme { name: s.to_string() })
    }
}
