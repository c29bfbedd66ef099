use serde::{Deserialize, Serialize};

use super::scheme::Scheme;

/// The rule that decided a detection, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Signature {
    /// A character inside one of the Brahmic Unicode blocks.
    BrahmicBlock,
    /// IAST/Kolkata diacritics such as `ā`, `ṛ`, `ś`.
    IastOrKolkata,
    /// Bigrams only ITRANS uses, such as `ee`, `RRi`, `~N`, `sh`.
    ItransOnly,
    /// Letters and bigrams only SLP1 uses, such as `f`, `kz`, `Gy`.
    Slp1Only,
    /// Dot and quote prefixes only Velthuis uses, such as `.r`, `"n`.
    VelthuisOnly,
    /// Doubled vowels and `~n`, shared by ITRANS and Velthuis.
    ItransOrVelthuis,
    /// Nothing matched.
    Fallback,
}

/// The outcome of a detection together with the evidence behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detection {
    /// The detected scheme.
    pub scheme: Scheme,

    /// Which rule produced `scheme`.
    pub signature: Signature,

    /// The Brahmic character that decided the result, if any.
    pub char: Option<char>,

    /// Char offset (not byte offset) of `char` in the input.
    pub offset: Option<usize>,
}

impl Detection {
    /// A detection decided by a Brahmic character at `offset`.
    #[must_use]
    pub fn brahmic(scheme: Scheme, c: char, offset: usize) -> Self {
        Self {
            scheme,
            signature: Signature::BrahmicBlock,
            char: Some(c),
            offset: Some(offset),
        }
    }

    /// A detection decided by a whole-text Romanization rule.
    #[must_use]
    pub fn roman(scheme: Scheme, signature: Signature) -> Self {
        Self {
            scheme,
            signature,
            char: None,
            offset: None,
        }
    }
}
