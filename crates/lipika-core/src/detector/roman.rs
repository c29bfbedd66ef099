//! Ordered signature rules for Latin-alphabet Romanizations.
//!
//! The signatures overlap (Velthuis and ITRANS share bigrams, SLP1 reuses
//! HK capitals), so the rules run in a fixed order and the first match
//! wins. Each rule only looks for marks that cannot occur in any scheme
//! tested after it.

use regex::Regex;

use super::config::DetectorConfig;
use crate::error::Result;
use crate::types::{Detection, Scheme, Signature};

/// IAST and Kolkata diacritics.
const IAST_OR_KOLKATA: &str = "[āīūṛṝḷḹēōṃḥṅñṭḍṇśṣḻ]";

/// Long `e` and `o`, which only Kolkata marks.
const KOLKATA_ONLY: &str = "[ēō]";

const ITRANS_ONLY: &str = r"ee|oo|\^[iI]|RR[iI]|L[iI]|~N|N\^|Ch|chh|JN|sh|Sh|\.a";

// Word characters are ASCII only: a `G` after `ā` or `ア` still counts as
// word-initial.
const SLP1_ONLY: &str = concat!(
    "[fFxXEOCYwWqQPB]|kz|Nk|Ng|tT|dD|Sc|Sn|",
    "[aAiIuUfFxXeEoO]R|",
    "G[yr]|(?:^|[^0-9A-Za-z_])G",
);

const VELTHUIS_ONLY: &str = r#"\.[mhnrlntds]|"n|~s"#;

const ITRANS_OR_VELTHUIS: &str = "aa|ii|uu|~n";

struct RomanRule {
    signature: Signature,
    pattern: Regex,
}

/// Precompiled Romanization signatures in evaluation order.
pub(crate) struct RomanRules {
    rules: Vec<RomanRule>,
    re_kolkata_only: Regex,
}

impl RomanRules {
    /// Compiles every signature pattern.
    ///
    /// # Errors
    ///
    /// Returns `LipikaError::RegexError` if a pattern fails to compile
    /// (should never happen with the static patterns defined here).
    pub(crate) fn new() -> Result<Self> {
        let ordered = [
            (Signature::IastOrKolkata, IAST_OR_KOLKATA),
            (Signature::ItransOnly, ITRANS_ONLY),
            (Signature::Slp1Only, SLP1_ONLY),
            (Signature::VelthuisOnly, VELTHUIS_ONLY),
            (Signature::ItransOrVelthuis, ITRANS_OR_VELTHUIS),
        ];

        let rules = ordered
            .into_iter()
            .map(|(signature, pattern)| -> Result<RomanRule> {
                Ok(RomanRule {
                    signature,
                    pattern: Regex::new(pattern)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            rules,
            re_kolkata_only: Regex::new(KOLKATA_ONLY)?,
        })
    }

    /// Classifies `text` as one of the Romanizations.
    pub(crate) fn classify(&self, text: &str, config: &DetectorConfig) -> Detection {
        match self.rules.iter().find(|rule| rule.pattern.is_match(text)) {
            Some(rule) => {
                let scheme = self.resolve(rule.signature, text, config);
                Detection::roman(scheme, rule.signature)
            }
            None => Detection::roman(config.fallback, Signature::Fallback),
        }
    }

    fn resolve(&self, signature: Signature, text: &str, config: &DetectorConfig) -> Scheme {
        match signature {
            Signature::IastOrKolkata if self.re_kolkata_only.is_match(text) => Scheme::Kolkata,
            Signature::IastOrKolkata => Scheme::IAST,
            Signature::ItransOnly => Scheme::ITRANS,
            Signature::Slp1Only => Scheme::SLP1,
            Signature::VelthuisOnly => Scheme::Velthuis,
            Signature::ItransOrVelthuis => config.ambiguous_roman,
            Signature::BrahmicBlock | Signature::Fallback => config.fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str) -> Detection {
        RomanRules::new()
            .unwrap()
            .classify(text, &DetectorConfig::default())
    }

    #[test]
    fn all_patterns_compile() {
        assert!(RomanRules::new().is_ok());
    }

    #[test]
    fn kolkata_needs_long_e_or_o() {
        assert_eq!(classify("sōma").scheme, Scheme::Kolkata);
        assert_eq!(classify("tējas").scheme, Scheme::Kolkata);
        assert_eq!(classify("soma rāga").scheme, Scheme::IAST);
        assert_eq!(classify("tējas").signature, Signature::IastOrKolkata);
    }

    #[test]
    fn diacritics_shadow_every_later_rule() {
        // `aa` and `.r` would otherwise pick ITRANS or Velthuis
        let d = classify("raaga k.rta ā");
        assert_eq!(d.scheme, Scheme::IAST);
    }

    #[test]
    fn itrans_only_precedes_slp1() {
        // `f` alone would be SLP1
        let d = classify("shf");
        assert_eq!(d.scheme, Scheme::ITRANS);
        assert_eq!(d.signature, Signature::ItransOnly);
    }

    #[test]
    fn slp1_word_initial_g() {
        assert_eq!(classify("Gasmara").scheme, Scheme::SLP1);
        assert_eq!(classify("x-Gasa").scheme, Scheme::SLP1);
        assert_eq!(classify("ΣGasa").scheme, Scheme::SLP1);
        // medial G is HK
        assert_eq!(classify("aGka").scheme, Scheme::HK);
    }

    #[test]
    fn slp1_vowel_before_retroflex_n() {
        assert_eq!(classify("aruRa").scheme, Scheme::SLP1);
        // HK `R` after a consonant
        assert_eq!(classify("kRta").scheme, Scheme::HK);
    }

    #[test]
    fn velthuis_markers() {
        for text in ["k.rta", "gomaya.h", "a\"nga", "~sveta", "sa.myoga"] {
            let d = classify(text);
            assert_eq!(d.scheme, Scheme::Velthuis, "failed for input: {text}");
            assert_eq!(d.signature, Signature::VelthuisOnly);
        }
    }

    #[test]
    fn shared_bigrams_resolve_to_itrans_by_default() {
        let d = classify("vadhuu");
        assert_eq!(d.scheme, Scheme::ITRANS);
        assert_eq!(d.signature, Signature::ItransOrVelthuis);
    }

    #[test]
    fn shared_bigrams_follow_config() {
        let config = DetectorConfig::new()
            .with_ambiguous_roman(Scheme::Velthuis)
            .unwrap();
        let d = RomanRules::new().unwrap().classify("raaga", &config);
        assert_eq!(d.scheme, Scheme::Velthuis);
    }

    #[test]
    fn nothing_matched_is_fallback() {
        let d = classify("rAga");
        assert_eq!(d, Detection::roman(Scheme::HK, Signature::Fallback));

        let d = classify("");
        assert_eq!(d.scheme, Scheme::HK);
    }
}
