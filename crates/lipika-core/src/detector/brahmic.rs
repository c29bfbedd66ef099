//! Unicode block lookup for the Brahmic scripts.
//!
//! Devanagari through Malayalam occupy one contiguous run of 128-point
//! blocks, so membership is a range check and the owning script is the
//! block with the greatest start at or below the code point.

use crate::types::Scheme;

/// Start of the Devanagari block.
pub const BRAHMIC_FIRST_CODE_POINT: u32 = 0x0900;

/// End of the Malayalam block.
pub const BRAHMIC_LAST_CODE_POINT: u32 = 0x0D7F;

/// Block starts sorted by code point, descending.
const BLOCKS: [(Scheme, u32); 9] = [
    (Scheme::Malayalam, 0x0D00),
    (Scheme::Kannada, 0x0C80),
    (Scheme::Telugu, 0x0C00),
    (Scheme::Tamil, 0x0B80),
    (Scheme::Oriya, 0x0B00),
    (Scheme::Gujarati, 0x0A80),
    (Scheme::Gurmukhi, 0x0A00),
    (Scheme::Bengali, 0x0980),
    (Scheme::Devanagari, 0x0900),
];

/// Returns the Brahmic script whose Unicode block contains `c`.
#[must_use]
pub fn brahmic_scheme(c: char) -> Option<Scheme> {
    let code = u32::from(c);
    if !(BRAHMIC_FIRST_CODE_POINT..=BRAHMIC_LAST_CODE_POINT).contains(&code) {
        return None;
    }

    BLOCKS
        .iter()
        .find(|(_, start)| code >= *start)
        .map(|(scheme, _)| *scheme)
}

/// Finds the first Brahmic character in `text`.
///
/// Returns its char offset, the character, and its script. Later
/// characters are never examined, even if they belong to another script.
pub(crate) fn scan(text: &str) -> Option<(usize, char, Scheme)> {
    text.chars()
        .enumerate()
        .find_map(|(offset, c)| brahmic_scheme(c).map(|scheme| (offset, c, scheme)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_agrees_with_scheme_block_starts() {
        for (scheme, start) in BLOCKS {
            assert_eq!(scheme.block_start(), Some(start));
        }
        assert!(BLOCKS.windows(2).all(|w| w[0].1 > w[1].1));
    }

    #[test]
    fn block_edges() {
        assert_eq!(brahmic_scheme('\u{0900}'), Some(Scheme::Devanagari));
        assert_eq!(brahmic_scheme('\u{097F}'), Some(Scheme::Devanagari));
        assert_eq!(brahmic_scheme('\u{0980}'), Some(Scheme::Bengali));
        assert_eq!(brahmic_scheme('\u{0BFF}'), Some(Scheme::Tamil));
        assert_eq!(brahmic_scheme('\u{0C00}'), Some(Scheme::Telugu));
        assert_eq!(brahmic_scheme('\u{0D7F}'), Some(Scheme::Malayalam));
    }

    #[test]
    fn outside_range_is_ignored() {
        assert_eq!(brahmic_scheme('\u{08FF}'), None);
        assert_eq!(brahmic_scheme('\u{0D80}'), None); // Sinhala
        assert_eq!(brahmic_scheme('a'), None);
        assert_eq!(brahmic_scheme('ā'), None);
        assert_eq!(brahmic_scheme('あ'), None);
        assert_eq!(brahmic_scheme('\u{11000}'), None); // Brahmi, supplementary plane
    }

    #[test]
    fn scan_reports_first_hit() {
        assert_eq!(scan("rāga"), None);
        assert_eq!(scan(""), None);

        // Tamil first, Devanagari later
        let hit = scan("x அ क");
        assert_eq!(hit, Some((2, 'அ', Scheme::Tamil)));
    }

    #[test]
    fn scan_counts_chars_not_bytes() {
        let hit = scan("ā😀ক").unwrap();
        assert_eq!(hit.0, 2);
        assert_eq!(hit.2, Scheme::Bengali);
    }
}
