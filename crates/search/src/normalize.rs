//! Text normalization for accent- and punctuation-insensitive matching.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Produce the canonical comparison key for a string.
///
/// Lower-cases, decomposes accented characters (NFD) and drops the
/// combining diacritical marks, strips every character that is not a
/// lowercase ASCII letter, digit or whitespace, then trims. `"Plátano"`
/// and `"platano"` normalize to the same key, which is what makes the
/// Spanish-language catalog searchable without typing accents.
///
/// The function is idempotent and total: any input (including empty)
/// yields a string, never a panic.
#[must_use]
pub fn normalize(input: &str) -> String {
    let folded: String = input
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
        .collect();

    folded.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_accent_folding() {
        assert_eq!(normalize("Plátano"), "platano");
        assert_eq!(normalize("Platano"), "platano");
        assert_eq!(normalize("JALAPEÑO"), "jalapeno");
    }

    #[test]
    fn test_strips_symbols() {
        assert_eq!(normalize("Café (100ml)!"), "cafe 100ml");
        assert_eq!(normalize("Pan, integral - 50%"), "pan integral  50");
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(normalize("  leche entera  "), "leche entera");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("¡¿!?"), "");
    }

    proptest! {
        #[test]
        fn prop_idempotent(s in ".*") {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once);
        }
    }
}
