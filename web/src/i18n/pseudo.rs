//! Pseudo-localization
//!
//! Turns source strings into visibly "translated" ones so untranslated
//! text stands out: letters are swapped for accented look-alikes, the
//! message is bracketed and padded to simulate longer languages.
//! `{placeholder}` names are left untouched.

use super::catalog::Catalog;

/// Pseudo-localize one message.
pub fn localize(message: &str) -> String {
    let mut out = String::with_capacity(message.len() * 2 + 4);
    let mut letters = 0usize;
    let mut in_placeholder = false;

    out.push('[');
    for c in message.chars() {
        match c {
            '{' => {
                in_placeholder = true;
                out.push(c);
            },
            '}' => {
                in_placeholder = false;
                out.push(c);
            },
            _ if in_placeholder => out.push(c),
            _ => {
                if c.is_ascii_alphabetic() {
                    letters += 1;
                }
                out.push(accent(c));
            },
        }
    }

    // roughly a third longer, like many translations
    let padding = letters.div_ceil(3);
    if padding > 0 {
        out.push(' ');
        out.extend(std::iter::repeat_n('~', padding));
    }
    out.push(']');
    out
}

/// Pseudo-localize every message of a source catalog.
pub fn localize_catalog(source: &Catalog) -> Catalog {
    source.iter().map(|(id, message)| (id.to_string(), localize(message))).collect()
}

fn accent(c: char) -> char {
    match c {
        'a' => 'ȧ',
        'b' => 'ƀ',
        'c' => 'ƈ',
        'd' => 'ḓ',
        'e' => 'ḗ',
        'f' => 'ƒ',
        'g' => 'ɠ',
        'h' => 'ħ',
        'i' => 'ī',
        'j' => 'ĵ',
        'k' => 'ķ',
        'l' => 'ŀ',
        'm' => 'ḿ',
        'n' => 'ƞ',
        'o' => 'ǿ',
        'p' => 'ƥ',
        'q' => 'ɋ',
        'r' => 'ř',
        's' => 'ş',
        't' => 'ŧ',
        'u' => 'ŭ',
        'v' => 'ṽ',
        'w' => 'ẇ',
        'x' => 'ẋ',
        'y' => 'ẏ',
        'z' => 'ẑ',
        'A' => 'Ȧ',
        'B' => 'Ɓ',
        'C' => 'Ƈ',
        'D' => 'Ḓ',
        'E' => 'Ḗ',
        'F' => 'Ƒ',
        'G' => 'Ɠ',
        'H' => 'Ħ',
        'I' => 'Ī',
        'J' => 'Ĵ',
        'K' => 'Ķ',
        'L' => 'Ŀ',
        'M' => 'Ḿ',
        'N' => 'Ƞ',
        'O' => 'Ǿ',
        'P' => 'Ƥ',
        'Q' => 'Ɋ',
        'R' => 'Ř',
        'S' => 'Ş',
        'T' => 'Ŧ',
        'U' => 'Ŭ',
        'V' => 'Ṽ',
        'W' => 'Ẇ',
        'X' => 'Ẋ',
        'Y' => 'Ẏ',
        'Z' => 'Ẑ',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_localize_accents_and_pads() {
        assert_eq!(localize("Home"), "[Ħǿḿḗ ~~]");
        assert_eq!(localize("Go back"), "[Ɠǿ ƀȧƈķ ~~]");
    }

    #[test]
    fn test_localize_keeps_placeholders() {
        let out = localize("Current language: {locale}");
        assert!(out.contains("{locale}"));
        assert!(!out.contains("Current"));
        assert!(out.starts_with('[') && out.ends_with(']'));
    }

    #[test]
    fn test_localize_non_letters_unchanged() {
        assert_eq!(localize("42!"), "[42!]");
        assert_eq!(localize(""), "[]");
    }

    #[test]
    fn test_localize_catalog() {
        let source: Catalog =
            [("Home", "Home"), ("About", "About")].into_iter().collect();
        let pseudo = localize_catalog(&source);

        assert_eq!(pseudo.len(), 2);
        assert_eq!(pseudo.get("Home"), Some("[Ħǿḿḗ ~~]"));
        assert_eq!(pseudo.get("About"), Some("[Ȧƀǿŭŧ ~~]"));
    }
}
