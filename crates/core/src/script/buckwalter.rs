//! Buckwalter transliteration: an ASCII spelling of vocalized Arabic.

use std::collections::HashMap;

use super::vocalized::{parse_vocalized_text, VocalizedWord};
use crate::error::ParseError;

lazy_static::lazy_static! {
    static ref ARABIC_TO_ASCII: HashMap<char, char> = {
        [
            ('ء', '\''), ('آ', '|'), ('أ', '>'), ('ؤ', '&'), ('إ', '<'), ('ئ', '}'),
            ('ا', 'A'), ('ب', 'b'), ('ة', 'p'), ('ت', 't'), ('ث', 'v'), ('ج', 'j'),
            ('ح', 'H'), ('خ', 'x'), ('د', 'd'), ('ذ', '*'), ('ر', 'r'), ('ز', 'z'),
            ('س', 's'), ('ش', '$'), ('ص', 'S'), ('ض', 'D'), ('ط', 'T'), ('ظ', 'Z'),
            ('ع', 'E'), ('غ', 'g'), ('ف', 'f'), ('ق', 'q'), ('ك', 'k'), ('ل', 'l'),
            ('م', 'm'), ('ن', 'n'), ('ه', 'h'), ('و', 'w'), ('ى', 'Y'), ('ي', 'y'),
            ('ٱ', '{'),
            ('\u{064B}', 'F'), ('\u{064C}', 'N'), ('\u{064D}', 'K'),
            ('\u{064E}', 'a'), ('\u{064F}', 'u'), ('\u{0650}', 'i'),
            ('\u{0651}', '~'), ('\u{0652}', 'o'), ('\u{0640}', '_'),
        ]
        .into_iter()
        .collect()
    };

    static ref ASCII_TO_ARABIC: HashMap<char, char> = {
        ARABIC_TO_ASCII.iter().map(|(a, b)| (*b, *a)).collect()
    };
}

/// Render a word in Buckwalter: letter, then `~` for shadda, then the vowel.
pub fn to_buckwalter(word: &VocalizedWord) -> String {
    let mut out = String::with_capacity(word.len() * 2);
    for l in &word.letters {
        out.push(ARABIC_TO_ASCII.get(&l.letter).copied().unwrap_or(l.letter));
        if l.shadda {
            out.push('~');
        }
        if let Some(t) = l.tashkil {
            out.push(ARABIC_TO_ASCII[&t.mark()]);
        }
    }
    out
}

/// Parse a Buckwalter string into a vocalized word.
pub fn parse_buckwalter(text: &str) -> Result<VocalizedWord, ParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ParseError::Empty);
    }
    let mut arabic = String::with_capacity(text.len() * 2);
    for (position, ch) in text.chars().enumerate() {
        match ASCII_TO_ARABIC.get(&ch) {
            Some(a) => arabic.push(*a),
            None => return Err(ParseError::UnexpectedCharacter { ch, position }),
        }
    }
    parse_vocalized_text(&arabic)
}

/// True when `text` looks like Buckwalter rather than Arabic script.
pub fn is_buckwalter(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_to_buckwalter() {
        let word = parse_vocalized_text("يُفَعِّلُ").unwrap();
        assert_eq!(to_buckwalter(&word), "yufaE~ilu");
    }

    #[test]
    fn test_parse_buckwalter() {
        let word = parse_buckwalter("kataba").unwrap();
        assert_eq!(word.to_string(), "كَتَبَ");
        let doubled = parse_buckwalter("mad~a").unwrap();
        assert!(doubled.letters[1].shadda);
        assert!(matches!(
            parse_buckwalter("ka9"),
            Err(ParseError::UnexpectedCharacter { ch: '9', position: 2 })
        ));
    }

    #[test]
    fn test_hamza_seats() {
        let word = parse_buckwalter(">akala").unwrap();
        assert_eq!(word.letters[0].letter, 'أ');
        assert_eq!(to_buckwalter(&parse_buckwalter("|mana").unwrap()), "|mana");
    }

    #[test]
    fn test_detection() {
        assert!(is_buckwalter("kataba"));
        assert!(!is_buckwalter("كَتَبَ"));
    }
}
