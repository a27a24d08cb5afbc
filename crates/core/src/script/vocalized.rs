//! Vocalized letters and words, and parsing them out of Unicode text.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::letters::{is_arabic_letter, Tashkil, SHADDA, TATWEEL};
use crate::error::ParseError;

/// One base letter with its diacritics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VocalizedLetter {
    pub letter: char,
    pub tashkil: Option<Tashkil>,
    #[serde(default)]
    pub shadda: bool,
    /// Pharyngealization, not visible in the script.
    #[serde(default)]
    pub emphasis: bool,
}

impl VocalizedLetter {
    pub fn new(letter: char, tashkil: Option<Tashkil>) -> Self {
        Self {
            letter,
            tashkil,
            shadda: false,
            emphasis: false,
        }
    }

    /// Letter with a vowel mark.
    pub fn voweled(letter: char, tashkil: Tashkil) -> Self {
        Self::new(letter, Some(tashkil))
    }

    /// Letter without any mark.
    pub fn bare(letter: char) -> Self {
        Self::new(letter, None)
    }

    pub fn doubled(mut self) -> Self {
        self.shadda = true;
        self
    }
}

impl fmt::Display for VocalizedLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter)?;
        if self.shadda {
            write!(f, "{SHADDA}")?;
        }
        if let Some(t) = self.tashkil {
            write!(f, "{}", t.mark())?;
        }
        Ok(())
    }
}

/// A vocalized word; the unit every operation produces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VocalizedWord {
    pub letters: Vec<VocalizedLetter>,
}

impl VocalizedWord {
    pub fn new(letters: Vec<VocalizedLetter>) -> Self {
        Self { letters }
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Base letters only, no diacritics.
    pub fn skeleton(&self) -> String {
        self.letters.iter().map(|l| l.letter).collect()
    }
}

impl From<Vec<VocalizedLetter>> for VocalizedWord {
    fn from(letters: Vec<VocalizedLetter>) -> Self {
        Self::new(letters)
    }
}

impl fmt::Display for VocalizedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

impl FromStr for VocalizedWord {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_vocalized_text(s)
    }
}

/// Whitespace-separated vocalized words.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocalizedPhrase {
    pub words: Vec<VocalizedWord>,
}

impl fmt::Display for VocalizedPhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{word}")?;
        }
        Ok(())
    }
}

/// Parse a single vocalized word. Marks attach to the preceding letter in
/// any order; letters without marks are kept unvocalized.
pub fn parse_vocalized_text(text: &str) -> Result<VocalizedWord, ParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ParseError::Empty);
    }
    let mut letters: Vec<VocalizedLetter> = Vec::new();
    for (position, ch) in text.chars().enumerate() {
        if ch == TATWEEL {
            continue;
        }
        if is_arabic_letter(ch) {
            letters.push(VocalizedLetter::bare(ch));
            continue;
        }
        let current = match letters.last_mut() {
            Some(l) => l,
            None if ch == SHADDA || Tashkil::from_mark(ch).is_some() => {
                return Err(ParseError::OrphanMark { mark: ch, position });
            }
            None => return Err(ParseError::UnexpectedCharacter { ch, position }),
        };
        if ch == SHADDA {
            current.shadda = true;
        } else if let Some(t) = Tashkil::from_mark(ch) {
            if current.tashkil.is_some_and(|existing| existing != t) {
                return Err(ParseError::ConflictingMarks { position });
            }
            current.tashkil = Some(t);
        } else {
            return Err(ParseError::UnexpectedCharacter { ch, position });
        }
    }
    Ok(VocalizedWord::new(letters))
}

/// Parse whitespace-separated words.
pub fn parse_vocalized_phrase(text: &str) -> Result<VocalizedPhrase, ParseError> {
    let words = text
        .split_whitespace()
        .map(parse_vocalized_text)
        .collect::<Result<Vec<_>, _>>()?;
    if words.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(VocalizedPhrase { words })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_render() {
        let word = parse_vocalized_text("كَتَبَ").unwrap();
        assert_eq!(word.len(), 3);
        assert_eq!(word.letters[0].tashkil, Some(Tashkil::Fatha));
        assert_eq!(word.skeleton(), "كتب");
        assert_eq!(word.to_string(), "كَتَبَ");
    }

    #[test]
    fn test_shadda_order_is_free() {
        // vowel before shadda, and shadda before vowel
        let a = parse_vocalized_text("م\u{064E}د\u{064E}\u{0651}").unwrap();
        let b = parse_vocalized_text("م\u{064E}د\u{0651}\u{064E}").unwrap();
        assert_eq!(a, b);
        assert!(a.letters[1].shadda);
        assert_eq!(a.to_string(), "م\u{064E}د\u{0651}\u{064E}");
    }

    #[test]
    fn test_unvocalized_letters_kept() {
        let word = parse_vocalized_text("كتب").unwrap();
        assert!(word.letters.iter().all(|l| l.tashkil.is_none()));
    }

    #[test]
    fn test_tatweel_skipped() {
        let word = parse_vocalized_text("كـتب").unwrap();
        assert_eq!(word.skeleton(), "كتب");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_vocalized_text("  "), Err(ParseError::Empty));
        assert!(matches!(
            parse_vocalized_text("\u{064E}كتب"),
            Err(ParseError::OrphanMark { position: 0, .. })
        ));
        assert!(matches!(
            parse_vocalized_text("كَِ"),
            Err(ParseError::ConflictingMarks { position: 2 })
        ));
        assert!(matches!(
            parse_vocalized_text("كتبx"),
            Err(ParseError::UnexpectedCharacter { ch: 'x', .. })
        ));
    }

    #[test]
    fn test_phrase_split() {
        let phrase = parse_vocalized_phrase("كَتَبَ  دَرَسَ").unwrap();
        assert_eq!(phrase.words.len(), 2);
        assert_eq!(phrase.to_string(), "كَتَبَ دَرَسَ");
    }
}
