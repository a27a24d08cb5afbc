//! Arabic letters, diacritics and the letter classes the rules key on.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const ALEF: char = 'ا';
pub const ALEF_MADDA: char = 'آ';
pub const ALEF_HAMZA_ABOVE: char = 'أ';
pub const ALEF_HAMZA_BELOW: char = 'إ';
pub const ALEF_WASLA: char = 'ٱ';
pub const ALEF_MAKSURA: char = 'ى';
pub const HAMZA: char = 'ء';
pub const WAW: char = 'و';
pub const WAW_HAMZA: char = 'ؤ';
pub const YA: char = 'ي';
pub const YA_HAMZA: char = 'ئ';
pub const BA: char = 'ب';
pub const TA: char = 'ت';
pub const TA_MARBUTA: char = 'ة';
pub const DAL: char = 'د';
pub const SIN: char = 'س';
pub const TAA: char = 'ط';
pub const LAM: char = 'ل';
pub const MIM: char = 'م';
pub const NUN: char = 'ن';

pub const SHADDA: char = '\u{0651}';
pub const TATWEEL: char = '\u{0640}';

/// Short-vowel, sukun and tanween marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tashkil {
    Fatha,
    Kasra,
    Dhamma,
    Sukun,
    Fathatan,
    Kasratan,
    Dammatan,
}

impl Tashkil {
    /// The combining mark that renders this tashkil.
    pub fn mark(self) -> char {
        match self {
            Tashkil::Fathatan => '\u{064B}',
            Tashkil::Dammatan => '\u{064C}',
            Tashkil::Kasratan => '\u{064D}',
            Tashkil::Fatha => '\u{064E}',
            Tashkil::Dhamma => '\u{064F}',
            Tashkil::Kasra => '\u{0650}',
            Tashkil::Sukun => '\u{0652}',
        }
    }

    pub fn from_mark(c: char) -> Option<Self> {
        match c {
            '\u{064B}' => Some(Tashkil::Fathatan),
            '\u{064C}' => Some(Tashkil::Dammatan),
            '\u{064D}' => Some(Tashkil::Kasratan),
            '\u{064E}' => Some(Tashkil::Fatha),
            '\u{064F}' => Some(Tashkil::Dhamma),
            '\u{0650}' => Some(Tashkil::Kasra),
            '\u{0652}' => Some(Tashkil::Sukun),
            _ => None,
        }
    }

    /// Fatha, kasra or dhamma.
    pub fn is_short_vowel(self) -> bool {
        matches!(self, Tashkil::Fatha | Tashkil::Kasra | Tashkil::Dhamma)
    }

    /// The short vowel a mark is pronounced with; tanween maps to its vowel,
    /// sukun to `None`.
    pub fn base_vowel(self) -> Option<Tashkil> {
        match self {
            Tashkil::Fatha | Tashkil::Fathatan => Some(Tashkil::Fatha),
            Tashkil::Kasra | Tashkil::Kasratan => Some(Tashkil::Kasra),
            Tashkil::Dhamma | Tashkil::Dammatan => Some(Tashkil::Dhamma),
            Tashkil::Sukun => None,
        }
    }

    /// Letter that lengthens this vowel (ا, ي or و).
    pub fn long_vowel_letter(self) -> Option<char> {
        match self.base_vowel()? {
            Tashkil::Fatha => Some(ALEF),
            Tashkil::Kasra => Some(YA),
            _ => Some(WAW),
        }
    }

    /// Tanween counterpart of a short vowel.
    pub fn nunated(self) -> Tashkil {
        match self {
            Tashkil::Fatha => Tashkil::Fathatan,
            Tashkil::Kasra => Tashkil::Kasratan,
            Tashkil::Dhamma => Tashkil::Dammatan,
            other => other,
        }
    }
}

lazy_static::lazy_static! {
    /// Letters that assimilate the lam of the definite article.
    static ref SUN_LETTERS: HashSet<char> = {
        "تثدذرزسشصضطظلن".chars().collect()
    };

    /// Pharyngealized consonants.
    static ref EMPHATIC_LETTERS: HashSet<char> = {
        "صضطظ".chars().collect()
    };

    /// Every spelling of the glottal stop.
    static ref HAMZA_FORMS: HashSet<char> = {
        [HAMZA, ALEF_HAMZA_ABOVE, ALEF_HAMZA_BELOW, WAW_HAMZA, YA_HAMZA, ALEF_MADDA]
            .into_iter()
            .collect()
    };
}

/// Base letters of the Arabic block, without diacritics or tatweel.
pub fn is_arabic_letter(c: char) -> bool {
    ('\u{0621}'..='\u{063A}').contains(&c) || ('\u{0641}'..='\u{064A}').contains(&c) || c == ALEF_WASLA
}

pub fn is_hamza(c: char) -> bool {
    HAMZA_FORMS.contains(&c)
}

/// Waw, ya and the alef spellings that stand in for them.
pub fn is_weak(c: char) -> bool {
    matches!(c, WAW | YA | ALEF | ALEF_MAKSURA)
}

pub fn is_emphatic(c: char) -> bool {
    EMPHATIC_LETTERS.contains(&c)
}

pub fn is_sun_letter(c: char) -> bool {
    SUN_LETTERS.contains(&c)
}

/// Canonical radical spelling: every hamza seat becomes ء, alef maksura
/// becomes ي.
pub fn normalize_radical(c: char) -> char {
    if is_hamza(c) {
        HAMZA
    } else if c == ALEF_MAKSURA {
        YA
    } else {
        c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_round_trip() {
        for t in [
            Tashkil::Fatha,
            Tashkil::Kasra,
            Tashkil::Dhamma,
            Tashkil::Sukun,
            Tashkil::Fathatan,
            Tashkil::Kasratan,
            Tashkil::Dammatan,
        ] {
            assert_eq!(Tashkil::from_mark(t.mark()), Some(t));
        }
        assert_eq!(Tashkil::from_mark(SHADDA), None);
    }

    #[test]
    fn test_base_vowel_and_long_letter() {
        assert_eq!(Tashkil::Dammatan.base_vowel(), Some(Tashkil::Dhamma));
        assert_eq!(Tashkil::Sukun.base_vowel(), None);
        assert_eq!(Tashkil::Kasra.long_vowel_letter(), Some(YA));
        assert_eq!(Tashkil::Sukun.long_vowel_letter(), None);
    }

    #[test]
    fn test_letter_classes() {
        assert!(is_arabic_letter('ك'));
        assert!(!is_arabic_letter('\u{064E}'));
        assert!(!is_arabic_letter('k'));
        assert!(is_sun_letter('ش'));
        assert!(!is_sun_letter('ق'));
        assert!(is_emphatic('ص'));
        assert!(is_weak(ALEF_MAKSURA));
    }

    #[test]
    fn test_normalize_radical() {
        assert_eq!(normalize_radical('أ'), HAMZA);
        assert_eq!(normalize_radical('ئ'), HAMZA);
        assert_eq!(normalize_radical('ى'), YA);
        assert_eq!(normalize_radical('ك'), 'ك');
    }
}
