//! Verb roots and their weak-letter classification.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ConjugationError, ParseError};
use crate::script::letters::{is_arabic_letter, normalize_radical, HAMZA, WAW, YA};
use crate::script::Tashkil;
use crate::types::Stem1Context;

/// A consonantal root of three or four radicals.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VerbRoot {
    radicals: Vec<char>,
}

impl VerbRoot {
    /// Build a root, normalizing hamza seats to `ء` and `ى` to `ي`.
    pub fn new(radicals: &[char]) -> Result<Self, ConjugationError> {
        if !(3..=4).contains(&radicals.len()) {
            return Err(ConjugationError::UnsupportedRoot(radicals.len()));
        }
        Ok(Self {
            radicals: radicals.iter().map(|&c| normalize_radical(c)).collect(),
        })
    }

    pub fn radicals(&self) -> &[char] {
        &self.radicals
    }

    /// Radical by 1-based position. Panics outside the root.
    pub fn radical(&self, n: usize) -> char {
        self.radicals[n - 1]
    }

    pub fn count(&self) -> usize {
        self.radicals.len()
    }

    pub fn last(&self) -> char {
        self.radicals[self.radicals.len() - 1]
    }

    pub fn is_quadriliteral(&self) -> bool {
        self.radicals.len() == 4
    }

    /// Behavioral class of this root in `stem`.
    pub fn root_type(&self, stem: u8, context: Option<&Stem1Context>) -> RootType {
        classify(&self.radicals, stem, context)
    }
}

impl fmt::Display for VerbRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, r) in self.radicals.iter().enumerate() {
            if i > 0 {
                f.write_str("-")?;
            }
            write!(f, "{r}")?;
        }
        Ok(())
    }
}

impl FromStr for VerbRoot {
    type Err = ConjugationError;

    /// Accepts `ك-ت-ب`, `ك ت ب` or `كتب`; diacritics are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut radicals = Vec::new();
        for (position, ch) in s.trim().chars().enumerate() {
            if is_arabic_letter(ch) {
                radicals.push(ch);
            } else if ch == '-' || ch.is_whitespace() || Tashkil::from_mark(ch).is_some() {
                continue;
            } else {
                return Err(ParseError::UnexpectedCharacter { ch, position }.into());
            }
        }
        VerbRoot::new(&radicals)
    }
}

/// How a root behaves under conjugation. Computed per stem: the same root
/// can be hollow in stem 1 and sound in stem 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RootType {
    Sound,
    /// First radical is hamza (أكل).
    HamzaOnR1,
    /// Second and third radicals are identical (مدد).
    SecondConsonantDoubled,
    /// First radical is waw or ya (وعد).
    Assimilated,
    /// Second radical is waw or ya (قول).
    Hollow,
    /// Third radical is waw or ya (رمي).
    Defective,
    /// First radical waw, third weak (وقي).
    DoublyWeakWawOnR1WeakR3,
    /// Second radical waw, third ya (قوي); conjugated like a defective root.
    DoublyWeakWawOnR2YaOnR3,
    Quadriliteral,
    /// Four radicals, the last weak.
    QuadriliteralDefective,
}

impl RootType {
    pub const ALL: [RootType; 10] = [
        RootType::Sound,
        RootType::HamzaOnR1,
        RootType::SecondConsonantDoubled,
        RootType::Assimilated,
        RootType::Hollow,
        RootType::Defective,
        RootType::DoublyWeakWawOnR1WeakR3,
        RootType::DoublyWeakWawOnR2YaOnR3,
        RootType::Quadriliteral,
        RootType::QuadriliteralDefective,
    ];

    /// Whether the last radical behaves as a weak letter.
    pub fn is_defective(self) -> bool {
        matches!(
            self,
            RootType::Defective
                | RootType::DoublyWeakWawOnR1WeakR3
                | RootType::DoublyWeakWawOnR2YaOnR3
                | RootType::QuadriliteralDefective
        )
    }

    /// Whether the first radical behaves as a weak letter.
    pub fn is_assimilated(self) -> bool {
        matches!(self, RootType::Assimilated | RootType::DoublyWeakWawOnR1WeakR3)
    }

    pub fn is_quadriliteral(self) -> bool {
        matches!(self, RootType::Quadriliteral | RootType::QuadriliteralDefective)
    }
}

fn is_weak_radical(c: char) -> bool {
    c == WAW || c == YA
}

/// Classify a root for a given stem.
///
/// Fails only when the radical count is not 3 or 4.
pub fn classify_root(
    radicals: &[char],
    stem: u8,
    context: Option<&Stem1Context>,
) -> Result<RootType, ConjugationError> {
    if !(3..=4).contains(&radicals.len()) {
        return Err(ConjugationError::UnsupportedRoot(radicals.len()));
    }
    let normalized: Vec<char> = radicals.iter().map(|&c| normalize_radical(c)).collect();
    Ok(classify(&normalized, stem, context))
}

fn classify(r: &[char], stem: u8, context: Option<&Stem1Context>) -> RootType {
    if stem == 1 && context.is_some_and(|c| c.sound_override) {
        return RootType::Sound;
    }
    if r.len() == 4 {
        return if is_weak_radical(r[3]) {
            RootType::QuadriliteralDefective
        } else {
            RootType::Quadriliteral
        };
    }
    let (r1, r2, r3) = (r[0], r[1], r[2]);
    if r1 == WAW && is_weak_radical(r3) {
        return RootType::DoublyWeakWawOnR1WeakR3;
    }
    if r2 == WAW && r3 == YA {
        return RootType::DoublyWeakWawOnR2YaOnR3;
    }
    if is_weak_radical(r3) {
        return RootType::Defective;
    }
    if is_weak_radical(r2) {
        return if matches!(stem, 2 | 3 | 5 | 6) {
            RootType::Sound
        } else {
            RootType::Hollow
        };
    }
    if r2 == r3 {
        return if matches!(stem, 2 | 5) {
            RootType::Sound
        } else {
            RootType::SecondConsonantDoubled
        };
    }
    if is_weak_radical(r1) {
        return if matches!(stem, 1 | 4 | 8 | 10) {
            RootType::Assimilated
        } else {
            RootType::Sound
        };
    }
    if r1 == HAMZA {
        return RootType::HamzaOnR1;
    }
    RootType::Sound
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root(s: &str) -> VerbRoot {
        s.parse().unwrap()
    }

    fn ctx() -> Stem1Context {
        Stem1Context::new(Tashkil::Fatha, Tashkil::Dhamma)
    }

    #[test]
    fn test_parse_forms() {
        assert_eq!(root("ك-ت-ب"), root("كتب"));
        assert_eq!(root("ك ت ب").to_string(), "ك-ت-ب");
        assert_eq!(root("كَتَبَ").radicals(), &['ك', 'ت', 'ب']);
    }

    #[test]
    fn test_hamza_and_maksura_normalized() {
        let r = root("رأى");
        assert_eq!(r.radicals(), &['ر', 'ء', 'ي']);
    }

    #[test]
    fn test_radical_count_errors() {
        assert_eq!("كت".parse::<VerbRoot>(), Err(ConjugationError::UnsupportedRoot(2)));
        assert_eq!(
            classify_root(&['ا', 'ب', 'ج', 'د', 'ه'], 1, None),
            Err(ConjugationError::UnsupportedRoot(5))
        );
        assert!(matches!(
            "كتبx".parse::<VerbRoot>(),
            Err(ConjugationError::Parse(ParseError::UnexpectedCharacter { ch: 'x', .. }))
        ));
    }

    #[test]
    fn test_classification() {
        let c = ctx();
        assert_eq!(root("كتب").root_type(1, Some(&c)), RootType::Sound);
        assert_eq!(root("أكل").root_type(1, Some(&c)), RootType::HamzaOnR1);
        assert_eq!(root("مدد").root_type(1, Some(&c)), RootType::SecondConsonantDoubled);
        assert_eq!(root("وعد").root_type(1, Some(&c)), RootType::Assimilated);
        assert_eq!(root("قول").root_type(1, Some(&c)), RootType::Hollow);
        assert_eq!(root("رمي").root_type(1, Some(&c)), RootType::Defective);
        assert_eq!(root("وقي").root_type(1, Some(&c)), RootType::DoublyWeakWawOnR1WeakR3);
        assert_eq!(root("قوي").root_type(1, Some(&c)), RootType::DoublyWeakWawOnR2YaOnR3);
        assert_eq!(root("دحرج").root_type(1, Some(&c)), RootType::Quadriliteral);
        assert_eq!(root("قلسي").root_type(1, Some(&c)), RootType::QuadriliteralDefective);
    }

    #[test]
    fn test_defective_beats_hamza() {
        assert_eq!(root("أتي").root_type(4, None), RootType::Defective);
    }

    #[test]
    fn test_stem_dependent_classification() {
        assert_eq!(root("قول").root_type(2, None), RootType::Sound);
        assert_eq!(root("قول").root_type(10, None), RootType::Hollow);
        assert_eq!(root("مدد").root_type(2, None), RootType::Sound);
        assert_eq!(root("مدد").root_type(3, None), RootType::SecondConsonantDoubled);
        assert_eq!(root("وعد").root_type(3, None), RootType::Sound);
        assert_eq!(root("وعد").root_type(8, None), RootType::Assimilated);
    }

    #[test]
    fn test_sound_override() {
        let c = Stem1Context::new(Tashkil::Kasra, Tashkil::Fatha).sound();
        assert_eq!(root("عور").root_type(1, Some(&c)), RootType::Sound);
        // only stem 1 honors the override
        assert_eq!(root("عور").root_type(4, Some(&c)), RootType::Hollow);
    }

    #[test]
    fn test_type_groups() {
        assert!(RootType::DoublyWeakWawOnR2YaOnR3.is_defective());
        assert!(RootType::DoublyWeakWawOnR1WeakR3.is_assimilated());
        assert!(!RootType::Hollow.is_defective());
        assert!(RootType::QuadriliteralDefective.is_quadriliteral());
    }
}
