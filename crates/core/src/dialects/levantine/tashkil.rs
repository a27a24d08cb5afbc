//! Vowel patterns of the Levantine stems. Unstressed short vowels are
//! dropped, so many stems open on a silent consonant (تْعَلَّم, بيشْتِغِل).

use crate::morphology::{AffixSlot, AugmentedRoot, SymbolName};
use crate::script::Tashkil;
use crate::types::{Stem1Context, Tense};

use Tashkil::{Dhamma as U, Fatha as A, Kasra as I, Sukun as O};

const R1: SymbolName = SymbolName::Radical(1);
const R2: SymbolName = SymbolName::Radical(2);
const R3: SymbolName = SymbolName::Radical(3);
const WASL: SymbolName = SymbolName::Affix(AffixSlot::Wasl);
const TA: SymbolName = SymbolName::Affix(AffixSlot::PrefixTa);
const NUN: SymbolName = SymbolName::Affix(AffixSlot::PrefixNun);
const SIN: SymbolName = SymbolName::Affix(AffixSlot::PrefixSin);
const INFIX: SymbolName = SymbolName::Affix(AffixSlot::InfixTa);

pub fn pattern_vowels(
    stem: u8,
    quadriliteral: bool,
    tense: Tense,
    context: Option<&Stem1Context>,
) -> Vec<(SymbolName, Tashkil, bool)> {
    let perfect = tense == Tense::Perfect;
    let v = |name, t| (name, t, false);
    let vv = |name, t| (name, t, true);

    if quadriliteral {
        return match (stem, perfect) {
            (1, true) => vec![v(R1, A), v(R2, O), v(R3, A)],
            (1, false) => vec![v(R1, A), v(R2, O), v(R3, I)],
            (_, true) => vec![v(TA, A), v(R1, A), v(R2, O), v(R3, A)],
            (_, false) => vec![v(TA, O), v(R1, A), v(R2, O), v(R3, A)],
        };
    }

    match (stem, perfect) {
        (1, true) => {
            let vowel = context.map_or(A, |c| c.perfect_vowel);
            let first = if vowel == I { I } else { A };
            vec![v(R1, first), v(R2, vowel)]
        }
        (1, false) => vec![v(R1, O), v(R2, context.map_or(I, |c| c.present_vowel))],
        (2, true) => vec![v(R1, A), vv(R2, A)],
        (2, false) => vec![v(R1, A), vv(R2, I)],
        (3, true) => vec![v(R1, A), v(R2, A)],
        (3, false) => vec![v(R1, A), v(R2, I)],
        (5, true) => vec![v(TA, A), v(R1, A), vv(R2, A)],
        (5, false) => vec![v(TA, O), v(R1, A), vv(R2, A)],
        (6, true) => vec![v(TA, A), v(R1, A), v(R2, A)],
        (6, false) => vec![v(TA, O), v(R1, A), v(R2, A)],
        (7, true) => vec![v(WASL, I), v(NUN, O), v(R1, A), v(R2, A)],
        (7, false) => vec![v(NUN, O), v(R1, I), v(R2, I)],
        (8, true) => vec![v(WASL, I), v(R1, O), v(INFIX, A), v(R2, A)],
        (8, false) => vec![v(R1, O), v(INFIX, I), v(R2, I)],
        (9, true) => vec![v(WASL, I), v(R1, O), v(R2, A), v(R3, O)],
        (9, false) => vec![v(R1, O), v(R2, A), v(R3, O)],
        (10, true) => vec![v(WASL, I), v(SIN, O), v(TA, A), v(R1, O), v(R2, A)],
        (10, false) => vec![v(SIN, O), v(TA, A), v(R1, O), v(R2, I)],
        _ => Vec::new(),
    }
}

pub fn apply_pattern(aug: &mut AugmentedRoot, stem: u8, tense: Tense, context: Option<&Stem1Context>) {
    let quadriliteral = aug.radical_count() == 4;
    for (name, tashkil, doubled) in pattern_vowels(stem, quadriliteral, tense, context) {
        aug.apply_tashkil(name, Some(tashkil));
        if doubled {
            aug.set_shadda(name, true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stem1_perfect_first_vowel_follows_context() {
        let shirib = Stem1Context::new(I, A);
        let slots = pattern_vowels(1, false, Tense::Perfect, Some(&shirib));
        assert_eq!(slots, vec![(R1, I, false), (R2, I, false)]);
        let katab = Stem1Context::new(A, U);
        let slots = pattern_vowels(1, false, Tense::Perfect, Some(&katab));
        assert_eq!(slots[0], (R1, A, false));
    }

    #[test]
    fn test_stem_5_present_opens_silent() {
        let slots = pattern_vowels(5, false, Tense::Present, None);
        assert_eq!(slots[0], (TA, O, false));
        assert!(slots.contains(&(R2, A, true)));
    }

    #[test]
    fn test_no_stem_4_pattern() {
        assert!(pattern_vowels(4, false, Tense::Perfect, None).is_empty());
    }
}
