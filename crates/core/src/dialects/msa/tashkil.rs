//! Vowel patterns of the MSA stems.
//!
//! Each row gives the vowel of every stem symbol except the last one, whose
//! vowel comes from the inflectional suffix. Long-vowel infixes carry no
//! mark.

use crate::morphology::{AffixSlot, AugmentedRoot, SymbolName};
use crate::script::Tashkil;
use crate::types::{Stem1Context, Tense, Voice};

use Tashkil::{Dhamma as U, Fatha as A, Kasra as I, Sukun as O};

const R1: SymbolName = SymbolName::Radical(1);
const R2: SymbolName = SymbolName::Radical(2);
const R3: SymbolName = SymbolName::Radical(3);
const WASL: SymbolName = SymbolName::Affix(AffixSlot::Wasl);
const HAMZA: SymbolName = SymbolName::Affix(AffixSlot::PrefixHamza);
const TA: SymbolName = SymbolName::Affix(AffixSlot::PrefixTa);
const NUN: SymbolName = SymbolName::Affix(AffixSlot::PrefixNun);
const SIN: SymbolName = SymbolName::Affix(AffixSlot::PrefixSin);
const INFIX: SymbolName = SymbolName::Affix(AffixSlot::InfixTa);

/// (symbol, vowel, doubled)
pub type VowelSlot = (SymbolName, Tashkil, bool);

fn v(name: SymbolName, t: Tashkil) -> VowelSlot {
    (name, t, false)
}

fn vv(name: SymbolName, t: Tashkil) -> VowelSlot {
    (name, t, true)
}

/// Vowel pattern for a stem. Stem 1 takes its second-radical vowel from the
/// stem-1 context.
pub fn pattern_vowels(
    stem: u8,
    quadriliteral: bool,
    tense: Tense,
    voice: Voice,
    context: Option<&Stem1Context>,
) -> Vec<VowelSlot> {
    use Tense::{Perfect, Present};
    use Voice::{Active, Passive};

    if quadriliteral {
        return match (stem, tense, voice) {
            (1, Perfect, Active) => vec![v(R1, A), v(R2, O), v(R3, A)],
            (1, Perfect, Passive) => vec![v(R1, U), v(R2, O), v(R3, I)],
            (1, Present, Active) => vec![v(R1, A), v(R2, O), v(R3, I)],
            (1, Present, Passive) => vec![v(R1, A), v(R2, O), v(R3, A)],
            (_, Perfect, Active) => vec![v(TA, A), v(R1, A), v(R2, O), v(R3, A)],
            (_, Perfect, Passive) => vec![v(TA, U), v(R1, U), v(R2, O), v(R3, I)],
            (_, Present, _) => vec![v(TA, A), v(R1, A), v(R2, O), v(R3, A)],
        };
    }

    let perfect_vowel = context.map_or(A, |c| c.perfect_vowel);
    let present_vowel = context.map_or(A, |c| c.present_vowel);

    match (stem, tense, voice) {
        (1, Perfect, Active) => vec![v(R1, A), v(R2, perfect_vowel)],
        (1, Perfect, Passive) => vec![v(R1, U), v(R2, I)],
        (1, Present, Active) => vec![v(R1, O), v(R2, present_vowel)],
        (1, Present, Passive) => vec![v(R1, O), v(R2, A)],

        (2, Perfect, Active) => vec![v(R1, A), vv(R2, A)],
        (2, Perfect, Passive) => vec![v(R1, U), vv(R2, I)],
        (2, Present, Active) => vec![v(R1, A), vv(R2, I)],
        (2, Present, Passive) => vec![v(R1, A), vv(R2, A)],

        (3, Perfect, Active) => vec![v(R1, A), v(R2, A)],
        (3, Perfect, Passive) => vec![v(R1, U), v(R2, I)],
        (3, Present, Active) => vec![v(R1, A), v(R2, I)],
        (3, Present, Passive) => vec![v(R1, A), v(R2, A)],

        (4, Perfect, Active) => vec![v(HAMZA, A), v(R1, O), v(R2, A)],
        (4, Perfect, Passive) => vec![v(HAMZA, U), v(R1, O), v(R2, I)],
        (4, Present, Active) => vec![v(R1, O), v(R2, I)],
        (4, Present, Passive) => vec![v(R1, O), v(R2, A)],

        (5, Perfect, Active) => vec![v(TA, A), v(R1, A), vv(R2, A)],
        (5, Perfect, Passive) => vec![v(TA, U), v(R1, U), vv(R2, I)],
        (5, Present, _) => vec![v(TA, A), v(R1, A), vv(R2, A)],

        (6, Perfect, Active) => vec![v(TA, A), v(R1, A), v(R2, A)],
        (6, Perfect, Passive) => vec![v(TA, U), v(R1, U), v(R2, I)],
        (6, Present, _) => vec![v(TA, A), v(R1, A), v(R2, A)],

        (7, Perfect, _) => vec![v(WASL, I), v(NUN, O), v(R1, A), v(R2, A)],
        (7, Present, _) => vec![v(NUN, O), v(R1, A), v(R2, I)],

        (8, Perfect, Active) => vec![v(WASL, I), v(R1, O), v(INFIX, A), v(R2, A)],
        (8, Perfect, Passive) => vec![v(WASL, U), v(R1, O), v(INFIX, U), v(R2, I)],
        (8, Present, Active) => vec![v(R1, O), v(INFIX, A), v(R2, I)],
        (8, Present, Passive) => vec![v(R1, O), v(INFIX, A), v(R2, A)],

        (9, Perfect, _) => vec![v(WASL, I), v(R1, O), v(R2, A), v(R3, A)],
        (9, Present, _) => vec![v(R1, O), v(R2, A), v(R3, I)],

        (10, Perfect, Active) => vec![v(WASL, I), v(SIN, O), v(TA, A), v(R1, O), v(R2, A)],
        (10, Perfect, Passive) => vec![v(WASL, U), v(SIN, O), v(TA, U), v(R1, O), v(R2, I)],
        (10, Present, Active) => vec![v(SIN, O), v(TA, A), v(R1, O), v(R2, I)],
        (10, Present, Passive) => vec![v(SIN, O), v(TA, A), v(R1, O), v(R2, A)],

        _ => Vec::new(),
    }
}

/// Write the pattern vowels onto the stem.
pub fn apply_pattern(
    aug: &mut AugmentedRoot,
    stem: u8,
    tense: Tense,
    voice: Voice,
    context: Option<&Stem1Context>,
) {
    let quadriliteral = aug.radical_count() == 4;
    for (name, tashkil, doubled) in pattern_vowels(stem, quadriliteral, tense, voice, context) {
        aug.apply_tashkil(name, Some(tashkil));
        if doubled {
            aug.set_shadda(name, true);
        }
    }
}

/// Vowel of the present-tense person prefix.
pub fn prefix_vowel(stem: u8, quadriliteral: bool, voice: Voice) -> Tashkil {
    let dhamma_stem = if quadriliteral {
        stem == 1
    } else {
        matches!(stem, 2..=4)
    };
    if voice == Voice::Passive || dhamma_stem {
        U
    } else {
        A
    }
}
