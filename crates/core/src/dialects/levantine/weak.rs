//! Root-type rules for the Levantine dialects.

use crate::morphology::derivation::move_vowel_back;
use crate::morphology::{AugmentedRoot, RootType, Suffix, SymbolName, VerbRoot};
use crate::script::letters::{ALEF, ALEF_MAKSURA, TA, WAW, YA};
use crate::script::{Tashkil, VocalizedLetter};
use crate::types::{ConjugationParams, Gender, Numerus, Person, Tense};

use Tashkil::{Dhamma as U, Fatha as A, Kasra as I, Sukun as O};

const R1: SymbolName = SymbolName::Radical(1);
const R2: SymbolName = SymbolName::Radical(2);
const R3: SymbolName = SymbolName::Radical(3);

pub struct RuleContext<'a> {
    pub params: &'a ConjugationParams,
    pub root: &'a VerbRoot,
    pub root_type: RootType,
}

impl RuleContext<'_> {
    fn perfect(&self) -> bool {
        self.params.tense == Tense::Perfect
    }

    /// Perfect with a first or second person ending (كَتَبْت, كَتَبْنَا).
    fn closed_perfect(&self) -> bool {
        self.perfect() && self.params.person != Person::Third
    }
}

/// Stem-1 perfects lose the second-radical vowel before a vowel-initial
/// ending: كَتَبِت → كَتْبِت, كَتَبُو → كَتْبُو.
pub fn syncope(stem: &mut AugmentedRoot, rc: &RuleContext) {
    let p = rc.params;
    if p.stem != 1 || !rc.perfect() || p.person != Person::Third {
        return;
    }
    let eligible = matches!(
        rc.root_type,
        RootType::Sound | RootType::HamzaOnR1 | RootType::Assimilated
    ) || rc.root_type.is_defective();
    let vowel_ending = p.numerus != Numerus::Singular || p.gender == Gender::Female;
    if eligible && vowel_ending && !rc.root_type.is_quadriliteral() {
        stem.apply_tashkil(R2, Some(O));
    }
}

pub fn apply(stem: &mut AugmentedRoot, suffix: &mut Suffix, rc: &RuleContext) {
    match rc.root_type {
        RootType::Sound | RootType::Quadriliteral => {}
        RootType::HamzaOnR1 => {
            // ياكُل
            if rc.params.stem == 1 && !rc.perfect() {
                stem.replace_radical(1, ALEF, None);
            }
        }
        RootType::SecondConsonantDoubled => geminate(stem, suffix, rc, R2, R3),
        RootType::Assimilated => assimilated(stem, rc),
        RootType::Hollow => hollow(stem, rc),
        RootType::Defective
        | RootType::DoublyWeakWawOnR2YaOnR3
        | RootType::QuadriliteralDefective => defective(stem, rc),
        RootType::DoublyWeakWawOnR1WeakR3 => {
            if matches!(rc.params.stem, 1 | 8 | 10) {
                assimilated(stem, rc);
            }
            defective(stem, rc);
        }
    }
    if rc.params.stem == 9 {
        geminate(stem, suffix, rc, R3, SymbolName::Repeat);
    }
}

/// The doubled pair always contracts; before a closed perfect ending a
/// long ي separates it from the suffix (حَطِّيت).
fn geminate(stem: &mut AugmentedRoot, suffix: &mut Suffix, rc: &RuleContext, first: SymbolName, second: SymbolName) {
    if rc.closed_perfect() {
        stem.apply_tashkil(second, Some(I));
        suffix.letters.insert(0, VocalizedLetter::bare(YA));
    }
    move_vowel_back(stem, first);
    stem.apply_tashkil(first, Some(O));
}

fn assimilated(stem: &mut AugmentedRoot, rc: &RuleContext) {
    match rc.params.stem {
        8 => stem.replace_radical(1, TA, Some(O)),
        1 if !rc.perfect() && rc.root.radical(1) == YA => stem.set_letter(R1, WAW),
        _ => {}
    }
}

fn hollow(stem: &mut AugmentedRoot, rc: &RuleContext) {
    let p = rc.params;
    let Some(before) = stem.previous_live(R2) else {
        return;
    };
    if rc.closed_perfect() {
        // قِلْت, اِخْتَرْت
        let short = if p.stem == 1 { I } else { A };
        stem.apply_tashkil(before, Some(short));
        stem.drop_radical(2);
        return;
    }
    let vowel = match (p.stem, rc.perfect()) {
        (1, false) => p.stem1_context.map_or(U, |c| c.present_vowel),
        (10, false) => I,
        _ => A,
    };
    stem.apply_tashkil(before, Some(vowel));
    stem.replace_radical(2, vowel.long_vowel_letter().unwrap_or(ALEF), None);
}

fn defective(stem: &mut AugmentedRoot, rc: &RuleContext) {
    use Gender::*;
    use Numerus::*;
    use Person::*;

    let p = rc.params;
    let n = stem.radical_count();
    let last = SymbolName::Radical(n);
    let Some(before) = stem.previous_live(last) else {
        return;
    };
    let vowel = stem.tashkil(before).unwrap_or(A);

    if rc.perfect() {
        match (p.person, p.numerus, p.gender) {
            (Third, Singular, Male) => {
                if vowel == A {
                    let letter = if p.stem == 1 && rc.root.last() == WAW {
                        ALEF
                    } else {
                        ALEF_MAKSURA
                    };
                    stem.replace_radical(n, letter, None);
                } else {
                    stem.replace_radical(n, YA, None);
                }
            }
            (Third, _, _) => {
                if p.stem == 1 && n == 3 {
                    // حِكْيِت, حِكْيُو
                    let ending = stem.tashkil(last);
                    stem.replace_radical(n, YA, ending);
                } else {
                    let ending = if p.numerus == Singular { I } else { U };
                    stem.drop_radical(n);
                    stem.apply_tashkil(before, Some(ending));
                }
            }
            _ => {
                if p.stem == 1 {
                    stem.apply_tashkil(before, Some(I));
                }
                stem.replace_radical(n, YA, Some(O));
            }
        }
        return;
    }

    match (p.person, p.numerus, p.gender) {
        (Second, Singular, Female) => {
            stem.drop_radical(n);
            stem.apply_tashkil(before, Some(I));
        }
        (Second | Third, Plural | Dual, _) => {
            stem.drop_radical(n);
            stem.apply_tashkil(before, Some(U));
        }
        _ => {
            let letter = match vowel {
                A => ALEF_MAKSURA,
                U => WAW,
                _ => YA,
            };
            stem.replace_radical(n, letter, None);
        }
    }
}
