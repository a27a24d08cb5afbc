//! Root-type rules for MSA: what weak and doubled radicals do to a stem
//! once the pattern vowels and the suffix vowel are in place.

use crate::morphology::derivation::geminate_shift;
use crate::morphology::{AugmentedRoot, RootType, SymbolName, VerbRoot};
use crate::script::letters::{ALEF, ALEF_MAKSURA, TA, WAW, YA};
use crate::script::Tashkil;
use crate::types::{ConjugationParams, Gender, Mood, Numerus, Person, Tense, Voice};

use Tashkil::{Dhamma as U, Fatha as A, Kasra as I, Sukun as O};

const R1: SymbolName = SymbolName::Radical(1);
const R2: SymbolName = SymbolName::Radical(2);
const R3: SymbolName = SymbolName::Radical(3);

pub struct RuleContext<'a> {
    pub params: &'a ConjugationParams,
    pub root: &'a VerbRoot,
    pub root_type: RootType,
    /// Vowel of the person prefix, present tense only.
    pub prefix_vowel: Option<Tashkil>,
}

impl RuleContext<'_> {
    fn perfect(&self) -> bool {
        self.params.tense == Tense::Perfect
    }

    fn active(&self) -> bool {
        self.params.voice == Voice::Active
    }
}

pub fn apply(stem: &mut AugmentedRoot, rc: &RuleContext) {
    match rc.root_type {
        RootType::Sound | RootType::HamzaOnR1 | RootType::Quadriliteral => {}
        RootType::SecondConsonantDoubled => geminate_shift(stem, R2, R3),
        RootType::Assimilated => assimilated(stem, rc),
        RootType::Hollow => hollow(stem, rc),
        RootType::Defective
        | RootType::DoublyWeakWawOnR2YaOnR3
        | RootType::QuadriliteralDefective => defective(stem, rc),
        RootType::DoublyWeakWawOnR1WeakR3 => {
            if matches!(rc.params.stem, 1 | 4 | 8 | 10) {
                assimilated(stem, rc);
            }
            defective(stem, rc);
        }
    }
    if rc.params.stem == 9 {
        geminate_shift(stem, R3, SymbolName::Repeat);
    }
}

/// Vowel heard right before `name`: the previous stem symbol, or the person
/// prefix when `name` opens the stem.
fn vowel_before(stem: &AugmentedRoot, name: SymbolName, rc: &RuleContext) -> Option<Tashkil> {
    match stem.previous_live(name) {
        Some(prev) => stem.tashkil(prev),
        None => rc.prefix_vowel,
    }
}

fn assimilated(stem: &mut AugmentedRoot, rc: &RuleContext) {
    let r1 = rc.root.radical(1);
    let p = rc.params;
    match p.stem {
        1 if !rc.perfect() && rc.active() && r1 == WAW => {
            // وَعَدَ يَعِدُ, وَضَعَ يَضَعُ; وَجِلَ يَوْجَلُ keeps its waw
            if let Some(ctx) = p.stem1_context {
                let drops = ctx.present_vowel == I
                    || (ctx.present_vowel == A && ctx.perfect_vowel == A);
                if drops {
                    stem.drop_radical(1);
                    return;
                }
            }
        }
        8 => {
            stem.replace_radical(1, TA, Some(O));
            return;
        }
        _ => {}
    }
    if stem.tashkil(R1) == Some(O) {
        match (r1, vowel_before(stem, R1, rc)) {
            (YA, Some(U)) => stem.set_letter(R1, WAW),
            (WAW, Some(I)) => stem.set_letter(R1, YA),
            _ => {}
        }
    }
}

fn hollow(stem: &mut AugmentedRoot, rc: &RuleContext) {
    let p = rc.params;
    let Some(before) = stem.previous_live(R2) else {
        return;
    };
    let mut vowel = stem.tashkil(R2).unwrap_or(A);
    if rc.active() && ((p.stem == 1 && rc.perfect()) || (matches!(p.stem, 7 | 8) && !rc.perfect())) {
        vowel = A;
    }
    if stem.tashkil(stem.final_name()) == Some(O) {
        // قُلْتُ, بِعْتُ, خِفْتُ: the short vowel of the closed syllable
        let short = if p.stem == 1 && rc.perfect() && rc.active() {
            match p.stem1_context {
                Some(ctx) if ctx.present_vowel == U => U,
                _ => I,
            }
        } else {
            vowel
        };
        stem.apply_tashkil(before, Some(short));
        stem.drop_radical(2);
    } else {
        stem.apply_tashkil(before, Some(vowel));
        let long = vowel.long_vowel_letter().unwrap_or(ALEF);
        stem.replace_radical(2, long, None);
    }
}

/// Letter the weak final radical surfaces as.
fn weak_glyph(rc: &RuleContext, vowel: Tashkil) -> char {
    match vowel {
        U => WAW,
        I => YA,
        _ if rc.perfect() && rc.params.stem == 1 && rc.root.last() == WAW => WAW,
        _ => YA,
    }
}

fn defective(stem: &mut AugmentedRoot, rc: &RuleContext) {
    let n = stem.radical_count();
    let last = SymbolName::Radical(n);
    let Some(before) = stem.previous_live(last) else {
        return;
    };
    let vowel = stem.tashkil(before).unwrap_or(A);
    let glyph = weak_glyph(rc, vowel);
    if rc.perfect() {
        defective_perfect(stem, rc, n, before, vowel, glyph);
    } else {
        defective_present(stem, rc, n, before, vowel, glyph);
    }
}

fn defective_perfect(
    stem: &mut AugmentedRoot,
    rc: &RuleContext,
    n: usize,
    before: SymbolName,
    vowel: Tashkil,
    glyph: char,
) {
    use Gender::*;
    use Numerus::*;
    use Person::*;
    let p = rc.params;
    match (p.person, p.numerus, p.gender) {
        (Third, Singular, Male) => {
            if vowel == A {
                let letter = if glyph == WAW { ALEF } else { ALEF_MAKSURA };
                stem.replace_radical(n, letter, None);
            } else {
                stem.replace_radical(n, glyph, Some(A));
            }
        }
        (Third, Singular | Dual, Female) if vowel == A => stem.drop_radical(n),
        (Third, Plural, Male) => {
            stem.drop_radical(n);
            if vowel != A {
                stem.apply_tashkil(before, Some(U));
            }
        }
        (Third, Plural, Female) => stem.replace_radical(n, glyph, Some(O)),
        (Third, _, _) => stem.replace_radical(n, glyph, Some(A)),
        _ => stem.replace_radical(n, glyph, Some(O)),
    }
}

fn defective_present(
    stem: &mut AugmentedRoot,
    rc: &RuleContext,
    n: usize,
    before: SymbolName,
    vowel: Tashkil,
    glyph: char,
) {
    use Gender::*;
    use Numerus::*;
    use Person::*;
    let p = rc.params;
    let long_class = vowel != A;
    match (p.person, p.numerus, p.gender) {
        (Second, Singular, Female) => {
            stem.drop_radical(n);
            stem.apply_tashkil(before, Some(if long_class { I } else { A }));
        }
        (Second | Third, Dual, _) => stem.replace_radical(n, glyph, Some(A)),
        (Second | Third, Plural, Male) => {
            stem.drop_radical(n);
            stem.apply_tashkil(before, Some(if long_class { U } else { A }));
        }
        (Second | Third, Plural, Female) => stem.replace_radical(n, glyph, Some(O)),
        _ => match p.suffix_mood() {
            Mood::Indicative if long_class => stem.replace_radical(n, glyph, Some(O)),
            Mood::Subjunctive if long_class => stem.replace_radical(n, glyph, Some(A)),
            Mood::Indicative | Mood::Subjunctive => stem.replace_radical(n, ALEF_MAKSURA, None),
            Mood::Jussive | Mood::Imperative => stem.drop_radical(n),
        },
    }
}
