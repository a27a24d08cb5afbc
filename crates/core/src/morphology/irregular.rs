//! Verbs whose forms no general rule predicts.
//!
//! Each entry matches a root by identity, pins the root type the general
//! machinery should use, and lists named fix-ups applied after the regular
//! weak-root rules.

use super::augmented_root::{AugmentedRoot, SymbolName};
use super::derivation::elide;
use super::root::{RootType, VerbRoot};
use crate::script::letters::{ALEF, ALEF_MAKSURA};
use crate::script::Tashkil;
use crate::types::{ConjugationParams, Dialect, Tense};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fixup {
    /// Radical disappears from present-tense forms; a silent symbol before
    /// it takes its vowel.
    ElidePresentRadical(usize),
    /// Radical disappears in every form.
    ElideRadical(usize),
    /// Stem-final alef maksura is written as alef.
    MaksuraAsAlef,
    /// First radical carries this vowel in the perfect.
    PerfectFirstRadicalVowel(Tashkil),
}

#[derive(Debug, Clone)]
pub struct IrregularVerb {
    pub dialects: &'static [Dialect],
    pub radicals: [char; 3],
    pub stem: u8,
    pub root_type: RootType,
    pub fixups: &'static [Fixup],
}

const MSA: &[Dialect] = &[Dialect::ModernStandardArabic];
const LEVANTINE: &[Dialect] = &[Dialect::NorthLevantine, Dialect::Lebanese];

lazy_static::lazy_static! {
    static ref IRREGULAR_VERBS: Vec<IrregularVerb> = vec![
        // رَأَى يَرَى "to see"
        IrregularVerb {
            dialects: MSA,
            radicals: ['ر', 'ء', 'ي'],
            stem: 1,
            root_type: RootType::Defective,
            fixups: &[Fixup::ElidePresentRadical(2)],
        },
        // أَرَى يُرِي "to show"
        IrregularVerb {
            dialects: MSA,
            radicals: ['ر', 'ء', 'ي'],
            stem: 4,
            root_type: RootType::Defective,
            fixups: &[Fixup::ElideRadical(2)],
        },
        // حَيِيَ يَحْيَا "to live"
        IrregularVerb {
            dialects: MSA,
            radicals: ['ح', 'ي', 'ي'],
            stem: 1,
            root_type: RootType::Defective,
            fixups: &[Fixup::MaksuraAsAlef],
        },
        // إِجَا بِيجِي "to come"
        IrregularVerb {
            dialects: LEVANTINE,
            radicals: ['ء', 'ج', 'ي'],
            stem: 1,
            root_type: RootType::Defective,
            fixups: &[
                Fixup::ElidePresentRadical(1),
                Fixup::PerfectFirstRadicalVowel(Tashkil::Kasra),
                Fixup::MaksuraAsAlef,
            ],
        },
    ];
}

/// Irregular entry for this root and stem, if any.
pub fn lookup(dialect: Dialect, root: &VerbRoot, stem: u8) -> Option<&'static IrregularVerb> {
    IRREGULAR_VERBS.iter().find(|v| {
        v.stem == stem && v.dialects.contains(&dialect) && root.radicals() == v.radicals.as_slice()
    })
}

/// Roots of every irregular verb known in `dialect`.
pub fn roots_for(dialect: Dialect) -> Vec<VerbRoot> {
    let mut roots: Vec<VerbRoot> = Vec::new();
    for v in IRREGULAR_VERBS.iter().filter(|v| v.dialects.contains(&dialect)) {
        if let Ok(root) = VerbRoot::new(&v.radicals) {
            if !roots.contains(&root) {
                roots.push(root);
            }
        }
    }
    roots
}

impl IrregularVerb {
    pub fn apply(&self, stem: &mut AugmentedRoot, params: &ConjugationParams) {
        for fixup in self.fixups {
            match *fixup {
                Fixup::ElidePresentRadical(n) => {
                    if params.tense == Tense::Present {
                        elide_live(stem, n);
                    }
                }
                Fixup::ElideRadical(n) => elide_live(stem, n),
                Fixup::MaksuraAsAlef => {
                    let last = stem.final_name();
                    if !stem.is_dropped(last) && stem.letter(last) == ALEF_MAKSURA {
                        stem.set_letter(last, ALEF);
                    }
                }
                Fixup::PerfectFirstRadicalVowel(vowel) => {
                    if params.tense == Tense::Perfect {
                        stem.apply_radical_tashkil(1, vowel);
                    }
                }
            }
        }
    }
}

fn elide_live(stem: &mut AugmentedRoot, n: usize) {
    let name = SymbolName::Radical(n);
    if stem.contains(name) && !stem.is_dropped(name) {
        elide(stem, name);
    }
}
