//! Verbal nouns (masdar). Stem 1 masdars are lexical, so every common
//! pattern is offered; derived stems are regular up to root-type variants.

use super::{augment, resolve_root_type, DIALECT};
use crate::error::ConjugationError;
use crate::morphology::nominal::{build_template, NounSlot, A, I, IN, NONE, O, U};
use crate::morphology::{RootType, VerbRoot};
use crate::script::VocalizedWord;

use NounSlot::{InfixTa, L, R, RR};

/// Root-type family a masdar pattern is chosen by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Family {
    Sound,
    Hollow,
    Defective,
    Assimilated,
}

impl Family {
    fn of(root_type: RootType) -> Self {
        match root_type {
            RootType::Hollow => Family::Hollow,
            RootType::Assimilated => Family::Assimilated,
            t if t.is_defective() => Family::Defective,
            _ => Family::Sound,
        }
    }
}

// stem 1
const FAL: &[NounSlot] = &[R(1, A), R(2, O), R(3, NONE)];
const FIL: &[NounSlot] = &[R(1, I), R(2, O), R(3, NONE)];
const FUL: &[NounSlot] = &[R(1, U), R(2, O), R(3, NONE)];
const FAAL: &[NounSlot] = &[R(1, A), R(2, A), R(3, NONE)];
const FUUL: &[NounSlot] = &[R(1, U), R(2, U), L('و', NONE), R(3, NONE)];
const FIAALA: &[NounSlot] = &[R(1, I), R(2, A), L('ا', NONE), R(3, A), L('ة', NONE)];
const FIYAAL: &[NounSlot] = &[R(1, I), L('ي', A), L('ا', NONE), R(3, NONE)];
const FUAAL_DEF: &[NounSlot] = &[R(1, U), R(2, A), L('ا', NONE), L('ء', NONE)];
const FIAAL_DEF: &[NounSlot] = &[R(1, I), R(2, A), L('ا', NONE), L('ء', NONE)];
const ILA: &[NounSlot] = &[R(2, I), R(3, A), L('ة', NONE)];

// stem 2
const TAFIIL: &[NounSlot] = &[L('ت', A), R(1, O), R(2, I), L('ي', NONE), R(3, NONE)];
const TAFILA_DEF: &[NounSlot] = &[L('ت', A), R(1, O), R(2, I), L('ي', A), L('ة', NONE)];

// stem 3
const MUFAALA: &[NounSlot] = &[L('م', U), R(1, A), L('ا', NONE), R(2, A), R(3, A), L('ة', NONE)];
const FIAAL: &[NounSlot] = &[R(1, I), R(2, A), L('ا', NONE), R(3, NONE)];
const MUFAAAT_DEF: &[NounSlot] = &[L('م', U), R(1, A), L('ا', NONE), R(2, A), L('ا', NONE), L('ة', NONE)];

// stem 4
const IFAAL: &[NounSlot] = &[L('ء', I), R(1, O), R(2, A), L('ا', NONE), R(3, NONE)];
const IFAALA_HOLLOW: &[NounSlot] = &[L('ء', I), R(1, A), L('ا', NONE), R(3, A), L('ة', NONE)];
const IFAA_DEF: &[NounSlot] = &[L('ء', I), R(1, O), R(2, A), L('ا', NONE), L('ء', NONE)];
const IYFAAL_ASSIM: &[NounSlot] = &[L('ء', I), L('ي', NONE), R(2, A), L('ا', NONE), R(3, NONE)];

// stems 5 and 6
const TAFAUL: &[NounSlot] = &[L('ت', A), R(1, A), RR(2, U), R(3, NONE)];
const TAFAUL_DEF: &[NounSlot] = &[L('ت', A), R(1, A), RR(2, IN)];
const TAFAAUL: &[NounSlot] = &[L('ت', A), R(1, A), L('ا', NONE), R(2, U), R(3, NONE)];
const TAFAAUL_DEF: &[NounSlot] = &[L('ت', A), R(1, A), L('ا', NONE), R(2, IN)];

// stem 7
const INFIAAL: &[NounSlot] = &[L('ا', I), L('ن', O), R(1, I), R(2, A), L('ا', NONE), R(3, NONE)];
const INFIYAAL_HOLLOW: &[NounSlot] = &[L('ا', I), L('ن', O), R(1, I), L('ي', A), L('ا', NONE), R(3, NONE)];
const INFIAA_DEF: &[NounSlot] = &[L('ا', I), L('ن', O), R(1, I), R(2, A), L('ا', NONE), L('ء', NONE)];

// stem 8
const IFTIAAL: &[NounSlot] = &[L('ا', I), R(1, O), InfixTa(I), R(2, A), L('ا', NONE), R(3, NONE)];
const IFTIYAAL_HOLLOW: &[NounSlot] = &[L('ا', I), R(1, O), InfixTa(I), L('ي', A), L('ا', NONE), R(3, NONE)];
const IFTIAA_DEF: &[NounSlot] = &[L('ا', I), R(1, O), InfixTa(I), R(2, A), L('ا', NONE), L('ء', NONE)];
const ITTIAAL_ASSIM: &[NounSlot] = &[L('ا', I), L('ت', O), InfixTa(I), R(2, A), L('ا', NONE), R(3, NONE)];

// stem 9
const IFILAAL: &[NounSlot] = &[L('ا', I), R(1, O), R(2, I), R(3, A), L('ا', NONE), R(3, NONE)];

// stem 10
const ISTIFAAL: &[NounSlot] = &[L('ا', I), L('س', O), L('ت', I), R(1, O), R(2, A), L('ا', NONE), R(3, NONE)];
const ISTIFAALA_HOLLOW: &[NounSlot] = &[L('ا', I), L('س', O), L('ت', I), R(1, A), L('ا', NONE), R(3, A), L('ة', NONE)];
const ISTIFAA_DEF: &[NounSlot] = &[L('ا', I), L('س', O), L('ت', I), R(1, O), R(2, A), L('ا', NONE), L('ء', NONE)];
const ISTIYFAAL_ASSIM: &[NounSlot] = &[L('ا', I), L('س', O), L('ت', I), L('ي', NONE), R(2, A), L('ا', NONE), R(3, NONE)];

// quadriliterals
const FALALA: &[NounSlot] = &[R(1, A), R(2, O), R(3, A), R(4, A), L('ة', NONE)];
const FILAAL: &[NounSlot] = &[R(1, I), R(2, O), R(3, A), L('ا', NONE), R(4, NONE)];
const FALAYA_DEF: &[NounSlot] = &[R(1, A), R(2, O), R(3, A), L('ي', A), L('ة', NONE)];
const TAFALUL: &[NounSlot] = &[L('ت', A), R(1, A), R(2, O), R(3, U), R(4, NONE)];
const TAFALIN_DEF: &[NounSlot] = &[L('ت', A), R(1, A), R(2, O), R(3, IN)];

fn templates(stem: u8, quadriliteral: bool, family: Family) -> &'static [&'static [NounSlot]] {
    use Family::*;
    if quadriliteral {
        return match (stem, family) {
            (1, Defective) => &[FALAYA_DEF],
            (1, _) => &[FALALA, FILAAL],
            (_, Defective) => &[TAFALIN_DEF],
            _ => &[TAFALUL],
        };
    }
    match (stem, family) {
        (1, Hollow) => &[FAL, FIYAAL],
        (1, Defective) => &[FAL, FUAAL_DEF, FIAAL_DEF],
        (1, Assimilated) => &[FAL, ILA],
        (1, _) => &[FAL, FIL, FUL, FAAL, FUUL, FIAALA],
        (2, Defective) => &[TAFILA_DEF],
        (2, _) => &[TAFIIL],
        (3, Defective) => &[MUFAAAT_DEF, FIAAL_DEF],
        (3, _) => &[MUFAALA, FIAAL],
        (4, Hollow) => &[IFAALA_HOLLOW],
        (4, Defective) => &[IFAA_DEF],
        (4, Assimilated) => &[IYFAAL_ASSIM],
        (4, _) => &[IFAAL],
        (5, Defective) => &[TAFAUL_DEF],
        (5, _) => &[TAFAUL],
        (6, Defective) => &[TAFAAUL_DEF],
        (6, _) => &[TAFAAUL],
        (7, Hollow) => &[INFIYAAL_HOLLOW],
        (7, Defective) => &[INFIAA_DEF],
        (7, _) => &[INFIAAL],
        (8, Hollow) => &[IFTIYAAL_HOLLOW],
        (8, Defective) => &[IFTIAA_DEF],
        (8, Assimilated) => &[ITTIAAL_ASSIM],
        (8, _) => &[IFTIAAL],
        (9, _) => &[IFILAAL],
        (10, Hollow) => &[ISTIFAALA_HOLLOW],
        (10, Defective) => &[ISTIFAA_DEF],
        (10, Assimilated) => &[ISTIYFAAL_ASSIM],
        (10, _) => &[ISTIFAAL],
        _ => &[],
    }
}

/// Every verbal noun the stem can have for this root.
pub fn verbal_nouns(root: &VerbRoot, stem: u8) -> Result<Vec<VocalizedWord>, ConjugationError> {
    let root_type = resolve_root_type(root, stem, None);
    if !augment::stem_supported(stem, root_type) {
        return Err(ConjugationError::unsupported(
            DIALECT,
            format!("no stem {stem} for {root_type:?} root {root}"),
        ));
    }
    let family = Family::of(root_type);
    Ok(templates(stem, root.is_quadriliteral(), family)
        .iter()
        .map(|t| VocalizedWord::new(build_template(t, root)))
        .collect())
}
