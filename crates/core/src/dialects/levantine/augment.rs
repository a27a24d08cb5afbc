//! Which stems a Levantine root can take. The stem shapes themselves are the
//! classical ones.

use crate::dialects::msa::augment::stem_skeleton;
use crate::morphology::{RootType, Skeleton, VerbRoot};
use crate::types::{Dialect, Tense, Voice};

pub fn stem_supported(dialect: Dialect, stem: u8, root_type: RootType) -> bool {
    let stem9 = dialect == Dialect::Lebanese && stem == 9;
    match root_type {
        RootType::Sound | RootType::HamzaOnR1 => matches!(stem, 1..=3 | 5..=8 | 10) || stem9,
        RootType::SecondConsonantDoubled => matches!(stem, 1 | 7 | 8 | 10),
        RootType::Assimilated => matches!(stem, 1 | 8 | 10),
        RootType::Hollow => matches!(stem, 1 | 7 | 8 | 10),
        RootType::Defective
        | RootType::DoublyWeakWawOnR1WeakR3
        | RootType::DoublyWeakWawOnR2YaOnR3 => matches!(stem, 1..=3 | 5..=8 | 10),
        RootType::Quadriliteral | RootType::QuadriliteralDefective => matches!(stem, 1 | 2),
    }
}

pub fn augment_root(
    dialect: Dialect,
    stem: u8,
    root_type: RootType,
    tense: Tense,
    root: &VerbRoot,
) -> Option<Skeleton> {
    if !stem_supported(dialect, stem, root_type) {
        return None;
    }
    stem_skeleton(stem, root_type.is_quadriliteral(), tense, Voice::Active, root)
}
