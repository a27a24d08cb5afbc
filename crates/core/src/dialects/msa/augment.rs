//! Stem skeletons for Modern Standard Arabic.

use crate::morphology::derivation::stem8_infix;
use crate::morphology::{AffixSlot, RootType, Skeleton, SkeletonSlot, VerbRoot};
use crate::script::letters::{ALEF, HAMZA, NUN, SIN, TA, WAW};
use crate::types::{Tense, Voice};

/// Stems each root type can be conjugated in. Every root type is listed;
/// adding a variant fails to compile until it gets a row here.
pub fn stem_supported(stem: u8, root_type: RootType) -> bool {
    match root_type {
        RootType::Sound | RootType::HamzaOnR1 => (1..=10).contains(&stem),
        RootType::SecondConsonantDoubled => matches!(stem, 1 | 4 | 7 | 8 | 10),
        RootType::Assimilated => matches!(stem, 1 | 4 | 8 | 10),
        RootType::Hollow => matches!(stem, 1 | 4 | 7 | 8 | 10),
        RootType::Defective
        | RootType::DoublyWeakWawOnR1WeakR3
        | RootType::DoublyWeakWawOnR2YaOnR3 => matches!(stem, 1..=8 | 10),
        RootType::Quadriliteral | RootType::QuadriliteralDefective => matches!(stem, 1 | 2),
    }
}

/// Whether the stem forms a passive at all.
pub fn has_passive(stem: u8) -> bool {
    !matches!(stem, 7 | 9)
}

/// Symbol skeleton for a stem, or `None` when the combination cannot be
/// conjugated.
pub fn augment_root(
    stem: u8,
    root_type: RootType,
    tense: Tense,
    voice: Voice,
    root: &VerbRoot,
) -> Option<Skeleton> {
    if !stem_supported(stem, root_type) {
        return None;
    }
    if voice == Voice::Passive && !has_passive(stem) {
        return None;
    }
    stem_skeleton(stem, root_type.is_quadriliteral(), tense, voice, root)
}

/// Skeleton of a stem without any support check. The dialects share these
/// shapes; only the connective alef and the passive long vowel depend on the
/// tense and voice.
pub fn stem_skeleton(
    stem: u8,
    quadriliteral: bool,
    tense: Tense,
    voice: Voice,
    root: &VerbRoot,
) -> Option<Skeleton> {
    use SkeletonSlot::{Affix, Radical, Repeat};

    let perfect = tense == Tense::Perfect;
    let long = if perfect && voice == Voice::Passive { WAW } else { ALEF };
    let mut s: Skeleton = Vec::with_capacity(7);

    if quadriliteral {
        if stem == 2 {
            s.push(Affix(AffixSlot::PrefixTa, TA));
        }
        s.extend((1..=4).map(Radical));
        return Some(s);
    }

    match stem {
        1 | 2 => s.extend([Radical(1), Radical(2), Radical(3)]),
        3 => s.extend([Radical(1), Affix(AffixSlot::InfixLong, long), Radical(2), Radical(3)]),
        4 => {
            if perfect {
                s.push(Affix(AffixSlot::PrefixHamza, HAMZA));
            }
            s.extend([Radical(1), Radical(2), Radical(3)]);
        }
        5 => s.extend([Affix(AffixSlot::PrefixTa, TA), Radical(1), Radical(2), Radical(3)]),
        6 => s.extend([
            Affix(AffixSlot::PrefixTa, TA),
            Radical(1),
            Affix(AffixSlot::InfixLong, long),
            Radical(2),
            Radical(3),
        ]),
        7 => {
            if perfect {
                s.push(Affix(AffixSlot::Wasl, ALEF));
            }
            s.extend([Affix(AffixSlot::PrefixNun, NUN), Radical(1), Radical(2), Radical(3)]);
        }
        8 => {
            if perfect {
                s.push(Affix(AffixSlot::Wasl, ALEF));
            }
            s.extend([
                Radical(1),
                Affix(AffixSlot::InfixTa, stem8_infix(root.radical(1))),
                Radical(2),
                Radical(3),
            ]);
        }
        9 => {
            if perfect {
                s.push(Affix(AffixSlot::Wasl, ALEF));
            }
            s.extend([Radical(1), Radical(2), Radical(3), Repeat]);
        }
        10 => {
            if perfect {
                s.push(Affix(AffixSlot::Wasl, ALEF));
            }
            s.extend([
                Affix(AffixSlot::PrefixSin, SIN),
                Affix(AffixSlot::PrefixTa, TA),
                Radical(1),
                Radical(2),
                Radical(3),
            ]);
        }
        _ => return None,
    }
    Some(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_root(root_type: RootType) -> VerbRoot {
        let s = match root_type {
            RootType::Sound => "كتب",
            RootType::HamzaOnR1 => "أكل",
            RootType::SecondConsonantDoubled => "مدد",
            RootType::Assimilated => "وعد",
            RootType::Hollow => "قول",
            RootType::Defective => "رمي",
            RootType::DoublyWeakWawOnR1WeakR3 => "وقي",
            RootType::DoublyWeakWawOnR2YaOnR3 => "قوي",
            RootType::Quadriliteral => "دحرج",
            RootType::QuadriliteralDefective => "قلسي",
        };
        s.parse().unwrap()
    }

    #[test]
    fn test_every_cell_is_decided() {
        // Each (stem, root type) either yields a skeleton without
        // placeholders or is explicitly unsupported.
        for root_type in RootType::ALL {
            let root = sample_root(root_type);
            for stem in 1..=10u8 {
                for (tense, voice) in itertools::iproduct!(Tense::ALL, Voice::ALL) {
                    let skeleton = augment_root(stem, root_type, tense, voice, &root);
                    let expected = stem_supported(stem, root_type)
                        && (voice == Voice::Active || has_passive(stem));
                    assert_eq!(skeleton.is_some(), expected, "{root_type:?} stem {stem}");
                    if let Some(s) = skeleton {
                        let radicals = s
                            .iter()
                            .filter(|slot| matches!(slot, SkeletonSlot::Radical(_)))
                            .count();
                        assert_eq!(radicals, root.count());
                    }
                }
            }
        }
    }

    #[test]
    fn test_stem8_assimilation_in_skeleton() {
        let root: VerbRoot = "صبر".parse().unwrap();
        let s = augment_root(8, RootType::Sound, Tense::Perfect, Voice::Active, &root).unwrap();
        assert!(s.contains(&SkeletonSlot::Affix(AffixSlot::InfixTa, 'ط')));
    }

    #[test]
    fn test_passive_perfect_long_vowel() {
        let root: VerbRoot = "قتل".parse().unwrap();
        let s = augment_root(3, RootType::Sound, Tense::Perfect, Voice::Passive, &root).unwrap();
        assert_eq!(s[1], SkeletonSlot::Affix(AffixSlot::InfixLong, WAW));
    }

    #[test]
    fn test_wasl_only_in_perfect() {
        let root: VerbRoot = "كتب".parse().unwrap();
        let perfect = augment_root(10, RootType::Sound, Tense::Perfect, Voice::Active, &root).unwrap();
        let present = augment_root(10, RootType::Sound, Tense::Present, Voice::Active, &root).unwrap();
        assert_eq!(perfect.len(), present.len() + 1);
    }

    #[test]
    fn test_no_passive_for_7_and_9() {
        let root: VerbRoot = "كسر".parse().unwrap();
        assert!(augment_root(7, RootType::Sound, Tense::Perfect, Voice::Passive, &root).is_none());
        assert!(augment_root(9, RootType::Sound, Tense::Present, Voice::Passive, &root).is_none());
    }
}
