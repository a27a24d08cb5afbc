//! Lebanese emphasis spreading: a pharyngealized radical colours its
//! neighbours. The flag rides on the letters and does not change spelling.

use crate::morphology::{AugmentedRoot, Suffix, SymbolName, VerbRoot};
use crate::script::letters::{is_emphatic, TA};
use crate::types::{ConjugationParams, Person, Tense};

pub fn apply(stem: &mut AugmentedRoot, suffix: &mut Suffix, root: &VerbRoot, params: &ConjugationParams) {
    let emphatic: Vec<usize> = (1..=root.count())
        .filter(|&n| is_emphatic(root.radical(n)))
        .collect();
    if emphatic.is_empty() {
        return;
    }
    let live = stem.live_radicals();
    match params.tense {
        Tense::Perfect => {
            for n in live {
                stem.set_emphasis(SymbolName::Radical(n));
            }
            if params.person != Person::Third {
                if let Some(first) = suffix.letters.first_mut() {
                    if first.letter == TA {
                        first.emphasis = true;
                    }
                }
            }
        }
        Tense::Present => {
            for n in live {
                if emphatic.iter().any(|&e| e.abs_diff(n) <= 1) {
                    stem.set_emphasis(SymbolName::Radical(n));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morphology::SkeletonSlot;
    use crate::script::Tashkil;
    use crate::types::{Gender, Mood, Numerus};

    fn layout(root: &VerbRoot) -> AugmentedRoot {
        let skeleton: Vec<SkeletonSlot> = (1..=root.count()).map(SkeletonSlot::Radical).collect();
        AugmentedRoot::new(&skeleton, root)
    }

    #[test]
    fn test_perfect_marks_stem_and_ta() {
        let root: VerbRoot = "ضرب".parse().unwrap();
        let mut aug = layout(&root);
        let mut suffix = Suffix::new(Tashkil::Sukun, &[('ت', Some(Tashkil::Sukun))]);
        let params = ConjugationParams::new(1).subject(Person::First, Gender::Male, Numerus::Singular);
        apply(&mut aug, &mut suffix, &root, &params);
        assert!(aug.live_symbols().all(|s| s.emphasis));
        assert!(suffix.letters[0].emphasis);
    }

    #[test]
    fn test_present_marks_neighbours_only() {
        let root: VerbRoot = "دحرج".parse().unwrap();
        let mut aug = layout(&root);
        let mut suffix = Suffix::new(Tashkil::Sukun, &[]);
        let params = ConjugationParams::new(1).present(Mood::Indicative);
        apply(&mut aug, &mut suffix, &root, &params);
        assert!(aug.live_symbols().all(|s| !s.emphasis));

        let root: VerbRoot = "صحرج".parse().unwrap();
        let mut aug = layout(&root);
        apply(&mut aug, &mut suffix, &root, &params);
        let marked: Vec<bool> = aug.live_symbols().map(|s| s.emphasis).collect();
        assert_eq!(marked, vec![true, true, false, false]);
    }
}
