//! Pieces shared by every dialect's conjugation pipeline: inflectional
//! affixes, the assembled derivation, and rules that do not depend on the
//! dialect.

use super::augmented_root::{AugmentedRoot, SymbolName};
use crate::script::letters::{DAL, TA, TAA};
use crate::script::{Tashkil, VocalizedLetter, VocalizedWord};

/// Inflectional ending: the vowel it forces on the stem's final symbol and
/// the letters that follow the stem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suffix {
    pub final_vowel: Option<Tashkil>,
    pub letters: Vec<VocalizedLetter>,
}

impl Suffix {
    pub fn new(final_vowel: Tashkil, letters: &[(char, Option<Tashkil>)]) -> Self {
        Self {
            final_vowel: Some(final_vowel),
            letters: letters
                .iter()
                .map(|&(c, t)| VocalizedLetter::new(c, t))
                .collect(),
        }
    }
}

/// A conjugated form before orthographic clean-up.
#[derive(Debug, Clone)]
pub struct Derivation {
    pub prefix: Vec<VocalizedLetter>,
    pub stem: AugmentedRoot,
    pub suffix: Vec<VocalizedLetter>,
}

impl Derivation {
    pub fn into_word(self) -> VocalizedWord {
        let mut letters = self.prefix;
        letters.extend(self.stem.to_letters());
        letters.extend(self.suffix);
        VocalizedWord::new(letters)
    }
}

/// Letter of the stem-8 infix after first radical `r1`: emphatics pull it
/// to ط, voiced dentals to د.
pub fn stem8_infix(r1: char) -> char {
    match r1 {
        'ص' | 'ض' | 'ط' | 'ظ' => TAA,
        'د' | 'ذ' | 'ز' => DAL,
        _ => TA,
    }
}

/// Two identical consonants in a row: when the second is voweled, the first
/// loses its vowel (to the preceding silent symbol, if any) so the pair can
/// later contract into a shadda.
pub fn geminate_shift(stem: &mut AugmentedRoot, first: SymbolName, second: SymbolName) {
    if stem.is_dropped(second) || matches!(stem.tashkil(second), Some(Tashkil::Sukun) | None) {
        return;
    }
    move_vowel_back(stem, first);
    stem.apply_tashkil(first, Some(Tashkil::Sukun));
}

/// Give the vowel of `name` to the symbol before it when that symbol is
/// silent.
pub fn move_vowel_back(stem: &mut AugmentedRoot, name: SymbolName) {
    let vowel = stem.tashkil(name);
    if let Some(before) = stem.previous_live(name) {
        if stem.tashkil(before) == Some(Tashkil::Sukun) {
            stem.apply_tashkil(before, vowel);
        }
    }
}

/// Remove a symbol entirely, handing its vowel back.
pub fn elide(stem: &mut AugmentedRoot, name: SymbolName) {
    move_vowel_back(stem, name);
    stem.drop_symbol(name);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morphology::augmented_root::SkeletonSlot;
    use crate::morphology::VerbRoot;
    use crate::script::to_buckwalter;

    fn triliteral(root: &str, vowels: [Tashkil; 3]) -> AugmentedRoot {
        let root: VerbRoot = root.parse().unwrap();
        let mut aug = AugmentedRoot::new(
            &[
                SkeletonSlot::Radical(1),
                SkeletonSlot::Radical(2),
                SkeletonSlot::Radical(3),
            ],
            &root,
        );
        for (i, v) in vowels.into_iter().enumerate() {
            aug.apply_radical_tashkil(i + 1, v);
        }
        aug
    }

    #[test]
    fn test_geminate_shift_voweled_final() {
        let mut aug = triliteral("مدد", [Tashkil::Sukun, Tashkil::Dhamma, Tashkil::Dhamma]);
        geminate_shift(&mut aug, SymbolName::Radical(2), SymbolName::Radical(3));
        let word = VocalizedWord::new(aug.to_letters());
        assert_eq!(to_buckwalter(&word), "mudodu");
    }

    #[test]
    fn test_geminate_shift_skips_silent_final() {
        let mut aug = triliteral("مدد", [Tashkil::Fatha, Tashkil::Fatha, Tashkil::Sukun]);
        geminate_shift(&mut aug, SymbolName::Radical(2), SymbolName::Radical(3));
        assert_eq!(to_buckwalter(&VocalizedWord::new(aug.to_letters())), "madado");
    }

    #[test]
    fn test_elide_hands_vowel_back() {
        let mut aug = triliteral("رءي", [Tashkil::Sukun, Tashkil::Fatha, Tashkil::Fatha]);
        elide(&mut aug, SymbolName::Radical(2));
        assert_eq!(to_buckwalter(&VocalizedWord::new(aug.to_letters())), "raya");
    }

    #[test]
    fn test_stem8_infix() {
        assert_eq!(stem8_infix('ص'), 'ط');
        assert_eq!(stem8_infix('ز'), 'د');
        assert_eq!(stem8_infix('ك'), 'ت');
    }
}
