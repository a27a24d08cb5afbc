//! Active and passive participles.
//!
//! Stem 1 has its own patterns (فَاعِل, مَفْعُول). Derived stems reuse the
//! present stem behind a مُـ prefix.

use super::{derive, resolve_root_type, DIALECT};
use crate::error::ConjugationError;
use crate::morphology::{AffixSlot, AugmentedRoot, RootType, SkeletonSlot, SymbolName, VerbRoot};
use crate::script::letters::{ALEF, ALEF_MAKSURA, HAMZA, MIM, WAW, YA};
use crate::script::{Tashkil, VocalizedLetter, VocalizedWord};
use crate::types::{ConjugationParams, Mood, Stem1Context, Voice};

use Tashkil::{Dhamma as U, Fatha as A, Kasra as I, Sukun as O};

const R1: SymbolName = SymbolName::Radical(1);
const R2: SymbolName = SymbolName::Radical(2);
const LONG: SymbolName = SymbolName::Affix(AffixSlot::InfixLong);

pub fn participle(
    root: &VerbRoot,
    stem: u8,
    voice: Voice,
    context: Option<&Stem1Context>,
) -> Result<VocalizedWord, ConjugationError> {
    if voice == Voice::Passive && matches!(stem, 7 | 9) {
        return Err(ConjugationError::unsupported(
            DIALECT,
            format!("stem {stem} has no passive participle"),
        ));
    }
    if stem == 1 && !root.is_quadriliteral() {
        let root_type = resolve_root_type(root, stem, context);
        return Ok(match voice {
            Voice::Active => stem1_active(root, root_type),
            Voice::Passive => stem1_passive(root, root_type),
        });
    }
    derived(root, stem, voice)
}

fn stem1_active(root: &VerbRoot, root_type: RootType) -> VocalizedWord {
    let skeleton = [
        SkeletonSlot::Radical(1),
        SkeletonSlot::Affix(AffixSlot::InfixLong, ALEF),
        SkeletonSlot::Radical(2),
        SkeletonSlot::Radical(3),
    ];
    let mut aug = AugmentedRoot::new(&skeleton, root);
    aug.apply_radical_tashkil(1, A);
    aug.apply_radical_tashkil(2, I);
    match root_type {
        // قَائِل
        RootType::Hollow => aug.replace_radical(2, HAMZA, Some(I)),
        // رَامٍ
        _ if root_type.is_defective() => {
            aug.drop_radical(3);
            aug.apply_radical_tashkil(2, Tashkil::Kasratan);
        }
        // مَادّ
        RootType::SecondConsonantDoubled => aug.apply_radical_tashkil(2, O),
        _ => {}
    }
    VocalizedWord::new(aug.to_letters())
}

fn stem1_passive(root: &VerbRoot, root_type: RootType) -> VocalizedWord {
    let ya_root = |n: usize| root.radical(n) == YA;
    let skeleton = [
        SkeletonSlot::Affix(AffixSlot::PrefixMim, MIM),
        SkeletonSlot::Radical(1),
        SkeletonSlot::Radical(2),
        SkeletonSlot::Affix(AffixSlot::InfixLong, WAW),
        SkeletonSlot::Radical(3),
    ];
    let mut aug = AugmentedRoot::new(&skeleton, root);
    aug.apply_tashkil(SymbolName::Affix(AffixSlot::PrefixMim), Some(A));
    aug.apply_radical_tashkil(1, O);
    aug.apply_radical_tashkil(2, U);
    match root_type {
        // مَقُول, مَبِيع
        RootType::Hollow => {
            if ya_root(2) {
                aug.apply_tashkil(R1, Some(I));
                aug.set_letter(LONG, YA);
            } else {
                aug.apply_tashkil(R1, Some(U));
            }
            aug.drop_radical(2);
        }
        // مَدْعُوّ, مَرْمِيّ
        _ if root_type.is_defective() => {
            aug.apply_tashkil(LONG, Some(O));
            if ya_root(3) {
                aug.apply_tashkil(R2, Some(I));
                aug.set_letter(LONG, YA);
            }
        }
        _ => {}
    }
    VocalizedWord::new(aug.to_letters())
}

fn derived(root: &VerbRoot, stem: u8, voice: Voice) -> Result<VocalizedWord, ConjugationError> {
    let mut params = ConjugationParams::new(stem).present(Mood::Indicative);
    params.voice = voice;
    if stem == 1 {
        // quadriliteral stem 1 has no lexical vowels
        params.stem1_context = Some(Stem1Context::new(A, I));
    }
    let mut derivation = derive(root, &params)?;
    let aug = &mut derivation.stem;
    let last = aug.last_radical();
    let root_type = resolve_root_type(root, stem, params.stem1_context.as_ref());
    if root_type.is_defective() {
        if let Some(before) = aug.previous_live(last) {
            match voice {
                // مُعْطٍ
                Voice::Active => {
                    aug.drop_symbol(last);
                    aug.apply_tashkil(before, Some(Tashkil::Kasratan));
                }
                // مُعْطًى
                Voice::Passive => {
                    aug.replace_radical(root.count(), ALEF_MAKSURA, None);
                    aug.apply_tashkil(before, Some(Tashkil::Fathatan));
                }
            }
        }
    } else {
        let final_name = aug.final_name();
        aug.apply_tashkil(final_name, None);
    }
    let mut letters = vec![VocalizedLetter::voweled(MIM, U)];
    letters.extend(derivation.stem.to_letters());
    Ok(VocalizedWord::new(letters))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::{contract_shadda, hamzate, remove_redundant_tashkil, to_buckwalter};
    use pretty_assertions::assert_eq;

    fn bw(r: &str, stem: u8, voice: Voice) -> String {
        let root: VerbRoot = r.parse().unwrap();
        let ctx = Stem1Context::new(A, U);
        let word = participle(&root, stem, voice, Some(&ctx)).unwrap();
        let letters = hamzate(&remove_redundant_tashkil(&contract_shadda(&word.letters)));
        to_buckwalter(&VocalizedWord::new(letters))
    }

    #[test]
    fn test_stem1_active() {
        assert_eq!(bw("كتب", 1, Voice::Active), "kaAtib");
        assert_eq!(bw("قول", 1, Voice::Active), "qaA}il");
        assert_eq!(bw("رمي", 1, Voice::Active), "raAmK");
        assert_eq!(bw("مدد", 1, Voice::Active), "maAd~");
    }

    #[test]
    fn test_stem1_passive() {
        assert_eq!(bw("كتب", 1, Voice::Passive), "makotuwb");
        assert_eq!(bw("قول", 1, Voice::Passive), "maquwl");
        assert_eq!(bw("بيع", 1, Voice::Passive), "mabiyE");
        assert_eq!(bw("دعو", 1, Voice::Passive), "madoEuw~");
        assert_eq!(bw("رمي", 1, Voice::Passive), "maromiy~");
    }

    #[test]
    fn test_derived_stems() {
        assert_eq!(bw("علم", 2, Voice::Active), "muEal~im");
        assert_eq!(bw("علم", 2, Voice::Passive), "muEal~am");
        assert_eq!(bw("قوم", 4, Voice::Active), "muqiym");
        assert_eq!(bw("قوم", 4, Voice::Passive), "muqaAm");
        assert_eq!(bw("عطو", 4, Voice::Active), "muEoTK");
        assert_eq!(bw("عطو", 4, Voice::Passive), "muEoTFY");
        assert_eq!(bw("غفر", 10, Voice::Active), "musotagofir");
        assert_eq!(bw("حمر", 9, Voice::Active), "muHomar~");
        assert_eq!(bw("دحرج", 1, Voice::Active), "mudaHorij");
    }

    #[test]
    fn test_passive_missing_for_7_and_9() {
        let root: VerbRoot = "كسر".parse().unwrap();
        let err = participle(&root, 7, Voice::Passive, None).unwrap_err();
        assert!(err.is_unsupported());
    }
}
