//! Participles, verbal nouns and the caseless Levantine declension.

use super::{augment, LevantineConjugator};
use crate::error::ConjugationError;
use crate::morphology::nominal::{
    build_template, ends_in_ta_marbuta, open_ta_marbuta, set_final_tashkil, with_definite_article,
    NounSlot, A, I, NONE, O, U,
};
use crate::morphology::{AffixSlot, AugmentedRoot, RootType, SkeletonSlot, SymbolName, VerbRoot};
use crate::script::letters::{ALEF, ALEF_MAKSURA, MIM, NUN, TA, TA_MARBUTA, WAW, YA};
use crate::script::{Tashkil, VocalizedLetter, VocalizedWord};
use crate::types::{
    AdjectiveDeclension, ConjugationParams, Dialect, Gender, Mood, NounDeclension, NounState, Numerus,
    Stem1Context, Voice,
};

use NounSlot::{InfixTa, L, R, RR};

const R1: SymbolName = SymbolName::Radical(1);
const LONG: SymbolName = SymbolName::Affix(AffixSlot::InfixLong);

// ─── Participles ───────────────────────────────────────────────────────────

pub fn participle(
    conj: &LevantineConjugator,
    root: &VerbRoot,
    stem: u8,
    voice: Voice,
    context: Option<&Stem1Context>,
) -> Result<VocalizedWord, ConjugationError> {
    if voice == Voice::Passive && matches!(stem, 7 | 9) {
        return Err(conj.unsupported(format!("stem {stem} has no passive participle")));
    }
    if stem == 1 && !root.is_quadriliteral() {
        let root_type = conj.resolve_root_type(root, stem, context);
        return Ok(match voice {
            Voice::Active => stem1_active(root, root_type),
            Voice::Passive => stem1_passive(root, root_type),
        });
    }
    derived(conj, root, stem, voice)
}

/// فَاعِل: قَايِل, مَاشِي, حَاطّ.
fn stem1_active(root: &VerbRoot, root_type: RootType) -> VocalizedWord {
    let skeleton = [
        SkeletonSlot::Radical(1),
        SkeletonSlot::Affix(AffixSlot::InfixLong, ALEF),
        SkeletonSlot::Radical(2),
        SkeletonSlot::Radical(3),
    ];
    let mut aug = AugmentedRoot::new(&skeleton, root);
    aug.apply_radical_tashkil(1, Tashkil::Fatha);
    aug.apply_radical_tashkil(2, Tashkil::Kasra);
    match root_type {
        RootType::Hollow => aug.replace_radical(2, YA, Some(Tashkil::Kasra)),
        RootType::SecondConsonantDoubled => aug.apply_radical_tashkil(2, Tashkil::Sukun),
        _ if root_type.is_defective() => aug.replace_radical(3, YA, None),
        _ => {}
    }
    VocalizedWord::new(aug.to_letters())
}

/// مَفْعُول: مَقُول, مَبِيع, مَحْكِي.
fn stem1_passive(root: &VerbRoot, root_type: RootType) -> VocalizedWord {
    let skeleton = [
        SkeletonSlot::Affix(AffixSlot::PrefixMim, MIM),
        SkeletonSlot::Radical(1),
        SkeletonSlot::Radical(2),
        SkeletonSlot::Affix(AffixSlot::InfixLong, WAW),
        SkeletonSlot::Radical(3),
    ];
    let mut aug = AugmentedRoot::new(&skeleton, root);
    aug.apply_tashkil(SymbolName::Affix(AffixSlot::PrefixMim), Some(Tashkil::Fatha));
    aug.apply_radical_tashkil(1, Tashkil::Sukun);
    aug.apply_radical_tashkil(2, Tashkil::Dhamma);
    match root_type {
        RootType::Hollow => {
            if root.radical(2) == YA {
                aug.apply_tashkil(R1, Some(Tashkil::Kasra));
                aug.set_letter(LONG, YA);
            } else {
                aug.apply_tashkil(R1, Some(Tashkil::Dhamma));
            }
            aug.drop_radical(2);
        }
        _ if root_type.is_defective() => {
            aug.apply_radical_tashkil(2, Tashkil::Kasra);
            aug.drop_symbol(LONG);
            aug.replace_radical(3, YA, None);
        }
        _ => {}
    }
    VocalizedWord::new(aug.to_letters())
}

/// Derived stems put مـ before the bare present stem: مْعَلِّم, مِسْتَعْمِل.
/// The passive turns the last stem vowel into a: مْعَلَّم, مْرَبَّى.
fn derived(
    conj: &LevantineConjugator,
    root: &VerbRoot,
    stem: u8,
    voice: Voice,
) -> Result<VocalizedWord, ConjugationError> {
    let mut params = ConjugationParams::new(stem).present(Mood::Subjunctive);
    if stem == 1 {
        params.stem1_context = Some(Stem1Context::new(Tashkil::Fatha, Tashkil::Kasra));
    }
    let derivation = conj.derive(root, &params)?;
    let mut aug = derivation.stem;
    let final_name = aug.final_name();
    aug.apply_tashkil(final_name, None);

    if voice == Voice::Passive {
        let root_type = conj.resolve_root_type(root, stem, params.stem1_context.as_ref());
        let n = aug.radical_count();
        let last = SymbolName::Radical(n);
        if root_type == RootType::Hollow && !aug.is_dropped(SymbolName::Radical(2)) {
            // مِسْتَفَاد
            if let Some(before) = aug.previous_live(SymbolName::Radical(2)) {
                aug.apply_tashkil(before, Some(Tashkil::Fatha));
            }
            aug.replace_radical(2, ALEF, None);
        } else if let Some(before) = aug.previous_live(last) {
            aug.apply_tashkil(before, Some(Tashkil::Fatha));
            if root_type.is_defective() {
                aug.replace_radical(n, ALEF_MAKSURA, None);
            }
        }
    }

    let opens_silent = aug.first_live().and_then(|s| s.tashkil) == Some(Tashkil::Sukun);
    let vowel = if opens_silent { Tashkil::Kasra } else { Tashkil::Sukun };
    let mut letters = vec![VocalizedLetter::voweled(MIM, vowel)];
    letters.extend(aug.to_letters());
    Ok(VocalizedWord::new(letters))
}

// ─── Verbal nouns ──────────────────────────────────────────────────────────

const FAL: &[NounSlot] = &[R(1, A), R(2, O), R(3, NONE)];
const FIAALE: &[NounSlot] = &[R(1, I), R(2, A), L('ا', NONE), R(3, I), L('ة', NONE)];
const TAFIIL: &[NounSlot] = &[L('ت', A), R(1, O), R(2, I), L('ي', NONE), R(3, NONE)];
const TAFIYE_DEF: &[NounSlot] = &[L('ت', A), R(1, O), R(2, I), L('ي', I), L('ة', NONE)];
const MFAALE: &[NounSlot] = &[L('م', O), R(1, A), L('ا', NONE), R(2, A), R(3, I), L('ة', NONE)];
const MFAAA_DEF: &[NounSlot] = &[L('م', O), R(1, A), L('ا', NONE), R(2, A), L('ا', NONE), L('ة', NONE)];
const TFAUL: &[NounSlot] = &[L('ت', O), R(1, A), RR(2, U), R(3, NONE)];
const TFAI_DEF: &[NounSlot] = &[L('ت', O), R(1, A), RR(2, I), L('ي', NONE)];
const TFAAUL: &[NounSlot] = &[L('ت', O), R(1, A), L('ا', NONE), R(2, U), R(3, NONE)];
const TFAAI_DEF: &[NounSlot] = &[L('ت', O), R(1, A), L('ا', NONE), R(2, I), L('ي', NONE)];
const INFIAAL: &[NounSlot] = &[L('ا', I), L('ن', O), R(1, I), R(2, A), L('ا', NONE), R(3, NONE)];
const INFIYAAL_HOLLOW: &[NounSlot] = &[L('ا', I), L('ن', O), R(1, I), L('ي', A), L('ا', NONE), R(3, NONE)];
const INFIAA_DEF: &[NounSlot] = &[L('ا', I), L('ن', O), R(1, I), R(2, A), L('ا', NONE)];
const IFTIAAL: &[NounSlot] = &[L('ا', I), R(1, O), InfixTa(I), R(2, A), L('ا', NONE), R(3, NONE)];
const IFTIYAAL_HOLLOW: &[NounSlot] = &[L('ا', I), R(1, O), InfixTa(I), L('ي', A), L('ا', NONE), R(3, NONE)];
const IFTIAA_DEF: &[NounSlot] = &[L('ا', I), R(1, O), InfixTa(I), R(2, A), L('ا', NONE)];
const ITTIAAL_ASSIM: &[NounSlot] = &[L('ا', I), L('ت', O), InfixTa(I), R(2, A), L('ا', NONE), R(3, NONE)];
const IFILAAL: &[NounSlot] = &[L('ا', I), R(1, O), R(2, I), R(3, A), L('ا', NONE), R(3, NONE)];
const ISTIFAAL: &[NounSlot] = &[L('ا', I), L('س', O), L('ت', I), R(1, O), R(2, A), L('ا', NONE), R(3, NONE)];
const ISTIFAADE_HOLLOW: &[NounSlot] =
    &[L('ا', I), L('س', O), L('ت', I), R(1, A), L('ا', NONE), R(3, I), L('ة', NONE)];
const ISTIFAA_DEF: &[NounSlot] = &[L('ا', I), L('س', O), L('ت', I), R(1, O), R(2, A), L('ا', NONE)];
const ISTIYFAAL_ASSIM: &[NounSlot] =
    &[L('ا', I), L('س', O), L('ت', I), L('ي', NONE), R(2, A), L('ا', NONE), R(3, NONE)];
const FALLALE: &[NounSlot] = &[R(1, A), R(2, O), R(3, A), R(4, I), L('ة', NONE)];
const TFALLUL: &[NounSlot] = &[L('ت', O), R(1, A), R(2, O), R(3, U), R(4, NONE)];

fn templates(stem: u8, quadriliteral: bool, root_type: RootType) -> &'static [&'static [NounSlot]] {
    let hollow = root_type == RootType::Hollow;
    let defective = root_type.is_defective();
    let assimilated = root_type == RootType::Assimilated;
    if quadriliteral {
        return match stem {
            1 => &[FALLALE],
            _ => &[TFALLUL],
        };
    }
    match stem {
        1 => &[FAL, FIAALE],
        2 if defective => &[TAFIYE_DEF],
        2 => &[TAFIIL],
        3 if defective => &[MFAAA_DEF],
        3 => &[MFAALE],
        5 if defective => &[TFAI_DEF],
        5 => &[TFAUL],
        6 if defective => &[TFAAI_DEF],
        6 => &[TFAAUL],
        7 if hollow => &[INFIYAAL_HOLLOW],
        7 if defective => &[INFIAA_DEF],
        7 => &[INFIAAL],
        8 if hollow => &[IFTIYAAL_HOLLOW],
        8 if defective => &[IFTIAA_DEF],
        8 if assimilated => &[ITTIAAL_ASSIM],
        8 => &[IFTIAAL],
        9 => &[IFILAAL],
        10 if hollow => &[ISTIFAADE_HOLLOW],
        10 if defective => &[ISTIFAA_DEF],
        10 if assimilated => &[ISTIYFAAL_ASSIM],
        10 => &[ISTIFAAL],
        _ => &[],
    }
}

pub fn verbal_nouns(
    conj: &LevantineConjugator,
    root: &VerbRoot,
    stem: u8,
) -> Result<Vec<VocalizedWord>, ConjugationError> {
    let root_type = conj.resolve_root_type(root, stem, None);
    if !augment::stem_supported(conj.dialect, stem, root_type) {
        return Err(conj.unsupported(format!("no stem {stem} for {root_type:?} root {root}")));
    }
    Ok(templates(stem, root.is_quadriliteral(), root_type)
        .iter()
        .map(|t| VocalizedWord::new(build_template(t, root)))
        .collect())
}

// ─── Declension ────────────────────────────────────────────────────────────

/// Nouns carry no case; only the article and the construct ت remain.
pub fn decline_noun(word: &VocalizedWord, params: &NounDeclension) -> VocalizedWord {
    let mut letters = word.letters.clone();
    match params.state {
        NounState::Indefinite => {}
        NounState::Definite => letters = with_definite_article(&letters),
        NounState::Construct => open_ta_marbuta(&mut letters),
    }
    VocalizedWord::new(letters)
}

pub fn decline_adjective(
    dialect: Dialect,
    word: &VocalizedWord,
    params: &AdjectiveDeclension,
) -> Result<VocalizedWord, ConjugationError> {
    let mut letters = word.letters.clone();
    match (params.numerus, params.gender) {
        (Numerus::Dual, _) => {
            return Err(ConjugationError::unsupported(dialect, "adjectives have no dual"));
        }
        (Numerus::Singular, Gender::Male) => {}
        (Numerus::Singular, Gender::Female) => {
            if !ends_in_ta_marbuta(&letters) {
                set_final_tashkil(&mut letters, Some(Tashkil::Fatha));
                letters.push(VocalizedLetter::bare(TA_MARBUTA));
            }
        }
        (Numerus::Plural, Gender::Male) => {
            set_final_tashkil(&mut letters, Some(Tashkil::Kasra));
            letters.push(VocalizedLetter::bare(YA));
            letters.push(VocalizedLetter::bare(NUN));
        }
        (Numerus::Plural, Gender::Female) => {
            if ends_in_ta_marbuta(&letters) {
                letters.pop();
            }
            set_final_tashkil(&mut letters, Some(Tashkil::Fatha));
            letters.push(VocalizedLetter::bare(ALEF));
            letters.push(VocalizedLetter::bare(TA));
        }
    }
    if params.definite {
        letters = with_definite_article(&letters);
    }
    Ok(VocalizedWord::new(letters))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialects::levantine::{LEBANESE, NORTH_LEVANTINE};
    use crate::script::{contract_shadda, hamzate, parse_buckwalter, remove_redundant_tashkil, to_buckwalter};
    use crate::types::Case;
    use pretty_assertions::assert_eq;

    fn spell(word: &VocalizedWord) -> String {
        let letters = hamzate(&remove_redundant_tashkil(&contract_shadda(&word.letters)));
        to_buckwalter(&VocalizedWord::new(letters))
    }

    fn part(r: &str, stem: u8, voice: Voice) -> String {
        let root: VerbRoot = r.parse().unwrap();
        let ctx = Stem1Context::new(Tashkil::Fatha, Tashkil::Kasra);
        spell(&participle(&NORTH_LEVANTINE, &root, stem, voice, Some(&ctx)).unwrap())
    }

    fn nouns(r: &str, stem: u8) -> Vec<String> {
        let root: VerbRoot = r.parse().unwrap();
        verbal_nouns(&NORTH_LEVANTINE, &root, stem)
            .unwrap()
            .iter()
            .map(spell)
            .collect()
    }

    #[test]
    fn test_stem1_participles() {
        assert_eq!(part("كتب", 1, Voice::Active), "kaAtib");
        assert_eq!(part("قول", 1, Voice::Active), "qaAyil");
        assert_eq!(part("مشي", 1, Voice::Active), "maA$iy");
        assert_eq!(part("حطط", 1, Voice::Active), "HaAT~");
        assert_eq!(part("أكل", 1, Voice::Active), "|kil");
        assert_eq!(part("كتب", 1, Voice::Passive), "makotuwb");
        assert_eq!(part("قول", 1, Voice::Passive), "maquwl");
        assert_eq!(part("بيع", 1, Voice::Passive), "mabiyE");
        assert_eq!(part("حكي", 1, Voice::Passive), "maHokiy");
    }

    #[test]
    fn test_derived_participles() {
        assert_eq!(part("علم", 2, Voice::Active), "moEal~im");
        assert_eq!(part("علم", 2, Voice::Passive), "moEal~am");
        assert_eq!(part("كسر", 7, Voice::Active), "minokisir");
        assert_eq!(part("شغل", 8, Voice::Active), "mi$otigil");
        assert_eq!(part("عمل", 10, Voice::Active), "misotaEomil");
        assert_eq!(part("عمل", 10, Voice::Passive), "misotaEomal");
        assert_eq!(part("ربي", 2, Voice::Active), "morab~iy");
        assert_eq!(part("ربي", 2, Voice::Passive), "morab~aY");
        assert_eq!(part("ترجم", 1, Voice::Active), "motarojim");
        assert_eq!(part("ترجم", 1, Voice::Passive), "motarojam");
    }

    #[test]
    fn test_participle_errors() {
        let root: VerbRoot = "كسر".parse().unwrap();
        let err = participle(&NORTH_LEVANTINE, &root, 7, Voice::Passive, None).unwrap_err();
        assert!(err.is_unsupported());
        let err = participle(&NORTH_LEVANTINE, &root, 4, Voice::Active, None).unwrap_err();
        assert!(err.is_unsupported());
    }

    #[test]
    fn test_verbal_nouns() {
        assert_eq!(nouns("كتب", 1), vec!["katob", "kitaAbip"]);
        assert_eq!(nouns("علم", 2), vec!["taEoliym"]);
        assert_eq!(nouns("ربي", 2), vec!["tarobiyip"]);
        assert_eq!(nouns("قتل", 3), vec!["moqaAtalip"]);
        assert_eq!(nouns("علم", 5), vec!["toEal~um"]);
        assert_eq!(nouns("كتب", 6), vec!["tokaAtub"]);
        assert_eq!(nouns("كسر", 7), vec!["AinokisaAr"]);
        assert_eq!(nouns("شغل", 8), vec!["Ai$otigaAl"]);
        assert_eq!(nouns("خير", 8), vec!["AixotiyaAr"]);
        assert_eq!(nouns("شري", 8), vec!["Ai$otiraA"]);
        assert_eq!(nouns("عمل", 10), vec!["AisotiEomaAl"]);
        assert_eq!(nouns("فيد", 10), vec!["AisotifaAdip"]);
        assert_eq!(nouns("ترجم", 1), vec!["tarojamip"]);
        assert_eq!(nouns("ترجم", 2), vec!["totarojum"]);
    }

    #[test]
    fn test_stem9_nouns_lebanese_only() {
        let red: VerbRoot = "حمر".parse().unwrap();
        assert!(verbal_nouns(&NORTH_LEVANTINE, &red, 9).unwrap_err().is_unsupported());
        let forms: Vec<String> = verbal_nouns(&LEBANESE, &red, 9).unwrap().iter().map(spell).collect();
        assert_eq!(forms, vec!["AiHomiraAr"]);
    }

    fn adj(bw: &str, gender: Gender, numerus: Numerus, definite: bool) -> Result<String, ConjugationError> {
        let word = parse_buckwalter(bw).unwrap();
        let params = AdjectiveDeclension {
            case: Case::Genitive,
            definite,
            gender,
            numerus,
        };
        decline_adjective(Dialect::NorthLevantine, &word, &params).map(|w| to_buckwalter(&w))
    }

    #[test]
    fn test_adjectives_ignore_case() {
        assert_eq!(adj("kbiyr", Gender::Male, Numerus::Singular, false).unwrap(), "kbiyr");
        assert_eq!(adj("kbiyr", Gender::Female, Numerus::Singular, false).unwrap(), "kbiyrap");
        assert_eq!(adj("moEal~im", Gender::Male, Numerus::Plural, false).unwrap(), "moEal~imiyn");
        assert_eq!(adj("moEal~im", Gender::Female, Numerus::Plural, false).unwrap(), "moEal~imaAt");
        assert_eq!(adj("kbiyr", Gender::Male, Numerus::Singular, true).unwrap(), "Alokbiyr");
        assert!(adj("kbiyr", Gender::Male, Numerus::Dual, false).unwrap_err().is_unsupported());
    }

    #[test]
    fn test_nouns() {
        let noun = |bw: &str, state| {
            let word = parse_buckwalter(bw).unwrap();
            to_buckwalter(&decline_noun(&word, &NounDeclension { case: Case::Nominative, state }))
        };
        assert_eq!(noun("madorasap", NounState::Indefinite), "madorasap");
        assert_eq!(noun("madorasap", NounState::Construct), "madorasat");
        assert_eq!(noun("$amos", NounState::Definite), "Al$~amos");
    }
}
