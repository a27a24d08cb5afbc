//! North Levantine and Lebanese.
//!
//! Both share one engine; the Lebanese variant adds emphasis spreading, the
//! بِـ indicative for third person masculine forms and stem 9. Only the
//! active voice exists, the present has an indicative (ب/م marker), a bare
//! subjunctive and the imperative, and there is no dual.

pub mod affixes;
pub mod augment;
pub mod emphasis;
pub mod nominal;
pub mod tashkil;
pub mod weak;

use super::{AffixProfile, DialectConjugator, ParameterSpace};
use crate::error::ConjugationError;
use crate::morphology::{irregular, AugmentedRoot, Derivation, RootType, VerbRoot};
use crate::script::{Tashkil, VocalizedWord};
use crate::types::{
    AdjectiveDeclension, ConjugationParams, Dialect, Gender, Mood, NounDeclension, Numerus, Person,
    Stem1Context, Tense, Voice,
};
use weak::RuleContext;

pub struct LevantineConjugator {
    dialect: Dialect,
}

pub static NORTH_LEVANTINE: LevantineConjugator = LevantineConjugator {
    dialect: Dialect::NorthLevantine,
};

pub static LEBANESE: LevantineConjugator = LevantineConjugator {
    dialect: Dialect::Lebanese,
};

impl LevantineConjugator {
    fn unsupported(&self, detail: impl Into<String>) -> ConjugationError {
        ConjugationError::unsupported(self.dialect, detail)
    }

    pub fn resolve_root_type(&self, root: &VerbRoot, stem: u8, context: Option<&Stem1Context>) -> RootType {
        match irregular::lookup(self.dialect, root, stem) {
            Some(verb) => verb.root_type,
            None => root.root_type(stem, context),
        }
    }

    fn check(&self, params: &ConjugationParams) -> Result<(), ConjugationError> {
        if params.voice == Voice::Passive {
            return Err(self.unsupported("no passive voice"));
        }
        if params.mood == Mood::Jussive {
            return Err(self.unsupported("no jussive mood"));
        }
        if params.numerus == Numerus::Dual {
            return Err(self.unsupported("no dual number"));
        }
        Ok(())
    }

    /// Finite form with its person prefix and mood marker.
    pub fn derive(&self, root: &VerbRoot, params: &ConjugationParams) -> Result<Derivation, ConjugationError> {
        self.check(params)?;
        let irregular = irregular::lookup(self.dialect, root, params.stem);
        let root_type = match irregular {
            Some(verb) => {
                log::debug!("{root}: irregular entry for stem {}", params.stem);
                verb.root_type
            }
            None => root.root_type(params.stem, params.stem1_context.as_ref()),
        };
        let skeleton = augment::augment_root(self.dialect, params.stem, root_type, params.tense, root)
            .ok_or_else(|| self.unsupported(format!("stem {} of {root_type:?} root {root}", params.stem)))?;

        let mut stem = AugmentedRoot::new(&skeleton, root);
        tashkil::apply_pattern(&mut stem, params.stem, params.tense, params.stem1_context.as_ref());
        let mut suffix = affixes::suffix(params.tense, params.person, params.gender, params.numerus);
        let last = stem.final_name();
        stem.apply_tashkil(last, suffix.final_vowel);

        let rules = RuleContext {
            params,
            root,
            root_type,
        };
        weak::syncope(&mut stem, &rules);
        weak::apply(&mut stem, &mut suffix, &rules);
        if let Some(verb) = irregular {
            verb.apply(&mut stem, params);
        }
        if self.dialect == Dialect::Lebanese {
            emphasis::apply(&mut stem, &mut suffix, root, params);
        }

        let mut prefix = Vec::new();
        if params.tense == Tense::Present {
            let mut person = affixes::person_prefix(&stem, params.person, params.gender, params.numerus);
            if params.stem == 1 {
                match root_type {
                    t if t.is_assimilated() => person.tashkil = Some(Tashkil::Dhamma),
                    RootType::HamzaOnR1 => person.tashkil = Some(Tashkil::Fatha),
                    _ => {}
                }
            }
            prefix.push(person);
            match params.mood {
                Mood::Indicative => {
                    affixes::indicative(self.dialect, &mut prefix, &stem, params.person, params.numerus)
                }
                Mood::Imperative => prefix.clear(),
                Mood::Subjunctive | Mood::Jussive => {}
            }
        }
        Ok(Derivation {
            prefix,
            stem,
            suffix: suffix.letters,
        })
    }
}

impl DialectConjugator for LevantineConjugator {
    fn dialect(&self) -> Dialect {
        self.dialect
    }

    fn conjugate(&self, root: &VerbRoot, params: &ConjugationParams) -> Result<VocalizedWord, ConjugationError> {
        Ok(self.derive(root, params)?.into_word())
    }

    fn conjugate_participle(
        &self,
        root: &VerbRoot,
        stem: u8,
        voice: Voice,
        context: Option<&Stem1Context>,
    ) -> Result<VocalizedWord, ConjugationError> {
        nominal::participle(self, root, stem, voice, context)
    }

    fn verbal_nouns(&self, root: &VerbRoot, stem: u8) -> Result<Vec<VocalizedWord>, ConjugationError> {
        nominal::verbal_nouns(self, root, stem)
    }

    fn decline_adjective(
        &self,
        word: &VocalizedWord,
        params: &AdjectiveDeclension,
    ) -> Result<VocalizedWord, ConjugationError> {
        nominal::decline_adjective(self.dialect, word, params)
    }

    fn decline_noun(&self, word: &VocalizedWord, params: &NounDeclension) -> Result<VocalizedWord, ConjugationError> {
        Ok(nominal::decline_noun(word, params))
    }

    fn is_supported(&self, root: &VerbRoot, stem: u8) -> bool {
        augment::stem_supported(self.dialect, stem, self.resolve_root_type(root, stem, None))
    }

    fn parameter_space(&self) -> ParameterSpace {
        let mut stems = vec![1, 2, 3, 5, 6, 7, 8, 10];
        if self.dialect == Dialect::Lebanese {
            stems.push(9);
            stems.sort_unstable();
        }
        ParameterSpace {
            stems,
            tenses: Tense::ALL.to_vec(),
            voices: vec![Voice::Active],
            moods: vec![Mood::Indicative, Mood::Subjunctive, Mood::Imperative],
            persons: Person::ALL.to_vec(),
            genders: Gender::ALL.to_vec(),
            numbers: vec![Numerus::Singular, Numerus::Plural],
        }
    }

    fn affix_profile(&self) -> AffixProfile {
        AffixProfile {
            max_prefix: 4,
            max_suffix: 3,
            affix_letters: &['ا', 'و', 'ي', 'ى', 'ت', 'ن', 'س', 'م', 'ء', 'ب'],
            present_prefixes: &['ي', 'ت', 'ء', 'ن'],
            indicative_markers: &['ب', 'م'],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::{contract_shadda, hamzate, remove_redundant_tashkil, to_buckwalter};
    use pretty_assertions::assert_eq;
    use Gender::{Female, Male};
    use Numerus::{Plural, Singular};
    use Person::{First, Second, Third};
    use Tashkil::{Dhamma as U, Fatha as A, Kasra as I};

    fn bw(conj: &LevantineConjugator, r: &str, params: ConjugationParams) -> String {
        let root: VerbRoot = r.parse().unwrap();
        let word = conj.conjugate(&root, &params).unwrap();
        let letters = hamzate(&remove_redundant_tashkil(&contract_shadda(&word.letters)));
        to_buckwalter(&VocalizedWord::new(letters))
    }

    fn s1(perfect: Tashkil, present: Tashkil) -> ConjugationParams {
        ConjugationParams::new(1).with_context(Stem1Context::new(perfect, present))
    }

    fn ind(params: ConjugationParams) -> ConjugationParams {
        params.present(Mood::Indicative)
    }

    #[test]
    fn test_sound_perfect() {
        let nl = &NORTH_LEVANTINE;
        assert_eq!(bw(nl, "كتب", s1(A, U)), "katabo");
        assert_eq!(bw(nl, "كتب", s1(A, U).subject(Third, Female, Singular)), "katobito");
        assert_eq!(bw(nl, "كتب", s1(A, U).subject(Third, Male, Plural)), "katobuw");
        assert_eq!(bw(nl, "كتب", s1(A, U).subject(First, Male, Singular)), "kataboto");
        assert_eq!(bw(nl, "كتب", s1(A, U).subject(Second, Female, Singular)), "katabotiy");
        assert_eq!(bw(nl, "كتب", s1(A, U).subject(First, Male, Plural)), "katabonaA");
        assert_eq!(bw(nl, "شرب", s1(I, A)), "$iribo");
    }

    #[test]
    fn test_indicative_markers() {
        let nl = &NORTH_LEVANTINE;
        assert_eq!(bw(nl, "كتب", ind(s1(A, U))), "boyikotubo");
        assert_eq!(bw(nl, "كتب", ind(s1(A, U)).subject(First, Male, Singular)), "bikotubo");
        assert_eq!(bw(nl, "كتب", ind(s1(A, U)).subject(First, Male, Plural)), "monikotubo");
        assert_eq!(bw(nl, "كتب", ind(s1(A, U)).subject(Second, Female, Singular)), "botikotubiy");
        assert_eq!(bw(nl, "كتب", ind(s1(A, U)).subject(Third, Male, Plural)), "boyikotubuw");
        assert_eq!(bw(nl, "علم", ind(ConjugationParams::new(2))), "biyEal~imo");
        assert_eq!(bw(nl, "علم", ind(ConjugationParams::new(2)).subject(First, Male, Singular)), "boEal~imo");
        assert_eq!(bw(nl, "علم", ind(ConjugationParams::new(2)).subject(First, Male, Plural)), "minoEal~imo");
    }

    #[test]
    fn test_lebanese_bi_prefix() {
        assert_eq!(bw(&LEBANESE, "كتب", ind(s1(A, U))), "bikotubo");
        assert_eq!(
            bw(&LEBANESE, "كتب", ind(s1(A, U)).subject(Third, Female, Singular)),
            "botikotubo"
        );
    }

    #[test]
    fn test_subjunctive_and_imperative() {
        let nl = &NORTH_LEVANTINE;
        assert_eq!(bw(nl, "كتب", s1(A, U).present(Mood::Subjunctive)), "yikotubo");
        assert_eq!(
            bw(nl, "كتب", s1(A, U).present(Mood::Imperative).subject(Second, Male, Singular)),
            "kotubo"
        );
        assert_eq!(
            bw(nl, "كتب", s1(A, U).present(Mood::Imperative).subject(Second, Male, Plural)),
            "kotubuw"
        );
    }

    #[test]
    fn test_derived_stems() {
        let nl = &NORTH_LEVANTINE;
        assert_eq!(bw(nl, "علم", ConjugationParams::new(5)), "taEal~amo");
        assert_eq!(bw(nl, "علم", ind(ConjugationParams::new(5))), "boyitoEal~amo");
        assert_eq!(bw(nl, "كسر", ind(ConjugationParams::new(7))), "boyinokisiro");
        assert_eq!(bw(nl, "شغل", ConjugationParams::new(8)), "Ai$otagalo");
        assert_eq!(bw(nl, "عمل", ind(ConjugationParams::new(10))), "boyisotaEomilo");
        assert_eq!(bw(nl, "ترجم", ind(s1(A, I))), "biytarojimo");
    }

    #[test]
    fn test_weak_roots() {
        let nl = &NORTH_LEVANTINE;
        assert_eq!(bw(nl, "قول", s1(A, U)), "qaAlo");
        assert_eq!(bw(nl, "قول", s1(A, U).subject(First, Male, Singular)), "qiloto");
        assert_eq!(bw(nl, "قول", ind(s1(A, U))), "biyquwlo");
        assert_eq!(bw(nl, "حكي", s1(A, I)), "HakaY");
        assert_eq!(bw(nl, "حكي", s1(A, I).subject(Third, Female, Singular)), "Hakoyito");
        assert_eq!(bw(nl, "حكي", ind(s1(A, I))), "boyiHokiy");
        assert_eq!(bw(nl, "حكي", ind(s1(A, I)).subject(Third, Male, Plural)), "boyiHokuw");
        assert_eq!(bw(nl, "نسي", s1(I, A)), "nisiy");
        assert_eq!(bw(nl, "حطط", s1(A, U)), "HaT~o");
        assert_eq!(bw(nl, "حطط", s1(A, U).subject(First, Male, Singular)), "HaT~iyto");
        assert_eq!(bw(nl, "حطط", ind(s1(A, U))), "biyHuT~o");
        assert_eq!(bw(nl, "أكل", ind(s1(A, U))), "boyaAkulo");
        assert_eq!(bw(nl, "أكل", ind(s1(A, U)).subject(First, Male, Singular)), "baAkulo");
        assert_eq!(bw(nl, "وصل", ind(s1(I, A))), "boyuwSalo");
        assert_eq!(bw(nl, "أجي", s1(A, I)), "<ijaA");
        assert_eq!(bw(nl, "أجي", ind(s1(A, I))), "biyjiy");
    }

    #[test]
    fn test_unsupported_features() {
        let root: VerbRoot = "كتب".parse().unwrap();
        let dual = s1(A, U).subject(Third, Male, Numerus::Dual);
        assert!(NORTH_LEVANTINE.conjugate(&root, &dual).unwrap_err().is_unsupported());
        assert!(NORTH_LEVANTINE.conjugate(&root, &s1(A, U).passive()).unwrap_err().is_unsupported());
        let jussive = s1(A, U).present(Mood::Jussive);
        assert!(NORTH_LEVANTINE.conjugate(&root, &jussive).unwrap_err().is_unsupported());
        let red: VerbRoot = "حمر".parse().unwrap();
        let stem9 = ConjugationParams::new(9);
        assert!(NORTH_LEVANTINE.conjugate(&red, &stem9).unwrap_err().is_unsupported());
        assert_eq!(bw(&LEBANESE, "حمر", stem9), "AiHomar~o");
    }

    #[test]
    fn test_lebanese_emphasis_flags() {
        let root: VerbRoot = "ضرب".parse().unwrap();
        let word = LEBANESE.conjugate(&root, &s1(A, U)).unwrap();
        assert!(word.letters.iter().all(|l| l.emphasis));
        let word = NORTH_LEVANTINE.conjugate(&root, &s1(A, U)).unwrap();
        assert!(word.letters.iter().all(|l| !l.emphasis));
    }

    #[test]
    fn test_every_supported_cell_is_non_empty() {
        for conj in [&NORTH_LEVANTINE, &LEBANESE] {
            let space = conj.parameter_space();
            for r in ["كتب", "قول", "حكي", "حطط", "وصل", "أكل", "وقي", "ترجم"] {
                let root: VerbRoot = r.parse().unwrap();
                for &stem in &space.stems {
                    if !conj.is_supported(&root, stem) {
                        continue;
                    }
                    for (tense, mood, person, gender, numerus) in itertools::iproduct!(
                        space.tenses.iter().copied(),
                        space.moods.iter().copied(),
                        space.persons.iter().copied(),
                        space.genders.iter().copied(),
                        space.numbers.iter().copied()
                    ) {
                        let mut params = ConjugationParams::new(stem).subject(person, gender, numerus);
                        params.tense = tense;
                        params.mood = mood;
                        if stem == 1 {
                            params.stem1_context = Some(Stem1Context::new(A, U));
                        }
                        if params.validate().is_err() || (mood == Mood::Imperative && person != Second) {
                            continue;
                        }
                        match conj.conjugate(&root, &params) {
                            Ok(word) => assert!(!word.is_empty(), "{r} {params:?}"),
                            Err(e) => assert!(e.is_unsupported(), "{r} {params:?}: {e}"),
                        }
                    }
                }
            }
        }
    }
}
