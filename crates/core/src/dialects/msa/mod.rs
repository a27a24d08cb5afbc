//! Modern Standard Arabic.
//!
//! A form is derived in a fixed order: skeleton from the augmentation table,
//! pattern vowels, the suffix vowel on the final symbol, root-type rules,
//! irregular fix-ups, then the person prefix (or the imperative's helping
//! vowel) and the suffix letters around the stem.

pub mod affixes;
pub mod augment;
pub mod declension;
pub mod participle;
pub mod tashkil;
pub mod verbal_noun;
pub mod weak;

use super::{AffixProfile, DialectConjugator, ParameterSpace};
use crate::error::ConjugationError;
use crate::morphology::{irregular, AugmentedRoot, Derivation, RootType, VerbRoot};
use crate::script::letters::{ALEF, HAMZA};
use crate::script::{Tashkil, VocalizedLetter, VocalizedWord};
use crate::types::{
    AdjectiveDeclension, ConjugationParams, Dialect, Gender, Mood, NounDeclension, Numerus, Person,
    Stem1Context, Tense, Voice,
};
use weak::RuleContext;

const DIALECT: Dialect = Dialect::ModernStandardArabic;

pub struct MsaConjugator;

/// Root type the rules run with. Irregular verbs pin their own.
pub fn resolve_root_type(root: &VerbRoot, stem: u8, context: Option<&Stem1Context>) -> RootType {
    match irregular::lookup(DIALECT, root, stem) {
        Some(verb) => verb.root_type,
        None => root.root_type(stem, context),
    }
}

/// Build a finite form up to, but not including, imperative handling.
pub fn derive(root: &VerbRoot, params: &ConjugationParams) -> Result<Derivation, ConjugationError> {
    let irregular = irregular::lookup(DIALECT, root, params.stem);
    let root_type = match irregular {
        Some(verb) => {
            log::debug!("{root}: irregular entry for stem {}", params.stem);
            verb.root_type
        }
        None => root.root_type(params.stem, params.stem1_context.as_ref()),
    };
    let skeleton = augment::augment_root(params.stem, root_type, params.tense, params.voice, root)
        .ok_or_else(|| {
            ConjugationError::unsupported(
                DIALECT,
                format!("stem {} {:?} of {root_type:?} root {root}", params.stem, params.voice),
            )
        })?;

    let mut stem = AugmentedRoot::new(&skeleton, root);
    tashkil::apply_pattern(
        &mut stem,
        params.stem,
        params.tense,
        params.voice,
        params.stem1_context.as_ref(),
    );
    let suffix = affixes::suffix(
        params.tense,
        params.suffix_mood(),
        params.person,
        params.gender,
        params.numerus,
    );
    let last = stem.final_name();
    stem.apply_tashkil(last, suffix.final_vowel);

    let prefix_vowel = (params.tense == Tense::Present)
        .then(|| tashkil::prefix_vowel(params.stem, root.is_quadriliteral(), params.voice));
    let rules = RuleContext {
        params,
        root,
        root_type,
        prefix_vowel,
    };
    weak::apply(&mut stem, &rules);
    if let Some(verb) = irregular {
        verb.apply(&mut stem, params);
    }

    let prefix = match prefix_vowel {
        Some(vowel) => vec![affixes::present_prefix(params.person, params.gender, params.numerus, vowel)],
        None => Vec::new(),
    };
    Ok(Derivation {
        prefix,
        stem,
        suffix: suffix.letters,
    })
}

/// Replace the person prefix of a jussive with the imperative's onset.
fn to_imperative(derivation: &mut Derivation, params: &ConjugationParams, quadriliteral: bool) {
    derivation.prefix.clear();
    if params.stem == 4 && !quadriliteral {
        derivation.prefix.push(VocalizedLetter::voweled(HAMZA, Tashkil::Fatha));
        return;
    }
    let mut live = derivation.stem.live_symbols();
    let first = live.next().and_then(|s| s.tashkil);
    let second = live.next().and_then(|s| s.tashkil);
    if first == Some(Tashkil::Sukun) {
        let vowel = if second == Some(Tashkil::Dhamma) {
            Tashkil::Dhamma
        } else {
            Tashkil::Kasra
        };
        derivation.prefix.push(VocalizedLetter::voweled(ALEF, vowel));
    }
}

impl DialectConjugator for MsaConjugator {
    fn dialect(&self) -> Dialect {
        DIALECT
    }

    fn conjugate(&self, root: &VerbRoot, params: &ConjugationParams) -> Result<VocalizedWord, ConjugationError> {
        let mut derivation = derive(root, params)?;
        if params.mood == Mood::Imperative {
            to_imperative(&mut derivation, params, root.is_quadriliteral());
        }
        Ok(derivation.into_word())
    }

    fn conjugate_participle(
        &self,
        root: &VerbRoot,
        stem: u8,
        voice: Voice,
        context: Option<&Stem1Context>,
    ) -> Result<VocalizedWord, ConjugationError> {
        participle::participle(root, stem, voice, context)
    }

    fn verbal_nouns(&self, root: &VerbRoot, stem: u8) -> Result<Vec<VocalizedWord>, ConjugationError> {
        verbal_noun::verbal_nouns(root, stem)
    }

    fn decline_adjective(
        &self,
        word: &VocalizedWord,
        params: &AdjectiveDeclension,
    ) -> Result<VocalizedWord, ConjugationError> {
        Ok(declension::decline_adjective(word, params))
    }

    fn decline_noun(&self, word: &VocalizedWord, params: &NounDeclension) -> Result<VocalizedWord, ConjugationError> {
        Ok(declension::decline_noun(word, params))
    }

    fn is_supported(&self, root: &VerbRoot, stem: u8) -> bool {
        augment::stem_supported(stem, resolve_root_type(root, stem, None))
    }

    fn parameter_space(&self) -> ParameterSpace {
        ParameterSpace {
            stems: (1..=10).collect(),
            tenses: Tense::ALL.to_vec(),
            voices: Voice::ALL.to_vec(),
            moods: Mood::ALL.to_vec(),
            persons: Person::ALL.to_vec(),
            genders: Gender::ALL.to_vec(),
            numbers: Numerus::ALL.to_vec(),
        }
    }

    fn affix_profile(&self) -> AffixProfile {
        AffixProfile {
            max_prefix: 3,
            max_suffix: 4,
            affix_letters: &['ا', 'و', 'ي', 'ى', 'ت', 'ن', 'س', 'م', 'ء'],
            present_prefixes: &['ي', 'ت', 'ء', 'ن'],
            indicative_markers: &[],
        }
    }
}
