//! Per-dialect conjugation engines behind one trait.

pub mod levantine;
pub mod msa;

use serde::{Deserialize, Serialize};

use crate::error::ConjugationError;
use crate::morphology::VerbRoot;
use crate::script::VocalizedWord;
use crate::types::{
    AdjectiveDeclension, ConjugationParams, Dialect, Gender, Mood, NounDeclension, Numerus, Person,
    Stem1Context, Tense, Voice,
};

/// Every value of each conjugation parameter a dialect can produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSpace {
    pub stems: Vec<u8>,
    pub tenses: Vec<Tense>,
    pub voices: Vec<Voice>,
    pub moods: Vec<Mood>,
    pub persons: Vec<Person>,
    pub genders: Vec<Gender>,
    pub numbers: Vec<Numerus>,
}

/// Shape of a dialect's inflectional material, used to guess which letters
/// of a surface word can be radicals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffixProfile {
    /// Most letters that can stand before the first radical.
    pub max_prefix: usize,
    /// Most letters that can follow the last radical.
    pub max_suffix: usize,
    /// Letters that may belong to affixes or stem patterns.
    pub affix_letters: &'static [char],
    /// Letters that open a present-tense form.
    pub present_prefixes: &'static [char],
    /// Indicative markers written before the person prefix (Levantine ب, م).
    pub indicative_markers: &'static [char],
}

pub trait DialectConjugator: Send + Sync {
    fn dialect(&self) -> Dialect;

    /// One inflected verb form, before orthographic clean-up.
    fn conjugate(&self, root: &VerbRoot, params: &ConjugationParams) -> Result<VocalizedWord, ConjugationError>;

    fn conjugate_participle(
        &self,
        root: &VerbRoot,
        stem: u8,
        voice: Voice,
        context: Option<&Stem1Context>,
    ) -> Result<VocalizedWord, ConjugationError>;

    fn verbal_nouns(&self, root: &VerbRoot, stem: u8) -> Result<Vec<VocalizedWord>, ConjugationError>;

    fn decline_adjective(
        &self,
        word: &VocalizedWord,
        params: &AdjectiveDeclension,
    ) -> Result<VocalizedWord, ConjugationError>;

    fn decline_noun(&self, word: &VocalizedWord, params: &NounDeclension) -> Result<VocalizedWord, ConjugationError>;

    /// Whether `root` can be conjugated in `stem` at all.
    fn is_supported(&self, root: &VerbRoot, stem: u8) -> bool;

    fn parameter_space(&self) -> ParameterSpace;

    fn affix_profile(&self) -> AffixProfile;
}

/// The engine for `dialect`.
pub fn conjugator_for(dialect: Dialect) -> &'static dyn DialectConjugator {
    match dialect {
        Dialect::ModernStandardArabic => &msa::MsaConjugator,
        Dialect::NorthLevantine => &levantine::NORTH_LEVANTINE,
        Dialect::Lebanese => &levantine::LEBANESE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch() {
        for dialect in Dialect::ALL {
            assert_eq!(conjugator_for(dialect).dialect(), dialect);
        }
    }

    #[test]
    fn test_levantine_space_is_narrower() {
        let msa = conjugator_for(Dialect::ModernStandardArabic).parameter_space();
        let lev = conjugator_for(Dialect::NorthLevantine).parameter_space();
        assert_eq!(msa.voices.len(), 2);
        assert_eq!(lev.voices, vec![Voice::Active]);
        assert!(!lev.numbers.contains(&Numerus::Dual));
        assert!(!lev.stems.contains(&9));
        assert!(conjugator_for(Dialect::Lebanese).parameter_space().stems.contains(&9));
    }
}
