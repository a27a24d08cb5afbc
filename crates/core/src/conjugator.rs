//! Public entry point: validates parameters, dispatches to the dialect and
//! runs the orthographic clean-up every output goes through.

use crate::analysis::{self, AnalysisMatch, AnalyzerConfig};
use crate::dialects::conjugator_for;
use crate::error::ConjugationError;
use crate::morphology::VerbRoot;
use crate::script::{contract_shadda, hamzate, remove_redundant_tashkil, VocalizedPhrase, VocalizedWord};
use crate::types::{
    AdjectiveDeclension, ConjugationParams, Dialect, Mood, NounDeclension, Person, Stem1Context, Voice,
};

/// Shadda contraction, then redundant-tashkil removal, then hamza spelling.
pub fn post_process(word: &VocalizedWord) -> VocalizedWord {
    let letters = contract_shadda(&word.letters);
    let letters = remove_redundant_tashkil(&letters);
    VocalizedWord::new(hamzate(&letters))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Conjugator;

impl Conjugator {
    /// One finite form. An imperative outside the second person is not an
    /// error: it has no form and comes back empty.
    pub fn conjugate(
        &self,
        root: &VerbRoot,
        params: &ConjugationParams,
        dialect: Dialect,
    ) -> Result<VocalizedWord, ConjugationError> {
        params.validate()?;
        if params.mood == Mood::Imperative && params.person != Person::Second {
            return Ok(VocalizedWord::default());
        }
        let word = conjugator_for(dialect).conjugate(root, params)?;
        Ok(post_process(&word))
    }

    pub fn conjugate_participle(
        &self,
        dialect: Dialect,
        root: &VerbRoot,
        stem: u8,
        voice: Voice,
        context: Option<&Stem1Context>,
    ) -> Result<VocalizedWord, ConjugationError> {
        let word = conjugator_for(dialect).conjugate_participle(root, stem, voice, context)?;
        Ok(post_process(&word))
    }

    pub fn generate_all_possible_verbal_nouns(
        &self,
        dialect: Dialect,
        root: &VerbRoot,
        stem: u8,
    ) -> Result<Vec<VocalizedWord>, ConjugationError> {
        let nouns = conjugator_for(dialect).verbal_nouns(root, stem)?;
        Ok(nouns.iter().map(post_process).collect())
    }

    /// Every (root, parameters) pair whose form resembles a word of
    /// `phrase` closely enough.
    pub fn analyze_conjugation(
        &self,
        dialect: Dialect,
        phrase: &VocalizedPhrase,
        config: &AnalyzerConfig,
    ) -> Vec<AnalysisMatch> {
        analysis::analyze(self, dialect, phrase, config)
    }

    pub fn decline_adjective(
        &self,
        dialect: Dialect,
        word: &VocalizedWord,
        params: &AdjectiveDeclension,
    ) -> Result<VocalizedWord, ConjugationError> {
        let declined = conjugator_for(dialect).decline_adjective(word, params)?;
        Ok(post_process(&declined))
    }

    pub fn decline_noun(
        &self,
        dialect: Dialect,
        word: &VocalizedWord,
        params: &NounDeclension,
    ) -> Result<VocalizedWord, ConjugationError> {
        let declined = conjugator_for(dialect).decline_noun(word, params)?;
        Ok(post_process(&declined))
    }
}
