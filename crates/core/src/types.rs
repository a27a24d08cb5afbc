use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ConjugationError;
use crate::script::Tashkil;

/// The supported varieties of Arabic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dialect {
    ModernStandardArabic,
    NorthLevantine,
    Lebanese,
}

impl Dialect {
    pub const ALL: [Dialect; 3] = [
        Dialect::ModernStandardArabic,
        Dialect::NorthLevantine,
        Dialect::Lebanese,
    ];
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dialect::ModernStandardArabic => "Modern Standard Arabic",
            Dialect::NorthLevantine => "North Levantine",
            Dialect::Lebanese => "Lebanese",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tense {
    Perfect,
    Present,
}

impl Tense {
    pub const ALL: [Tense; 2] = [Tense::Perfect, Tense::Present];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Voice {
    Active,
    Passive,
}

impl Voice {
    pub const ALL: [Voice; 2] = [Voice::Active, Voice::Passive];
}

/// Present-tense mood. Perfect forms always carry `Indicative`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Indicative,
    Subjunctive,
    Jussive,
    Imperative,
}

impl Mood {
    pub const ALL: [Mood; 4] = [
        Mood::Indicative,
        Mood::Subjunctive,
        Mood::Jussive,
        Mood::Imperative,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Person {
    First,
    Second,
    Third,
}

impl Person {
    pub const ALL: [Person; 3] = [Person::First, Person::Second, Person::Third];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Numerus {
    Singular,
    Dual,
    Plural,
}

impl Numerus {
    pub const ALL: [Numerus; 3] = [Numerus::Singular, Numerus::Dual, Numerus::Plural];
}

/// Lexical vowels of a stem-1 verb, which no rule can predict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stem1Context {
    /// Vowel on the second radical in the perfect (kataba: fatha).
    pub perfect_vowel: Tashkil,
    /// Vowel on the second radical in the present (yaktubu: dhamma).
    pub present_vowel: Tashkil,
    /// Conjugate a structurally weak root as if it were sound.
    #[serde(default)]
    pub sound_override: bool,
}

impl Stem1Context {
    pub fn new(perfect_vowel: Tashkil, present_vowel: Tashkil) -> Self {
        Self {
            perfect_vowel,
            present_vowel,
            sound_override: false,
        }
    }

    pub fn sound(mut self) -> Self {
        self.sound_override = true;
        self
    }

    /// The nine perfect/present vowel pairings a stem-1 verb can take.
    pub fn all_vowel_pairs() -> Vec<Stem1Context> {
        let vowels = [Tashkil::Fatha, Tashkil::Kasra, Tashkil::Dhamma];
        itertools::iproduct!(vowels, vowels)
            .map(|(perfect, present)| Stem1Context::new(perfect, present))
            .collect()
    }
}

/// Everything that selects one inflected verb form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConjugationParams {
    /// Derivational stem, 1 to 10.
    pub stem: u8,
    #[serde(default)]
    pub stem1_context: Option<Stem1Context>,
    pub tense: Tense,
    pub voice: Voice,
    pub mood: Mood,
    pub person: Person,
    pub gender: Gender,
    pub numerus: Numerus,
}

impl ConjugationParams {
    /// Third person masculine singular active perfect of `stem`.
    pub fn new(stem: u8) -> Self {
        Self {
            stem,
            stem1_context: None,
            tense: Tense::Perfect,
            voice: Voice::Active,
            mood: Mood::Indicative,
            person: Person::Third,
            gender: Gender::Male,
            numerus: Numerus::Singular,
        }
    }

    pub fn with_context(mut self, context: Stem1Context) -> Self {
        self.stem1_context = Some(context);
        self
    }

    pub fn present(mut self, mood: Mood) -> Self {
        self.tense = Tense::Present;
        self.mood = mood;
        self
    }

    pub fn passive(mut self) -> Self {
        self.voice = Voice::Passive;
        self
    }

    pub fn subject(mut self, person: Person, gender: Gender, numerus: Numerus) -> Self {
        self.person = person;
        self.gender = gender;
        self.numerus = numerus;
        self
    }

    /// Mood that selects present suffixes; imperatives inflect like jussives.
    pub fn suffix_mood(&self) -> Mood {
        match self.mood {
            Mood::Imperative => Mood::Jussive,
            mood => mood,
        }
    }

    /// Reject combinations no dialect can produce.
    pub fn validate(&self) -> Result<(), ConjugationError> {
        if !(1..=10).contains(&self.stem) {
            return Err(ConjugationError::InvalidParameterCombination(format!(
                "stem {} is outside 1..=10",
                self.stem
            )));
        }
        match (self.stem, self.stem1_context) {
            (1, None) => return Err(ConjugationError::MissingStem1Context),
            (1, Some(ctx)) => {
                if !ctx.perfect_vowel.is_short_vowel() || !ctx.present_vowel.is_short_vowel() {
                    return Err(ConjugationError::InvalidParameterCombination(
                        "stem-1 vowels must be fatha, kasra or dhamma".into(),
                    ));
                }
            }
            (stem, Some(_)) => {
                return Err(ConjugationError::InvalidParameterCombination(format!(
                    "stem {stem} takes no stem-1 context"
                )));
            }
            _ => {}
        }
        if self.tense == Tense::Perfect && self.mood != Mood::Indicative {
            return Err(ConjugationError::InvalidParameterCombination(
                "the perfect has no mood".into(),
            ));
        }
        if self.mood == Mood::Imperative && self.voice == Voice::Passive {
            return Err(ConjugationError::InvalidParameterCombination(
                "there is no passive imperative".into(),
            ));
        }
        Ok(())
    }
}

/// Grammatical case of a declined nominal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Case {
    Nominative,
    Accusative,
    Genitive,
}

impl Case {
    /// Vowel that marks this case on a singular noun.
    pub fn vowel(self) -> Tashkil {
        match self {
            Case::Nominative => Tashkil::Dhamma,
            Case::Accusative => Tashkil::Fatha,
            Case::Genitive => Tashkil::Kasra,
        }
    }
}

/// Determination of a noun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NounState {
    Indefinite,
    Definite,
    Construct,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NounDeclension {
    pub case: Case,
    pub state: NounState,
}

/// Agreement features of an adjective. The input word is always the
/// masculine singular base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AdjectiveDeclension {
    pub case: Case,
    pub definite: bool,
    pub gender: Gender,
    pub numerus: Numerus,
}
