//! Arabic script handling: letters, vocalized text and the orthographic
//! passes that turn raw morphological output into correct spelling.

pub mod buckwalter;
pub mod compare;
pub mod hamza;
pub mod letters;
pub mod normalize;
pub mod vocalized;

pub use buckwalter::{parse_buckwalter, to_buckwalter};
pub use compare::{compare_vocalized, diff_vocalized, LetterMatch};
pub use hamza::hamzate;
pub use letters::Tashkil;
pub use normalize::{contract_shadda, remove_redundant_tashkil};
pub use vocalized::{
    parse_vocalized_phrase, parse_vocalized_text, VocalizedLetter, VocalizedPhrase, VocalizedWord,
};
