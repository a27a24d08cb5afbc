//! Templatic Arabic verb morphology for Modern Standard Arabic, North
//! Levantine and Lebanese: conjugation, participles, verbal nouns,
//! declension and reverse analysis.

pub mod analysis;
pub mod conjugator;
pub mod dialects;
pub mod error;
pub mod morphology;
pub mod script;
pub mod types;

pub use analysis::{AnalysisMatch, AnalyzerConfig};
pub use conjugator::{post_process, Conjugator};
pub use error::{ConjugationError, ParseError};
pub use morphology::{classify_root, RootType, VerbRoot};
pub use script::{Tashkil, VocalizedLetter, VocalizedPhrase, VocalizedWord};
pub use types::*;
