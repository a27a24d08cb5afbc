//! Similarity between a generated form and a (possibly partly vocalized)
//! input.

use serde::{Deserialize, Serialize};

use super::letters::is_hamza;
use super::vocalized::VocalizedLetter;

/// Verdict for one aligned position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LetterMatch {
    /// Same letter, same marks.
    Exact,
    /// Same letter; one side leaves a mark unspecified.
    Compatible,
    /// Two spellings of hamza.
    HamzaSeat,
    /// Same letter, contradicting marks.
    TashkilMismatch,
    LetterMismatch,
    /// Present on one side only.
    Missing,
}

impl LetterMatch {
    fn credit(self) -> f64 {
        match self {
            LetterMatch::Exact => 1.0,
            LetterMatch::Compatible => 0.75,
            LetterMatch::HamzaSeat => 0.5,
            LetterMatch::TashkilMismatch => -0.5,
            LetterMatch::LetterMismatch | LetterMatch::Missing => -1.0,
        }
    }
}

fn marks_conflict(a: &VocalizedLetter, b: &VocalizedLetter) -> Option<bool> {
    let tashkil_conflict = match (a.tashkil, b.tashkil) {
        (Some(x), Some(y)) => x != y,
        _ => false,
    };
    // An unmarked letter may stand for a doubled one.
    let shadda_conflict = a.shadda != b.shadda && a.tashkil.is_some() && b.tashkil.is_some();
    if tashkil_conflict || shadda_conflict {
        return Some(true);
    }
    let exact = a.tashkil == b.tashkil && a.shadda == b.shadda;
    if exact {
        None
    } else {
        Some(false)
    }
}

fn compare_letter(a: &VocalizedLetter, b: &VocalizedLetter) -> LetterMatch {
    if a.letter != b.letter {
        if is_hamza(a.letter) && is_hamza(b.letter) {
            return LetterMatch::HamzaSeat;
        }
        return LetterMatch::LetterMismatch;
    }
    match marks_conflict(a, b) {
        None => LetterMatch::Exact,
        Some(false) => LetterMatch::Compatible,
        Some(true) => LetterMatch::TashkilMismatch,
    }
}

/// Position-by-position verdicts; the longer side's excess is `Missing`.
pub fn diff_vocalized(a: &[VocalizedLetter], b: &[VocalizedLetter]) -> Vec<LetterMatch> {
    let n = a.len().max(b.len());
    (0..n)
        .map(|i| match (a.get(i), b.get(i)) {
            (Some(x), Some(y)) => compare_letter(x, y),
            _ => LetterMatch::Missing,
        })
        .collect()
}

/// Similarity in [-1, 1]. 1.0 only when both sides are spelled identically
/// (emphasis is ignored); mismatches, contradicting marks and extra letters
/// pull the score down.
pub fn compare_vocalized(a: &[VocalizedLetter], b: &[VocalizedLetter]) -> f64 {
    let verdicts = diff_vocalized(a, b);
    if verdicts.is_empty() {
        return 1.0;
    }
    let total: f64 = verdicts.iter().map(|v| v.credit()).sum();
    total / verdicts.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::buckwalter::parse_buckwalter;

    fn score(a: &str, b: &str) -> f64 {
        let a = parse_buckwalter(a).unwrap();
        let b = parse_buckwalter(b).unwrap();
        compare_vocalized(&a.letters, &b.letters)
    }

    #[test]
    fn test_identical_scores_one() {
        assert_eq!(score("kataba", "kataba"), 1.0);
    }

    #[test]
    fn test_unvocalized_input_is_positive() {
        let s = score("kataba", "ktb");
        assert!(s > 0.0 && s < 1.0, "{s}");
    }

    #[test]
    fn test_vowel_conflict_lowers_score() {
        let exact = score("kataba", "kataba");
        let partial = score("kataba", "ktb");
        let conflict = score("kataba", "kutiba");
        assert!(conflict < partial && partial < exact);
    }

    #[test]
    fn test_length_mismatch_penalized() {
        let s = score("kataba", "katabuwA");
        assert!(s < 1.0);
        assert!(s >= -1.0);
    }

    #[test]
    fn test_range_bounds() {
        let s = score("kataba", "dxlhmn");
        assert_eq!(s, -1.0);
        assert_eq!(compare_vocalized(&[], &[]), 1.0);
    }

    #[test]
    fn test_diff_verdicts() {
        let a = parse_buckwalter("sa>ala").unwrap();
        let b = parse_buckwalter("sa'al").unwrap();
        let diff = diff_vocalized(&a.letters, &b.letters);
        assert_eq!(
            diff,
            vec![LetterMatch::Exact, LetterMatch::HamzaSeat, LetterMatch::Compatible]
        );
    }
}
