//! Orthographic clean-up passes applied to every generated form.

use super::letters::{Tashkil, ALEF, ALEF_MAKSURA, WAW, YA};
use super::vocalized::VocalizedLetter;

/// (letter, its tashkil, tashkil of the previous letter): the mark is
/// implied by the long vowel and gets dropped.
const REDUNDANT_TASHKIL: &[(char, Tashkil, Tashkil)] = &[
    (ALEF, Tashkil::Fatha, Tashkil::Fatha),
    (ALEF, Tashkil::Sukun, Tashkil::Fatha),
    (WAW, Tashkil::Sukun, Tashkil::Dhamma),
    (YA, Tashkil::Sukun, Tashkil::Kasra),
    (ALEF_MAKSURA, Tashkil::Sukun, Tashkil::Fatha),
    (ALEF_MAKSURA, Tashkil::Fatha, Tashkil::Fatha),
];

/// Merge `X(sukun) X` into a single `X` carrying shadda and the second
/// letter's vowel.
pub fn contract_shadda(letters: &[VocalizedLetter]) -> Vec<VocalizedLetter> {
    let mut out: Vec<VocalizedLetter> = Vec::with_capacity(letters.len());
    for &l in letters {
        if let Some(prev) = out.last_mut() {
            if prev.letter == l.letter
                && !prev.shadda
                && !l.shadda
                && prev.tashkil == Some(Tashkil::Sukun)
            {
                prev.shadda = true;
                prev.tashkil = l.tashkil;
                prev.emphasis |= l.emphasis;
                continue;
            }
        }
        out.push(l);
    }
    out
}

/// Drop marks that the following long-vowel letter already implies.
pub fn remove_redundant_tashkil(letters: &[VocalizedLetter]) -> Vec<VocalizedLetter> {
    let mut out: Vec<VocalizedLetter> = letters.to_vec();
    for i in 1..out.len() {
        let prev = out[i - 1].tashkil;
        let current = &mut out[i];
        if current.shadda {
            continue;
        }
        let (Some(own), Some(prev)) = (current.tashkil, prev) else {
            continue;
        };
        if REDUNDANT_TASHKIL
            .iter()
            .any(|&(letter, t, p)| letter == current.letter && t == own && p == prev)
        {
            current.tashkil = None;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::buckwalter::{parse_buckwalter, to_buckwalter};
    use crate::script::VocalizedWord;

    fn run(f: fn(&[VocalizedLetter]) -> Vec<VocalizedLetter>, bw: &str) -> String {
        let word = parse_buckwalter(bw).unwrap();
        to_buckwalter(&VocalizedWord::new(f(&word.letters)))
    }

    #[test]
    fn test_contract_two_sukun() {
        let d = VocalizedLetter::voweled('د', Tashkil::Sukun);
        let out = contract_shadda(&[d, d]);
        assert_eq!(out.len(), 1);
        assert!(out[0].shadda);
        assert_eq!(out[0].tashkil, Some(Tashkil::Sukun));
    }

    #[test]
    fn test_contract_takes_second_vowel() {
        assert_eq!(run(contract_shadda, "sakatotu"), "sakat~u");
        assert_eq!(run(contract_shadda, "madoda"), "mad~a");
        // first letter voweled: no merge
        assert_eq!(run(contract_shadda, "madadotu"), "madadotu");
    }

    #[test]
    fn test_contract_keeps_emphasis() {
        let mut a = VocalizedLetter::voweled('ط', Tashkil::Sukun);
        let b = VocalizedLetter::voweled('ط', Tashkil::Fatha);
        a.emphasis = true;
        let out = contract_shadda(&[a, b]);
        assert!(out[0].emphasis);
    }

    #[test]
    fn test_redundant_long_vowels() {
        assert_eq!(run(remove_redundant_tashkil, "qaAoma"), "qaAma");
        assert_eq!(run(remove_redundant_tashkil, "yaquwolu"), "yaquwlu");
        assert_eq!(run(remove_redundant_tashkil, "ramiyotu"), "ramiytu");
        assert_eq!(run(remove_redundant_tashkil, "ramaYo"), "ramaY");
    }

    #[test]
    fn test_diphthongs_kept() {
        assert_eq!(run(remove_redundant_tashkil, "ramayotu"), "ramayotu");
        assert_eq!(run(remove_redundant_tashkil, "ramawoA"), "ramawoA");
    }

    #[test]
    fn test_redundant_removal_idempotent() {
        for bw in ["qaAoma", "yaquwolu", "nasiyotu", "yad~aEiyo", "kataba"] {
            let word = parse_buckwalter(bw).unwrap();
            let once = remove_redundant_tashkil(&word.letters);
            let twice = remove_redundant_tashkil(&once);
            assert_eq!(once, twice, "{bw}");
        }
    }
}
