//! Hamza orthography: choosing the seat of every generic hamza.
//!
//! Generated forms carry the bare `ء` wherever a glottal stop occurs. The
//! seat depends on the word position, the hamza's own vowel and what
//! precedes it, so it can only be decided once the whole word is known.

use super::letters::{
    Tashkil, ALEF, ALEF_HAMZA_ABOVE, ALEF_HAMZA_BELOW, ALEF_MADDA, HAMZA, WAW, WAW_HAMZA, YA,
    YA_HAMZA,
};
use super::vocalized::VocalizedLetter;

/// What precedes a hamza.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Preceding {
    WordStart,
    Vowel(Tashkil),
    /// Consonant with sukun, or an unmarked consonant.
    Silent,
    LongAlef,
    LongWaw,
    LongYa,
}

fn preceding(letters: &[VocalizedLetter], i: usize) -> Preceding {
    if i == 0 {
        return Preceding::WordStart;
    }
    let prev = &letters[i - 1];
    if let Some(v) = prev.tashkil.and_then(Tashkil::base_vowel) {
        return Preceding::Vowel(v);
    }
    // a silent ya seats a following hamza like a long one: هَيْئَة
    if prev.letter == YA && prev.tashkil == Some(Tashkil::Sukun) && !prev.shadda {
        return Preceding::LongYa;
    }
    if prev.tashkil.is_none() && !prev.shadda {
        match prev.letter {
            ALEF => return Preceding::LongAlef,
            WAW => return Preceding::LongWaw,
            YA => return Preceding::LongYa,
            _ => {}
        }
    }
    Preceding::Silent
}

fn strength(v: Tashkil) -> u8 {
    match v {
        Tashkil::Kasra => 3,
        Tashkil::Dhamma => 2,
        Tashkil::Fatha => 1,
        _ => 0,
    }
}

fn seat_for_vowel(v: Option<Tashkil>) -> char {
    match v {
        Some(Tashkil::Kasra) => YA_HAMZA,
        Some(Tashkil::Dhamma) => WAW_HAMZA,
        _ => ALEF_HAMZA_ABOVE,
    }
}

fn initial_seat(own: Option<Tashkil>) -> char {
    if own == Some(Tashkil::Kasra) {
        ALEF_HAMZA_BELOW
    } else {
        ALEF_HAMZA_ABOVE
    }
}

fn final_seat(before: Preceding) -> char {
    match before {
        Preceding::Vowel(Tashkil::Fatha) => ALEF_HAMZA_ABOVE,
        Preceding::Vowel(Tashkil::Dhamma) => WAW_HAMZA,
        Preceding::Vowel(Tashkil::Kasra) => YA_HAMZA,
        _ => HAMZA,
    }
}

fn medial_seat(before: Preceding, own: Option<Tashkil>) -> char {
    match (before, own) {
        (Preceding::LongYa, _) => YA_HAMZA,
        (Preceding::LongAlef, Some(Tashkil::Fatha)) | (Preceding::LongWaw, Some(Tashkil::Fatha)) => {
            HAMZA
        }
        (Preceding::LongWaw, None) | (Preceding::LongAlef, None) => HAMZA,
        (Preceding::Vowel(prev), _) => {
            let strongest = match own.and_then(Tashkil::base_vowel) {
                Some(o) if strength(o) > strength(prev) => o,
                _ => prev,
            };
            seat_for_vowel(Some(strongest))
        }
        (_, own) => seat_for_vowel(own),
    }
}

/// Fold `ءَ` + `ءْ` and `ءَ` + bare `ا` into alef madda.
fn form_madda(letters: &[VocalizedLetter]) -> Vec<VocalizedLetter> {
    let mut out: Vec<VocalizedLetter> = Vec::with_capacity(letters.len());
    let mut i = 0;
    while i < letters.len() {
        let l = letters[i];
        if l.letter == HAMZA && !l.shadda && l.tashkil == Some(Tashkil::Fatha) {
            if let Some(next) = letters.get(i + 1) {
                let second_hamza = next.letter == HAMZA && next.tashkil == Some(Tashkil::Sukun);
                let long_alef = next.letter == ALEF && next.tashkil.is_none();
                if (second_hamza || long_alef) && !next.shadda {
                    out.push(VocalizedLetter {
                        letter: ALEF_MADDA,
                        tashkil: None,
                        shadda: false,
                        emphasis: l.emphasis,
                    });
                    i += 2;
                    continue;
                }
            }
        }
        out.push(l);
        i += 1;
    }
    out
}

/// Replace every generic hamza with its correctly seated spelling.
/// Letters other than `ء` pass through untouched.
pub fn hamzate(letters: &[VocalizedLetter]) -> Vec<VocalizedLetter> {
    let mut out = form_madda(letters);
    let last = out.len().saturating_sub(1);
    for i in 0..out.len() {
        if out[i].letter != HAMZA {
            continue;
        }
        let before = preceding(&out, i);
        let own = out[i].tashkil;
        let seat = if i == 0 {
            initial_seat(own.and_then(Tashkil::base_vowel))
        } else if i == last {
            final_seat(before)
        } else {
            medial_seat(before, own)
        };
        out[i].letter = seat;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::buckwalter::{parse_buckwalter, to_buckwalter};
    use crate::script::VocalizedWord;

    fn spell(bw: &str) -> String {
        let word = parse_buckwalter(bw).unwrap();
        to_buckwalter(&VocalizedWord::new(hamzate(&word.letters)))
    }

    #[test]
    fn test_initial() {
        assert_eq!(spell("'akala"), ">akala");
        assert_eq!(spell("'ikoraAm"), "<ikoraAm");
        assert_eq!(spell("'umira"), ">umira");
    }

    #[test]
    fn test_medial_follows_strongest_vowel() {
        assert_eq!(spell("ya'okulu"), "ya>okulu");
        assert_eq!(spell("yu'ominu"), "yu&ominu");
        assert_eq!(spell("bi'or"), "bi}or");
        assert_eq!(spell("su'ila"), "su}ila");
        assert_eq!(spell("yaso'alu"), "yaso>alu");
        assert_eq!(spell("mu'aj~al"), "mu&aj~al");
    }

    #[test]
    fn test_medial_after_long_vowel() {
        assert_eq!(spell("tasaA'ala"), "tasaA'ala");
        assert_eq!(spell("qaA'il"), "qaA}il");
        assert_eq!(spell("tafaA'ul"), "tafaA&ul");
        assert_eq!(spell("xaTiy'ap"), "xaTiy}ap");
        assert_eq!(spell("hayo'ap"), "hayo}ap");
    }

    #[test]
    fn test_final() {
        assert_eq!(spell("qara'a"), "qara>a");
        assert_eq!(spell("qura'a"), "qura>a");
        assert_eq!(spell("jaA'a"), "jaA'a");
        assert_eq!(spell("yajiy'u"), "yajiy'u");
        assert_eq!(spell("$ayo'"), "$ayo'");
        assert_eq!(spell("qari'a"), "qari}a");
        assert_eq!(spell("baTu'a"), "baTu&a");
    }

    #[test]
    fn test_madda() {
        assert_eq!(spell("'a'okulu"), "|kulu");
        assert_eq!(spell("'aAmana"), "|mana");
        assert_eq!(spell("qur'aAn"), "qur|n");
    }

    #[test]
    fn test_other_letters_untouched() {
        assert_eq!(spell("kataba"), "kataba");
        assert_eq!(spell(">akala"), ">akala");
    }
}
