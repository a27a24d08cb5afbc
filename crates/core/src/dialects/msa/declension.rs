//! Case endings for nouns and adjectives.

use crate::morphology::nominal::{ends_in_ta_marbuta, set_final_tashkil, with_definite_article};
use crate::script::letters::{
    is_hamza, ALEF, ALEF_HAMZA_ABOVE, ALEF_MADDA, ALEF_MAKSURA, HAMZA, NUN, TA, TA_MARBUTA, WAW, YA,
};
use crate::script::{hamzate, Tashkil, VocalizedLetter, VocalizedWord};
use crate::types::{AdjectiveDeclension, Case, Gender, NounDeclension, NounState, Numerus};

/// Singular noun in the given case and state.
pub fn decline_noun(word: &VocalizedWord, params: &NounDeclension) -> VocalizedWord {
    let mut letters = word.letters.clone();
    let vowel = params.case.vowel();
    let ends_in_maksura = letters.last().is_some_and(|l| l.letter == ALEF_MAKSURA);

    if ends_in_maksura {
        // مُسْتَشْفًى: the case is not heard, only the nunation
        if params.state == NounState::Indefinite {
            let n = letters.len();
            if n >= 2 {
                letters[n - 2].tashkil = Some(Tashkil::Fathatan);
            }
        }
    } else {
        match params.state {
            NounState::Indefinite => {
                let n = letters.len();
                let final_hamza = letters
                    .last()
                    .is_some_and(|l| is_hamza(l.letter) && l.letter != ALEF_MADDA);
                let after_alef = n >= 2 && letters[n - 2].letter == ALEF;
                let takes_alef = params.case == Case::Accusative
                    && match letters.last().map(|l| l.letter) {
                        None | Some(TA_MARBUTA | ALEF_MADDA) => false,
                        Some(c) if is_hamza(c) => !after_alef,
                        Some(_) => true,
                    };
                set_final_tashkil(&mut letters, Some(vowel.nunated()));
                if takes_alef {
                    if final_hamza {
                        // reseat: شَيْء → شَيْئًا, but مُبْتَدَأً keeps its alef seat
                        letters[n - 1].letter = HAMZA;
                        letters.push(VocalizedLetter::bare(ALEF));
                        letters = hamzate(&letters);
                        let seat = letters.len() - 2;
                        if letters[seat].letter == ALEF_HAMZA_ABOVE {
                            letters.pop();
                        }
                    } else {
                        letters.push(VocalizedLetter::bare(ALEF));
                    }
                }
            }
            NounState::Definite | NounState::Construct => set_final_tashkil(&mut letters, Some(vowel)),
        }
    }
    if params.state == NounState::Definite {
        letters = with_definite_article(&letters);
    }
    VocalizedWord::new(letters)
}

/// Inflect a masculine singular adjective for gender, number, case and
/// definiteness.
pub fn decline_adjective(word: &VocalizedWord, params: &AdjectiveDeclension) -> VocalizedWord {
    let mut letters = word.letters.clone();
    let case = params.case;
    let oblique = case != Case::Nominative;

    let declined = match (params.numerus, params.gender) {
        (Numerus::Singular, gender) => {
            if gender == Gender::Female && !ends_in_ta_marbuta(&letters) {
                set_final_tashkil(&mut letters, Some(Tashkil::Fatha));
                letters.push(VocalizedLetter::bare(TA_MARBUTA));
            }
            let state = if params.definite {
                NounState::Definite
            } else {
                NounState::Indefinite
            };
            return decline_noun(&VocalizedWord::new(letters), &NounDeclension { case, state });
        }
        (Numerus::Dual, gender) => {
            feminine_base(&mut letters, gender);
            set_final_tashkil(&mut letters, Some(Tashkil::Fatha));
            if oblique {
                letters.push(VocalizedLetter::voweled(YA, Tashkil::Sukun));
            } else {
                letters.push(VocalizedLetter::bare(ALEF));
            }
            letters.push(VocalizedLetter::voweled(NUN, Tashkil::Kasra));
            letters
        }
        (Numerus::Plural, Gender::Male) => {
            if oblique {
                set_final_tashkil(&mut letters, Some(Tashkil::Kasra));
                letters.push(VocalizedLetter::bare(YA));
            } else {
                set_final_tashkil(&mut letters, Some(Tashkil::Dhamma));
                letters.push(VocalizedLetter::bare(WAW));
            }
            letters.push(VocalizedLetter::voweled(NUN, Tashkil::Fatha));
            letters
        }
        (Numerus::Plural, Gender::Female) => {
            if ends_in_ta_marbuta(&letters) {
                letters.pop();
            }
            set_final_tashkil(&mut letters, Some(Tashkil::Fatha));
            letters.push(VocalizedLetter::bare(ALEF));
            // sound feminine plurals have no accusative of their own
            let vowel = if oblique { Tashkil::Kasra } else { Tashkil::Dhamma };
            let vowel = if params.definite { vowel } else { vowel.nunated() };
            letters.push(VocalizedLetter::voweled(TA, vowel));
            letters
        }
    };
    if params.definite {
        VocalizedWord::new(with_definite_article(&declined))
    } else {
        VocalizedWord::new(declined)
    }
}

/// Feminine duals are built on the ta: كَبِيرَة → كَبِيرَتَانِ.
fn feminine_base(letters: &mut Vec<VocalizedLetter>, gender: Gender) {
    if gender != Gender::Female {
        return;
    }
    if ends_in_ta_marbuta(letters) {
        letters.pop();
    }
    set_final_tashkil(letters, Some(Tashkil::Fatha));
    letters.push(VocalizedLetter::bare(TA));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::{parse_buckwalter, to_buckwalter};
    use pretty_assertions::assert_eq;

    fn noun(bw: &str, case: Case, state: NounState) -> String {
        let word = parse_buckwalter(bw).unwrap();
        to_buckwalter(&decline_noun(&word, &NounDeclension { case, state }))
    }

    fn adj(bw: &str, case: Case, definite: bool, gender: Gender, numerus: Numerus) -> String {
        let word = parse_buckwalter(bw).unwrap();
        let params = AdjectiveDeclension {
            case,
            definite,
            gender,
            numerus,
        };
        to_buckwalter(&decline_adjective(&word, &params))
    }

    #[test]
    fn test_indefinite_nouns() {
        assert_eq!(noun("kitaAb", Case::Nominative, NounState::Indefinite), "kitaAbN");
        assert_eq!(noun("kitaAb", Case::Accusative, NounState::Indefinite), "kitaAbFA");
        assert_eq!(noun("madrasap", Case::Accusative, NounState::Indefinite), "madrasapF");
        assert_eq!(noun("samaA'", Case::Accusative, NounState::Indefinite), "samaA'F");
        assert_eq!(noun("$ayo'", Case::Accusative, NounState::Indefinite), "$ayo}FA");
        assert_eq!(noun("$ayo'", Case::Nominative, NounState::Indefinite), "$ayo'N");
        assert_eq!(noun("mubotada>", Case::Accusative, NounState::Indefinite), "mubotada>F");
        assert_eq!(noun("musota$ofaY", Case::Genitive, NounState::Indefinite), "musota$ofFY");
    }

    #[test]
    fn test_definite_and_construct() {
        assert_eq!(noun("kitaAb", Case::Genitive, NounState::Definite), "AlokitaAbi");
        assert_eq!(noun("$amos", Case::Nominative, NounState::Definite), "Al$~amosu");
        assert_eq!(noun("kitaAb", Case::Accusative, NounState::Construct), "kitaAba");
    }

    #[test]
    fn test_adjective_agreement() {
        assert_eq!(adj("kabiyr", Case::Nominative, false, Gender::Female, Numerus::Singular), "kabiyrapN");
        assert_eq!(adj("kabiyr", Case::Nominative, false, Gender::Male, Numerus::Dual), "kabiyraAni");
        assert_eq!(adj("kabiyr", Case::Genitive, false, Gender::Female, Numerus::Dual), "kabiyratayoni");
        assert_eq!(adj("muEal~im", Case::Nominative, false, Gender::Male, Numerus::Plural), "muEal~imuwna");
        assert_eq!(adj("muEal~im", Case::Accusative, true, Gender::Male, Numerus::Plural), "AlomuEal~imiyna");
        assert_eq!(adj("muEal~im", Case::Accusative, false, Gender::Female, Numerus::Plural), "muEal~imaAtK");
        assert_eq!(adj("muEal~im", Case::Nominative, true, Gender::Female, Numerus::Plural), "AlomuEal~imaAtu");
    }
}
