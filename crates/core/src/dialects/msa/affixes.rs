//! MSA person prefixes and inflectional suffixes.

use crate::morphology::Suffix;
use crate::script::letters::{ALEF, HAMZA, MIM, NUN, TA, WAW, YA};
use crate::script::{Tashkil, VocalizedLetter};
use crate::types::{Gender, Mood, Numerus, Person, Tense};

use Gender::{Female, Male};
use Numerus::{Dual, Plural, Singular};
use Person::{First, Second, Third};
use Tashkil::{Dhamma as U, Fatha as A, Kasra as I, Sukun as O};

/// Letter of the present-tense person prefix.
pub fn prefix_letter(person: Person, gender: Gender, numerus: Numerus) -> char {
    match (person, numerus, gender) {
        (First, Singular, _) => HAMZA,
        (First, _, _) => NUN,
        (Second, _, _) => TA,
        (Third, Singular | Dual, Female) => TA,
        (Third, _, _) => YA,
    }
}

/// Inflectional suffix for a (tense, mood, person, gender, number) cell.
/// Imperatives pass `Jussive`.
pub fn suffix(tense: Tense, mood: Mood, person: Person, gender: Gender, numerus: Numerus) -> Suffix {
    let none: Option<Tashkil> = None;
    match tense {
        Tense::Perfect => match (person, numerus, gender) {
            (Third, Singular, Male) => Suffix::new(A, &[]),
            (Third, Singular, Female) => Suffix::new(A, &[(TA, Some(O))]),
            (Third, Dual, Male) => Suffix::new(A, &[(ALEF, none)]),
            (Third, Dual, Female) => Suffix::new(A, &[(TA, Some(A)), (ALEF, none)]),
            (Third, Plural, Male) => Suffix::new(U, &[(WAW, Some(O)), (ALEF, none)]),
            (Third, Plural, Female) => Suffix::new(O, &[(NUN, Some(A))]),
            (Second, Singular, Male) => Suffix::new(O, &[(TA, Some(A))]),
            (Second, Singular, Female) => Suffix::new(O, &[(TA, Some(I))]),
            (Second, Dual, _) => Suffix::new(O, &[(TA, Some(U)), (MIM, Some(A)), (ALEF, none)]),
            (Second, Plural, Male) => Suffix::new(O, &[(TA, Some(U)), (MIM, Some(O))]),
            (Second, Plural, Female) => {
                let mut s = Suffix::new(O, &[(TA, Some(U)), (NUN, Some(A))]);
                s.letters[1].shadda = true;
                s
            }
            (First, Singular, _) => Suffix::new(O, &[(TA, Some(U))]),
            (First, _, _) => Suffix::new(O, &[(NUN, Some(A)), (ALEF, none)]),
        },
        Tense::Present => {
            let indicative = mood == Mood::Indicative;
            match (person, numerus, gender) {
                (Second, Singular, Female) => {
                    if indicative {
                        Suffix::new(I, &[(YA, Some(O)), (NUN, Some(A))])
                    } else {
                        Suffix::new(I, &[(YA, Some(O))])
                    }
                }
                (Second | Third, Dual, _) => {
                    if indicative {
                        Suffix::new(A, &[(ALEF, none), (NUN, Some(I))])
                    } else {
                        Suffix::new(A, &[(ALEF, none)])
                    }
                }
                (Second | Third, Plural, Male) => {
                    if indicative {
                        Suffix::new(U, &[(WAW, Some(O)), (NUN, Some(A))])
                    } else {
                        Suffix::new(U, &[(WAW, Some(O)), (ALEF, none)])
                    }
                }
                (Second | Third, Plural, Female) => Suffix::new(O, &[(NUN, Some(A))]),
                _ => match mood {
                    Mood::Indicative => Suffix::new(U, &[]),
                    Mood::Subjunctive => Suffix::new(A, &[]),
                    Mood::Jussive | Mood::Imperative => Suffix::new(O, &[]),
                },
            }
        }
    }
}

/// Present prefix as a letter.
pub fn present_prefix(person: Person, gender: Gender, numerus: Numerus, vowel: Tashkil) -> VocalizedLetter {
    VocalizedLetter::voweled(prefix_letter(person, gender, numerus), vowel)
}
