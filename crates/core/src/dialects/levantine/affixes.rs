//! Levantine person prefixes, suffixes and the indicative markers ب and م.

use crate::morphology::{AugmentedRoot, Suffix};
use crate::script::letters::{ALEF, BA, HAMZA, MIM, NUN, TA, WAW, YA};
use crate::script::{Tashkil, VocalizedLetter};
use crate::types::{Dialect, Gender, Numerus, Person, Tense};

use Gender::{Female, Male};
use Numerus::{Dual, Plural, Singular};
use Person::{First, Second, Third};
use Tashkil::{Dhamma as U, Fatha as A, Kasra as I, Sukun as O};

pub fn prefix_letter(person: Person, gender: Gender, numerus: Numerus) -> char {
    match (person, numerus, gender) {
        (First, Singular, _) => HAMZA,
        (First, _, _) => NUN,
        (Second, _, _) => TA,
        (Third, Singular, Female) => TA,
        (Third, _, _) => YA,
    }
}

/// Inflectional suffix. Plurals make no gender distinction.
pub fn suffix(tense: Tense, person: Person, gender: Gender, numerus: Numerus) -> Suffix {
    let none: Option<Tashkil> = None;
    match tense {
        Tense::Perfect => match (person, numerus, gender) {
            (Third, Singular, Male) => Suffix::new(O, &[]),
            (Third, Singular, Female) => Suffix::new(I, &[(TA, Some(O))]),
            (Third, _, _) => Suffix::new(U, &[(WAW, none)]),
            (Second, Singular, Male) | (First, Singular, _) => Suffix::new(O, &[(TA, Some(O))]),
            (Second, Singular, Female) => Suffix::new(O, &[(TA, Some(I)), (YA, none)]),
            (Second, _, _) => Suffix::new(O, &[(TA, Some(U)), (WAW, none)]),
            (First, _, _) => Suffix::new(O, &[(NUN, Some(A)), (ALEF, none)]),
        },
        Tense::Present => match (person, numerus, gender) {
            (Second, Singular, Female) => Suffix::new(I, &[(YA, none)]),
            (Second | Third, Plural | Dual, _) => Suffix::new(U, &[(WAW, none)]),
            _ => Suffix::new(O, &[]),
        },
    }
}

/// Person prefix of a present form. Its vowel depends on how the finished
/// stem opens, so this runs after the root-type rules.
pub fn person_prefix(
    stem: &AugmentedRoot,
    person: Person,
    gender: Gender,
    numerus: Numerus,
) -> VocalizedLetter {
    let letter = prefix_letter(person, gender, numerus);
    let opens_silent = stem.first_live().and_then(|s| s.tashkil) == Some(O);
    let vowel = match (opens_silent, letter) {
        (true, _) => I,
        (false, HAMZA) => A,
        (false, _) => O,
    };
    VocalizedLetter::voweled(letter, vowel)
}

/// Put the indicative marker in front of a present form.
pub fn indicative(
    dialect: Dialect,
    prefix: &mut Vec<VocalizedLetter>,
    stem: &AugmentedRoot,
    person: Person,
    numerus: Numerus,
) {
    let Some(person_prefix) = prefix.first().copied() else {
        return;
    };
    match (person, numerus) {
        (First, Singular) => {
            // بِكْتُب, بَاكُل, بْعَلِّم: the marker replaces the hamza
            let first = stem.first_live();
            let vowel = match first {
                Some(s) if s.tashkil == Some(O) => I,
                Some(s) if s.letter == ALEF && s.tashkil.is_none() => A,
                _ => O,
            };
            prefix.clear();
            prefix.push(VocalizedLetter::voweled(BA, vowel));
        }
        (First, _) => {
            let vowel = if person_prefix.tashkil == Some(O) { I } else { O };
            prefix.insert(0, VocalizedLetter::voweled(MIM, vowel));
        }
        _ => {
            if dialect == Dialect::Lebanese
                && person_prefix.letter == YA
                && person_prefix.tashkil == Some(I)
            {
                // Lebanese بِكْتُب for بْيِكْتُب
                prefix.clear();
                prefix.push(VocalizedLetter::voweled(BA, I));
                return;
            }
            let vowel = if person_prefix.tashkil == Some(O) { I } else { O };
            prefix.insert(0, VocalizedLetter::voweled(BA, vowel));
        }
    }
}
