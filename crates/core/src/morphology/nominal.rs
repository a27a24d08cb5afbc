//! Building nominal forms from pattern templates, plus the definite article.

use super::derivation::stem8_infix;
use super::root::VerbRoot;
use crate::script::letters::{is_sun_letter, ALEF, LAM, TA, TA_MARBUTA};
use crate::script::{Tashkil, VocalizedLetter};

pub const A: Option<Tashkil> = Some(Tashkil::Fatha);
pub const I: Option<Tashkil> = Some(Tashkil::Kasra);
pub const U: Option<Tashkil> = Some(Tashkil::Dhamma);
pub const O: Option<Tashkil> = Some(Tashkil::Sukun);
pub const IN: Option<Tashkil> = Some(Tashkil::Kasratan);
pub const AN: Option<Tashkil> = Some(Tashkil::Fathatan);
pub const NONE: Option<Tashkil> = None;

/// One position of a nominal pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NounSlot {
    /// Radical n with a vowel.
    R(usize, Option<Tashkil>),
    /// Radical n doubled.
    RR(usize, Option<Tashkil>),
    /// Fixed letter.
    L(char, Option<Tashkil>),
    /// Stem-8 ta, assimilated to the first radical.
    InfixTa(Option<Tashkil>),
}

/// Spell a pattern with the radicals of `root`.
pub fn build_template(template: &[NounSlot], root: &VerbRoot) -> Vec<VocalizedLetter> {
    template
        .iter()
        .map(|slot| match *slot {
            NounSlot::R(n, t) => VocalizedLetter::new(root.radical(n), t),
            NounSlot::RR(n, t) => VocalizedLetter::new(root.radical(n), t).doubled(),
            NounSlot::L(c, t) => VocalizedLetter::new(c, t),
            NounSlot::InfixTa(t) => VocalizedLetter::new(stem8_infix(root.radical(1)), t),
        })
        .collect()
}

/// Prefix the article ال; before a sun letter the lam assimilates into a
/// shadda on the first letter.
pub fn with_definite_article(letters: &[VocalizedLetter]) -> Vec<VocalizedLetter> {
    let mut out = Vec::with_capacity(letters.len() + 2);
    out.push(VocalizedLetter::bare(ALEF));
    match letters.first() {
        Some(first) if is_sun_letter(first.letter) => {
            out.push(VocalizedLetter::bare(LAM));
            out.push(first.doubled());
            out.extend_from_slice(&letters[1..]);
        }
        _ => {
            out.push(VocalizedLetter::voweled(LAM, Tashkil::Sukun));
            out.extend_from_slice(letters);
        }
    }
    out
}

/// Whether a word ends in ta marbuta.
pub fn ends_in_ta_marbuta(letters: &[VocalizedLetter]) -> bool {
    letters.last().is_some_and(|l| l.letter == TA_MARBUTA)
}

/// Construct-state spelling of a final ta marbuta in the dialects: ة → ت.
pub fn open_ta_marbuta(letters: &mut [VocalizedLetter]) {
    if let Some(last) = letters.last_mut() {
        if last.letter == TA_MARBUTA {
            last.letter = TA;
        }
    }
}

/// Put `tashkil` on the last letter.
pub fn set_final_tashkil(letters: &mut [VocalizedLetter], tashkil: Option<Tashkil>) {
    if let Some(last) = letters.last_mut() {
        last.tashkil = tashkil;
    }
}
