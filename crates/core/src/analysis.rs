//! Reverse conjugation: guess which (root, parameters) pairs produce a
//! surface word.
//!
//! The letter skeleton of each input word proposes root and tense
//! hypotheses; every parameter combination the dialect allows for them is
//! then run through the forward pipeline and scored against the input.
//! All candidates above the threshold are reported, best first.

use itertools::{iproduct, Itertools};
use serde::{Deserialize, Serialize};

use crate::conjugator::Conjugator;
use crate::dialects::{conjugator_for, AffixProfile, DialectConjugator};
use crate::morphology::derivation::stem8_infix;
use crate::morphology::{irregular, VerbRoot};
use crate::script::letters::{is_hamza, is_weak, ALEF, ALEF_MADDA, DAL, HAMZA, TA, TAA, TA_MARBUTA, WAW, YA};
use crate::script::{compare_vocalized, Tashkil, VocalizedPhrase, VocalizedWord};
use crate::types::{ConjugationParams, Dialect, Mood, Person, Stem1Context, Tense, Voice};

/// Analyzer knobs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Candidates must score strictly above this.
    pub min_score: f64,
    /// Keep at most this many matches per input word.
    pub max_results: Option<usize>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            min_score: 0.0,
            max_results: None,
        }
    }
}

/// One plausible reading of one input word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisMatch {
    /// Position of the word in the analyzed phrase.
    pub word_index: usize,
    pub root: VerbRoot,
    pub params: ConjugationParams,
    /// The form the forward pipeline produced for these parameters.
    pub form: VocalizedWord,
    pub score: f64,
}

pub fn analyze(
    conjugator: &Conjugator,
    dialect: Dialect,
    phrase: &VocalizedPhrase,
    config: &AnalyzerConfig,
) -> Vec<AnalysisMatch> {
    let engine = conjugator_for(dialect);
    let mut matches = Vec::new();
    for (word_index, word) in phrase.words.iter().enumerate() {
        let mut found = analyze_word(conjugator, engine, word, config);
        found.sort_by(|a, b| b.score.total_cmp(&a.score));
        if let Some(max) = config.max_results {
            found.truncate(max);
        }
        log::debug!("word {word_index} ({word}): {} matches", found.len());
        matches.extend(found.into_iter().map(|mut m| {
            m.word_index = word_index;
            m
        }));
    }
    matches
}

fn analyze_word(
    conjugator: &Conjugator,
    engine: &dyn DialectConjugator,
    word: &VocalizedWord,
    config: &AnalyzerConfig,
) -> Vec<AnalysisMatch> {
    let dialect = engine.dialect();
    let profile = engine.affix_profile();
    let space = engine.parameter_space();
    let skeleton = unfold(word);

    let roots = root_hypotheses(&skeleton, &profile, dialect);
    let tense_moods = tense_hypotheses(&skeleton, &profile, &space.moods);
    log::debug!(
        "{word}: {} root and {} tense hypotheses",
        roots.len(),
        tense_moods.len()
    );

    let mut found = Vec::new();
    for root in &roots {
        for (stem, context) in stem_hypotheses(engine, root, &space.stems) {
            let grid = iproduct!(
                tense_moods.iter().copied(),
                space.voices.iter().copied(),
                space.persons.iter().copied(),
                space.genders.iter().copied(),
                space.numbers.iter().copied()
            );
            for ((tense, mood), voice, person, gender, numerus) in grid {
                if mood == Mood::Imperative && (person != Person::Second || voice == Voice::Passive) {
                    continue;
                }
                let mut params = ConjugationParams::new(stem).subject(person, gender, numerus);
                params.stem1_context = context;
                params.tense = tense;
                params.mood = mood;
                params.voice = voice;
                let form = match conjugator.conjugate(root, &params, dialect) {
                    Ok(form) => form,
                    Err(e) => {
                        log::trace!("skip {root} {params:?}: {e}");
                        continue;
                    }
                };
                let score = compare_vocalized(&form.letters, &word.letters);
                if score > config.min_score {
                    found.push(AnalysisMatch {
                        word_index: 0,
                        root: root.clone(),
                        params,
                        form,
                        score,
                    });
                }
            }
        }
    }
    found
}

/// Letters with every hamza seat reduced to ء, madda split into ء + ا,
/// ة read as ت and doubled letters written out twice.
fn unfold(word: &VocalizedWord) -> Vec<char> {
    let mut out = Vec::with_capacity(word.len() + 2);
    for l in &word.letters {
        let letter = match l.letter {
            ALEF_MADDA => {
                out.push(HAMZA);
                ALEF
            }
            c if is_hamza(c) => HAMZA,
            TA_MARBUTA => TA,
            c => c,
        };
        out.push(letter);
        if l.shadda {
            out.push(letter);
        }
    }
    out
}

/// What a weak or alef-like letter in the surface can stand for as a radical.
fn radical_options(c: char) -> Vec<char> {
    match c {
        ALEF => vec![WAW, YA, HAMZA],
        c if is_weak(c) => vec![WAW, YA],
        _ => vec![c],
    }
}

/// Every letter left out of the root must be explainable as affix
/// material, as the second half of a doubled radical or as a stem-8 infix
/// assimilated to the preceding radical.
fn covers_strong_letters(skeleton: &[char], picked: &[usize], profile: &AffixProfile) -> bool {
    skeleton.iter().enumerate().all(|(p, &c)| {
        if picked.contains(&p) || profile.affix_letters.contains(&c) {
            return true;
        }
        let doubled = (p > 0 && skeleton[p - 1] == c) || skeleton.get(p + 1) == Some(&c);
        let infix = p > 0
            && matches!(c, TAA | DAL)
            && picked.contains(&(p - 1))
            && stem8_infix(skeleton[p - 1]) == c;
        doubled || infix
    })
}

fn within_windows(skeleton: &[char], picked: &[usize], profile: &AffixProfile) -> bool {
    match (picked.first(), picked.last()) {
        (Some(&first), Some(&last)) => {
            first <= profile.max_prefix && skeleton.len() - 1 - last <= profile.max_suffix
        }
        _ => false,
    }
}

const WEAK_RADICALS: [char; 3] = [WAW, YA, HAMZA];

fn expand(letters: &[char]) -> Vec<VerbRoot> {
    letters
        .iter()
        .map(|&c| radical_options(c))
        .multi_cartesian_product()
        .filter_map(|radicals| VerbRoot::new(&radicals).ok())
        .collect()
}

fn root_hypotheses(skeleton: &[char], profile: &AffixProfile, dialect: Dialect) -> Vec<VerbRoot> {
    let n = skeleton.len();
    let mut roots = Vec::new();
    let picks = |k: usize| {
        (0..n)
            .combinations(k)
            .filter(|picked| within_windows(skeleton, picked, profile))
            .filter(|picked| covers_strong_letters(skeleton, picked, profile))
            .map(|picked| picked.iter().map(|&p| skeleton[p]).collect::<Vec<char>>())
            .collect::<Vec<_>>()
    };

    for letters in picks(3).into_iter().chain(picks(4)) {
        roots.extend(expand(&letters));
    }
    // a weak radical dropped from the surface, or a contracted geminate
    for pair in picks(2) {
        for (slot, weak) in iproduct!(0..3, WEAK_RADICALS) {
            let mut letters = pair.clone();
            letters.insert(slot, weak);
            roots.extend(expand(&letters));
        }
        roots.extend(expand(&[pair[0], pair[1], pair[1]]));
    }
    // both weak radicals dropped: قِ, تَقِ from وقي
    for single in picks(1) {
        for (slot, first, second) in iproduct!(0..3, WEAK_RADICALS, WEAK_RADICALS) {
            let mut letters = vec![first, second];
            letters.insert(slot, single[0]);
            roots.extend(expand(&letters));
        }
    }
    roots.extend(irregular::roots_for(dialect));

    roots.into_iter().unique().collect()
}

/// Perfect and imperative are always possible; the other present moods
/// only when the word opens like a present form.
fn tense_hypotheses(skeleton: &[char], profile: &AffixProfile, moods: &[Mood]) -> Vec<(Tense, Mood)> {
    let mut out = vec![(Tense::Perfect, Mood::Indicative)];
    let opens_present = skeleton.first().is_some_and(|c| {
        profile.present_prefixes.contains(c) || profile.indicative_markers.contains(c)
    });
    for &mood in moods {
        if mood == Mood::Imperative || opens_present {
            out.push((Tense::Present, mood));
        }
    }
    out
}

/// Every stem the dialect supports for `root`, so partial or misspelled
/// input still meets candidates from stems whose affixes it lacks.
fn stem_hypotheses(engine: &dyn DialectConjugator, root: &VerbRoot, stems: &[u8]) -> Vec<(u8, Option<Stem1Context>)> {
    let mut out = Vec::new();
    for &stem in stems {
        if !engine.is_supported(root, stem) {
            continue;
        }
        match stem {
            1 if root.is_quadriliteral() => {
                out.push((1, Some(Stem1Context::new(Tashkil::Fatha, Tashkil::Kasra))));
            }
            1 => out.extend(Stem1Context::all_vowel_pairs().into_iter().map(|c| (1, Some(c)))),
            _ => out.push((stem, None)),
        }
    }
    out
}
