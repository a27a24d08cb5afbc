//! sarf CLI: conjugate, analyze and decline Arabic verbs and nominals.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;

use sarf_core::dialects::conjugator_for;
use sarf_core::script::{parse_buckwalter, parse_vocalized_phrase, parse_vocalized_text, to_buckwalter};
use sarf_core::{
    AdjectiveDeclension, AnalyzerConfig, Case, ConjugationParams, Conjugator, Dialect, Gender, Mood,
    NounDeclension, NounState, Numerus, Person, Stem1Context, Tashkil, Tense, VerbRoot, VocalizedPhrase,
    VocalizedWord, Voice,
};

// ─── Top-level CLI ───────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "sarf",
    about = "Arabic verb conjugation, analysis and declension",
    version,
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Conjugate one verb form
    Conjugate(ConjugateArgs),
    /// Print every person/gender/number of one tense
    Table(TableArgs),
    /// Active or passive participle
    Participle(ParticipleArgs),
    /// Every verbal noun pattern of a stem
    VerbalNouns(VerbalNounArgs),
    /// Find roots and parameters that produce the given words
    Analyze(AnalyzeArgs),
    /// Decline a noun or adjective
    Decline(DeclineArgs),
}

// ─── Shared arguments (embedded in each subcommand) ──────────────

#[derive(Parser, Debug)]
struct SharedArgs {
    /// Dialect to use
    #[arg(long, default_value = "msa", value_parser = ["msa", "north-levantine", "lebanese"])]
    dialect: String,

    /// Print results as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Print Buckwalter transliteration instead of Arabic script
    #[arg(short, long, default_value_t = false)]
    buckwalter: bool,

    /// Show verbose output
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

#[derive(Parser, Debug)]
struct VerbArgs {
    /// Root, in Arabic script (كتب, ك-ت-ب) or Buckwalter (ktb)
    root: String,

    /// Derivational stem
    #[arg(long, default_value_t = 1)]
    stem: u8,

    /// Stem-1 perfect and present vowels: "a-u", "i-a", ...
    #[arg(long, default_value = "a-u")]
    vowels: String,

    /// Conjugate a weak root as if it were sound (stem 1)
    #[arg(long, default_value_t = false)]
    sound: bool,
}

// ─── Conjugate ───────────────────────────────────────────────────

#[derive(Parser, Debug)]
struct ConjugateArgs {
    #[command(flatten)]
    shared: SharedArgs,

    #[command(flatten)]
    verb: VerbArgs,

    #[arg(long, default_value = "perfect", value_parser = ["perfect", "present"])]
    tense: String,

    #[arg(long, default_value = "active", value_parser = ["active", "passive"])]
    voice: String,

    #[arg(long, default_value = "indicative", value_parser = ["indicative", "subjunctive", "jussive", "imperative"])]
    mood: String,

    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=3))]
    person: u8,

    #[arg(long, default_value = "m", value_parser = ["m", "f"])]
    gender: String,

    #[arg(long, default_value = "sg", value_parser = ["sg", "du", "pl"])]
    number: String,
}

// ─── Table ───────────────────────────────────────────────────────

#[derive(Parser, Debug)]
struct TableArgs {
    #[command(flatten)]
    shared: SharedArgs,

    #[command(flatten)]
    verb: VerbArgs,

    #[arg(long, default_value = "perfect", value_parser = ["perfect", "present"])]
    tense: String,

    #[arg(long, default_value = "active", value_parser = ["active", "passive"])]
    voice: String,

    #[arg(long, default_value = "indicative", value_parser = ["indicative", "subjunctive", "jussive", "imperative"])]
    mood: String,
}

// ─── Participle / verbal nouns ───────────────────────────────────

#[derive(Parser, Debug)]
struct ParticipleArgs {
    #[command(flatten)]
    shared: SharedArgs,

    #[command(flatten)]
    verb: VerbArgs,

    #[arg(long, default_value = "active", value_parser = ["active", "passive"])]
    voice: String,
}

#[derive(Parser, Debug)]
struct VerbalNounArgs {
    #[command(flatten)]
    shared: SharedArgs,

    /// Root, in Arabic script or Buckwalter
    root: String,

    #[arg(long, default_value_t = 1)]
    stem: u8,
}

// ─── Analyze ─────────────────────────────────────────────────────

#[derive(Parser, Debug)]
struct AnalyzeArgs {
    #[command(flatten)]
    shared: SharedArgs,

    /// Words to analyze, vocalized or not, Arabic script or Buckwalter
    #[arg(required = true)]
    words: Vec<String>,

    /// Report only candidates scoring above this
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    min_score: f64,

    /// Keep at most this many matches per word
    #[arg(long)]
    max_results: Option<usize>,
}

// ─── Decline ─────────────────────────────────────────────────────

#[derive(Parser, Debug)]
struct DeclineArgs {
    #[command(flatten)]
    shared: SharedArgs,

    /// Masculine singular base, Arabic script or Buckwalter
    word: String,

    #[arg(long, default_value = "noun", value_parser = ["noun", "adjective"])]
    kind: String,

    #[arg(long = "case", default_value = "nominative", value_parser = ["nominative", "accusative", "genitive"])]
    case: String,

    /// Noun state
    #[arg(long, default_value = "indefinite", value_parser = ["indefinite", "definite", "construct"])]
    state: String,

    /// Definite adjective
    #[arg(long, default_value_t = false)]
    definite: bool,

    #[arg(long, default_value = "m", value_parser = ["m", "f"])]
    gender: String,

    #[arg(long, default_value = "sg", value_parser = ["sg", "du", "pl"])]
    number: String,
}

// ─── Main ────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    // Init logging
    let verbose = match &cli.command {
        Command::Conjugate(a) => a.shared.verbose,
        Command::Table(a) => a.shared.verbose,
        Command::Participle(a) => a.shared.verbose,
        Command::VerbalNouns(a) => a.shared.verbose,
        Command::Analyze(a) => a.shared.verbose,
        Command::Decline(a) => a.shared.verbose,
    };
    let log_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    let result = match cli.command {
        Command::Conjugate(args) => run_conjugate(args),
        Command::Table(args) => run_table(args),
        Command::Participle(args) => run_participle(args),
        Command::VerbalNouns(args) => run_verbal_nouns(args),
        Command::Analyze(args) => run_analyze(args),
        Command::Decline(args) => run_decline(args),
    };

    if let Err(e) = result {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

// ─── Helpers ─────────────────────────────────────────────────────

fn parse_dialect(name: &str) -> Result<Dialect> {
    Ok(match name {
        "msa" => Dialect::ModernStandardArabic,
        "north-levantine" => Dialect::NorthLevantine,
        "lebanese" => Dialect::Lebanese,
        other => bail!("Unknown dialect: {other}"),
    })
}

fn is_ascii_input(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_alphabetic())
}

/// Read one word in Arabic script or Buckwalter.
fn parse_word(text: &str) -> Result<VocalizedWord> {
    if is_ascii_input(text) {
        parse_buckwalter(text).with_context(|| format!("Invalid Buckwalter word: {text}"))
    } else {
        parse_vocalized_text(text).with_context(|| format!("Invalid word: {text}"))
    }
}

fn parse_root(text: &str) -> Result<VerbRoot> {
    let arabic = if is_ascii_input(text) {
        parse_word(&text.replace('-', ""))?.skeleton()
    } else {
        text.to_string()
    };
    arabic.parse().with_context(|| format!("Invalid root: {text}"))
}

fn parse_vowel(c: char) -> Result<Tashkil> {
    Ok(match c {
        'a' => Tashkil::Fatha,
        'i' => Tashkil::Kasra,
        'u' => Tashkil::Dhamma,
        other => bail!("Unknown vowel {other:?}, expected a, i or u"),
    })
}

fn vowel_name(t: Tashkil) -> char {
    match t {
        Tashkil::Kasra => 'i',
        Tashkil::Dhamma => 'u',
        _ => 'a',
    }
}

fn parse_context(verb: &VerbArgs) -> Result<Option<Stem1Context>> {
    if verb.stem != 1 {
        return Ok(None);
    }
    let mut chars = verb.vowels.chars().filter(|c| *c != '-');
    let (Some(perfect), Some(present), None) = (chars.next(), chars.next(), chars.next()) else {
        bail!("--vowels takes two vowels such as a-u, got {:?}", verb.vowels);
    };
    let mut context = Stem1Context::new(parse_vowel(perfect)?, parse_vowel(present)?);
    if verb.sound {
        context = context.sound();
    }
    Ok(Some(context))
}

fn parse_tense(name: &str) -> Tense {
    if name == "present" {
        Tense::Present
    } else {
        Tense::Perfect
    }
}

fn parse_voice(name: &str) -> Voice {
    if name == "passive" {
        Voice::Passive
    } else {
        Voice::Active
    }
}

fn parse_mood(name: &str) -> Mood {
    match name {
        "subjunctive" => Mood::Subjunctive,
        "jussive" => Mood::Jussive,
        "imperative" => Mood::Imperative,
        _ => Mood::Indicative,
    }
}

fn parse_person(n: u8) -> Person {
    match n {
        1 => Person::First,
        2 => Person::Second,
        _ => Person::Third,
    }
}

fn parse_gender(name: &str) -> Gender {
    if name == "f" {
        Gender::Female
    } else {
        Gender::Male
    }
}

fn parse_number(name: &str) -> Numerus {
    match name {
        "du" => Numerus::Dual,
        "pl" => Numerus::Plural,
        _ => Numerus::Singular,
    }
}

fn parse_case(name: &str) -> Case {
    match name {
        "accusative" => Case::Accusative,
        "genitive" => Case::Genitive,
        _ => Case::Nominative,
    }
}

fn parse_state(name: &str) -> NounState {
    match name {
        "definite" => NounState::Definite,
        "construct" => NounState::Construct,
        _ => NounState::Indefinite,
    }
}

fn render(word: &VocalizedWord, shared: &SharedArgs) -> String {
    if shared.buckwalter {
        to_buckwalter(word)
    } else {
        word.to_string()
    }
}

/// Short label such as 3ms, 2fp, 1s.
fn subject_label(person: Person, gender: Gender, numerus: Numerus) -> String {
    let p = match person {
        Person::First => '1',
        Person::Second => '2',
        Person::Third => '3',
    };
    let g = match (person, gender) {
        (Person::First, _) => "",
        (_, Gender::Male) => "m",
        (_, Gender::Female) => "f",
    };
    let n = match numerus {
        Numerus::Singular => 's',
        Numerus::Dual => 'd',
        Numerus::Plural => 'p',
    };
    format!("{p}{g}{n}")
}

fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

// ─── Runners ─────────────────────────────────────────────────────

fn run_conjugate(args: ConjugateArgs) -> Result<()> {
    let dialect = parse_dialect(&args.shared.dialect)?;
    let root = parse_root(&args.verb.root)?;
    let mut params = ConjugationParams::new(args.verb.stem).subject(
        parse_person(args.person),
        parse_gender(&args.gender),
        parse_number(&args.number),
    );
    params.stem1_context = parse_context(&args.verb)?;
    params.tense = parse_tense(&args.tense);
    params.voice = parse_voice(&args.voice);
    params.mood = parse_mood(&args.mood);

    let word = Conjugator
        .conjugate(&root, &params, dialect)
        .with_context(|| format!("Cannot conjugate {root}"))?;
    if args.shared.json {
        return print_json(&json!({ "root": root, "params": params, "form": word, "text": word.to_string() }));
    }
    println!("{}", render(&word, &args.shared));
    Ok(())
}

fn run_table(args: TableArgs) -> Result<()> {
    let dialect = parse_dialect(&args.shared.dialect)?;
    let root = parse_root(&args.verb.root)?;
    let context = parse_context(&args.verb)?;
    let space = conjugator_for(dialect).parameter_space();

    let mut rows = Vec::new();
    for &person in &space.persons {
        for &numerus in &space.numbers {
            for &gender in &space.genders {
                if person == Person::First && gender == Gender::Female {
                    continue;
                }
                let mut params = ConjugationParams::new(args.verb.stem).subject(person, gender, numerus);
                params.stem1_context = context;
                params.tense = parse_tense(&args.tense);
                params.voice = parse_voice(&args.voice);
                params.mood = parse_mood(&args.mood);
                match Conjugator.conjugate(&root, &params, dialect) {
                    Ok(word) if word.is_empty() => {}
                    Ok(word) => rows.push((subject_label(person, gender, numerus), word)),
                    Err(e) if e.is_unsupported() => log::debug!("{}: {e}", subject_label(person, gender, numerus)),
                    Err(e) => return Err(e).with_context(|| format!("Cannot conjugate {root}")),
                }
            }
        }
    }
    if rows.is_empty() {
        bail!("{dialect} has no forms of {root} for these parameters");
    }
    if args.shared.json {
        let rows: Vec<_> = rows
            .iter()
            .map(|(label, word)| json!({ "subject": label, "form": word, "text": word.to_string() }))
            .collect();
        return print_json(&json!(rows));
    }
    for (label, word) in &rows {
        println!("{label:<4} {}", render(word, &args.shared));
    }
    Ok(())
}

fn run_participle(args: ParticipleArgs) -> Result<()> {
    let dialect = parse_dialect(&args.shared.dialect)?;
    let root = parse_root(&args.verb.root)?;
    let context = parse_context(&args.verb)?;
    let word = Conjugator
        .conjugate_participle(dialect, &root, args.verb.stem, parse_voice(&args.voice), context.as_ref())
        .with_context(|| format!("No participle for {root} stem {}", args.verb.stem))?;
    if args.shared.json {
        return print_json(&json!({ "root": root, "form": word, "text": word.to_string() }));
    }
    println!("{}", render(&word, &args.shared));
    Ok(())
}

fn run_verbal_nouns(args: VerbalNounArgs) -> Result<()> {
    let dialect = parse_dialect(&args.shared.dialect)?;
    let root = parse_root(&args.root)?;
    let nouns = Conjugator
        .generate_all_possible_verbal_nouns(dialect, &root, args.stem)
        .with_context(|| format!("No verbal nouns for {root} stem {}", args.stem))?;
    if args.shared.json {
        let texts: Vec<String> = nouns.iter().map(|w| w.to_string()).collect();
        return print_json(&json!({ "root": root, "forms": nouns, "texts": texts }));
    }
    for noun in &nouns {
        println!("{}", render(noun, &args.shared));
    }
    Ok(())
}

fn run_analyze(args: AnalyzeArgs) -> Result<()> {
    let dialect = parse_dialect(&args.shared.dialect)?;
    let phrase = if args.words.iter().any(|w| is_ascii_input(w)) {
        VocalizedPhrase {
            words: args.words.iter().map(|w| parse_word(w)).collect::<Result<_>>()?,
        }
    } else {
        parse_vocalized_phrase(&args.words.join(" ")).context("Invalid input text")?
    };
    let config = AnalyzerConfig {
        min_score: args.min_score,
        max_results: args.max_results,
    };
    let matches = Conjugator.analyze_conjugation(dialect, &phrase, &config);
    log::info!("{} candidate(s) for {} word(s)", matches.len(), phrase.words.len());
    if args.shared.json {
        return print_json(&serde_json::to_value(&matches)?);
    }
    for m in &matches {
        let p = &m.params;
        let vowels = p
            .stem1_context
            .map(|c| format!(" {}-{}", vowel_name(c.perfect_vowel), vowel_name(c.present_vowel)))
            .unwrap_or_default();
        println!(
            "[{}] {:.3} {} stem {}{} {:?} {:?} {:?} {} -> {}",
            m.word_index,
            m.score,
            m.root,
            p.stem,
            vowels,
            p.tense,
            p.voice,
            p.mood,
            subject_label(p.person, p.gender, p.numerus),
            render(&m.form, &args.shared),
        );
    }
    Ok(())
}

fn run_decline(args: DeclineArgs) -> Result<()> {
    let dialect = parse_dialect(&args.shared.dialect)?;
    let word = parse_word(&args.word)?;
    let case = parse_case(&args.case);
    let declined = if args.kind == "adjective" {
        let params = AdjectiveDeclension {
            case,
            definite: args.definite,
            gender: parse_gender(&args.gender),
            numerus: parse_number(&args.number),
        };
        Conjugator.decline_adjective(dialect, &word, &params)
    } else {
        let params = NounDeclension {
            case,
            state: parse_state(&args.state),
        };
        Conjugator.decline_noun(dialect, &word, &params)
    }
    .with_context(|| format!("Cannot decline {}", args.word))?;
    if args.shared.json {
        return print_json(&json!({ "form": declined, "text": declined.to_string() }));
    }
    println!("{}", render(&declined, &args.shared));
    Ok(())
}
