use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cli::{Cli, RunMode};
use crate::domain::models::{GeneratorConfig, RunMeta, RunReport, SeparatorKind};
use crate::error::{PickError, PickResult};
use crate::services::{caser, composer, output, selector, separators, wordpool};

/// Dispatch the resolved run mode and print its report.
pub fn handle(cli: &Cli) -> anyhow::Result<()> {
    let report = match cli.mode() {
        RunMode::Uuid => run_uuid(cli),
        RunMode::AllWords => run_all_words(cli)?,
        RunMode::Words => run_words(cli)?,
    };
    output::print_report(cli.json, &report)
}

/// Emit a random unique identifier, bypassing the word pipeline. The
/// identifier bytes come from the seeded source so `--seed` reproduces it.
fn run_uuid(cli: &Cli) -> RunReport {
    let seed = effective_seed(cli.seed);
    let mut rng = StdRng::seed_from_u64(seed);
    let bytes: [u8; 16] = rng.gen();
    let id = uuid::Builder::from_random_bytes(bytes).into_uuid().to_string();
    let rendered = if cli.caps { id.to_uppercase() } else { id };

    RunReport {
        status: "ok",
        output: rendered,
        warnings: Vec::new(),
        meta: RunMeta::bare("uuid", Some(seed), &wordlist_label(cli)),
    }
}

/// Dump the word-list source verbatim, ignoring every filter.
fn run_all_words(cli: &Cli) -> anyhow::Result<RunReport> {
    let source = load_source(cli)?;
    Ok(RunReport {
        status: "ok",
        output: source.trim_end_matches('\n').to_string(),
        warnings: Vec::new(),
        meta: RunMeta::bare("all-words", None, &wordlist_label(cli)),
    })
}

/// The full pipeline: pool, selection, capitalization, separators, compose.
fn run_words(cli: &Cli) -> anyhow::Result<RunReport> {
    let config = resolve_config(cli)?;
    let source = load_source(cli)?;
    let mut rng = StdRng::seed_from_u64(config.seed);

    let pool = wordpool::load(&source)?;
    let pool = wordpool::filter_by_length(pool, config.min_length, config.max_length)?;
    let pool = match config.letter {
        Some(letter) => wordpool::filter_by_letter(pool, letter),
        None => pool,
    };

    // Selection draws come first.
    let chosen = if config.no_dup_letters && config.words > 1 {
        selector::pick_unique_initials(&pool, config.words, &mut rng)?
    } else {
        selector::pick_distinct(&pool, config.words, &mut rng)?
    };

    // Capitalization draws follow, one decision per word.
    let single = config.words == 1;
    let cased: Vec<String> = chosen
        .iter()
        .map(|word| caser::apply_caps(word, config.caps, single, &mut rng))
        .collect();

    // Separator draws come last.
    let mut warnings = Vec::new();
    let (rendered_output, rendered_separators, covered_all) = if single {
        match &config.separators {
            Some(spec) => {
                if separators::distinct_kinds(spec) > 1 {
                    warnings.push(
                        "multiple separator kinds supplied; only one is used as the suffix"
                            .to_string(),
                    );
                }
                match separators::plan_single(spec, &mut rng) {
                    Some((sep, _kind)) => {
                        (format!("{}{}", cased[0], sep), vec![sep], true)
                    }
                    None => (cased[0].clone(), Vec::new(), true),
                }
            }
            None => (cased[0].clone(), Vec::new(), true),
        }
    } else {
        let spec = config
            .separators
            .clone()
            .unwrap_or_else(|| vec![SeparatorKind::Dashes]);
        let slots = config.words - 1;
        let required = separators::required_kinds(&spec).len();
        let plan = separators::plan_coverage(&spec, slots, &mut rng);
        if !plan.covered_all {
            warnings.push(format!(
                "only {slots} separator slot(s) for {required} requested kinds; some go unused"
            ));
        }
        let out = composer::compose(&cased, &plan.rendered);
        (out, plan.rendered, plan.covered_all)
    };

    if config.quiet {
        warnings.clear();
    }

    let separator_spec = match (&config.separators, single) {
        (Some(spec), _) => spec.iter().map(|k| k.name()).collect(),
        (None, true) => Vec::new(),
        (None, false) => vec![SeparatorKind::Dashes.name()],
    };

    Ok(RunReport {
        status: "ok",
        output: rendered_output,
        warnings,
        meta: RunMeta {
            mode: "words",
            words: config.words,
            seed: Some(config.seed),
            wordlist: wordlist_label(cli),
            chosen_words: chosen,
            separator_spec,
            separators: rendered_separators,
            covered_all,
        },
    })
}

/// Validate the CLI surface into an effective configuration.
fn resolve_config(cli: &Cli) -> PickResult<GeneratorConfig> {
    if cli.words < 1 || cli.words > 20 {
        return Err(PickError::WordCountOutOfRange(cli.words));
    }
    for (flag, value) in [("--min-length", cli.min_length), ("--max-length", cli.max_length)] {
        if value == Some(0) {
            return Err(PickError::InvalidLengthBounds(format!(
                "{flag} must be positive"
            )));
        }
    }
    if let (Some(min), Some(max)) = (cli.min_length, cli.max_length) {
        if min > max {
            return Err(PickError::InvalidLengthBounds(format!(
                "--min-length {min} exceeds --max-length {max}"
            )));
        }
    }
    if cli.letter.is_some() && cli.no_dup_letters && cli.words > 1 {
        return Err(PickError::ConflictingOptions);
    }
    let parsed_separators = match &cli.separators {
        Some(raw) => Some(separators::parse_spec(raw)?),
        None => None,
    };

    Ok(GeneratorConfig {
        words: cli.words,
        letter: cli.letter,
        caps: cli.caps,
        separators: parsed_separators,
        no_dup_letters: cli.no_dup_letters,
        min_length: cli.min_length,
        max_length: cli.max_length,
        seed: effective_seed(cli.seed),
        quiet: cli.quiet,
    })
}

/// A concrete seed for every run: the user's, or one drawn from entropy and
/// echoed in the meta so the run can be replayed.
fn effective_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| rand::thread_rng().gen())
}

fn wordlist_label(cli: &Cli) -> String {
    match &cli.wordlist {
        Some(path) => path.display().to_string(),
        None => "builtin".to_string(),
    }
}

fn load_source(cli: &Cli) -> anyhow::Result<String> {
    match &cli.wordlist {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("cannot read word list {}: {}", path.display(), e)),
        None => Ok(wordpool::BUILTIN_WORDLIST.to_string()),
    }
}
