use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "wordpick", version, about = "Wordlist passphrase generator")]
pub struct Cli {
    #[arg(
        short = 'w',
        long,
        default_value_t = 1,
        help = "Number of words to pick (1-20)"
    )]
    pub words: usize,

    #[arg(short = 'l', long, help = "Only pick words starting with this letter")]
    pub letter: Option<char>,

    #[arg(short = 'c', long, help = "Apply the capitalization policy")]
    pub caps: bool,

    #[arg(
        short = 's',
        long,
        help = "Comma-separated separator kinds: dots, dashes, underscores, numbers, random ('.', '-', '_' shorthand)"
    )]
    pub separators: Option<String>,

    #[arg(long, help = "Require a distinct starting letter for every word")]
    pub no_dup_letters: bool,

    #[arg(long, help = "Minimum word length")]
    pub min_length: Option<usize>,

    #[arg(long, help = "Maximum word length")]
    pub max_length: Option<usize>,

    #[arg(long, help = "Seed the random source for reproducible output")]
    pub seed: Option<u64>,

    #[arg(short = 'q', long, help = "Suppress warnings")]
    pub quiet: bool,

    #[arg(long, help = "Emit a random unique identifier instead of words")]
    pub uuid: bool,

    #[arg(long, help = "Dump the word list verbatim and exit")]
    pub all_words: bool,

    #[arg(long, help = "Word list file to use instead of the built-in list")]
    pub wordlist: Option<PathBuf>,

    #[arg(long, help = "Output machine-readable JSON")]
    pub json: bool,
}

/// Mutually exclusive run modes, resolved once at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunMode {
    Words,
    Uuid,
    AllWords,
}

impl Cli {
    pub fn mode(&self) -> RunMode {
        if self.all_words {
            RunMode::AllWords
        } else if self.uuid {
            RunMode::Uuid
        } else {
            RunMode::Words
        }
    }
}
