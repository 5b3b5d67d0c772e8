use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{debug, info};
use serde::Serialize;

use palindrome_pairs::{
    find_pairs_with, load_words, Pair, PairConfig, TrieStrategy, WordFormat, WordListOptions,
};

/// Find every ordered pair of words whose concatenation is a palindrome.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Words to pair (indices follow the order given)
    words: Vec<String>,

    /// Read the word list from a file instead of the command line
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// Word list format (default: inferred from the file extension)
    #[arg(long, value_enum)]
    format: Option<WordFormat>,

    /// Keep blank lines of a line-based list as empty words
    #[arg(long)]
    keep_blank: bool,

    /// How longer partner words are discovered
    #[arg(long, value_enum, default_value_t = TrieStrategy::PalindromesBelow)]
    strategy: TrieStrategy,

    /// Print pairs as a JSON array of [i, j] (records with --show-words)
    #[arg(long)]
    json: bool,

    /// Print the concatenated palindrome next to each pair
    #[arg(long)]
    show_words: bool,

    /// Verbose/info output (default: quiet)
    #[arg(long, short = 'v')]
    verbose: bool,

    /// Debug output
    #[arg(long)]
    debug: bool,

    /// Trace output
    #[arg(long)]
    trace: bool,
}

/// JSON output record used with `--json --show-words`.
#[derive(Debug, Serialize)]
struct PairRecord {
    i: usize,
    j: usize,
    concatenation: String,
}

fn main() {
    let args = Args::parse();
    let log_level = if args.trace {
        "trace"
    } else if args.debug {
        "debug"
    } else if args.verbose {
        "info"
    } else {
        "error"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(error) = run(&args, &mut out) {
        eprintln!("error: {error:?}");
        std::process::exit(1);
    }
}

fn collect_words(args: &Args) -> Result<Vec<String>> {
    match &args.input {
        Some(_) if !args.words.is_empty() => {
            bail!("Pass words either on the command line or with --input, not both")
        }
        Some(path) => {
            let options = WordListOptions {
                format: args.format,
                keep_blank: args.keep_blank,
            };
            load_words(path, options)
                .with_context(|| format!("Failed to load words from {}", path.display()))
        }
        None => Ok(args.words.clone()),
    }
}

fn run<W: Write>(args: &Args, out: &mut W) -> Result<Vec<Pair>> {
    let words = collect_words(args)?;
    info!("Pairing {} words with {:?}", words.len(), args.strategy);

    let pairs = find_pairs_with(&words, PairConfig::with_strategy(args.strategy));
    info!("Found {} palindrome pairs", pairs.len());

    if args.json && args.show_words {
        let records: Vec<PairRecord> = pairs
            .iter()
            .map(|&(i, j)| PairRecord {
                i,
                j,
                concatenation: format!("{}{}", words[i], words[j]),
            })
            .collect();
        serde_json::to_writer(&mut *out, &records).context("Failed to write JSON output")?;
        writeln!(out)?;
    } else if args.json {
        serde_json::to_writer(&mut *out, &pairs).context("Failed to write JSON output")?;
        writeln!(out)?;
    } else {
        for &(i, j) in &pairs {
            if args.show_words {
                writeln!(out, "{i} {j} {}{}", words[i], words[j])?;
            } else {
                writeln!(out, "{i} {j}")?;
            }
        }
    }
    debug!("Pairs: {:?}", pairs);

    Ok(pairs)
}
