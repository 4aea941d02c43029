mod config;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use werset_index::{load, ChapterEndPolicy, Corpus};
use werset_parser::ReadingPlan;
use werset_protocol::{Passage, Verse};

use crate::config::Config;

#[derive(Parser)]
#[command(author, version, about = "Resolves scripture references against a verse corpus")]
struct Cli {
    /// TOML config; defaults to config/config.toml when present
    #[arg(long, env = "WERSET_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,

    #[arg(long, value_name = "FILE")]
    books: Option<PathBuf>,

    #[arg(long, value_name = "FILE")]
    text: Option<PathBuf>,

    /// Compiled corpus, used instead of the books and text files
    #[arg(long, value_name = "FILE")]
    snapshot: Option<PathBuf>,

    /// Whole-chapter references in the last chapter run to the corpus end
    #[arg(long)]
    clamp_chapter_end: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile the books and text files into an rkyv snapshot
    Compile {
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Print the scanner's tokens
    Tokens {
        #[arg(required = true, num_args = 1..)]
        reference: Vec<String>,
    },
    /// Print the index range of a reference
    Resolve {
        #[arg(required = true, num_args = 1..)]
        reference: Vec<String>,
        #[arg(long)]
        json: bool,
    },
    /// Print the text of a reference
    Read {
        #[arg(required = true, num_args = 1..)]
        reference: Vec<String>,
        #[arg(long)]
        json: bool,
    },
    /// Print one day of the reading plan
    Day {
        day: usize,
        #[arg(long, value_name = "FILE")]
        plan: Option<PathBuf>,
    },
}

#[derive(Serialize)]
struct Resolution<'a> {
    reference: &'a str,
    verse: Verse,
    header: String,
}

#[derive(Serialize)]
struct Reading<'a> {
    #[serde(flatten)]
    passage: &'a Passage,
    text: String,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "werset=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

impl Cli {
    /// Command line flags win over the config file.
    fn settings(&self) -> anyhow::Result<Config> {
        let mut config = Config::load(self.config.as_deref())?;
        if let Some(books) = &self.books {
            config.books_path = books.clone();
        }
        if let Some(text) = &self.text {
            config.text_path = text.clone();
        }
        if let Some(snapshot) = &self.snapshot {
            config.snapshot_path = Some(snapshot.clone());
        }
        if self.clamp_chapter_end {
            config.chapter_end = config::ChapterEnd::Clamp;
        }
        Ok(config)
    }
}

fn load_sources(config: &Config) -> anyhow::Result<Corpus> {
    load::load_corpus(&config.books_path, &config.text_path).with_context(|| {
        format!(
            "error loading corpus from {} and {}",
            config.books_path.display(),
            config.text_path.display()
        )
    })
}

fn open_corpus(config: &Config) -> anyhow::Result<Corpus> {
    let corpus = match &config.snapshot_path {
        Some(path) => load::read_snapshot(path)
            .with_context(|| format!("error reading snapshot {}", path.display()))?,
        None => load_sources(config)?,
    };
    tracing::info!(verses = corpus.len(), aliases = corpus.books().len(), "corpus ready");
    Ok(corpus.with_chapter_end(ChapterEndPolicy::from(config.chapter_end)))
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn compile(config: &Config, output: &Path) -> anyhow::Result<()> {
    let corpus = load_sources(config)?;
    let written = load::write_snapshot(&corpus, output)
        .with_context(|| format!("error writing snapshot {}", output.display()))?;
    tracing::info!(output = %output.display(), bytes = written, verses = corpus.len(), "snapshot written");
    Ok(())
}

fn tokens(reference: &str) {
    for token in werset_parser::tokenize(reference) {
        println!("{:<10} {:?} {}..{}", token.kind, token.text, token.span.start, token.span.end);
    }
}

fn resolve(corpus: &Corpus, reference: &str, json: bool) -> anyhow::Result<()> {
    let verse = werset_parser::parse(reference, corpus)?;
    let header = corpus.verse_header(&verse)?;
    if json {
        return print_json(&Resolution { reference, verse, header });
    }
    if verse.is_single() {
        println!("{header}\t{}", verse.start());
    } else {
        println!("{header}\t{}..={}", verse.start(), verse.end());
    }
    Ok(())
}

fn read(corpus: &Corpus, reference: &str, json: bool) -> anyhow::Result<()> {
    let passage = werset_parser::lookup(corpus, reference)?;
    let text = passage.render();
    if json {
        return print_json(&Reading { passage: &passage, text });
    }
    println!("{text}");
    Ok(())
}

fn day(corpus: &Corpus, config: &Config, day: usize, plan: Option<&Path>) -> anyhow::Result<()> {
    let Some(path) = plan.or(config.plan_path.as_deref()) else {
        bail!("no reading plan configured, pass --plan or set plan_path");
    };
    let references = load::load_plan(path)
        .with_context(|| format!("error loading plan {}", path.display()))?;
    let plan = ReadingPlan::compile(corpus, references);
    for passage in plan.day(day)? {
        println!("{passage}\n");
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = cli.settings()?;

    match &cli.command {
        Command::Compile { output } => compile(&config, output),
        Command::Tokens { reference } => {
            tokens(&reference.join(" "));
            Ok(())
        }
        Command::Resolve { reference, json } => {
            resolve(&open_corpus(&config)?, &reference.join(" "), *json)
        }
        Command::Read { reference, json } => read(&open_corpus(&config)?, &reference.join(" "), *json),
        Command::Day { day: n, plan } => day(&open_corpus(&config)?, &config, *n, plan.as_deref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from([
            "werset",
            "--config",
            "/nonexistent/werset.toml",
            "tokens",
            "1kor",
        ]);
        assert!(cli.settings().is_err());

        let cli = Cli::parse_from([
            "werset",
            "--books",
            "b.txt",
            "--snapshot",
            "c.rkyv",
            "--clamp-chapter-end",
            "read",
            "1kor",
            "1,1",
        ]);
        let config = cli.settings().unwrap();
        assert_eq!(config.books_path, PathBuf::from("b.txt"));
        assert_eq!(config.snapshot_path, Some(PathBuf::from("c.rkyv")));
        assert_eq!(config.chapter_end, config::ChapterEnd::Clamp);
        match cli.command {
            Command::Read { reference, json } => {
                assert_eq!(reference.join(" "), "1kor 1,1");
                assert!(!json);
            }
            _ => panic!("expected read"),
        }
    }
}
