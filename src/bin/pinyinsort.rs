use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use pinyinsort::prelude::*;
use serde_json::Value;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "pinyinsort",
    version,
    about = "Sort Hànyǔ Pīnyīn words in alphabetical order"
)]
struct Cli {
    /// Input file; reads stdin when omitted or `-`
    input: Option<PathBuf>,
    /// Input and output format
    #[arg(long, value_enum, default_value = "lines")]
    format: Format,
    /// Field holding the Pīnyīn key of each JSON object
    #[arg(short, long)]
    key: Option<String>,
    /// Reverse the sorted result
    #[arg(short, long)]
    reverse: bool,
    /// How letter case takes part in the ordering
    #[arg(long, value_enum, default_value = "folded")]
    case: CaseArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// One entry per line
    Lines,
    /// A JSON array of strings, or of objects with --key
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum CaseArg {
    /// Compare lowercased text first, break ties by case
    Folded,
    /// Compare the text exactly as written
    Exact,
}

impl From<CaseArg> for CaseMode {
    fn from(val: CaseArg) -> Self {
        match val {
            CaseArg::Folded => CaseMode::Folded,
            CaseArg::Exact => CaseMode::Exact,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let options = SortOptions::new()
        .with_reverse(cli.reverse)
        .with_case_mode(cli.case.into());

    let text = read_input(cli.input.as_ref())?;
    let output = match cli.format {
        Format::Lines => {
            if cli.key.is_some() {
                bail!("--key requires --format json");
            }
            sort_lines(&text, options)
        }
        Format::Json => sort_json(&text, cli.key.as_deref(), options)?,
    };

    let mut stdout = BufWriter::new(io::stdout().lock());
    stdout
        .write_all(output.as_bytes())
        .context("failed to write output")?;
    stdout.flush().context("failed to write output")?;
    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

fn sort_lines(text: &str, options: SortOptions) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let sorted = sort_pinyin_by_key(&lines, |line| *line, options);
    tracing::info!(entries = sorted.len(), "sorted lines");

    let mut output = String::with_capacity(text.len() + 1);
    for line in sorted {
        output.push_str(line);
        output.push('\n');
    }
    output
}

fn sort_json(text: &str, key: Option<&str>, options: SortOptions) -> Result<String> {
    let entries: Vec<Value> =
        serde_json::from_str(text).context("input is not a JSON array")?;
    let accessor = match key {
        Some(field) => KeyAccessor::field(field),
        None => KeyAccessor::identity(),
    };
    let sorted = sort_pinyin(&entries, &accessor, options)?;
    tracing::info!(entries = sorted.len(), "sorted JSON entries");

    let mut output = serde_json::to_string_pretty(&sorted)?;
    output.push('\n');
    Ok(output)
}
