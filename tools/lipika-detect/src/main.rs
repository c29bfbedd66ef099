//! Scheme detection from the command line.
//!
//! Classifies each argument, or each non-blank stdin line when no
//! arguments are given, and prints one result per input.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use lipika_core::{Detection, Detector, DetectorConfig, Scheme, Signature};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// `<scheme>\t<input>`
    Plain,
    /// One JSON object per line
    Json,
}

/// CLI arguments
#[derive(Parser)]
#[command(name = "lipika-detect")]
#[command(about = "Detect the script or romanization scheme of Sanskrit text")]
#[command(version)]
struct Cli {
    /// Texts to classify; reads stdin line by line when omitted
    texts: Vec<String>,

    /// Output format
    #[arg(short, long, env = "LIPIKA_FORMAT", value_enum, default_value_t = Format::Plain)]
    format: Format,

    /// Scheme reported for bigrams shared by ITRANS and Velthuis
    #[arg(long, env = "LIPIKA_AMBIGUOUS", default_value = "ITRANS")]
    ambiguous: Scheme,

    /// Scheme reported when no signature matches
    #[arg(long, env = "LIPIKA_FALLBACK", default_value = "HK")]
    fallback: Scheme,
}

#[derive(Debug, Serialize)]
struct DetectOutput<'a> {
    input: &'a str,
    scheme: Scheme,
    signature: Signature,
    #[serde(skip_serializing_if = "Option::is_none")]
    char: Option<char>,
    #[serde(skip_serializing_if = "Option::is_none")]
    offset: Option<usize>,
}

impl<'a> DetectOutput<'a> {
    fn new(input: &'a str, detection: Detection) -> Self {
        Self {
            input,
            scheme: detection.scheme,
            signature: detection.signature,
            char: detection.char,
            offset: detection.offset,
        }
    }
}

fn emit(out: &mut impl Write, format: Format, input: &str, detection: Detection) -> Result<()> {
    match format {
        Format::Plain => writeln!(out, "{}\t{}", detection.scheme, input)?,
        Format::Json => {
            let line = serde_json::to_string(&DetectOutput::new(input, detection))?;
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = DetectorConfig::new()
        .with_ambiguous_roman(cli.ambiguous)
        .and_then(|c| c.with_fallback(cli.fallback))
        .context("invalid detector options")?;
    let detector = Detector::with_config(config).context("failed to build detector")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !cli.texts.is_empty() {
        for text in &cli.texts {
            emit(&mut out, cli.format, text, detector.explain(text))?;
        }
        return Ok(());
    }

    debug!("reading stdin");
    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read stdin")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        emit(&mut out, cli.format, line, detector.explain(line))?;
    }

    Ok(())
}
