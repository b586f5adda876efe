//! Voice Ledger command-line entry point
//!
//! Parses dictated transcripts into structured commands and prints one JSON
//! object per transcript on stdout. Logs go to stderr.

use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use voice_ledger_config::{load_settings, Settings};
use voice_ledger_core::Language;
use voice_ledger_text_processing::{example_phrases, VoiceCommandParser};

#[derive(Parser)]
#[command(
    name = "voice-ledger",
    version,
    about = "Turn dictated bookkeeping phrases into structured commands."
)]
struct Cli {
    /// Transcript language (en, hi, mr); defaults to parser.default_language
    #[arg(short, long)]
    language: Option<Language>,

    /// YAML file with extra category keywords
    #[arg(long = "category-keywords")]
    category_keywords: Option<String>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Transcripts to parse; one per stdin line when omitted
    transcripts: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Priority: env vars > config/{env}.yaml > config/default.yaml > defaults
    let env = std::env::var("VOICE_LEDGER_ENV").ok();
    let mut settings = match load_settings(env.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            // Tracing not yet initialized
            eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
            Settings::default()
        }
    };
    if let Some(path) = cli.category_keywords {
        settings.parser.category_keywords_path = Some(path);
    }

    init_tracing(&settings);

    let keywords = settings
        .load_category_keywords()
        .context("Failed to load category keywords")?;
    let parser = VoiceCommandParser::with_category_keywords(&keywords)
        .context("Failed to build command parser")?;
    let language = cli.language.unwrap_or(settings.parser.default_language);

    tracing::debug!(
        language = %language,
        extra_categories = keywords.len(),
        "Parser ready"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.transcripts.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("Failed to read stdin")?;
            if line.trim().is_empty() {
                continue;
            }
            emit(&parser, &line, language, cli.pretty, &mut out)?;
        }
    } else {
        for transcript in &cli.transcripts {
            emit(&parser, transcript, language, cli.pretty, &mut out)?;
        }
    }

    Ok(())
}

/// Parse one transcript and write its JSON form
fn emit(
    parser: &VoiceCommandParser,
    transcript: &str,
    language: Language,
    pretty: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let command = parser.parse(transcript, language);

    let json = if pretty {
        serde_json::to_string_pretty(&command)?
    } else {
        serde_json::to_string(&command)?
    };
    writeln!(out, "{}", json)?;

    if !command.is_understood() {
        eprintln!("Could not understand {:?}. Try phrases like:", transcript);
        for phrase in example_phrases(language) {
            eprintln!("  {}", phrase);
        }
    }
    Ok(())
}

/// Initialize tracing on stderr
fn init_tracing(config: &Settings) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = &config.observability.log_level;
        format!("voice_ledger={}", level).into()
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);
    let fmt_layer = if config.observability.log_json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer().with_writer(io::stderr).boxed()
    };
    subscriber.with(fmt_layer).init();
}
