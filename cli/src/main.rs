//! CLI entrypoint for eightball
//!
//! This is the main binary that wires together all layers using
//! dependency injection: a cache adapter, a canned answer source, and
//! the resolve-answer use case.

use anyhow::{Result, bail};
use clap::Parser;
use eightball_application::{Cache, ResolveAnswerUseCase};
use eightball_domain::{AnswerResponse, DomainError, Question};
use eightball_infrastructure::{CannedAnswerSource, ConfigLoader, JsonFileCache, MemoryCache};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Ask the Magic 8 Ball a yes/no question.
///
/// Answers are cached by question text: ask the same question twice and
/// you get the same answer, unless the 8 ball told you to ask again later.
#[derive(Parser, Debug)]
#[command(name = "eightball", version, about)]
struct Cli {
    /// The question to ask
    question: Option<String>,

    /// Path to a config file (overrides discovered configs)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip config file discovery, use built-in defaults
    #[arg(long)]
    no_config: bool,

    /// Do not persist answers, keep the cache in memory only
    #[arg(long)]
    no_cache: bool,

    /// Seed the answer selection for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Print only the answer text instead of the JSON document
    #[arg(short, long)]
    plain: bool,

    /// Verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!(e))?
    };

    // Blank input is rejected here at the boundary; the resolver only
    // ever sees validated questions.
    let question = match cli.question.and_then(Question::try_new) {
        Some(q) => q,
        None => bail!(DomainError::InvalidQuestion(
            "Please ask a question.".to_string()
        )),
    };

    // === Dependency Injection ===
    let cache: Arc<dyn Cache> = if cli.no_cache {
        Arc::new(MemoryCache::new())
    } else {
        let path = config
            .cache
            .path
            .clone()
            .unwrap_or_else(JsonFileCache::default_path);
        info!("Answer cache at {}", path.display());
        Arc::new(JsonFileCache::open(path))
    };

    let answers = config.canned_answers();
    let source = Arc::new(match cli.seed {
        Some(seed) => CannedAnswerSource::with_seed(answers, seed)?,
        None => CannedAnswerSource::new(answers)?,
    });

    let use_case =
        ResolveAnswerUseCase::new(cache, source).with_policy(config.resolver_policy());

    let answer = use_case.execute(&question).await?;

    if cli.plain {
        println!("{answer}");
    } else {
        let response = AnswerResponse::from(answer);
        println!("{}", serde_json::to_string(&response)?);
    }

    Ok(())
}
