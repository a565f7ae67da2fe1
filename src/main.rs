//! `autodiag`: query the built-in vehicle diagnostic knowledge base.
//!
//! Logging goes to stderr and is controlled by `AUTODIAG_LOG`
//! (e.g. `AUTODIAG_LOG=autodiag_retrieval=debug`), default `warn`.

use std::{fs, path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use autodiag_retrieval::{
    run_evaluation, EngineConfig, InferenceEngine, InferenceResult, KnowledgeBase,
};

#[derive(Parser, Debug)]
#[command(name = "autodiag")]
#[command(about = "Vehicle diagnostic retrieval over a built-in knowledge base", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON engine config file; missing keys keep their defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Answer a free-text question or trouble code
    Query {
        text: String,

        /// Number of results (defaults to the configured value)
        #[arg(short = 'k', long)]
        top_k: Option<usize>,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run the built-in labeled queries and report metrics
    Eval {
        #[arg(long)]
        json: bool,
    },
    /// Show corpus and index figures
    Stats {
        /// Also list the N rarest terms
        #[arg(long, default_value_t = 0)]
        rare_terms: usize,
    },
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_env("AUTODIAG_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let layer = if json {
        fmt::layer().json().with_writer(std::io::stderr).boxed()
    } else {
        fmt::layer().with_writer(std::io::stderr).boxed()
    };
    tracing_subscriber::registry().with(layer).with(filter).init();
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<EngineConfig> {
    let Some(path) = path else {
        return Ok(EngineConfig::default());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    EngineConfig::from_json_str(&raw).with_context(|| format!("invalid config {}", path.display()))
}

fn print_result(result: &InferenceResult) {
    println!("{}", result.explanation.summary);
    println!(
        "category: {} ({:.0}%)",
        result.classification.category.label(),
        result.classification.confidence * 100.0
    );
    for (rank, m) in result.matches.iter().enumerate() {
        println!(
            "{:>2}. [{:.3} {}] {} ({})",
            rank + 1,
            m.relevance_score,
            m.confidence.as_str(),
            m.entry.title,
            m.entry.id
        );
    }
    for line in &result.explanation.reasoning {
        println!("  - {line}");
    }
    println!("({:.2} ms)", result.processing_time_ms);
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let config = load_config(cli.config.as_ref())?;
    let mut engine = InferenceEngine::new(Arc::new(KnowledgeBase::builtin()), config)?;

    match cli.command {
        Commands::Query { text, top_k, json } => {
            let top_k = top_k.unwrap_or(engine.config().default_top_k);
            let result = engine.query(&text, top_k)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_result(&result);
            }
        }
        Commands::Eval { json } => {
            let summary = run_evaluation(&mut engine)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print!("{summary}");
            }
        }
        Commands::Stats { rare_terms } => {
            engine.initialize()?;
            let stats = engine.stats()?;
            println!("{}", serde_json::to_string_pretty(&stats)?);
            for (term, idf) in engine.rare_terms(rare_terms) {
                println!("{idf:.4}  {term}");
            }
        }
    }
    Ok(())
}
