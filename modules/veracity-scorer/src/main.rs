use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use veracity_common::{ArticleInput, Config};
use veracity_scorer::render::{render_dashboard, render_report};
use veracity_scorer::{Analyzer, Session};

#[derive(Parser)]
#[command(name = "veracity", about = "News article credibility analysis")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze articles in order within one session, then print the dashboard
    Analyze {
        /// Article URL to retrieve and score (repeatable)
        #[arg(long)]
        url: Vec<String>,
        /// Article text to score (repeatable)
        #[arg(long)]
        text: Vec<String>,
        /// File containing article text (repeatable)
        #[arg(long)]
        file: Vec<PathBuf>,
        /// Model artifact path, overrides MODEL_PATH
        #[arg(long)]
        model: Option<PathBuf>,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("veracity=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Analyze {
            url,
            text,
            file,
            model,
            json,
        } => {
            let mut inputs: Vec<ArticleInput> = Vec::new();
            inputs.extend(url.into_iter().map(ArticleInput::from_url));
            inputs.extend(text.into_iter().map(ArticleInput::from_text));
            for path in file {
                let body = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading {}", path.display()))?;
                inputs.push(ArticleInput::from_text(body));
            }

            let mut config = Config::from_env()?;
            if let Some(path) = model {
                config.model_path = path;
            }
            run_analyze(&config, inputs, json).await
        }
    }
}

async fn run_analyze(config: &Config, inputs: Vec<ArticleInput>, json: bool) -> Result<()> {
    if inputs.is_empty() {
        warn!("Please provide article text or URL.");
        return Ok(());
    }

    let analyzer = Analyzer::from_config(config)?;
    let mut session = Session::new();
    info!(session = %session.id(), articles = inputs.len(), "Session started");

    for input in &inputs {
        let report = match analyzer.analyze(input).await {
            Ok(r) => r,
            Err(e) if e.is_input_error() => {
                warn!(error = %e, "Skipping article");
                eprintln!("warning: {e}");
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        session.record(&report);

        if json {
            println!("{}", serde_json::to_string(&report)?);
        } else {
            println!("{}", render_report(&report));
        }
    }

    if session.history().is_empty() {
        return Ok(());
    }

    let summary = session.summary();
    if json {
        let distribution: Vec<_> = summary
            .distribution()
            .into_iter()
            .map(|(band, count)| serde_json::json!({ "band": band, "count": count }))
            .collect();
        println!(
            "{}",
            serde_json::json!({ "summary": summary, "distribution": distribution })
        );
    } else {
        print!("{}", render_dashboard(&summary));
        println!();
        println!("This tool provides AI-assisted credibility estimation and should not be treated as definitive fact-checking.");
    }
    Ok(())
}
