//! Task entry point: runs the harvest pipeline with an outer retry loop.

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

use newsharvest::utils::constants::TASK_ATTEMPTS;
use newsharvest::SessionController;

mod cli;

use cli::{Cli, Payload};

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt().with_env_filter(filter).with_target(false).init();

    let args = Cli::parse();
    let (search_phrase, months) = resolve_parameters(&args)?;
    info!(%search_phrase, months, url = %args.url, "starting harvest task");

    let started = Instant::now();
    let mut attempts_used = 0;
    let mut succeeded = false;

    for attempt in 1..=TASK_ATTEMPTS {
        attempts_used = attempt;

        // A fresh controller per attempt: the pipeline restarts from
        // scratch, there is no resume-from-checkpoint.
        let mut controller = SessionController::new(&args.output_dir)
            .context("failed to prepare output directories")?;

        match controller.run(&args.url, &search_phrase, months).await {
            Ok(path) => {
                info!("report written to {}", path.display());
                succeeded = true;
                break;
            }
            Err(e) => {
                error!("attempt {attempt} failed: {e}");
                if attempt == TASK_ATTEMPTS {
                    error!("max retries reached, task failed");
                }
            }
        }
    }

    info!(
        "task completed in {} attempts and {:.2} seconds",
        attempts_used,
        started.elapsed().as_secs_f64()
    );

    if !succeeded {
        anyhow::bail!("harvest task failed after {TASK_ATTEMPTS} attempts");
    }
    Ok(())
}

/// Flags provide the defaults; an optional JSON work item overrides them.
fn resolve_parameters(args: &Cli) -> Result<(String, u32)> {
    let payload = match &args.payload {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read payload {}", path.display()))?;
            serde_json::from_str::<Payload>(&raw)
                .with_context(|| format!("failed to parse payload {}", path.display()))?
        }
        None => Payload::default(),
    };

    let search_phrase = payload
        .search_phrase
        .unwrap_or_else(|| args.search_phrase.clone());
    let months = payload.months.unwrap_or(args.months);
    Ok((search_phrase, months))
}
