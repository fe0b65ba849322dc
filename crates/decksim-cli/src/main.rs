mod logging;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use decksim_core::{parse_combo, parse_deck};
use decksim_engine::{Session, SimRequest, default_worker_count};
use tracing::warn;

/// Monte Carlo estimator for the probability of drawing a card combo.
#[derive(Debug, Parser)]
#[command(
    name = "decksim",
    version,
    about = "Estimates the probability that a random hand satisfies a combo"
)]
struct Cli {
    /// Path to the deck list (`<count> <card name>` per line).
    #[arg(short, long, value_name = "FILE")]
    deck: PathBuf,

    /// Path to the combo list (one AND-group per line).
    #[arg(short, long, value_name = "FILE")]
    combo: PathBuf,

    /// Cards drawn per trial.
    #[arg(long, default_value_t = 5)]
    hand_size: usize,

    /// Number of random trials.
    #[arg(long, default_value_t = 10_000, value_parser = clap::value_parser!(u64).range(1..))]
    trials: u64,

    /// Worker threads (defaults to available parallelism minus one).
    #[arg(long, value_name = "COUNT")]
    workers: Option<usize>,

    /// Emit the result as a JSON object instead of text.
    #[arg(long)]
    json: bool,

    /// After the run, print the result cache as a JSON list of
    /// `[fingerprint, probability]` pairs, oldest first.
    #[arg(long)]
    dump_cache: bool,
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    if cli.hand_size == 0 {
        bail!("hand size must be positive");
    }
    if let Some(0) = cli.workers {
        bail!("worker count must be positive");
    }

    let deck_text = fs::read_to_string(&cli.deck)
        .with_context(|| format!("reading deck from {}", cli.deck.display()))?;
    let combo_text = fs::read_to_string(&cli.combo)
        .with_context(|| format!("reading combo from {}", cli.combo.display()))?;

    let deck = parse_deck(&deck_text);
    let combo = parse_combo(&combo_text);
    for warning in deck.warnings.iter().chain(&combo.warnings) {
        warn!("{warning}");
    }
    if deck.deck.is_empty() {
        bail!("deck is empty after parsing");
    }
    if combo.combo.is_empty() {
        bail!("combo is empty after parsing");
    }

    let workers = cli.workers.unwrap_or_else(default_worker_count);
    let mut session = Session::with_workers(workers);
    let outcome = session.simulate(&SimRequest {
        deck: deck.deck.clone(),
        combo: combo.combo,
        hand_size: cli.hand_size,
        trials: cli.trials,
        skip_if_unchanged: false,
    });
    let probability = outcome
        .probability()
        .expect("request without skip detection always yields a probability");

    if cli.json {
        let report = serde_json::json!({
            "deck_size": deck.deck.size(),
            "hand_size": cli.hand_size,
            "trials": cli.trials,
            "probability": probability,
        });
        println!("{report}");
    } else {
        println!("Result: {probability}");
    }
    if cli.dump_cache {
        let dump = session
            .cache()
            .to_json()
            .context("serializing result cache")?;
        println!("{dump}");
    }
    Ok(())
}
