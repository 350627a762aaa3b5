#![deny(clippy::all, clippy::pedantic)]
//! # Tag Runtime
//!
//! Headless host for the predator-prey tag scenario. Loads an optional JSON
//! scenario file, applies command-line roster overrides, then resets the
//! world for a number of seeded episodes and logs what every agent would be
//! rewarded with and observe at the start of each one.

mod survey;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tag::{RewardShaping, ScenarioFile, TagConfig, TagScenario};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Shaping {
    Disabled,
    Distance,
}

impl From<Shaping> for RewardShaping {
    fn from(value: Shaping) -> Self {
        match value {
            Shaping::Disabled => RewardShaping::Disabled,
            Shaping::Distance => RewardShaping::Distance,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "tag_runtime", about = "Survey episode starts of the predator-prey tag scenario")]
struct Args {
    /// JSON scenario file with `config` and optional `overrides`.
    #[arg(long)]
    scenario: Option<PathBuf>,
    /// Number of episodes to reset and evaluate.
    #[arg(long, default_value_t = 10)]
    episodes: usize,
    /// Seed for the reset sampler.
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, allow_negative_numbers = true)]
    num_good: Option<i64>,
    #[arg(long, allow_negative_numbers = true)]
    num_adversaries: Option<i64>,
    #[arg(long, allow_negative_numbers = true)]
    num_obstacles: Option<i64>,
    #[arg(long, value_enum)]
    shaping: Option<Shaping>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let file = match &args.scenario {
        Some(path) => ScenarioFile::from_path(path)
            .with_context(|| format!("loading scenario {}", path.display()))?,
        None => ScenarioFile::default(),
    };
    let config = resolve_config(&args, &file.config)?;
    tracing::info!(
        predators = config.num_adversaries,
        prey = config.num_good,
        obstacles = config.num_obstacles,
        shaping = ?config.shaping,
        "starting tag survey for {} episodes (seed {})",
        args.episodes,
        args.seed
    );

    let scenario = TagScenario::new(config);
    let summary = survey::run(&scenario, file.overrides.as_ref(), args.episodes, args.seed);

    tracing::info!(
        "predators: obs_size={} mean_reward={:.3}",
        summary.predators.obs_size,
        summary.predators.mean_reward(summary.episodes)
    );
    tracing::info!(
        "prey: obs_size={} mean_reward={:.3}",
        summary.prey.obs_size,
        summary.prey.mean_reward(summary.episodes)
    );
    tracing::info!(catches = summary.catches, "survey complete");

    Ok(())
}

/// Command-line counts win over the scenario file; both pass through the
/// same non-negative validation.
fn resolve_config(args: &Args, base: &TagConfig) -> Result<TagConfig> {
    let config = TagConfig::from_counts(
        args.num_good.unwrap_or_else(|| signed(base.num_good)),
        args.num_adversaries.unwrap_or_else(|| signed(base.num_adversaries)),
        args.num_obstacles.unwrap_or_else(|| signed(base.num_obstacles)),
    )?;
    let shaping = args.shaping.map_or(base.shaping, RewardShaping::from);
    Ok(config.with_shaping(shaping))
}

fn signed(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}
