//! Demo driver for the behavior-tree crate.
//!
//! Builds a guard agent's tree and ticks it once per simulation step while a
//! scripted enemy walks in and out of view.
//! Run with: `cargo run -p bt-demo -- --ticks 20 --debug`

mod actions;
mod trees;

use anyhow::Result;
use behavior_tree::{Tree, TreeConfig};
use clap::Parser;
use tracing_subscriber::filter::Directive;

use actions::Agent;

/// Searches queued each time the guard loses sight of the enemy.
const SEARCHES_PER_LOSS: u32 = 3;

/// Tick a guard behavior tree
#[derive(Parser, Debug)]
#[command(name = "bt-demo")]
#[command(about = "Tick a sample guard behavior tree", long_about = None)]
struct Cli {
    /// Number of simulation steps
    #[arg(short, long, default_value_t = 12)]
    ticks: u32,

    /// Log every named node's status after each tick
    #[arg(long)]
    debug: bool,

    /// Seed for the random nodes (entropy when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum health of the guard
    #[arg(long, default_value_t = 100)]
    max_health: u32,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = TreeConfig::from_env();
    let config = config.with_debug(config.debug || cli.debug);

    let mut filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());
    if config.debug {
        filter = filter.add_directive("behavior_tree=debug".parse::<Directive>()?);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let (root, flags) = trees::guard(cli.seed)?;
    let mut tree = Tree::try_new(root)?.with_config(config);
    let mut agent = Agent::new(cli.max_health);

    for step in 0..cli.ticks {
        agent.observe_enemy(enemy_in_view(step), SEARCHES_PER_LOSS);
        flags.update(&agent);

        let status = tree.tick(&mut agent);
        tracing::info!(
            step,
            %status,
            health = agent.health,
            enemy_visible = agent.enemy_visible,
            "tick complete"
        );
    }

    Ok(())
}

/// The enemy shows up for four steps out of every ten.
fn enemy_in_view(step: u32) -> bool {
    (2..6).contains(&(step % 10))
}
