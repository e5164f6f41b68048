//! `meadow`: headless run of the simulation on a hand-drawn dungeon.
//!
//! The hero walks a scripted loop while consumers and predators live out
//! their lives.  Halfway through, the level is regenerated and the new
//! world swapped in through the world slot.
//!
//! Environment:
//!   MEADOW_STRATEGY  sequential | locked | threads | pool | pool:<n>
//!   MEADOW_FRAMES    frames to run (default 1200)
//!   MEADOW_SEED      world seed (default 42)
//!   RUST_LOG         tracing filter (default info)
//!
//! Run with:
//!   MEADOW_STRATEGY=pool cargo run -p meadow --release

mod dungeon;

use std::env;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use tracing::info;
use tracing_subscriber::EnvFilter;

use meadow_core::WorldConfig;
use meadow_sim::{Census, ExecutionStrategy, FrameObserver, FrameStats, Sim, SimBuilder};
use meadow_systems::InputSnapshot;

// ── Constants ─────────────────────────────────────────────────────────────────

const DT:            f32 = 1.0 / 60.0;
const REPORT_EVERY:  u64 = 300;
/// Frames the hero walks in one direction before turning.
const LEG_FRAMES:    u64 = 90;

// ── Observer ──────────────────────────────────────────────────────────────────

#[derive(Default)]
struct Totals {
    births:       usize,
    kills:        usize,
    starved:      usize,
    food_eaten:   usize,
    food_spawned: usize,
    hero_moves:   usize,
    swaps:        u64,
}

impl FrameObserver for Totals {
    fn on_frame_end(&mut self, stats: &FrameStats) {
        self.births += stats.births;
        self.kills += stats.kills;
        self.starved += stats.starved;
        self.food_eaten += stats.food_eaten;
        self.food_spawned += stats.food_spawned;
        self.hero_moves += stats.hero_moves;
    }

    fn on_world_swapped(&mut self, epoch: u64) {
        self.swaps = epoch;
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    let strategy: ExecutionStrategy = env_or("MEADOW_STRATEGY", ExecutionStrategy::Sequential)?;
    let frames: u64 = env_or("MEADOW_FRAMES", 1200)?;
    let seed: u64 = env_or("MEADOW_SEED", 42)?;
    let config = WorldConfig { seed, ..WorldConfig::default() };

    let grid = Arc::new(dungeon::level(0).context("level 0 failed to parse")?);
    let sim = SimBuilder::new(config.clone())
        .grid(grid.clone())
        .strategy(strategy)
        .populate(true)
        .build()?;
    {
        let world = sim.world();
        let mut w = world.lock().map_err(|_| anyhow!("world lock poisoned"))?;
        dungeon::lay_tiles(&mut w, &grid);
    }
    let start = census(&sim)?;
    info!(
        %strategy,
        frames,
        seed,
        consumers = start.consumers,
        predators = start.predators,
        food = start.food,
        "run_started"
    );

    let mut totals = Totals::default();
    let started = Instant::now();
    for frame in 0..frames {
        if frames > 1 && frame == frames / 2 {
            regenerate(&sim, &config, &mut totals)?;
        }
        let stats = sim.step(&scripted_input(frame), DT, &mut totals)?;
        if frame % REPORT_EVERY == 0 {
            let c = census(&sim)?;
            info!(
                frame = stats.frame,
                heroes = c.heroes,
                consumers = c.consumers,
                predators = c.predators,
                food = c.food,
                "population"
            );
        }
    }
    let elapsed = started.elapsed();

    let end = census(&sim)?;
    println!("strategy      : {strategy}");
    println!("frames        : {frames} in {:.2?} ({:.0} fps)", elapsed, frames as f64 / elapsed.as_secs_f64().max(1e-9));
    println!("worlds        : {}", totals.swaps + 1);
    println!("hero          : {} moves, {}", totals.hero_moves, if end.heroes > 0 { "alive" } else { "eaten" });
    println!("npcs          : {} consumers, {} predators", end.consumers, end.predators);
    println!("births/kills  : {} / {}", totals.births, totals.kills);
    println!("starved       : {}", totals.starved);
    println!("food          : {} spawned, {} eaten, {} on the ground", totals.food_spawned, totals.food_eaten, end.food);
    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_names(true)
        .init();
}

/// Parse `key` from the environment, or fall back to `default` if unset.
fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw.parse().with_context(|| format!("{key}={raw:?} is not valid")),
        Err(_) => Ok(default),
    }
}

/// A square loop: right, down, left, up.
fn scripted_input(frame: u64) -> InputSnapshot {
    let mut input = InputSnapshot::default();
    match (frame / LEG_FRAMES) % 4 {
        0 => input.right = true,
        1 => input.down = true,
        2 => input.left = true,
        _ => input.up = true,
    }
    input
}

/// Build the next level, populate it, and swap it in.
fn regenerate(sim: &Sim, config: &WorldConfig, totals: &mut Totals) -> Result<()> {
    let generation = sim.slot().epoch() + 1;
    let grid = Arc::new(dungeon::level(generation).context("next level failed to parse")?);
    let next_config = WorldConfig { seed: config.seed.wrapping_add(generation), ..config.clone() };
    let mut world = SimBuilder::new(next_config)
        .grid(grid.clone())
        .populate(true)
        .build_world()?;
    dungeon::lay_tiles(&mut world, &grid);
    sim.swap_world(world, totals);
    Ok(())
}

fn census(sim: &Sim) -> Result<Census> {
    let world = sim.world();
    let w = world.lock().map_err(|_| anyhow!("world lock poisoned"))?;
    Ok(w.census())
}
