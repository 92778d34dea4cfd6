//! Demo loadout planner.
//!
//! Sweeps a skill roster for the highest-damage gear assignment and cast
//! ordering, then prints the winning rotation as a timeline.
//!
//! Usage: `rf-planner [roster.json]`. Without an argument a built-in demo
//! roster is used. Environment knobs:
//! - `RF_TIME_LIMIT`: window length in seconds (default 20).
//! - `RF_STRATEGY`: `frontier` (default) or `exhaustive`.
//! - `RF_PARALLEL`: set to `1` to evaluate combinations on a rayon pool.

use anyhow::Context;
use rf_engine::{replay, BoundedFrontierSearch, ExhaustiveSearch, ScheduleSearch};
use rf_optimizer::{combo_count, LoadoutOptimizer};
use rf_types::Skill;

fn demo_roster() -> Vec<Skill> {
    vec![
        Skill::new("Fireball", 1.0, 6.7, 10300.0).with_gear_options(vec![15.0]),
        Skill::new("Fire Storm", 3.0, 15.0, 11100.0).with_gear_options(vec![30.0]),
        Skill::new("Ice Blast", 4.0, 20.0, 14000.0),
        Skill::new("Ice Shards", 2.0, 15.0, 11765.0).with_gear_options(vec![30.0]),
        Skill::new("FrostBite", 3.0, 20.0, 9500.0),
        Skill::new("Pet", 1.0, 15.0, 2400.0),
        Skill::new("Offhand", 2.0, 90.0, 9000.0),
        Skill::new("Mainhand", 1.0, 45.0, 9000.0),
    ]
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let roster = match std::env::args().nth(1) {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("reading roster file {path}"))?;
            serde_json::from_str(&raw).with_context(|| format!("parsing roster file {path}"))?
        }
        None => demo_roster(),
    };

    let time_limit: f64 = match std::env::var("RF_TIME_LIMIT") {
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("RF_TIME_LIMIT must be a number, got '{raw}'"))?,
        Err(_) => 20.0,
    };

    let strategy: Box<dyn ScheduleSearch> = match std::env::var("RF_STRATEGY").as_deref() {
        Ok("exhaustive") => Box::new(ExhaustiveSearch::new()),
        Ok("frontier") | Err(_) => Box::new(BoundedFrontierSearch::new()),
        Ok(other) => anyhow::bail!("unknown RF_STRATEGY '{other}' (use frontier or exhaustive)"),
    };

    let optimizer = LoadoutOptimizer::new(strategy);
    let outcome = if std::env::var("RF_PARALLEL").is_ok_and(|v| v == "1") {
        optimizer.optimize_parallel(&roster, time_limit)?
    } else {
        optimizer.optimize(&roster, time_limit)?
    };

    println!("=== Best DPS Loadout ===");
    println!("Strategy:         {}", outcome.strategy);
    println!("Time limit:       {} s", outcome.time_limit);
    println!(
        "Combos evaluated: {} of {}",
        outcome.combos_evaluated,
        combo_count(&roster).map_or_else(|| "?".to_string(), |n| n.to_string())
    );
    println!("Total damage:     {}", outcome.best.plan.total_damage);
    println!("DPS:              {:.2}", outcome.best.dps);
    println!("Gear percents:    {}", outcome.best.gear);

    print!("Cast sequence:    ");
    for name in &outcome.best.plan.sequence {
        print!("{name} -> ");
    }
    println!("END");

    let timeline = replay(&roster, &outcome.best.gear, &outcome.best.plan.sequence, time_limit)?;
    println!("Timeline:");
    for event in &timeline.events {
        println!("  {:>7.2} - {:>7.2}  {}", event.start, event.end, event.skill);
    }

    Ok(())
}
