use rf_engine::{replay, BoundedFrontierSearch, ExhaustiveSearch};
use rf_optimizer::{combo_count, LoadoutOptimizer};
use rf_types::Skill;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let roster = vec![
        Skill::new("Firebolt", 1.0, 6.0, 120.0).with_gear_options(vec![0.0, 25.0]),
        Skill::new("Shard", 2.0, 8.0, 150.0).with_gear_options(vec![0.0, 40.0]),
        Skill::new("Spark", 1.0, 2.0, 30.0),
    ];
    let time_limit = 12.0;

    println!(
        "Sweeping {} gear combinations over a {time_limit} second window",
        combo_count(&roster).unwrap_or(0)
    );

    // Exact sweep: small roster, short window, so branch-and-bound is fine.
    let exact = LoadoutOptimizer::new(Box::new(ExhaustiveSearch::new()));
    let outcome = exact.optimize(&roster, time_limit)?;
    println!(
        "[{}] damage {} (dps {:.1}) with gear {}",
        outcome.strategy, outcome.best.plan.total_damage, outcome.best.dps, outcome.best.gear
    );

    // Approximate sweep with a tight retention budget for comparison.
    let approx = LoadoutOptimizer::new(Box::new(BoundedFrontierSearch::new().with_retention(8)));
    let outcome_approx = approx.optimize(&roster, time_limit)?;
    println!(
        "[{}] damage {} (dps {:.1}) with gear {}",
        outcome_approx.strategy,
        outcome_approx.best.plan.total_damage,
        outcome_approx.best.dps,
        outcome_approx.best.gear
    );

    // Replay the winning rotation to see the cast timings.
    let timeline = replay(
        &roster,
        &outcome.best.gear,
        &outcome.best.plan.sequence,
        time_limit,
    )?;
    println!("Winning rotation:");
    for event in &timeline.events {
        println!("  {:>5.2} - {:>5.2}  {}", event.start, event.end, event.skill);
    }

    Ok(())
}
