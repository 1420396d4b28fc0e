use clap::Parser;
use fleet_sim::{
    init_logging, random_scenario, writer::snapshot, DEFAULT_RANDOM_BOARD_SIZE,
    DEFAULT_RANDOM_OPERATIONS, DEFAULT_RANDOM_SHIPS,
};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

/// Run a randomly generated scenario and print a JSON summary.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, help = "Fix RNG seed for reproducible runs (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = DEFAULT_RANDOM_BOARD_SIZE)]
    size: i32,
    #[arg(long, default_value_t = DEFAULT_RANDOM_SHIPS)]
    ships: usize,
    #[arg(long, default_value_t = DEFAULT_RANDOM_OPERATIONS)]
    operations: usize,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging();

    let seed = match args.seed {
        Some(s) => s,
        None => {
            let mut seed_rng = rand::rng();
            rand::Rng::random(&mut seed_rng)
        }
    };
    let mut rng = SmallRng::seed_from_u64(seed);

    let scenario = random_scenario(&mut rng, args.size, args.ships, args.operations);
    let mut engine = scenario.engine()?;
    let report = engine.run(&scenario.operations);
    let board = engine.into_board();

    let result = json!({
        "seed": seed,
        "size": board.size(),
        "ships": board.ships().len(),
        "applied": report.applied(),
        "failed": report.failed(),
        "sunk": board.ships().len() - board.afloat(),
        "final": snapshot(&board),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
