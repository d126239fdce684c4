//! Headless battle runner
//!
//! Resolves an army-vs-army battle from the command line and prints a
//! text or JSON report. Useful for balance checks and seed hunting.

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crownmarch::battle::{resolve_battle, BattleResult, BattleState};
use crownmarch::creature::{ArmyStack, CreatureLibrary};

/// Headless battle runner - resolve a creature-stack battle
#[derive(Parser, Debug)]
#[command(name = "battle_runner")]
#[command(about = "Resolve a battle between two creature armies and report the result")]
struct Args {
    /// Attacker army as comma-separated id:quantity pairs
    #[arg(long, default_value = "griffin:12,archer:30")]
    attackers: String,

    /// Defender army as comma-separated id:quantity pairs
    #[arg(long, default_value = "pikeman:40,wolf_rider:20")]
    defenders: String,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Output format: text or json
    #[arg(long, default_value = "text")]
    format: String,

    /// Print the full combat log
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[derive(Serialize)]
struct StackReport {
    name: String,
    quantity: u32,
}

#[derive(Serialize)]
struct BattleReport {
    result: String,
    rounds: u32,
    attacker_survivors: Vec<StackReport>,
    defender_survivors: Vec<StackReport>,
    seed: u64,
}

fn parse_army(library: &CreatureLibrary, spec: &str) -> crownmarch::core::Result<Vec<ArmyStack>> {
    let mut army = Vec::new();
    for part in spec.split(',').filter(|part| !part.trim().is_empty()) {
        let (id, quantity) = part.trim().split_once(':').ok_or_else(|| {
            crownmarch::core::GameError::InvalidAction(format!(
                "army entry '{part}' is not id:quantity"
            ))
        })?;
        let quantity: u32 = quantity.parse().map_err(|_| {
            crownmarch::core::GameError::InvalidAction(format!(
                "quantity '{quantity}' is not a number"
            ))
        })?;
        army.push(library.stack(id.trim(), quantity)?);
    }
    Ok(army)
}

fn survivors<'a>(units: impl Iterator<Item = &'a crownmarch::battle::BattleUnit>) -> Vec<StackReport> {
    units
        .filter(|unit| unit.is_alive())
        .map(|unit| StackReport {
            name: unit.name().to_string(),
            quantity: unit.quantity,
        })
        .collect()
}

fn result_label(result: BattleResult) -> &'static str {
    match result {
        BattleResult::AttackerWins => "attacker_wins",
        BattleResult::DefenderWins => "defender_wins",
        BattleResult::Retreat => "retreat",
        BattleResult::Pending => "pending",
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let library = CreatureLibrary::builtin();
    let attackers = parse_army(&library, &args.attackers).unwrap_or_else(|e| {
        eprintln!("Bad attacker army: {e}");
        std::process::exit(1);
    });
    let defenders = parse_army(&library, &args.defenders).unwrap_or_else(|e| {
        eprintln!("Bad defender army: {e}");
        std::process::exit(1);
    });

    let mut state = BattleState::new(&attackers, &defenders);
    let result = resolve_battle(&mut state, &mut rng);

    let report = BattleReport {
        result: result_label(result).to_string(),
        rounds: state.round(),
        attacker_survivors: survivors(state.attacker_units()),
        defender_survivors: survivors(state.defender_units()),
        seed,
    };

    if args.format == "json" {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Failed to serialize report: {e}");
                std::process::exit(1);
            }
        }
    } else {
        if args.verbose {
            for line in state.log() {
                println!("{line}");
            }
            println!();
        }
        println!("Result: {} (seed {})", report.result, report.seed);
        println!("Rounds fought: {}", report.rounds);
        for (label, side) in [
            ("Attacker", &report.attacker_survivors),
            ("Defender", &report.defender_survivors),
        ] {
            if side.is_empty() {
                println!("{label}: wiped out");
            } else {
                let stacks: Vec<String> = side
                    .iter()
                    .map(|stack| format!("{} {}", stack.quantity, stack.name))
                    .collect();
                println!("{label}: {}", stacks.join(", "));
            }
        }
    }
}
