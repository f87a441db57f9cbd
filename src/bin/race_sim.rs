//! Headless race simulation
//!
//! Builds the standard scenario, lets the built-in planners choose
//! actions each turn, and resolves until the race ends or the final
//! turn passes. Seeded for reproducible runs.

use std::collections::HashMap;
use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use frontier_race::actions::ActionChoice;
use frontier_race::content::{load_tech_tree, standard_tech_tree, TechTree};
use frontier_race::core::config::MAX_TURN;
use frontier_race::core::types::FactionId;
use frontier_race::core::Result;
use frontier_race::engine::resolve_turn;
use frontier_race::state::{scenario::standard_game, GameState};
use frontier_race::strategy::{plan_turn, StrategyProfile};

/// Frontier Race - headless AI-vs-AI simulation
#[derive(Parser, Debug)]
#[command(name = "race_sim")]
#[command(about = "Run a seeded race to AGI between AI planners")]
struct Args {
    /// Random seed for reproducible runs
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Tech tree TOML file (built-in tree when omitted)
    #[arg(long)]
    tech_tree: Option<PathBuf>,

    /// Print the full game log each turn instead of at the end
    #[arg(long, default_value_t = false)]
    verbose: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "frontier_race=info".into()),
        )
        .init();

    let args = Args::parse();
    let tree: TechTree = match &args.tech_tree {
        Some(path) => load_tech_tree(path)?,
        None => standard_tech_tree(),
    };

    let mut state = standard_game();
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let profiles = assign_profiles(&state);

    println!("=== FRONTIER RACE ===");
    println!("seed {}, {} factions\n", args.seed, state.factions.len());

    while !state.game_over && state.turn < MAX_TURN {
        let mut choices: HashMap<FactionId, Vec<ActionChoice>> = HashMap::new();
        for id in state.faction_ids() {
            let profile = profiles.get(&id).copied().unwrap_or_default();
            choices.insert(id.clone(), plan_turn(&state, &id, &profile));
        }

        let log_start = state.log.len();
        resolve_turn(&mut state, &choices, &tree, &mut rng);
        if args.verbose {
            for line in &state.log[log_start..] {
                println!("{line}");
            }
        }
    }

    if !args.verbose {
        for line in &state.log {
            println!("{line}");
        }
    }

    println!();
    match (&state.ending, &state.winner) {
        (Some(ending), Some(winner)) => {
            let name = state
                .faction(winner)
                .map(|f| f.name.as_str())
                .unwrap_or("unknown");
            println!("Ending: {ending:?}, winner: {name}");
        }
        (Some(ending), None) => println!("Ending: {ending:?}, no winner"),
        (None, _) => println!("The race is still undecided."),
    }
    Ok(())
}

/// Fixed profile assignment: the first lab plays aggressive, the
/// second cautious, everyone else balanced. Follows state order so
/// runs are reproducible.
fn assign_profiles(state: &GameState) -> HashMap<FactionId, StrategyProfile> {
    let mut profiles = HashMap::new();
    let mut labs_seen = 0;
    for faction in &state.factions {
        let profile = if faction.is_lab() {
            labs_seen += 1;
            match labs_seen {
                1 => StrategyProfile::aggressive(),
                2 => StrategyProfile::cautious(),
                _ => StrategyProfile::balanced(),
            }
        } else {
            StrategyProfile::balanced()
        };
        profiles.insert(faction.id.clone(), profile);
    }
    profiles
}
