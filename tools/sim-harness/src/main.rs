//! sim-harness: run the enemy simulation headless and print the last snapshot.
//!
//! Usage:
//!   sim-harness --ticks 600 --seed 7 --enemies 4
//!   sim-harness --profile brute.json --enemies 2

use std::path::{Path, PathBuf};
use std::process;

use kuros_core::config::EnemyProfile;
use kuros_core::enums::EnemyArchetype;
use kuros_core::events::SimEvent;
use kuros_enemy_ai::get_profile;
use kuros_sim::core::state::SimSnapshot;
use kuros_sim::{SimConfig, SimulationEngine};

const ARCHETYPES: [EnemyArchetype; 3] = [
    EnemyArchetype::Grunt,
    EnemyArchetype::Brute,
    EnemyArchetype::Skirmisher,
];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h" || a == "help") {
        print_usage();
        return;
    }

    let ticks = parse_number(&args, "--ticks", 600u64);
    let seed = parse_number(&args, "--seed", 42u64);
    let enemies = parse_number(&args, "--enemies", 3usize);
    let profile = match parse_path(&args, "--profile").map(|path| load_profile(&path)) {
        Some(Ok(profile)) => Some(profile),
        Some(Err(message)) => {
            eprintln!("Error: {message}");
            process::exit(1);
        }
        None => None,
    };

    let mut engine = SimulationEngine::new(SimConfig {
        seed,
        ..Default::default()
    });

    let spawned = match &profile {
        Some(profile) => engine.spawn_around_player(profile, enemies).map(|_| ()),
        None => (0..enemies).try_for_each(|i| {
            let profile = get_profile(ARCHETYPES[i % ARCHETYPES.len()]);
            engine.spawn_around_player(&profile, 1).map(|_| ())
        }),
    };
    if let Err(e) = spawned {
        eprintln!("Error spawning enemies: {e}");
        process::exit(1);
    }

    let mut last = SimSnapshot::default();
    let mut transitions = 0usize;
    let mut player_hits = 0usize;
    for _ in 0..ticks {
        last = engine.tick();
        for event in &last.events {
            match event {
                SimEvent::StateChanged { .. } => transitions += 1,
                SimEvent::ActorDamaged { actor, .. } if *actor == engine.player_id() => {
                    player_hits += 1
                }
                _ => {}
            }
        }
    }

    tracing::info!(
        ticks,
        seed,
        enemies = last.enemies.len(),
        transitions,
        player_hits,
        "run complete"
    );

    match serde_json::to_string_pretty(&last) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error serializing snapshot: {e}");
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "sim-harness: headless KUROS enemy simulation\n\
         \n\
           --ticks <N>        Ticks to run at 60 Hz (default: 600)\n\
           --seed <S>         RNG seed for spawn placement (default: 42)\n\
           --enemies <N>      Enemies to spawn around the player (default: 3)\n\
           --profile <path>   Enemy profile JSON; without it the built-in\n\
                              archetypes are cycled\n\
         \n\
         The final snapshot is printed to stdout as JSON; logs go to stderr\n\
         (filter with RUST_LOG)."
    );
}

fn load_profile(path: &Path) -> Result<EnemyProfile, String> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    EnemyProfile::from_json_str(&json).map_err(|e| format!("invalid profile {}: {e}", path.display()))
}

fn parse_path(args: &[String], flag: &str) -> Option<PathBuf> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(PathBuf::from(&args[i + 1]));
        }
    }
    None
}

fn parse_number<T: std::str::FromStr>(args: &[String], flag: &str, default: T) -> T {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(n) = args[i + 1].parse::<T>() {
                return n;
            }
        }
    }
    default
}
