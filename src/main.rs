//! gunfx entry point.
//!
//! Runs the weapon-handling demos in a fixed order and narrates every effect
//! to stdout:
//!
//! 1. Mediator – gun events routed through a central hub with re-entrant
//!    secondary events
//! 2. Observer – the same effects fanned out to subscribed observers
//! 3. Facade – equip a gun and drive it with input keys under a player state
//!    machine
//! 4. Strategy – swap weapon behaviors at runtime
//!
//! Settings come from `./gunfx.ini` when present (see
//! [`gunfx::resources::gameconfig`]), and command-line flags override them.
//! Diagnostics go to stderr through `env_logger`; set `RUST_LOG=debug` to
//! watch the mediator dispatch.
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --demo mediator --seed 7
//! ```

use clap::{Parser, ValueEnum};
use gunfx::game::{Demo, run_demos};
use gunfx::resources::gameconfig::DemoConfig;
use gunfx::resources::transcript::Transcript;
use log::{info, warn};
use std::path::PathBuf;

/// Gun effect routing demos
#[derive(Parser)]
#[command(
    version,
    about = "Weapon-handling demos: mediator event hub, observer fan-out, facade and strategy."
)]
struct Cli {
    /// Which demo to run.
    #[arg(long, value_enum, default_value_t = DemoArg::All)]
    demo: DemoArg,

    /// INI configuration file (default: ./gunfx.ini when it exists).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed for the jam coin flip. Unseeded runs differ between processes.
    #[arg(long)]
    seed: Option<u64>,

    /// Rounds loaded into the mediator demo's gun.
    #[arg(long)]
    ammo: Option<u32>,

    /// Print the transcript as JSON at the end instead of line by line.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DemoArg {
    All,
    Mediator,
    Observer,
    Facade,
    Strategy,
}

impl DemoArg {
    fn demos(self) -> Vec<Demo> {
        match self {
            DemoArg::All => Demo::ALL.to_vec(),
            DemoArg::Mediator => vec![Demo::Mediator],
            DemoArg::Observer => vec![Demo::Observer],
            DemoArg::Facade => vec![Demo::Facade],
            DemoArg::Strategy => vec![Demo::Strategy],
        }
    }
}

fn load_config(cli: &Cli) -> DemoConfig {
    let mut config = match &cli.config {
        Some(path) => DemoConfig::with_path(path),
        None => DemoConfig::new(),
    };

    // An explicit path must load; the default one is optional.
    if cli.config.is_some() || config.file_exists() {
        if let Err(e) = config.load_from_file() {
            warn!("{} ({:?}), using defaults", e, config.config_path);
            config = DemoConfig::with_path(config.config_path.clone());
        }
    }

    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(ammo) = cli.ammo {
        config.ammo = ammo;
    }
    config
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = load_config(&cli);
    info!(
        "Starting demos: {:?} (ammo={}, jam_chance={}, seed={:?})",
        cli.demo, config.ammo, config.jam_chance, config.seed
    );

    let mut transcript = if cli.json {
        Transcript::new()
    } else {
        Transcript::echoing()
    };

    run_demos(&cli.demo.demos(), &config, &mut transcript);

    if cli.json {
        match transcript.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing transcript: {e}");
                std::process::exit(1);
            }
        }
    }
}
