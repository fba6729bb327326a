//! Trickbit headless runner.
//!
//! Runs the platformer core without a window:
//! - **bevy_ecs** for entity-component-system architecture
//! - **configparser** for `config.ini` tuning
//! - **serde_json** level files under `assets/levels/`
//!
//! Input comes from a script (see [`trickbit::script`]) instead of a keyboard,
//! and every notice the core emits is logged. Useful for replaying a run and
//! for checking level files.
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --level level1 --script "R120,RJ1,R60" --frames 600
//! ```

use std::path::PathBuf;

use clap::Parser;
use log::{error, info, warn};

use trickbit::game::Game;
use trickbit::resources::gameconfig::GameConfig;
use trickbit::resources::levelstore::LevelStore;
use trickbit::script::{frames, parse_script};

/// Trickbit platformer core, headless
#[derive(Parser)]
#[command(version, about = "Runs the Trickbit platformer core without a window.")]
struct Cli {
    /// INI file with tuning overrides.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Directory of level JSON files (overrides `[sim] levels_dir`).
    #[arg(long, value_name = "DIR")]
    levels: Option<PathBuf>,

    /// Level to start at (default: first level found).
    #[arg(long)]
    level: Option<String>,

    /// Frames to simulate.
    #[arg(long, default_value_t = 600)]
    frames: u32,

    /// Input script, e.g. "R60,RJ1,R30,.10,F1".
    #[arg(long, default_value = "")]
    script: String,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(cli.config.clone());
    if !cli.config.exists() {
        warn!("{} not found; writing defaults", cli.config.display());
        if let Err(e) = config.save_to_file() {
            warn!("{}", e);
        }
    } else if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }
    let levels_dir = cli.levels.unwrap_or_else(|| config.levels_dir.clone());
    let dt = config.frame_time();

    let mut levels = LevelStore::new();
    match levels.load_dir(&levels_dir) {
        Ok(count) => info!("{} levels loaded from {}", count, levels_dir.display()),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }

    let segments = match parse_script(&cli.script) {
        Ok(segments) => segments,
        Err(e) => {
            error!("{}", e);
            std::process::exit(2);
        }
    };

    let mut game = Game::new(config, levels);
    if let Err(e) = game.start(cli.level.as_deref()) {
        error!("{}", e);
        std::process::exit(1);
    }

    let mut inputs = frames(&segments);
    for frame in 0..cli.frames {
        let input = inputs.next().unwrap_or_default();
        game.tick(dt, input);
        for notice in game.drain_notices() {
            info!("[frame {}] {:?}", frame, notice);
        }
        if game.is_won() {
            info!("Game won after {} frames", frame + 1);
            break;
        }
    }

    let position = game.player_position();
    let stats = game.stats();
    info!(
        "Done: level {:?}, health {}, coins {}, keys {}/{}, player at {:?}",
        game.current_level(),
        stats.health,
        stats.coins,
        stats.keys_collected(),
        stats.keys_required,
        position,
    );
}
