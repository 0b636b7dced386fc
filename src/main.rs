//! MSFR Engine main entry point.
//!
//! Runs the bundled demo (splash → menu → asteroid field). With the `raylib`
//! feature it opens a window; otherwise it runs headless for a fixed number
//! of frames, which is handy for smoke tests and profiling the simulation.
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --frames 600 --debug
//! cargo run --release --features raylib
//! ```

// Do not create console on Windows
#![cfg_attr(
    all(target_os = "windows", feature = "raylib"),
    windows_subsystem = "windows"
)]

use std::path::PathBuf;

use clap::Parser;
use log::{error, info};

use msfrengine::engine::Engine;
use msfrengine::error::EngineResult;
use msfrengine::game;
use msfrengine::math::random::random_seed;
use msfrengine::resources::gameconfig::GameConfig;

/// MSFR Engine 2D
#[derive(Parser)]
#[command(version, about = "MSFR Engine 2D demo")]
struct Cli {
    /// Configuration file (INI).
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Frame budget for the headless backend.
    #[arg(long, value_name = "N")]
    frames: Option<u64>,

    /// Draw collision outlines.
    #[arg(long)]
    debug: bool,

    /// Seed for gameplay randomness.
    #[arg(long, value_name = "N")]
    seed: Option<u64>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> EngineResult<()> {
    info!("Hello, world! This is the MSFR Engine!");

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        info!("{e}; using defaults");
    }
    if cli.debug {
        config.show_collision = true;
    }
    if let Some(seed) = cli.seed {
        random_seed(seed);
    }

    run_backend(&cli, config)
}

#[cfg(feature = "raylib")]
fn run_backend(_cli: &Cli, config: GameConfig) -> EngineResult<()> {
    use msfrengine::render::raylib::RaylibBackend;

    let backend = RaylibBackend::new(&config);
    Engine::new(backend, config, game::screens()).run()
}

#[cfg(not(feature = "raylib"))]
fn run_backend(cli: &Cli, config: GameConfig) -> EngineResult<()> {
    use msfrengine::render::headless::HeadlessBackend;
    use msfrengine::resources::input::InputKey;

    const DEFAULT_HEADLESS_FRAMES: u64 = 600;

    let frames = cli.frames.unwrap_or(DEFAULT_HEADLESS_FRAMES);
    let step = 1.0 / config.target_fps.max(1) as f32;
    info!("Running headless for {} frames", frames);

    let mut backend = HeadlessBackend::new(step, config.window_width, config.window_height)
        .with_frame_limit(frames)
        // skip the splash, start a game, thrust, turn and fire a few shots
        .script_key(30, InputKey::Enter, true)
        .script_key(32, InputKey::Enter, false)
        .script_key(40, InputKey::Enter, true)
        .script_key(42, InputKey::Enter, false)
        .script_key(60, InputKey::Up, true)
        .script_key(120, InputKey::Up, false)
        .script_key(120, InputKey::Left, true)
        .script_key(150, InputKey::Left, false);
    for shot in 0..5 {
        let frame = 160 + shot * 10;
        backend = backend
            .script_key(frame, InputKey::Space, true)
            .script_key(frame + 1, InputKey::Space, false);
    }
    for &(path, width, height) in game::TEXTURE_SIZES {
        backend = backend.with_texture(path, width, height);
    }
    Engine::new(backend, config, game::screens()).run()
}
