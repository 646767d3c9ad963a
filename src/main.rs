use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use blockfire_blocks::BlockAtlas;
use blockfire_game::GameConfig;
use clap::Parser;

mod app;
mod controls;

#[derive(Parser, Debug)]
#[command(name = "blockfire", about = "First-person block world with enemies to shoot")]
struct Args {
    /// Game config (TOML). Built-in tuning when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Directory holding atlas.toml, the atlas image and shaders/
    #[arg(long, default_value = "assets")]
    assets: PathBuf,
    /// Spawner seed; derived from the clock when omitted
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    width: Option<i32>,
    #[arg(long)]
    height: Option<i32>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    if let Err(e) = run(args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut cfg = match &args.config {
        Some(path) => GameConfig::from_path(path)?,
        None => GameConfig::default(),
    };
    if let Some(w) = args.width {
        cfg.window.width = w;
    }
    if let Some(h) = args.height {
        cfg.window.height = h;
    }
    let atlas_cfg = args.assets.join("atlas.toml");
    let atlas = if atlas_cfg.exists() {
        BlockAtlas::from_path(&atlas_cfg)?
    } else {
        log::warn!("{} not found; using built-in tile layout", atlas_cfg.display());
        BlockAtlas::default()
    };
    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    });
    log::info!("starting with seed {}", seed);

    let (mut rl, thread) = raylib::init()
        .size(cfg.window.width, cfg.window.height)
        .title(&cfg.window.title)
        .resizable()
        .build();
    rl.set_target_fps(60);
    rl.set_exit_key(None);

    let mut app = app::App::new(&mut rl, &thread, &cfg, seed, atlas, &args.assets)?;
    app.run(&mut rl, &thread)?;
    Ok(())
}
