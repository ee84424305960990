use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use lumen_renderer::{render, render_parallel, Camera};
use rand::rngs::StdRng;
use rand::SeedableRng;

mod cli;
mod output;
mod scenes;
mod settings;

use cli::{Args, SceneChoice};
use output::save_image;
use settings::Settings;

/// Initialize the logger with the specified level
fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.into());

    let settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let render_config = settings.render_config(&args);

    let mut scene_rng = StdRng::seed_from_u64(render_config.seed);
    let (world, scene_camera) = match args.scene {
        SceneChoice::Cover => scenes::cover(&mut scene_rng),
        SceneChoice::Simple => scenes::simple(),
    };
    info!("Scene {:?}: {} objects", args.scene, world.len());

    let camera_config = settings.camera_config(&args, scene_camera);
    let camera = Camera::new(&camera_config).context("invalid camera settings")?;

    let image = if args.single_threaded {
        render(&camera, &world, &render_config)
    } else {
        render_parallel(&camera, &world, &render_config, args.bucket_size)
    };

    save_image(&image, &args.output)?;
    info!("Saved to {}", args.output.display());

    Ok(())
}
