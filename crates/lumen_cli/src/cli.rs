use clap::{Parser, ValueEnum};
use log::LevelFilter;
use lumen_renderer::DEFAULT_BUCKET_SIZE;
use std::path::PathBuf;

/// Log levels selectable from the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Built-in scenes
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SceneChoice {
    /// Ground plus a grid of random small spheres and three large ones
    Cover,
    /// Ground with a diffuse, a metal, and a glass sphere
    Simple,
}

#[derive(Debug, Parser)]
#[command(name = "lumen")]
#[command(about = "A recursive Monte Carlo ray tracer")]
pub struct Args {
    /// JSON file with optional "camera" and "render" sections
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Scene to render
    #[arg(long, value_enum, default_value_t = SceneChoice::Cover)]
    pub scene: SceneChoice,

    /// Image width in pixels (height follows the aspect ratio)
    #[arg(long)]
    pub width: Option<u32>,

    /// Number of samples per pixel
    #[arg(short = 's', long)]
    pub samples: Option<u32>,

    /// Maximum number of bounces per path
    #[arg(long)]
    pub max_depth: Option<u32>,

    /// Seed for scene generation and sampling
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output file path (.ppm for ASCII PPM, otherwise by extension, e.g. .png)
    #[arg(short, long, default_value = "output.png")]
    pub output: PathBuf,

    /// Render on the calling thread instead of the rayon pool
    #[arg(long)]
    pub single_threaded: bool,

    /// Bucket edge length in pixels for parallel rendering
    #[arg(long, default_value_t = DEFAULT_BUCKET_SIZE)]
    pub bucket_size: u32,

    /// Logging level (overrides RUST_LOG)
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}
