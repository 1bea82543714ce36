use anyhow::{Context as _, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use terrarium_core::{Clock, ManualClock, MonotonicClock, Point, TerrariumConfig};
use terrarium_expression::Presenter;
use terrarium_limbic::{FramePacer, Terrarium};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod app;
mod headless;
mod render;
mod tui;

use headless::{ScriptedSenses, TimelineFormat, TimelineStage};
use render::TerminalStage;
use tui::TerminalSenses;

#[derive(Parser, Debug)]
#[command(name = "terrarium", author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML config file
    #[arg(short, long, env = "TERRARIUM_CONFIG")]
    config: Option<PathBuf>,

    /// Seed for the wander RNG (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Target frame rate
    #[arg(long)]
    fps: Option<u32>,

    /// Directory for log files in terminal mode
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Run without a terminal for this many virtual seconds and print the
    /// mood timeline
    #[arg(long, value_name = "SECS")]
    headless: Option<u64>,

    /// Fixed pointer position for headless runs (defaults to the canvas center)
    #[arg(long, value_name = "X,Y", value_parser = parse_point, requires = "headless")]
    pointer: Option<Point>,

    /// Press times in virtual milliseconds for headless runs
    #[arg(long, value_name = "MS", value_delimiter = ',', requires = "headless")]
    click_at: Vec<u64>,

    /// Print the headless timeline as JSON lines
    #[arg(long, requires = "headless")]
    json: bool,
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got {:?}", s))?;
    let x: f32 = x.trim().parse().map_err(|e| format!("bad x: {}", e))?;
    let y: f32 = y.trim().parse().map_err(|e| format!("bad y: {}", e))?;
    Ok(Point::new(x, y))
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("terrarium").join("config.toml"))
}

fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("terrarium")
        .join("logs")
}

/// Headless runs log to stderr; the terminal UI owns the screen, so its logs
/// go to a daily rolling file instead.
fn init_logging(log_dir: Option<&Path>) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match log_dir {
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .init();
            None
        }
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "terrarium.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .json()
                .init();
            Some(guard)
        }
    }
}

fn load_config(args: &Args) -> Result<TerrariumConfig> {
    let mut config = match args.config.as_deref() {
        Some(path) => TerrariumConfig::load(path)?,
        None => match default_config_path() {
            Some(path) => TerrariumConfig::load_or_default(path),
            None => TerrariumConfig::default(),
        },
    };
    if let Some(seed) = args.seed {
        config.simulation.seed = Some(seed);
    }
    if let Some(fps) = args.fps {
        config.render.fps = fps;
    }
    config.validate().context("Invalid command-line overrides")?;
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_dir = match args.headless {
        Some(_) => None,
        None => Some(args.log_dir.clone().unwrap_or_else(default_log_dir)),
    };
    let _guard = init_logging(log_dir.as_deref());
    info!("Starting terrarium version {}", env!("CARGO_PKG_VERSION"));

    let config = load_config(&args)?;
    let pacer = FramePacer::from_fps(config.render.fps);
    let mut presenter = Presenter::new(config.render.clone());

    match args.headless {
        Some(secs) => {
            let mut clock = ManualClock::at(0);
            let mut terrarium = Terrarium::new(&config, clock.now_ms());
            let pointer = args.pointer.unwrap_or_else(|| config.canvas.center());
            let mut senses = ScriptedSenses::new(pointer, args.click_at.clone(), secs * 1000);
            let format = if args.json {
                TimelineFormat::JsonLines
            } else {
                TimelineFormat::Text
            };
            let mut stage = TimelineStage::new(std::io::stdout().lock(), format);
            app::run(
                &mut terrarium,
                &mut presenter,
                &mut senses,
                &mut stage,
                &mut clock,
                &pacer,
            )?;
        }
        None => {
            let mut senses = TerminalSenses::new(&config.canvas)?;
            let mut stage = TerminalStage::new(tui::init()?);
            let mut clock = MonotonicClock::start();
            let mut terrarium = Terrarium::new(&config, clock.now_ms());
            let result = app::run(
                &mut terrarium,
                &mut presenter,
                &mut senses,
                &mut stage,
                &mut clock,
                &pacer,
            );
            tui::restore()?;
            result?;
        }
    }

    Ok(())
}
