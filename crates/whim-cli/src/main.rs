//! whim - spin-the-wheel decision picker for the terminal

mod config;
mod sound;
mod ui;

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;
use std::time::Duration;
use whim_core::{DEFAULT_FRAME_COUNT, DEFAULT_FRAME_DELAY, SPIN_RANGE, Wheel};
use whim_tui::{App, Theme};

/// whim - spin a wheel to make a decision
#[derive(Parser, Debug)]
#[command(name = "whim")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Comma-separated option labels (2-8)
    #[arg(short, long, value_delimiter = ',')]
    options: Option<Vec<String>>,

    /// Number of options when no labels are given (2-8, labeled 1..n)
    #[arg(short, long)]
    count: Option<usize>,

    /// Seed the spin RNG for a reproducible outcome
    #[arg(long)]
    seed: Option<u64>,

    /// Spin once without the UI and print the winning option
    #[arg(short, long)]
    pick: bool,

    /// Color theme (dark, light)
    #[arg(long)]
    theme: Option<String>,

    /// Disable the spin sound
    #[arg(long)]
    no_sound: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Initialize config file
    #[arg(long)]
    init_config: bool,
}

fn parse_theme(s: &str) -> Theme {
    match s.to_lowercase().as_str() {
        "light" => Theme::light(),
        _ => Theme::dark(),
    }
}

/// Resolve the option labels from flags and config, in that order
fn resolve_options(args: &Args, cfg: &config::Config) -> anyhow::Result<Vec<String>> {
    if let Some(options) = args.options.clone().or_else(|| cfg.options.clone()) {
        return Ok(options);
    }
    let count = args.count.or(cfg.count).unwrap_or(4);
    Ok(Wheel::numbered(count)?.options().to_vec())
}

/// One-shot mode: spin immediately and print the winner
fn run_pick(options: Vec<String>, mut rng: StdRng) -> anyhow::Result<()> {
    let wheel = Wheel::new(options)?;
    let total_spin = f64::from(rng.gen_range(SPIN_RANGE));
    let winner = wheel.winner_at(total_spin);
    tracing::debug!(total_spin, winner, "one-shot spin");
    println!("{}", wheel.options()[winner]);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Setup tracing
    if args.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("whim=debug")
            .init();
    }

    // Initialize config and exit
    if args.init_config {
        match config::Config::init() {
            Ok(path) => {
                println!("Config file created at: {}", path.display());
                println!("\nExample config:\n{}", config::example_config());
            }
            Err(e) => {
                eprintln!("Error creating config: {}", e);
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    // Load config file
    let cfg = config::Config::load();

    let options = resolve_options(&args, &cfg)?;

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // One-shot mode
    if args.pick {
        return run_pick(options, rng);
    }

    // Merge config with CLI args (CLI takes precedence)
    let theme = args
        .theme
        .as_deref()
        .or(cfg.theme.as_deref())
        .map(parse_theme)
        .unwrap_or_default();

    let frame_count = cfg.frame_count.unwrap_or(DEFAULT_FRAME_COUNT).max(2);
    let frame_delay = cfg
        .frame_delay_ms
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_FRAME_DELAY);

    let sound_enabled = !args.no_sound && cfg.sound.unwrap_or(true);
    let sound = sound::SpinSound::new(sound_enabled, cfg.sound_file.clone().map(PathBuf::from));

    let mut screen = ui::WheelScreen::new(options, rng, theme.clone(), sound, frame_count)?;
    let mut app = App::new()?.with_theme(theme).with_tick_rate(frame_delay);
    app.run(&mut screen)?;

    Ok(())
}
