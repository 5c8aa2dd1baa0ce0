//! Headless testbed host.
//!
//! Run: `cargo run -p runner -- --test pendulum --steps 600`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use testbed::{Settings, registry};

#[derive(Parser)]
#[command(about = "Run a testbed scene without a renderer")]
struct Args {
    /// Name of the registered test to run (case-insensitive)
    #[arg(long, default_value = "Pendulum")]
    test: String,

    /// Number of calls to the test's step
    #[arg(long, default_value_t = 600)]
    steps: u32,

    /// Override the simulation frequency from the settings file
    #[arg(long)]
    hz: Option<f32>,

    /// TOML settings file (hz, gravity, pause, single_step)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log a status line every N steps (0 disables)
    #[arg(long, default_value_t = 60)]
    report_every: u32,

    /// List registered tests and exit
    #[arg(long)]
    list: bool,
}

fn load_settings(args: &Args) -> Result<Settings> {
    let mut settings = match &args.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };
    if let Some(hz) = args.hz {
        settings.hz = hz;
        settings.validate().context("invalid --hz")?;
    }
    Ok(settings)
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.list {
        for name in registry::names() {
            println!("{name}");
        }
        return Ok(());
    }

    let mut settings = load_settings(&args)?;
    let entry = registry::find(&args.test).context("unknown test")?;
    let mut test = entry
        .build()
        .with_context(|| format!("failed to build test {:?}", entry.name))?;

    log::info!(
        "running {} for {} steps at {} Hz (gravity {:?})",
        test.name(),
        args.steps,
        settings.hz,
        settings.gravity
    );

    for step in 1..=args.steps {
        test.step(&mut settings);

        if args.report_every > 0 && step % args.report_every == 0 {
            let world = test.world();
            log::info!(
                "step {:5}: bodies={} fixtures={} joints={} advanced={}",
                step,
                world.body_count(),
                world.collider_count(),
                world.joint_count(),
                test.step_count()
            );
            for line in test.status() {
                log::debug!("{}: {line}", test.name());
            }
        }
    }

    for line in test.status() {
        log::info!("{}: {line}", test.name());
    }

    log::info!("done: {} steps advanced the world", test.step_count());
    Ok(())
}
