//! vrot CLI - Euler rotation sweep and circumsphere viewer
//!
//! Animates a paper airplane through an Euler rotation one axis at a time,
//! and solves the sphere through three points.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use vrot_circum::CircumScene;
use vrot_euler::{Animator, PolyModel, RotationOrder, StopReason};
use vrot_math::Point3;

mod config;
mod input;
mod render;
mod report;

use config::Config;
use input::KeyboardInput;
use render::{CanvasSink, Projection, TerminalGuard};
use report::{EulerReport, HeadlessSink, SphereReport};

#[derive(Parser)]
#[command(name = "vrot")]
#[command(about = "Euler rotation and circumsphere viewer", long_about = None)]
struct Cli {
    /// TOML file with [euler] and [sphere] defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Animate the paper airplane through an Euler rotation
    Euler(EulerArgs),
    /// Solve the sphere through three points
    Sphere(SphereArgs),
}

#[derive(Args, Default)]
struct EulerArgs {
    /// Target angles in degrees, e.g. 20,30,40
    #[arg(long, value_parser = parse_triple, allow_hyphen_values = true)]
    angles: Option<[f64; 3]>,
    /// Rotation order (XYZ, XZY, YXZ, YZX, ZXY, ZYX)
    #[arg(long)]
    order: Option<RotationOrder>,
    /// Degrees per frame
    #[arg(long)]
    speed: Option<f64>,
    /// Run without a terminal UI and print the result
    #[arg(long)]
    headless: bool,
    /// Print the result as JSON (implies --headless)
    #[arg(long)]
    json: bool,
}

#[derive(Args, Default)]
struct SphereArgs {
    /// First point, e.g. -2,1,0
    #[arg(long, value_parser = parse_triple, allow_hyphen_values = true)]
    a: Option<[f64; 3]>,
    /// Second point
    #[arg(long, value_parser = parse_triple, allow_hyphen_values = true)]
    b: Option<[f64; 3]>,
    /// Third point
    #[arg(long, value_parser = parse_triple, allow_hyphen_values = true)]
    c: Option<[f64; 3]>,
    /// Segments in the circular trace
    #[arg(long)]
    steps: Option<usize>,
    /// Open the terminal view instead of printing
    #[arg(long)]
    view: bool,
    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn parse_triple(s: &str) -> Result<[f64; 3], String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [x, y, z] = parts.as_slice() else {
        return Err(format!("expected three comma-separated numbers, got {s:?}"));
    };
    let num = |v: &str| v.parse::<f64>().map_err(|e| format!("{v:?}: {e}"));
    Ok([num(x)?, num(y)?, num(z)?])
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Some(Commands::Euler(args)) => run_euler(&config, args),
        Some(Commands::Sphere(args)) => run_sphere(&config, args),
        None => run_euler(&config, EulerArgs::default()),
    }
}

fn run_euler(config: &Config, args: EulerArgs) -> Result<()> {
    let mut euler = config.euler.clone();
    if let Some(angles) = args.angles {
        euler.angles = angles;
    }
    if let Some(order) = args.order {
        euler.order = order;
    }
    if let Some(speed) = args.speed {
        euler.speed = speed;
    }
    let headless = args.headless || args.json;

    let mut settings = euler.animator_settings();
    if headless {
        settings.start_paused = false;
    }
    let model = PolyModel::default();
    let animator = Animator::new(model.clone(), euler.angles, euler.order, settings)
        .context("invalid animation settings")?;

    let outcome = if headless {
        animator.run(&mut HeadlessSink::default(), &mut vrot_euler::NoInput)?
    } else {
        let mut guard = TerminalGuard::enter().context("failed to set up terminal")?;
        let mut sink = CanvasSink::new(guard.terminal(), Projection::default());
        let outcome = animator.run(&mut sink, &mut KeyboardInput::new())?;
        if outcome.reason == StopReason::Completed {
            input::wait_for_exit()?;
        }
        outcome
    };

    let report = EulerReport::new(&model, &outcome);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }
    Ok(())
}

fn run_sphere(config: &Config, args: SphereArgs) -> Result<()> {
    let mut sphere = config.sphere.clone();
    if let Some(a) = args.a {
        sphere.a = a;
    }
    if let Some(b) = args.b {
        sphere.b = b;
    }
    if let Some(c) = args.c {
        sphere.c = c;
    }
    if let Some(steps) = args.steps {
        sphere.trace_steps = steps;
    }

    let [a, b, c]: [Point3; 3] = sphere.points();
    let scene = CircumScene::analyze(&a, &b, &c, &sphere.scene_settings())
        .context("cannot build a sphere through these points")?;

    if args.view {
        let mut guard = TerminalGuard::enter().context("failed to set up terminal")?;
        guard
            .terminal()
            .draw(|f| render::draw_sphere(f, &scene, &Projection::default()))?;
        input::wait_for_exit()?;
    }

    let report = SphereReport::new(&scene);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }
    Ok(())
}
