//! Notched segment kinematics CLI.
//!
//! Provides two modes of operation:
//! - `pose`: Evaluate one actuation and print every link pose
//! - `sweep`: Evaluate a range of tendon displacements and print tip poses

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use notchkin_core::prelude::*;
use notchkin_kinematics::{pose, SegmentModel};

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

/// Forward kinematics of a tendon-actuated notched continuum segment.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Segment configuration (TOML). Defaults to the reference instrument.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log derived constants and solver output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every link pose for one actuation.
    Pose {
        /// Tendon displacement (mm). Defaults to the configured actuation.
        #[arg(short, long, allow_negative_numbers = true)]
        del_l: Option<f64>,

        /// Base rotation (rad). Defaults to the configured actuation.
        #[arg(short, long, allow_negative_numbers = true)]
        alpha: Option<f64>,
    },

    /// Print the tip pose for evenly spaced tendon displacements.
    Sweep {
        /// First tendon displacement (mm).
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        from: f64,

        /// Last tendon displacement (mm).
        #[arg(long, default_value_t = 0.5, allow_negative_numbers = true)]
        to: f64,

        /// Number of samples.
        #[arg(short = 'n', long, default_value_t = 11)]
        steps: u32,

        /// Base rotation (rad).
        #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
        alpha: f64,
    },
}

// ---------------------------------------------------------------------------
// Mode implementations
// ---------------------------------------------------------------------------

fn run_pose(model: &SegmentModel, input: ActuationInput) -> Result<(), NotchError> {
    let chain = model.update(input)?;
    let state = chain.state();
    println!(
        "k = {:.6} 1/mm  s = {:.6} mm  bend = {:.3} deg",
        state.curvature,
        state.arc_length,
        state.total_bend_angle(model.params().n).to_degrees()
    );
    for (i, p) in pose::export(&chain).iter().enumerate() {
        let q = p.orientation.quaternion();
        println!(
            "{i:>3} {:<6} pos [{:>9.5} {:>9.5} {:>9.5}]  rot [{:>8.5} {:>8.5} {:>8.5} {:>8.5}]",
            format!("{:?}", p.kind),
            p.position.x,
            p.position.y,
            p.position.z,
            q.i,
            q.j,
            q.k,
            q.w,
        );
    }
    Ok(())
}

fn run_sweep(model: &SegmentModel, from: f64, to: f64, steps: u32, alpha: f64) {
    let inputs: Vec<ActuationInput> = match steps {
        0 => Vec::new(),
        1 => vec![ActuationInput::new(from, alpha)],
        _ => (0..steps)
            .map(|i| {
                let t = f64::from(i) / f64::from(steps - 1);
                ActuationInput::new(from + t * (to - from), alpha)
            })
            .collect(),
    };

    for (input, result) in inputs.iter().zip(model.sweep(&inputs)) {
        match result {
            Ok(chain) => {
                if let Some(tip) = chain.tip() {
                    let p = tip.translation();
                    println!(
                        "delL {:>8.4}  k {:>10.6}  tip [{:>9.5} {:>9.5} {:>9.5}]",
                        input.del_l,
                        chain.state().curvature,
                        p.x,
                        p.y,
                        p.z
                    );
                }
            }
            Err(err) => println!("delL {:>8.4}  {err}", input.del_l),
        }
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<SegmentConfig, ConfigError> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "loading segment config");
            SegmentConfig::from_file(path)
        }
        None => Ok(SegmentConfig::default()),
    }
}

fn run(cli: Cli) -> Result<(), NotchError> {
    let config = load_config(cli.config.as_ref())?;
    let model = SegmentModel::from_config(&config)?;

    match cli.command {
        Commands::Pose { del_l, alpha } => {
            let input = ActuationInput::new(
                del_l.unwrap_or(config.actuation.del_l),
                alpha.unwrap_or(config.actuation.alpha),
            );
            run_pose(&model, input)
        }
        Commands::Sweep {
            from,
            to,
            steps,
            alpha,
        } => {
            run_sweep(&model, from, to, steps, alpha);
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("failed to install tracing subscriber");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "notchkin failed");
            ExitCode::FAILURE
        }
    }
}
