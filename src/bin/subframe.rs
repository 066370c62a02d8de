use std::{fs::File, io::BufReader, path::PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use subframe::{
    CameraId, DenoiseMode, FixedTimeScale, FrameWeights, RecordingConfig, SubFrameManager,
};

#[derive(Parser, Debug)]
#[command(name = "subframe", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Simulate a recording session and print per-sub-frame blend weights.
    Simulate(SimulateArgs),
    /// Tabulate the shutter profile over the exposure window.
    Profile(ProfileArgs),
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Recording config JSON (overrides the shutter flags below).
    #[arg(long = "config")]
    config_path: Option<PathBuf>,

    /// Sub-frames accumulated into one final frame.
    #[arg(long, default_value_t = 8)]
    samples: u32,

    /// Shutter interval, normalized to frame time (0 disables weighting).
    #[arg(long, default_value_t = 1.0)]
    shutter_interval: f32,

    /// Normalized time at which the shutter is fully open.
    #[arg(long, default_value_t = 0.0)]
    open: f32,

    /// Normalized time at which the shutter begins closing.
    #[arg(long, default_value_t = 1.0)]
    close: f32,

    /// Number of cameras driven through the loop.
    #[arg(long, default_value_t = 1)]
    cameras: u64,

    /// Number of full accumulation cycles to run.
    #[arg(long, default_value_t = 1)]
    cycles: u32,

    /// Emit the report as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct ProfileArgs {
    /// Shutter interval, normalized to frame time.
    #[arg(long, default_value_t = 1.0)]
    shutter_interval: f32,

    /// Normalized time at which the shutter is fully open.
    #[arg(long, default_value_t = 0.0)]
    open: f32,

    /// Normalized time at which the shutter begins closing.
    #[arg(long, default_value_t = 1.0)]
    close: f32,

    /// Number of evaluation points across the exposure window.
    #[arg(long, default_value_t = 16)]
    steps: u32,
}

#[derive(Debug, serde::Serialize)]
struct SampleRow {
    cycle: u32,
    sub_frame: u32,
    camera: u64,
    weights: FrameWeights,
    iteration: u32,
    converged: bool,
}

#[derive(Debug, serde::Serialize)]
struct SimulationReport {
    config: RecordingConfig,
    capture_delta_during: f64,
    capture_delta_after: f64,
    rows: Vec<SampleRow>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Simulate(args) => cmd_simulate(args),
        Command::Profile(args) => cmd_profile(args),
    }
}

fn read_config_json(path: &PathBuf) -> anyhow::Result<RecordingConfig> {
    let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
    let r = BufReader::new(f);
    let config: RecordingConfig =
        serde_json::from_reader(r).with_context(|| "parse recording config JSON")?;
    Ok(config)
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let config = match &args.config_path {
        Some(path) => read_config_json(path)?,
        None => RecordingConfig::trapezoid(args.samples, args.shutter_interval, args.open, args.close),
    };

    let mut manager = SubFrameManager::new();
    let mut clock = FixedTimeScale::default();

    manager.begin_recording(&config, &mut clock)?;
    let capture_delta_during = clock.capture_delta;

    let cameras: Vec<CameraId> = (0..args.cameras.max(1)).map(CameraId).collect();
    let mut rows = Vec::new();

    for cycle in 0..args.cycles.max(1) {
        for sub_frame in 0..config.sample_count {
            manager.prepare_new_sub_frame();
            for &camera in &cameras {
                let weights = manager.compute_frame_weights(camera);
                manager.mark_sample_accumulated(camera);
                let iteration = manager
                    .registry()
                    .get(camera)
                    .map_or(0, |s| s.current_iteration());
                rows.push(SampleRow {
                    cycle,
                    sub_frame,
                    camera: camera.0,
                    weights,
                    iteration,
                    converged: manager.is_converged(camera),
                });
            }
            // No denoiser attached in the simulator; this stays a no-op but
            // exercises the same call order a host renderer uses.
            for &camera in &cameras {
                manager.run_denoise(
                    camera,
                    &subframe::DenoiseRequest::color_only(subframe::BufferHandle(camera.0)),
                    DenoiseMode::Sync,
                )?;
            }
        }
    }

    manager.end_recording(&mut clock);

    let report = SimulationReport {
        config,
        capture_delta_during,
        capture_delta_after: clock.capture_delta,
        rows,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{:>5} {:>9} {:>6} {:>9} {:>11} {:>13} {:>9} {:>9}",
        "cycle", "subframe", "cam", "weight", "prior_sum", "inv_total", "iter", "converged"
    );
    for row in &report.rows {
        println!(
            "{:>5} {:>9} {:>6} {:>9.4} {:>11.4} {:>13.4} {:>9} {:>9}",
            row.cycle,
            row.sub_frame,
            row.camera,
            row.weights.current,
            row.weights.prior_total,
            row.weights.inverse_total,
            row.iteration,
            row.converged
        );
    }
    println!(
        "capture delta: {:.6}s during recording, {:.6}s restored",
        report.capture_delta_during, report.capture_delta_after
    );
    Ok(())
}

fn cmd_profile(args: ProfileArgs) -> anyhow::Result<()> {
    let profile =
        subframe::ShutterProfile::trapezoid(args.shutter_interval, args.open, args.close)?;

    let steps = args.steps.max(1);
    println!("{:>10} {:>9}", "t", "weight");
    for i in 0..=steps {
        let t = args.shutter_interval * i as f32 / steps as f32;
        println!("{t:>10.4} {:>9.4}", profile.weight(t));
    }
    Ok(())
}
