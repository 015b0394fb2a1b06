use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use narwhal_cv::{AnnotationConfig, PipelineConfig};
use std::path::PathBuf;

mod detect;

use detect::{DetectOptions, Heights};

#[derive(Parser)]
#[command(name = "narwhal")]
#[command(about = "Find colour targets in images and report their angles off the camera axis")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the detection pipeline over an image.
    Detect(DetectArgs),

    /// Print the default configuration as JSON.
    Defaults,
}

#[derive(Debug, Clone, Args)]
struct DetectArgs {
    /// Path to the input image.
    #[arg(long)]
    image: PathBuf,

    /// Pipeline configuration (JSON). Defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to write the detection report (JSON).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Path to write the annotated frame.
    #[arg(long)]
    annotated: Option<PathBuf>,

    /// Write the colour-threshold mask instead of the annotated frame.
    #[arg(long)]
    color_filter: bool,

    /// Override the horizontal field of view (degrees).
    #[arg(long)]
    hfov: Option<f32>,

    /// Override the vertical field of view (degrees).
    #[arg(long)]
    vfov: Option<f32>,

    /// Height of the target centre above the ground, for distance estimates.
    #[arg(long, requires = "camera_height")]
    target_height: Option<f32>,

    /// Height of the camera lens above the ground, for distance estimates.
    #[arg(long, requires = "target_height")]
    camera_height: Option<f32>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Detect(args) => run_detect(args),
        Commands::Defaults => print_defaults(),
    };

    if let Err(e) = outcome {
        eprintln!("Detection failed: {:#}", e);
        std::process::exit(1);
    }
}

fn run_detect(args: DetectArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => PipelineConfig::from_json_file(path)?,
        None => PipelineConfig::default(),
    };
    if let Some(hfov) = args.hfov {
        config.camera.horizontal_fov = hfov;
    }
    if let Some(vfov) = args.vfov {
        config.camera.vertical_fov = vfov;
    }
    config.validate().context("Invalid camera override")?;

    let options = DetectOptions {
        annotation: if args.color_filter {
            AnnotationConfig::color_filter()
        } else {
            AnnotationConfig::default()
        },
        annotated_output: args.annotated.clone(),
        heights: args
            .target_height
            .zip(args.camera_height)
            .map(|(target, camera)| Heights { target, camera }),
    };

    let report = detect::detect_targets(&args.image, config, &options)?;

    if report.targets.is_empty() {
        println!("No targets found in {:?}", report.image);
    }
    for (rank, target) in report.targets.iter().enumerate() {
        match target.distance {
            Some(d) => println!("#{} {} distance: {:.1}", rank + 1, target.info, d),
            None => println!("#{} {}", rank + 1, target.info),
        }
    }

    if let Some(out) = &args.out {
        detect::export_json(&report, out)?;
        log::info!("Report written to {:?}", out);
    }
    Ok(())
}

fn print_defaults() -> Result<()> {
    println!("{}", PipelineConfig::default().to_json_pretty()?);
    Ok(())
}
