//! Command-line host: classify recorded landmark frames and report crops.

use anyhow::{Context, Result};
use clap::Parser;
use face_orient::config::Config;
use face_orient::estimator::OrientationEstimator;
use face_orient::landmark::Landmark;
use log::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// YAML file with recorded landmark frames (a list of frames, each a
    /// list of {x, y, z} landmarks)
    frames: String,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<String>,

    /// Reference image width in pixels (enables crop output with --height)
    #[arg(long)]
    width: Option<u32>,

    /// Reference image height in pixels (enables crop output with --width)
    #[arg(long)]
    height: Option<u32>,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    // Load configuration if provided
    let config = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {config_path}");
        match Config::from_file(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("Failed to load config file: {e}. Using defaults.");
                Config::default()
            }
        }
    } else {
        Config::default()
    };

    let estimator: OrientationEstimator = config.create_estimator()?;

    let reference_size = match (args.width, args.height) {
        (Some(width), Some(height)) => Some((width, height)),
        (None, None) => None,
        _ => anyhow::bail!("--width and --height must be given together"),
    };

    let content = std::fs::read_to_string(&args.frames)
        .with_context(|| format!("Failed to read frames file: {}", args.frames))?;
    let frames: Vec<Vec<Landmark>> =
        serde_yaml::from_str(&content).context("Failed to parse frames file")?;

    info!("Processing {} frames", frames.len());

    for (index, landmarks) in frames.iter().enumerate() {
        println!("--- frame {index} ---");
        match reference_size {
            Some((width, height)) => match estimator.compute_with_crop(landmarks, width, height) {
                Ok((estimate, crop)) => {
                    println!("{}", estimate.diagnostic());
                    if let Some(crop) = crop {
                        println!(
                            "crop = ({:.1}, {:.1}) {:.1} x {:.1}",
                            crop.region.x, crop.region.y, crop.region.width, crop.region.height
                        );
                        println!(
                            "centroid = ({:.1}, {:.1}, {:.1})",
                            crop.centroid.x, crop.centroid.y, crop.centroid.z
                        );
                    }
                }
                Err(e) => log::warn!("skipping frame {index}: {e}"),
            },
            None => match estimator.compute(landmarks) {
                Ok(estimate) => println!("{}", estimate.diagnostic()),
                Err(e) => log::warn!("skipping frame {index}: {e}"),
            },
        }
    }

    Ok(())
}
