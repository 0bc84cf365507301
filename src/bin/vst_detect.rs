//! Local pipeline driver: validates preprocessing and output handling
//! without the device inference runtime. Detections are mocked.

use std::path::PathBuf;
use anyhow::Result;
use clap::Parser;
use vst_detect::common::PipelineConfig;
use vst_detect::{init_pipeline, run_pipeline};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Input image path (JPEG/PNG).
    #[arg(long, value_name = "FILE")]
    input: PathBuf,

    /// Output visualization path.
    #[arg(long, default_value = "detection_output.jpg", value_name = "FILE")]
    output: PathBuf,

    /// Confidence threshold (0.0 - 1.0).
    #[arg(long, default_value_t = 0.5, value_name = "THRESHOLD")]
    confidence: f32,

    /// NMS IoU threshold (0.0 - 1.0). Accepted for device parity; the mock
    /// path applies no suppression.
    #[arg(long, default_value_t = 0.45, value_name = "THRESHOLD")]
    nms_threshold: f32,

    /// Mock inference seed.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Label font (TTF). Well-known system locations are tried otherwise.
    #[arg(long, value_name = "FILE")]
    font: Option<PathBuf>,

    /// Print the filtered detections as a JSON array on stdout.
    #[arg(long)]
    json: bool,

    /// Log a stage timing summary.
    #[arg(long)]
    profile: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    println!("============================================================");
    println!("OBJECT DETECTION - LOCAL TESTING");
    println!("============================================================");

    let mut config = PipelineConfig::new()
        .with_conf_threshold(args.confidence)
        .with_nms_threshold(args.nms_threshold)
        .with_seed(args.seed)
        .with_profile(args.profile);
    if let Some(font) = &args.font {
        config = config.with_font_path(font);
    }

    let mut yolo = init_pipeline(&config)?;
    let detections = run_pipeline(&mut yolo, &config, &args.input, &args.output)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&detections)?);
    } else {
        for det in &detections {
            let (x, y, w, h) = det.bbox.xy_wh();
            println!(
                "  - {} (class {}): {:.1}% at ({:.0}, {:.0}, {:.0}x{:.0})",
                det.label(), det.class_id, det.score * 100.0, x, y, w, h
            );
        }
    }

    println!("Total detections: {}", detections.len());
    Ok(())
}
