mod utils;
pub mod common;
pub mod detection_runners;
pub mod errors;
pub mod renderer;

use std::path::Path;
use std::time::Instant;
use crate::common::{Detection, PipelineConfig, VstImage};
use crate::detection_runners::inference_process::InferenceProcess;
use crate::detection_runners::mock_detector::MockYolo;
use crate::errors::DetectError;
use crate::renderer::Renderer;

pub fn init_pipeline(config: &PipelineConfig) -> anyhow::Result<MockYolo> {
    log::info!("===========\ninit_pipeline\n===========");
    MockYolo::new(config.clone())
}

/// Loads an image for the pipeline. Fails with [`DetectError::FileNotFound`]
/// before any processing when the path does not exist.
pub fn load_image<P: AsRef<Path>>(path: P) -> anyhow::Result<VstImage> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(DetectError::FileNotFound(path.to_path_buf()).into());
    }
    let image = image::open(path).map_err(DetectError::Decode)?;
    let vst_image = VstImage::from(image);
    log::info!(
        "Loaded image: {} ({}x{})",
        path.display(), vst_image.img_width, vst_image.img_height
    );
    Ok(vst_image)
}

/// Runs the full pipeline on one image: load, preprocess, mock inference,
/// confidence filter, then visualization when anything survived the filter.
pub fn run_pipeline<P, Q>(
    yolo: &mut MockYolo,
    config: &PipelineConfig,
    image_path: P,
    output_path: Q,
) -> anyhow::Result<Vec<Detection>>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let now = Instant::now();

    let vst_image = load_image(image_path)?;

    let detections = yolo.forward(&vst_image, config.conf_threshold, config.profile)?;

    for det in &detections {
        det.log_detection();
    }

    if detections.is_empty() {
        log::info!("No detections above threshold; skipping visualization");
    } else {
        let renderer = Renderer::new(config.font_path.as_deref());
        renderer.render(&vst_image, &detections, output_path.as_ref())?;
    }

    log::info!("Processing time: {:?}", now.elapsed());

    Ok(detections)
}
