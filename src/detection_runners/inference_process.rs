use std::time::Instant;
use crate::common::{Detection, DetectionSet, PipelineConfig};
use crate::detection_runners::mock_detector::NormTensor;
use crate::utils;

/// The seam between the local pipeline and whatever produces detections.
/// On device this is filled by the embedded inference session; here the
/// mock engine fills it with seeded random output. The stage contract
/// (fixed-shape tensor in, fixed-shape detection arrays out) is what makes
/// the swap invisible to callers.
pub trait InferenceProcess: Sized {
    type Input; // VstImage

    /// Creates a new instance of the detector with the given options.
    fn new(config: PipelineConfig) -> anyhow::Result<Self>;

    /// Pre-process the input frame into the model input tensor.
    fn preprocess(&self, x: &Self::Input) -> anyhow::Result<NormTensor>;

    /// Executes the model on the preprocessed tensor.
    fn inference(&mut self, x: NormTensor) -> anyhow::Result<DetectionSet>;

    /// Post-process the raw output arrays into filtered detections.
    fn postprocess(&self, detections: &DetectionSet, conf_threshold: f32) -> anyhow::Result<Vec<Detection>>;

    /// Executes the full pipeline.
    fn run(&mut self, x: &Self::Input, conf_threshold: f32) -> anyhow::Result<Vec<Detection>> {
        let ys = self.preprocess(x)?;
        let ys = self.inference(ys)?;
        let ys = self.postprocess(&ys, conf_threshold)?;
        Ok(ys)
    }

    /// Executes the full pipeline with per-stage timing.
    fn forward(&mut self, x: &Self::Input, conf_threshold: f32, profile: bool) -> anyhow::Result<Vec<Detection>> {
        let detect_time = Instant::now();

        let t_pre = Instant::now();
        let ys = self.preprocess(x)?;
        let t_pre = t_pre.elapsed();

        let mut _detect_elapsed = detect_time.elapsed();
        _detect_elapsed = utils::trace("TIME", "Preprocessing input", detect_time, _detect_elapsed);

        let t_exe = Instant::now();
        let ys = self.inference(ys)?;
        let t_exe = t_exe.elapsed();

        _detect_elapsed = utils::trace("TIME", "Detection run", detect_time, _detect_elapsed);

        let t_post = Instant::now();
        let ys = self.postprocess(&ys, conf_threshold)?;
        let t_post = t_post.elapsed();

        let _ = utils::trace("TIME", "Postprocessing", detect_time, _detect_elapsed);

        if profile {
            log::info!("> Preprocess: {t_pre:?} | Inference: {t_exe:?} | Postprocess: {t_post:?}");
        }

        Ok(ys)
    }
}
