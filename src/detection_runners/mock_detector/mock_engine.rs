use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use crate::common::{
    Detection, DetectionSet, PipelineConfig, VstImage, INPUT_HEIGHT, INPUT_WIDTH, NUM_CLASSES,
    NUM_SLOTS,
};
use crate::detection_runners::inference_process::InferenceProcess;
use crate::detection_runners::mock_detector::{image_ops, post_filter, NormTensor};

/// Number of plausible detections the mock places at the head of the slots.
pub const NUM_MOCK_DETECTIONS: usize = 5;

/// Stand-in for the embedded inference session. Same contract as the real
/// thing: fixed 640x640 tensor in, fixed 8400-slot output arrays out. The
/// content is seeded random instead of model output.
#[derive(Debug, Clone)]
pub struct MockEngine {
    seed: u64,
}

impl MockEngine {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fills all slots. The RNG is re-derived from the seed on every call,
    /// so identical seeds give bit-identical output.
    pub fn run(&self, _x: &NormTensor) -> DetectionSet {
        log::info!("Running MOCK inference (seed={})", self.seed);

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut out = DetectionSet::zeroed();

        for i in 0..NUM_MOCK_DETECTIONS {
            out.boxes[i] = [
                rng.gen_range(0.0f32..640.0), // x
                rng.gen_range(0.0f32..640.0), // y
                rng.gen_range(50.0f32..150.0), // w
                rng.gen_range(50.0f32..150.0), // h
            ];
            out.scores[i] = rng.gen_range(0.5f32..1.0);
            out.class_idx[i] = rng.gen_range(0i8..NUM_CLASSES as i8);
        }

        // Low-confidence noise in the tail; boxes and classes stay zeroed
        for score in out.scores.iter_mut().skip(NUM_MOCK_DETECTIONS) {
            *score = rng.gen_range(0.0f32..0.1);
        }

        out
    }
}

/// Mock counterpart of the device detector: same stage split, same data
/// shapes, random content.
#[derive(Debug)]
pub struct MockYolo {
    engine: MockEngine,
    conf_threshold: f32,
    nms_threshold: f32,
    profile: bool,
}

impl MockYolo {
    pub fn conf_threshold(&self) -> f32 {
        self.conf_threshold
    }

    /// Accepted for device parity; the mock path runs no suppression.
    pub fn nms_threshold(&self) -> f32 {
        self.nms_threshold
    }

    pub fn profile(&self) -> bool {
        self.profile
    }
}

impl InferenceProcess for MockYolo {
    type Input = VstImage;

    fn new(config: PipelineConfig) -> Result<Self> {
        log::info!("Mock detector initialized");
        log::info!("Input size: {}x{}", INPUT_WIDTH, INPUT_HEIGHT);
        log::info!(
            "Expected outputs: boxes[{n},4], scores[{n},1], classes[{n},1]",
            n = NUM_SLOTS
        );
        log::info!("{}", config.to_string());

        Ok(Self {
            engine: MockEngine::new(config.seed),
            conf_threshold: config.conf_threshold,
            nms_threshold: config.nms_threshold,
            profile: config.profile,
        })
    }

    fn preprocess(&self, x: &Self::Input) -> Result<NormTensor> {
        image_ops::preprocess(x)
    }

    fn inference(&mut self, x: NormTensor) -> Result<DetectionSet> {
        Ok(self.engine.run(&x))
    }

    fn postprocess(&self, detections: &DetectionSet, conf_threshold: f32) -> Result<Vec<Detection>> {
        Ok(post_filter::filter_detections(detections, conf_threshold))
    }
}
