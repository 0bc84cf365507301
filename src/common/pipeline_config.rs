use std::path::{Path, PathBuf};

/// Options for building the mock pipeline.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Detections at or below this score are dropped by the post-filter.
    pub conf_threshold: f32,
    /// Carried for parity with the device post-process signature. The mock
    /// path performs no overlap suppression, so this is never applied.
    pub nms_threshold: f32,
    /// Seed for the mock engine; every inference call re-derives its RNG
    /// from this value.
    pub seed: u64,
    /// Font used for detection labels. When unset, well-known system
    /// locations are tried and rendering degrades to boxes only.
    pub font_path: Option<PathBuf>,
    /// Log a stage timing summary after each forward pass.
    pub profile: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            conf_threshold: 0.5,
            nms_threshold: 0.45,
            seed: 42,
            font_path: None,
            profile: false,
        }
    }
}

impl PipelineConfig {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_conf_threshold(mut self, x: f32) -> Self {
        self.conf_threshold = x;
        self
    }

    pub fn with_nms_threshold(mut self, x: f32) -> Self {
        self.nms_threshold = x;
        self
    }

    pub fn with_seed(mut self, x: u64) -> Self {
        self.seed = x;
        self
    }

    pub fn with_font_path(mut self, path: &Path) -> Self {
        self.font_path = Some(path.to_path_buf());
        self
    }

    pub fn with_profile(mut self, x: bool) -> Self {
        self.profile = x;
        self
    }

    pub fn to_string(&self) -> String {
        format!("Confidence Threshold: {}\n\
        NMS Threshold (not applied by mock path): {}\n\
        Mock Seed: {}\n\
        Label Font: {}\n\
        Profile: {}",
                self.conf_threshold, self.nms_threshold, self.seed,
                self.font_path.as_deref().map(|p| p.display().to_string()).unwrap_or_else(|| "system default".to_string()),
                self.profile)
    }
}
