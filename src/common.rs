
mod coco_labels;
mod det_box;
mod detection;
mod detection_set;
mod pipeline_config;
mod vst_image;

pub use coco_labels::*;
pub use det_box::*;
pub use detection::*;
pub use detection_set::*;
pub use pipeline_config::*;
pub use vst_image::*;

/// Model input resolution of the device pipeline.
pub const INPUT_WIDTH: u32 = 640;
pub const INPUT_HEIGHT: u32 = 640;
