use serde::{Deserialize, Serialize};
use crate::common::coco_labels;
use crate::common::DetBox;

/// One post-filtered candidate. `index` is the slot the detection occupied
/// in the raw output arrays and survives filtering unchanged.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub index: usize,
    pub class_id: i8,
    pub score: f32,
    pub bbox: DetBox,
}

impl Detection {
    pub fn new(index: usize, class_id: i8, score: f32, bbox: DetBox) -> Self {
        Self {
            index,
            class_id,
            score,
            bbox,
        }
    }

    /// Sets the bounding box using `(x, y, w, h)`.
    pub fn with_xy_wh(mut self, x: f32, y: f32, w: f32, h: f32) -> Self {
        self.bbox = DetBox::new(x, y, w, h);
        self
    }

    /// Sets the confidence score of the detection.
    pub fn with_score(mut self, score: f32) -> Self {
        self.score = score;
        self
    }

    /// Sets the class ID of the detection.
    pub fn with_class_id(mut self, class_id: i8) -> Self {
        self.class_id = class_id;
        self
    }

    pub fn label(&self) -> &'static str {
        coco_labels::label_for(self.class_id)
    }

    pub fn log_detection(&self) {
        let (x, y, w, h) = self.bbox.xy_wh();
        log::info!(
            "Detection {}: Class={} ({}), Score={:.3}, BBox=({:.1}, {:.1}, {:.1}, {:.1})",
            self.index, self.class_id, self.label(), self.score, x, y, w, h
        );
    }
}
