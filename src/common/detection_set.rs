use anyhow::{bail, Result};

/// Number of candidate slots the device model emits per frame.
pub const NUM_SLOTS: usize = 8400;

/// Size of the COCO label set the device model indexes into.
pub const NUM_CLASSES: usize = 80;

/// Raw model output for one frame: three parallel arrays, positionally
/// aligned by detection slot. The arrays are produced and consumed together
/// as one unit and always hold exactly [`NUM_SLOTS`] rows.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionSet {
    /// x, y, w, h per slot, in pixel space of the 640x640 frame.
    pub boxes: Vec<[f32; 4]>,
    /// Confidence per slot, in [0, 1].
    pub scores: Vec<f32>,
    /// Class index per slot, signed byte as the model emits it.
    pub class_idx: Vec<i8>,
}

impl Default for DetectionSet {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl DetectionSet {
    /// All slots zeroed, ready for the engine to fill.
    pub fn zeroed() -> Self {
        Self {
            boxes: vec![[0.0; 4]; NUM_SLOTS],
            scores: vec![0.0; NUM_SLOTS],
            class_idx: vec![0; NUM_SLOTS],
        }
    }

    /// Builds a set from pre-filled arrays, rejecting misaligned rows.
    pub fn from_parts(boxes: Vec<[f32; 4]>, scores: Vec<f32>, class_idx: Vec<i8>) -> Result<Self> {
        if boxes.len() != NUM_SLOTS || scores.len() != NUM_SLOTS || class_idx.len() != NUM_SLOTS {
            bail!(
                "detection arrays must hold exactly {} aligned rows, got boxes={} scores={} classes={}",
                NUM_SLOTS, boxes.len(), scores.len(), class_idx.len()
            );
        }
        Ok(Self {
            boxes,
            scores,
            class_idx,
        })
    }

    pub fn num_slots(&self) -> usize {
        NUM_SLOTS
    }
}
