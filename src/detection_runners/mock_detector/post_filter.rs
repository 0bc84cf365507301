use crate::common::{DetBox, Detection, DetectionSet, NUM_SLOTS};

/// Confidence gate over the raw output arrays: strictly `score > threshold`
/// (exclusive), ascending slot order preserved. No deduplication or overlap
/// suppression runs here — the device pipeline applies NMS after this gate,
/// and that gap is intentionally left open by the mock path rather than
/// papered over.
pub fn filter_detections(detections: &DetectionSet, conf_threshold: f32) -> Vec<Detection> {
    log::info!("Post-processing (threshold={})", conf_threshold);

    let mut valid = Vec::new();
    for i in 0..NUM_SLOTS {
        let score = detections.scores[i];
        if score > conf_threshold {
            let [x, y, w, h] = detections.boxes[i];
            valid.push(Detection::new(
                i,
                detections.class_idx[i],
                score,
                DetBox::new(x, y, w, h),
            ));
        }
    }

    log::info!("Found {} valid detections", valid.len());
    valid
}

/// Applies the same gate to an already-materialized list. Filtering its own
/// output at the same threshold returns it unchanged.
pub fn refilter_detections(detections: &[Detection], conf_threshold: f32) -> Vec<Detection> {
    detections
        .iter()
        .filter(|d| d.score > conf_threshold)
        .cloned()
        .collect()
}
