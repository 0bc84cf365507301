use vst_detect::common::{DetectionSet, NUM_SLOTS};
use vst_detect::detection_runners::mock_detector::post_filter::{
    filter_detections, refilter_detections,
};

/// Builds a set whose first slots carry the given scores (rest zeroed).
fn set_with_scores(head: &[f32]) -> DetectionSet {
    let mut scores = vec![0.0f32; NUM_SLOTS];
    scores[..head.len()].copy_from_slice(head);

    let mut boxes = vec![[0.0f32; 4]; NUM_SLOTS];
    for (i, b) in boxes.iter_mut().enumerate().take(head.len()) {
        *b = [i as f32 * 10.0, 20.0, 50.0, 60.0];
    }

    DetectionSet::from_parts(boxes, scores, vec![0i8; NUM_SLOTS]).unwrap()
}

#[test]
fn keeps_slots_above_threshold_in_order() {
    let set = set_with_scores(&[0.9, 0.3, 0.6]);
    let dets = filter_detections(&set, 0.5);

    let indices: Vec<usize> = dets.iter().map(|d| d.index).collect();
    assert_eq!(indices, vec![0, 2]);
    assert_eq!(dets[0].score, 0.9);
    assert_eq!(dets[1].bbox.x, 20.0);
}

#[test]
fn threshold_is_exclusive() {
    let set = set_with_scores(&[0.5, 0.51]);
    let dets = filter_detections(&set, 0.5);

    assert_eq!(dets.len(), 1);
    assert_eq!(dets[0].index, 1);
}

#[test]
fn all_zero_scores_yield_empty_list() {
    let set = DetectionSet::zeroed();
    assert!(filter_detections(&set, 0.5).is_empty());
}

#[test]
fn monotonic_in_threshold() {
    let set = set_with_scores(&[0.9, 0.3, 0.6, 0.55, 0.1]);
    let loose = filter_detections(&set, 0.2);
    let strict = filter_detections(&set, 0.5);

    assert!(strict.len() <= loose.len());
    for det in &strict {
        assert!(loose.contains(det));
    }
}

#[test]
fn refiltering_own_output_is_identity() {
    let set = set_with_scores(&[0.9, 0.3, 0.6]);
    let once = filter_detections(&set, 0.5);
    let twice = refilter_detections(&once, 0.5);
    assert_eq!(once, twice);
}

#[test]
fn misaligned_arrays_are_rejected() {
    let result = DetectionSet::from_parts(
        vec![[0.0f32; 4]; 10],
        vec![0.0f32; NUM_SLOTS],
        vec![0i8; NUM_SLOTS],
    );
    assert!(result.is_err());
}
