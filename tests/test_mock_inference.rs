use ndarray::Array2;
use vst_detect::common::{NUM_CLASSES, NUM_SLOTS};
use vst_detect::detection_runners::mock_detector::{MockEngine, NormTensor, NUM_MOCK_DETECTIONS};

fn input_tensor() -> NormTensor {
    NormTensor::from(Array2::<f32>::zeros((640, 640)))
}

#[test]
fn reproducible_for_equal_seeds() {
    let tensor = input_tensor();

    let engine = MockEngine::new(42);
    let first = engine.run(&tensor);
    let second = engine.run(&tensor);
    assert_eq!(first, second);

    let other_instance = MockEngine::new(42);
    assert_eq!(first, other_instance.run(&tensor));
}

#[test]
fn different_seeds_differ() {
    let tensor = input_tensor();
    let a = MockEngine::new(1).run(&tensor);
    let b = MockEngine::new(2).run(&tensor);
    assert_ne!(a, b);
}

#[test]
fn output_arrays_stay_aligned() {
    let out = MockEngine::new(7).run(&input_tensor());

    assert_eq!(out.boxes.len(), NUM_SLOTS);
    assert_eq!(out.scores.len(), NUM_SLOTS);
    assert_eq!(out.class_idx.len(), NUM_SLOTS);
    assert_eq!(out.num_slots(), NUM_SLOTS);
}

#[test]
fn head_slots_look_like_detections() {
    let out = MockEngine::new(42).run(&input_tensor());

    for i in 0..NUM_MOCK_DETECTIONS {
        let [x, y, w, h] = out.boxes[i];
        assert!((0.0..640.0).contains(&x));
        assert!((0.0..640.0).contains(&y));
        assert!((50.0..150.0).contains(&w));
        assert!((50.0..150.0).contains(&h));
        assert!((0.5..1.0).contains(&out.scores[i]));
        assert!((0..NUM_CLASSES as i8).contains(&out.class_idx[i]));
    }
}

#[test]
fn tail_slots_are_low_confidence_noise() {
    let out = MockEngine::new(42).run(&input_tensor());

    for i in NUM_MOCK_DETECTIONS..NUM_SLOTS {
        assert!(out.scores[i] < 0.1);
        assert_eq!(out.boxes[i], [0.0; 4]);
        assert_eq!(out.class_idx[i], 0);
    }
}
