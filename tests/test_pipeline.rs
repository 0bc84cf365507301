use std::path::{Path, PathBuf};
use image::{Rgb, RgbImage};
use vst_detect::common::{DetBox, Detection, PipelineConfig};
use vst_detect::errors::DetectError;
use vst_detect::renderer::Renderer;
use vst_detect::{init_pipeline, load_image, run_pipeline};

fn write_test_image(dir: &Path) -> PathBuf {
    let path = dir.join("frame.jpg");
    let image = RgbImage::from_fn(320, 240, |x, y| Rgb([(x % 256) as u8, (y % 256) as u8, 64]));
    image.save(&path).unwrap();
    path
}

#[test]
fn missing_input_fails_before_processing() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.jpg");
    let output = dir.path().join("detection_output.jpg");

    let config = PipelineConfig::new();
    let mut yolo = init_pipeline(&config).unwrap();
    let err = run_pipeline(&mut yolo, &config, &missing, &output).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<DetectError>(),
        Some(DetectError::FileNotFound(_))
    ));
    assert!(!output.exists());
}

#[test]
fn full_run_draws_and_returns_the_mock_detections() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_test_image(dir.path());
    let output = dir.path().join("detection_output.jpg");

    // Mock head scores are in [0.5, 1.0), so 0.45 keeps exactly the seeded slots
    let config = PipelineConfig::new().with_conf_threshold(0.45).with_seed(42);
    let mut yolo = init_pipeline(&config).unwrap();
    let detections = run_pipeline(&mut yolo, &config, &input, &output).unwrap();

    assert_eq!(detections.len(), 5);
    let indices: Vec<usize> = detections.iter().map(|d| d.index).collect();
    assert_eq!(indices, vec![0, 1, 2, 3, 4]);
    assert!(detections.iter().all(|d| d.score > 0.45));
    assert!(output.exists());
}

#[test]
fn repeated_runs_are_reproducible() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_test_image(dir.path());
    let output = dir.path().join("detection_output.jpg");

    let config = PipelineConfig::new().with_conf_threshold(0.45).with_seed(9);
    let mut yolo = init_pipeline(&config).unwrap();

    let first = run_pipeline(&mut yolo, &config, &input, &output).unwrap();
    let second = run_pipeline(&mut yolo, &config, &input, &output).unwrap();
    assert_eq!(first, second);
}

#[test]
fn impossible_threshold_skips_visualization() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_test_image(dir.path());
    let output = dir.path().join("detection_output.jpg");

    // Head scores stay below 1.0, so nothing passes the exclusive gate
    let config = PipelineConfig::new().with_conf_threshold(1.0);
    let mut yolo = init_pipeline(&config).unwrap();
    let detections = run_pipeline(&mut yolo, &config, &input, &output).unwrap();

    assert!(detections.is_empty());
    assert!(!output.exists());
}

#[test]
fn load_image_decodes_to_rgb() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_test_image(dir.path());

    let image = load_image(&input).unwrap();
    assert_eq!(image.dimensions(), (320, 240));
}

#[test]
fn renderer_writes_nothing_for_an_empty_list() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.jpg");
    let image = load_image(write_test_image(dir.path())).unwrap();

    let renderer = Renderer::new(None);
    renderer.render(&image, &[], &output).unwrap();
    assert!(!output.exists());
}

#[test]
fn renderer_writes_a_640_square_frame() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.jpg");
    let image = load_image(write_test_image(dir.path())).unwrap();

    let detections = vec![Detection::new(0, 0, 0.9, DetBox::new(100.0, 120.0, 80.0, 60.0))];
    let renderer = Renderer::new(None);
    renderer.render(&image, &detections, &output).unwrap();

    let written = image::open(&output).unwrap();
    assert_eq!(written.width(), 640);
    assert_eq!(written.height(), 640);
}
