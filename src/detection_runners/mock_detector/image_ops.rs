//! Functions to preprocess frames for the detection model.

use anyhow::Result;
use image::RgbImage;
use crate::common::{VstImage, INPUT_HEIGHT, INPUT_WIDTH};
use crate::detection_runners::mock_detector::NormTensor;
use crate::errors::DetectError;

// ITU-R BT.601 luma weights, the 8-bit grayscale conversion the device
// pipeline applies.
const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

/// Resizes to `width` x `height` with `fast_image_resize`, falling back to
/// the `image` crate's resize if the fast path rejects the buffer.
pub fn resize_rgb(image: &RgbImage, width: u32, height: u32) -> RgbImage {
    let src = image::DynamicImage::ImageRgb8(image.clone());

    let mut resizer = fast_image_resize::Resizer::new();
    let options = fast_image_resize::ResizeOptions {
        algorithm: fast_image_resize::ResizeAlg::Convolution(
            fast_image_resize::FilterType::Bilinear,
        ),
        ..Default::default()
    };

    let mut resized = image::DynamicImage::new(width, height, src.color());
    if let Err(err) = resizer.resize(&src, &mut resized, &options) {
        log::warn!("Failed to use `fast_image_resize`: {err}. Falling back.");
        return image::imageops::resize(image, width, height, image::imageops::FilterType::Triangle);
    }
    resized.into_rgb8()
}

/// Main preprocessing entry point. Four pure deterministic transforms, in
/// the device operator order:
///
/// 1. Resize to 640x640, no aspect-ratio preservation. The device pipeline
///    applies an affine crop out of the full VST frame before this point;
///    the crop parameters live in device geometry this local path does not
///    have, so the whole frame is resized instead. Deliberate divergence,
///    not to be "fixed" here.
/// 2. RGB to 8-bit grayscale with the BT.601 luma weights.
/// 3. Widen to f32.
/// 4. Divide by 255.0, yielding values in [0, 1].
pub fn preprocess(image: &VstImage) -> Result<NormTensor> {
    let (w, h) = image.dimensions();
    let expected = w as usize * h as usize * 3;
    if image.as_raw().len() != expected {
        return Err(DetectError::InvalidImage(format!(
            "buffer holds {} bytes, {}x{}x3 needs {}", image.as_raw().len(), w, h, expected
        )).into());
    }

    log::info!("Preprocessing frame: {}x{} -> {}x{}", w, h, INPUT_WIDTH, INPUT_HEIGHT);

    let resized = resize_rgb(&image.image, INPUT_WIDTH, INPUT_HEIGHT);

    let mut data = Vec::with_capacity((INPUT_WIDTH * INPUT_HEIGHT) as usize);
    for px in resized.pixels() {
        let [r, g, b] = px.0;
        // 8-bit luma first, then widen, matching the device operator chain
        let luma = (LUMA_R * r as f32 + LUMA_G * g as f32 + LUMA_B * b as f32).round() as u8;
        data.push(luma as f32 / 255.0);
    }

    NormTensor::from_shape_vec(INPUT_HEIGHT as usize, INPUT_WIDTH as usize, data)
}
