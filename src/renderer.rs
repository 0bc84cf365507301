//! Overlays filtered detections on the resized frame and writes the result
//! to disk. Styling is not part of the production contract; the skip-on-empty
//! behavior is.

use std::path::Path;
use ab_glyph::{FontVec, PxScale};
use anyhow::{Context, Result};
use imageproc::drawing::{draw_hollow_rect_mut, draw_text_mut};
use imageproc::rect::Rect;
use crate::common::{Detection, VstImage, INPUT_HEIGHT, INPUT_WIDTH};
use crate::detection_runners::mock_detector::image_ops;

mod colours;

/// Font locations tried when the config does not name one.
const SYSTEM_FONTS: [&str; 3] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
];

const LABEL_HEIGHT: f32 = 16.0;
const BOX_THICKNESS: i32 = 2;

pub struct Renderer {
    font: Option<FontVec>,
}

impl Renderer {
    /// Loads the label font from `font_path` or the first system location
    /// that works. Without a font the renderer still draws boxes.
    pub fn new(font_path: Option<&Path>) -> Self {
        let font = match font_path {
            Some(path) => load_font(path),
            None => SYSTEM_FONTS.iter().find_map(|p| load_font(Path::new(p))),
        };
        if font.is_none() {
            log::warn!("No label font available, drawing boxes without text");
        }
        Self { font }
    }

    /// Draws `detections` over a 640x640 copy of `image` and writes it to
    /// `output_path` in the frame's native RGB order. Writes nothing when
    /// the list is empty: an unannotated frame copy is not a useful
    /// artifact, and the device path skips it too.
    pub fn render(&self, image: &VstImage, detections: &[Detection], output_path: &Path) -> Result<()> {
        if detections.is_empty() {
            return Ok(());
        }

        let mut canvas = image_ops::resize_rgb(&image.image, INPUT_WIDTH, INPUT_HEIGHT);

        for det in detections {
            let (x, y, w, h) = det.bbox.as_xy_wh_i32();
            let colour = colours::get_class_colour(det.class_id);

            for t in 0..BOX_THICKNESS {
                let (bw, bh) = (w - 2 * t, h - 2 * t);
                if bw <= 0 || bh <= 0 {
                    break;
                }
                let rect = Rect::at(x + t, y + t).of_size(bw as u32, bh as u32);
                draw_hollow_rect_mut(&mut canvas, rect, colour);
            }

            if let Some(font) = &self.font {
                let label = format!("Class {}: {:.2}", det.class_id, det.score);
                let ty = (y - LABEL_HEIGHT as i32 - 2).max(0);
                draw_text_mut(&mut canvas, colour, x.max(0), ty, PxScale::from(LABEL_HEIGHT), font, &label);
            }
        }

        canvas
            .save(output_path)
            .with_context(|| format!("failed to write {}", output_path.display()))?;
        log::info!("Visualization saved to: {}", output_path.display());
        Ok(())
    }
}

fn load_font(path: &Path) -> Option<FontVec> {
    let bytes = std::fs::read(path).ok()?;
    FontVec::try_from_vec(bytes).ok()
}
