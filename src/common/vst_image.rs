use image::{DynamicImage, GrayImage, RgbImage, RgbaImage};
use crate::errors::DetectError;

/// A frame in the layout the VST camera path hands to preprocessing:
/// H x W x 3 unsigned 8-bit pixels, RGB order.
#[derive(Debug, Clone, Default)]
pub struct VstImage {
    pub image: RgbImage,
    pub img_width: u32,
    pub img_height: u32,
}

impl std::ops::Deref for VstImage {
    type Target = RgbImage;

    fn deref(&self) -> &Self::Target {
        &self.image
    }
}

impl From<DynamicImage> for VstImage {
    fn from(image: DynamicImage) -> Self {
        Self::new(image.to_rgb8())
    }
}

impl From<GrayImage> for VstImage {
    fn from(image: GrayImage) -> Self {
        Self::new(DynamicImage::from(image).to_rgb8())
    }
}

impl From<RgbaImage> for VstImage {
    fn from(image: RgbaImage) -> Self {
        Self::new(DynamicImage::from(image).to_rgb8())
    }
}

impl From<RgbImage> for VstImage {
    fn from(image: RgbImage) -> Self {
        Self::new(image)
    }
}

impl From<VstImage> for RgbImage {
    fn from(image: VstImage) -> Self {
        image.into_rgb8()
    }
}

impl VstImage {
    pub fn new(image: RgbImage) -> Self {
        let (img_width, img_height) = image.dimensions();
        Self {
            image,
            img_width,
            img_height,
        }
    }

    /// Wraps a raw interleaved pixel buffer. The camera path only ever hands
    /// over 3-channel RGB; anything else is rejected as malformed input.
    pub fn from_raw(width: u32, height: u32, channels: u8, data: Vec<u8>) -> Result<Self, DetectError> {
        if channels != 3 {
            return Err(DetectError::InvalidImage(format!(
                "expected 3 channels (RGB), got {}", channels
            )));
        }
        let expected = width as usize * height as usize * 3;
        if data.len() != expected {
            return Err(DetectError::InvalidImage(format!(
                "buffer holds {} bytes, {}x{}x3 needs {}", data.len(), width, height, expected
            )));
        }
        let image = RgbImage::from_raw(width, height, data).ok_or_else(|| {
            DetectError::InvalidImage(format!("buffer does not fit {}x{}x3", width, height))
        })?;
        Ok(Self::new(image))
    }

    pub fn get_ratio(&self) -> f32 {
        self.img_width as f32 / self.img_height as f32
    }

    pub fn clone_image(&self) -> RgbImage {
        self.image.clone()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn to_dyn(&self) -> DynamicImage {
        DynamicImage::from(self.image.clone())
    }

    pub fn into_rgb8(self) -> RgbImage {
        self.image
    }
}
