use image::imageops::{self, FilterType};
use image::RgbImage;

use crate::zoom::sampler::CapturedFrame;

/// Upscaled pixel buffer ready for presentation. Derived from exactly one
/// [`CapturedFrame`] and discarded after compositing.
#[derive(Debug, Clone)]
pub struct MagnifiedFrame {
    pub image: RgbImage,
}

impl MagnifiedFrame {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// Scale the captured block to the target size with bilinear interpolation.
/// The source is square in normal operation so the aspect ratio is preserved
/// implicitly; a non-square source is stretched independently per axis.
/// Target dimensions are validated at config load, never here.
pub fn magnify(frame: &CapturedFrame, target_width: u32, target_height: u32) -> MagnifiedFrame {
    MagnifiedFrame {
        image: imageops::resize(&frame.image, target_width, target_height, FilterType::Triangle),
    }
}
