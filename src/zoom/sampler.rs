use image::{RgbImage, RgbaImage};
use screenshots::Screen;

use crate::zoom::region::{CaptureRegion, ScreenBounds};

/// One tick's worth of screen pixels: RGB triplets, row-major top to bottom,
/// tagged with the region they came from. Never retained across ticks.
#[derive(Debug, Clone)]
pub struct CapturedFrame {
    pub region: CaptureRegion,
    pub image: RgbImage,
}

#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error(
        "region {}x{} at ({},{}) exceeds screen bounds {}x{}",
        region.width, region.height, region.left, region.top,
        bounds.width, bounds.height
    )]
    OutOfBounds {
        region: CaptureRegion,
        bounds: ScreenBounds,
    },

    #[error("no display available for capture: {0}")]
    NoDisplay(String),

    #[error("screen grab failed: {0}")]
    Grab(String),
}

/// Source of screen pixels. The display-backed implementation talks to the
/// OS; tests substitute their own.
pub trait ScreenSampler {
    fn sample(&mut self, region: CaptureRegion) -> Result<CapturedFrame, CaptureError>;
}

/// Samples the physical display through the `screenshots` crate.
pub struct DisplaySampler {
    bounds: ScreenBounds,
}

impl DisplaySampler {
    pub fn new() -> Result<Self, CaptureError> {
        let screen = primary_screen()?;
        Ok(Self {
            bounds: ScreenBounds {
                width: screen.display_info.width,
                height: screen.display_info.height,
            },
        })
    }

    /// Screen dimensions queried at startup, fixed for the process lifetime.
    pub fn bounds(&self) -> ScreenBounds {
        self.bounds
    }
}

impl ScreenSampler for DisplaySampler {
    fn sample(&mut self, region: CaptureRegion) -> Result<CapturedFrame, CaptureError> {
        if region.left < 0
            || region.top < 0
            || region.left as u32 + region.width > self.bounds.width
            || region.top as u32 + region.height > self.bounds.height
        {
            return Err(CaptureError::OutOfBounds {
                region,
                bounds: self.bounds,
            });
        }

        let screen = primary_screen()?;
        let rgba = screen
            .capture_area(region.left, region.top, region.width, region.height)
            .map_err(|err| CaptureError::Grab(err.to_string()))?;

        Ok(CapturedFrame {
            region,
            image: strip_alpha(&rgba),
        })
    }
}

fn primary_screen() -> Result<Screen, CaptureError> {
    Screen::from_point(0, 0).map_err(|err| CaptureError::NoDisplay(err.to_string()))
}

// The OS hands back RGBA; the pipeline carries plain RGB triplets.
fn strip_alpha(rgba: &RgbaImage) -> RgbImage {
    let mut rgb = RgbImage::new(rgba.width(), rgba.height());
    for (dst, src) in rgb.pixels_mut().zip(rgba.pixels()) {
        dst.0 = [src.0[0], src.0[1], src.0[2]];
    }
    rgb
}

#[cfg(test)]
mod tests {
    use super::strip_alpha;
    use image::{Rgba, RgbaImage};

    #[test]
    fn strip_alpha_drops_the_fourth_channel() {
        let rgba = RgbaImage::from_pixel(3, 2, Rgba([10, 20, 30, 40]));
        let rgb = strip_alpha(&rgba);
        assert_eq!((rgb.width(), rgb.height()), (3, 2));
        assert!(rgb.pixels().all(|px| px.0 == [10, 20, 30]));
    }
}
