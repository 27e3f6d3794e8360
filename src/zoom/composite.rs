use image::{Rgba, RgbaImage};

use crate::zoom::magnify::MagnifiedFrame;

/// Dimming layer drawn outside the lens hole: black at roughly 40% opacity.
pub const VIGNETTE: Rgba<u8> = Rgba([0, 0, 0, 100]);

/// Centre marker for the true cursor position: translucent yellow disc.
pub const MARKER: Rgba<u8> = Rgba([255, 255, 0, 120]);
pub const MARKER_RADIUS: i32 = 8;

/// Build the window-ready frame for the floating overlay. The magnified
/// pixels fill the whole buffer; everything outside a circular hole of radius
/// half the side is dimmed by [`VIGNETTE`], pixels inside the hole stay
/// untouched, and the [`MARKER`] disc lands on the exact centre.
pub fn compose_overlay_frame(frame: &MagnifiedFrame) -> RgbaImage {
    let mut out = opaque(frame);
    let hole_radius = (out.width().min(out.height()) / 2) as i32;
    apply_vignette(&mut out, hole_radius);
    draw_marker(&mut out);
    out
}

fn opaque(frame: &MagnifiedFrame) -> RgbaImage {
    let mut out = RgbaImage::new(frame.width(), frame.height());
    for (dst, src) in out.pixels_mut().zip(frame.image.pixels()) {
        dst.0 = [src.0[0], src.0[1], src.0[2], 255];
    }
    out
}

/// Dim every pixel further than `hole_radius` from the centre, cutting a
/// sharp circular hole for the magnified view.
pub fn apply_vignette(image: &mut RgbaImage, hole_radius: i32) {
    let (cx, cy) = centre(image);
    let r2 = i64::from(hole_radius) * i64::from(hole_radius);
    for (x, y, px) in image.enumerate_pixels_mut() {
        let dx = i64::from(x as i32 - cx);
        let dy = i64::from(y as i32 - cy);
        if dx * dx + dy * dy > r2 {
            blend_pixel(px, VIGNETTE);
        }
    }
}

/// Stamp the cursor marker disc on the centre of the frame.
pub fn draw_marker(image: &mut RgbaImage) {
    let (cx, cy) = centre(image);
    let r2 = i64::from(MARKER_RADIUS) * i64::from(MARKER_RADIUS);
    for (x, y, px) in image.enumerate_pixels_mut() {
        let dx = i64::from(x as i32 - cx);
        let dy = i64::from(y as i32 - cy);
        if dx * dx + dy * dy <= r2 {
            blend_pixel(px, MARKER);
        }
    }
}

fn centre(image: &RgbaImage) -> (i32, i32) {
    ((image.width() / 2) as i32, (image.height() / 2) as i32)
}

// Source-over blend of `top` onto an opaque base pixel.
fn blend_pixel(base: &mut Rgba<u8>, top: Rgba<u8>) {
    let sa = top.0[3] as f32 / 255.0;
    for c in 0..3 {
        let blended = top.0[c] as f32 * sa + base.0[c] as f32 * (1.0 - sa);
        base.0[c] = blended.round().clamp(0.0, 255.0) as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::blend_pixel;
    use image::Rgba;

    #[test]
    fn vignette_over_white_blends_expected_value() {
        let mut px = Rgba([255u8, 255, 255, 255]);
        blend_pixel(&mut px, super::VIGNETTE);
        assert_eq!(px.0, [155, 155, 155, 255]);
    }
}
