use image::{Rgb, RgbImage};
use screen_loupe::zoom::composite::{compose_overlay_frame, MARKER_RADIUS};
use screen_loupe::zoom::magnify::MagnifiedFrame;

const SIDE: u32 = 240;

fn white_frame() -> MagnifiedFrame {
    MagnifiedFrame {
        image: RgbImage::from_pixel(SIDE, SIDE, Rgb([255, 255, 255])),
    }
}

#[test]
fn pixels_inside_hole_stay_sharp() {
    let out = compose_overlay_frame(&white_frame());
    // Halfway between the centre and the hole edge, clear of the marker.
    let px = out.get_pixel(180, 120);
    assert_eq!(px.0, [255, 255, 255, 255]);
}

#[test]
fn corners_outside_hole_are_dimmed() {
    let out = compose_overlay_frame(&white_frame());
    // Black at alpha 100/255 over white leaves 155.
    assert_eq!(out.get_pixel(0, 0).0, [155, 155, 155, 255]);
    assert_eq!(out.get_pixel(SIDE - 1, SIDE - 1).0, [155, 155, 155, 255]);
}

#[test]
fn marker_lands_on_exact_centre() {
    let out = compose_overlay_frame(&white_frame());
    // Yellow at alpha 120/255 over white: red and green saturate, blue drops.
    assert_eq!(out.get_pixel(120, 120).0, [255, 255, 135, 255]);
}

#[test]
fn marker_is_confined_to_its_radius() {
    let out = compose_overlay_frame(&white_frame());
    let just_outside = 120 + MARKER_RADIUS as u32 + 1;
    assert_eq!(out.get_pixel(just_outside, 120).0, [255, 255, 255, 255]);
}

#[test]
fn output_matches_input_dimensions() {
    let out = compose_overlay_frame(&white_frame());
    assert_eq!((out.width(), out.height()), (SIDE, SIDE));
}
