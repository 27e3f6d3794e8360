use screen_loupe::zoom::region::{compute_capture_region, CursorPosition, ScreenBounds};

const SCREEN: ScreenBounds = ScreenBounds {
    width: 1920,
    height: 1080,
};

#[test]
fn centred_cursor_yields_centred_region() {
    let region = compute_capture_region(CursorPosition { x: 960, y: 540 }, 120, SCREEN);
    assert_eq!((region.left, region.top), (900, 480));
    assert_eq!((region.width, region.height), (120, 120));
}

#[test]
fn origin_corner_clamps_to_zero() {
    let region = compute_capture_region(CursorPosition { x: 0, y: 0 }, 120, SCREEN);
    assert_eq!((region.left, region.top), (0, 0));
}

#[test]
fn far_corner_clamps_to_screen_edge() {
    let region = compute_capture_region(CursorPosition { x: 1919, y: 1079 }, 120, SCREEN);
    assert_eq!((region.left, region.top), (1800, 960));
}

#[test]
fn region_always_lies_inside_screen() {
    let positions = [
        (0, 0),
        (5, 5),
        (59, 60),
        (960, 540),
        (1919, 0),
        (0, 1079),
        (1919, 1079),
        (1860, 1020),
    ];
    for (x, y) in positions {
        let region = compute_capture_region(CursorPosition { x, y }, 120, SCREEN);
        assert!(region.left >= 0, "left negative for cursor ({x},{y})");
        assert!(region.top >= 0, "top negative for cursor ({x},{y})");
        assert!(
            region.left as u32 + region.width <= SCREEN.width,
            "region spills right for cursor ({x},{y})"
        );
        assert!(
            region.top as u32 + region.height <= SCREEN.height,
            "region spills down for cursor ({x},{y})"
        );
    }
}

// Pins the fallback policy: a capture square larger than the screen anchors
// at the origin instead of inverting the clamp bounds.
#[test]
fn oversized_area_floors_at_zero() {
    let small = ScreenBounds {
        width: 800,
        height: 600,
    };
    let region = compute_capture_region(CursorPosition { x: 799, y: 599 }, 1024, small);
    assert_eq!((region.left, region.top), (0, 0));
    assert_eq!((region.width, region.height), (1024, 1024));
}
