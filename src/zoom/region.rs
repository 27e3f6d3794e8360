/// Fixed screen dimensions, queried once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenBounds {
    pub width: u32,
    pub height: u32,
}

/// Pointer position in virtual-screen coordinates, snapshotted once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPosition {
    pub x: i32,
    pub y: i32,
}

impl From<(i32, i32)> for CursorPosition {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Square of screen pixels to sample this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureRegion {
    pub left: i32,
    pub top: i32,
    pub width: u32,
    pub height: u32,
}

/// Centre a square of `area_size` pixels on the cursor, clamped so the region
/// stays inside the screen. When `area_size` exceeds a screen dimension the
/// upper clamp bound would drop below zero; it is floored at zero instead,
/// keeping the region anchored at the origin, and the sampler rejects the
/// oversized result.
pub fn compute_capture_region(
    cursor: CursorPosition,
    area_size: u32,
    bounds: ScreenBounds,
) -> CaptureRegion {
    let area = area_size as i32;
    let half = area / 2;
    let max_left = (bounds.width as i32 - area).max(0);
    let max_top = (bounds.height as i32 - area).max(0);

    CaptureRegion {
        left: (cursor.x - half).clamp(0, max_left),
        top: (cursor.y - half).clamp(0, max_top),
        width: area_size,
        height: area_size,
    }
}
