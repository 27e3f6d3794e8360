use once_cell::sync::Lazy;
use std::sync::Mutex;

/// Most recent pointer position reported by the global input listener.
static TRACKED_POSITION: Lazy<Mutex<Option<(i32, i32)>>> = Lazy::new(|| Mutex::new(None));

/// Test override for [`position`]. `Some(None)` simulates a failed cursor
/// query, `None` disables the mock entirely.
static MOCK_POSITION: Lazy<Mutex<Option<Option<(i32, i32)>>>> = Lazy::new(|| Mutex::new(None));

/// Tests that install a mock position hold this lock for their duration so
/// concurrently running tests cannot interleave.
pub static MOCK_CURSOR_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

pub fn set_mock_position(pos: Option<(i32, i32)>) {
    *MOCK_POSITION.lock().unwrap() = Some(pos);
}

pub fn clear_mock_position() {
    *MOCK_POSITION.lock().unwrap() = None;
}

/// Record a pointer position observed by the input listener thread.
pub fn note_position(x: i32, y: i32) {
    *TRACKED_POSITION.lock().unwrap() = Some((x, y));
}

/// Current pointer position in virtual-screen coordinates. Queries the OS
/// where a direct call exists and otherwise falls back to the last position
/// seen by the input listener.
pub fn position() -> Option<(i32, i32)> {
    if let Some(mock) = *MOCK_POSITION.lock().unwrap() {
        return mock;
    }

    #[cfg(target_os = "windows")]
    {
        use windows::Win32::Foundation::POINT;
        use windows::Win32::UI::WindowsAndMessaging::GetCursorPos;
        let mut pt = POINT::default();
        if unsafe { GetCursorPos(&mut pt).is_ok() } {
            return Some((pt.x, pt.y));
        }
    }

    *TRACKED_POSITION.lock().unwrap()
}
