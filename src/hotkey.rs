use rdev::{listen, EventType, Key};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;
use std::time::Duration;

use crate::cursor;

/// One edge-triggered firing of the bound key combination. Each press of the
/// full combination produces exactly one event; holding it down does not
/// repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hotkey {
    pub key: Key,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

/// Parse a key combination like "ctrl+shift+z" into a [`Hotkey`].
/// Case-insensitive; modifiers in any order; exactly one non-modifier key.
pub fn parse_hotkey(s: &str) -> Option<Hotkey> {
    let mut ctrl = false;
    let mut shift = false;
    let mut alt = false;
    let mut key: Option<Key> = None;

    for part in s.split('+') {
        let upper = part.trim().to_ascii_uppercase();
        match upper.as_str() {
            "CTRL" | "CONTROL" => ctrl = true,
            "SHIFT" => shift = true,
            "ALT" => alt = true,
            "" => {}
            _ => key = Some(parse_key(&upper)?),
        }
    }

    key.map(|key| Hotkey {
        key,
        ctrl,
        shift,
        alt,
    })
}

const LETTER_KEYS: [Key; 26] = [
    Key::KeyA,
    Key::KeyB,
    Key::KeyC,
    Key::KeyD,
    Key::KeyE,
    Key::KeyF,
    Key::KeyG,
    Key::KeyH,
    Key::KeyI,
    Key::KeyJ,
    Key::KeyK,
    Key::KeyL,
    Key::KeyM,
    Key::KeyN,
    Key::KeyO,
    Key::KeyP,
    Key::KeyQ,
    Key::KeyR,
    Key::KeyS,
    Key::KeyT,
    Key::KeyU,
    Key::KeyV,
    Key::KeyW,
    Key::KeyX,
    Key::KeyY,
    Key::KeyZ,
];

const DIGIT_KEYS: [Key; 10] = [
    Key::Num0,
    Key::Num1,
    Key::Num2,
    Key::Num3,
    Key::Num4,
    Key::Num5,
    Key::Num6,
    Key::Num7,
    Key::Num8,
    Key::Num9,
];

const FUNCTION_KEYS: [Key; 12] = [
    Key::F1,
    Key::F2,
    Key::F3,
    Key::F4,
    Key::F5,
    Key::F6,
    Key::F7,
    Key::F8,
    Key::F9,
    Key::F10,
    Key::F11,
    Key::F12,
];

fn parse_key(upper: &str) -> Option<Key> {
    match upper {
        "SPACE" => Some(Key::Space),
        "TAB" => Some(Key::Tab),
        "ENTER" | "RETURN" => Some(Key::Return),
        "ESC" | "ESCAPE" => Some(Key::Escape),
        "DELETE" => Some(Key::Delete),
        "BACKSPACE" => Some(Key::Backspace),
        "HOME" => Some(Key::Home),
        "END" => Some(Key::End),
        "PAGEUP" => Some(Key::PageUp),
        "PAGEDOWN" => Some(Key::PageDown),
        "LEFT" | "LEFTARROW" => Some(Key::LeftArrow),
        "RIGHT" | "RIGHTARROW" => Some(Key::RightArrow),
        "UP" | "UPARROW" => Some(Key::UpArrow),
        "DOWN" | "DOWNARROW" => Some(Key::DownArrow),
        _ => {
            let mut chars = upper.chars();
            let first = chars.next()?;
            let rest = chars.as_str();
            if first == 'F' && !rest.is_empty() {
                return match rest.parse::<usize>().ok()? {
                    n @ 1..=12 => Some(FUNCTION_KEYS[n - 1]),
                    _ => None,
                };
            }
            if !rest.is_empty() {
                return None;
            }
            if first.is_ascii_uppercase() {
                Some(LETTER_KEYS[(first as u8 - b'A') as usize])
            } else if first.is_ascii_digit() {
                Some(DIGIT_KEYS[(first as u8 - b'0') as usize])
            } else {
                None
            }
        }
    }
}

/// Spawn the global input listener thread. Each full press of `hotkey` sends
/// one [`ToggleEvent`] down the returned channel; the render loop drains the
/// channel between ticks so flips land deterministically. The same listener
/// feeds the shared cursor tracker from mouse-move events, which is what
/// answers cursor polls on platforms without a direct query.
pub fn spawn_listener(hotkey: Hotkey) -> Receiver<ToggleEvent> {
    let (tx, rx) = channel::<ToggleEvent>();

    let result = thread::Builder::new()
        .name("input-listener".to_string())
        .spawn(move || listener_loop(hotkey, tx));
    if let Err(err) = result {
        tracing::error!("failed to spawn input listener thread: {err}");
    }

    rx
}

fn listener_loop(hotkey: Hotkey, tx: Sender<ToggleEvent>) {
    tracing::debug!("starting input listener for {:?}", hotkey.key);
    loop {
        let events = tx.clone();
        let watch = hotkey.key;
        let need_ctrl = hotkey.ctrl;
        let need_shift = hotkey.shift;
        let need_alt = hotkey.alt;

        let mut ctrl_pressed = false;
        let mut shift_pressed = false;
        let mut alt_pressed = false;
        let mut watch_pressed = false;
        let mut triggered = false;

        let result = listen(move |event| {
            match event.event_type {
                EventType::MouseMove { x, y } => {
                    cursor::note_position(x as i32, y as i32);
                    return;
                }
                EventType::KeyPress(k) => {
                    match k {
                        Key::ControlLeft | Key::ControlRight => ctrl_pressed = true,
                        Key::ShiftLeft | Key::ShiftRight => shift_pressed = true,
                        Key::Alt | Key::AltGr => alt_pressed = true,
                        _ => {}
                    }
                    if k == watch {
                        watch_pressed = true;
                    }
                }
                EventType::KeyRelease(k) => {
                    match k {
                        Key::ControlLeft | Key::ControlRight => ctrl_pressed = false,
                        Key::ShiftLeft | Key::ShiftRight => shift_pressed = false,
                        Key::Alt | Key::AltGr => alt_pressed = false,
                        _ => {}
                    }
                    if k == watch {
                        watch_pressed = false;
                    }
                }
                _ => return,
            }

            let combo = watch_pressed
                && (!need_ctrl || ctrl_pressed)
                && (!need_shift || shift_pressed)
                && (!need_alt || alt_pressed);
            if combo {
                if !triggered {
                    triggered = true;
                    tracing::debug!("hotkey match, queueing toggle");
                    let _ = events.send(ToggleEvent);
                }
            } else {
                triggered = false;
            }
        });

        // Losing the listener means losing the toggle entirely, so surface
        // the failure loudly before retrying.
        match result {
            Ok(()) => tracing::error!("input listener exited unexpectedly; restarting shortly"),
            Err(err) => tracing::error!("input listener failed: {err:?}; retrying shortly"),
        }

        thread::sleep(Duration::from_millis(500));
    }
}
