//! Key input mapping
//!
//! Hosts report keys either by name (web-style or GPUI-style key strings) or
//! by macOS virtual key code. Text editing itself arrives separately as a
//! `TextChanged` event from the host's text field.

/// Keys the search window reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Backspace,
    Enter,
    ArrowUp,
    ArrowDown,
    Other,
}

// macOS virtual key codes
const KEYCODE_ENTER: u16 = 36;
const KEYCODE_BACKSPACE: u16 = 51;
const KEYCODE_ESCAPE: u16 = 53;
const KEYCODE_ARROW_DOWN: u16 = 125;
const KEYCODE_ARROW_UP: u16 = 126;

impl Key {
    /// Parse a host key name, ignoring case
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "escape" | "esc" => Key::Escape,
            "backspace" | "delete" => Key::Backspace,
            "enter" | "return" => Key::Enter,
            "up" | "arrowup" => Key::ArrowUp,
            "down" | "arrowdown" => Key::ArrowDown,
            _ => Key::Other,
        }
    }

    pub fn from_mac_keycode(code: u16) -> Self {
        match code {
            KEYCODE_ESCAPE => Key::Escape,
            KEYCODE_BACKSPACE => Key::Backspace,
            KEYCODE_ENTER => Key::Enter,
            KEYCODE_ARROW_UP => Key::ArrowUp,
            KEYCODE_ARROW_DOWN => Key::ArrowDown,
            _ => Key::Other,
        }
    }
}
