//! Keyboard input handling

use game_core::ServeKey;

/// Map a key name to a serve control
pub fn handle_key_down(key: &str) -> Option<ServeKey> {
    match key {
        "ArrowUp" | "w" | "W" => Some(ServeKey::AimUp),
        "ArrowDown" | "s" | "S" => Some(ServeKey::AimDown),
        "d" | "D" | " " => Some(ServeKey::Launch),
        _ => None,
    }
}
