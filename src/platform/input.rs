//! Input mapping
//!
//! Raw key names (as reported by `KeyboardEvent.key`) map to game actions.
//! Pointer and touch presses always map to [`Action::Activate`].

/// A discrete input action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Flap while running, restart after game over
    Activate,
    /// Toggle the demo autopilot
    ToggleAutopilot,
}

/// Map a `KeyboardEvent.key` value to an action
pub fn key_action(key: &str) -> Option<Action> {
    match key {
        " " | "Spacebar" | "ArrowUp" | "Enter" | "w" | "W" => Some(Action::Activate),
        "i" | "I" => Some(Action::ToggleAutopilot),
        _ => None,
    }
}
