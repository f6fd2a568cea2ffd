//! Input events understood by the engine.

/// A discrete change to the filter field, already classified by the caller.
///
/// Keyboard and framework vocabulary stays with the caller: it decides which
/// edits are ordinary and which are backspace or escape presses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// The field now holds this value (typing, paste, any ordinary edit).
    Edit(String),
    /// Backspace was pressed; carries the field value before the deletion.
    Backspace(String),
    /// Escape was pressed.
    Escape,
}
