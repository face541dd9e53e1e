//! Platform-specific key bindings

use crossterm::event::KeyModifiers;

/// Modifiers accepted for form shortcuts
/// - macOS: Ctrl or Cmd (when the terminal forwards it)
/// - Linux/Windows: Ctrl
#[cfg(target_os = "macos")]
pub const SHORTCUT_MODIFIERS: KeyModifiers = KeyModifiers::CONTROL.union(KeyModifiers::SUPER);

#[cfg(not(target_os = "macos"))]
pub const SHORTCUT_MODIFIERS: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Export shortcut display
pub const EXPORT_SHORTCUT: &str = "Ctrl+E";

/// Add labor item shortcut display
pub const ADD_ITEM_SHORTCUT: &str = "Ctrl+N";

/// Remove labor item shortcut display
/// - macOS: "Cmd+D"
/// - Linux/Windows: "Ctrl+D"
#[cfg(target_os = "macos")]
pub const REMOVE_ITEM_SHORTCUT: &str = "Cmd+D";

#[cfg(not(target_os = "macos"))]
pub const REMOVE_ITEM_SHORTCUT: &str = "Ctrl+D";
