//! Platform-specific configuration

/// Submit shortcut display for help text.
/// Terminals deliver Ctrl on every platform, so macOS shows Ctrl too.
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Reset shortcut display
pub const RESET_SHORTCUT: &str = "Ctrl+R";
