//! Color constants for the terminal user interface.

use ratatui::style::Color;

// One accent color per board column.

/// Used for the To Do column
pub const STEEL_BLUE: Color = Color::Rgb(70, 130, 180);
/// Used for the Doing column
pub const GOLD: Color = Color::Rgb(255, 215, 0);
/// Used for the Done column
pub const DARK_GREEN: Color = Color::Rgb(0, 80, 0);
