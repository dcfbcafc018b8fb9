//! Color theme constants for the drivedeck UI
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and focused borders
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Regular text
pub const COLOR_TEXT: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Selected list row highlight
pub const COLOR_SELECTED: Color = Color::Cyan;

/// User-authored messages in the transcript
pub const COLOR_USER: Color = Color::LightGreen;

/// Assistant messages in the transcript
pub const COLOR_ASSISTANT: Color = Color::Cyan;

/// Error text
pub const COLOR_ERROR: Color = Color::Red;

/// Pending/optimistic records awaiting confirmation
pub const COLOR_PENDING: Color = Color::Gray;

/// Input cursor (foreground, background)
pub const COLOR_CURSOR: (Color, Color) = (Color::Black, Color::White);
