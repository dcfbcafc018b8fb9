//! Helper functions and constants for UI rendering

use chrono::{DateTime, Utc};
use ratatui::layout::Rect;

/// Spinner frames for loading animation
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Current spinner frame for a tick counter
pub fn spinner_frame(tick: u64) -> &'static str {
    SPINNER_FRAMES[(tick as usize) % SPINNER_FRAMES.len()]
}

/// Truncate a string to approximately max_len bytes, adding "..." if truncated.
/// Safely handles UTF-8 by finding the nearest char boundary.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let target = max_len.saturating_sub(3);
        let end = find_char_boundary(s, target);
        format!("{}...", &s[..end])
    }
}

/// Find the nearest valid UTF-8 char boundary at or before the given byte index.
pub fn find_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    let mut end = index;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    end
}

/// Format a timestamp relative to now ("just now", "5m ago", "2h ago", "3d ago",
/// or the date for anything older).
pub fn format_relative_time(at: DateTime<Utc>) -> String {
    let elapsed = Utc::now().signed_duration_since(at);
    let minutes = elapsed.num_minutes();
    if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{}m ago", minutes)
    } else if elapsed.num_hours() < 24 {
        format!("{}h ago", elapsed.num_hours())
    } else if elapsed.num_days() < 7 {
        format!("{}d ago", elapsed.num_days())
    } else {
        at.format("%b %e, %Y").to_string()
    }
}

/// Sidebar/content split for a two-column layout.
///
/// Returns (left_width, right_width); the sidebar gets less space on wide
/// terminals.
pub fn two_column_widths(total_width: u16) -> (u16, u16) {
    if total_width < 60 {
        let half = total_width / 2;
        (half, total_width - half)
    } else {
        let left = ((total_width * 30) / 100).clamp(24, 44);
        (left, total_width - left)
    }
}

/// Get inner rect with margin
pub fn inner_rect(area: Rect, margin: u16) -> Rect {
    Rect {
        x: area.x + margin,
        y: area.y + margin,
        width: area.width.saturating_sub(margin * 2),
        height: area.height.saturating_sub(margin * 2),
    }
}
