//! Rendering: pure functions over `&App`, one per screen.

mod chat;
mod dashboard;
mod drive;
pub mod helpers;
mod login;
pub mod theme;

use ratatui::Frame;

use crate::app::{App, Screen};

/// Render the active screen.
pub fn render(frame: &mut Frame, app: &App) {
    match app.screen {
        Screen::Login => login::render_login_screen(frame, app),
        Screen::Dashboard => dashboard::render_dashboard_screen(frame, app),
        Screen::Drive => drive::render_drive_screen(frame, app),
        Screen::Chat => chat::render_chat_screen(frame, app),
    }
}
