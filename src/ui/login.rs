use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::App;

use super::helpers::spinner_frame;
use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER};

const LOGO: &str = "D R I V E D E C K";

pub fn render_login_screen(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let outer = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(COLOR_BORDER));
    frame.render_widget(outer, area);

    let inner = area.inner(Margin::new(2, 1));

    let logo_area = Rect::new(inner.x, inner.y + 1, inner.width, 2);
    let logo = Paragraph::new(LOGO)
        .style(Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(logo, logo_area);

    let dialog_area = Rect::new(
        inner.x + 4,
        inner.y + 5,
        inner.width.saturating_sub(8),
        10,
    );
    let dialog = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));

    let mut lines: Vec<Line> = Vec::new();
    if app.auth.is_loading {
        lines.push(Line::from(format!(
            "{} Checking your session...",
            spinner_frame(app.tick_count)
        )));
    } else {
        lines.push(Line::from("Sign in to continue"));
        lines.push(Line::from(""));
        if let Some(error) = app.auth.error.as_deref() {
            lines.push(Line::from(Span::styled(
                error.to_string(),
                Style::default().fg(COLOR_ERROR),
            )));
            lines.push(Line::from(""));
        }
        lines.push(Line::from(
            "[l] Open the login page in your browser".to_string(),
        ));
        lines.push(Line::from(Span::styled(
            "then come back and press [r] to re-check",
            Style::default().fg(COLOR_DIM),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "[q] Quit",
            Style::default().fg(COLOR_DIM),
        )));
    }

    let para = Paragraph::new(lines)
        .block(dialog)
        .alignment(Alignment::Center)
        .wrap(ratatui::widgets::Wrap { trim: true });
    frame.render_widget(para, dialog_area);
}
