//! Dashboard screen: greeting, recent files, recent chat sessions.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::app::App;

use super::helpers::{format_relative_time, spinner_frame, truncate_string};
use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_TEXT};

pub fn render_dashboard_screen(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let rows = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(5),
        Constraint::Length(1),
    ])
    .split(area);

    render_greeting(frame, app, rows[0]);

    if app.dashboard.loading {
        let loading = Paragraph::new(format!(
            "{} Loading dashboard...",
            spinner_frame(app.tick_count)
        ))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(COLOR_BORDER)));
        frame.render_widget(loading, rows[1]);
    } else if let Some(error) = app.dashboard.error.as_deref() {
        render_error(frame, error, rows[1]);
    } else {
        let columns =
            Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
                .split(rows[1]);
        render_recent_files(frame, app, columns[0]);
        render_recent_sessions(frame, app, columns[1]);
    }

    let footer = Paragraph::new(
        "[b] browse files  [c] chat  [r] reload  [s] sign out  [q] quit  (1/2/3 switch screens)",
    )
    .style(Style::default().fg(COLOR_DIM));
    frame.render_widget(footer, rows[2]);
}

fn render_greeting(frame: &mut Frame, app: &App, area: Rect) {
    let name = app
        .auth
        .user
        .as_ref()
        .map(|u| u.first_name().to_string())
        .unwrap_or_else(|| "User".to_string());

    let greeting = Paragraph::new(format!("Welcome back, {}!", name))
        .style(Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(COLOR_BORDER))
                .title(" drivedeck "),
        );
    frame.render_widget(greeting, area);
}

fn render_error(frame: &mut Frame, error: &str, area: Rect) {
    let para = Paragraph::new(vec![
        Line::from(Span::styled(
            "Error loading dashboard",
            Style::default().fg(COLOR_ERROR),
        )),
        Line::from(error.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "[r] Try Again",
            Style::default().fg(COLOR_DIM),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(COLOR_BORDER)));
    frame.render_widget(para, area);
}

fn render_recent_files(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(" Recent Files ");

    if app.dashboard.recent_files.is_empty() {
        let empty = Paragraph::new("No files yet")
            .style(Style::default().fg(COLOR_DIM))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let width = area.width.saturating_sub(14) as usize;
    let items: Vec<ListItem> = app
        .dashboard
        .recent_files
        .iter()
        .map(|file| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    truncate_string(&file.name, width),
                    Style::default().fg(COLOR_TEXT),
                ),
                Span::styled(format!("  {}", file.kind()), Style::default().fg(COLOR_DIM)),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn render_recent_sessions(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(" Recent Conversations ");

    if app.dashboard.recent_sessions.is_empty() {
        let empty = Paragraph::new("No conversations yet")
            .style(Style::default().fg(COLOR_DIM))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let width = area.width.saturating_sub(14) as usize;
    let items: Vec<ListItem> = app
        .dashboard
        .recent_sessions
        .iter()
        .map(|session| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    truncate_string(&session.title, width),
                    Style::default().fg(COLOR_TEXT),
                ),
                Span::styled(
                    format!("  {}", format_relative_time(session.updated_at)),
                    Style::default().fg(COLOR_DIM),
                ),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
