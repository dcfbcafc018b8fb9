//! Chat screen: session sidebar, transcript, and the prompt.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::app::{App, ChatFocus};
use crate::models::MessageRole;
use crate::widgets::InputBoxWidget;

use super::helpers::{format_relative_time, spinner_frame, truncate_string, two_column_widths};
use super::theme::{
    COLOR_ACCENT, COLOR_ASSISTANT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_PENDING,
    COLOR_SELECTED, COLOR_TEXT, COLOR_USER,
};

pub fn render_chat_screen(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let (sidebar_width, _) = two_column_widths(area.width);
    let columns =
        Layout::horizontal([Constraint::Length(sidebar_width), Constraint::Min(20)]).split(area);

    render_sidebar(frame, app, columns[0]);
    render_conversation(frame, app, columns[1]);
}

fn render_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.chat_focus == ChatFocus::Sessions;
    let border_color = if focused { COLOR_ACCENT } else { COLOR_BORDER };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(" Sessions  [n] new  [x] delete ");

    if app.chat.loading_sessions {
        let loading = Paragraph::new(format!(
            "{} Loading sessions...",
            spinner_frame(app.tick_count)
        ))
        .block(block);
        frame.render_widget(loading, area);
        return;
    }

    if app.chat.sessions.is_empty() {
        let empty = Paragraph::new("No chat sessions yet.\n\nPress [n] to start your first conversation.")
            .style(Style::default().fg(COLOR_DIM))
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let width = area.width.saturating_sub(6) as usize;
    let items: Vec<ListItem> = app
        .chat
        .sessions
        .iter()
        .map(|session| {
            let active = app.chat.current_session_id == Some(session.id);
            let title_style = if active {
                Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(COLOR_TEXT)
            };
            ListItem::new(vec![
                Line::from(Span::styled(
                    truncate_string(&session.title, width),
                    title_style,
                )),
                Line::from(Span::styled(
                    format_relative_time(session.updated_at),
                    Style::default().fg(COLOR_DIM),
                )),
            ])
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(app.chat.sidebar_index));

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().fg(COLOR_SELECTED))
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_conversation(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(4),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .split(area);

    render_header(frame, app, rows[0]);
    render_transcript(frame, app, rows[1]);

    let input_focused = app.chat_focus == ChatFocus::Input;
    let title = if app.chat.hints.is_empty() {
        " Message ".to_string()
    } else {
        format!(" Message (+{} file(s) attached) ", app.chat.hints.file_ids.len())
    };
    frame.render_widget(
        InputBoxWidget::new(&app.chat_input, &title, input_focused),
        rows[2],
    );

    let footer = Paragraph::new(
        "[enter] send  [tab] switch panel  [esc] to sessions  (1/2/3 switch screens)",
    )
    .style(Style::default().fg(COLOR_DIM));
    frame.render_widget(footer, rows[3]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let lines = match app.chat.current_session() {
        Some(session) => {
            let count = session
                .message_count
                .map(|n| format!("{} messages", n))
                .unwrap_or_else(|| format!("{} messages", app.chat.messages.len()));
            vec![
                Line::from(Span::styled(
                    session.title.clone(),
                    Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("AI Assistant · {}", count),
                    Style::default().fg(COLOR_DIM),
                )),
            ]
        }
        None => vec![Line::from(Span::styled(
            "No chat session selected",
            Style::default().fg(COLOR_DIM),
        ))],
    };
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_transcript(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER));

    if app.chat.current_session_id.is_none() {
        let empty = Paragraph::new(
            "Select a session from the sidebar or press [n] to create a new one.",
        )
        .style(Style::default().fg(COLOR_DIM))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    if app.chat.loading_messages {
        let loading = Paragraph::new(format!(
            "{} Loading messages...",
            spinner_frame(app.tick_count)
        ))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(loading, area);
        return;
    }

    if app.chat.messages.is_empty() && app.chat.error.is_none() {
        let empty = Paragraph::new(
            "Start a conversation.\n\nAsk anything about your drive files or request help with a document.",
        )
        .style(Style::default().fg(COLOR_DIM))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    for message in &app.chat.messages {
        let (label_color, body_color) = match message.role {
            MessageRole::User => (COLOR_USER, COLOR_TEXT),
            MessageRole::Assistant => (COLOR_ASSISTANT, COLOR_TEXT),
            MessageRole::System => (COLOR_DIM, COLOR_DIM),
        };
        let mut label = vec![Span::styled(
            message.role.label(),
            Style::default().fg(label_color).add_modifier(Modifier::BOLD),
        )];
        if message.pending {
            label.push(Span::styled(
                "  (sending…)",
                Style::default().fg(COLOR_PENDING),
            ));
        }
        lines.push(Line::from(label));

        let body_style = if message.pending {
            Style::default().fg(COLOR_PENDING)
        } else {
            Style::default().fg(body_color)
        };
        for text_line in message.content.lines() {
            lines.push(Line::from(Span::styled(text_line.to_string(), body_style)));
        }

        if let Some(refs) = message.file_references.as_deref() {
            if !refs.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("files: {}", refs.join(", ")),
                    Style::default().fg(COLOR_DIM),
                )));
            }
        }
        lines.push(Line::from(""));
    }

    if app.chat.sending {
        lines.push(Line::from(Span::styled(
            format!("{} Assistant is thinking...", spinner_frame(app.tick_count)),
            Style::default().fg(COLOR_DIM),
        )));
    }
    if let Some(error) = app.chat.error.as_deref() {
        lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(COLOR_ERROR),
        )));
    }

    // Keep the tail of the conversation visible, like a scrolled-to-bottom chat
    let inner_height = area.height.saturating_sub(2) as usize;
    let scroll = lines.len().saturating_sub(inner_height) as u16;

    let transcript = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(block);
    frame.render_widget(transcript, area);
}
