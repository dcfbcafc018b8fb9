//! File browser screen: search box, file table, and the detail pane.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::app::App;
use crate::state::FileViewerState;
use crate::widgets::InputBoxWidget;

use super::helpers::{spinner_frame, truncate_string};
use super::theme::{
    COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_SELECTED, COLOR_TEXT,
};

pub fn render_drive_screen(frame: &mut Frame, app: &App) {
    if let Some(viewer) = app.drive.viewer.as_ref() {
        render_viewer(frame, app, viewer);
        return;
    }

    let area = frame.area();
    let rows = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(5),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(area);

    render_search_box(frame, app, rows[0]);
    render_file_list(frame, app, rows[1]);
    render_count_line(frame, app, rows[2]);

    let footer = Paragraph::new(
        "[/] search  [j/k] move  [enter] open  [r] refresh  [q] quit  (1/2/3 switch screens)",
    )
    .style(Style::default().fg(COLOR_DIM));
    frame.render_widget(footer, rows[3]);
}

fn render_search_box(frame: &mut Frame, app: &App, area: Rect) {
    // Render via the shared input widget, backed by the debounced state
    let mut input = crate::widgets::InputBox::new();
    for c in app.drive.search.query.chars() {
        input.insert_char(c);
    }
    frame.render_widget(
        InputBoxWidget::new(&input, " Search files ", app.search_focused),
        area,
    );
}

fn render_file_list(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(" Drive Files ");

    if app.drive.loading {
        let loading = Paragraph::new(format!(
            "{} Loading files...",
            spinner_frame(app.tick_count)
        ))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(loading, area);
        return;
    }

    if let Some(error) = app.drive.error.as_deref() {
        let para = Paragraph::new(vec![
            Line::from(Span::styled(
                "Error loading files",
                Style::default().fg(COLOR_ERROR),
            )),
            Line::from(error.to_string()),
            Line::from(""),
            Line::from(Span::styled("[r] Try Again", Style::default().fg(COLOR_DIM))),
        ])
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(para, area);
        return;
    }

    if app.drive.files.is_empty() {
        let hint = if app.drive.last_term.is_some() {
            "No files found. Try adjusting your search terms."
        } else {
            "No files found. Your drive appears to be empty."
        };
        let empty = Paragraph::new(hint)
            .style(Style::default().fg(COLOR_DIM))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let name_width = area.width.saturating_sub(40) as usize;
    let items: Vec<ListItem> = app
        .drive
        .files
        .iter()
        .map(|file| {
            let marker = if file.is_folder { "▸ " } else { "  " };
            ListItem::new(Line::from(vec![
                Span::raw(marker),
                Span::styled(
                    format!("{:<width$}", truncate_string(&file.name, name_width), width = name_width),
                    Style::default().fg(COLOR_TEXT),
                ),
                Span::styled(
                    format!(" {:<14}", file.kind()),
                    Style::default().fg(COLOR_DIM),
                ),
                Span::styled(
                    format!(" {:>9}", file.format_size().unwrap_or_default()),
                    Style::default().fg(COLOR_DIM),
                ),
                Span::styled(
                    format!("  {}", file.modified_date()),
                    Style::default().fg(COLOR_DIM),
                ),
            ]))
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(app.drive.selected_index));

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .fg(COLOR_SELECTED)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_count_line(frame: &mut Frame, app: &App, area: Rect) {
    if app.drive.files.is_empty() {
        return;
    }
    let text = match app.drive.last_term.as_deref() {
        Some(term) => format!(
            "Showing {} files matching \"{}\"",
            app.drive.files.len(),
            term
        ),
        None => format!("Showing {} files", app.drive.files.len()),
    };
    let line = Paragraph::new(text)
        .style(Style::default().fg(COLOR_DIM))
        .alignment(Alignment::Center);
    frame.render_widget(line, area);
}

fn render_viewer(frame: &mut Frame, app: &App, viewer: &FileViewerState) {
    let area = frame.area();
    let rows = Layout::vertical([
        Constraint::Length(7),
        Constraint::Min(4),
        Constraint::Length(1),
    ])
    .split(area);

    let file = &viewer.file;
    let info = vec![
        Line::from(Span::styled(
            file.name.clone(),
            Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Type: ", Style::default().fg(COLOR_DIM)),
            Span::raw(file.kind().to_string()),
            Span::styled("   Size: ", Style::default().fg(COLOR_DIM)),
            Span::raw(file.format_size().unwrap_or_else(|| "-".to_string())),
            Span::styled("   Modified: ", Style::default().fg(COLOR_DIM)),
            Span::raw(if file.modified_date().is_empty() {
                "-".to_string()
            } else {
                file.modified_date().to_string()
            }),
        ]),
        match file.content_summary.as_deref() {
            Some(summary) => Line::from(vec![
                Span::styled("Summary: ", Style::default().fg(COLOR_DIM)),
                Span::raw(summary.to_string()),
            ]),
            None => Line::from(""),
        },
    ];
    let header = Paragraph::new(info)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(COLOR_BORDER))
                .title(" File Information "),
        );
    frame.render_widget(header, rows[0]);

    let content_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(" Content ");

    let body: Paragraph = if file.is_folder {
        Paragraph::new("Folders have no content preview.")
            .style(Style::default().fg(COLOR_DIM))
            .block(content_block)
    } else if viewer.loading {
        Paragraph::new(format!(
            "{} Loading content...",
            spinner_frame(app.tick_count)
        ))
        .block(content_block)
    } else if let Some(error) = viewer.error.as_deref() {
        Paragraph::new(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(COLOR_ERROR),
        )))
        .block(content_block)
    } else {
        Paragraph::new(viewer.content.clone().unwrap_or_default())
            .wrap(Wrap { trim: false })
            .scroll((viewer.scroll, 0))
            .block(content_block)
    };
    frame.render_widget(body, rows[1]);

    let footer = Paragraph::new(
        "[esc] back  [o] open in drive  [a] ask the assistant  [j/k] scroll  [q] quit",
    )
    .style(Style::default().fg(COLOR_DIM));
    frame.render_widget(footer, rows[2]);
}
