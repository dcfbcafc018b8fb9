//! Key event handling, one dispatch per screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{actions, App, ChatFocus, Screen};

/// Route a key press to the active screen's handler.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ctrl+C quits from anywhere
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.screen {
        Screen::Login => handle_login_key(app, key),
        Screen::Dashboard => handle_dashboard_key(app, key),
        Screen::Drive => handle_drive_key(app, key),
        Screen::Chat => handle_chat_key(app, key),
    }
}

/// True when the key should switch screens; shared by non-entry contexts.
fn handle_screen_switch(app: &mut App, key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('1') => {
            app.enter_screen(Screen::Dashboard);
            true
        }
        KeyCode::Char('2') => {
            app.enter_screen(Screen::Drive);
            true
        }
        KeyCode::Char('3') => {
            app.enter_screen(Screen::Chat);
            true
        }
        _ => false,
    }
}

fn handle_login_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('l') | KeyCode::Enter => actions::open_login(app),
        KeyCode::Char('r') => actions::check_auth(app),
        _ => {}
    }
}

fn handle_dashboard_key(app: &mut App, key: KeyEvent) {
    if handle_screen_switch(app, &key) {
        return;
    }
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('b') => app.enter_screen(Screen::Drive),
        KeyCode::Char('c') => app.enter_screen(Screen::Chat),
        KeyCode::Char('r') => actions::load_dashboard(app),
        KeyCode::Char('s') => actions::logout(app),
        _ => {}
    }
}

fn handle_drive_key(app: &mut App, key: KeyEvent) {
    // Detail pane takes precedence while open
    if app.drive.viewer.is_some() {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => app.drive.close_viewer(),
            KeyCode::Char('o') => actions::open_in_drive(app),
            KeyCode::Char('a') => actions::ask_about_file(app),
            KeyCode::Char('j') | KeyCode::Down => {
                if let Some(viewer) = app.drive.viewer.as_mut() {
                    viewer.scroll = viewer.scroll.saturating_add(1);
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if let Some(viewer) = app.drive.viewer.as_mut() {
                    viewer.scroll = viewer.scroll.saturating_sub(1);
                }
            }
            KeyCode::Char('q') => app.should_quit = true,
            _ => {}
        }
        return;
    }

    if app.search_focused {
        match key.code {
            KeyCode::Esc => {
                // Escape clears immediately, without waiting out the debounce
                if app.drive.search.clear() {
                    actions::search_files(app);
                }
                app.search_focused = false;
            }
            KeyCode::Enter => {
                if app.drive.search.pending() {
                    app.drive.search.fired();
                    actions::search_files(app);
                }
                app.search_focused = false;
            }
            KeyCode::Backspace => app.drive.search.backspace(),
            KeyCode::Char(c) => app.drive.search.push(c),
            _ => {}
        }
        return;
    }

    if handle_screen_switch(app, &key) {
        return;
    }
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('/') => app.search_focused = true,
        KeyCode::Char('r') => actions::refresh_files(app),
        KeyCode::Char('j') | KeyCode::Down => app.drive.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.drive.move_up(),
        KeyCode::Enter => {
            if let Some(file_id) = app.drive.open_selected() {
                actions::load_file_content(app, file_id);
            }
        }
        KeyCode::Esc => {
            if app.drive.search.clear() {
                actions::search_files(app);
            }
        }
        _ => {}
    }
}

fn handle_chat_key(app: &mut App, key: KeyEvent) {
    match app.chat_focus {
        ChatFocus::Input => match key.code {
            KeyCode::Enter => actions::send_chat_message(app),
            KeyCode::Esc => app.chat_focus = ChatFocus::Sessions,
            KeyCode::Tab => app.chat_focus = ChatFocus::Sessions,
            KeyCode::Backspace => app.chat_input.backspace(),
            KeyCode::Delete => app.chat_input.delete_char(),
            KeyCode::Left => app.chat_input.move_left(),
            KeyCode::Right => app.chat_input.move_right(),
            KeyCode::Home => app.chat_input.move_home(),
            KeyCode::End => app.chat_input.move_end(),
            KeyCode::Char(c) => app.chat_input.insert_char(c),
            _ => {}
        },
        ChatFocus::Sessions => {
            if handle_screen_switch(app, &key) {
                return;
            }
            match key.code {
                KeyCode::Char('q') => app.should_quit = true,
                KeyCode::Tab | KeyCode::Char('i') => app.chat_focus = ChatFocus::Input,
                KeyCode::Char('j') | KeyCode::Down => app.chat.sidebar_down(),
                KeyCode::Char('k') | KeyCode::Up => app.chat.sidebar_up(),
                KeyCode::Enter => {
                    if let Some(session) = app.chat.highlighted_session() {
                        let id = session.id;
                        actions::select_session(app, id);
                        app.chat_focus = ChatFocus::Input;
                    }
                }
                KeyCode::Char('n') => actions::create_session(app),
                KeyCode::Char('x') => {
                    if let Some(session) = app.chat.highlighted_session() {
                        let id = session.id;
                        actions::delete_session(app, id);
                    }
                }
                KeyCode::Char('r') => actions::load_sessions(app),
                _ => {}
            }
        }
    }
}
