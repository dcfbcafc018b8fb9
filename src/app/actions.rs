//! Spawned API calls.
//!
//! Each action stages the state transition synchronously (loading flag,
//! sequence tag, optimistic insert), then spawns the network call with a
//! clone of the client and the message sender. Results come back through
//! the channel as [`AppMessage`]s; no task mutates state directly.

use tracing::warn;

use crate::state::chat::DEFAULT_SESSION_TITLE;
use crate::state::dashboard::RECENT_FILES;
use crate::state::drive::{search_expression, PAGE_SIZE};

use super::{App, AppMessage, Screen};

/// Kick off the auth status check.
pub fn check_auth(app: &mut App) {
    app.auth.begin_check();
    let client = app.client.clone();
    let tx = app.message_tx.clone();
    tokio::spawn(async move {
        let result = client.current_user().await.map_err(|e| {
            warn!(error = %e, "auth status check failed");
            e.to_string()
        });
        let _ = tx.send(AppMessage::AuthChecked(result));
    });
}

/// Open the server-driven login page in the system browser.
///
/// Pure side effect: state only changes once a later status check confirms
/// the session.
pub fn open_login(app: &App) {
    let url = app.client.login_url();
    if let Err(e) = open::that(&url) {
        warn!(error = %e, url, "failed to open login page");
    }
}

/// Log out: invalidate the server session, then reset local state either way.
pub fn logout(app: &App) {
    let client = app.client.clone();
    let tx = app.message_tx.clone();
    tokio::spawn(async move {
        let error = match client.logout().await {
            Ok(_) => None,
            Err(e) => {
                warn!(error = %e, "logout call failed");
                Some(e.to_string())
            }
        };
        let _ = tx.send(AppMessage::LoggedOut { error });
    });
}

/// Load the dashboard's recent files and sessions concurrently.
///
/// Both fetches are joined; a failure in either yields one combined error
/// and no partial data.
pub fn load_dashboard(app: &mut App) {
    app.dashboard.begin_load();
    let client = app.client.clone();
    let tx = app.message_tx.clone();
    tokio::spawn(async move {
        let (files, sessions) = tokio::join!(
            client.list_files(RECENT_FILES, None),
            client.chat_sessions()
        );
        let message = match (files, sessions) {
            (Ok(files), Ok(sessions)) => AppMessage::DashboardLoaded {
                files: files.files,
                sessions: sessions.sessions,
            },
            (Err(e), _) | (_, Err(e)) => {
                warn!(error = %e, "dashboard load failed");
                AppMessage::DashboardError {
                    error: e.to_string(),
                }
            }
        };
        let _ = tx.send(message);
    });
}

/// Load the file list, optionally filtered by a raw search term.
pub fn load_files(app: &mut App, term: Option<String>) {
    let query = term
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .map(search_expression);
    let seq = app.drive.begin_load(term);
    let client = app.client.clone();
    let tx = app.message_tx.clone();
    tokio::spawn(async move {
        let message = match client.list_files(PAGE_SIZE, query.as_deref()).await {
            Ok(response) => AppMessage::FilesLoaded {
                seq,
                files: response.files,
            },
            Err(e) => {
                warn!(error = %e, "file list failed");
                AppMessage::FilesError {
                    seq,
                    error: e.to_string(),
                }
            }
        };
        let _ = tx.send(message);
    });
}

/// Fire the settled search box query.
pub fn search_files(app: &mut App) {
    let term = app.drive.search.query.clone();
    let term = (!term.trim().is_empty()).then_some(term);
    load_files(app, term);
}

/// Re-issue the last query verbatim.
pub fn refresh_files(app: &mut App) {
    let term = app.drive.last_term.clone();
    load_files(app, term);
}

/// Fetch text content for the file open in the viewer.
pub fn load_file_content(app: &App, file_id: String) {
    let client = app.client.clone();
    let tx = app.message_tx.clone();
    tokio::spawn(async move {
        let message = match client.get_file_content(&file_id).await {
            Ok(response) => AppMessage::FileContentLoaded {
                file_id: response.file_id,
                content: response.content,
            },
            Err(e) => {
                warn!(error = %e, file_id, "file content fetch failed");
                AppMessage::FileContentError {
                    file_id,
                    error: e.to_string(),
                }
            }
        };
        let _ = tx.send(message);
    });
}

/// Load the chat session list.
pub fn load_sessions(app: &mut App) {
    app.chat.begin_load_sessions();
    let client = app.client.clone();
    let tx = app.message_tx.clone();
    tokio::spawn(async move {
        let message = match client.chat_sessions().await {
            Ok(response) => AppMessage::SessionsLoaded {
                sessions: response.sessions,
            },
            Err(e) => {
                warn!(error = %e, "session list failed");
                AppMessage::SessionsError {
                    error: e.to_string(),
                }
            }
        };
        let _ = tx.send(message);
    });
}

/// Fetch the transcript of a session under an already-staged sequence tag.
pub fn load_messages(app: &App, session_id: i64, seq: u64) {
    let client = app.client.clone();
    let tx = app.message_tx.clone();
    tokio::spawn(async move {
        let message = match client.session_messages(session_id).await {
            Ok(response) => AppMessage::MessagesLoaded {
                seq,
                messages: response.messages,
            },
            Err(e) => {
                warn!(error = %e, session_id, "message list failed");
                AppMessage::MessagesError {
                    seq,
                    error: e.to_string(),
                }
            }
        };
        let _ = tx.send(message);
    });
}

/// Switch the active session and fetch its transcript.
pub fn select_session(app: &mut App, session_id: i64) {
    if let Some(seq) = app.chat.select_session(session_id) {
        load_messages(app, session_id, seq);
    }
}

/// Send the chat prompt's content to the active session.
///
/// Empty input or no selected session aborts locally; the prompt is only
/// cleared when the send was actually staged.
pub fn send_chat_message(app: &mut App) {
    let input = app.chat_input.content().to_string();
    let Some((request, provisional_id)) = app.chat.prepare_send(&input) else {
        return;
    };
    app.chat_input.clear();

    let client = app.client.clone();
    let tx = app.message_tx.clone();
    tokio::spawn(async move {
        let message = match client.send_message(&request).await {
            Ok(response) => AppMessage::MessageSent {
                provisional_id,
                response,
            },
            Err(e) => {
                warn!(error = %e, "chat send failed");
                AppMessage::MessageSendFailed {
                    provisional_id,
                    error: e.to_string(),
                }
            }
        };
        let _ = tx.send(message);
    });
}

/// Create a session with the default title.
pub fn create_session(app: &App) {
    let client = app.client.clone();
    let tx = app.message_tx.clone();
    tokio::spawn(async move {
        let message = match client.create_session(Some(DEFAULT_SESSION_TITLE)).await {
            Ok(session) => AppMessage::SessionCreated { session },
            Err(e) => {
                warn!(error = %e, "session create failed");
                AppMessage::SessionCreateFailed {
                    error: e.to_string(),
                }
            }
        };
        let _ = tx.send(message);
    });
}

/// Delete a session. No confirmation step, no undo.
pub fn delete_session(app: &App, session_id: i64) {
    let client = app.client.clone();
    let tx = app.message_tx.clone();
    tokio::spawn(async move {
        let message = match client.delete_session(session_id).await {
            Ok(_) => AppMessage::SessionDeleted { session_id },
            Err(e) => {
                warn!(error = %e, session_id, "session delete failed");
                AppMessage::SessionDeleteFailed {
                    error: e.to_string(),
                }
            }
        };
        let _ = tx.send(message);
    });
}

/// Attach the viewed file to the next chat message and jump to the chat.
pub fn ask_about_file(app: &mut App) {
    let Some(viewer) = app.drive.viewer.as_ref() else {
        return;
    };
    let file_id = viewer.file.id.clone();
    let context = format!("Viewing file: {}", viewer.file.name);
    app.chat.attach_file(file_id, Some(context));
    app.chat_focus = super::ChatFocus::Input;
    app.enter_screen(Screen::Chat);
}

/// Open the viewed file's web link in the system browser.
pub fn open_in_drive(app: &App) {
    let Some(link) = app
        .drive
        .viewer
        .as_ref()
        .and_then(|v| v.file.web_view_link.clone())
    else {
        return;
    };
    if let Err(e) = open::that(&link) {
        warn!(error = %e, link, "failed to open web link");
    }
}
