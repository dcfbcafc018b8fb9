//! Application state and logic for the TUI.
//!
//! The [`App`] struct owns every per-view state container plus the screen
//! and focus enums. Data flows one way down (API task → [`AppMessage`] →
//! state → render) and intents one way up (key event → handler → spawned
//! API call).

pub mod actions;
pub mod handlers;
mod messages;

pub use messages::AppMessage;

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::debug;

use crate::api::ApiClient;
use crate::state::{AuthState, ChatState, DashboardState, DeleteOutcome, DriveState};
use crate::widgets::InputBox;

/// Which screen is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Shown while unauthenticated; every other screen is protected
    #[default]
    Login,
    Dashboard,
    Drive,
    Chat,
}

/// Which chat panel has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChatFocus {
    Sessions,
    #[default]
    Input,
}

/// Main application state
pub struct App {
    /// Current screen being displayed
    pub screen: Screen,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Authentication state machine
    pub auth: AuthState,
    pub dashboard: DashboardState,
    pub drive: DriveState,
    pub chat: ChatState,
    /// Focused panel on the chat screen
    pub chat_focus: ChatFocus,
    /// Chat prompt input
    pub chat_input: InputBox,
    /// True while the drive search box has focus
    pub search_focused: bool,
    /// Backend API client (shared with spawned tasks)
    pub client: Arc<ApiClient>,
    /// Sender for async results (clone this into spawned tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver drained by the event loop between frames
    message_rx: mpsc::UnboundedReceiver<AppMessage>,
    /// Tick counter for the spinner animation
    pub tick_count: u64,
}

impl App {
    /// Create the application around a shared API client.
    pub fn new(client: Arc<ApiClient>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            screen: Screen::Login,
            should_quit: false,
            auth: AuthState::new(),
            dashboard: DashboardState::new(),
            drive: DriveState::new(),
            chat: ChatState::new(),
            chat_focus: ChatFocus::default(),
            chat_input: InputBox::new(),
            search_focused: false,
            client,
            message_tx,
            message_rx,
            tick_count: 0,
        }
    }

    /// Switch screens, issuing the on-entry load the SPA ran on mount.
    pub fn enter_screen(&mut self, screen: Screen) {
        self.screen = screen;
        match screen {
            Screen::Dashboard if !self.dashboard.loaded => actions::load_dashboard(self),
            Screen::Drive if !self.drive.loaded => actions::load_files(self, None),
            Screen::Chat if !self.chat.loaded => actions::load_sessions(self),
            _ => {}
        }
    }

    /// Drain and apply all pending async results.
    pub fn drain_messages(&mut self) {
        loop {
            let message = match self.message_rx.try_recv() {
                Ok(message) => message,
                Err(_) => break,
            };
            self.apply_message(message);
        }
    }

    /// Apply one async result to the owning state container.
    pub fn apply_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::AuthChecked(result) => {
                match result {
                    Ok(response) => self.auth.apply_status(response),
                    Err(error) => self.auth.apply_check_error(error),
                }
                if self.auth.is_authenticated {
                    if self.screen == Screen::Login {
                        self.enter_screen(Screen::Dashboard);
                    }
                } else {
                    self.screen = Screen::Login;
                }
            }
            AppMessage::LoggedOut { error } => {
                self.auth.apply_logout(error);
                self.screen = Screen::Login;
            }
            AppMessage::SessionExpired => {
                debug!("session expired, returning to login");
                self.auth.session_expired();
                self.screen = Screen::Login;
            }

            AppMessage::DashboardLoaded { files, sessions } => {
                self.dashboard.set_data(files, sessions);
            }
            AppMessage::DashboardError { error } => {
                self.dashboard.set_error(error);
            }

            AppMessage::FilesLoaded { seq, files } => {
                self.drive.set_files(seq, files);
            }
            AppMessage::FilesError { seq, error } => {
                self.drive.set_error(seq, error);
            }
            AppMessage::FileContentLoaded { file_id, content } => {
                self.drive.set_viewer_content(&file_id, content);
            }
            AppMessage::FileContentError { file_id, error } => {
                self.drive.set_viewer_error(&file_id, error);
            }

            AppMessage::SessionsLoaded { sessions } => {
                if let Some((session_id, seq)) = self.chat.set_sessions(sessions) {
                    actions::load_messages(self, session_id, seq);
                }
            }
            AppMessage::SessionsError { error } => {
                self.chat.sessions_error(error);
            }
            AppMessage::MessagesLoaded { seq, messages } => {
                self.chat.set_messages(seq, messages);
            }
            AppMessage::MessagesError { seq, error } => {
                self.chat.messages_error(seq, error);
            }
            AppMessage::MessageSent {
                provisional_id,
                response,
            } => {
                self.chat.apply_send_success(provisional_id, response);
            }
            AppMessage::MessageSendFailed {
                provisional_id,
                error,
            } => {
                self.chat.apply_send_failure(provisional_id, error);
            }
            AppMessage::SessionCreated { session } => {
                self.chat.insert_created(session);
            }
            AppMessage::SessionCreateFailed { error } => {
                self.chat.error = Some(error);
            }
            AppMessage::SessionDeleted { session_id } => {
                if let DeleteOutcome::Reselected { session_id, seq } =
                    self.chat.remove_session(session_id)
                {
                    actions::load_messages(self, session_id, seq);
                }
            }
            AppMessage::SessionDeleteFailed { error } => {
                self.chat.error = Some(error);
            }
        }
    }

    /// Advance animations and fire the settled search, if any.
    pub fn on_tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.drive.search.should_fire() {
            self.drive.search.fired();
            actions::search_files(self);
        }
    }
}
