//! Drivedeck entry point: wire the client, the app, and the event loop.

use std::sync::Arc;
use std::time::Duration;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::backend::Backend;
use ratatui::Terminal;
use tracing::info;

use drivedeck::api::ApiClient;
use drivedeck::app::{actions, handlers, App, AppMessage};
use drivedeck::config::Config;
use drivedeck::terminal::{setup_panic_hook, TerminalManager};
use drivedeck::ui;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = Config::from_env();
    config.init_logging();
    info!(base_url = %config.base_url, "starting drivedeck");

    let client = Arc::new(ApiClient::with_base_url(config.base_url.clone()));

    let mut app = App::new(client.clone());

    // The one place the 401 policy is wired: any unauthorized response
    // anywhere drops the app back to the login screen.
    let expiry_tx = app.message_tx.clone();
    client.on_unauthorized(move || {
        let _ = expiry_tx.send(AppMessage::SessionExpired);
    });

    setup_panic_hook();
    let mut terminal = TerminalManager::new()?;

    actions::check_auth(&mut app);

    let result = run(&mut app, terminal.terminal()).await;

    terminal.restore()?;
    result
}

/// Main event loop: draw, then wait for a key event or a tick.
async fn run<B: Backend>(app: &mut App, terminal: &mut Terminal<B>) -> Result<()>
where
    <B as Backend>::Error: std::error::Error + Send + Sync + 'static,
{
    let mut events = EventStream::new();
    let mut tick = tokio::time::interval(Duration::from_millis(100));

    loop {
        app.drain_messages();
        terminal.draw(|frame| ui::render(frame, app))?;

        tokio::select! {
            maybe_event = events.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        handlers::handle_key(app, key);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::warn!(error = %e, "terminal event error");
                    }
                    None => break,
                }
            }
            _ = tick.tick() => {
                app.on_tick();
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
