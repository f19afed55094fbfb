//! Headless mode runner - main event loop without TUI

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use mealdeck_app::config::Settings;
use mealdeck_app::{AppState, Engine, Message};
use mealdeck_core::prelude::*;
use mealdeck_source::RecipeSource;
use tokio::sync::mpsc;

use super::HeadlessEvent;

/// Run in headless mode - output NDJSON events instead of TUI
///
/// Loads the dashboard, then runs `search` if given. Afterwards commands are
/// read from stdin (`r`, `s <keyword>`, `q`). The run ends on `q`, a signal,
/// or once stdin is closed and nothing is in flight.
pub async fn run_headless<S>(settings: Settings, source: S, search: Option<String>) -> Result<()>
where
    S: RecipeSource + Clone + Send + Sync + 'static,
{
    let mut engine = Engine::new(settings, source);

    // Spawn headless-specific stdin reader
    let stdin_closed = Arc::new(AtomicBool::new(false));
    let stdin_tx = engine.msg_sender();
    let closed = stdin_closed.clone();
    std::thread::spawn(move || {
        spawn_stdin_reader_blocking(stdin_tx, closed);
    });

    engine.start();

    headless_event_loop(&mut engine, search, &stdin_closed).await;

    info!("mealdeck headless mode exiting");
    Ok(())
}

/// Main headless event loop
async fn headless_event_loop<S>(
    engine: &mut Engine<S>,
    mut pending_search: Option<String>,
    stdin_closed: &AtomicBool,
) where
    S: RecipeSource + Clone + Send + Sync + 'static,
{
    loop {
        if engine.should_quit() {
            info!("Quit requested");
            break;
        }

        if stdin_closed.load(Ordering::SeqCst)
            && pending_search.is_none()
            && !engine.state.is_any_loading()
        {
            info!("Stdin closed and nothing in flight");
            break;
        }

        let Some(msg) = engine.msg_rx.recv().await else {
            info!("Message channel closed");
            break;
        };

        let event = event_for_message(&engine.state, &msg);
        let dashboard_settled = matches!(
            event,
            Some(HeadlessEvent::RecipesLoaded { .. } | HeadlessEvent::FetchFailed { .. })
        );

        engine.process_message(msg);

        if let Some(event) = event {
            event.emit();
        }

        // The startup search waits for the first dashboard batch
        if dashboard_settled {
            if let Some(keyword) = pending_search.take() {
                engine.process_message(Message::SearchFor(keyword));
            }
        }
    }
}

/// Event for a completion message that the state will accept
///
/// Stale completions produce nothing, matching what the update function does
/// with them.
pub fn event_for_message(state: &AppState, msg: &Message) -> Option<HeadlessEvent> {
    match msg {
        Message::DashboardLoaded {
            generation,
            recipes,
        } if state.is_current(*generation) => Some(HeadlessEvent::recipes_loaded(recipes)),
        Message::DashboardFailed { generation, error } if state.is_current(*generation) => {
            Some(HeadlessEvent::fetch_failed(error))
        }
        Message::SearchCompleted {
            generation,
            keyword,
            recipes,
        } if state.is_current(*generation) => {
            Some(HeadlessEvent::search_completed(keyword, recipes))
        }
        Message::SearchFailed {
            generation,
            keyword,
            error,
        } if state.is_current(*generation) => Some(HeadlessEvent::search_failed(keyword, error)),
        _ => None,
    }
}

/// Parse one stdin command line
fn parse_command(line: &str) -> Option<Message> {
    let trimmed = line.trim();
    let (command, rest) = trimmed
        .split_once(char::is_whitespace)
        .map(|(c, r)| (c, r.trim()))
        .unwrap_or((trimmed, ""));

    match command {
        "r" | "refresh" => Some(Message::RefreshDashboard),
        "s" | "search" => Some(Message::SearchFor(rest.to_string())),
        "q" | "quit" => Some(Message::Quit),
        "" => None,
        _ => {
            warn!("Unknown stdin command: {}", trimmed);
            None
        }
    }
}

/// Read commands from stdin and forward them to the message channel (blocking)
fn spawn_stdin_reader_blocking(msg_tx: mpsc::Sender<Message>, closed: Arc<AtomicBool>) {
    use std::io::BufRead;

    let stdin = std::io::stdin();
    let reader = stdin.lock();

    for line in reader.lines() {
        match line {
            Ok(line) => {
                if let Some(msg) = parse_command(&line) {
                    let quit = matches!(msg, Message::Quit);
                    if msg_tx.blocking_send(msg).is_err() || quit {
                        break;
                    }
                }
            }
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                break;
            }
        }
    }

    closed.store(true, Ordering::SeqCst);
    // Wake the loop so it can notice stdin is gone
    let _ = msg_tx.blocking_send(Message::Tick);
    info!("Stdin reader exiting");
}
