//! Main TUI runner - entry point and event loop

use std::time::Duration;

use mealdeck_app::config::Settings;
use mealdeck_app::{Engine, Message};
use mealdeck_core::prelude::*;
use mealdeck_source::RecipeSource;

use super::{event, render, terminal};

/// Run the TUI against `source` until the user quits
///
/// With `initial_search` the app opens on the Search screen with that search
/// in flight; otherwise it opens on the dashboard.
pub async fn run<S>(settings: Settings, source: S, initial_search: Option<String>) -> Result<()>
where
    S: RecipeSource + Clone + Send + Sync + 'static,
{
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let tick_rate = Duration::from_millis(settings.ui.tick_rate_ms.max(1));
    let mut engine = Engine::new(settings, source);

    let mut term = ratatui::init();

    match initial_search {
        Some(keyword) => engine.process_message(Message::SearchFor(keyword)),
        None => engine.start(),
    }
    let result = run_loop(&mut term, &mut engine, tick_rate);

    // Restore terminal
    ratatui::restore();

    info!("mealdeck exiting");
    result
}

/// Main event loop: drain completions, draw, then wait for input
fn run_loop<S>(
    terminal: &mut ratatui::DefaultTerminal,
    engine: &mut Engine<S>,
    tick_rate: Duration,
) -> Result<()>
where
    S: RecipeSource + Clone + Send + Sync + 'static,
{
    while !engine.should_quit() {
        // Process background completions and signals
        engine.drain_pending_messages();

        if engine.should_quit() {
            break;
        }

        terminal.draw(|frame| render::view(frame, &engine.state))?;

        // Handle terminal events
        if let Some(message) = event::poll(tick_rate)? {
            engine.process_message(message);
        }
    }

    Ok(())
}
