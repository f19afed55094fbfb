//! Orchestration engine shared by the TUI and headless runners

use mealdeck_source::RecipeSource;
use tokio::sync::mpsc;
use tracing::info;

use crate::config::Settings;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;

/// Capacity of the unified message channel
const MESSAGE_CHANNEL_CAPACITY: usize = 256;

/// Orchestration engine for mealdeck.
///
/// Owns the TEA state, the message channel that background tasks report on,
/// and the recipe source those tasks use.
pub struct Engine<S> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, stdin reader).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    /// The frontend event loop drains messages from here.
    pub msg_rx: mpsc::Receiver<Message>,

    source: S,
}

impl<S> Engine<S>
where
    S: RecipeSource + Clone + Send + Sync + 'static,
{
    /// Create an engine; must be called inside a tokio runtime
    pub fn new(settings: Settings, source: S) -> Self {
        let state = AppState::with_settings(settings);
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_CAPACITY);

        signals::spawn_signal_handler(msg_tx.clone());

        Self {
            state,
            msg_tx,
            msg_rx,
            source,
        }
    }

    /// Kick off the initial dashboard fetch
    pub fn start(&mut self) {
        info!(
            "Starting with a batch of {} recipes",
            self.state.settings.dashboard.batch_size
        );
        self.process_message(Message::RefreshDashboard);
    }

    /// Process a single message through the TEA update cycle.
    pub fn process_message(&mut self, msg: Message) {
        process::process_message(&mut self.state, msg, &self.msg_tx, &self.source);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed. Used by the TUI runner
    /// which needs to drain all pending messages before rendering.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }
}
