//! Message processing: runs the TEA update loop and dispatches actions

use mealdeck_source::RecipeSource;
use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
///
/// Follow-up messages are processed immediately; actions are handed to
/// [`handle_action`] with a clone of `source`.
pub fn process_message<S>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    source: &S,
) where
    S: RecipeSource + Clone + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), source.clone());
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
