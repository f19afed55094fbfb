//! Action handlers: UpdateAction dispatch and background task spawning

use mealdeck_core::normalize_batch;
use mealdeck_source::{fetch_random_batch, search, RecipeSource};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::message::Message;
use crate::UpdateAction;

/// Execute an action by spawning a background task
///
/// The task reports back over `msg_tx` with a completion message carrying the
/// action's generation. Nothing is cancelled; superseded completions are
/// discarded by the update function.
pub fn handle_action<S>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, source: S)
where
    S: RecipeSource + Clone + Send + Sync + 'static,
{
    match action {
        UpdateAction::FetchRandomBatch { generation, count } => {
            tokio::spawn(async move {
                let msg = load_dashboard(&source, generation, count).await;
                if msg_tx.send(msg).await.is_err() {
                    debug!("Message channel closed before dashboard batch arrived");
                }
            });
        }

        UpdateAction::SearchRecipes {
            generation,
            keyword,
        } => {
            tokio::spawn(async move {
                let msg = run_search(&source, generation, keyword).await;
                if msg_tx.send(msg).await.is_err() {
                    debug!("Message channel closed before search results arrived");
                }
            });
        }
    }
}

/// Fetch and normalize a random batch
///
/// Any request or normalization failure fails the whole batch.
pub async fn load_dashboard<S: RecipeSource>(source: &S, generation: u64, count: usize) -> Message {
    let result = fetch_random_batch(source, count)
        .await
        .and_then(|raws| normalize_batch(&raws));

    match result {
        Ok(recipes) => Message::DashboardLoaded {
            generation,
            recipes,
        },
        Err(e) => {
            warn!("Random batch failed: {}", e);
            Message::DashboardFailed {
                generation,
                error: e.user_message(),
            }
        }
    }
}

/// Search and normalize every match
pub async fn run_search<S: RecipeSource>(source: &S, generation: u64, keyword: String) -> Message {
    let result = search(source, &keyword)
        .await
        .and_then(|raws| normalize_batch(&raws));

    match result {
        Ok(recipes) => Message::SearchCompleted {
            generation,
            keyword,
            recipes,
        },
        Err(e) => {
            warn!("Search '{}' failed: {}", keyword, e);
            Message::SearchFailed {
                generation,
                error: e.user_message(),
                keyword,
            }
        }
    }
}
