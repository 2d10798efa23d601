pub mod categories;
pub mod config;
pub mod head;
pub mod heros;
pub mod simulate;

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;

use dronehub_core::content::{ContentClient, ContentEvent, ContentService};
use dronehub_core::AppConfig;

/// Content service against the configured backend, with its notification channel
pub(crate) fn content_service(
    config: &AppConfig,
) -> Result<(ContentService, mpsc::UnboundedReceiver<ContentEvent>)> {
    let client = ContentClient::new(config)?;
    let (tx, rx) = mpsc::unbounded_channel();
    Ok((ContentService::new(Arc::new(client)).with_event_sender(tx), rx))
}

/// Print the notices a page would show as toasts
pub(crate) fn print_notices(events: &mut mpsc::UnboundedReceiver<ContentEvent>) {
    while let Ok(event) = events.try_recv() {
        if let ContentEvent::FallbackUsed { kind, message } = event {
            println!("\nNote: showing built-in {} ({})", kind, message);
        }
    }
}
