//! The order watcher: consumes a change feed and mails out notifications.
//!
//! Each event is handled in its own task: the feed may deliver with internal
//! concurrency, so handlers share no mutable state and one event's failure
//! never reaches the subscription.

use std::sync::Arc;

use futures::StreamExt;
use ordermail_engine::RuleEngine;

use ordermail_core::error::Result;
use ordermail_core::traits::{ChangeFeedSource, EmailSender};
use ordermail_core::types::{ChangeEvent, ChangeKind};

pub struct OrderWatcher {
    engine: RuleEngine,
    sender: Arc<dyn EmailSender>,
}

impl OrderWatcher {
    pub fn new(engine: RuleEngine, sender: Arc<dyn EmailSender>) -> Self {
        Self { engine, sender }
    }

    /// Run against a feed until its stream ends. Intended to run for the
    /// lifetime of the process.
    pub async fn run(&self, feed: &dyn ChangeFeedSource) -> Result<()> {
        let mut stream = feed.subscribe().await?;
        tracing::info!("👀 Watching '{}' for order updates...", feed.collection());

        while let Some(event) = stream.next().await {
            let engine = self.engine.clone();
            let sender = self.sender.clone();
            tokio::spawn(async move {
                process_event(&engine, sender.as_ref(), event).await;
            });
        }

        tracing::info!("Feed for '{}' closed", feed.collection());
        Ok(())
    }
}

/// Handle one change event. Only `modified` events can carry a transition;
/// a brand-new order has no previous state to diff against.
pub async fn process_event(engine: &RuleEngine, sender: &dyn EmailSender, event: ChangeEvent) {
    if event.kind != ChangeKind::Modified {
        return;
    }

    let requests = engine.decide(&event.order_id, event.previous.as_ref(), &event.current);
    for request in requests {
        match sender.send(&request).await {
            Ok(()) => {
                tracing::info!("✅ Email sent to {}: {}", request.recipient, request.subject);
            }
            Err(e) => {
                // Send failures are logged and discarded; the transition is
                // considered processed either way.
                tracing::error!("❌ Error sending email: {e}");
            }
        }
    }
}
