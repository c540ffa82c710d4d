//! Capability traits: the two seams between the rule engine and the
//! outside world. Both are injected into the watcher so the engine can be
//! exercised with fakes.

use async_trait::async_trait;
use futures::stream::Stream;

use crate::error::Result;
use crate::types::{ChangeEvent, NotificationRequest};

/// Source of change events on a tracked document collection.
#[async_trait]
pub trait ChangeFeedSource: Send + Sync {
    /// Name of the collection being observed.
    fn collection(&self) -> &str;

    /// Open the subscription. The stream is expected to run for the
    /// lifetime of the process; it ends only when the source is torn down.
    async fn subscribe(&self) -> Result<Box<dyn Stream<Item = ChangeEvent> + Send + Unpin>>;
}

/// Outbound mail collaborator.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, request: &NotificationRequest) -> Result<()>;
}
