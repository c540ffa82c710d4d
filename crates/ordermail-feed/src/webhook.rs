//! Webhook-backed change-feed source.
//!
//! The upstream store pushes change batches to the gateway; the gateway
//! parses them and injects events here. Injector and source are the two
//! halves of one mpsc channel, so the watcher consumes a plain stream and
//! never knows the transport.

use async_trait::async_trait;
use futures::stream::Stream;
use std::pin::Pin;
use std::sync::Mutex;
use std::task::{Context, Poll};
use tokio::sync::mpsc;

use ordermail_core::error::{OrderMailError, Result};
use ordermail_core::traits::ChangeFeedSource;
use ordermail_core::types::ChangeEvent;

/// Create a connected (injector, source) pair for the given collection.
pub fn webhook_feed(collection: impl Into<String>) -> (FeedInjector, WebhookFeedSource) {
    let (tx, rx) = mpsc::unbounded_channel();
    (
        FeedInjector { tx },
        WebhookFeedSource {
            collection: collection.into(),
            rx: Mutex::new(Some(rx)),
        },
    )
}

/// Write half, held by the gateway's feed-inbound route.
#[derive(Clone)]
pub struct FeedInjector {
    tx: mpsc::UnboundedSender<ChangeEvent>,
}

impl FeedInjector {
    /// Push one event into the feed. Returns false when the subscription
    /// has been dropped.
    pub fn push(&self, event: ChangeEvent) -> bool {
        self.tx.send(event).is_ok()
    }
}

/// Read half, a `ChangeFeedSource` the watcher subscribes to once.
pub struct WebhookFeedSource {
    collection: String,
    rx: Mutex<Option<mpsc::UnboundedReceiver<ChangeEvent>>>,
}

#[async_trait]
impl ChangeFeedSource for WebhookFeedSource {
    fn collection(&self) -> &str {
        &self.collection
    }

    async fn subscribe(&self) -> Result<Box<dyn Stream<Item = ChangeEvent> + Send + Unpin>> {
        let rx = self
            .rx
            .lock()
            .unwrap()
            .take()
            .ok_or_else(|| OrderMailError::Feed("Feed already subscribed".into()))?;
        Ok(Box::new(FeedStream { rx }))
    }
}

/// Stream of injected change events.
pub struct FeedStream {
    rx: mpsc::UnboundedReceiver<ChangeEvent>,
}

impl Stream for FeedStream {
    type Item = ChangeEvent;
    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.rx.poll_recv(cx)
    }
}
impl Unpin for FeedStream {}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use ordermail_core::types::{ChangeKind, Order};

    fn event(id: &str) -> ChangeEvent {
        ChangeEvent {
            kind: ChangeKind::Modified,
            order_id: id.into(),
            current: Order::default(),
            previous: None,
        }
    }

    #[tokio::test]
    async fn test_injected_events_reach_the_stream() {
        let (injector, source) = webhook_feed("orders");
        assert_eq!(source.collection(), "orders");

        let mut stream = source.subscribe().await.unwrap();
        assert!(injector.push(event("ord_1")));
        assert!(injector.push(event("ord_2")));

        assert_eq!(stream.next().await.unwrap().order_id, "ord_1");
        assert_eq!(stream.next().await.unwrap().order_id, "ord_2");
    }

    #[tokio::test]
    async fn test_second_subscribe_fails() {
        let (_injector, source) = webhook_feed("orders");
        let _stream = source.subscribe().await.unwrap();
        assert!(source.subscribe().await.is_err());
    }

    #[tokio::test]
    async fn test_push_after_drop_reports_closed() {
        let (injector, source) = webhook_feed("orders");
        let stream = source.subscribe().await.unwrap();
        drop(stream);
        drop(source);
        assert!(!injector.push(event("ord_1")));
    }
}
