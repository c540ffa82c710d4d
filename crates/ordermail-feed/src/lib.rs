//! # OrderMail Feed
//! Change-feed plumbing: payload parsing, feed sources, and the watcher
//! that turns order transitions into outbound email.

pub mod event;
pub mod watcher;
pub mod webhook;

pub use watcher::OrderWatcher;
pub use webhook::{FeedInjector, WebhookFeedSource, webhook_feed};
