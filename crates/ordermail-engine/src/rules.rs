//! Edge-triggered notification rules.
//!
//! A notification fires only when a tracked flag changes from not-true to
//! true between the previous and current snapshot, not merely because the
//! flag is currently true. An absent previous snapshot counts as "was not
//! true", so the first observed true state fires exactly once.

use chrono::{NaiveDate, Utc};
use ordermail_core::types::{NotificationRequest, Order};

use crate::templates;

/// Decides which notifications an order transition produces.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    store_name: String,
}

impl RuleEngine {
    pub fn new(store_name: impl Into<String>) -> Self {
        Self {
            store_name: store_name.into(),
        }
    }

    /// Evaluate one (previous, current) snapshot pair. Returns 0–2 requests,
    /// payment confirmation first when both flags flipped on the same event.
    ///
    /// No idempotency key is kept: a redelivered event, or a flag that
    /// regressed to false and came back, fires again.
    pub fn decide(
        &self,
        order_id: &str,
        previous: Option<&Order>,
        current: &Order,
    ) -> Vec<NotificationRequest> {
        self.decide_at(order_id, previous, current, Utc::now().date_naive())
    }

    /// Same as [`decide`](Self::decide) with a fixed processing date, so
    /// rendering stays deterministic under test.
    pub fn decide_at(
        &self,
        order_id: &str,
        previous: Option<&Order>,
        current: &Order,
        today: NaiveDate,
    ) -> Vec<NotificationRequest> {
        let Some(email) = current.contact_email() else {
            // No contact address: nothing to send, regardless of transitions.
            return Vec::new();
        };

        let mut requests = Vec::new();

        if current.payment_confirmed() && !previous.is_some_and(Order::payment_confirmed) {
            tracing::info!("💰 Payment confirmed for order {order_id}");
            let (subject, body) = templates::payment_confirmation(&self.store_name, order_id, current);
            requests.push(NotificationRequest {
                recipient: email.to_string(),
                subject,
                body,
            });
        }

        if current.delivered() && !previous.is_some_and(Order::delivered) {
            tracing::info!("🚚 Order delivered: {order_id}");
            let (subject, body) =
                templates::delivery_confirmation(&self.store_name, order_id, current, today);
            requests.push(NotificationRequest {
                recipient: email.to_string(),
                subject,
                body,
            });
        }

        requests
    }
}
