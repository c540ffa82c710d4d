//! Domain types: order snapshots as the upstream store serializes them,
//! change-feed events, and outbound notification requests.
//!
//! Order documents are owned by the external order-management system and are
//! read-only here. The wire format is camelCase JSON; every nested structure
//! is optional so a partial document deserializes instead of failing the
//! whole event.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A customer order snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Order {
    pub billing_address: Option<BillingAddress>,
    pub payment_status: Option<PaymentStatus>,
    pub tracking: Option<Tracking>,
    pub delivery_date: Option<Timestamp>,
    pub items: Vec<OrderItem>,
    pub shipping_address: Option<ShippingAddress>,
    pub total: f64,
}

impl Order {
    /// Contact email, if present and non-empty.
    pub fn contact_email(&self) -> Option<&str> {
        self.billing_address
            .as_ref()
            .and_then(|b| b.email.as_deref())
            .filter(|e| !e.is_empty())
    }

    /// Customer first name, empty string when absent.
    pub fn first_name(&self) -> &str {
        self.billing_address
            .as_ref()
            .and_then(|b| b.first_name.as_deref())
            .unwrap_or("")
    }

    /// Whether an admin has confirmed the payment.
    pub fn payment_confirmed(&self) -> bool {
        self.payment_status.as_ref().is_some_and(|p| p.admin_confirmed)
    }

    /// Whether the order has been delivered.
    pub fn delivered(&self) -> bool {
        self.tracking.as_ref().is_some_and(|t| t.is_delivered)
    }
}

/// Billing contact block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BillingAddress {
    pub email: Option<String>,
    pub first_name: Option<String>,
}

/// Payment state set by the order-management backoffice.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaymentStatus {
    pub admin_confirmed: bool,
}

/// Shipment tracking state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Tracking {
    pub is_delivered: bool,
}

/// One line item on an order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderItem {
    pub name: String,
    pub quantity: u32,
    pub price: f64,
}

/// Structured shipping address.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShippingAddress {
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
}

/// Timestamp as the document store serializes it: epoch seconds plus nanos.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Timestamp {
    pub seconds: i64,
    #[serde(alias = "nanoseconds")]
    pub nanos: u32,
}

impl Timestamp {
    pub fn to_utc(self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.seconds, self.nanos)
    }
}

/// What kind of change the feed observed on a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Added,
    Modified,
    Removed,
}

impl ChangeKind {
    /// Parse the change-type string carried by feed payloads.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "added" => Some(Self::Added),
            "modified" => Some(Self::Modified),
            "removed" => Some(Self::Removed),
            _ => None,
        }
    }
}

/// One change-feed event on an order document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeEvent {
    pub kind: ChangeKind,
    /// Document id, stable for the record's lifetime, carried by the feed
    /// rather than the document body.
    pub order_id: String,
    /// The new snapshot.
    pub current: Order,
    /// The prior snapshot, when the feed supplies one.
    pub previous: Option<Order>,
}

/// A rendered email waiting to be handed to the mail collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationRequest {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_deserializes_camel_case() {
        let order: Order = serde_json::from_str(
            r#"{
                "billingAddress": {"email": "a@b.com", "firstName": "Sam"},
                "paymentStatus": {"adminConfirmed": true},
                "tracking": {"isDelivered": false},
                "items": [{"name": "Vase", "quantity": 1, "price": 50}],
                "shippingAddress": {"address": "1 Orchard Rd", "city": "Singapore", "state": "SG", "pincode": "238823"},
                "total": 50
            }"#,
        )
        .unwrap();
        assert_eq!(order.contact_email(), Some("a@b.com"));
        assert_eq!(order.first_name(), "Sam");
        assert!(order.payment_confirmed());
        assert!(!order.delivered());
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].name, "Vase");
    }

    #[test]
    fn test_partial_order_uses_defaults() {
        let order: Order = serde_json::from_str("{}").unwrap();
        assert!(order.contact_email().is_none());
        assert!(!order.payment_confirmed());
        assert!(!order.delivered());
        assert!(order.items.is_empty());
        assert_eq!(order.total, 0.0);
    }

    #[test]
    fn test_empty_email_is_absent() {
        let order: Order =
            serde_json::from_str(r#"{"billingAddress": {"email": ""}}"#).unwrap();
        assert!(order.contact_email().is_none());
    }

    #[test]
    fn test_timestamp_to_utc() {
        let ts: Timestamp =
            serde_json::from_str(r#"{"seconds": 1754352000, "nanoseconds": 0}"#).unwrap();
        let dt = ts.to_utc().unwrap();
        assert_eq!(dt.timestamp(), 1754352000);
    }

    #[test]
    fn test_change_kind_parse() {
        assert_eq!(ChangeKind::parse("modified"), Some(ChangeKind::Modified));
        assert_eq!(ChangeKind::parse("added"), Some(ChangeKind::Added));
        assert_eq!(ChangeKind::parse("removed"), Some(ChangeKind::Removed));
        assert_eq!(ChangeKind::parse("renamed"), None);
    }
}
