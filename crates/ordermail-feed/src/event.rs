//! Parsing of pushed change-feed payloads into typed events.
//!
//! Accepts either a single event object or a batch under `"events"`. Each
//! entry carries the change type, the document id, the new snapshot under
//! `"data"`, and optionally the prior snapshot under `"previous"`. Entries
//! that do not parse are skipped with a warning; one bad entry never fails
//! the batch.

use ordermail_core::types::{ChangeEvent, ChangeKind, Order};

/// Parse a pushed payload into zero or more change events.
pub fn parse_change_payload(payload: &serde_json::Value) -> Vec<ChangeEvent> {
    match payload.get("events").and_then(|e| e.as_array()) {
        Some(entries) => entries.iter().filter_map(parse_entry).collect(),
        None => parse_entry(payload).into_iter().collect(),
    }
}

fn parse_entry(entry: &serde_json::Value) -> Option<ChangeEvent> {
    let kind_str = entry["type"].as_str().unwrap_or("");
    let Some(kind) = ChangeKind::parse(kind_str) else {
        tracing::warn!("⚠️ Skipping feed entry with unknown change type: {kind_str:?}");
        return None;
    };

    let Some(order_id) = entry["id"].as_str().filter(|id| !id.is_empty()) else {
        tracing::warn!("⚠️ Skipping feed entry without document id");
        return None;
    };

    let current: Order = match serde_json::from_value(entry["data"].clone()) {
        Ok(order) => order,
        Err(e) => {
            tracing::warn!("⚠️ Skipping feed entry for {order_id}: bad snapshot: {e}");
            return None;
        }
    };

    let previous = entry
        .get("previous")
        .filter(|p| !p.is_null())
        .and_then(|p| match serde_json::from_value::<Order>(p.clone()) {
            Ok(order) => Some(order),
            Err(e) => {
                tracing::warn!("⚠️ Dropping unparseable previous snapshot for {order_id}: {e}");
                None
            }
        });

    Some(ChangeEvent {
        kind,
        order_id: order_id.to_string(),
        current,
        previous,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_modified_event() {
        let payload = serde_json::json!({
            "type": "modified",
            "id": "ord_1",
            "data": {
                "billingAddress": {"email": "a@b.com", "firstName": "Sam"},
                "paymentStatus": {"adminConfirmed": true}
            },
            "previous": {
                "paymentStatus": {"adminConfirmed": false}
            }
        });
        let events = parse_change_payload(&payload);
        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert_eq!(event.kind, ChangeKind::Modified);
        assert_eq!(event.order_id, "ord_1");
        assert!(event.current.payment_confirmed());
        assert!(!event.previous.as_ref().unwrap().payment_confirmed());
    }

    #[test]
    fn test_parse_batched_events() {
        let payload = serde_json::json!({
            "events": [
                {"type": "added", "id": "ord_1", "data": {}},
                {"type": "modified", "id": "ord_2", "data": {}},
                {"type": "removed", "id": "ord_3", "data": {}}
            ]
        });
        let events = parse_change_payload(&payload);
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].kind, ChangeKind::Added);
        assert_eq!(events[1].kind, ChangeKind::Modified);
        assert_eq!(events[2].kind, ChangeKind::Removed);
    }

    #[test]
    fn test_missing_previous_is_none() {
        let payload = serde_json::json!({"type": "modified", "id": "ord_1", "data": {}});
        let events = parse_change_payload(&payload);
        assert!(events[0].previous.is_none());

        let payload =
            serde_json::json!({"type": "modified", "id": "ord_1", "data": {}, "previous": null});
        let events = parse_change_payload(&payload);
        assert!(events[0].previous.is_none());
    }

    #[test]
    fn test_skips_unknown_change_type() {
        let payload = serde_json::json!({
            "events": [
                {"type": "renamed", "id": "ord_1", "data": {}},
                {"type": "modified", "id": "ord_2", "data": {}}
            ]
        });
        let events = parse_change_payload(&payload);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].order_id, "ord_2");
    }

    #[test]
    fn test_skips_entry_without_id() {
        let payload = serde_json::json!({"type": "modified", "data": {}});
        assert!(parse_change_payload(&payload).is_empty());
    }

    #[test]
    fn test_skips_bad_snapshot() {
        let payload = serde_json::json!({
            "events": [
                {"type": "modified", "id": "ord_1", "data": {"items": "not-a-list"}},
                {"type": "modified", "id": "ord_2", "data": {}}
            ]
        });
        let events = parse_change_payload(&payload);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].order_id, "ord_2");
    }
}
