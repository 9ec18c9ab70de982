use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::location::LocationSpec;

/// Order status in the approval workflow
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Approved,
    Declined,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Approved => "APPROVED",
            OrderStatus::Declined => "DECLINED",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "PENDING" => Some(OrderStatus::Pending),
            "APPROVED" => Some(OrderStatus::Approved),
            "DECLINED" => Some(OrderStatus::Declined),
            _ => None,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transport request between two locations, owned by the requesting user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Order {
    pub id: i64,
    pub owner_id: i64,
    pub from_location_id: i64,
    pub to_location_id: i64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Cargo attributes as submitted by the requester. Opaque to the order
/// workflow; only the cargo registrar interprets them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CargoSpec {
    pub weight: i32,
    #[serde(default)]
    pub volume: Option<i32>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Input to order creation: requester, route endpoints, cargo manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct NewOrder {
    pub owner_id: i64,
    pub from_location: LocationSpec,
    pub to_location: LocationSpec,
    #[serde(default)]
    pub cargos: Vec<CargoSpec>,
}

/// Order fields the caller supplies to storage; id, status and timestamps
/// are assigned on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrderRecord {
    pub owner_id: i64,
    pub from_location_id: i64,
    pub to_location_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_text() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Approved,
            OrderStatus::Declined,
        ] {
            assert_eq!(OrderStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(OrderStatus::parse("SHIPPED"), None);
    }

    #[test]
    fn status_serializes_screaming_snake_case() {
        let json = serde_json::to_string(&OrderStatus::Pending).unwrap();
        assert_eq!(json, "\"PENDING\"");

        let parsed: OrderStatus = serde_json::from_str("\"DECLINED\"").unwrap();
        assert_eq!(parsed, OrderStatus::Declined);
    }

    #[test]
    fn new_order_defaults_to_empty_cargo_manifest() {
        let json = r#"{
            "owner_id": 7,
            "from_location": {"home": true, "city": "Riga", "street": "Brivibas"},
            "to_location": {"home": false, "city": "Riga", "street": "Merkela"}
        }"#;

        let new_order: NewOrder = serde_json::from_str(json).unwrap();
        assert_eq!(new_order.owner_id, 7);
        assert!(new_order.cargos.is_empty());
    }
}
