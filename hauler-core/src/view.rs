use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::order::OrderStatus;

/// Location fields exposed by read operations: the home flag plus the
/// joined city and street names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocationView {
    pub home: bool,
    pub city: String,
    pub street: String,
}

/// Display name of the order's requester.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OwnerView {
    pub first_name: String,
    pub last_name: String,
}

/// Projection returned by the order read operations. Each read declares
/// this shape explicitly instead of sharing a mutable select description.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderView {
    pub id: i64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub owner: OwnerView,
    pub from_location: LocationView,
    pub to_location: LocationView,
}
