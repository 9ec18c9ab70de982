use async_trait::async_trait;

use crate::location::LocationSpec;
use crate::order::{CargoSpec, NewOrderRecord, Order, OrderStatus};
use crate::view::OrderView;

/// Deduplicating lookup/insert for location records.
#[async_trait]
pub trait LocationResolver: Send + Sync {
    /// Return the id of the location matching `spec`, creating it if absent.
    /// Must be safe to call concurrently for the same spec without creating
    /// duplicates.
    async fn resolve(
        &self,
        spec: &LocationSpec,
    ) -> Result<i64, Box<dyn std::error::Error + Send + Sync>>;
}

/// Insert of cargo records tied to an order.
#[async_trait]
pub trait CargoRegistrar: Send + Sync {
    async fn register(
        &self,
        order_id: i64,
        cargo: &CargoSpec,
    ) -> Result<i64, Box<dyn std::error::Error + Send + Sync>>;
}

/// Order record access.
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn insert(
        &self,
        record: &NewOrderRecord,
    ) -> Result<Order, Box<dyn std::error::Error + Send + Sync>>;

    async fn find_pending(
        &self,
    ) -> Result<Vec<OrderView>, Box<dyn std::error::Error + Send + Sync>>;

    async fn find_by_owner(
        &self,
        owner_id: i64,
    ) -> Result<Vec<OrderView>, Box<dyn std::error::Error + Send + Sync>>;

    async fn find_by_id(
        &self,
        id: i64,
    ) -> Result<Option<OrderView>, Box<dyn std::error::Error + Send + Sync>>;

    /// Replace the order's route endpoints. Returns the updated record, or
    /// `None` if no order with that id exists.
    async fn update_route(
        &self,
        id: i64,
        from_location_id: i64,
        to_location_id: i64,
    ) -> Result<Option<Order>, Box<dyn std::error::Error + Send + Sync>>;

    /// Set the order's status. Returns `false` if no order with that id
    /// exists.
    async fn set_status(
        &self,
        id: i64,
        status: OrderStatus,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>>;
}
