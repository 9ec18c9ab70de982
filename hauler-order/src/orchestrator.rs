use std::sync::Arc;

use tracing::info;

use hauler_core::{
    CargoRegistrar, CargoSpec, CreateStage, LocationResolver, LocationSpec, NewOrder,
    NewOrderRecord, Order, OrderError, OrderStatus, OrderStore, OrderView, TransitionMode,
};

/// Coordinates location resolution, order persistence and cargo
/// registration for the order lifecycle.
pub struct OrderOrchestrator {
    locations: Arc<dyn LocationResolver>,
    cargos: Arc<dyn CargoRegistrar>,
    orders: Arc<dyn OrderStore>,
    transition_mode: TransitionMode,
}

impl OrderOrchestrator {
    pub fn new(
        locations: Arc<dyn LocationResolver>,
        cargos: Arc<dyn CargoRegistrar>,
        orders: Arc<dyn OrderStore>,
        transition_mode: TransitionMode,
    ) -> Self {
        Self {
            locations,
            cargos,
            orders,
            transition_mode,
        }
    }

    /// Create an order: resolve both route endpoints, insert the order row
    /// with PENDING status, then register each cargo against the new id in
    /// input order.
    ///
    /// Resolution failures abort before anything is written. A cargo
    /// failure after the order insert surfaces as `PartialCreation`
    /// carrying the order id and the failing index; earlier cargos stay
    /// persisted and later ones are not attempted.
    pub async fn create_order(&self, new_order: NewOrder) -> Result<Order, OrderError> {
        let (from_location_id, to_location_id) = self
            .resolve_route(&new_order.from_location, &new_order.to_location)
            .await?;

        let order = self
            .orders
            .insert(&NewOrderRecord {
                owner_id: new_order.owner_id,
                from_location_id,
                to_location_id,
            })
            .await
            .map_err(|source| OrderError::Collaborator {
                stage: CreateStage::OrderInsert,
                source,
            })?;

        self.register_cargos(order.id, &new_order.cargos).await?;

        info!(
            order_id = order.id,
            owner_id = order.owner_id,
            cargos = new_order.cargos.len(),
            "order created"
        );
        Ok(order)
    }

    pub async fn not_approved_orders(&self) -> Result<Vec<OrderView>, OrderError> {
        self.orders
            .find_pending()
            .await
            .map_err(OrderError::Storage)
    }

    pub async fn user_orders(&self, owner_id: i64) -> Result<Vec<OrderView>, OrderError> {
        self.orders
            .find_by_owner(owner_id)
            .await
            .map_err(OrderError::Storage)
    }

    pub async fn get_order(&self, id: i64) -> Result<Option<OrderView>, OrderError> {
        self.orders.find_by_id(id).await.map_err(OrderError::Storage)
    }

    /// Replace the order's route endpoints, resolving both specs the same
    /// way creation does. Status, owner and cargos are untouched; cargo
    /// changes go through the cargo surface, not this path.
    pub async fn update_order(
        &self,
        id: i64,
        from: LocationSpec,
        to: LocationSpec,
    ) -> Result<Order, OrderError> {
        let (from_location_id, to_location_id) = self.resolve_route(&from, &to).await?;

        let updated = self
            .orders
            .update_route(id, from_location_id, to_location_id)
            .await
            .map_err(OrderError::Storage)?
            .ok_or(OrderError::NotFound(id))?;

        info!(order_id = id, "order route updated");
        Ok(updated)
    }

    pub async fn approve_order(&self, id: i64) -> Result<i64, OrderError> {
        self.transition(id, OrderStatus::Approved).await
    }

    pub async fn decline_order(&self, id: i64) -> Result<i64, OrderError> {
        self.transition(id, OrderStatus::Declined).await
    }

    async fn transition(&self, id: i64, to: OrderStatus) -> Result<i64, OrderError> {
        if self.transition_mode == TransitionMode::Strict {
            let current = self
                .orders
                .find_by_id(id)
                .await
                .map_err(OrderError::Storage)?
                .ok_or(OrderError::NotFound(id))?;
            self.transition_mode.check(current.status, to)?;
        }

        let updated = self
            .orders
            .set_status(id, to)
            .await
            .map_err(OrderError::Storage)?;
        if !updated {
            return Err(OrderError::NotFound(id));
        }

        info!(order_id = id, status = %to, "order status changed");
        Ok(id)
    }

    async fn resolve_route(
        &self,
        from: &LocationSpec,
        to: &LocationSpec,
    ) -> Result<(i64, i64), OrderError> {
        let from_id = self
            .locations
            .resolve(from)
            .await
            .map_err(|source| OrderError::Collaborator {
                stage: CreateStage::FromLocation,
                source,
            })?;
        let to_id = self
            .locations
            .resolve(to)
            .await
            .map_err(|source| OrderError::Collaborator {
                stage: CreateStage::ToLocation,
                source,
            })?;
        Ok((from_id, to_id))
    }

    async fn register_cargos(
        &self,
        order_id: i64,
        cargos: &[CargoSpec],
    ) -> Result<(), OrderError> {
        for (index, cargo) in cargos.iter().enumerate() {
            self.cargos
                .register(order_id, cargo)
                .await
                .map_err(|source| OrderError::PartialCreation {
                    order_id,
                    failed_index: index,
                    source,
                })?;
        }
        Ok(())
    }
}
