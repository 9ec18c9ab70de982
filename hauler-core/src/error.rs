use std::fmt;

use thiserror::Error;

use crate::order::OrderStatus;

/// Stage of order creation, used for failure attribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateStage {
    FromLocation,
    ToLocation,
    OrderInsert,
    Cargo(usize),
}

impl fmt::Display for CreateStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateStage::FromLocation => write!(f, "from-location resolution"),
            CreateStage::ToLocation => write!(f, "to-location resolution"),
            CreateStage::OrderInsert => write!(f, "order insert"),
            CreateStage::Cargo(index) => write!(f, "cargo {} registration", index),
        }
    }
}

#[derive(Debug, Error)]
pub enum OrderError {
    #[error("order {0} not found")]
    NotFound(i64),

    /// A collaborator call failed before the failing stage wrote anything;
    /// nothing past the named stage exists in storage.
    #[error("{stage} failed: {source}")]
    Collaborator {
        stage: CreateStage,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The order row was persisted but cargo registration stopped at
    /// `failed_index`. Earlier cargos remain; later ones were not attempted.
    #[error("order {order_id} persisted but cargo {failed_index} failed: {source}")]
    PartialCreation {
        order_id: i64,
        failed_index: usize,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("invalid status transition from {from} to {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    #[error("storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}
