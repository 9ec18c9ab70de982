use std::sync::Arc;

use hauler_order::OrderOrchestrator;

#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<OrderOrchestrator>,
}
