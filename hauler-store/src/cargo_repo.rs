use async_trait::async_trait;
use sqlx::PgPool;

use hauler_core::{CargoRegistrar, CargoSpec};

pub struct PgCargoRegistrar {
    pool: PgPool,
}

impl PgCargoRegistrar {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CargoRegistrar for PgCargoRegistrar {
    async fn register(
        &self,
        order_id: i64,
        cargo: &CargoSpec,
    ) -> Result<i64, Box<dyn std::error::Error + Send + Sync>> {
        let (id,): (i64,) = sqlx::query_as(
            "INSERT INTO cargos (order_id, weight, volume, description) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id",
        )
        .bind(order_id)
        .bind(cargo.weight)
        .bind(cargo.volume)
        .bind(cargo.description.as_deref())
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }
}
