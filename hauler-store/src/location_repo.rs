use async_trait::async_trait;
use sqlx::PgPool;

use hauler_core::{LocationResolver, LocationSpec};

/// Postgres-backed location resolver. City and street names live in their
/// own tables; a location row ties a (home, city, street) triple together
/// and is unique on it, so concurrent resolutions of the same spec land on
/// the same row.
pub struct PgLocationResolver {
    pool: PgPool,
}

impl PgLocationResolver {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Upsert-returning keeps get-or-create a single round trip per table
    // and atomic under concurrent callers.
    async fn city_id(&self, name: &str) -> Result<i64, sqlx::Error> {
        let (id,): (i64,) = sqlx::query_as(
            "INSERT INTO cities (name) VALUES ($1) \
             ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name \
             RETURNING id",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn street_id(&self, name: &str) -> Result<i64, sqlx::Error> {
        let (id,): (i64,) = sqlx::query_as(
            "INSERT INTO streets (name) VALUES ($1) \
             ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name \
             RETURNING id",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }
}

#[async_trait]
impl LocationResolver for PgLocationResolver {
    async fn resolve(
        &self,
        spec: &LocationSpec,
    ) -> Result<i64, Box<dyn std::error::Error + Send + Sync>> {
        let city_id = self.city_id(&spec.city).await?;
        let street_id = self.street_id(&spec.street).await?;

        let (id,): (i64,) = sqlx::query_as(
            "INSERT INTO locations (home, city_id, street_id) VALUES ($1, $2, $3) \
             ON CONFLICT (home, city_id, street_id) DO UPDATE SET home = EXCLUDED.home \
             RETURNING id",
        )
        .bind(spec.home)
        .bind(city_id)
        .bind(street_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }
}
