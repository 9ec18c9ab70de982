use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use hauler_core::{
    LocationView, NewOrderRecord, Order, OrderStatus, OrderStore, OrderView, OwnerView,
};

pub struct PgOrderStore {
    pool: PgPool,
}

impl PgOrderStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const ORDER_COLUMNS: &str =
    "id, owner_id, from_location_id, to_location_id, status, created_at, updated_at";

// The read projection: order fields plus the owner's name and both
// endpoints' joined city/street names.
const VIEW_SELECT: &str = "SELECT o.id, o.status, o.created_at, o.updated_at, \
     u.first_name, u.last_name, \
     fl.home AS from_home, fc.name AS from_city, fs.name AS from_street, \
     tl.home AS to_home, tc.name AS to_city, ts.name AS to_street \
     FROM orders o \
     JOIN users u ON u.id = o.owner_id \
     JOIN locations fl ON fl.id = o.from_location_id \
     JOIN cities fc ON fc.id = fl.city_id \
     JOIN streets fs ON fs.id = fl.street_id \
     JOIN locations tl ON tl.id = o.to_location_id \
     JOIN cities tc ON tc.id = tl.city_id \
     JOIN streets ts ON ts.id = tl.street_id";

// Internal structs for type-safe querying
#[derive(sqlx::FromRow)]
struct OrderRow {
    id: i64,
    owner_id: i64,
    from_location_id: i64,
    to_location_id: i64,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl OrderRow {
    fn into_order(self) -> Result<Order, Box<dyn std::error::Error + Send + Sync>> {
        let status = OrderStatus::parse(&self.status)
            .ok_or_else(|| format!("unknown order status {:?}", self.status))?;
        Ok(Order {
            id: self.id,
            owner_id: self.owner_id,
            from_location_id: self.from_location_id,
            to_location_id: self.to_location_id,
            status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct OrderViewRow {
    id: i64,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    first_name: String,
    last_name: String,
    from_home: bool,
    from_city: String,
    from_street: String,
    to_home: bool,
    to_city: String,
    to_street: String,
}

impl OrderViewRow {
    fn into_view(self) -> Result<OrderView, Box<dyn std::error::Error + Send + Sync>> {
        let status = OrderStatus::parse(&self.status)
            .ok_or_else(|| format!("unknown order status {:?}", self.status))?;
        Ok(OrderView {
            id: self.id,
            status,
            created_at: self.created_at,
            updated_at: self.updated_at,
            owner: OwnerView {
                first_name: self.first_name,
                last_name: self.last_name,
            },
            from_location: LocationView {
                home: self.from_home,
                city: self.from_city,
                street: self.from_street,
            },
            to_location: LocationView {
                home: self.to_home,
                city: self.to_city,
                street: self.to_street,
            },
        })
    }
}

#[async_trait]
impl OrderStore for PgOrderStore {
    async fn insert(
        &self,
        record: &NewOrderRecord,
    ) -> Result<Order, Box<dyn std::error::Error + Send + Sync>> {
        let row: OrderRow = sqlx::query_as(&format!(
            "INSERT INTO orders (owner_id, from_location_id, to_location_id) \
             VALUES ($1, $2, $3) \
             RETURNING {ORDER_COLUMNS}"
        ))
        .bind(record.owner_id)
        .bind(record.from_location_id)
        .bind(record.to_location_id)
        .fetch_one(&self.pool)
        .await?;

        row.into_order()
    }

    async fn find_pending(
        &self,
    ) -> Result<Vec<OrderView>, Box<dyn std::error::Error + Send + Sync>> {
        let rows: Vec<OrderViewRow> =
            sqlx::query_as(&format!("{VIEW_SELECT} WHERE o.status = $1"))
                .bind(OrderStatus::Pending.as_str())
                .fetch_all(&self.pool)
                .await?;

        rows.into_iter().map(OrderViewRow::into_view).collect()
    }

    async fn find_by_owner(
        &self,
        owner_id: i64,
    ) -> Result<Vec<OrderView>, Box<dyn std::error::Error + Send + Sync>> {
        let rows: Vec<OrderViewRow> =
            sqlx::query_as(&format!("{VIEW_SELECT} WHERE o.owner_id = $1"))
                .bind(owner_id)
                .fetch_all(&self.pool)
                .await?;

        rows.into_iter().map(OrderViewRow::into_view).collect()
    }

    async fn find_by_id(
        &self,
        id: i64,
    ) -> Result<Option<OrderView>, Box<dyn std::error::Error + Send + Sync>> {
        let row: Option<OrderViewRow> =
            sqlx::query_as(&format!("{VIEW_SELECT} WHERE o.id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        row.map(OrderViewRow::into_view).transpose()
    }

    async fn update_route(
        &self,
        id: i64,
        from_location_id: i64,
        to_location_id: i64,
    ) -> Result<Option<Order>, Box<dyn std::error::Error + Send + Sync>> {
        let row: Option<OrderRow> = sqlx::query_as(&format!(
            "UPDATE orders \
             SET from_location_id = $1, to_location_id = $2, updated_at = NOW() \
             WHERE id = $3 \
             RETURNING {ORDER_COLUMNS}"
        ))
        .bind(from_location_id)
        .bind(to_location_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(OrderRow::into_order).transpose()
    }

    async fn set_status(
        &self,
        id: i64,
        status: OrderStatus,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        let result = sqlx::query(
            "UPDATE orders SET status = $1, updated_at = NOW() WHERE id = $2",
        )
        .bind(status.as_str())
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
