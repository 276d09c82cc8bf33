//! Order Repository

use chrono::Utc;
use sqlx::SqliteConnection;

use super::RepoResult;
use crate::db::models::{Order, OrderStatus};

pub struct OrderRepository;

impl OrderRepository {
    /// Create a pending order snapshotting the given total
    pub async fn create(
        conn: &mut SqliteConnection,
        cart_id: i64,
        total_amount: f64,
    ) -> RepoResult<Order> {
        let order = sqlx::query_as::<_, Order>(
            "INSERT INTO orders (cart_id, status, total_amount, created_at) \
             VALUES (?, ?, ?, ?) \
             RETURNING id, cart_id, status, total_amount, created_at",
        )
        .bind(cart_id)
        .bind(OrderStatus::Pending)
        .bind(total_amount)
        .bind(Utc::now())
        .fetch_one(&mut *conn)
        .await?;
        Ok(order)
    }

    /// Find an order by id
    pub async fn find_by_id(conn: &mut SqliteConnection, id: i64) -> RepoResult<Option<Order>> {
        let order = sqlx::query_as::<_, Order>(
            "SELECT id, cart_id, status, total_amount, created_at FROM orders WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
        Ok(order)
    }

    /// List orders with offset/limit pagination
    pub async fn find_all(
        conn: &mut SqliteConnection,
        skip: i64,
        limit: i64,
    ) -> RepoResult<Vec<Order>> {
        let orders = sqlx::query_as::<_, Order>(
            "SELECT id, cart_id, status, total_amount, created_at FROM orders \
             LIMIT ? OFFSET ?",
        )
        .bind(limit)
        .bind(skip)
        .fetch_all(&mut *conn)
        .await?;
        Ok(orders)
    }

    /// Overwrite an order's status. Any status is reachable from any status.
    /// Returns None if the order does not exist.
    pub async fn update_status(
        conn: &mut SqliteConnection,
        id: i64,
        status: OrderStatus,
    ) -> RepoResult<Option<Order>> {
        let order = sqlx::query_as::<_, Order>(
            "UPDATE orders SET status = ? WHERE id = ? \
             RETURNING id, cart_id, status, total_amount, created_at",
        )
        .bind(status)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
        Ok(order)
    }
}
