//! Cart Repository
//!
//! Carts are keyed by session id; lines are unique per (cart, menu item).

use chrono::Utc;
use sqlx::SqliteConnection;

use super::RepoResult;
use crate::db::models::{Cart, CartDetail, CartLine, CartLineDetail, CartSummary, MenuItem};
use crate::money;

/// Cart line joined with its menu item columns
#[derive(sqlx::FromRow)]
struct CartLineJoinRow {
    id: i64,
    menu_item_id: i64,
    quantity: i64,
    name: String,
    description: Option<String>,
    price: f64,
    image_url: Option<String>,
}

pub struct CartRepository;

impl CartRepository {
    /// Find a cart by its session id
    pub async fn find_by_session(
        conn: &mut SqliteConnection,
        session_id: &str,
    ) -> RepoResult<Option<Cart>> {
        let cart = sqlx::query_as::<_, Cart>(
            "SELECT id, session_id, created_at FROM carts WHERE session_id = ?",
        )
        .bind(session_id)
        .fetch_optional(&mut *conn)
        .await?;
        Ok(cart)
    }

    /// Get the cart for a session, creating an empty one if absent.
    ///
    /// The UNIQUE(session_id) constraint makes this race-safe: of two
    /// concurrent creates for the same unseen session, the loser's insert
    /// is a no-op and both read the same row back.
    pub async fn get_or_create(
        conn: &mut SqliteConnection,
        session_id: &str,
    ) -> RepoResult<Cart> {
        sqlx::query(
            "INSERT INTO carts (session_id, created_at) VALUES (?, ?) \
             ON CONFLICT (session_id) DO NOTHING",
        )
        .bind(session_id)
        .bind(Utc::now())
        .execute(&mut *conn)
        .await?;

        let cart = sqlx::query_as::<_, Cart>(
            "SELECT id, session_id, created_at FROM carts WHERE session_id = ?",
        )
        .bind(session_id)
        .fetch_one(&mut *conn)
        .await?;
        Ok(cart)
    }

    /// Load the lines of a cart with their menu items joined in
    pub async fn load_lines(
        conn: &mut SqliteConnection,
        cart_id: i64,
    ) -> RepoResult<Vec<CartLineDetail>> {
        let rows = sqlx::query_as::<_, CartLineJoinRow>(
            "SELECT ci.id, ci.menu_item_id, ci.quantity, \
                    m.name, m.description, m.price, m.image_url \
             FROM cart_items ci \
             JOIN menu_items m ON m.id = ci.menu_item_id \
             WHERE ci.cart_id = ? \
             ORDER BY ci.id",
        )
        .bind(cart_id)
        .fetch_all(&mut *conn)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| CartLineDetail {
                id: row.id,
                menu_item_id: row.menu_item_id,
                quantity: row.quantity,
                menu_item: MenuItem {
                    id: row.menu_item_id,
                    name: row.name,
                    description: row.description,
                    price: row.price,
                    image_url: row.image_url,
                },
            })
            .collect())
    }

    /// Add a quantity of a menu item to a cart. If the cart already has a
    /// line for that item, the quantity is incremented instead of a second
    /// row being inserted.
    pub async fn upsert_line(
        conn: &mut SqliteConnection,
        cart_id: i64,
        menu_item_id: i64,
        quantity: i64,
    ) -> RepoResult<()> {
        sqlx::query(
            "INSERT INTO cart_items (cart_id, menu_item_id, quantity) VALUES (?, ?, ?) \
             ON CONFLICT (cart_id, menu_item_id) \
             DO UPDATE SET quantity = quantity + excluded.quantity",
        )
        .bind(cart_id)
        .bind(menu_item_id)
        .bind(quantity)
        .execute(&mut *conn)
        .await?;
        Ok(())
    }

    /// Find a line by id, scoped to a cart
    pub async fn find_line(
        conn: &mut SqliteConnection,
        cart_id: i64,
        line_id: i64,
    ) -> RepoResult<Option<CartLine>> {
        let line = sqlx::query_as::<_, CartLine>(
            "SELECT id, cart_id, menu_item_id, quantity FROM cart_items \
             WHERE id = ? AND cart_id = ?",
        )
        .bind(line_id)
        .bind(cart_id)
        .fetch_optional(&mut *conn)
        .await?;
        Ok(line)
    }

    /// Set a line's quantity directly (not additive)
    pub async fn set_line_quantity(
        conn: &mut SqliteConnection,
        line_id: i64,
        quantity: i64,
    ) -> RepoResult<()> {
        sqlx::query("UPDATE cart_items SET quantity = ? WHERE id = ?")
            .bind(quantity)
            .bind(line_id)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }

    /// Delete a line, scoped to a cart. Returns false if nothing matched.
    pub async fn delete_line(
        conn: &mut SqliteConnection,
        cart_id: i64,
        line_id: i64,
    ) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM cart_items WHERE id = ? AND cart_id = ?")
            .bind(line_id)
            .bind(cart_id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete all lines of a cart. Returns the number of deleted lines.
    pub async fn clear_lines(conn: &mut SqliteConnection, cart_id: i64) -> RepoResult<u64> {
        let result = sqlx::query("DELETE FROM cart_items WHERE cart_id = ?")
            .bind(cart_id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected())
    }

    /// Assemble the client-facing summary: cart, embedded lines and the
    /// aggregates computed from current catalog prices.
    pub async fn load_summary(
        conn: &mut SqliteConnection,
        cart: Cart,
    ) -> RepoResult<CartSummary> {
        let lines = Self::load_lines(&mut *conn, cart.id).await?;
        let totals = money::cart_totals(&lines);
        Ok(CartSummary {
            cart: CartDetail {
                id: cart.id,
                session_id: cart.session_id,
                created_at: cart.created_at,
                cart_items: lines,
            },
            total_amount: totals.total_amount,
            total_items: totals.total_items,
        })
    }
}
