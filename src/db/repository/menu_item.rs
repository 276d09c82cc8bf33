//! Menu Item Repository

use sqlx::SqliteConnection;

use super::RepoResult;
use crate::db::models::{MenuItem, MenuItemCreate};

pub struct MenuItemRepository;

impl MenuItemRepository {
    /// Find all menu items, in insertion order
    pub async fn find_all(conn: &mut SqliteConnection) -> RepoResult<Vec<MenuItem>> {
        let items = sqlx::query_as::<_, MenuItem>(
            "SELECT id, name, description, price, image_url FROM menu_items ORDER BY id",
        )
        .fetch_all(&mut *conn)
        .await?;
        Ok(items)
    }

    /// Find a menu item by id
    pub async fn find_by_id(conn: &mut SqliteConnection, id: i64) -> RepoResult<Option<MenuItem>> {
        let item = sqlx::query_as::<_, MenuItem>(
            "SELECT id, name, description, price, image_url FROM menu_items WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
        Ok(item)
    }

    /// Create a new menu item. Duplicate names are permitted.
    pub async fn create(
        conn: &mut SqliteConnection,
        data: MenuItemCreate,
    ) -> RepoResult<MenuItem> {
        let item = sqlx::query_as::<_, MenuItem>(
            "INSERT INTO menu_items (name, description, price, image_url) \
             VALUES (?, ?, ?, ?) \
             RETURNING id, name, description, price, image_url",
        )
        .bind(data.name)
        .bind(data.description)
        .bind(data.price)
        .bind(data.image_url)
        .fetch_one(&mut *conn)
        .await?;
        Ok(item)
    }
}
