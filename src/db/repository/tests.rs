use super::{CartRepository, MenuItemRepository, OrderRepository};
use crate::db::DbService;
use crate::db::models::{MenuItem, MenuItemCreate, OrderStatus};

async fn setup() -> DbService {
    DbService::new_in_memory().await.expect("in-memory database")
}

async fn seed_item(db: &DbService, name: &str, price: f64) -> MenuItem {
    let mut conn = db.pool.acquire().await.unwrap();
    MenuItemRepository::create(
        &mut conn,
        MenuItemCreate {
            name: name.to_string(),
            description: None,
            price,
            image_url: None,
        },
    )
    .await
    .unwrap()
}

#[tokio::test]
async fn get_or_create_is_idempotent() {
    let db = setup().await;
    let mut conn = db.pool.acquire().await.unwrap();

    let first = CartRepository::get_or_create(&mut conn, "sess-1").await.unwrap();
    let second = CartRepository::get_or_create(&mut conn, "sess-1").await.unwrap();
    assert_eq!(first.id, second.id);

    // Release the only pooled connection before querying through the pool
    drop(conn);
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM carts")
        .fetch_one(&db.pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn distinct_sessions_get_distinct_carts() {
    let db = setup().await;
    let mut conn = db.pool.acquire().await.unwrap();

    let a = CartRepository::get_or_create(&mut conn, "sess-a").await.unwrap();
    let b = CartRepository::get_or_create(&mut conn, "sess-b").await.unwrap();
    assert_ne!(a.id, b.id);
}

#[tokio::test]
async fn session_id_uniqueness_is_enforced_by_schema() {
    let db = setup().await;

    let result = sqlx::query("INSERT INTO carts (session_id, created_at) VALUES (?, ?)")
        .bind("sess-1")
        .bind(chrono::Utc::now())
        .execute(&db.pool)
        .await;
    assert!(result.is_ok());

    // A plain second insert loses to the UNIQUE constraint
    let duplicate = sqlx::query("INSERT INTO carts (session_id, created_at) VALUES (?, ?)")
        .bind("sess-1")
        .bind(chrono::Utc::now())
        .execute(&db.pool)
        .await;
    assert!(duplicate.is_err());
}

#[tokio::test]
async fn upsert_line_increments_existing_quantity() {
    let db = setup().await;
    let item = seed_item(&db, "Espresso", 2.50).await;
    let mut conn = db.pool.acquire().await.unwrap();

    let cart = CartRepository::get_or_create(&mut conn, "sess-1").await.unwrap();
    CartRepository::upsert_line(&mut conn, cart.id, item.id, 3).await.unwrap();
    CartRepository::upsert_line(&mut conn, cart.id, item.id, 2).await.unwrap();

    let lines = CartRepository::load_lines(&mut conn, cart.id).await.unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].quantity, 5);
    assert_eq!(lines[0].menu_item.price, 2.50);
}

#[tokio::test]
async fn find_line_is_scoped_to_the_cart() {
    let db = setup().await;
    let item = seed_item(&db, "Latte", 4.50).await;
    let mut conn = db.pool.acquire().await.unwrap();

    let mine = CartRepository::get_or_create(&mut conn, "sess-mine").await.unwrap();
    let other = CartRepository::get_or_create(&mut conn, "sess-other").await.unwrap();
    CartRepository::upsert_line(&mut conn, mine.id, item.id, 1).await.unwrap();
    let lines = CartRepository::load_lines(&mut conn, mine.id).await.unwrap();
    let line = &lines[0];

    assert!(
        CartRepository::find_line(&mut conn, other.id, line.id)
            .await
            .unwrap()
            .is_none()
    );
    assert!(
        CartRepository::find_line(&mut conn, mine.id, line.id)
            .await
            .unwrap()
            .is_some()
    );
}

#[tokio::test]
async fn quantity_check_constraint_rejects_zero() {
    let db = setup().await;
    let item = seed_item(&db, "Mocha", 5.00).await;
    let mut conn = db.pool.acquire().await.unwrap();

    let cart = CartRepository::get_or_create(&mut conn, "sess-1").await.unwrap();
    CartRepository::upsert_line(&mut conn, cart.id, item.id, 1).await.unwrap();
    let lines = CartRepository::load_lines(&mut conn, cart.id).await.unwrap();

    let result = CartRepository::set_line_quantity(&mut conn, lines[0].id, 0).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn clear_lines_removes_everything() {
    let db = setup().await;
    let espresso = seed_item(&db, "Espresso", 2.50).await;
    let latte = seed_item(&db, "Latte", 4.50).await;
    let mut conn = db.pool.acquire().await.unwrap();

    let cart = CartRepository::get_or_create(&mut conn, "sess-1").await.unwrap();
    CartRepository::upsert_line(&mut conn, cart.id, espresso.id, 2).await.unwrap();
    CartRepository::upsert_line(&mut conn, cart.id, latte.id, 1).await.unwrap();

    let removed = CartRepository::clear_lines(&mut conn, cart.id).await.unwrap();
    assert_eq!(removed, 2);
    assert!(CartRepository::load_lines(&mut conn, cart.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn order_total_is_a_snapshot() {
    let db = setup().await;
    let item = seed_item(&db, "Espresso", 2.50).await;
    let mut conn = db.pool.acquire().await.unwrap();

    let cart = CartRepository::get_or_create(&mut conn, "sess-1").await.unwrap();
    CartRepository::upsert_line(&mut conn, cart.id, item.id, 4).await.unwrap();

    let order = OrderRepository::create(&mut conn, cart.id, 10.0).await.unwrap();
    assert_eq!(order.status, OrderStatus::Pending);

    // Later cart mutations leave the stored total alone
    CartRepository::upsert_line(&mut conn, cart.id, item.id, 10).await.unwrap();
    let reloaded = OrderRepository::find_by_id(&mut conn, order.id).await.unwrap().unwrap();
    assert_eq!(reloaded.total_amount, 10.0);
}

#[tokio::test]
async fn order_pagination_uses_skip_and_limit() {
    let db = setup().await;
    let mut conn = db.pool.acquire().await.unwrap();

    let cart = CartRepository::get_or_create(&mut conn, "sess-1").await.unwrap();
    let first = OrderRepository::create(&mut conn, cart.id, 1.0).await.unwrap();
    let second = OrderRepository::create(&mut conn, cart.id, 2.0).await.unwrap();
    let third = OrderRepository::create(&mut conn, cart.id, 3.0).await.unwrap();

    let page = OrderRepository::find_all(&mut conn, 1, 1).await.unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].id, second.id);

    let rest = OrderRepository::find_all(&mut conn, 2, 100).await.unwrap();
    assert_eq!(rest.len(), 1);
    assert_eq!(rest[0].id, third.id);

    let all = OrderRepository::find_all(&mut conn, 0, 100).await.unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].id, first.id);
}

#[tokio::test]
async fn status_can_move_in_any_direction() {
    let db = setup().await;
    let mut conn = db.pool.acquire().await.unwrap();

    let cart = CartRepository::get_or_create(&mut conn, "sess-1").await.unwrap();
    let order = OrderRepository::create(&mut conn, cart.id, 5.0).await.unwrap();

    for status in [
        OrderStatus::Completed,
        OrderStatus::Cancelled,
        OrderStatus::Pending,
        OrderStatus::Pending,
    ] {
        let updated = OrderRepository::update_status(&mut conn, order.id, status)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.status, status);
    }
}

#[tokio::test]
async fn update_status_on_missing_order_returns_none() {
    let db = setup().await;
    let mut conn = db.pool.acquire().await.unwrap();

    let updated = OrderRepository::update_status(&mut conn, 4242, OrderStatus::Completed)
        .await
        .unwrap();
    assert!(updated.is_none());
}
