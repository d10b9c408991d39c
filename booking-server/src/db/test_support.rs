//! Shared test fixtures: in-memory SQLite pool with the real schema applied
//! and a small seed inventory.

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

/// In-memory pool with migrations applied.
///
/// `max_connections(1)` so every query in a test observes every prior write
/// (`sqlite::memory:` databases are per-connection).
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    sqlx::migrate!("./migrations").run(&pool).await.unwrap();
    pool
}

/// Pool seeded with one room type (id 1, base 500,000 VND, max 2 guests),
/// two rooms (ids 101 "301", 102 "302") and two catalog services
/// (id 1 breakfast 150,000, id 2 airport pickup 350,000).
pub async fn seeded_pool() -> SqlitePool {
    let pool = test_pool().await;

    sqlx::query(
        "INSERT INTO room_type (id, name, base_price, max_occupancy, amenities, created_at) \
         VALUES (1, 'Standard', 500000, 2, '[\"wifi\",\"ac\"]', 0)",
    )
    .execute(&pool)
    .await
    .unwrap();

    sqlx::query(
        "INSERT INTO room (id, room_number, room_type_id, status, cleaning_status, created_at) \
         VALUES (101, '301', 1, 'available', 'clean', 0), \
                (102, '302', 1, 'available', 'clean', 0)",
    )
    .execute(&pool)
    .await
    .unwrap();

    sqlx::query(
        "INSERT INTO service_item (id, name, unit_price, is_active) \
         VALUES (1, 'Breakfast', 150000, 1), (2, 'Airport pickup', 350000, 1)",
    )
    .execute(&pool)
    .await
    .unwrap();

    pool
}
