use rstest::*;
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};

/// Test fixture that creates an in-memory SQLite database with migrations applied
///
/// Shared by the model and controller tests so every test starts from the
/// same empty schema.
#[fixture]
pub async fn test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}
