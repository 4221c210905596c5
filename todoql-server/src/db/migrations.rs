//! Database migrations for the todo table

use sqlx::SqlitePool;

/// Run all migrations. Safe to call on every startup.
pub async fn run(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::info!("Running todo migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS todos (
            id      INTEGER PRIMARY KEY AUTOINCREMENT,
            text    TEXT    NOT NULL,
            done    BOOLEAN NOT NULL DEFAULT FALSE,
            version INTEGER NOT NULL DEFAULT 1
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Todo migrations complete");
    Ok(())
}
