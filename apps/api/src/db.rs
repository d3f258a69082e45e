use std::path::Path;

use anyhow::{Context, Result};
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{ConnectOptions, Connection};
use tracing::{info, warn};

/// Connection options for the reference store. Always read-only: the service
/// never writes to the database populated by the offline loader.
pub fn reference_connect_options(database_path: &Path) -> SqliteConnectOptions {
    SqliteConnectOptions::new()
        .filename(database_path)
        .read_only(true)
}

/// Startup probe: opens the reference store once, counts the stored headings,
/// and closes it again. A missing or unreadable store only logs a warning so the
/// service can still answer domain lookups.
pub async fn probe_reference_store(database_path: &Path) -> Result<()> {
    info!("Opening reference store at {}...", database_path.display());

    if !database_path.exists() {
        warn!(
            "Reference store {} does not exist; every attribute request will fail until it is loaded",
            database_path.display()
        );
        return Ok(());
    }

    let mut conn = reference_connect_options(database_path)
        .connect()
        .await
        .with_context(|| format!("Failed to open reference store {}", database_path.display()))?;

    let counted: Result<(i64, i64), sqlx::Error> = sqlx::query_as(
        "SELECT COUNT(*), COUNT(DISTINCT hs4) FROM hs_attribute_store",
    )
    .fetch_one(&mut conn)
    .await;

    match counted {
        Ok((rows, headings)) => {
            info!("Reference store ready: {rows} records across {headings} HS4 headings")
        }
        Err(e) => warn!("Reference store is not queryable: {e}"),
    }

    conn.close().await?;
    Ok(())
}

#[cfg(test)]
pub mod test_support {
    use std::path::Path;

    use sqlx::sqlite::SqliteConnectOptions;
    use sqlx::{ConnectOptions, Connection};

    /// Creates the loader's schema and inserts `(hs4, extracted_attributes)` rows in order.
    pub async fn seed_reference_store(path: &Path, rows: &[(&str, Option<&str>)]) {
        let mut conn = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .connect()
            .await
            .unwrap();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS hs_attribute_store (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                hs4 TEXT,
                master_description TEXT,
                extracted_attributes TEXT
            )
            "#,
        )
        .execute(&mut conn)
        .await
        .unwrap();

        for (hs4, attributes) in rows {
            sqlx::query(
                "INSERT INTO hs_attribute_store (hs4, master_description, extracted_attributes) VALUES (?, ?, ?)",
            )
            .bind(*hs4)
            .bind(format!("master description for {hs4}"))
            .bind(*attributes)
            .execute(&mut conn)
            .await
            .unwrap();
        }

        conn.close().await.unwrap();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_probe_tolerates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.db");
        probe_reference_store(&path).await.unwrap();
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_probe_counts_seeded_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hs_attributes.db");
        test_support::seed_reference_store(&path, &[("2508", Some("{}")), ("2815", Some("{}"))])
            .await;
        probe_reference_store(&path).await.unwrap();
    }
}
