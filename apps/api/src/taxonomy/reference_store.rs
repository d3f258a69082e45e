//! Reference Store Accessor: read-only lookup of parent attribute templates by HS4 heading.

use std::path::Path;

use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{ConnectOptions, Connection};
use tracing::debug;

use crate::db::reference_connect_options;

/// Handle to the SQLite reference store. Holds no connection: each lookup opens
/// the file, runs one query and closes it again.
#[derive(Debug, Clone)]
pub struct ReferenceStore {
    options: SqliteConnectOptions,
}

impl ReferenceStore {
    pub fn new(database_path: impl AsRef<Path>) -> Self {
        Self {
            options: reference_connect_options(database_path.as_ref()),
        }
    }

    /// Returns the stored parent attribute JSON text for `hs4`, or `None` when no
    /// row matches or the stored value is NULL or blank.
    ///
    /// Duplicate headings resolve to the first inserted row. The text is passed
    /// through unparsed.
    pub async fn fetch_parent_attributes(&self, hs4: &str) -> Result<Option<String>, sqlx::Error> {
        let mut conn = self.options.connect().await?;

        let row: Option<Option<String>> = sqlx::query_scalar(
            r#"
            SELECT extracted_attributes
            FROM hs_attribute_store
            WHERE hs4 = ?
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(hs4)
        .fetch_optional(&mut conn)
        .await?;

        conn.close().await?;

        let attributes = row.flatten().filter(|s| !s.trim().is_empty());
        debug!(hs4, found = attributes.is_some(), "Reference store lookup");
        Ok(attributes)
    }
}
