use libsql::{Builder, Connection};
use std::sync::Arc;

use crate::config::DatabaseConfig;
use crate::error::Result;

use super::schema;

/// Store handle: one database and the single connection shared by every request.
pub struct Database {
    pub(crate) db: Arc<libsql::Database>,
    conn: Connection,
}

impl Database {
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let db = if config.url.starts_with("libsql://") || config.url.starts_with("https://") {
            Builder::new_remote(
                config.url.clone(),
                config.auth_token.clone().unwrap_or_default(),
            )
            .build()
            .await?
        } else if config.url == ":memory:" {
            Builder::new_local(":memory:").build().await?
        } else {
            let path = config.url.strip_prefix("file:").unwrap_or(&config.url);
            Builder::new_local(path).build().await?
        };

        let conn = db.connect()?;
        let database = Self {
            db: Arc::new(db),
            conn,
        };
        database.configure_database(config).await;
        schema::init_schema(&database.conn).await?;

        Ok(database)
    }

    pub fn connect(&self) -> Result<Connection> {
        Ok(self.conn.clone())
    }

    async fn configure_database(&self, config: &DatabaseConfig) {
        let busy_timeout_sql = format!("PRAGMA busy_timeout = {}", config.busy_timeout_ms);
        if let Err(error) = self.conn.execute_batch(&busy_timeout_sql).await {
            tracing::warn!(
                busy_timeout_ms = config.busy_timeout_ms,
                error = %error,
                "Failed to set SQLite busy_timeout"
            );
        }

        let journal_mode = normalize_journal_mode(&config.journal_mode);
        let journal_sql = format!("PRAGMA journal_mode = {journal_mode}");
        if let Err(error) = self.conn.execute_batch(&journal_sql).await {
            tracing::warn!(
                mode = journal_mode,
                error = %error,
                "Failed to set SQLite journal_mode"
            );
        }
    }

    /// Round trip through the shared connection. Fails when the store is
    /// unreachable or its schema is gone.
    pub async fn ping(&self) -> Result<()> {
        let mut rows = self
            .conn
            .query("SELECT COUNT(*) FROM locations", ())
            .await?;
        rows.next().await?;
        Ok(())
    }
}

impl Clone for Database {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
            conn: self.conn.clone(),
        }
    }
}

fn normalize_journal_mode(value: &str) -> &'static str {
    match value.trim().to_uppercase().as_str() {
        "DELETE" => "DELETE",
        "TRUNCATE" => "TRUNCATE",
        "PERSIST" => "PERSIST",
        "MEMORY" => "MEMORY",
        "WAL" => "WAL",
        "OFF" => "OFF",
        _ => "WAL",
    }
}
