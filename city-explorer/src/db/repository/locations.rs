use libsql::{params, Connection};

use crate::error::{ExplorerError, Result};
use crate::models::Location;

pub struct LocationRepository;

impl LocationRepository {
    pub async fn get_by_search_query(
        conn: &Connection,
        search_query: &str,
    ) -> Result<Option<Location>> {
        let mut rows = conn
            .query(
                r#"
                SELECT id, search_query, formatted_query, latitude, longitude
                FROM locations
                WHERE search_query = ?1
                LIMIT 1
                "#,
                params![search_query],
            )
            .await?;

        match rows.next().await? {
            Some(row) => Ok(Some(Self::row_to_location(&row)?)),
            None => Ok(None),
        }
    }

    /// Insert a location and return the id the store assigned to it.
    pub async fn create(conn: &Connection, location: &Location) -> Result<i64> {
        let mut rows = conn
            .query(
                r#"
                INSERT INTO locations (
                    search_query, formatted_query, latitude, longitude
                ) VALUES (
                    ?1, ?2, ?3, ?4
                )
                RETURNING id
                "#,
                params![
                    location.search_query.as_str(),
                    location.formatted_query.as_str(),
                    location.latitude,
                    location.longitude,
                ],
            )
            .await?;

        let row = rows.next().await?.ok_or_else(|| {
            ExplorerError::Internal("INSERT INTO locations returned no id".to_string())
        })?;
        Ok(row.get::<i64>(0)?)
    }

    fn row_to_location(row: &libsql::Row) -> Result<Location> {
        Ok(Location {
            id: Some(row.get(0)?),
            search_query: row.get(1)?,
            formatted_query: row.get(2)?,
            latitude: row.get(3)?,
            longitude: row.get(4)?,
        })
    }
}
