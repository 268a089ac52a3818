use libsql::{params, Connection};

use crate::error::Result;
use crate::models::WeatherEntry;

pub struct WeatherRepository;

impl WeatherRepository {
    pub async fn create(conn: &Connection, entry: &WeatherEntry) -> Result<()> {
        conn.execute(
            "INSERT INTO weathers (forecast, time, location_id) VALUES (?1, ?2, ?3)",
            params![
                entry.forecast.as_str(),
                entry.time.as_str(),
                entry.location_id,
            ],
        )
        .await?;
        Ok(())
    }

    pub async fn get_by_location(conn: &Connection, location_id: i64) -> Result<Vec<WeatherEntry>> {
        let mut rows = conn
            .query(
                "SELECT forecast, time, location_id FROM weathers WHERE location_id = ?1 ORDER BY id ASC",
                params![location_id],
            )
            .await?;

        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(WeatherEntry {
                forecast: row.get(0)?,
                time: row.get(1)?,
                location_id: row.get(2)?,
            });
        }
        Ok(results)
    }
}
