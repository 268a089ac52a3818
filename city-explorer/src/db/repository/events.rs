use libsql::{params, Connection};

use crate::error::Result;
use crate::models::EventEntry;

pub struct EventRepository;

impl EventRepository {
    pub async fn create(conn: &Connection, entry: &EventEntry) -> Result<()> {
        conn.execute(
            r#"
            INSERT INTO events (
                link, event_name, event_date, summary, location_id
            ) VALUES (
                ?1, ?2, ?3, ?4, ?5
            )
            "#,
            params![
                entry.link.as_str(),
                entry.name.as_str(),
                entry.event_date.as_str(),
                entry.summary.as_str(),
                entry.location_id,
            ],
        )
        .await?;
        Ok(())
    }

    pub async fn get_by_location(conn: &Connection, location_id: i64) -> Result<Vec<EventEntry>> {
        let mut rows = conn
            .query(
                r#"
                SELECT link, event_name, event_date, summary, location_id
                FROM events
                WHERE location_id = ?1
                ORDER BY id ASC
                "#,
                params![location_id],
            )
            .await?;

        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(EventEntry {
                link: row.get(0)?,
                name: row.get(1)?,
                event_date: row.get(2)?,
                summary: row.get(3)?,
                location_id: row.get(4)?,
            });
        }
        Ok(results)
    }
}
