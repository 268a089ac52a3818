use libsql::{params, Connection};

use crate::error::Result;
use crate::models::MovieEntry;

pub struct MovieRepository;

impl MovieRepository {
    pub async fn create(conn: &Connection, entry: &MovieEntry) -> Result<()> {
        conn.execute(
            r#"
            INSERT INTO movies (
                title, overview, average_votes, total_votes, image_url,
                popularity, released_on, location_id
            ) VALUES (
                ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8
            )
            "#,
            params![
                entry.title.as_str(),
                entry.overview.as_str(),
                entry.average_votes,
                entry.total_votes,
                entry.image_url.as_deref(),
                entry.popularity,
                entry.released_on.as_str(),
                entry.location_id,
            ],
        )
        .await?;
        Ok(())
    }

    pub async fn get_by_location(conn: &Connection, location_id: i64) -> Result<Vec<MovieEntry>> {
        let mut rows = conn
            .query(
                r#"
                SELECT title, overview, average_votes, total_votes, image_url,
                       popularity, released_on, location_id
                FROM movies
                WHERE location_id = ?1
                ORDER BY id ASC
                "#,
                params![location_id],
            )
            .await?;

        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(Self::row_to_movie(&row)?);
        }
        Ok(results)
    }

    fn row_to_movie(row: &libsql::Row) -> Result<MovieEntry> {
        Ok(MovieEntry {
            title: row.get(0)?,
            overview: row.get(1)?,
            average_votes: row.get(2)?,
            total_votes: row.get(3)?,
            image_url: row.get(4)?,
            popularity: row.get(5)?,
            released_on: row.get(6)?,
            location_id: row.get(7)?,
        })
    }
}
