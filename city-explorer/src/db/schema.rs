use libsql::Connection;

use crate::error::Result;

pub async fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS locations (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            search_query TEXT NOT NULL UNIQUE,
            formatted_query TEXT NOT NULL,
            latitude REAL NOT NULL,
            longitude REAL NOT NULL
        );

        -- Dependent tables carry no uniqueness constraint: repeated misses append.
        CREATE TABLE IF NOT EXISTS weathers (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            forecast TEXT NOT NULL,
            time TEXT NOT NULL,
            location_id INTEGER NOT NULL,
            FOREIGN KEY (location_id) REFERENCES locations(id)
        );

        CREATE INDEX IF NOT EXISTS idx_weathers_location_id ON weathers(location_id);

        CREATE TABLE IF NOT EXISTS events (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            link TEXT NOT NULL,
            event_name TEXT NOT NULL,
            event_date TEXT NOT NULL,
            summary TEXT NOT NULL,
            location_id INTEGER NOT NULL,
            FOREIGN KEY (location_id) REFERENCES locations(id)
        );

        CREATE INDEX IF NOT EXISTS idx_events_location_id ON events(location_id);

        CREATE TABLE IF NOT EXISTS movies (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            overview TEXT NOT NULL,
            average_votes REAL NOT NULL,
            total_votes INTEGER NOT NULL,
            image_url TEXT,
            popularity REAL NOT NULL,
            released_on TEXT NOT NULL,
            location_id INTEGER NOT NULL,
            FOREIGN KEY (location_id) REFERENCES locations(id)
        );

        CREATE INDEX IF NOT EXISTS idx_movies_location_id ON movies(location_id);
        "#,
    )
    .await?;

    Ok(())
}
