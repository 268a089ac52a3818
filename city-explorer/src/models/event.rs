use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventEntry {
    pub link: String,
    pub name: String,
    pub event_date: String,
    pub summary: String,
    pub location_id: i64,
}

impl EventEntry {
    pub fn from_raw(raw: &RawEvent, location_id: i64) -> Self {
        Self {
            link: raw.url.clone(),
            name: raw.name.text.clone().unwrap_or_default(),
            event_date: raw.start.local.clone(),
            summary: raw
                .description
                .as_ref()
                .and_then(|d| d.text.clone())
                .unwrap_or_default(),
            location_id,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventSearchResponse {
    pub events: Vec<RawEvent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawEvent {
    pub url: String,
    pub name: RawText,
    pub start: RawEventTime,
    #[serde(default)]
    pub description: Option<RawText>,
}

/// Eventbrite wraps free text as `{ "text": ..., "html": ... }`; `text` may be null.
#[derive(Debug, Clone, Deserialize)]
pub struct RawText {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawEventTime {
    pub local: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_raw_maps_nested_fields() {
        let raw: RawEvent = serde_json::from_value(json!({
            "url": "https://www.eventbrite.com/e/1",
            "name": { "text": "Jazz Night", "html": "<b>Jazz Night</b>" },
            "start": { "local": "2021-01-02T19:00:00", "utc": "2021-01-03T03:00:00Z" },
            "description": { "text": "Live music", "html": "<p>Live music</p>" }
        }))
        .unwrap();

        let entry = EventEntry::from_raw(&raw, 9);

        assert_eq!(entry.link, "https://www.eventbrite.com/e/1");
        assert_eq!(entry.name, "Jazz Night");
        assert_eq!(entry.event_date, "2021-01-02T19:00:00");
        assert_eq!(entry.summary, "Live music");
        assert_eq!(entry.location_id, 9);
    }

    #[test]
    fn test_null_description_normalizes_to_empty() {
        let raw: RawEvent = serde_json::from_value(json!({
            "url": "https://www.eventbrite.com/e/2",
            "name": { "text": "Meetup" },
            "start": { "local": "2021-02-01T18:00:00" },
            "description": { "text": null }
        }))
        .unwrap();

        assert_eq!(EventEntry::from_raw(&raw, 1).summary, "");
    }

    #[test]
    fn test_missing_start_is_rejected() {
        let raw = serde_json::from_value::<RawEvent>(json!({
            "url": "https://www.eventbrite.com/e/3",
            "name": { "text": "Broken" }
        }));
        assert!(raw.is_err());
    }
}
