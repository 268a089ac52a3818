use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieEntry {
    pub title: String,
    pub overview: String,
    pub average_votes: f64,
    pub total_votes: i64,
    pub image_url: Option<String>,
    pub popularity: f64,
    pub released_on: String,
    pub location_id: i64,
}

impl MovieEntry {
    /// `image_base_url` is the CDN prefix that `poster_path` is appended to.
    pub fn from_raw(raw: &RawMovie, image_base_url: &str, location_id: i64) -> Self {
        Self {
            title: raw.title.clone(),
            overview: raw.overview.clone(),
            average_votes: raw.vote_average,
            total_votes: raw.vote_count,
            image_url: raw
                .poster_path
                .as_deref()
                .map(|path| poster_url(image_base_url, path)),
            popularity: raw.popularity,
            released_on: raw.release_date.clone(),
            location_id,
        }
    }
}

fn poster_url(image_base_url: &str, poster_path: &str) -> String {
    format!(
        "{}/{}",
        image_base_url.trim_end_matches('/'),
        poster_path.trim_start_matches('/')
    )
}

#[derive(Debug, Clone, Deserialize)]
pub struct MovieSearchResponse {
    pub results: Vec<RawMovie>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawMovie {
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: i64,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: String,
}
