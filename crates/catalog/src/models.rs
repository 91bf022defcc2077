use serde::{Deserialize, Serialize};

use crate::pagination::total_pages;

/// Number of genre tags a card shows.
pub const DISPLAYED_GENRES: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    pub year: i32,
    /// 0.0 ~ 10.0
    pub rating: f32,
    #[serde(rename = "medium_cover_image", default)]
    pub cover_image: String,
    #[serde(default)]
    pub genres: Vec<String>,
    /// Runtime in minutes
    #[serde(default)]
    pub runtime: Option<u32>,
}

impl Movie {
    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.rating)
    }

    /// The first few genres, in upstream order
    pub fn displayed_genres(&self) -> &[String] {
        let end = self.genres.len().min(DISPLAYED_GENRES);
        &self.genres[..end]
    }

    /// `None` when the upstream runtime is missing or zero
    pub fn runtime_minutes(&self) -> Option<u32> {
        self.runtime.filter(|minutes| *minutes > 0)
    }

    pub fn has_cover(&self) -> bool {
        !self.cover_image.trim().is_empty()
    }
}

/// Envelope returned by the `list_movies` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ListMoviesResponse {
    pub status: String,
    #[serde(default)]
    pub status_message: String,
    #[serde(default)]
    pub data: Option<ListMoviesData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListMoviesData {
    pub movie_count: u64,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub page_number: u32,
    // The API omits the field entirely when a page is empty
    #[serde(default)]
    pub movies: Option<Vec<Movie>>,
}

/// One page of listing results.
#[derive(Debug, Clone, PartialEq)]
pub struct MoviePage {
    pub movies: Vec<Movie>,
    pub total_count: u64,
    pub page: u32,
    /// The page size that was requested
    pub limit: u32,
}

impl MoviePage {
    pub fn total_pages(&self) -> u32 {
        total_pages(self.total_count, self.limit)
    }
}
