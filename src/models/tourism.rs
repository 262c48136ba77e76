use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of the paginated tourism listing. A place with several images
/// still yields a single row; the catalog surfaces its first image only.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct TourismSummary {
    pub tourism_id: i32,
    pub place_name: String,
    pub rating: Option<f64>,
    pub city: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
}

/// Full detail of a single tourism place.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct TourismDetail {
    pub tourism_id: i32,
    pub place_name: String,
    pub rating: Option<f64>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub image_url: Option<String>,
}

/// A city name row for the unpaginated city listing.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct City {
    pub city: String,
}

/// Query parameters accepted by the tourism listing endpoint.
///
/// `page` arrives as a raw string: anything that is not all digits is
/// treated as page 1 rather than an error.
#[derive(Debug, Deserialize)]
pub struct TourismQuery {
    pub q: Option<String>,
    pub city: Option<String>,
    pub page: Option<String>,
}
