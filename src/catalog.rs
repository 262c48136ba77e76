//!
//! # Tourism Catalog
//!
//! Read-only access to tourism places, their cities, and images, including
//! the paginated listing behind the browse/search endpoint.
//!
//! The listing supports two optional filters: `city` (exact, case-sensitive
//! match on the joined city name) and `query` (case-insensitive substring
//! match on the place name). Both may be combined, in which case they apply
//! as an AND. Count and fetch share a single parametrized WHERE-clause
//! builder so the filter semantics cannot drift apart.
//!
//! A place can own several images; listings and detail surface the first
//! one via a scalar subquery, so the join never fans a place out into
//! duplicate rows.

use sqlx::PgPool;

use crate::error::AppError;
use crate::models::{City, TourismDetail, TourismSummary};

/// Fixed page size agreed with the front-end.
pub const PAGE_SIZE: i64 = 10;

/// Optional listing filters. An empty or absent parameter means "no filter".
#[derive(Debug, Default)]
pub struct TourismFilter {
    pub query: Option<String>,
    pub city: Option<String>,
}

impl TourismFilter {
    /// Builds a filter from raw query parameters, treating empty strings as
    /// absent.
    pub fn from_params(query: Option<String>, city: Option<String>) -> Self {
        let non_empty = |s: Option<String>| s.filter(|v| !v.is_empty());
        Self {
            query: non_empty(query),
            city: non_empty(city),
        }
    }

    pub fn is_unfiltered(&self) -> bool {
        self.query.is_none() && self.city.is_none()
    }

    /// The WHERE clause for this filter (possibly empty) and its bind
    /// values, with placeholders numbered from `$1`.
    fn where_clause(&self) -> (String, Vec<String>) {
        let mut conditions: Vec<String> = Vec::new();
        let mut binds: Vec<String> = Vec::new();

        if let Some(city) = &self.city {
            conditions.push(format!("c.city_name = ${}", binds.len() + 1));
            binds.push(city.clone());
        }
        if let Some(query) = &self.query {
            conditions.push(format!("t.place_name ILIKE ${}", binds.len() + 1));
            binds.push(format!("%{}%", query));
        }

        if conditions.is_empty() {
            (String::new(), binds)
        } else {
            (format!(" WHERE {}", conditions.join(" AND ")), binds)
        }
    }
}

/// Parses the `page` query parameter. Only all-digit input is honored;
/// anything else (absent, empty, mixed content) falls back to page 1, as
/// does an explicit "0". An all-digit value too large for `i64` saturates,
/// so it still lands past the last page instead of turning into page 1.
pub fn parse_page(raw: Option<&str>) -> i64 {
    match raw.filter(|s| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())) {
        Some(digits) => digits.parse::<i64>().unwrap_or(i64::MAX).max(1),
        None => 1,
    }
}

/// Total pages needed for `total` rows at the fixed page size.
pub fn total_pages(total: i64) -> i64 {
    (total + PAGE_SIZE - 1) / PAGE_SIZE
}

/// The not-found message owed to a filtered listing that matched nothing,
/// or `None` when rows matched or no filter was applied. A missing search
/// term means the city filter alone came up empty.
pub fn zero_match_error(filter: &TourismFilter, total: i64) -> Option<&'static str> {
    if total > 0 || filter.is_unfiltered() {
        return None;
    }
    if filter.query.is_some() {
        Some("Places not found in the database")
    } else {
        Some("City not found in the database")
    }
}

/// Whether `page` points at an existing page. An empty catalog has zero
/// pages, so even page 1 is out of range then.
pub fn page_in_range(page: i64, total_page: i64) -> bool {
    page <= total_page
}

const SUMMARY_COLUMNS: &str = "t.tourism_id, t.place_name, t.rating, c.city_name AS city, \
     t.category, \
     (SELECT i.image_url FROM tourism_images i \
      WHERE i.tourism_id = t.tourism_id ORDER BY i.image_id LIMIT 1) AS image_url";

const FROM_JOINED: &str = "FROM tourisms t LEFT JOIN cities c ON c.city_id = t.city_id";

/// Counts the places matching `filter`.
pub async fn count_tourisms(pool: &PgPool, filter: &TourismFilter) -> Result<i64, AppError> {
    let (where_sql, binds) = filter.where_clause();
    let sql = format!("SELECT COUNT(*) {}{}", FROM_JOINED, where_sql);

    let mut query = sqlx::query_scalar::<_, i64>(&sql);
    for bind in binds {
        query = query.bind(bind);
    }
    Ok(query.fetch_one(pool).await?)
}

/// Fetches one page of places matching `filter`, ordered by place name
/// descending.
pub async fn fetch_tourism_page(
    pool: &PgPool,
    filter: &TourismFilter,
    page: i64,
) -> Result<Vec<TourismSummary>, AppError> {
    let (where_sql, binds) = filter.where_clause();
    let limit_param = binds.len() + 1;
    let offset_param = binds.len() + 2;
    let sql = format!(
        "SELECT {} {}{} ORDER BY t.place_name DESC LIMIT ${} OFFSET ${}",
        SUMMARY_COLUMNS, FROM_JOINED, where_sql, limit_param, offset_param
    );

    let mut query = sqlx::query_as::<_, TourismSummary>(&sql);
    for bind in binds {
        query = query.bind(bind);
    }
    query = query.bind(PAGE_SIZE).bind((page - 1) * PAGE_SIZE);

    Ok(query.fetch_all(pool).await?)
}

/// Looks up the full detail of one place, or `None` if the id is unknown.
pub async fn fetch_tourism_detail(
    pool: &PgPool,
    tourism_id: i32,
) -> Result<Option<TourismDetail>, AppError> {
    let sql = format!(
        "SELECT t.tourism_id, t.place_name, t.rating, t.category, t.description, \
         t.address, c.city_name AS city, \
         (SELECT i.image_url FROM tourism_images i \
          WHERE i.tourism_id = t.tourism_id ORDER BY i.image_id LIMIT 1) AS image_url \
         {} WHERE t.tourism_id = $1",
        FROM_JOINED
    );

    Ok(sqlx::query_as::<_, TourismDetail>(&sql)
        .bind(tourism_id)
        .fetch_optional(pool)
        .await?)
}

/// Lists every city name in the catalog.
pub async fn fetch_cities(pool: &PgPool) -> Result<Vec<City>, AppError> {
    Ok(
        sqlx::query_as::<_, City>("SELECT city_name AS city FROM cities ORDER BY city_name")
            .fetch_all(pool)
            .await?,
    )
}
