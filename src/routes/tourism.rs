use crate::{
    catalog::{self, TourismFilter},
    config::Config,
    error::AppError,
    hotel,
    models::TourismQuery,
    response,
};
use actix_web::{get, post, web, HttpResponse, Responder};
use sqlx::PgPool;

/// Paginated tourism listing and search.
///
/// Supports three query parameters: `q` (case-insensitive substring match on
/// the place name), `city` (exact city name), and `page` (all-digit, defaults
/// to 1). `q` and `city` combine as an AND. Results are ordered by place name
/// descending, ten per page.
///
/// ## Responses:
/// - `200 OK`: page bookkeeping plus the matching items.
/// - `404 Not Found`: no place/city matches the filter, or the requested
///   page lies beyond the last one (an empty catalog has zero pages, so even
///   page 1 is then beyond the last).
/// - `500 Internal Server Error`: store failure.
#[get("")]
pub async fn list_tourisms(
    pool: web::Data<PgPool>,
    params: web::Query<TourismQuery>,
) -> Result<HttpResponse, AppError> {
    let params = params.into_inner();
    let filter = TourismFilter::from_params(params.q, params.city);
    let page = catalog::parse_page(params.page.as_deref());

    let total = catalog::count_tourisms(&pool, &filter).await?;
    let total_page = catalog::total_pages(total);

    if let Some(message) = catalog::zero_match_error(&filter, total) {
        return Err(AppError::NotFound(message.into()));
    }

    if !catalog::page_in_range(page, total_page) {
        return Err(AppError::NotFound("The requested page does not exist".into()));
    }

    let tourisms = catalog::fetch_tourism_page(&pool, &filter, page).await?;

    Ok(response::paged(page, total_page, total, tourisms))
}

/// Single tourism place detail, including description and address.
#[get("/{tourism_id}")]
pub async fn tourism_detail(
    pool: web::Data<PgPool>,
    tourism_id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let detail = catalog::fetch_tourism_detail(&pool, tourism_id.into_inner()).await?;

    match detail {
        Some(detail) => Ok(response::ok(detail)),
        None => Err(AppError::NotFound("Tourism not found".into())),
    }
}

/// All city names in the catalog, unpaginated.
#[get("/cities")]
pub async fn list_cities(pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    let cities = catalog::fetch_cities(&pool).await?;
    Ok(response::ok(cities))
}

/// Kicks off the hotel-prediction call against the external ML service.
///
/// The request runs as a background task; its result only shows up in the
/// log. The caller gets an immediate 202 regardless.
#[post("/hotel/predict")]
pub async fn predicted_hotel(
    config: web::Data<Config>,
    client: web::Data<reqwest::Client>,
) -> Result<impl Responder, AppError> {
    match &config.ml_service_url {
        Some(url) => hotel::spawn_prediction(client.get_ref().clone(), url.clone()),
        None => log::warn!("URL_MACHINELEARNING not configured, skipping hotel prediction"),
    }

    Ok(response::with_status(
        actix_web::http::StatusCode::ACCEPTED,
        response::Message {
            message: "Prediction requested".to_string(),
        },
    ))
}
