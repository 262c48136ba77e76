// Catalog and favorites flows against a provisioned database
// (DATABASE_URL). Ignored by default; run with: cargo test -- --ignored

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use serde_json::{json, Value};
use sqlx::PgPool;

use tenan_api::auth::AuthMiddleware;
use tenan_api::config::Config;
use tenan_api::routes;

const SEED_CITY: &str = "Kota Uji";
const SEED_PREFIX: &str = "Wisata Uji";

async fn setup() -> (PgPool, Config) {
    dotenv::dotenv().ok();
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for tests");
    let pool = PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to test DB");
    let config = Config {
        database_url: database_url.clone(),
        server_port: 8080,
        server_host: "127.0.0.1".to_string(),
        access_token_secret: "test-access-secret".to_string(),
        refresh_token_secret: "test-refresh-secret".to_string(),
        ml_service_url: None,
    };
    (pool, config)
}

async fn seed_catalog(pool: &PgPool) -> i32 {
    teardown_catalog(pool).await;

    let (city_id,): (i32,) =
        sqlx::query_as("INSERT INTO cities (city_name) VALUES ($1) RETURNING city_id")
            .bind(SEED_CITY)
            .fetch_one(pool)
            .await
            .unwrap();

    let mut first_id = 0;
    for n in 1..=25 {
        let (tourism_id,): (i32,) = sqlx::query_as(
            "INSERT INTO tourisms (place_name, rating, category, description, address, city_id) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING tourism_id",
        )
        .bind(format!("{} {:02}", SEED_PREFIX, n))
        .bind(4.2_f64)
        .bind("Alam")
        .bind("Tempat uji coba")
        .bind("Jl. Uji No. 1")
        .bind(city_id)
        .fetch_one(pool)
        .await
        .unwrap();
        if n == 1 {
            first_id = tourism_id;
        }
        // Two images per place; listings must still show one row per place.
        for image in ["a.jpg", "b.jpg"] {
            sqlx::query("INSERT INTO tourism_images (tourism_id, image_url) VALUES ($1, $2)")
                .bind(tourism_id)
                .bind(format!("https://img.example.com/{}/{}", tourism_id, image))
                .execute(pool)
                .await
                .unwrap();
        }
    }
    first_id
}

async fn teardown_catalog(pool: &PgPool) {
    let _ = sqlx::query(
        "DELETE FROM tourism_images WHERE tourism_id IN \
         (SELECT tourism_id FROM tourisms WHERE place_name LIKE $1)",
    )
    .bind(format!("{}%", SEED_PREFIX))
    .execute(pool)
    .await;
    let _ = sqlx::query(
        "DELETE FROM tourism_favorites WHERE tourism_id IN \
         (SELECT tourism_id FROM tourisms WHERE place_name LIKE $1)",
    )
    .bind(format!("{}%", SEED_PREFIX))
    .execute(pool)
    .await;
    let _ = sqlx::query("DELETE FROM tourisms WHERE place_name LIKE $1")
        .bind(format!("{}%", SEED_PREFIX))
        .execute(pool)
        .await;
    let _ = sqlx::query("DELETE FROM cities WHERE city_name = $1")
        .bind(SEED_CITY)
        .execute(pool)
        .await;
}

macro_rules! catalog_app {
    ($pool:expr, $config:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($pool.clone()))
                .app_data(web::Data::new($config.clone()))
                .app_data(web::Data::new(reqwest::Client::new()))
                .service(
                    web::scope("/api")
                        .wrap(AuthMiddleware::new($config.access_token_secret.clone()))
                        .configure(routes::config),
                ),
        )
        .await
    };
}

#[ignore]
#[test_log::test(actix_rt::test)]
async fn test_pagination_over_seeded_catalog() {
    let (pool, config) = setup().await;
    seed_catalog(&pool).await;
    let app = catalog_app!(pool, config);

    // The seeded 25 places are matched via the q filter so a pre-existing
    // catalog does not disturb the counts.
    let req = test::TestRequest::get()
        .uri("/api/tourisms?q=Wisata%20Uji")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["current_page"], 1);
    assert_eq!(body["total_page"], 3);
    assert_eq!(body["total"], 25);
    assert_eq!(body["size"], 10);
    assert_eq!(body["data"].as_array().unwrap().len(), 10);
    // Descending order by place name: "Wisata Uji 25" comes first
    assert_eq!(body["data"][0]["place_name"], "Wisata Uji 25");
    // One row per place despite two stored images
    assert!(body["data"][0]["image_url"].as_str().unwrap().ends_with("a.jpg"));

    let req = test::TestRequest::get()
        .uri("/api/tourisms?q=Wisata%20Uji&page=3")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["size"], 5);

    // Page past the end
    let req = test::TestRequest::get()
        .uri("/api/tourisms?q=Wisata%20Uji&page=4")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["errors"]["message"], "The requested page does not exist");

    // Non-numeric page falls back to page 1
    let req = test::TestRequest::get()
        .uri("/api/tourisms?q=Wisata%20Uji&page=abc")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["current_page"], 1);

    teardown_catalog(&pool).await;
}

#[ignore]
#[test_log::test(actix_rt::test)]
async fn test_city_filter_and_not_found_messages() {
    let (pool, config) = setup().await;
    seed_catalog(&pool).await;
    let app = catalog_app!(pool, config);

    // Exact city match
    let req = test::TestRequest::get()
        .uri("/api/tourisms?city=Kota%20Uji")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["total"], 25);
    assert_eq!(body["data"][0]["city"], SEED_CITY);

    // City matching is case-sensitive and exact
    let req = test::TestRequest::get()
        .uri("/api/tourisms?city=kota%20uji")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["errors"]["message"], "City not found in the database");

    // Search with no hits
    let req = test::TestRequest::get()
        .uri("/api/tourisms?q=tidak-ada-tempat-ini")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["errors"]["message"], "Places not found in the database");

    // Combined q + city applies both filters as an AND
    let req = test::TestRequest::get()
        .uri("/api/tourisms?q=Wisata%20Uji%2001&city=Kota%20Uji")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["total"], 1);

    teardown_catalog(&pool).await;
}

#[ignore]
#[test_log::test(actix_rt::test)]
async fn test_detail_and_cities() {
    let (pool, config) = setup().await;
    let first_id = seed_catalog(&pool).await;
    let app = catalog_app!(pool, config);

    let req = test::TestRequest::get()
        .uri(&format!("/api/tourisms/{}", first_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["place_name"], "Wisata Uji 01");
    assert_eq!(body["data"]["description"], "Tempat uji coba");
    assert_eq!(body["data"]["address"], "Jl. Uji No. 1");
    assert_eq!(body["data"]["city"], SEED_CITY);

    // Unknown id
    let req = test::TestRequest::get()
        .uri("/api/tourisms/999999999")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // City listing contains the seeded city
    let req = test::TestRequest::get().uri("/api/cities").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let cities = body["data"].as_array().unwrap();
    assert!(cities.iter().any(|c| c["city"] == SEED_CITY));

    teardown_catalog(&pool).await;
}

#[ignore]
#[test_log::test(actix_rt::test)]
async fn test_favorites_flow() {
    let (pool, config) = setup().await;
    let first_id = seed_catalog(&pool).await;
    let app = catalog_app!(pool, config);

    // Register and log in a user for the favorites endpoints
    let email = "favorites@example.com";
    let _ = sqlx::query(
        "DELETE FROM tourism_favorites WHERE user_id IN \
         (SELECT user_id FROM users WHERE email = $1)",
    )
    .bind(email)
    .execute(&pool)
    .await;
    let _ = sqlx::query(
        "DELETE FROM tokens WHERE user_id IN (SELECT user_id FROM users WHERE email = $1)",
    )
    .bind(email)
    .execute(&pool)
    .await;
    let _ = sqlx::query("DELETE FROM users WHERE email = $1")
        .bind(email)
        .execute(&pool)
        .await;

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({
            "name": "Favorites User",
            "email": email,
            "password": "rahasia123"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "email": email, "password": "rahasia123" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let access_token = body["data"]["access_token"].as_str().unwrap().to_string();

    // Favorites require a token
    let req = test::TestRequest::post()
        .uri("/api/favorites")
        .set_json(json!({ "tourism_id": first_id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // Add
    let req = test::TestRequest::post()
        .uri("/api/favorites")
        .insert_header(("Authorization", format!("Bearer {}", access_token)))
        .set_json(json!({ "tourism_id": first_id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // Remove
    let req = test::TestRequest::delete()
        .uri(&format!("/api/favorites/{}", first_id))
        .insert_header(("Authorization", format!("Bearer {}", access_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // Removing again finds nothing
    let req = test::TestRequest::delete()
        .uri(&format!("/api/favorites/{}", first_id))
        .insert_header(("Authorization", format!("Bearer {}", access_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["errors"]["message"], "Favorite not found");

    teardown_catalog(&pool).await;
}
