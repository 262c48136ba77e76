//!
//! # Hotel Prediction Client
//!
//! Calls the external machine-learning service that predicts hotel ratings
//! around a fixed coordinate. The call is fire-and-forget from the caller's
//! point of view, but it runs as an explicit background task whose outcome
//! is always logged, success or failure.

use reqwest::Client;

/// Coordinate payload expected by the prediction service.
/// "longtitude" is the upstream service's field spelling.
const PREDICTION_FORM: [(&str, &str); 2] =
    [("longtitude", "106.809331"), ("latitude", "-6.216947")];

/// Spawns the prediction request against `service_url` and returns
/// immediately. The response body (or the failure) lands in the log.
pub fn spawn_prediction(client: Client, service_url: String) {
    tokio::spawn(async move {
        match request_prediction(&client, &service_url).await {
            Ok(body) => log::info!("hotel prediction response: {}", body),
            Err(e) => log::warn!("hotel prediction request failed: {}", e),
        }
    });
}

async fn request_prediction(client: &Client, service_url: &str) -> Result<String, reqwest::Error> {
    let response = client
        .post(service_url)
        .form(&PREDICTION_FORM)
        .send()
        .await?
        .error_for_status()?;
    response.text().await
}
