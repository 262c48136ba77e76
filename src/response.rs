//!
//! # Response Envelope
//!
//! Every endpoint answers with the same JSON envelope:
//! `{code, status, data?, errors?}`, where `code` is the HTTP status as a
//! string and `status` its standard reason phrase. Paginated listings extend
//! the envelope with page bookkeeping fields.

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;

/// The `errors` object carried by failure envelopes.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

/// The uniform success envelope.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub code: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<ErrorBody>,
}

/// A one-field payload for endpoints that only report an outcome message.
#[derive(Debug, Serialize)]
pub struct Message {
    pub message: String,
}

/// Envelope for the paginated tourism listing. Page bookkeeping sits next to
/// `code`/`status` rather than inside `data`, matching the public contract.
#[derive(Debug, Serialize)]
pub struct PagedEnvelope<T: Serialize> {
    pub code: String,
    pub status: String,
    pub current_page: i64,
    pub total_page: i64,
    pub total: i64,
    pub size: usize,
    pub data: Vec<T>,
}

fn code_and_status(status: StatusCode) -> (String, String) {
    (
        status.as_u16().to_string(),
        status.canonical_reason().unwrap_or("Unknown").to_string(),
    )
}

/// 200 OK with a data payload.
pub fn ok<T: Serialize>(data: T) -> HttpResponse {
    with_status(StatusCode::OK, data)
}

/// 200 OK with only an outcome message.
pub fn ok_message(message: &str) -> HttpResponse {
    ok(Message {
        message: message.to_string(),
    })
}

/// An arbitrary success status with a data payload.
pub fn with_status<T: Serialize>(status: StatusCode, data: T) -> HttpResponse {
    let (code, reason) = code_and_status(status);
    HttpResponse::build(status).json(Envelope {
        code,
        status: reason,
        data: Some(data),
        errors: None,
    })
}

/// A failure envelope for the given status and message.
pub fn error(status: StatusCode, message: &str) -> HttpResponse {
    let (code, reason) = code_and_status(status);
    HttpResponse::build(status).json(Envelope::<()> {
        code,
        status: reason,
        data: None,
        errors: Some(ErrorBody {
            message: message.to_string(),
        }),
    })
}

/// 200 OK listing page.
pub fn paged<T: Serialize>(
    current_page: i64,
    total_page: i64,
    total: i64,
    data: Vec<T>,
) -> HttpResponse {
    let (code, reason) = code_and_status(StatusCode::OK);
    HttpResponse::Ok().json(PagedEnvelope {
        code,
        status: reason,
        current_page,
        total_page,
        total,
        size: data.len(),
        data,
    })
}
