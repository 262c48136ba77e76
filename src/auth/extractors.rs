use actix_web::dev::Payload;
use actix_web::{Error as ActixError, FromRequest, HttpMessage, HttpRequest};
use std::future::{ready, Ready};

use crate::auth::token::Claims;
use crate::error::AppError;

/// The authenticated principal for the current request.
///
/// `AuthMiddleware` verifies the access token and stores the decoded claims
/// in request extensions; this extractor surfaces them to handlers as an
/// explicit value instead of fields smuggled onto the request object.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: i32,
    pub email: String,
    pub name: String,
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match req.extensions().get::<Claims>() {
            Some(claims) => ready(Ok(AuthenticatedUser {
                user_id: claims.identity.user_id,
                email: claims.identity.email.clone(),
                name: claims.identity.name.clone(),
            })),
            None => {
                // Only reachable when a handler using this extractor is
                // mounted outside AuthMiddleware; refuse rather than guess.
                let err = AppError::Unauthorized("Missing token".to_string());
                ready(Err(err.into()))
            }
        }
    }
}
