use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage,
};
use futures::future::{ready, LocalBoxFuture, Ready};
use std::rc::Rc;

use crate::auth::token::verify_token;
use crate::error::AppError;

/// Bearer-token middleware guarding the authenticated part of the API.
///
/// Browse endpoints (catalog, cities, hotel prediction) and the token
/// lifecycle endpoints are public; everything else requires a valid access
/// token in the `Authorization` header. On success the decoded claims are
/// inserted into request extensions for the `AuthenticatedUser` extractor.
pub struct AuthMiddleware {
    access_secret: Rc<String>,
}

impl AuthMiddleware {
    pub fn new(access_secret: impl Into<String>) -> Self {
        Self {
            access_secret: Rc::new(access_secret.into()),
        }
    }
}

/// Paths reachable without an access token. Refresh and logout authenticate
/// with the refresh token carried in their own body, not a bearer header.
fn is_public(path: &str) -> bool {
    path == "/api/auth/login"
        || path == "/api/auth/register"
        || path == "/api/auth/refresh"
        || path == "/api/auth/logout"
        || path == "/api/cities"
        || path.starts_with("/api/tourisms")
        || path.starts_with("/api/hotel")
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service,
            access_secret: Rc::clone(&self.access_secret),
        }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: S,
    access_secret: Rc<String>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if is_public(req.path()) {
            let fut = self.service.call(req);
            return Box::pin(fut);
        }

        let auth_header = req
            .headers()
            .get("Authorization")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "));

        match auth_header {
            Some(token) => match verify_token(token, &self.access_secret) {
                Ok(claims) => {
                    req.extensions_mut().insert(claims);
                    let fut = self.service.call(req);
                    Box::pin(fut)
                }
                Err(app_err) => Box::pin(async move { Err(app_err.into()) }),
            },
            None => {
                let app_err = AppError::Unauthorized("Missing token".into());
                Box::pin(async move { Err(app_err.into()) })
            }
        }
    }
}
