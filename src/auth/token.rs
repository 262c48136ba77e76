use crate::error::AppError;
use chrono::{DateTime, Duration, TimeZone, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Access tokens live for one hour; a leaked bearer token has a short
/// exposure window.
const ACCESS_TOKEN_TTL_SECS: i64 = 60 * 60;
/// Refresh tokens live for 365 days and are persisted server-side so logout
/// can revoke them.
const REFRESH_TOKEN_TTL_SECS: i64 = 365 * 24 * 60 * 60;

/// The user identity carried inside every token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Identity {
    pub user_id: i32,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Claims encoded within a JWT: the identity plus the standard timing fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    #[serde(flatten)]
    pub identity: Identity,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

/// A freshly minted refresh token together with the timestamps derived from
/// its own `iat`/`exp` claims, ready for the session store.
#[derive(Debug)]
pub struct IssuedRefreshToken {
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

fn sign(claims: &Claims, secret: &str) -> Result<String, AppError> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::InternalServerError(format!("Failed to sign token: {}", e)))
}

/// Builds and signs a token for `identity` expiring `ttl` from now.
/// Public so tests can force expiry; production code goes through the
/// `issue_access_token` / `issue_refresh_token` wrappers.
pub fn issue_token(
    identity: &Identity,
    secret: &str,
    ttl: Duration,
) -> Result<(String, Claims), AppError> {
    let now = Utc::now();
    let claims = Claims {
        identity: identity.clone(),
        iat: now.timestamp(),
        exp: (now + ttl).timestamp(),
    };
    let token = sign(&claims, secret)?;
    Ok((token, claims))
}

/// Signs a short-lived (1 hour) access token for `identity`.
pub fn issue_access_token(identity: &Identity, secret: &str) -> Result<String, AppError> {
    let (token, _) = issue_token(identity, secret, Duration::seconds(ACCESS_TOKEN_TTL_SECS))?;
    Ok(token)
}

/// Signs a long-lived (365 days) refresh token for `identity` and reports
/// the issue/expiry instants the session store should persist.
pub fn issue_refresh_token(
    identity: &Identity,
    secret: &str,
) -> Result<IssuedRefreshToken, AppError> {
    let (token, claims) = issue_token(identity, secret, Duration::seconds(REFRESH_TOKEN_TTL_SECS))?;
    Ok(IssuedRefreshToken {
        token,
        issued_at: timestamp_to_datetime(claims.iat),
        expires_at: timestamp_to_datetime(claims.exp),
    })
}

/// Verifies a token's signature and expiry against `secret` and decodes its
/// claims. Fails with `Unauthorized` on any invalid or expired token (via
/// the `From<jsonwebtoken::errors::Error>` conversion on `AppError`).
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, AppError> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(data.claims)
}

fn timestamp_to_datetime(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).single().unwrap_or_else(Utc::now)
}
