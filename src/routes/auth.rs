use crate::{
    auth::{
        hash_password, issue_access_token, issue_refresh_token, token::Identity, verify_password,
        verify_token, AccessTokenResponse, AuthenticatedUser, LoginRequest, RefreshRequest,
        RegisterRequest, TokenPair,
    },
    config::Config,
    error::AppError,
    models::{User, UserRecord},
    response,
};
use actix_web::{get, post, web, HttpResponse, Responder};
use sqlx::PgPool;
use validator::Validate;

/// Register a new user
///
/// Validates the payload, rejects already-registered emails, and stores the
/// user with a salted password hash. The new user still has to log in.
#[post("/register")]
pub async fn register(
    pool: web::Data<PgPool>,
    register_data: web::Json<RegisterRequest>,
) -> Result<impl Responder, AppError> {
    // Validate input before touching the store
    register_data.validate()?;

    // Check if email already exists
    let existing_user: Option<(i32,)> =
        sqlx::query_as("SELECT user_id FROM users WHERE email = $1")
            .bind(&register_data.email)
            .fetch_optional(&**pool)
            .await?;

    if existing_user.is_some() {
        return Err(AppError::Conflict("Email already exists".into()));
    }

    // bcrypt is deliberately slow; keep it off the async executor
    let password = register_data.password.clone();
    let password_hash = web::block(move || hash_password(&password))
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))??;

    // Two concurrent registrations can both pass the check above; the unique
    // constraint on email decides, and its violation maps to 409.
    sqlx::query("INSERT INTO users (name, email, password) VALUES ($1, $2, $3)")
        .bind(&register_data.name)
        .bind(&register_data.email)
        .bind(&password_hash)
        .execute(&**pool)
        .await?;

    Ok(response::ok_message("Register Success. Please Log in"))
}

/// Login user
///
/// Verifies the credentials and answers with an access/refresh token pair.
/// The refresh token is persisted so logout can revoke it.
#[post("/login")]
pub async fn login(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    let user: Option<UserRecord> = sqlx::query_as(
        "SELECT user_id, name, email, password, created_at FROM users WHERE email = $1",
    )
    .bind(&login_data.email)
    .fetch_optional(&**pool)
    .await?;

    // Unknown email and wrong password get the same answer
    let user = user.ok_or_else(|| AppError::Unauthorized("Incorrect email or password".into()))?;

    let password = login_data.password.clone();
    let stored_hash = user.password.clone();
    let valid = web::block(move || verify_password(&password, &stored_hash))
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))??;

    if !valid {
        return Err(AppError::Unauthorized("Incorrect email or password".into()));
    }

    let identity = Identity {
        user_id: user.user_id,
        email: user.email,
        name: user.name,
        created_at: user.created_at,
    };

    let access_token = issue_access_token(&identity, &config.access_token_secret)?;
    let issued_refresh = issue_refresh_token(&identity, &config.refresh_token_secret)?;

    sqlx::query(
        "INSERT INTO tokens (user_id, token, created_at, expires_at) VALUES ($1, $2, $3, $4)",
    )
    .bind(identity.user_id)
    .bind(&issued_refresh.token)
    .bind(issued_refresh.issued_at)
    .bind(issued_refresh.expires_at)
    .execute(&**pool)
    .await?;

    Ok(response::ok(TokenPair {
        access_token,
        refresh_token: issued_refresh.token,
    }))
}

/// Exchange a refresh token for a new access token
///
/// The refresh token must carry a valid signature and still exist in the
/// session store; a token revoked by logout is refused even before its
/// expiry.
#[post("/refresh")]
pub async fn refresh(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    refresh_data: web::Json<RefreshRequest>,
) -> Result<impl Responder, AppError> {
    let claims = verify_token(&refresh_data.refresh_token, &config.refresh_token_secret)?;

    let session: Option<(i32,)> = sqlx::query_as("SELECT user_id FROM tokens WHERE token = $1")
        .bind(&refresh_data.refresh_token)
        .fetch_optional(&**pool)
        .await?;

    if session.is_none() {
        return Err(AppError::Unauthorized("Invalid refresh token".into()));
    }

    let access_token = issue_access_token(&claims.identity, &config.access_token_secret)?;

    Ok(response::ok(AccessTokenResponse { access_token }))
}

/// Logout
///
/// Deletes the session row holding the presented refresh token. An unknown
/// token is reported as 404 rather than silently ignored.
#[post("/logout")]
pub async fn logout(
    pool: web::Data<PgPool>,
    refresh_data: web::Json<RefreshRequest>,
) -> Result<impl Responder, AppError> {
    let result = sqlx::query("DELETE FROM tokens WHERE token = $1")
        .bind(&refresh_data.refresh_token)
        .execute(&**pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Session not found".into()));
    }

    Ok(response::ok_message("Sign out success"))
}

/// Fetch the authenticated user's own record
#[get("/profile")]
pub async fn profile(
    pool: web::Data<PgPool>,
    principal: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let user: Option<User> =
        sqlx::query_as("SELECT user_id, name, email FROM users WHERE user_id = $1")
            .bind(principal.user_id)
            .fetch_optional(&**pool)
            .await?;

    match user {
        Some(user) => Ok(response::ok(user)),
        None => Err(AppError::NotFound("User not found".into())),
    }
}
