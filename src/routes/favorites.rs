use crate::{auth::AuthenticatedUser, error::AppError, models::FavoriteInput, response};
use actix_web::{delete, post, web, HttpResponse};
use sqlx::PgPool;

/// Marks a tourism place as a favorite of the authenticated user.
/// The place id is stored as-is; no existence check is made against the
/// catalog.
#[post("")]
pub async fn add_favorite(
    pool: web::Data<PgPool>,
    principal: AuthenticatedUser,
    favorite: web::Json<FavoriteInput>,
) -> Result<HttpResponse, AppError> {
    sqlx::query("INSERT INTO tourism_favorites (user_id, tourism_id) VALUES ($1, $2)")
        .bind(principal.user_id)
        .bind(favorite.tourism_id)
        .execute(&**pool)
        .await?;

    Ok(response::ok_message("Added to favorites"))
}

/// Removes a place from the authenticated user's favorites. Deletion is
/// scoped to the (user, place) pair, so one user's favorites are never
/// reachable from another's session.
#[delete("/{tourism_id}")]
pub async fn remove_favorite(
    pool: web::Data<PgPool>,
    principal: AuthenticatedUser,
    tourism_id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let result =
        sqlx::query("DELETE FROM tourism_favorites WHERE user_id = $1 AND tourism_id = $2")
            .bind(principal.user_id)
            .bind(tourism_id.into_inner())
            .execute(&**pool)
            .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Favorite not found".into()));
    }

    Ok(response::ok_message("Removed from favorites"))
}
