use serde::Deserialize;

/// Payload for adding a tourism place to the caller's favorites.
#[derive(Debug, Deserialize)]
pub struct FavoriteInput {
    pub tourism_id: i32,
}
