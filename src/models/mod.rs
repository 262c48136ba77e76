pub mod favorite;
pub mod tourism;
pub mod user;

pub use favorite::FavoriteInput;
pub use tourism::{City, TourismDetail, TourismQuery, TourismSummary};
pub use user::{User, UserRecord};
