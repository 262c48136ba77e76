#![doc = "The `tenan_api` library crate."]
#![doc = ""]
#![doc = "This crate contains the business logic for the Tenan tourism-information"]
#![doc = "backend: the tourism catalog with its paginated search, the authentication"]
#![doc = "lifecycle (registration, login, token refresh, logout), per-user favorites,"]
#![doc = "routing configuration, and error handling. It is used by the main binary"]
#![doc = "(`main.rs`) to construct and run the application."]

pub mod auth;
pub mod catalog;
pub mod config;
pub mod error;
pub mod hotel;
pub mod models;
pub mod response;
pub mod routes;
