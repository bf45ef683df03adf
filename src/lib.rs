//! Client-side core of the Villa Perez booking site: typed models for the
//! backend API, an authenticated JSON client, and the availability and
//! pricing calculations the booking views derive their state from.

pub mod api;
pub mod config;
pub mod models;
pub mod services;
pub mod session;

pub use api::client::ApiClient;
pub use api::error::ApiError;
pub use config::ApiConfig;
pub use session::{SessionStore, TokenProvider};
