pub mod config;
pub mod conversation;
pub mod handlers;
pub mod models;
pub mod providers;
pub mod routes;
pub mod scheduling;
pub mod state;
pub mod tools;

pub use axum;
pub use reqwest;
pub use serde;
pub use serde_json;
