//! MyMedicine HTTP API: configuration, database bootstrap, routing and
//! request/response mapping.

pub mod app;
pub mod config;
pub mod db;
pub mod middleware;
pub mod server;

pub use app::{build_app, AppState, RouteGroups};
pub use config::Config;
