//! League of Legends champion browser with per-player mastery levels.

pub mod champions;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod region;
pub mod session;
pub mod upstream;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
