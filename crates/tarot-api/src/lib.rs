//! JSON REST API over `tarot-core`.
//!
//! All reading and card routes live under `/api/v1`. Errors come back as
//! `{ "detail": "..." }` with 400, 404, or 500 status codes.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod telemetry;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use routes::router;
