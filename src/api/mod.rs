//! API Module
//!
//! HTTP handlers and routing for the cache service.
//!
//! # Endpoints
//! - `GET /fetch?url=` - Fetch a URL through the cache
//! - `GET|PUT|DELETE /entry?key=` - Direct access to stored values
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod extract;
pub mod handlers;
pub mod routes;

pub use extract::ApiQuery;
pub use handlers::*;
pub use routes::create_router;
