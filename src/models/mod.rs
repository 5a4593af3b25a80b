//! Request and Response models for the cache service API
//!
//! DTOs used for deserializing queries and serializing JSON responses.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{FetchQuery, KeyQuery};
pub use responses::{DeleteResponse, ErrorResponse, HealthResponse, SetResponse, StatsResponse};
