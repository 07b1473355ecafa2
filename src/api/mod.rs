//! API layer - HTTP handlers and routing
//!
//! - Request handlers
//! - Custom extractors and field validators
//! - OpenAPI document
//! - Route definitions

pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;
pub mod validators;

pub use openapi::ApiDoc;
pub use routes::create_router;
pub use state::AppState;
