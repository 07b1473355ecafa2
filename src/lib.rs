//! Voll Med API - Doctor records service
//!
//! REST API for registering, listing, updating and soft deleting the
//! doctors of a medical clinic.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Doctor entity, specialties and update rules
//! - **services**: Application use cases
//! - **infra**: Database, migrations, repositories, Unit of Work
//! - **api**: HTTP handlers, extractors and routes
//! - **types**: Shared types (pagination, responses)
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Doctor, Specialty};
pub use errors::{AppError, AppResult};
