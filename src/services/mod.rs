//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.

pub mod container;
mod doctor_service;

pub use container::{ServiceContainer, Services};
pub use doctor_service::{DoctorManager, DoctorService};
