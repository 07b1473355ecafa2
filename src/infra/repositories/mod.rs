//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod doctor_repository;
pub(crate) mod entities;

pub(crate) use doctor_repository::queries;
pub use doctor_repository::{DoctorRepository, DoctorStore};

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use doctor_repository::MockDoctorRepository;
