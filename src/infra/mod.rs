//! Infrastructure layer - External systems integration
//!
//! - Database connection and migrations
//! - Repositories over the `doctors` table
//! - Unit of Work for transaction management

pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use db::{Database, Migrator};
pub use repositories::{DoctorRepository, DoctorStore};
pub use unit_of_work::{Persistence, TransactionContext, TxDoctorRepository, TxFuture, UnitOfWork};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockDoctorRepository;
