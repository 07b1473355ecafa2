//! Service Container - Centralized service access.
//!
//! Owns the Unit of Work and hands out service trait objects.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::{DoctorManager, DoctorService};
use crate::infra::Persistence;

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get doctor service
    fn doctors(&self) -> Arc<dyn DoctorService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    doctor_service: Arc<dyn DoctorService>,
}

impl Services {
    /// Create service container from a database connection
    pub fn from_connection(db: DatabaseConnection) -> Self {
        let uow = Arc::new(Persistence::new(db));
        let doctor_service = Arc::new(DoctorManager::new(uow));

        Self { doctor_service }
    }
}

impl ServiceContainer for Services {
    fn doctors(&self) -> Arc<dyn DoctorService> {
        self.doctor_service.clone()
    }
}
