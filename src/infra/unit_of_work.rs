//! Unit of Work pattern implementation.
//!
//! Centralizes repository access and wraps write use cases in a single
//! database transaction: commit when the closure succeeds, rollback when
//! it returns an error.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use super::repositories::{queries, DoctorRepository, DoctorStore};
use crate::domain::{Doctor, NewDoctor};
use crate::errors::{AppError, AppResult};

/// Boxed future returned by transactional closures
pub type TxFuture<'a, T> = Pin<Box<dyn Future<Output = AppResult<T>> + Send + 'a>>;

/// Unit of Work trait for dependency injection.
///
/// Not mockable directly because of the generic `transaction` method;
/// mock at the repository level instead.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Get doctor repository (outside any transaction)
    fn doctors(&self) -> Arc<dyn DoctorRepository>;

    /// Execute a closure within a transaction.
    ///
    /// The transaction is committed on success or rolled back on error.
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send;
}

/// Transaction context providing repository access within a transaction.
pub struct TransactionContext<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TransactionContext<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Get doctor repository for this transaction
    pub fn doctors(&self) -> TxDoctorRepository<'_> {
        TxDoctorRepository { txn: self.txn }
    }
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    db: DatabaseConnection,
    doctor_repo: Arc<DoctorStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        let doctor_repo = Arc::new(DoctorStore::new(db.clone()));
        Self { db, doctor_repo }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    fn doctors(&self) -> Arc<dyn DoctorRepository> {
        self.doctor_repo.clone()
    }

    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send,
    {
        let txn = self.db.begin().await.map_err(AppError::from)?;

        let ctx = TransactionContext::new(&txn);

        match f(ctx).await {
            Ok(result) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(result)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

/// Transaction-aware doctor repository.
///
/// Borrows the transaction so it cannot outlive it.
pub struct TxDoctorRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxDoctorRepository<'a> {
    /// Find doctor by ID, active or not
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Doctor>> {
        queries::find_by_id(self.txn, id).await
    }

    /// Insert a new doctor
    pub async fn create(&self, doctor: NewDoctor) -> AppResult<Doctor> {
        queries::create(self.txn, doctor).await
    }

    /// Overwrite every column of an existing doctor
    pub async fn save(&self, doctor: Doctor) -> AppResult<Doctor> {
        queries::save(self.txn, doctor).await
    }
}

/// Shorthand for running a block inside `UnitOfWork::transaction`.
#[macro_export]
macro_rules! with_transaction {
    ($uow:expr, |$ctx:ident| $body:expr) => {
        $uow.transaction(|$ctx| Box::pin(async move { $body })).await
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::domain::{Address, Specialty};
    use crate::infra::Database;
    use crate::types::{PageRequest, Sort};
    use crate::with_transaction;

    async fn persistence() -> Persistence {
        let db = Database::connect(&Config::with_database_url("sqlite::memory:"))
            .await
            .unwrap();
        Persistence::new(db.get_connection())
    }

    fn new_doctor() -> NewDoctor {
        NewDoctor {
            name: "Paulo Reis".to_string(),
            email: "paulo.reis@voll.med".to_string(),
            phone: "81977776666".to_string(),
            registration: "2468".to_string(),
            specialty: Specialty::Orthopedics,
            address: Address {
                street: "Rua B".to_string(),
                number: "20".to_string(),
                district: "Boa Vista".to_string(),
                city: "Recife".to_string(),
                state: "PE".to_string(),
                zip_code: "50000000".to_string(),
                complement: None,
            },
        }
    }

    #[tokio::test]
    async fn failed_transaction_discards_its_writes() {
        let uow = persistence().await;

        let result: AppResult<()> = with_transaction!(uow, |ctx| {
            let created = ctx.doctors().create(new_doctor()).await?;
            assert_eq!(ctx.doctors().find_by_id(created.id).await?, Some(created));
            Err(AppError::internal("abort after insert"))
        });

        assert!(matches!(result, Err(AppError::Internal(_))));
        assert_eq!(uow.doctors().find_by_id(1).await.unwrap(), None);
        let page = uow
            .doctors()
            .list_active(PageRequest::new(0, 10, Sort::asc("name")))
            .await
            .unwrap();
        assert_eq!(page.total_elements, 0);
    }

    #[tokio::test]
    async fn successful_transaction_commits() {
        let uow = persistence().await;

        let created = with_transaction!(uow, |ctx| ctx.doctors().create(new_doctor()).await).unwrap();

        let stored = uow.doctors().find_by_id(created.id).await.unwrap();
        assert_eq!(stored, Some(created));
    }
}
