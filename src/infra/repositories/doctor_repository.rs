//! Doctor repository implementation with soft delete support.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ActiveValue::Unchanged, ColumnTrait,
    ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, Order, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use super::entities::doctor::{self, ActiveModel, Entity as DoctorEntity};
use crate::domain::{Doctor, NewDoctor};
use crate::errors::{AppError, AppResult};
use crate::types::{Direction, Page, PageRequest};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Doctor repository trait for dependency injection.
///
/// Lookups by id see inactive doctors too; listings only see active ones.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait DoctorRepository: Send + Sync {
    /// Find doctor by ID, active or not
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Doctor>>;

    /// Page through active doctors
    async fn list_active(&self, request: PageRequest) -> AppResult<Page<Doctor>>;

    /// Insert a new doctor; the store assigns the id
    async fn create(&self, doctor: NewDoctor) -> AppResult<Doctor>;

    /// Overwrite every column of an existing doctor
    async fn save(&self, doctor: Doctor) -> AppResult<Doctor>;
}

/// Concrete implementation of DoctorRepository on the connection pool
pub struct DoctorStore {
    db: DatabaseConnection,
}

impl DoctorStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DoctorRepository for DoctorStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Doctor>> {
        queries::find_by_id(&self.db, id).await
    }

    async fn list_active(&self, request: PageRequest) -> AppResult<Page<Doctor>> {
        queries::list_active(&self.db, &request).await
    }

    async fn create(&self, doctor: NewDoctor) -> AppResult<Doctor> {
        queries::create(&self.db, doctor).await
    }

    async fn save(&self, doctor: Doctor) -> AppResult<Doctor> {
        queries::save(&self.db, doctor).await
    }
}

/// Queries shared by the pooled store and the transaction-scoped repository.
pub(crate) mod queries {
    use super::*;

    /// Map a client sort property onto a column.
    pub fn sort_column(property: &str) -> AppResult<doctor::Column> {
        match property {
            "id" => Ok(doctor::Column::Id),
            "name" => Ok(doctor::Column::Name),
            "registration" => Ok(doctor::Column::Registration),
            "specialty" => Ok(doctor::Column::Specialty),
            other => Err(AppError::invalid_field(
                "sort",
                format!("unknown sort property '{}'", other),
            )),
        }
    }

    pub async fn find_by_id<C: ConnectionTrait>(db: &C, id: i64) -> AppResult<Option<Doctor>> {
        DoctorEntity::find_by_id(id)
            .one(db)
            .await?
            .map(Doctor::try_from)
            .transpose()
    }

    pub async fn list_active<C: ConnectionTrait>(
        db: &C,
        request: &PageRequest,
    ) -> AppResult<Page<Doctor>> {
        let column = sort_column(&request.sort.property)?;
        let order = match request.sort.direction {
            Direction::Asc => Order::Asc,
            Direction::Desc => Order::Desc,
        };

        let paginator = DoctorEntity::find()
            .filter(doctor::Column::Active.eq(true))
            .order_by(column, order)
            .order_by_asc(doctor::Column::Id)
            .paginate(db, request.size);

        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(request.page).await?;
        let content = models
            .into_iter()
            .map(Doctor::try_from)
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Page::new(content, request.page, request.size, total))
    }

    pub async fn create<C: ConnectionTrait>(db: &C, doctor: NewDoctor) -> AppResult<Doctor> {
        let address = doctor.address;
        let active_model = ActiveModel {
            id: NotSet,
            name: Set(doctor.name),
            email: Set(doctor.email),
            phone: Set(doctor.phone),
            registration: Set(doctor.registration),
            specialty: Set(doctor.specialty.as_str().to_string()),
            street: Set(address.street),
            number: Set(address.number),
            district: Set(address.district),
            city: Set(address.city),
            state: Set(address.state),
            zip_code: Set(address.zip_code),
            complement: Set(address.complement),
            active: Set(true),
        };

        let model = active_model.insert(db).await?;
        Doctor::try_from(model)
    }

    pub async fn save<C: ConnectionTrait>(db: &C, doctor: Doctor) -> AppResult<Doctor> {
        let address = doctor.address;
        let active_model = ActiveModel {
            id: Unchanged(doctor.id),
            name: Set(doctor.name),
            email: Set(doctor.email),
            phone: Set(doctor.phone),
            registration: Set(doctor.registration),
            specialty: Set(doctor.specialty.as_str().to_string()),
            street: Set(address.street),
            number: Set(address.number),
            district: Set(address.district),
            city: Set(address.city),
            state: Set(address.state),
            zip_code: Set(address.zip_code),
            complement: Set(address.complement),
            active: Set(doctor.active),
        };

        match active_model.update(db).await {
            Ok(model) => Doctor::try_from(model),
            Err(DbErr::RecordNotUpdated) => Err(AppError::NotFound),
            Err(e) => Err(e.into()),
        }
    }
}
