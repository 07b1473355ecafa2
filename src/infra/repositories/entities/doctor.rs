//! Doctor database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{Address, Doctor, Specialty};
use crate::errors::AppError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "doctors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub registration: String,
    pub specialty: String,
    // Embedded address column group
    pub street: String,
    pub number: String,
    pub district: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub complement: Option<String>,
    /// Soft delete marker (false = deleted)
    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl TryFrom<Model> for Doctor {
    type Error = AppError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let specialty: Specialty = model.specialty.parse().map_err(|e| {
            AppError::internal(format!("doctor {} has corrupt specialty: {}", model.id, e))
        })?;

        Ok(Doctor {
            id: model.id,
            name: model.name,
            email: model.email,
            phone: model.phone,
            registration: model.registration,
            specialty,
            address: Address {
                street: model.street,
                number: model.number,
                district: model.district,
                city: model.city,
                state: model.state,
                zip_code: model.zip_code,
                complement: model.complement,
            },
            active: model.active,
        })
    }
}
