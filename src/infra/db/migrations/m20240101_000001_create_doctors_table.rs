//! Migration: Create the doctors table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Doctors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Doctors::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Doctors::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Doctors::Email).string_len(100).not_null())
                    .col(ColumnDef::new(Doctors::Phone).string_len(20).not_null())
                    .col(ColumnDef::new(Doctors::Registration).string_len(6).not_null())
                    .col(ColumnDef::new(Doctors::Specialty).string_len(100).not_null())
                    .col(ColumnDef::new(Doctors::Street).string_len(100).not_null())
                    .col(ColumnDef::new(Doctors::Number).string_len(20).not_null())
                    .col(ColumnDef::new(Doctors::District).string_len(100).not_null())
                    .col(ColumnDef::new(Doctors::City).string_len(100).not_null())
                    .col(ColumnDef::new(Doctors::State).string_len(2).not_null())
                    .col(ColumnDef::new(Doctors::ZipCode).string_len(9).not_null())
                    .col(ColumnDef::new(Doctors::Complement).string_len(100).null())
                    .col(
                        ColumnDef::new(Doctors::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await?;

        // Listings always filter on active
        manager
            .create_index(
                Index::create()
                    .name("idx_doctors_active")
                    .table(Doctors::Table)
                    .col(Doctors::Active)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Doctors::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Doctors {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Registration,
    Specialty,
    Street,
    Number,
    District,
    City,
    State,
    ZipCode,
    Complement,
    Active,
}
