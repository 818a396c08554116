use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Todos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Todos::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Todos::TenantId).string().not_null())
                    .col(ColumnDef::new(Todos::StudentId).string().not_null())
                    .col(ColumnDef::new(Todos::Title).string().not_null())
                    .col(ColumnDef::new(Todos::Description).text().null())
                    .col(ColumnDef::new(Todos::Subject).string().null())
                    .col(ColumnDef::new(Todos::DueDate).date_time().not_null())
                    .col(ColumnDef::new(Todos::Priority).string().not_null())
                    .col(
                        ColumnDef::new(Todos::EstimatedDurationMinutes)
                            .integer()
                            .null(),
                    )
                    .col(ColumnDef::new(Todos::Notes).text().null())
                    .col(ColumnDef::new(Todos::Feedback).text().null())
                    .col(ColumnDef::new(Todos::CompletedAt).date_time().null())
                    .col(ColumnDef::new(Todos::VerifiedAt).date_time().null())
                    .col(ColumnDef::new(Todos::VerifiedBy).string().null())
                    .col(ColumnDef::new(Todos::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Todos::UpdatedAt).date_time().not_null())
                    .col(ColumnDef::new(Todos::DeletedAt).date_time().null())
                    .to_owned(),
            )
            .await?;

        // Every read goes through the tenant filter; list reads add due date
        manager
            .create_index(
                Index::create()
                    .name("idx_todos_tenant_due")
                    .table(Todos::Table)
                    .col(Todos::TenantId)
                    .col(Todos::DueDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_todos_tenant_student")
                    .table(Todos::Table)
                    .col(Todos::TenantId)
                    .col(Todos::StudentId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Todos::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Todos {
    Table,
    Id,
    TenantId,
    StudentId,
    Title,
    Description,
    Subject,
    DueDate,
    Priority,
    EstimatedDurationMinutes,
    Notes,
    Feedback,
    CompletedAt,
    VerifiedAt,
    VerifiedBy,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
