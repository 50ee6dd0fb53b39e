use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tasks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tasks::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Tasks::Description)
                            .text()
                            .not_null()
                            // Uniqueness is enforced here, not only by the
                            // service-side pre-flight check. Two concurrent
                            // creates with the same description race past the
                            // check; the constraint settles it.
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Tasks::IsReminderSet).boolean().not_null())
                    .col(ColumnDef::new(Tasks::IsTaskOpen).boolean().not_null())
                    .col(
                        ColumnDef::new(Tasks::CreatedOn)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Tasks::Priority).text().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tasks::Table).to_owned())
            .await
    }
}

/// Iden enum for the 'tasks' table and its columns
#[derive(DeriveIden)]
enum Tasks {
    Table,
    Id,
    Description,
    IsReminderSet,
    IsTaskOpen,
    CreatedOn,
    Priority,
}
