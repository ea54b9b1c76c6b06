use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create vacancy_managers table
        // =====================================================
        //
        // One row per user that has ever been granted (or revoked) the
        // vacancy-management capability. Absence of a row means "not allowed".
        manager
            .create_table(
                Table::create()
                    .table(VacancyManagers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(VacancyManagers::UserId)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(VacancyManagers::CanManageVacancies)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VacancyManagers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum VacancyManagers {
    Table,
    UserId,
    CanManageVacancies,
}
