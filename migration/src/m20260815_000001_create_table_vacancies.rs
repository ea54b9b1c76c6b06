use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create vacancies table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Vacancies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Vacancies::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    // Unsigned 64-bit user ids are stored bit-cast into BIGINT
                    .col(
                        ColumnDef::new(Vacancies::OwnerUserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Vacancies::Title).string_len(200).not_null())
                    .col(ColumnDef::new(Vacancies::Description).text().not_null())
                    .col(
                        ColumnDef::new(Vacancies::Created)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Fast ownership checks on close
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_vacancies_owner_user_id
                ON vacancies (owner_user_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_vacancies_owner_user_id;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Vacancies::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Vacancies {
    Table,
    Id,
    OwnerUserId,
    Title,
    Description,
    Created,
}
