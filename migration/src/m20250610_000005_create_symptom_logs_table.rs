use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Flat per-user symptom log. Unlike `symptoms` there is no unique
        // date constraint, so several symptom types can share a day.
        manager
            .create_table(
                Table::create()
                    .table(SymptomLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SymptomLogs::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SymptomLogs::UserId).uuid().not_null())
                    .col(ColumnDef::new(SymptomLogs::Date).date().not_null())
                    .col(
                        ColumnDef::new(SymptomLogs::SymptomType)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(ColumnDef::new(SymptomLogs::Intensity).integer().not_null())
                    .col(ColumnDef::new(SymptomLogs::Notes).text())
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_symptom_logs_user_date
                ON symptom_logs (user_id, date DESC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_symptom_logs_user_date")
            .await?;

        manager
            .drop_table(Table::drop().table(SymptomLogs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SymptomLogs {
    Table,
    Id,
    UserId,
    Date,
    SymptomType,
    Intensity,
    Notes,
}
