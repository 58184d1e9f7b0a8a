use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CycleData::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CycleData::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CycleData::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(CycleData::PeriodDayIds)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    // Embedded symptom summary
                    .col(ColumnDef::new(CycleData::SymptomDate).date().not_null())
                    .col(
                        ColumnDef::new(CycleData::SymptomType)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CycleData::SymptomIntensity)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CycleData::SymptomNotes).text())
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_cycle_data_user
                ON cycle_data (user_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_cycle_data_user")
            .await?;

        manager
            .drop_table(Table::drop().table(CycleData::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CycleData {
    Table,
    Id,
    UserId,
    PeriodDayIds,
    SymptomDate,
    SymptomType,
    SymptomIntensity,
    SymptomNotes,
}
