use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Symptoms::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Symptoms::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Symptoms::Date)
                            .date()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Symptoms::Category).string_len(50).not_null())
                    .col(
                        ColumnDef::new(Symptoms::SymptomType)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Symptoms::Intensity).integer().not_null())
                    .col(ColumnDef::new(Symptoms::PeriodDayId).uuid().not_null())
                    .col(ColumnDef::new(Symptoms::UserId).uuid().not_null())
                    .col(ColumnDef::new(Symptoms::Notes).text())
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_symptoms_user
                ON symptoms (user_id, date DESC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_symptoms_user")
            .await?;

        manager
            .drop_table(Table::drop().table(Symptoms::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Symptoms {
    Table,
    Id,
    Date,
    Category,
    SymptomType,
    Intensity,
    PeriodDayId,
    UserId,
    Notes,
}
