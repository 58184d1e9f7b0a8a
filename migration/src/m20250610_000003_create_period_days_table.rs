use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PeriodDays::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PeriodDays::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    // One logged entry per calendar date
                    .col(
                        ColumnDef::new(PeriodDays::Date)
                            .date()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(PeriodDays::Flow).string_len(10))
                    .col(
                        ColumnDef::new(PeriodDays::SymptomIds)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(ColumnDef::new(PeriodDays::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(PeriodDays::Notes)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(PeriodDays::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_period_days_user
                ON period_days (user_id, date DESC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_period_days_user")
            .await?;

        manager
            .drop_table(Table::drop().table(PeriodDays::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PeriodDays {
    Table,
    Id,
    Date,
    Flow,
    SymptomIds,
    UserId,
    Notes,
    UpdatedAt,
}
