use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Periods::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Periods::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Periods::UserId).uuid().not_null())
                    .col(ColumnDef::new(Periods::Date).date().not_null())
                    .col(ColumnDef::new(Periods::Flow).string_len(10).not_null())
                    // Symptom tag list, e.g. ["cramps", "bloating"]
                    .col(
                        ColumnDef::new(Periods::Symptoms)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(ColumnDef::new(Periods::Notes).text())
                    .col(
                        ColumnDef::new(Periods::CreatedAt)
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
                CREATE INDEX idx_periods_user_date
                ON periods (user_id, date DESC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_periods_user_date")
            .await?;

        manager
            .drop_table(Table::drop().table(Periods::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Periods {
    Table,
    Id,
    UserId,
    Date,
    Flow,
    Symptoms,
    Notes,
    CreatedAt,
}
