use sea_orm_migration::prelude::extension::postgres::Type;
use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum Bookings {
    Table,
    Status,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_type(
                Type::create()
                    .as_enum(Alias::new("booking_status"))
                    .values(vec![Alias::new("active"), Alias::new("cancelled")])
                    .to_owned(),
            )
            .await?;

        // 存量预订全部按进行中处理
        if !manager.has_column("bookings", "status").await? {
            manager
                .alter_table(
                    Table::alter()
                        .table(Bookings::Table)
                        .add_column(
                            ColumnDef::new(Bookings::Status)
                                .custom(Alias::new("booking_status"))
                                .not_null()
                                .default(Expr::cust("'active'::booking_status")),
                        )
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, _manager: &SchemaManager) -> Result<(), DbErr> {
        Ok(())
    }
}
