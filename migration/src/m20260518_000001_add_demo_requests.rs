use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum DemoRequests {
    Table,
    Id,
    Name,
    Mobile,
    EventType,
    Location,
    EventDate,
    Details,
    CreatedAt,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 演示预约是公开表单，不关联用户账号
        manager
            .create_table(
                Table::create()
                    .table(DemoRequests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DemoRequests::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DemoRequests::Name).string().not_null())
                    .col(ColumnDef::new(DemoRequests::Mobile).string().not_null())
                    .col(ColumnDef::new(DemoRequests::EventType).string().not_null())
                    .col(ColumnDef::new(DemoRequests::Location).string().not_null())
                    .col(ColumnDef::new(DemoRequests::EventDate).date().null())
                    .col(ColumnDef::new(DemoRequests::Details).text().null())
                    .col(
                        ColumnDef::new(DemoRequests::CreatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DemoRequests::Table).to_owned())
            .await?;

        Ok(())
    }
}
