use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum Payments {
    Table,
    RazorpayOrderId,
    RazorpayPaymentId,
    Status,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 首付行没有网关引用，三列都允许为空
        if !manager.has_column("payments", "razorpay_order_id").await? {
            manager
                .alter_table(
                    Table::alter()
                        .table(Payments::Table)
                        .add_column(ColumnDef::new(Payments::RazorpayOrderId).string().null())
                        .to_owned(),
                )
                .await?;
        }

        if !manager.has_column("payments", "razorpay_payment_id").await? {
            manager
                .alter_table(
                    Table::alter()
                        .table(Payments::Table)
                        .add_column(ColumnDef::new(Payments::RazorpayPaymentId).string().null())
                        .to_owned(),
                )
                .await?;
        }

        if !manager.has_column("payments", "status").await? {
            manager
                .alter_table(
                    Table::alter()
                        .table(Payments::Table)
                        .add_column(ColumnDef::new(Payments::Status).string().null())
                        .to_owned(),
                )
                .await?;
        }

        // 同一笔网关支付只允许入账一次（部分唯一索引要用原生语句）
        let stmt = sea_orm::Statement::from_string(
            manager.get_database_backend(),
            "CREATE UNIQUE INDEX IF NOT EXISTS idx_payments_razorpay_payment_id ON payments(razorpay_payment_id) WHERE razorpay_payment_id IS NOT NULL".to_owned(),
        );
        manager.get_connection().execute(stmt).await?;
        Ok(())
    }

    async fn down(&self, _manager: &SchemaManager) -> Result<(), DbErr> {
        Ok(())
    }
}
