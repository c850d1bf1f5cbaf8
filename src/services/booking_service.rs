use crate::entities::{BookingStatus, booking_entity as bookings, payment_entity as payments};
use crate::error::{AppError, AppResult};
use crate::ledger::{self, BookingForm, PaymentStatus};
use crate::models::{BookingListResponse, BookingResponse, BookingStats, BookingWithPayments};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set,
};
use std::collections::HashMap;

#[derive(Clone)]
pub struct BookingService {
    pool: DatabaseConnection,
}

impl BookingService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 创建预订和它的首笔支付
    pub async fn create_booking(
        &self,
        owner_id: i64,
        form: BookingForm,
    ) -> AppResult<BookingWithPayments> {
        // 全部字段校验先于第一次存储调用
        let submission = ledger::validate_booking_submission(&form)?;

        // 预订先提交，支付第二步再插，不包在一个事务里：
        // 支付插入失败时必须能区分"什么都没存"和"预订已存而支付缺失"
        let booking = bookings::ActiveModel {
            user_id: Set(owner_id),
            name: Set(submission.name),
            phone: Set(submission.phone),
            location: Set(submission.location),
            event_type: Set(submission.event_type),
            event_date: Set(submission.event_date),
            package: Set(submission.package),
            status: Set(BookingStatus::Active),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        let payment = payments::ActiveModel {
            booking_id: Set(booking.id),
            user_id: Set(owner_id),
            amount: Set(submission.amount),
            status: Set(Some("success".to_string())),
            ..Default::default()
        }
        .insert(&self.pool)
        .await
        .map_err(|e| {
            log::error!(
                "Initial payment insert failed for booking {}: {}",
                booking.id,
                e
            );
            AppError::InitialPaymentFailed {
                booking_id: booking.id,
            }
        })?;

        Ok(BookingWithPayments::new(booking, vec![payment]))
    }

    /// 当前用户的全部预订，按活动日期倒序，附带支付汇总和面板统计
    pub async fn list_bookings(&self, owner_id: i64) -> AppResult<BookingListResponse> {
        let booking_rows = bookings::Entity::find()
            .filter(bookings::Column::UserId.eq(owner_id))
            .order_by_desc(bookings::Column::EventDate)
            .all(&self.pool)
            .await?;

        // 一次取回该用户的全部支付行再按预订分桶
        let payment_rows = payments::Entity::find()
            .filter(payments::Column::UserId.eq(owner_id))
            .order_by_asc(payments::Column::CreatedAt)
            .all(&self.pool)
            .await?;

        let mut by_booking: HashMap<i64, Vec<payments::Model>> = HashMap::new();
        for p in payment_rows {
            by_booking.entry(p.booking_id).or_default().push(p);
        }

        let mut items = Vec::with_capacity(booking_rows.len());
        let mut stats = BookingStats {
            total: 0,
            fully_paid: 0,
            pending: 0,
        };

        for booking in booking_rows {
            let rows = by_booking.remove(&booking.id).unwrap_or_default();
            let item = BookingWithPayments::new(booking, rows);

            // 统计只数未取消的预订
            if item.booking.status == BookingStatus::Active {
                stats.total += 1;
                match item.payment_status {
                    PaymentStatus::FullyPaid => stats.fully_paid += 1,
                    PaymentStatus::PartiallyPaid => stats.pending += 1,
                }
            }

            items.push(item);
        }

        Ok(BookingListResponse {
            bookings: items,
            stats,
        })
    }

    /// 单个预订及其支付汇总
    pub async fn get_booking(
        &self,
        owner_id: i64,
        booking_id: i64,
    ) -> AppResult<BookingWithPayments> {
        let booking = self.find_booking(booking_id).await?;
        ledger::ensure_owner(booking.user_id, owner_id)?;

        let rows = payments::Entity::find()
            .filter(payments::Column::BookingId.eq(booking_id))
            .order_by_asc(payments::Column::CreatedAt)
            .all(&self.pool)
            .await?;

        Ok(BookingWithPayments::new(booking, rows))
    }

    /// 取消预订：软取消，状态单向翻转，没有恢复路径
    pub async fn cancel_booking(
        &self,
        owner_id: i64,
        booking_id: i64,
    ) -> AppResult<BookingResponse> {
        let booking = self.find_booking(booking_id).await?;
        // 属主检查先于任何变更
        ledger::ensure_owner(booking.user_id, owner_id)?;

        if booking.status == BookingStatus::Cancelled {
            return Err(AppError::ValidationError(
                "Booking is already cancelled".to_string(),
            ));
        }

        let mut active = booking.into_active_model();
        active.status = Set(BookingStatus::Cancelled);
        active.updated_at = Set(Some(Utc::now()));
        let updated = active.update(&self.pool).await?;

        Ok(BookingResponse::from(updated))
    }

    async fn find_booking(&self, booking_id: i64) -> AppResult<bookings::Model> {
        bookings::Entity::find_by_id(booking_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))
    }
}
