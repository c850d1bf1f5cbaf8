use crate::entities::{
    BookingStatus, PackageTier, booking_entity as bookings, payment_entity as payments,
};
use crate::ledger::{self, PaymentStatus};
use crate::models::PaymentResponse;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookingResponse {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub location: String,
    pub event_type: String,
    pub event_date: Option<String>,
    pub package: PackageTier,
    pub package_price: i64,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

/// 预订加上它的支付行和按行实时算出的汇总
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookingWithPayments {
    pub booking: BookingResponse,
    pub payments: Vec<PaymentResponse>,
    pub total_paid: i64,
    pub total_amount: i64,
    pub remaining: i64,
    pub payment_status: PaymentStatus,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookingStats {
    pub total: i64,
    pub fully_paid: i64,
    pub pending: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookingListResponse {
    pub bookings: Vec<BookingWithPayments>,
    pub stats: BookingStats,
}

impl From<bookings::Model> for BookingResponse {
    fn from(m: bookings::Model) -> Self {
        let package_price = m.package.price();
        Self {
            id: m.id,
            name: m.name,
            phone: m.phone,
            location: m.location,
            event_type: m.event_type,
            event_date: m.event_date.map(|d| d.format("%Y-%m-%d").to_string()),
            package: m.package,
            package_price,
            status: m.status,
            created_at: m.created_at.unwrap_or_else(Utc::now),
        }
    }
}

impl BookingWithPayments {
    /// 汇总和状态只经由 ledger 计算，列表页和详情页不可能各算各的
    pub fn new(booking: bookings::Model, payment_rows: Vec<payments::Model>) -> Self {
        let summary = ledger::payment_summary(&booking.package, &payment_rows);
        let payment_status = summary.status();

        Self {
            booking: BookingResponse::from(booking),
            payments: payment_rows.into_iter().map(PaymentResponse::from).collect(),
            total_paid: summary.total_paid,
            total_amount: summary.total_amount,
            remaining: summary.remaining,
            payment_status,
        }
    }
}
