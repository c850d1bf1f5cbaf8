use crate::entities::payment_entity as payments;
use crate::ledger::PaymentStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaymentResponse {
    pub id: i64,
    pub booking_id: i64,
    pub amount: i64,
    pub razorpay_order_id: Option<String>,
    pub razorpay_payment_id: Option<String>,
    pub status: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// 追加支付下单请求，金额为卢比
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    #[schema(example = 12)]
    pub booking_id: i64,
    #[schema(example = 2000)]
    pub amount: i64,
}

/// 返回给托管收银台的下单结果，amount 为派萨
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateOrderResponse {
    pub order_id: String,
    pub amount: i64,
    pub currency: String,
    pub key_id: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ConfirmPaymentRequest {
    #[schema(example = 12)]
    pub booking_id: i64,
    #[schema(example = "order_N8xF2qLkVbW1Zp")]
    pub razorpay_order_id: String,
    #[schema(example = "pay_N8xGh3mRtY5Qd7")]
    pub razorpay_payment_id: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ConfirmPaymentResponse {
    pub payment: PaymentResponse,
    pub total_paid: i64,
    pub total_amount: i64,
    pub remaining: i64,
    pub payment_status: PaymentStatus,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaymentHistoryQuery {
    pub booking_id: i64,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl From<payments::Model> for PaymentResponse {
    fn from(m: payments::Model) -> Self {
        Self {
            id: m.id,
            booking_id: m.booking_id,
            amount: m.amount,
            razorpay_order_id: m.razorpay_order_id,
            razorpay_payment_id: m.razorpay_payment_id,
            status: m.status,
            created_at: m.created_at.unwrap_or_else(Utc::now),
        }
    }
}
