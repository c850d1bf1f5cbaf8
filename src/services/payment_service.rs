use crate::entities::{BookingStatus, booking_entity as bookings, payment_entity as payments};
use crate::error::{AppError, AppResult};
use crate::external::razorpay::{RazorpayService, paise_to_rupees, rupees_to_paise};
use crate::ledger;
use crate::models::{
    ConfirmPaymentRequest, ConfirmPaymentResponse, CreateOrderRequest, CreateOrderResponse,
    PaginatedResponse, PaginationParams, PaymentHistoryQuery, PaymentResponse,
};
use crate::utils::generate_receipt_id;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

#[derive(Clone)]
pub struct PaymentService {
    pool: DatabaseConnection,
    razorpay_service: RazorpayService,
}

impl PaymentService {
    pub fn new(pool: DatabaseConnection, razorpay_service: RazorpayService) -> Self {
        Self {
            pool,
            razorpay_service,
        }
    }

    /// Create a Razorpay order for a top-up payment
    pub async fn create_order(
        &self,
        owner_id: i64,
        request: CreateOrderRequest,
    ) -> AppResult<CreateOrderResponse> {
        // Amount must be positive before the processor is involved
        ledger::validate_top_up_amount(request.amount)?;

        let booking = self.find_booking(request.booking_id).await?;
        ledger::ensure_owner(booking.user_id, owner_id)?;

        if booking.status == BookingStatus::Cancelled {
            return Err(AppError::ValidationError(
                "Cannot pay against a cancelled booking".to_string(),
            ));
        }

        // Razorpay amounts are in paise
        let amount_paise = rupees_to_paise(request.amount);
        let receipt = generate_receipt_id(booking.id);
        let order = self
            .razorpay_service
            .create_order(amount_paise, &receipt)
            .await?;

        Ok(CreateOrderResponse {
            order_id: order.id,
            amount: order.amount,
            currency: order.currency,
            key_id: self.razorpay_service.key_id().to_string(),
        })
    }

    /// Verify a checkout result against Razorpay and record the payment row
    pub async fn confirm_payment(
        &self,
        owner_id: i64,
        request: ConfirmPaymentRequest,
    ) -> AppResult<ConfirmPaymentResponse> {
        let booking = self.find_booking(request.booking_id).await?;
        ledger::ensure_owner(booking.user_id, owner_id)?;

        // Trust only what we fetch from Razorpay, not what the browser posts
        let razorpay_payment = self
            .razorpay_service
            .fetch_payment(&request.razorpay_payment_id)
            .await?;

        if razorpay_payment.status != "captured" {
            return Err(AppError::ValidationError(
                "Payment not successful".to_string(),
            ));
        }

        if razorpay_payment.order_id.as_deref() != Some(request.razorpay_order_id.as_str()) {
            return Err(AppError::ValidationError(
                "Payment does not belong to the stated order".to_string(),
            ));
        }

        // Confirming the same payment twice returns the already recorded row
        let existing = payments::Entity::find()
            .filter(payments::Column::RazorpayPaymentId.eq(&request.razorpay_payment_id))
            .one(&self.pool)
            .await?;

        let payment = match existing {
            Some(p) => {
                if p.booking_id != booking.id {
                    return Err(AppError::ValidationError(
                        "Payment already recorded against another booking".to_string(),
                    ));
                }
                p
            }
            None => {
                payments::ActiveModel {
                    booking_id: Set(booking.id),
                    user_id: Set(owner_id),
                    amount: Set(paise_to_rupees(razorpay_payment.amount)),
                    razorpay_order_id: Set(Some(request.razorpay_order_id)),
                    razorpay_payment_id: Set(Some(razorpay_payment.id)),
                    status: Set(Some("success".to_string())),
                    ..Default::default()
                }
                .insert(&self.pool)
                .await?
            }
        };

        // Summary is recomputed from the rows, never read from a stored total
        let rows = payments::Entity::find()
            .filter(payments::Column::BookingId.eq(booking.id))
            .order_by_asc(payments::Column::CreatedAt)
            .all(&self.pool)
            .await?;

        let summary = ledger::payment_summary(&booking.package, &rows);
        let payment_status = summary.status();

        Ok(ConfirmPaymentResponse {
            payment: PaymentResponse::from(payment),
            total_paid: summary.total_paid,
            total_amount: summary.total_amount,
            remaining: summary.remaining,
            payment_status,
        })
    }

    /// Page through one booking's payments, oldest first
    pub async fn payment_history(
        &self,
        owner_id: i64,
        query: &PaymentHistoryQuery,
    ) -> AppResult<PaginatedResponse<PaymentResponse>> {
        let booking = self.find_booking(query.booking_id).await?;
        ledger::ensure_owner(booking.user_id, owner_id)?;

        let params = PaginationParams::new(query.page, query.per_page);

        let total = payments::Entity::find()
            .filter(payments::Column::BookingId.eq(booking.id))
            .count(&self.pool)
            .await? as i64;

        let rows = payments::Entity::find()
            .filter(payments::Column::BookingId.eq(booking.id))
            .order_by_asc(payments::Column::CreatedAt)
            .offset(params.get_offset() as u64)
            .limit(params.get_limit() as u64)
            .all(&self.pool)
            .await?;

        let data: Vec<PaymentResponse> = rows.into_iter().map(PaymentResponse::from).collect();

        Ok(PaginatedResponse::new(
            data,
            params.get_page(),
            params.get_page_size(),
            total,
        ))
    }

    async fn find_booking(&self, booking_id: i64) -> AppResult<bookings::Model> {
        bookings::Entity::find_by_id(booking_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))
    }
}
