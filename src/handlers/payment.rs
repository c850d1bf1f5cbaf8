use crate::models::*;
use crate::services::PaymentService;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

fn get_user_id_from_request(req: &HttpRequest) -> Option<i64> {
    req.extensions().get::<i64>().copied()
}

#[utoipa::path(
    post,
    path = "/payments/order",
    tag = "payment",
    request_body = CreateOrderRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "创建支付订单成功", body = CreateOrderResponse),
        (status = 400, description = "请求参数错误"),
        (status = 401, description = "未授权"),
        (status = 403, description = "预订不属于当前用户"),
        (status = 502, description = "支付网关错误")
    )
)]
pub async fn create_order(
    payment_service: web::Data<PaymentService>,
    req: HttpRequest,
    request: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse> {
    let user_id = get_user_id_from_request(&req).unwrap_or(0);

    match payment_service
        .create_order(user_id, request.into_inner())
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/payments/confirm",
    tag = "payment",
    request_body = ConfirmPaymentRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "确认支付成功", body = ConfirmPaymentResponse),
        (status = 400, description = "支付未完成或与订单不符"),
        (status = 401, description = "未授权"),
        (status = 403, description = "预订不属于当前用户"),
        (status = 502, description = "支付网关错误")
    )
)]
pub async fn confirm_payment(
    payment_service: web::Data<PaymentService>,
    req: HttpRequest,
    request: web::Json<ConfirmPaymentRequest>,
) -> Result<HttpResponse> {
    let user_id = get_user_id_from_request(&req).unwrap_or(0);

    match payment_service
        .confirm_payment(user_id, request.into_inner())
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/payments/history",
    tag = "payment",
    params(
        ("booking_id" = i64, Query, description = "预订ID"),
        ("page" = Option<u32>, Query, description = "页码"),
        ("per_page" = Option<u32>, Query, description = "每页数量")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "获取支付历史成功"),
        (status = 401, description = "未授权"),
        (status = 403, description = "预订不属于当前用户"),
        (status = 404, description = "预订不存在")
    )
)]
pub async fn get_history(
    payment_service: web::Data<PaymentService>,
    req: HttpRequest,
    query: web::Query<PaymentHistoryQuery>,
) -> Result<HttpResponse> {
    let user_id = get_user_id_from_request(&req).unwrap_or(0);

    match payment_service.payment_history(user_id, &query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn payment_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/payments")
            .route("/order", web::post().to(create_order))
            .route("/confirm", web::post().to(confirm_payment))
            .route("/history", web::get().to(get_history)),
    );
}
