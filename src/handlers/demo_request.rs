use crate::models::*;
use crate::services::DemoRequestService;
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    post,
    path = "/demo-requests",
    tag = "demo",
    request_body = DemoRequestForm,
    responses(
        (status = 200, description = "提交演示预约成功", body = DemoRequestResponse),
        (status = 400, description = "请求参数错误"),
        (status = 500, description = "服务器内部错误")
    )
)]
pub async fn create_demo_request(
    demo_request_service: web::Data<DemoRequestService>,
    request: web::Json<DemoRequestForm>,
) -> Result<HttpResponse> {
    match demo_request_service
        .create_demo_request(request.into_inner())
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn demo_request_config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/demo-requests").route("", web::post().to(create_demo_request)));
}
