use crate::models::*;
use actix_web::{HttpResponse, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/packages",
    tag = "package",
    responses(
        (status = 200, description = "获取套餐目录成功", body = [PackageInfo])
    )
)]
pub async fn get_packages() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": package_catalogue()
    })))
}

pub fn package_config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/packages").route("", web::get().to(get_packages)));
}
