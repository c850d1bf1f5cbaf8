use crate::entities::demo_request_entity as demo_requests;
use crate::error::{AppError, AppResult};
use crate::models::{DemoRequestForm, DemoRequestResponse};
use crate::utils::build_demo_link;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

#[derive(Clone)]
pub struct DemoRequestService {
    pool: DatabaseConnection,
    business_number: String,
}

impl DemoRequestService {
    pub fn new(pool: DatabaseConnection, business_number: String) -> Self {
        Self {
            pool,
            business_number,
        }
    }

    /// 保存演示预约并返回预填好的 WhatsApp 链接
    pub async fn create_demo_request(
        &self,
        form: DemoRequestForm,
    ) -> AppResult<DemoRequestResponse> {
        let name = form.name.trim();
        let mobile = form.mobile.trim();
        let event_type = form.event_type.trim();
        let location = form.location.trim();

        for (value, field) in [
            (name, "name"),
            (mobile, "mobile"),
            (event_type, "event_type"),
            (location, "location"),
        ] {
            if value.is_empty() {
                return Err(AppError::MissingField(field.to_string()));
            }
        }

        // 详情留空时不落库空字符串
        let details = form
            .details
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        let request = demo_requests::ActiveModel {
            name: Set(name.to_string()),
            mobile: Set(mobile.to_string()),
            event_type: Set(event_type.to_string()),
            location: Set(location.to_string()),
            event_date: Set(form.event_date),
            details: Set(details),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        let whatsapp_link = build_demo_link(&self.business_number, &request)?;

        Ok(DemoRequestResponse::from_model(request, whatsapp_link))
    }
}
