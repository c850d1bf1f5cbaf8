use crate::entities::demo_request_entity as demo_requests;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DemoRequestForm {
    #[schema(example = "Priya Sharma")]
    pub name: String,
    #[schema(example = "9876543210")]
    pub mobile: String,
    #[schema(example = "Marriage")]
    pub event_type: String,
    #[schema(example = "Chennai")]
    pub location: String,
    #[schema(example = "2026-11-20")]
    pub event_date: Option<NaiveDate>,
    #[schema(example = "Evening reception for 300 guests")]
    pub details: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DemoRequestResponse {
    pub id: i64,
    pub name: String,
    pub mobile: String,
    pub event_type: String,
    pub location: String,
    pub event_date: Option<String>,
    pub details: Option<String>,
    pub whatsapp_link: String,
    pub created_at: DateTime<Utc>,
}

impl DemoRequestResponse {
    pub fn from_model(m: demo_requests::Model, whatsapp_link: String) -> Self {
        Self {
            id: m.id,
            name: m.name,
            mobile: m.mobile,
            event_type: m.event_type,
            location: m.location,
            event_date: m.event_date.map(|d| d.format("%Y-%m-%d").to_string()),
            details: m.details,
            whatsapp_link,
            created_at: m.created_at.unwrap_or_else(Utc::now),
        }
    }
}
