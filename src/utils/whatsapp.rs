use crate::entities::demo_request_entity as demo_requests;
use crate::error::{AppError, AppResult};
use reqwest::Url;

/// 拼出发给商家 WhatsApp 的预约消息文本
pub fn build_demo_message(m: &demo_requests::Model) -> String {
    let event_date = m
        .event_date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();
    let details = m.details.clone().unwrap_or_default();

    format!(
        "\n\
         📌 *New Demo Booking Request*\n\
         ----------------------------------\n\
         👤 *Name:* {}\n\
         📞 *Mobile:* {}\n\
         💒 *Event Type:* {}\n\
         📍 *Location:* {}\n\
         📅 *Event Date:* {}\n\
         📝 *Details:* {}\n\
         ----------------------------------\n\
         Zecardia Events - Demo Booking Form\n",
        m.name, m.mobile, m.event_type, m.location, event_date, details
    )
}

/// 生成预填消息的 wa.me 链接，消息文本走 URL 编码
pub fn build_demo_link(business_number: &str, m: &demo_requests::Model) -> AppResult<String> {
    let message = build_demo_message(m);
    let url = Url::parse_with_params(
        &format!("https://wa.me/{}", business_number),
        &[("text", message.as_str())],
    )
    .map_err(|e| AppError::InternalError(format!("Failed to build WhatsApp link: {}", e)))?;

    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn request() -> demo_requests::Model {
        demo_requests::Model {
            id: 1,
            name: "Priya Sharma".to_string(),
            mobile: "9876543210".to_string(),
            event_type: "Marriage".to_string(),
            location: "Chennai".to_string(),
            event_date: NaiveDate::from_ymd_opt(2026, 11, 20),
            details: Some("Evening reception".to_string()),
            created_at: None,
        }
    }

    #[test]
    fn test_build_demo_message() {
        let message = build_demo_message(&request());
        assert!(message.contains("👤 *Name:* Priya Sharma"));
        assert!(message.contains("📅 *Event Date:* 2026-11-20"));
        assert!(message.contains("📝 *Details:* Evening reception"));
        assert!(message.ends_with("Zecardia Events - Demo Booking Form\n"));
    }

    #[test]
    fn test_missing_date_and_details_render_empty() {
        let mut m = request();
        m.event_date = None;
        m.details = None;

        let message = build_demo_message(&m);
        assert!(message.contains("📅 *Event Date:* \n"));
        assert!(message.contains("📝 *Details:* \n"));
    }

    #[test]
    fn test_build_demo_link_encodes_message() {
        let link = build_demo_link("917338745684", &request()).unwrap();
        assert!(link.starts_with("https://wa.me/917338745684?text="));
        assert!(link.contains("New+Demo+Booking+Request"));
        // 换行要经过编码
        assert!(link.contains("%0A"));
        assert!(!link.contains('\n'));
    }
}
