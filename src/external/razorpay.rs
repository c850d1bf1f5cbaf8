use crate::config::RazorpayConfig;
use crate::error::{AppError, AppResult};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// 卢比转派萨，Razorpay 接口金额一律用派萨
pub fn rupees_to_paise(rupees: i64) -> i64 {
    rupees * 100
}

/// 派萨转卢比，台账内部金额一律用卢比
pub fn paise_to_rupees(paise: i64) -> i64 {
    paise / 100
}

#[derive(Debug, Serialize)]
struct CreateOrderBody {
    amount: i64,
    currency: String,
    receipt: String,
}

#[derive(Debug, Deserialize)]
pub struct RazorpayOrder {
    pub id: String,
    pub amount: i64,
    pub currency: String,
    pub receipt: Option<String>,
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct RazorpayPayment {
    pub id: String,
    pub order_id: Option<String>,
    pub amount: i64,
    pub currency: String,
    pub status: String,
    pub method: Option<String>,
}

#[derive(Clone)]
pub struct RazorpayService {
    client: Client,
    config: RazorpayConfig,
}

impl RazorpayService {
    pub fn new(config: RazorpayConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// 前端唤起结账弹窗需要公开的 key_id
    pub fn key_id(&self) -> &str {
        &self.config.key_id
    }

    /// 创建 Razorpay 订单，金额单位为派萨
    pub async fn create_order(&self, amount_paise: i64, receipt: &str) -> AppResult<RazorpayOrder> {
        let url = format!("{}/v1/orders", self.config.base_url);

        let body = CreateOrderBody {
            amount: amount_paise,
            currency: "INR".to_string(),
            receipt: receipt.to_string(),
        };

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.config.key_id, Some(&self.config.key_secret))
            .json(&body)
            .send()
            .await?;

        if response.status().is_success() {
            let order: RazorpayOrder = response.json().await?;
            Ok(order)
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            Err(AppError::ExternalApiError(format!(
                "Failed to create payment order: {}",
                error_text
            )))
        }
    }

    /// 查询支付详情，确认支付时用服务端查询结果，不信任前端回传的金额和状态
    pub async fn fetch_payment(&self, payment_id: &str) -> AppResult<RazorpayPayment> {
        let url = format!("{}/v1/payments/{}", self.config.base_url, payment_id);

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.config.key_id, Some(&self.config.key_secret))
            .send()
            .await?;

        if response.status().is_success() {
            let payment: RazorpayPayment = response.json().await?;
            Ok(payment)
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            Err(AppError::ExternalApiError(format!(
                "Failed to fetch payment details: {}",
                error_text
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_razorpay_service_creation() {
        let config = RazorpayConfig {
            key_id: "rzp_test_123".to_string(),
            key_secret: "secret_123".to_string(),
            base_url: "https://api.razorpay.com".to_string(),
        };
        let service = RazorpayService::new(config);
        assert_eq!(service.key_id(), "rzp_test_123");
    }

    #[test]
    fn test_rupees_paise_conversion() {
        assert_eq!(rupees_to_paise(5000), 500_000);
        assert_eq!(rupees_to_paise(1), 100);
        assert_eq!(paise_to_rupees(500_000), 5000);
        assert_eq!(paise_to_rupees(rupees_to_paise(15000)), 15000);
    }
}
