//! 统一响应信封的数据结构
//!
//! 成功时 handler 直接用 `json!({"success": true, "data": ...})`，
//! 失败时由 `AppError::error_response` 输出 `{"success": false, "error": ApiError}`。

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}
