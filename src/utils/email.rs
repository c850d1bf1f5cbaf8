use crate::error::{AppError, AppResult};
use regex::Regex;

/// 验证邮箱格式
pub fn validate_email(email: &str) -> AppResult<()> {
    let email_regex = Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap();

    if !email_regex.is_match(email) {
        return Err(AppError::ValidationError(
            "Enter a valid email address".to_string(),
        ));
    }

    Ok(())
}

/// 规范化邮箱，去空格并转小写后再存储和比较
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("priya@example.com").is_ok());
        assert!(validate_email("priya.sharma+wed@events.co.in").is_ok());
        assert!(validate_email("priya@example").is_err());
        assert!(validate_email("priya example.com").is_err());
        assert!(validate_email("@example.com").is_err());
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Priya@Example.COM "), "priya@example.com");
        assert_eq!(normalize_email("priya@example.com"), "priya@example.com");
    }
}
