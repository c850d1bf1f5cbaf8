use rand::Rng;

/// 生成 Razorpay 订单的 receipt 编号，格式 rcpt_{booking_id}_{8位随机}
pub fn generate_receipt_id(booking_id: i64) -> String {
    let chars = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    let mut rng = rand::thread_rng();

    let suffix: String = (0..8)
        .map(|_| chars[rng.gen_range(0..chars.len())] as char)
        .collect();

    format!("rcpt_{}_{}", booking_id, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_receipt_id() {
        let receipt = generate_receipt_id(42);
        assert!(receipt.starts_with("rcpt_42_"));

        let suffix = receipt.strip_prefix("rcpt_42_").unwrap();
        assert_eq!(suffix.len(), 8);
        assert!(suffix.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));

        // Razorpay 限制 receipt 不超过 40 字符
        assert!(receipt.len() <= 40);
    }

    #[test]
    fn test_generate_multiple_receipts_are_different() {
        let r1 = generate_receipt_id(1);
        let r2 = generate_receipt_id(1);
        // 虽然理论上可能相同，但概率很小
        assert!(r1.starts_with("rcpt_1_"));
        assert!(r2.starts_with("rcpt_1_"));
    }
}
