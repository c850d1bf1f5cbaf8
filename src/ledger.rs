//! 预订台账：套餐、支付与派生支付状态之间的规则。
//!
//! 这里的函数都是纯函数，不触碰数据库，服务层在任何写入之前先走这里。

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::{PackageTier, payment_entity as payments};
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PaymentKind {
    Advance,
    Full,
}

impl PaymentKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "advance" => Some(PaymentKind::Advance),
            "full" => Some(PaymentKind::Full),
            _ => None,
        }
    }
}

impl std::fmt::Display for PaymentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentKind::Advance => write!(f, "advance"),
            PaymentKind::Full => write!(f, "full"),
        }
    }
}

/// 预订表单，客户端原样提交，未经任何校验
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookingForm {
    #[schema(example = "Priya Sharma")]
    pub name: String,
    #[schema(example = "9876543210")]
    pub phone: String,
    #[schema(example = "Chennai")]
    pub location: String,
    #[schema(example = "Marriage")]
    pub event_type: String,
    #[schema(example = "2026-11-20")]
    pub event_date: Option<NaiveDate>,
    #[schema(example = "Standard")]
    pub package_type: String,
    #[schema(example = "advance")]
    pub payment_type: String,
    #[schema(example = 3000)]
    pub amount: i64,
}

/// 校验通过后的规范化提交记录，可直接落库
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingSubmission {
    pub name: String,
    pub phone: String,
    pub location: String,
    pub event_type: String,
    pub event_date: Option<NaiveDate>,
    pub package: PackageTier,
    pub payment_type: PaymentKind,
    pub amount: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    FullyPaid,
    PartiallyPaid,
}

/// 按预订的支付行实时算出的汇总，从不落库
#[derive(Debug, Clone, Serialize, PartialEq, Eq, ToSchema)]
pub struct PaymentSummary {
    pub total_paid: i64,
    pub total_amount: i64,
    pub remaining: i64,
}

impl PaymentSummary {
    /// remaining <= 0 即已付清，列表页和详情页都用这一个判断
    pub fn status(&self) -> PaymentStatus {
        if self.remaining <= 0 {
            PaymentStatus::FullyPaid
        } else {
            PaymentStatus::PartiallyPaid
        }
    }
}

/// 校验预订提交。
///
/// 全部字段校验完才允许第一次存储调用，校验顺序：
/// 必填字段、套餐、支付类型、金额、全款/预付金额规则。
pub fn validate_booking_submission(form: &BookingForm) -> AppResult<BookingSubmission> {
    let name = form.name.trim();
    let phone = form.phone.trim();
    let location = form.location.trim();
    let event_type = form.event_type.trim();
    let package_type = form.package_type.trim();

    for (value, field) in [
        (name, "name"),
        (phone, "phone"),
        (location, "location"),
        (event_type, "event_type"),
        (package_type, "package_type"),
    ] {
        if value.is_empty() {
            return Err(AppError::MissingField(field.to_string()));
        }
    }

    let package = PackageTier::from_name(package_type)
        .ok_or_else(|| AppError::InvalidPackage(package_type.to_string()))?;

    let payment_type =
        PaymentKind::from_name(form.payment_type.trim()).ok_or(AppError::MissingPaymentType)?;

    if form.amount <= 0 {
        return Err(AppError::InvalidAmount);
    }

    let price = package.price();
    match payment_type {
        PaymentKind::Full => {
            if form.amount != price {
                return Err(AppError::AmountMismatch { expected: price });
            }
        }
        PaymentKind::Advance => {
            // 预付必须严格小于全价，等于全价就该走 full
            if form.amount >= price {
                return Err(AppError::AdvanceTooHigh);
            }
        }
    }

    Ok(BookingSubmission {
        name: name.to_string(),
        phone: phone.to_string(),
        location: location.to_string(),
        event_type: event_type.to_string(),
        event_date: form.event_date,
        package,
        payment_type,
        amount: form.amount,
    })
}

/// 汇总一笔预订的支付情况。
///
/// total_paid 为支付金额的精确整数和；remaining 允许为负，
/// 多付要可见而不是被悄悄抹平。
pub fn payment_summary(package: &PackageTier, payments: &[payments::Model]) -> PaymentSummary {
    let total_paid: i64 = payments.iter().map(|p| p.amount).sum();
    let total_amount = package.price();

    PaymentSummary {
        total_paid,
        total_amount,
        remaining: total_amount - total_paid,
    }
}

/// 追加支付只检查金额为正，不检查是否超过剩余额度
pub fn validate_top_up_amount(amount: i64) -> AppResult<()> {
    if amount <= 0 {
        return Err(AppError::InvalidAmount);
    }
    Ok(())
}

/// 所有读写预订/支付的操作在第一次存储变更之前都必须先过这一关
pub fn ensure_owner(owner_id: i64, caller_id: i64) -> AppResult<()> {
    if owner_id != caller_id {
        return Err(AppError::Forbidden);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_form() -> BookingForm {
        BookingForm {
            name: "Priya Sharma".to_string(),
            phone: "9876543210".to_string(),
            location: "Chennai".to_string(),
            event_type: "Marriage".to_string(),
            event_date: None,
            package_type: "Standard".to_string(),
            payment_type: "advance".to_string(),
            amount: 3000,
        }
    }

    fn payment(amount: i64) -> payments::Model {
        payments::Model {
            id: 0,
            booking_id: 1,
            user_id: 1,
            amount,
            razorpay_order_id: None,
            razorpay_payment_id: None,
            status: None,
            created_at: None,
        }
    }

    #[test]
    fn test_full_payment_requires_exact_price() {
        for (tier, price) in [("Standard", 5000), ("Premium", 10000), ("Royal", 15000)] {
            let mut form = base_form();
            form.package_type = tier.to_string();
            form.payment_type = "full".to_string();

            form.amount = price;
            assert!(validate_booking_submission(&form).is_ok());

            // 偏高偏低都不行
            for bad in [price - 1, price + 1, 1, price * 2] {
                form.amount = bad;
                let err = validate_booking_submission(&form).unwrap_err();
                assert!(matches!(err, AppError::AmountMismatch { expected } if expected == price));
            }
        }
    }

    #[test]
    fn test_advance_must_be_strictly_below_price() {
        for (tier, price) in [("Standard", 5000), ("Premium", 10000), ("Royal", 15000)] {
            let mut form = base_form();
            form.package_type = tier.to_string();
            form.payment_type = "advance".to_string();

            for ok in [1, price / 2, price - 1] {
                form.amount = ok;
                assert!(validate_booking_submission(&form).is_ok());
            }

            for too_high in [price, price + 1, price * 3] {
                form.amount = too_high;
                let err = validate_booking_submission(&form).unwrap_err();
                assert!(matches!(err, AppError::AdvanceTooHigh));
            }

            for non_positive in [0, -1, -price] {
                form.amount = non_positive;
                let err = validate_booking_submission(&form).unwrap_err();
                assert!(matches!(err, AppError::InvalidAmount));
            }
        }
    }

    #[test]
    fn test_missing_fields_are_named() {
        let cases: [(&str, fn(&mut BookingForm)); 5] = [
            ("name", |f| f.name = "".to_string()),
            ("phone", |f| f.phone = "  ".to_string()),
            ("location", |f| f.location = "".to_string()),
            ("event_type", |f| f.event_type = "\t".to_string()),
            ("package_type", |f| f.package_type = "".to_string()),
        ];

        for (field, clear) in cases {
            let mut form = base_form();
            clear(&mut form);
            let err = validate_booking_submission(&form).unwrap_err();
            assert!(matches!(err, AppError::MissingField(f) if f == field));
        }
    }

    #[test]
    fn test_unknown_package_rejected() {
        let mut form = base_form();
        form.package_type = "Platinum".to_string();
        let err = validate_booking_submission(&form).unwrap_err();
        assert!(matches!(err, AppError::InvalidPackage(name) if name == "Platinum"));

        // 大小写不一致也不认
        form.package_type = "standard".to_string();
        assert!(matches!(
            validate_booking_submission(&form).unwrap_err(),
            AppError::InvalidPackage(_)
        ));
    }

    #[test]
    fn test_payment_type_must_be_advance_or_full() {
        let mut form = base_form();
        for bad in ["", "installment", "FULL", "Advance"] {
            form.payment_type = bad.to_string();
            let err = validate_booking_submission(&form).unwrap_err();
            assert!(matches!(err, AppError::MissingPaymentType));
        }
    }

    #[test]
    fn test_submission_is_normalized() {
        let mut form = base_form();
        form.name = "  Priya Sharma ".to_string();
        form.location = " Chennai\t".to_string();

        let submission = validate_booking_submission(&form).unwrap();
        assert_eq!(submission.name, "Priya Sharma");
        assert_eq!(submission.location, "Chennai");
        assert_eq!(submission.package, PackageTier::Standard);
        assert_eq!(submission.payment_type, PaymentKind::Advance);
        assert_eq!(submission.amount, 3000);
    }

    #[test]
    fn test_summary_is_order_independent() {
        let package = PackageTier::Premium;
        let a = [payment(2000), payment(1500), payment(500)];
        let b = [payment(500), payment(2000), payment(1500)];
        let c = [payment(1500), payment(500), payment(2000)];

        let sa = payment_summary(&package, &a);
        let sb = payment_summary(&package, &b);
        let sc = payment_summary(&package, &c);

        assert_eq!(sa.total_paid, 4000);
        assert_eq!(sa, sb);
        assert_eq!(sb, sc);
    }

    #[test]
    fn test_summary_is_idempotent() {
        let package = PackageTier::Standard;
        let list = [payment(2000), payment(1000)];

        let first = payment_summary(&package, &list);
        let second = payment_summary(&package, &list);
        assert_eq!(first, second);
        assert_eq!(first.total_paid, 3000);
        assert_eq!(first.remaining, 2000);
    }

    #[test]
    fn test_status_follows_remaining() {
        for (remaining, expected) in [
            (0, PaymentStatus::FullyPaid),
            (-100, PaymentStatus::FullyPaid),
            (1, PaymentStatus::PartiallyPaid),
            (5000, PaymentStatus::PartiallyPaid),
        ] {
            let summary = PaymentSummary {
                total_paid: 0,
                total_amount: 0,
                remaining,
            };
            assert_eq!(summary.status(), expected);
        }
    }

    #[test]
    fn test_advance_then_top_up_reaches_fully_paid() {
        // Standard 5000，预付 3000，再补 2000
        let mut form = base_form();
        form.amount = 3000;
        let submission = validate_booking_submission(&form).unwrap();
        assert_eq!(submission.payment_type, PaymentKind::Advance);

        let summary = payment_summary(&submission.package, &[payment(3000), payment(2000)]);
        assert_eq!(summary.total_paid, 5000);
        assert_eq!(summary.remaining, 0);
        assert_eq!(summary.status(), PaymentStatus::FullyPaid);
    }

    #[test]
    fn test_premium_full_payment_of_9000_rejected() {
        let mut form = base_form();
        form.package_type = "Premium".to_string();
        form.payment_type = "full".to_string();
        form.amount = 9000;

        let err = validate_booking_submission(&form).unwrap_err();
        assert!(matches!(err, AppError::AmountMismatch { expected: 10000 }));
    }

    #[test]
    fn test_royal_advance_equal_to_price_rejected() {
        let mut form = base_form();
        form.package_type = "Royal".to_string();
        form.payment_type = "advance".to_string();
        form.amount = 15000;

        let err = validate_booking_submission(&form).unwrap_err();
        assert!(matches!(err, AppError::AdvanceTooHigh));
    }

    #[test]
    fn test_two_payments_settle_standard_booking_in_any_order() {
        let package = PackageTier::Standard;

        let forward = payment_summary(&package, &[payment(2000), payment(3000)]);
        let backward = payment_summary(&package, &[payment(3000), payment(2000)]);

        assert_eq!(forward.total_paid, 5000);
        assert_eq!(forward.remaining, 0);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_overpayment_stays_visible() {
        let package = PackageTier::Standard;
        let summary = payment_summary(&package, &[payment(5000), payment(1000)]);

        // 不钳制为零
        assert_eq!(summary.remaining, -1000);
        assert_eq!(summary.status(), PaymentStatus::FullyPaid);
    }

    #[test]
    fn test_top_up_amount_must_be_positive() {
        assert!(validate_top_up_amount(1).is_ok());
        assert!(validate_top_up_amount(20000).is_ok());
        assert!(matches!(
            validate_top_up_amount(0).unwrap_err(),
            AppError::InvalidAmount
        ));
        assert!(matches!(
            validate_top_up_amount(-500).unwrap_err(),
            AppError::InvalidAmount
        ));
    }

    #[test]
    fn test_owner_check() {
        assert!(ensure_owner(42, 42).is_ok());
        assert!(matches!(
            ensure_owner(42, 7).unwrap_err(),
            AppError::Forbidden
        ));
    }

    #[test]
    fn test_package_prices() {
        assert_eq!(PackageTier::Standard.price(), 5000);
        assert_eq!(PackageTier::Premium.price(), 10000);
        assert_eq!(PackageTier::Royal.price(), 15000);
    }
}
