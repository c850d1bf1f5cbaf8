use crate::entities::PackageTier;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 套餐目录条目，价格取自台账的静态价目表
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PackageInfo {
    pub name: String,
    pub price: i64,
    pub offer: String,
    pub features: Vec<String>,
}

/// 三档套餐的展示内容，价格之外的文案来自营销页
pub fn package_catalogue() -> Vec<PackageInfo> {
    vec![
        PackageInfo {
            name: PackageTier::Standard.to_string(),
            price: PackageTier::Standard.price(),
            offer: "10% OFF".to_string(),
            features: vec![
                "Basic Decoration".to_string(),
                "Photography".to_string(),
                "Food Catering".to_string(),
                "Guest Management".to_string(),
            ],
        },
        PackageInfo {
            name: PackageTier::Premium.to_string(),
            price: PackageTier::Premium.price(),
            offer: "BEST SELLER".to_string(),
            features: vec![
                "Designer Stage".to_string(),
                "Premium Catering".to_string(),
                "Drone + Cinematic Video".to_string(),
                "Theme Decoration".to_string(),
            ],
        },
        PackageInfo {
            name: PackageTier::Royal.to_string(),
            price: PackageTier::Royal.price(),
            offer: "LIMITED OFFER".to_string(),
            features: vec![
                "Grand Stage Setup".to_string(),
                "Elite Buffet".to_string(),
                "3-Day Full Team".to_string(),
                "Luxury Decor + DJ Show".to_string(),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_prices_match_ledger_table() {
        let catalogue = package_catalogue();
        assert_eq!(catalogue.len(), 3);

        for info in catalogue {
            let tier = PackageTier::from_name(&info.name).unwrap();
            assert_eq!(info.price, tier.price());
            assert_eq!(info.features.len(), 4);
        }
    }
}
