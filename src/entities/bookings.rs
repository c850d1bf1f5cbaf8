use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 套餐价格表。价格只存在这里，预订行不冗余存储价格。
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema, DeriveActiveEnum, EnumIter,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "package_tier")]
pub enum PackageTier {
    #[sea_orm(string_value = "Standard")]
    Standard,
    #[sea_orm(string_value = "Premium")]
    Premium,
    #[sea_orm(string_value = "Royal")]
    Royal,
}

impl PackageTier {
    /// 套餐全价（整数卢比）
    pub fn price(&self) -> i64 {
        match self {
            PackageTier::Standard => 5000,
            PackageTier::Premium => 10000,
            PackageTier::Royal => 15000,
        }
    }

    /// 按客户端提交的套餐名查表，大小写必须完全一致
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Standard" => Some(PackageTier::Standard),
            "Premium" => Some(PackageTier::Premium),
            "Royal" => Some(PackageTier::Royal),
            _ => None,
        }
    }
}

impl std::fmt::Display for PackageTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PackageTier::Standard => write!(f, "Standard"),
            PackageTier::Premium => write!(f, "Premium"),
            PackageTier::Royal => write!(f, "Royal"),
        }
    }
}

#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema, DeriveActiveEnum, EnumIter,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "booking_status")]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingStatus::Active => write!(f, "active"),
            BookingStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub phone: String,
    pub location: String,
    pub event_type: String,
    pub event_date: Option<NaiveDate>,
    pub package: PackageTier,
    pub status: BookingStatus,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
