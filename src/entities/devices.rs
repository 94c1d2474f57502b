use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema, DeriveActiveEnum, EnumIter,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "connectivity")]
pub enum Connectivity {
    #[sea_orm(string_value = "4g")]
    #[serde(rename = "4g")]
    FourG,
    #[sea_orm(string_value = "2g")]
    #[serde(rename = "2g")]
    TwoG,
    #[sea_orm(string_value = "nb_iot")]
    #[serde(rename = "nb_iot")]
    NbIot,
}

impl std::fmt::Display for Connectivity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Connectivity::FourG => write!(f, "4G"),
            Connectivity::TwoG => write!(f, "2G"),
            Connectivity::NbIot => write!(f, "NB-IoT"),
        }
    }
}

/// A dispatched device. `renewal_date` is derived from `activation_date`
/// plus `validity_months`; lifecycle status is never stored and is
/// recomputed from `renewal_date` on every read.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "devices")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub serial_number: String,
    pub oem_serial: Option<String>,
    pub product_name: String,
    pub model: Option<String>,
    pub connectivity: Connectivity,
    pub installation_date: Option<NaiveDate>,
    pub activation_date: Option<NaiveDate>,
    pub validity_months: i32,
    pub renewal_date: Option<NaiveDate>,
    pub device_uid: Option<String>,
    pub sim_number: Option<String>,
    pub end_user: String,
    pub channel_partner: Option<String>,
    pub industry_category: Option<String>,
    pub cable_length: Option<String>,
    pub sim_provider: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
