use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema, DeriveActiveEnum, EnumIter,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "sim_provider")]
#[serde(rename_all = "snake_case")]
pub enum SimProvider {
    #[sea_orm(string_value = "vi")]
    Vi,
    #[sea_orm(string_value = "airtel")]
    Airtel,
    #[sea_orm(string_value = "jio")]
    Jio,
    #[sea_orm(string_value = "bsnl")]
    Bsnl,
}

impl std::fmt::Display for SimProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimProvider::Vi => write!(f, "VI"),
            SimProvider::Airtel => write!(f, "AIRTEL"),
            SimProvider::Jio => write!(f, "JIO"),
            SimProvider::Bsnl => write!(f, "BSNL"),
        }
    }
}

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema, DeriveActiveEnum, EnumIter,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "sim_status")]
#[serde(rename_all = "snake_case")]
pub enum SimStatus {
    #[sea_orm(string_value = "available")]
    Available,
    #[sea_orm(string_value = "used")]
    Used,
}

impl std::fmt::Display for SimStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimStatus::Available => write!(f, "available"),
            SimStatus::Used => write!(f, "used"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "sim_cards")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub sim_number: String,
    pub provider: Option<SimProvider>, // Null for SIMs auto-registered from a dispatch
    pub status: SimStatus,
    pub plan_details: Option<String>,
    pub entry_date: Option<NaiveDate>,
    pub used_in_serial: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
