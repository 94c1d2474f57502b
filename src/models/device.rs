use crate::entities::{Connectivity, device_entity as devices};
use crate::utils::renewal::{LifecycleStatus, classify_status};
use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Stock product lines; anything else is treated as a custom product.
pub const BASE_PRODUCT_LIST: &[&str] = &["DWLR", "FM", "OCFM", "ARG", "LM", "LC", "Custom"];

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateDispatchRequest {
    #[schema(example = "DWLR-2024-0153")]
    pub serial_number: String,
    pub oem_serial: Option<String>,
    #[schema(example = "DWLR")]
    pub product_name: String,
    pub model: Option<String>,
    pub connectivity: Connectivity,
    /// YYYY-MM-DD; malformed dates degrade to null rather than failing
    #[schema(example = "2024-01-10")]
    pub installation_date: Option<String>,
    /// YYYY-MM-DD; absent or malformed leaves the renewal date unknown
    #[schema(example = "2024-01-15")]
    pub activation_date: Option<String>,
    #[schema(example = 12)]
    pub validity_months: i32,
    pub device_uid: Option<String>,
    pub sim_number: Option<String>,
    #[schema(example = "Acme Waterworks")]
    pub end_user: String,
    pub channel_partner: Option<String>,
    pub industry_category: Option<String>,
    pub cable_length: Option<String>,
    pub sim_provider: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeviceResponse {
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
    /// Derived from `renewal_date` at read time; `unknown` means the
    /// activation date is missing or was malformed.
    pub status: LifecycleStatus,
    pub device_uid: Option<String>,
    pub sim_number: Option<String>,
    pub end_user: String,
    pub channel_partner: Option<String>,
    pub industry_category: Option<String>,
    pub cable_length: Option<String>,
    pub sim_provider: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl DeviceResponse {
    /// `today` is explicit so classification stays deterministic in tests.
    pub fn with_today(m: devices::Model, today: NaiveDate) -> Self {
        Self {
            id: m.id,
            serial_number: m.serial_number,
            oem_serial: m.oem_serial,
            product_name: m.product_name,
            model: m.model,
            connectivity: m.connectivity,
            installation_date: m.installation_date,
            activation_date: m.activation_date,
            validity_months: m.validity_months,
            status: classify_status(m.renewal_date, today),
            renewal_date: m.renewal_date,
            device_uid: m.device_uid,
            sim_number: m.sim_number,
            end_user: m.end_user,
            channel_partner: m.channel_partner,
            industry_category: m.industry_category,
            cable_length: m.cable_length,
            sim_provider: m.sim_provider,
            created_at: m.created_at.unwrap_or_else(Utc::now),
        }
    }
}

impl From<devices::Model> for DeviceResponse {
    fn from(m: devices::Model) -> Self {
        Self::with_today(m, Local::now().date_naive())
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct DeviceQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub status: Option<LifecycleStatus>,
    pub product_name: Option<String>,
    pub end_user: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DispatchOptionsResponse {
    pub products: Vec<String>,
    pub connectivity: Vec<String>,
    pub sim_providers: Vec<String>,
}
