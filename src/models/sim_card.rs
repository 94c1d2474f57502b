use crate::entities::{SimProvider, SimStatus, sim_card_entity as sims};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateSimRequest {
    #[schema(example = "8991000912345678")]
    pub sim_number: String,
    pub provider: SimProvider,
    #[schema(example = "1GB/day, 24 months")]
    pub plan_details: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SimResponse {
    pub id: i64,
    pub sim_number: String,
    pub provider: Option<SimProvider>,
    pub status: SimStatus,
    pub plan_details: Option<String>,
    pub entry_date: Option<NaiveDate>,
    pub used_in_serial: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<sims::Model> for SimResponse {
    fn from(m: sims::Model) -> Self {
        Self {
            id: m.id,
            sim_number: m.sim_number,
            provider: m.provider,
            status: m.status,
            plan_details: m.plan_details,
            entry_date: m.entry_date,
            used_in_serial: m.used_in_serial,
            created_at: m.created_at.unwrap_or_else(Utc::now),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SimQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub status: Option<SimStatus>,
    pub provider: Option<SimProvider>,
}
