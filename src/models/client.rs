use crate::entities::client_entity as clients;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateClientRequest {
    #[schema(example = "Acme Waterworks")]
    pub client_name: String,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateClientRequest {
    pub client_name: Option<String>,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ClientResponse {
    pub id: i64,
    pub client_name: String,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<clients::Model> for ClientResponse {
    fn from(m: clients::Model) -> Self {
        Self {
            id: m.id,
            client_name: m.client_name,
            contact_person: m.contact_person,
            phone: m.phone,
            email: m.email,
            address: m.address,
            created_at: m.created_at.unwrap_or_else(Utc::now),
        }
    }
}
