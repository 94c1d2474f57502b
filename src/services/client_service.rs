use crate::entities::client_entity as clients;
use crate::error::{AppError, AppResult};
use crate::models::*;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

#[derive(Clone)]
pub struct ClientService {
    pool: DatabaseConnection,
}

impl ClientService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 新增客户
    pub async fn create_client(&self, req: CreateClientRequest) -> AppResult<ClientResponse> {
        let name = req.client_name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::ValidationError(
                "Client name is required".to_string(),
            ));
        }

        let existing = clients::Entity::find()
            .filter(clients::Column::ClientName.eq(name.clone()))
            .one(&self.pool)
            .await?;
        if existing.is_some() {
            return Err(AppError::ValidationError(format!(
                "Client {name} already exists"
            )));
        }

        let client = clients::ActiveModel {
            client_name: Set(name),
            contact_person: Set(req.contact_person),
            phone: Set(req.phone),
            email: Set(req.email),
            address: Set(req.address),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        Ok(ClientResponse::from(client))
    }

    /// 获取客户列表（分页）
    pub async fn list_clients(
        &self,
        params: &PaginationParams,
    ) -> AppResult<PaginatedResponse<ClientResponse>> {
        #[derive(Debug, sea_orm::FromQueryResult)]
        struct CountRow {
            count: i64,
        }
        let total = clients::Entity::find()
            .select_only()
            .column_as(Expr::val(1).count(), "count")
            .into_model::<CountRow>()
            .one(&self.pool)
            .await?
            .map(|r| r.count)
            .unwrap_or(0);

        let rows = clients::Entity::find()
            .order_by_asc(clients::Column::ClientName)
            .limit(params.get_limit() as u64)
            .offset(params.get_offset() as u64)
            .all(&self.pool)
            .await?;
        let items: Vec<ClientResponse> = rows.into_iter().map(ClientResponse::from).collect();

        Ok(PaginatedResponse::new(items, params, total))
    }

    /// 更新客户资料（部分字段）
    pub async fn update_client(
        &self,
        client_id: i64,
        req: UpdateClientRequest,
    ) -> AppResult<ClientResponse> {
        if req.client_name.is_none()
            && req.contact_person.is_none()
            && req.phone.is_none()
            && req.email.is_none()
            && req.address.is_none()
        {
            return Err(AppError::ValidationError("No fields to update".to_string()));
        }

        if let Some(name) = &req.client_name {
            let name = name.trim();
            if name.is_empty() {
                return Err(AppError::ValidationError(
                    "Client name cannot be blank".to_string(),
                ));
            }
            // renaming onto another client's name would merge two masters
            let clash = clients::Entity::find()
                .filter(clients::Column::ClientName.eq(name.to_string()))
                .filter(clients::Column::Id.ne(client_id))
                .one(&self.pool)
                .await?;
            if clash.is_some() {
                return Err(AppError::ValidationError(format!(
                    "Client {name} already exists"
                )));
            }
        }

        let mut model = clients::Entity::find_by_id(client_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Client not found".to_string()))?
            .into_active_model();
        if let Some(name) = &req.client_name {
            model.client_name = Set(name.trim().to_string());
        }
        if let Some(contact_person) = req.contact_person {
            model.contact_person = Set(Some(contact_person));
        }
        if let Some(phone) = req.phone {
            model.phone = Set(Some(phone));
        }
        if let Some(email) = req.email {
            model.email = Set(Some(email));
        }
        if let Some(address) = req.address {
            model.address = Set(Some(address));
        }
        let updated = model.update(&self.pool).await?;

        Ok(ClientResponse::from(updated))
    }
}
