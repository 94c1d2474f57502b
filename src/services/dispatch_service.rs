use crate::entities::{
    SimStatus, client_entity as clients, device_entity as devices, sim_card_entity as sims,
};
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::utils::renewal::{compute_renewal_date, parse_flexible_date};
use crate::utils::{normalize_serial, normalize_sim_number, validate_serial_number, validate_sim_number};
use chrono::Local;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, QuerySelect, Select, Set, TransactionTrait,
};

#[derive(Clone)]
pub struct DispatchService {
    pool: DatabaseConnection,
}

impl DispatchService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 创建新的发货记录
    ///
    /// Computes the renewal date from the activation date, registers the
    /// end user as a client when unseen, and links the dispatched SIM
    /// (inventory SIMs flip to used; unknown SIM numbers are registered
    /// directly as used). All writes share one transaction.
    pub async fn create_dispatch(&self, req: CreateDispatchRequest) -> AppResult<DeviceResponse> {
        let serial = normalize_serial(&req.serial_number);
        validate_serial_number(&serial)?;

        let end_user = req.end_user.trim().to_string();
        if end_user.is_empty() {
            return Err(AppError::ValidationError("End user is required".to_string()));
        }
        let product_name = req.product_name.trim().to_string();
        if product_name.is_empty() {
            return Err(AppError::ValidationError(
                "Product name is required".to_string(),
            ));
        }

        let existing = devices::Entity::find()
            .filter(devices::Column::SerialNumber.eq(serial.clone()))
            .one(&self.pool)
            .await?;
        if existing.is_some() {
            return Err(AppError::ValidationError(format!(
                "Serial number {serial} already exists"
            )));
        }

        let sim_number = match req.sim_number.as_deref() {
            Some(raw) if !raw.trim().is_empty() => {
                let normalized = normalize_sim_number(raw);
                validate_sim_number(&normalized)?;
                Some(normalized)
            }
            _ => None,
        };

        // malformed dates degrade to null instead of failing the dispatch;
        // an unparseable activation date leaves the renewal date unknown
        let installation_date = req.installation_date.as_deref().and_then(parse_flexible_date);
        let activation_date = req.activation_date.as_deref().and_then(parse_flexible_date);
        let renewal_date = compute_renewal_date(req.activation_date.as_deref(), req.validity_months);

        let txn = self.pool.begin().await?;

        let device = devices::ActiveModel {
            serial_number: Set(serial.clone()),
            oem_serial: Set(req.oem_serial),
            product_name: Set(product_name),
            model: Set(req.model),
            connectivity: Set(req.connectivity),
            installation_date: Set(installation_date),
            activation_date: Set(activation_date),
            validity_months: Set(req.validity_months),
            renewal_date: Set(renewal_date),
            device_uid: Set(req.device_uid),
            sim_number: Set(sim_number.clone()),
            end_user: Set(end_user.clone()),
            channel_partner: Set(req.channel_partner),
            industry_category: Set(req.industry_category),
            cable_length: Set(req.cable_length),
            sim_provider: Set(req.sim_provider),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        // first dispatch for an unseen end user also creates the client master row
        let known_client = clients::Entity::find()
            .filter(clients::Column::ClientName.eq(end_user.clone()))
            .one(&txn)
            .await?;
        if known_client.is_none() {
            clients::ActiveModel {
                client_name: Set(end_user.clone()),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
            log::info!("Registered new client {end_user} from dispatch {serial}");
        }

        if let Some(ref number) = sim_number {
            match sims::Entity::find()
                .filter(sims::Column::SimNumber.eq(number.clone()))
                .one(&txn)
                .await?
            {
                Some(card) => {
                    if card.status == SimStatus::Used
                        && card.used_in_serial.as_deref() != Some(serial.as_str())
                    {
                        return Err(AppError::ValidationError(format!(
                            "SIM {number} is already used in another device"
                        )));
                    }
                    let mut am = card.into_active_model();
                    am.status = Set(SimStatus::Used);
                    am.used_in_serial = Set(Some(serial.clone()));
                    am.update(&txn).await?;
                }
                None => {
                    // manually entered SIM, not in inventory yet
                    sims::ActiveModel {
                        sim_number: Set(number.clone()),
                        status: Set(SimStatus::Used),
                        entry_date: Set(Some(Local::now().date_naive())),
                        used_in_serial: Set(Some(serial.clone())),
                        ..Default::default()
                    }
                    .insert(&txn)
                    .await?;
                    log::info!("Auto-registered SIM {number} from dispatch {serial}");
                }
            }
        }

        txn.commit().await?;

        Ok(DeviceResponse::from(device))
    }

    /// 获取发货记录列表（分页）
    pub async fn list_dispatches(
        &self,
        query: &DeviceQuery,
    ) -> AppResult<PaginatedResponse<DeviceResponse>> {
        let params = PaginationParams::new(query.page, query.per_page);
        let today = Local::now().date_naive();

        if let Some(status) = query.status {
            // lifecycle status is derived at read time, never stored, so
            // this filter cannot be pushed into SQL: classify the full
            // match set, then page in memory
            let rows = Self::filtered(query)
                .order_by_desc(devices::Column::CreatedAt)
                .all(&self.pool)
                .await?;
            let matched: Vec<DeviceResponse> = rows
                .into_iter()
                .map(|m| DeviceResponse::with_today(m, today))
                .filter(|d| d.status == status)
                .collect();
            let total = matched.len() as i64;
            let items: Vec<DeviceResponse> = matched
                .into_iter()
                .skip(params.get_offset() as usize)
                .take(params.get_limit() as usize)
                .collect();
            return Ok(PaginatedResponse::new(items, &params, total));
        }

        #[derive(Debug, sea_orm::FromQueryResult)]
        struct CountRow {
            count: i64,
        }
        let total = Self::filtered(query)
            .select_only()
            .column_as(Expr::val(1).count(), "count")
            .into_model::<CountRow>()
            .one(&self.pool)
            .await?
            .map(|r| r.count)
            .unwrap_or(0);

        let rows = Self::filtered(query)
            .order_by_desc(devices::Column::CreatedAt)
            .limit(params.get_limit() as u64)
            .offset(params.get_offset() as u64)
            .all(&self.pool)
            .await?;
        let items: Vec<DeviceResponse> = rows
            .into_iter()
            .map(|m| DeviceResponse::with_today(m, today))
            .collect();

        Ok(PaginatedResponse::new(items, &params, total))
    }

    /// 按序列号获取单条发货记录
    pub async fn get_dispatch(&self, serial_number: &str) -> AppResult<DeviceResponse> {
        let serial = normalize_serial(serial_number);
        let device = devices::Entity::find()
            .filter(devices::Column::SerialNumber.eq(serial.clone()))
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Dispatch {serial} not found")))?;
        Ok(DeviceResponse::from(device))
    }

    // filters only; ordering is applied by the fetch paths so the count
    // query stays a plain aggregate
    fn filtered(query: &DeviceQuery) -> Select<devices::Entity> {
        let mut find = devices::Entity::find();
        if let Some(product_name) = &query.product_name {
            find = find.filter(devices::Column::ProductName.eq(product_name.clone()));
        }
        if let Some(end_user) = &query.end_user {
            find = find.filter(devices::Column::EndUser.eq(end_user.clone()));
        }
        find
    }
}
