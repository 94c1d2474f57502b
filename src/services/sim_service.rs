use crate::entities::{SimStatus, sim_card_entity as sims};
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::utils::{normalize_sim_number, validate_sim_number};
use chrono::Local;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Select, Set,
};

#[derive(Clone)]
pub struct SimService {
    pool: DatabaseConnection,
}

impl SimService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 新增SIM卡入库
    pub async fn add_sim(&self, req: CreateSimRequest) -> AppResult<SimResponse> {
        let number = normalize_sim_number(&req.sim_number);
        validate_sim_number(&number)?;

        let existing = sims::Entity::find()
            .filter(sims::Column::SimNumber.eq(number.clone()))
            .one(&self.pool)
            .await?;
        if existing.is_some() {
            return Err(AppError::ValidationError(format!(
                "SIM {number} already exists"
            )));
        }

        let card = sims::ActiveModel {
            sim_number: Set(number),
            provider: Set(Some(req.provider)),
            status: Set(SimStatus::Available),
            plan_details: Set(req.plan_details),
            entry_date: Set(Some(Local::now().date_naive())),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        Ok(SimResponse::from(card))
    }

    /// 获取SIM卡列表（分页）
    pub async fn list_sims(&self, query: &SimQuery) -> AppResult<PaginatedResponse<SimResponse>> {
        let params = PaginationParams::new(query.page, query.per_page);

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
            .order_by_desc(sims::Column::CreatedAt)
            .limit(params.get_limit() as u64)
            .offset(params.get_offset() as u64)
            .all(&self.pool)
            .await?;
        let items: Vec<SimResponse> = rows.into_iter().map(SimResponse::from).collect();

        Ok(PaginatedResponse::new(items, &params, total))
    }

    /// 可用SIM卡号列表，供发货表单选择
    pub async fn available_sim_numbers(&self) -> AppResult<Vec<String>> {
        let rows = sims::Entity::find()
            .filter(sims::Column::Status.eq(SimStatus::Available))
            .order_by_asc(sims::Column::SimNumber)
            .all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(|m| m.sim_number).collect())
    }

    fn filtered(query: &SimQuery) -> Select<sims::Entity> {
        let mut find = sims::Entity::find();
        if let Some(status) = query.status {
            find = find.filter(sims::Column::Status.eq(status));
        }
        if let Some(provider) = query.provider {
            find = find.filter(sims::Column::Provider.eq(provider));
        }
        find
    }
}
