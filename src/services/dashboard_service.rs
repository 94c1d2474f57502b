use crate::entities::device_entity as devices;
use crate::error::AppResult;
use crate::models::*;
use crate::utils::renewal::{LifecycleStatus, classify_status};
use chrono::Local;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

/// Read-side analytics over the dispatch fleet. Every figure classifies
/// renewal dates at read time; nothing here is persisted, so the numbers
/// can only drift by passage of time.
#[derive(Clone)]
pub struct DashboardService {
    pool: DatabaseConnection,
}

impl DashboardService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 仪表盘总览：安装总数与各状态数量
    pub async fn overview(&self) -> AppResult<DashboardOverviewResponse> {
        let today = Local::now().date_naive();
        // fleet sizes here are small enough to tally in one pass
        let rows = devices::Entity::find().all(&self.pool).await?;
        let total_installations = rows.len() as i64;
        let statuses = StatusTally::from_statuses(
            rows.iter().map(|m| classify_status(m.renewal_date, today)),
        );
        Ok(DashboardOverviewResponse {
            total_installations,
            statuses,
        })
    }

    /// 行业分布
    pub async fn industry_breakdown(&self) -> AppResult<Vec<IndustrySlice>> {
        let rows = devices::Entity::find().all(&self.pool).await?;
        Ok(industry_slices(
            rows.into_iter().map(|m| m.industry_category),
        ))
    }

    /// 即将到期/已到期设备清单，按续费日期升序
    pub async fn expiring_devices(&self) -> AppResult<Vec<DeviceResponse>> {
        let today = Local::now().date_naive();
        let rows = devices::Entity::find()
            .order_by_asc(devices::Column::RenewalDate)
            .all(&self.pool)
            .await?;
        Ok(rows
            .into_iter()
            .map(|m| DeviceResponse::with_today(m, today))
            .filter(|d| {
                matches!(
                    d.status,
                    LifecycleStatus::ExpiringSoon | LifecycleStatus::Expired
                )
            })
            .collect())
    }

    /// 渠道伙伴业绩
    pub async fn partner_performance(&self) -> AppResult<Vec<PartnerPerformance>> {
        let today = Local::now().date_naive();
        let rows = devices::Entity::find().all(&self.pool).await?;
        Ok(summarize_partners(rows.into_iter().map(|m| {
            let status = classify_status(m.renewal_date, today);
            (m.channel_partner, m.end_user, status)
        })))
    }
}
