//! Background scheduled tasks for the application.
//!
//! The only recurring job is the renewal expiry scan: it re-tallies the
//! fleet and logs a warning whenever dispatches are expiring soon or have
//! expired, so the alert shows up in operations logs between dashboard
//! visits. Call `spawn_all` once during startup.

use crate::services::DashboardService;

/// Spawn all background tasks.
///
/// Detaches via `tokio::spawn`; does not block.
pub fn spawn_all(dashboard_service: DashboardService) {
    // 续费到期扫描（每 6 小时）
    tokio::spawn(async move {
        loop {
            match dashboard_service.overview().await {
                Ok(overview) if overview.statuses.needs_attention() => {
                    log::warn!(
                        "Renewal alert: {} expiring soon, {} expired of {} installations",
                        overview.statuses.expiring_soon,
                        overview.statuses.expired,
                        overview.total_installations
                    );
                }
                Ok(_) => {}
                Err(e) => log::error!("Failed to scan renewals: {e:?}"),
            }
            tokio::time::sleep(std::time::Duration::from_secs(6 * 3600)).await;
        }
    });
}
