use crate::utils::renewal::LifecycleStatus;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use utoipa::ToSchema;

/// Label for dispatches without an industry category.
pub const UNCATEGORIZED_BUCKET: &str = "Uncategorized";
/// Label for dispatches sold without a channel partner.
pub const DIRECT_BUCKET: &str = "Direct";

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StatusTally {
    pub active: i64,
    pub expiring_soon: i64,
    pub expired: i64,
    pub unknown: i64,
}

impl StatusTally {
    pub fn record(&mut self, status: LifecycleStatus) {
        match status {
            LifecycleStatus::Active => self.active += 1,
            LifecycleStatus::ExpiringSoon => self.expiring_soon += 1,
            LifecycleStatus::Expired => self.expired += 1,
            LifecycleStatus::Unknown => self.unknown += 1,
        }
    }

    pub fn from_statuses(statuses: impl IntoIterator<Item = LifecycleStatus>) -> Self {
        let mut tally = Self::default();
        for status in statuses {
            tally.record(status);
        }
        tally
    }

    pub fn needs_attention(&self) -> bool {
        self.expiring_soon > 0 || self.expired > 0
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DashboardOverviewResponse {
    pub total_installations: i64,
    pub statuses: StatusTally,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IndustrySlice {
    pub industry_category: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PartnerPerformance {
    pub channel_partner: String,
    pub total_dispatches: i64,
    pub distinct_end_users: i64,
    pub statuses: StatusTally,
}

fn bucket_label(raw: Option<String>, fallback: &str) -> String {
    match raw {
        Some(s) if !s.trim().is_empty() => s.trim().to_string(),
        _ => fallback.to_string(),
    }
}

/// Group dispatch industry categories into chart slices, largest first.
pub fn industry_slices(categories: impl IntoIterator<Item = Option<String>>) -> Vec<IndustrySlice> {
    let mut counts: BTreeMap<String, i64> = BTreeMap::new();
    for category in categories {
        *counts
            .entry(bucket_label(category, UNCATEGORIZED_BUCKET))
            .or_insert(0) += 1;
    }
    let mut slices: Vec<IndustrySlice> = counts
        .into_iter()
        .map(|(industry_category, count)| IndustrySlice {
            industry_category,
            count,
        })
        .collect();
    slices.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.industry_category.cmp(&b.industry_category))
    });
    slices
}

/// Per-partner dispatch counts, status tallies and distinct end users,
/// from `(channel_partner, end_user, status)` rows. Busiest partner first.
pub fn summarize_partners(
    rows: impl IntoIterator<Item = (Option<String>, String, LifecycleStatus)>,
) -> Vec<PartnerPerformance> {
    let mut grouped: BTreeMap<String, (i64, HashSet<String>, StatusTally)> = BTreeMap::new();
    for (partner, end_user, status) in rows {
        let entry = grouped
            .entry(bucket_label(partner, DIRECT_BUCKET))
            .or_default();
        entry.0 += 1;
        entry.1.insert(end_user);
        entry.2.record(status);
    }
    let mut partners: Vec<PartnerPerformance> = grouped
        .into_iter()
        .map(|(channel_partner, (total, end_users, statuses))| PartnerPerformance {
            channel_partner,
            total_dispatches: total,
            distinct_end_users: end_users.len() as i64,
            statuses,
        })
        .collect();
    partners.sort_by(|a, b| {
        b.total_dispatches
            .cmp(&a.total_dispatches)
            .then_with(|| a.channel_partner.cmp(&b.channel_partner))
    });
    partners
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::renewal::LifecycleStatus::*;

    #[test]
    fn test_status_tally() {
        let tally = StatusTally::from_statuses([Active, Active, ExpiringSoon, Expired, Unknown]);
        assert_eq!(tally.active, 2);
        assert_eq!(tally.expiring_soon, 1);
        assert_eq!(tally.expired, 1);
        assert_eq!(tally.unknown, 1);
        assert!(tally.needs_attention());
        assert!(!StatusTally::from_statuses([Active, Unknown]).needs_attention());
    }

    #[test]
    fn test_industry_slices_buckets_and_order() {
        let slices = industry_slices([
            Some("Water".to_string()),
            Some("Water".to_string()),
            Some("Agriculture".to_string()),
            Some("  ".to_string()),
            None,
        ]);
        assert_eq!(
            slices,
            vec![
                IndustrySlice {
                    industry_category: "Uncategorized".to_string(),
                    count: 2
                },
                IndustrySlice {
                    industry_category: "Water".to_string(),
                    count: 2
                },
                IndustrySlice {
                    industry_category: "Agriculture".to_string(),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn test_summarize_partners() {
        let partners = summarize_partners([
            (Some("HydroTech".to_string()), "Acme".to_string(), Active),
            (Some("HydroTech".to_string()), "Acme".to_string(), Expired),
            (Some("HydroTech".to_string()), "Borewell Co".to_string(), Active),
            (None, "Acme".to_string(), Unknown),
        ]);
        assert_eq!(partners.len(), 2);
        assert_eq!(partners[0].channel_partner, "HydroTech");
        assert_eq!(partners[0].total_dispatches, 3);
        assert_eq!(partners[0].distinct_end_users, 2);
        assert_eq!(partners[0].statuses.active, 2);
        assert_eq!(partners[0].statuses.expired, 1);
        assert_eq!(partners[1].channel_partner, "Direct");
        assert_eq!(partners[1].total_dispatches, 1);
        assert_eq!(partners[1].statuses.unknown, 1);
    }
}
