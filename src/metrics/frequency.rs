use crate::classify::is_deployment;
use crate::types::pull_request::PullRequestRecord;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use std::collections::BTreeMap;

pub const DEFAULT_WINDOW_DAYS: u32 = 30;
/// Upper bound on the window, roughly a century.
pub const MAX_WINDOW_DAYS: u32 = 36_500;

/// Average deployments per day over the trailing `days` window ending at
/// `now`. Both window edges are inclusive. The divisor is the window
/// length, not the number of active days.
pub fn deployment_frequency(
    prs: &[PullRequestRecord],
    days: u32,
    now: DateTime<Utc>,
) -> Option<f64> {
    if prs.is_empty() || days == 0 {
        return None;
    }

    let per_day = deployments_by_date(prs, days, now)?;
    let total: usize = per_day.values().sum();
    tracing::debug!(
        total,
        active_days = per_day.len(),
        days,
        "deployments in window"
    );
    Some(total as f64 / f64::from(days))
}

/// Merged pull requests inside the window, bucketed by UTC calendar date.
/// `None` when the window start falls outside the representable date range.
pub fn deployments_by_date(
    prs: &[PullRequestRecord],
    days: u32,
    now: DateTime<Utc>,
) -> Option<BTreeMap<NaiveDate, usize>> {
    let window_start = Duration::try_days(i64::from(days))
        .and_then(|window| now.checked_sub_signed(window))?;
    let mut per_day = BTreeMap::new();
    for merged_at in prs
        .iter()
        .filter(|pr| is_deployment(pr))
        .filter_map(|pr| pr.merged_at)
    {
        if window_start <= merged_at && merged_at <= now {
            *per_day.entry(merged_at.date_naive()).or_insert(0) += 1;
        }
    }
    Some(per_day)
}
