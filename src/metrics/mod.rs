pub mod failure_rate;
pub mod frequency;
pub mod lead_time;
pub mod mttr;

use crate::types::pull_request::PullRequestRecord;
use crate::types::snapshot::{MetricResults, MetricsSnapshot};
use chrono::{DateTime, Utc};

/// Evaluation parameters for one snapshot.
#[derive(Debug, Clone, Copy)]
pub struct Window {
    pub days: u32,
    pub now: DateTime<Utc>,
}

impl Window {
    pub fn new(days: u32, now: DateTime<Utc>) -> Self {
        Self { days, now }
    }
}

/// Runs the four calculators independently over the same records.
pub fn compute(prs: &[PullRequestRecord], window: Window) -> MetricResults {
    let results = MetricResults {
        deployment_frequency: frequency::deployment_frequency(prs, window.days, window.now),
        lead_time_hours: lead_time::lead_time_hours(prs),
        mttr_hours: mttr::mttr_hours(prs),
        change_failure_rate_percent: failure_rate::change_failure_rate_percent(prs),
    };
    tracing::debug!(?results, records = prs.len(), "computed metrics");
    results
}

/// Builds the reportable snapshot, returning the raw results alongside so
/// callers can still tell "no data" from a measured zero.
pub fn assemble(prs: &[PullRequestRecord], window: Window) -> (MetricsSnapshot, MetricResults) {
    if prs.is_empty() {
        tracing::warn!("no pull requests supplied; returning zero metrics");
        return (MetricsSnapshot::default(), MetricResults::default());
    }
    let results = compute(prs, window);
    (MetricsSnapshot::from(results), results)
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}
