use super::mean;
use crate::classify::is_deployment;
use crate::types::pull_request::PullRequestRecord;

/// Mean creation-to-merge hours across merged pull requests.
pub fn lead_time_hours(prs: &[PullRequestRecord]) -> Option<f64> {
    if prs.is_empty() {
        return None;
    }
    mean(
        prs.iter()
            .filter(|pr| is_deployment(pr))
            .filter_map(PullRequestRecord::hours_to_merge),
    )
}
