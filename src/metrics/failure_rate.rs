use crate::classify::{is_change_failure, is_deployment};
use crate::types::pull_request::PullRequestRecord;

/// Percentage of merged pull requests whose title or body signals a failure.
pub fn change_failure_rate_percent(prs: &[PullRequestRecord]) -> Option<f64> {
    if prs.is_empty() {
        return None;
    }

    let (total, failed) = prs
        .iter()
        .filter(|pr| is_deployment(pr))
        .fold((0usize, 0usize), |(total, failed), pr| {
            (total + 1, failed + usize::from(is_change_failure(pr)))
        });

    if total == 0 {
        return None;
    }
    Some(failed as f64 / total as f64 * 100.0)
}
