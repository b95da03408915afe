use super::mean;
use crate::classify::is_recovery_fix;
use crate::types::pull_request::PullRequestRecord;

/// Mean creation-to-merge hours across merged pull requests whose title
/// marks them as a fix, revert or rollback.
pub fn mttr_hours(prs: &[PullRequestRecord]) -> Option<f64> {
    if prs.is_empty() {
        return None;
    }
    mean(
        prs.iter()
            .filter(|pr| is_recovery_fix(pr))
            .filter_map(PullRequestRecord::hours_to_merge),
    )
}
