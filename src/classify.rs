use crate::types::pull_request::PullRequestRecord;

/// Title keywords that mark a pull request as a recovery for MTTR.
pub const RECOVERY_KEYWORDS: [&str; 4] = ["fix", "hotfix", "revert", "rollback"];

/// Title/body keywords that mark a merged change as a failure.
/// Broader than [`RECOVERY_KEYWORDS`]: also matches "emergency".
pub const CHANGE_FAILURE_KEYWORDS: [&str; 5] = ["fix", "hotfix", "revert", "rollback", "emergency"];

/// A merged pull request stands in for a production deployment.
pub fn is_deployment(pr: &PullRequestRecord) -> bool {
    pr.merged_at.is_some()
}

/// Title-only match against [`RECOVERY_KEYWORDS`].
pub fn is_recovery_fix(pr: &PullRequestRecord) -> bool {
    contains_any(&pr.title, &RECOVERY_KEYWORDS)
}

/// Title or body match against [`CHANGE_FAILURE_KEYWORDS`].
pub fn is_change_failure(pr: &PullRequestRecord) -> bool {
    contains_any(&pr.title, &CHANGE_FAILURE_KEYWORDS)
        || pr
            .body
            .as_deref()
            .map(|body| contains_any(body, &CHANGE_FAILURE_KEYWORDS))
            .unwrap_or(false)
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    let lowered = text.to_lowercase();
    keywords.iter().any(|keyword| lowered.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record(title: &str, merged: bool) -> PullRequestRecord {
        let created = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        let merged_at = merged.then(|| Utc.with_ymd_and_hms(2024, 5, 1, 11, 0, 0).unwrap());
        PullRequestRecord::new(created, merged_at, title)
    }

    #[test]
    fn only_merged_records_are_deployments() {
        assert!(is_deployment(&record("Add feature", true)));
        assert!(!is_deployment(&record("Add feature", false)));
    }

    #[test]
    fn recovery_fix_is_case_insensitive_and_title_only() {
        assert!(is_recovery_fix(&record("HOTFIX: crash on startup", true)));
        assert!(is_recovery_fix(&record("Revert \"bump deps\"", true)));
        assert!(!is_recovery_fix(&record("Add feature", true).with_body("fixes #12")));
    }

    #[test]
    fn emergency_counts_as_change_failure_but_not_recovery() {
        let pr = record("Emergency patch", true);
        assert!(is_change_failure(&pr));
        assert!(!is_recovery_fix(&pr));
    }

    #[test]
    fn change_failure_scans_body() {
        assert!(is_change_failure(
            &record("Bump version", true).with_body("Needed a ROLLBACK of 1.2")
        ));
        assert!(!is_change_failure(&record("Bump version", true)));
        assert!(!is_change_failure(&record("Bump version", true).with_body("")));
    }

    #[test]
    fn matching_is_substring_based() {
        assert!(is_recovery_fix(&record("Rename prefix helper", true)));
    }
}
