use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// One pull request, normalized to the fields the metrics read.
///
/// Unknown fields are ignored on input, so raw GitHub `pulls` payloads
/// deserialize directly into this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PullRequestRecord {
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub merged_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
}

#[cfg(test)]
impl PullRequestRecord {
    pub fn new(created_at: DateTime<Utc>, merged_at: Option<DateTime<Utc>>, title: &str) -> Self {
        Self {
            created_at,
            merged_at,
            title: title.to_string(),
            body: None,
        }
    }

    pub fn with_body(mut self, body: &str) -> Self {
        self.body = Some(body.to_string());
        self
    }
}

impl PullRequestRecord {
    /// Hours from creation to merge, or `None` when unmerged or merged
    /// before it was created.
    pub fn hours_to_merge(&self) -> Option<f64> {
        let merged_at = self.merged_at?;
        let seconds = (merged_at - self.created_at).num_milliseconds() as f64 / 1000.0;
        if seconds < 0.0 {
            tracing::warn!(
                created_at = %self.created_at,
                merged_at = %merged_at,
                title = %self.title,
                "skipping pull request merged before it was created"
            );
            return None;
        }
        Some(seconds / 3600.0)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
