use crate::types::snapshot::MetricsSnapshot;

pub fn to_json(snapshot: &MetricsSnapshot) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(snapshot)
}
