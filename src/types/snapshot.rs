use serde::{Deserialize, Serialize};

/// Raw calculator output. `None` means the metric had no data.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MetricResults {
    pub deployment_frequency: Option<f64>,
    pub lead_time_hours: Option<f64>,
    pub mttr_hours: Option<f64>,
    pub change_failure_rate_percent: Option<f64>,
}

impl MetricResults {
    pub fn has_data(&self) -> bool {
        self.deployment_frequency.is_some()
            || self.lead_time_hours.is_some()
            || self.mttr_hours.is_some()
            || self.change_failure_rate_percent.is_some()
    }
}

/// The reportable snapshot handed to renderers and exporters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    #[serde(rename = "Deployment Frequency")]
    pub deployment_frequency: f64,
    #[serde(rename = "Lead Time (hrs)")]
    pub lead_time_hours: f64,
    #[serde(rename = "MTTR (hrs)")]
    pub mttr_hours: f64,
    #[serde(rename = "Change Failure Rate")]
    pub change_failure_rate_percent: f64,
}

impl MetricsSnapshot {
    pub const COLUMNS: [&'static str; 4] = [
        "Deployment Frequency",
        "Lead Time (hrs)",
        "MTTR (hrs)",
        "Change Failure Rate",
    ];

    pub fn values(&self) -> [f64; 4] {
        [
            self.deployment_frequency,
            self.lead_time_hours,
            self.mttr_hours,
            self.change_failure_rate_percent,
        ]
    }
}

impl From<MetricResults> for MetricsSnapshot {
    fn from(results: MetricResults) -> Self {
        Self {
            deployment_frequency: results.deployment_frequency.unwrap_or(0.0),
            lead_time_hours: results.lead_time_hours.unwrap_or(0.0),
            mttr_hours: results.mttr_hours.unwrap_or(0.0),
            change_failure_rate_percent: results.change_failure_rate_percent.unwrap_or(0.0),
        }
    }
}
