use crate::types::snapshot::{MetricResults, MetricsSnapshot};

pub fn to_markdown(snapshot: &MetricsSnapshot, results: &MetricResults) -> String {
    let mut output = String::new();
    output.push_str("# DORA Metrics\n\n");
    output.push_str("| Metric | Value | Note |\n");
    output.push_str("| --- | ---: | --- |\n");

    let defined = [
        results.deployment_frequency.is_some(),
        results.lead_time_hours.is_some(),
        results.mttr_hours.is_some(),
        results.change_failure_rate_percent.is_some(),
    ];
    for ((name, value), has_data) in MetricsSnapshot::COLUMNS
        .iter()
        .zip(snapshot.values())
        .zip(defined)
    {
        output.push_str(&format!(
            "| {} | {:.2} | {} |\n",
            name,
            value,
            if has_data { "" } else { "no data" }
        ));
    }

    if !results.has_data() {
        output.push_str("\nNo metric had data; zeros above do not reflect measured values.\n");
    }

    output
}
