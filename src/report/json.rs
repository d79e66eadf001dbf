use crate::report::SessionReport;

pub fn render_report_json(report: &SessionReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
