// CSV production report

use super::ProductionState;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

pub const CSV_HEADER: &str = "Phase,Task,Status,Date";

/// Content type of the report when served
pub const CSV_MIME_TYPE: &str = "text/csv;charset=utf-8;";

/// `production_report_<YYYY-MM-DD>.csv`
pub fn report_file_name(date: NaiveDate) -> String {
    format!("production_report_{}.csv", date.format("%Y-%m-%d"))
}

/// Wrap a field in double quotes, doubling any embedded quote
fn quote_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

impl ProductionState {
    /// Render every (phase, task) row in catalog order.
    /// Rows are joined with '\n' and there is no trailing newline.
    pub fn render_csv(&self, date: NaiveDate) -> String {
        let date = date.format("%Y-%m-%d").to_string();
        let mut lines = vec![CSV_HEADER.to_string()];
        for (phase, task, status) in self.rows() {
            let fields = [phase, task, status.as_str(), date.as_str()];
            lines.push(fields.iter().map(|f| quote_field(f)).collect::<Vec<_>>().join(","));
        }
        lines.join("\n")
    }

    /// Write the report into `dir`, returning the file path
    pub fn write_report(&self, dir: &Path, date: NaiveDate) -> Result<PathBuf> {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

        let path = dir.join(report_file_name(date));
        std::fs::write(&path, self.render_csv(date))
            .with_context(|| format!("Failed to write report: {}", path.display()))?;

        log::info!("exported {} rows to {}", self.catalog().total_tasks(), path.display());
        Ok(path)
    }
}
