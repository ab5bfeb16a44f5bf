//! CSV and JSON renditions of a [`DayReport`].

use crate::analysis::report::DayReport;
use serde::{Deserialize, Serialize};
use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write CSV record")]
    Csv(#[from] csv::Error),

    #[error("Failed to flush CSV output")]
    Flush(#[source] std::io::Error),

    #[error("CSV output is not valid UTF-8")]
    Utf8(#[from] FromUtf8Error),

    #[error("Failed to serialize report as JSON")]
    Json(#[from] serde_json::Error),
}

/// Output format of [`export`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
        }
    }
}

/// Renders `report` in the requested format.
///
/// CSV holds one line per category with its likelihood to one decimal, under a
/// `Category,Likelihood (%)` header. JSON is the pretty-printed report.
pub fn export(report: &DayReport, format: ExportFormat) -> Result<String, ExportError> {
    match format {
        ExportFormat::Csv => likelihoods_csv(report),
        ExportFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

/// File name offered for download, e.g. `weather-analysis-2025-07-01.csv`.
pub fn suggested_filename(report: &DayReport, format: ExportFormat) -> String {
    format!(
        "weather-analysis-{}.{}",
        report.target_date,
        format.extension()
    )
}

fn likelihoods_csv(report: &DayReport) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["Category", "Likelihood (%)"])?;
    for (category, value) in report.likelihoods.iter() {
        writer.write_record([category.label(), format!("{:.1}", value).as_str()])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Flush(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}
