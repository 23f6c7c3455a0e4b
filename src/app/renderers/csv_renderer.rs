use crate::core::report::DtiReport;
use crate::core::{DtiResult, ResultRenderer};
use crate::utils::error::{DtiError, Result};

/// One row per debt category, or a single `total` row without a breakdown.
#[derive(Debug, Clone, Default)]
pub struct CsvRenderer;

impl CsvRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl ResultRenderer for CsvRenderer {
    fn render(&self, result: &DtiResult) -> Result<String> {
        let report = DtiReport::new(result);
        let mut writer = csv::Writer::from_writer(Vec::new());

        writer.write_record(["category", "amount", "share_percent", "dti_percent", "risk_level"])?;

        let percentage = format!("{:.1}", result.percentage);
        if report.breakdown.is_empty() {
            let debts = result.debts.to_string();
            writer.write_record([
                "total",
                debts.as_str(),
                "100.0",
                percentage.as_str(),
                result.risk_level.as_str(),
            ])?;
        } else {
            for line in &report.breakdown {
                let amount = line.amount.to_string();
                let share = format!("{:.1}", line.share_percent);
                writer.write_record([
                    line.label.as_str(),
                    amount.as_str(),
                    share.as_str(),
                    percentage.as_str(),
                    result.risk_level.as_str(),
                ])?;
            }
        }

        let bytes = writer.into_inner().map_err(|e| DtiError::ProcessingError {
            message: format!("failed to flush CSV output: {}", e),
        })?;
        String::from_utf8(bytes).map_err(|e| DtiError::ProcessingError {
            message: format!("CSV output is not valid UTF-8: {}", e),
        })
    }
}
