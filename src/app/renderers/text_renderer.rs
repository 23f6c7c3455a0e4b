use crate::app::renderers::DEFAULT_GAUGE_WIDTH;
use crate::core::report::DtiReport;
use crate::core::{DtiResult, ResultRenderer};
use crate::utils::error::Result;
use crate::utils::format::format_percentage;
use std::fmt::Write;

/// Plain-text report for a terminal.
#[derive(Debug, Clone)]
pub struct TextRenderer {
    gauge_width: usize,
}

impl TextRenderer {
    pub fn new(gauge_width: usize) -> Self {
        Self { gauge_width }
    }

    fn gauge(&self, report: &DtiReport) -> String {
        let filled = report.gauge.filled_cells(self.gauge_width);
        format!(
            "[{}{}]",
            "█".repeat(filled),
            "░".repeat(self.gauge_width - filled)
        )
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_GAUGE_WIDTH)
    }
}

impl ResultRenderer for TextRenderer {
    fn render(&self, result: &DtiResult) -> Result<String> {
        let report = DtiReport::new(result);
        let mut out = String::new();

        // Writing into a String cannot fail.
        let _ = writeln!(out, "DTI ratio: {}", format_percentage(result.percentage));
        let _ = writeln!(out, "{}", self.gauge(&report));
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", report.assessment.title);
        let _ = writeln!(out, "{}", report.assessment.description);
        let _ = writeln!(out);
        let _ = writeln!(out, "Monthly income: {}", report.income_formatted);
        let _ = writeln!(out, "Monthly debts:  {}", report.debts_formatted);

        if !report.breakdown.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "Debt breakdown:");
            let label_width = report
                .breakdown
                .iter()
                .map(|line| line.label.chars().count())
                .max()
                .unwrap_or(0);
            for line in &report.breakdown {
                let _ = writeln!(
                    out,
                    "  {:<label_width$}  {:>14}  {:>6}",
                    line.label,
                    line.amount_formatted,
                    format_percentage(line.share_percent),
                    label_width = label_width
                );
            }
        }

        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "DTI (debt-to-income) is the ratio of all monthly debt payments to monthly income before tax."
        );
        let _ = writeln!(
            out,
            "Bands: low 0-{:.0}% | moderate {:.0}-{:.0}% | high {:.0}%+",
            report.bands.low_max,
            report.bands.low_max + 1.0,
            report.bands.moderate_max,
            report.bands.moderate_max + 1.0
        );
        let _ = writeln!(out, "Tip - {}: {}", report.tip.heading, report.tip.advice);

        Ok(out)
    }
}
