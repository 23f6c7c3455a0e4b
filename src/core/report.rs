use crate::core::calculator::{LOW_RISK_MAX, MODERATE_RISK_MAX};
use crate::core::categories::category_shares;
use crate::core::{DtiResult, RiskLevel};
use crate::utils::format::format_currency;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskAssessment {
    pub title: &'static str,
    pub description: &'static str,
    /// Hex colour used for the band everywhere it is drawn.
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinancialTip {
    pub risk_level: RiskLevel,
    pub heading: &'static str,
    pub advice: &'static str,
}

pub static FINANCIAL_TIPS: [FinancialTip; 3] = [
    FinancialTip {
        risk_level: RiskLevel::Low,
        heading: "Low DTI (0-20%)",
        advice: "You are in a good financial position. Consider opportunities for investing and growing your capital.",
    },
    FinancialTip {
        risk_level: RiskLevel::Moderate,
        heading: "Moderate DTI (21-35%)",
        advice: "Keep spending under control and avoid new large loans. Consider restructuring existing debts.",
    },
    FinancialTip {
        risk_level: RiskLevel::High,
        heading: "High DTI (36%+)",
        advice: "Focus on reducing your debt load. Build a repayment plan and cut non-essential spending.",
    },
];

impl RiskLevel {
    pub fn assessment(&self) -> RiskAssessment {
        match self {
            RiskLevel::Low => RiskAssessment {
                title: "Low risk",
                description: "Your debt-to-income ratio is healthy. You are in a good financial position and an attractive borrower for lenders.",
                color: "#A3BE8C",
            },
            RiskLevel::Moderate => RiskAssessment {
                title: "Moderate risk",
                description: "Your debt-to-income ratio is at a moderate level. Keep an eye on your debt load and avoid taking on new large loans.",
                color: "#EBCB8B",
            },
            RiskLevel::High => RiskAssessment {
                title: "High risk",
                description: "Your debt-to-income ratio is high. Lenders may see you as a risky borrower. Focus on reducing your debt load.",
                color: "#BF616A",
            },
        }
    }

    pub fn tip(&self) -> &'static FinancialTip {
        match self {
            RiskLevel::Low => &FINANCIAL_TIPS[0],
            RiskLevel::Moderate => &FINANCIAL_TIPS[1],
            RiskLevel::High => &FINANCIAL_TIPS[2],
        }
    }
}

/// Two-segment doughnut data: the ratio and what is left of 100%.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeData {
    pub filled: f64,
    /// Never negative; a ratio above 100% leaves an empty remainder.
    pub remainder: f64,
    pub color: &'static str,
}

impl GaugeData {
    pub fn from_result(result: &DtiResult) -> Self {
        Self {
            filled: result.percentage,
            remainder: (100.0 - result.percentage).max(0.0),
            color: result.risk_level.assessment().color,
        }
    }

    /// Number of `width` cells to fill, capped at `width`.
    pub fn filled_cells(&self, width: usize) -> usize {
        let cells = (self.filled.clamp(0.0, 100.0) / 100.0 * width as f64).round() as usize;
        cells.min(width)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryLine {
    #[serde(rename = "type")]
    pub label: String,
    pub amount: f64,
    pub amount_formatted: String,
    pub share_percent: f64,
}

/// Everything the renderers need, derived from one [`DtiResult`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DtiReport {
    pub generated_at: DateTime<Utc>,
    pub result: DtiResult,
    pub assessment: RiskAssessment,
    pub gauge: GaugeData,
    pub tip: FinancialTip,
    pub income_formatted: String,
    pub debts_formatted: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub breakdown: Vec<CategoryLine>,
    pub bands: Bands,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bands {
    pub low_max: f64,
    pub moderate_max: f64,
}

impl DtiReport {
    pub fn new(result: &DtiResult) -> Self {
        let breakdown: Vec<CategoryLine> = result
            .debt_categories
            .as_deref()
            .map(|categories| {
                categories
                    .iter()
                    .zip(category_shares(categories))
                    .map(|(category, share)| CategoryLine {
                        label: category.label.clone(),
                        amount: category.amount,
                        amount_formatted: format_currency(category.amount),
                        share_percent: share,
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            generated_at: Utc::now(),
            result: result.clone(),
            assessment: result.risk_level.assessment(),
            gauge: GaugeData::from_result(result),
            tip: result.risk_level.tip().clone(),
            income_formatted: format_currency(result.income),
            debts_formatted: format_currency(result.debts),
            breakdown,
            bands: Bands {
                low_max: LOW_RISK_MAX,
                moderate_max: MODERATE_RISK_MAX,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DebtCategory;

    fn result(percentage: f64, risk_level: RiskLevel) -> DtiResult {
        DtiResult {
            percentage,
            risk_level,
            income: 500000.0,
            debts: 500000.0 * percentage / 100.0,
            debt_categories: None,
        }
    }

    #[test]
    fn test_assessment_colors_follow_band() {
        assert_eq!(RiskLevel::Low.assessment().color, "#A3BE8C");
        assert_eq!(RiskLevel::Moderate.assessment().color, "#EBCB8B");
        assert_eq!(RiskLevel::High.assessment().color, "#BF616A");
    }

    #[test]
    fn test_tip_matches_band() {
        assert_eq!(RiskLevel::Moderate.tip().risk_level, RiskLevel::Moderate);
        assert!(RiskLevel::High.tip().heading.contains("36%"));
    }

    #[test]
    fn test_gauge_remainder_never_negative() {
        let gauge = GaugeData::from_result(&result(120.0, RiskLevel::High));
        assert_eq!(gauge.remainder, 0.0);
        assert_eq!(gauge.filled_cells(20), 20);
    }

    #[test]
    fn test_gauge_cells() {
        let gauge = GaugeData::from_result(&result(30.0, RiskLevel::Moderate));
        assert_eq!(gauge.remainder, 70.0);
        assert_eq!(gauge.filled_cells(20), 6);
    }

    #[test]
    fn test_report_breakdown_lines() {
        let mut with_categories = result(30.0, RiskLevel::Moderate);
        with_categories.debt_categories = Some(vec![
            DebtCategory::new("Mortgage", 100000.0),
            DebtCategory::new("Consumer", 50000.0),
        ]);
        let report = DtiReport::new(&with_categories);
        assert_eq!(report.breakdown.len(), 2);
        assert_eq!(report.breakdown[0].share_percent, 66.7);
        assert_eq!(report.breakdown[1].amount_formatted, "50\u{a0}000\u{a0}₸");
        assert_eq!(report.assessment.title, "Moderate risk");
    }
}
