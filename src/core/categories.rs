use crate::core::DebtCategory;
use crate::utils::validation::parse_amount;

/// Ordered, editable list of debt categories used in breakdown mode.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryList {
    entries: Vec<DebtCategory>,
}

impl CategoryList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<DebtCategory>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[DebtCategory] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends a blank entry (empty label, zero amount).
    pub fn add(&mut self) {
        self.entries.push(DebtCategory::default());
    }

    pub fn push(&mut self, category: DebtCategory) {
        self.entries.push(category);
    }

    /// Removes the entry at `index`; out of range is a no-op.
    pub fn remove(&mut self, index: usize) -> Option<DebtCategory> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    /// Stores a new amount if `raw` is a non-negative number.
    ///
    /// Anything else (partial typing, a stray minus sign) leaves the list
    /// unchanged and returns `false`.
    pub fn update_amount(&mut self, index: usize, raw: &str) -> bool {
        let Some(amount) = parse_amount(raw).filter(|amount| *amount >= 0.0) else {
            tracing::trace!(index, raw, "ignoring unparsable category amount");
            return false;
        };
        match self.entries.get_mut(index) {
            Some(entry) => {
                entry.amount = amount;
                true
            }
            None => false,
        }
    }

    /// Sets the label verbatim. Blank labels are only rejected at submission.
    pub fn update_label(&mut self, index: usize, text: &str) -> bool {
        match self.entries.get_mut(index) {
            Some(entry) => {
                entry.label = text.to_string();
                true
            }
            None => false,
        }
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|entry| entry.amount).sum()
    }

    pub fn all_zero(&self) -> bool {
        self.entries.iter().all(|entry| entry.amount == 0.0)
    }

    /// Spreads `flat_total` over the entries with `floor(flat_total / count)` each.
    ///
    /// Only applies while every amount is still zero. The division remainder is
    /// dropped, so the seeded total can be slightly below `flat_total`.
    pub fn seed_evenly(&mut self, flat_total: f64) -> bool {
        if self.entries.is_empty() || !self.all_zero() {
            return false;
        }
        let share = (flat_total / self.entries.len() as f64).floor();
        for entry in &mut self.entries {
            entry.amount = share;
        }
        tracing::debug!(
            flat_total,
            share,
            count = self.entries.len(),
            "seeded categories from flat debt total"
        );
        true
    }

    /// Each entry's share of the total in percent, rounded to one decimal.
    pub fn shares(&self) -> Vec<f64> {
        category_shares(&self.entries)
    }
}

pub fn category_shares(entries: &[DebtCategory]) -> Vec<f64> {
    let total: f64 = entries.iter().map(|entry| entry.amount).sum();
    entries
        .iter()
        .map(|entry| {
            if total > 0.0 {
                crate::core::calculator::round_percentage(entry.amount / total * 100.0)
            } else {
                0.0
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(entries: &[(&str, f64)]) -> CategoryList {
        CategoryList::from_entries(
            entries
                .iter()
                .map(|(label, amount)| DebtCategory::new(*label, *amount))
                .collect(),
        )
    }

    #[test]
    fn test_add_appends_blank_entry() {
        let mut categories = CategoryList::new();
        categories.add();
        assert_eq!(categories.entries(), &[DebtCategory::new("", 0.0)]);
    }

    #[test]
    fn test_total_sums_amounts() {
        let categories = list(&[("mortgage", 100000.0), ("consumer", 50000.0)]);
        assert_eq!(categories.total(), 150000.0);
    }

    #[test]
    fn test_remove_out_of_bounds_is_noop() {
        let mut categories = list(&[("mortgage", 100000.0)]);
        assert!(categories.remove(3).is_none());
        assert_eq!(categories.len(), 1);
        assert_eq!(categories.remove(0).unwrap().label, "mortgage");
        assert!(categories.is_empty());
    }

    #[test]
    fn test_update_amount_rejects_invalid_input() {
        let mut categories = list(&[("card", 500.0)]);
        for raw in ["", "-", "-20", "12abc"] {
            assert!(!categories.update_amount(0, raw));
        }
        assert_eq!(categories.entries()[0].amount, 500.0);

        assert!(categories.update_amount(0, "750.5"));
        assert_eq!(categories.entries()[0].amount, 750.5);
    }

    #[test]
    fn test_update_amount_out_of_bounds() {
        let mut categories = list(&[("card", 500.0)]);
        assert!(!categories.update_amount(1, "10"));
    }

    #[test]
    fn test_update_label_accepts_empty_text() {
        let mut categories = list(&[("card", 500.0)]);
        assert!(categories.update_label(0, ""));
        assert_eq!(categories.entries()[0].label, "");
        assert!(!categories.update_label(5, "x"));
    }

    #[test]
    fn test_seed_evenly_drops_remainder() {
        let mut categories = CategoryList::new();
        categories.add();
        categories.add();
        categories.add();

        assert!(categories.seed_evenly(100000.0));
        assert!(categories.entries().iter().all(|e| e.amount == 33333.0));
        assert_eq!(categories.total(), 99999.0);
    }

    #[test]
    fn test_seed_evenly_skips_when_amounts_present() {
        let mut categories = list(&[("mortgage", 0.0), ("card", 10.0)]);
        assert!(!categories.seed_evenly(100000.0));
        assert_eq!(categories.total(), 10.0);
    }

    #[test]
    fn test_shares() {
        let categories = list(&[("mortgage", 100000.0), ("consumer", 50000.0)]);
        assert_eq!(categories.shares(), vec![66.7, 33.3]);
        assert_eq!(list(&[("a", 0.0)]).shares(), vec![0.0]);
    }
}
