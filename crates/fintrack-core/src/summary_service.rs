//! Recomputes everything a dashboard renders from the current transactions.

use chrono::{DateTime, TimeZone};

use fintrack_domain::{TimeWindow, Transaction};

use crate::{
    aggregate::{expense_breakdown, ChartSlice},
    balance::compute_balance,
    filter::filter_transactions,
    store::TransactionStore,
};

/// Derived view of the transaction list for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub window: TimeWindow,
    /// Net balance over every transaction, regardless of window.
    pub balance: f64,
    /// Transactions inside the selected window, oldest first.
    pub transactions: Vec<Transaction>,
    /// Expense breakdown over every transaction, regardless of window.
    pub breakdown: Vec<ChartSlice>,
}

pub struct SummaryService;

impl SummaryService {
    pub fn summarize<Tz: TimeZone>(
        transactions: &[Transaction],
        window: TimeWindow,
        reference: &DateTime<Tz>,
    ) -> DashboardSummary {
        DashboardSummary {
            window,
            balance: compute_balance(transactions),
            transactions: filter_transactions(transactions, window, reference)
                .into_iter()
                .cloned()
                .collect(),
            breakdown: expense_breakdown(transactions),
        }
    }

    /// Summarizes the store relative to its clock, in the local time zone.
    pub fn for_store(store: &TransactionStore, window: TimeWindow) -> DashboardSummary {
        let now = store.clock().now_local();
        Self::summarize(store.all(), window, &now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use fintrack_domain::TransactionKind;

    #[test]
    fn balance_and_breakdown_ignore_window() {
        let now = Utc.with_ymd_and_hms(2024, 5, 20, 12, 0, 0).unwrap();
        let old = now - Duration::days(60);
        let txns = vec![
            Transaction::new(1, "Salary", 1000.0, "work", TransactionKind::Income, old),
            Transaction::new(2, "Rent", 400.0, "housing", TransactionKind::Expense, old),
            Transaction::new(3, "Lunch", 12.0, "food", TransactionKind::Expense, now),
        ];
        let summary = SummaryService::summarize(&txns, TimeWindow::Daily, &now);
        assert_eq!(summary.window, TimeWindow::Daily);
        assert_eq!(summary.balance, 588.0);
        assert_eq!(summary.transactions, vec![txns[2].clone()]);
        let categories: Vec<&str> = summary
            .breakdown
            .iter()
            .map(|slice| slice.category.as_str())
            .collect();
        assert_eq!(categories, vec!["housing", "food"]);
    }
}
