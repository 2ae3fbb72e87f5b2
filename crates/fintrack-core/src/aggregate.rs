//! Expense totals per category, the data behind the breakdown chart.

use std::collections::HashMap;

use fintrack_domain::Transaction;

/// Fill colours assigned to breakdown slices in order, wrapping around.
pub const CHART_PALETTE: [&str; 5] = ["#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#FF6666"];

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

impl CategoryTotal {
    pub fn new(category: impl Into<String>, total: f64) -> Self {
        Self {
            category: category.into(),
            total,
        }
    }
}

/// Groups expense transactions by exact category label and sums their
/// amounts. Categories appear in the order they are first seen; income is
/// ignored.
pub fn aggregate_expenses_by_category<'a, I>(transactions: I) -> Vec<CategoryTotal>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut totals: Vec<CategoryTotal> = Vec::new();
    let mut positions: HashMap<&'a str, usize> = HashMap::new();
    for txn in transactions.into_iter().filter(|txn| txn.is_expense()) {
        match positions.get(txn.category.as_str()) {
            Some(&index) => totals[index].total += txn.amount,
            None => {
                positions.insert(txn.category.as_str(), totals.len());
                totals.push(CategoryTotal::new(txn.category.clone(), txn.amount));
            }
        }
    }
    totals
}

/// One pie slice: a category total with its share of all expenses and a
/// palette colour.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSlice {
    pub category: String,
    pub total: f64,
    /// Fraction of total expenses in `0.0..=1.0`; zero when nothing was spent.
    pub share: f64,
    pub color: &'static str,
}

pub fn expense_breakdown<'a, I>(transactions: I) -> Vec<ChartSlice>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let totals = aggregate_expenses_by_category(transactions);
    let grand_total: f64 = totals.iter().map(|entry| entry.total).sum();
    totals
        .into_iter()
        .enumerate()
        .map(|(index, entry)| ChartSlice {
            share: if grand_total > 0.0 {
                entry.total / grand_total
            } else {
                0.0
            },
            color: CHART_PALETTE[index % CHART_PALETTE.len()],
            category: entry.category,
            total: entry.total,
        })
        .collect()
}
