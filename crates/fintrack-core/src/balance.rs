use fintrack_domain::{Transaction, TransactionKind};

/// Net balance: income adds, expense subtracts, starting from zero.
pub fn compute_balance<'a, I>(transactions: I) -> f64
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions
        .into_iter()
        .fold(0.0, |acc, txn| acc + txn.signed_amount())
}

/// Income and expense totals alongside the net balance.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BalanceSummary {
    pub income: f64,
    pub expense: f64,
    pub net: f64,
}

pub fn summarize_balance<'a, I>(transactions: I) -> BalanceSummary
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut summary = BalanceSummary::default();
    for txn in transactions {
        match txn.kind {
            TransactionKind::Income => summary.income += txn.amount,
            TransactionKind::Expense => summary.expense += txn.amount,
        }
        summary.net += txn.signed_amount();
    }
    summary
}
