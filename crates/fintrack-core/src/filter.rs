//! Time-window selection over a transaction list.
//!
//! Window arithmetic happens on the reference's local wall clock: "a week
//! ago" is seven calendar days back, "a month ago" subtracts one from the
//! month field and lets day-of-month overflow roll forward (31 March becomes
//! 2 or 3 March). The resulting local time is mapped back to an instant; a
//! time that falls in a DST gap moves forward by an hour.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};

use fintrack_domain::{TimeWindow, Transaction};

/// Selects the transactions inside `window` relative to `reference`, keeping
/// input order. The reference's time zone decides calendar boundaries.
pub fn filter_transactions<'a, Tz: TimeZone>(
    transactions: &'a [Transaction],
    window: TimeWindow,
    reference: &DateTime<Tz>,
) -> Vec<&'a Transaction> {
    match window {
        TimeWindow::All => transactions.iter().collect(),
        TimeWindow::Daily => {
            let tz = reference.timezone();
            let day = reference.date_naive();
            transactions
                .iter()
                .filter(|txn| txn.date.with_timezone(&tz).date_naive() == day)
                .collect()
        }
        TimeWindow::Weekly | TimeWindow::Monthly => match window_start(window, reference) {
            Some(start) => transactions
                .iter()
                .filter(|txn| txn.date >= start)
                .collect(),
            None => transactions.iter().collect(),
        },
    }
}

/// Inclusive lower bound of a rolling window. `None` for [`TimeWindow::All`],
/// for [`TimeWindow::Daily`] (which matches on calendar date instead) and when
/// the bound falls outside the representable calendar.
pub fn window_start<Tz: TimeZone>(
    window: TimeWindow,
    reference: &DateTime<Tz>,
) -> Option<DateTime<Utc>> {
    let local = reference.naive_local();
    let shifted = match window {
        TimeWindow::All | TimeWindow::Daily => return None,
        TimeWindow::Weekly => local.checked_sub_signed(Duration::days(7))?,
        TimeWindow::Monthly => months_back(local, 1)?,
    };
    resolve_local(&reference.timezone(), shifted)
}

/// Moves `value` back by `months` on the month field, keeping day and time of
/// day; days past the end of the target month overflow into the next one.
pub fn months_back(value: NaiveDateTime, months: u32) -> Option<NaiveDateTime> {
    let index = value.year() * 12 + value.month0() as i32 - i32::try_from(months).ok()?;
    let first = NaiveDate::from_ymd_opt(index.div_euclid(12), index.rem_euclid(12) as u32 + 1, 1)?;
    let date = first.checked_add_signed(Duration::days(i64::from(value.day()) - 1))?;
    Some(date.and_time(value.time()))
}

fn resolve_local<Tz: TimeZone>(tz: &Tz, local: NaiveDateTime) -> Option<DateTime<Utc>> {
    tz.from_local_datetime(&local)
        .earliest()
        .or_else(|| {
            let skipped = local.checked_add_signed(Duration::hours(1))?;
            tz.from_local_datetime(&skipped).earliest()
        })
        .map(|instant| instant.with_timezone(&Utc))
}
