//! Derived session metrics.
//!
//! Pure functions over stored fields. Nothing here is persisted; values are
//! recomputed every time a record is read.

use crate::domain::foundation::{SessionRecordId, Timestamp};

use super::SessionRecord;

/// Net result of a session: `cash_out - buy_in`.
pub fn net_profit(buy_in: f64, cash_out: f64) -> f64 {
    cash_out - buy_in
}

/// Profit rate in big blinds per hour, or `None` when it overflows `f64`.
///
/// Zero when `bb_size` or `hours` is zero.
pub fn checked_bb_per_hour(net_profit: f64, bb_size: f64, hours: f64) -> Option<f64> {
    if hours == 0.0 || bb_size == 0.0 {
        return Some(0.0);
    }
    let rate = (net_profit / bb_size) / hours;
    rate.is_finite().then_some(rate)
}

/// Profit rate in big blinds per hour.
///
/// Always finite: zero divisors and unrepresentable rates give zero.
pub fn bb_per_hour(net_profit: f64, bb_size: f64, hours: f64) -> f64 {
    checked_bb_per_hour(net_profit, bb_size, hours).unwrap_or(0.0)
}

// Aggregates saturate at the largest finite value instead of overflowing.
fn saturate(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(f64::MIN, f64::MAX)
    }
}

/// One point of the running bankroll curve.
#[derive(Debug, Clone, PartialEq)]
pub struct CumulativePoint {
    pub session_id: SessionRecordId,
    pub date: Timestamp,
    pub session_profit: f64,
    pub cumulative_profit: f64,
}

/// Aggregate results across every logged session.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BankrollSummary {
    pub session_count: usize,
    pub total_profit: f64,
    pub average_profit: f64,
    pub average_bb_per_hour: f64,
    pub total_hours: f64,
    pub hourly_rate: f64,
    pub cumulative: Vec<CumulativePoint>,
}

/// Summarizes a set of sessions.
///
/// The cumulative curve is ordered by session date, ties broken by id.
pub fn summarize(records: &[SessionRecord]) -> BankrollSummary {
    if records.is_empty() {
        return BankrollSummary::default();
    }

    let mut ordered: Vec<&SessionRecord> = records.iter().collect();
    ordered.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));

    let mut running = 0.0;
    let cumulative: Vec<CumulativePoint> = ordered
        .iter()
        .map(|record| {
            let session_profit = record.net_profit();
            running = saturate(running + session_profit);
            CumulativePoint {
                session_id: record.id,
                date: record.date,
                session_profit,
                cumulative_profit: running,
            }
        })
        .collect();

    let count = records.len();
    let total_profit = saturate(records.iter().map(SessionRecord::net_profit).sum());
    let total_hours = saturate(records.iter().map(|r| r.hours).sum());
    let bb_rate_sum = saturate(records.iter().map(SessionRecord::bb_per_hour).sum());

    BankrollSummary {
        session_count: count,
        total_profit,
        average_profit: total_profit / count as f64,
        average_bb_per_hour: bb_rate_sum / count as f64,
        total_hours,
        hourly_rate: if total_hours == 0.0 {
            0.0
        } else {
            saturate(total_profit / total_hours)
        },
        cumulative,
    }
}
