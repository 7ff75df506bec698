//! Trailing-window aggregation over the ledger.
//!
//! A rollup is a fixed-length sequence of per-day aggregates for the N
//! calendar days ending at an anchor date, oldest first. Days with no entries
//! contribute zero aggregates rather than being skipped, so the sequence
//! always has exactly N elements and averages reflect adherence, not just
//! logging activity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::daykey::{shift_days, DayKey};
use crate::ledger::Ledger;

/// The "weekly" window.
pub const WEEK_DAYS: u32 = 7;
/// The "monthly" window.
pub const MONTH_DAYS: u32 = 30;

/// Per-day totals inside a rollup window. Derived, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyAggregate {
    pub day: DayKey,
    pub date: NaiveDate,
    pub energy: u32,
    pub protein: f64,
}

/// Sum and per-day average over a rollup window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WindowSummary {
    pub total_energy: u64,
    pub total_protein: f64,
    pub avg_energy: f64,
    pub avg_protein: f64,
}

/// Aggregates for the `days` calendar days ending at `anchor` inclusive,
/// oldest first. Window size is arbitrary; 7 and 30 are the named windows.
pub fn rollup(ledger: &Ledger, days: u32, anchor: NaiveDate) -> Vec<DailyAggregate> {
    let mut out = Vec::with_capacity(days as usize);
    for offset in (0..i64::from(days)).rev() {
        // Offsets this small cannot leave chrono's date range.
        let date = shift_days(anchor, -offset).unwrap_or(anchor);
        let day = DayKey::from_date(date);
        let totals = ledger.totals_for(&day);
        out.push(DailyAggregate {
            day,
            date,
            energy: totals.energy,
            protein: totals.protein,
        });
    }
    out
}

/// Sum and average over a window.
///
/// Averages divide by the window length, so an unlogged day counts as a zero
/// toward the average. An empty window yields all zeros.
pub fn summarize(aggregates: &[DailyAggregate]) -> WindowSummary {
    if aggregates.is_empty() {
        return WindowSummary::default();
    }
    let total_energy: u64 = aggregates.iter().map(|a| u64::from(a.energy)).sum();
    let total_protein: f64 = aggregates.iter().map(|a| a.protein).sum();
    let n = aggregates.len() as f64;
    WindowSummary {
        total_energy,
        total_protein,
        avg_energy: total_energy as f64 / n,
        avg_protein: total_protein / n,
    }
}
