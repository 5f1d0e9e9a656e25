//! Stateless projections from the record store (plus the live search query)
//! to the three dashboard views. Each call rebuilds its output from scratch.

use rust_decimal::{Decimal, RoundingStrategy};
use shared::{domain::EmployeeRecord, error::RemoteError};

use crate::{filter::filter_records, store::RecordStore};

pub const CURRENCY_GLYPH: &str = "₹";
pub const RECENT_LIMIT: usize = 5;

pub const CREATE_SUCCESS_MESSAGE: &str = "Employee added via backend.";
pub const CREATE_BACKEND_ERROR_MESSAGE: &str = "Backend error while adding employee.";
pub const CREATE_NETWORK_ERROR_MESSAGE: &str = "Network error.";

/// User-facing line for a failed create: the API answered with an error
/// status, or the request never completed.
pub fn create_failure_message(err: &RemoteError) -> &'static str {
    if err.is_http_status() {
        CREATE_BACKEND_ERROR_MESSAGE
    } else {
        CREATE_NETWORK_ERROR_MESSAGE
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryCards {
    pub total: usize,
    pub active: usize,
    pub average_pay: i64,
    pub average_pay_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentRow {
    pub id: String,
    pub name: String,
    pub dept: String,
    pub salary: String,
    pub net_pay: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// 1-based position within the filtered list.
    pub index: usize,
    pub id: String,
    pub name: String,
    pub dept: String,
    pub phone: String,
    pub salary: String,
    pub net_pay: String,
    pub status: String,
    /// Target of the row's delete action; `None` when the record has no id.
    pub delete_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub cards: SummaryCards,
    pub recent: Vec<RecentRow>,
    pub table: Vec<TableRow>,
}

impl Default for DashboardView {
    fn default() -> Self {
        render_dashboard(&RecordStore::default(), "")
    }
}

pub fn render_dashboard(store: &RecordStore, query: &str) -> DashboardView {
    let records = store.get();
    DashboardView {
        cards: summary_cards(records),
        recent: recent_rows(records),
        table: table_rows(records, query),
    }
}

/// Mean net pay with absent values counted as zero; zero for an empty list.
pub fn average_pay(records: &[EmployeeRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let sum: f64 = records.iter().map(EmployeeRecord::net_pay).sum();
    sum / records.len() as f64
}

pub fn summary_cards(records: &[EmployeeRecord]) -> SummaryCards {
    let average_pay = round_half_up(average_pay(records));
    SummaryCards {
        total: records.len(),
        active: records.iter().filter(|record| record.is_active()).count(),
        average_pay,
        average_pay_label: format_rupees(average_pay),
    }
}

/// The last [`RECENT_LIMIT`] records, newest first.
pub fn recent_rows(records: &[EmployeeRecord]) -> Vec<RecentRow> {
    let skip = records.len().saturating_sub(RECENT_LIMIT);
    records[skip..]
        .iter()
        .rev()
        .map(|record| RecentRow {
            id: record.id().to_string(),
            name: record.name().to_string(),
            dept: record.dept().to_string(),
            salary: format_salary(record),
            net_pay: format_net_pay(record),
            status: record.status().to_string(),
        })
        .collect()
}

pub fn table_rows(records: &[EmployeeRecord], query: &str) -> Vec<TableRow> {
    filter_records(records, query)
        .into_iter()
        .enumerate()
        .map(|(position, record)| TableRow {
            index: position + 1,
            id: record.id().to_string(),
            name: record.name().to_string(),
            dept: record.dept().to_string(),
            phone: record.phone().to_string(),
            salary: format_salary(record),
            net_pay: format_net_pay(record),
            status: record.status().to_string(),
            delete_id: record.emp_id.clone(),
        })
        .collect()
}

fn format_salary(record: &EmployeeRecord) -> String {
    format!("{CURRENCY_GLYPH}{}", record.salary())
}

fn format_net_pay(record: &EmployeeRecord) -> String {
    format!("{CURRENCY_GLYPH}{}", format_two_decimals(record.net_pay()))
}

/// Two decimal places, with exact ties rounded away from zero
/// (`0.125` -> `0.13`). The decision is made on the exact binary value, so
/// `1.005` (stored just below the tie) stays `1.00`.
pub fn format_two_decimals(amount: f64) -> String {
    match Decimal::from_f64_retain(amount) {
        Some(exact) => {
            let rounded = exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            format!("{rounded:.2}")
        }
        None => format!("{amount:.2}"),
    }
}

/// Nearest integer, with exact .5 ties going towards positive infinity.
/// `value - floor(value)` is exact, so values just under a tie round down.
pub fn round_half_up(value: f64) -> i64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor as i64 + 1
    } else {
        floor as i64
    }
}

pub fn format_rupees(amount: i64) -> String {
    format!("{CURRENCY_GLYPH}{}", group_indian(amount))
}

/// Indian digit grouping: the last three digits, then pairs (`12,34,567`).
pub fn group_indian(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let digits = amount.unsigned_abs().to_string();
    if digits.len() <= 3 {
        return format!("{sign}{digits}");
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{sign}{},{tail}", groups.join(","))
}

#[cfg(test)]
#[path = "tests/views_tests.rs"]
mod tests;
