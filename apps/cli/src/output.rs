//! Plain-text rendering of the dashboard views for the terminal.

use client_core::{RecentRow, SummaryCards, TableRow};

pub fn summary(cards: &SummaryCards) -> String {
    format!(
        "Total employees:  {}\nActive employees: {}\nAverage net pay:  {}\n",
        cards.total, cards.active, cards.average_pay_label
    )
}

pub fn recent_table(rows: &[RecentRow]) -> String {
    if rows.is_empty() {
        return "No employees.\n".to_string();
    }
    let body = rows
        .iter()
        .map(|row| {
            vec![
                row.id.clone(),
                row.name.clone(),
                row.dept.clone(),
                row.salary.clone(),
                row.net_pay.clone(),
                row.status.clone(),
            ]
        })
        .collect();
    render_table(&["ID", "Name", "Dept", "Salary", "Net Pay", "Status"], body)
}

pub fn full_table(rows: &[TableRow]) -> String {
    if rows.is_empty() {
        return "No matching employees.\n".to_string();
    }
    let body = rows
        .iter()
        .map(|row| {
            vec![
                row.index.to_string(),
                row.id.clone(),
                row.name.clone(),
                row.dept.clone(),
                row.phone.clone(),
                row.salary.clone(),
                row.net_pay.clone(),
                row.status.clone(),
            ]
        })
        .collect();
    render_table(
        &["#", "ID", "Name", "Dept", "Phone", "Salary", "Net Pay", "Status"],
        body,
    )
}

/// Left-aligned columns padded to the widest cell, measured in chars so the
/// rupee glyph counts once.
fn render_table(headers: &[&str], rows: Vec<Vec<String>>) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    push_line(&mut out, &widths, &header);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, &widths, &rule);
    for row in &rows {
        push_line(&mut out, &widths, row);
    }
    out
}

fn push_line(out: &mut String, widths: &[usize], cells: &[String]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect();
    out.push_str(padded.join("  ").trim_end());
    out.push('\n');
}
