//! Text formatting functions for `hd`.
//!
//! Provides plain text (non-ANSI) formatting for terminal output:
//! - Status icons (○ ✓)
//! - Single-line ticket summaries
//! - The ticket table (ID, Name, Issue, Date, Priority, Status)

use helpdesk_lib::{Statistics, Status, Ticket};
use unicode_width::UnicodeWidthStr;

/// Status icon characters.
pub mod icons {
    /// Open ticket - still needs attention (hollow circle).
    pub const OPEN: &str = "○";
    /// Closed ticket - resolved (checkmark).
    pub const CLOSED: &str = "✓";
}

const HEADERS: [&str; 6] = ["ID", "Name", "Issue", "Date", "Priority", "Status"];
const COLUMN_GAP: &str = "  ";

/// Return the icon character for a status.
#[must_use]
pub const fn format_status_icon(status: &Status) -> &'static str {
    match status {
        Status::Open => icons::OPEN,
        Status::Closed => icons::CLOSED,
    }
}

/// Format a single-line ticket summary.
///
/// Format: `{icon} {id} [{priority}] {first} {last}: {issue}`
#[must_use]
pub fn format_ticket_line(ticket: &Ticket) -> String {
    format!(
        "{} {} [{}] {}: {}",
        format_status_icon(&ticket.status),
        ticket.id,
        ticket.priority,
        ticket.full_name(),
        ticket.issue,
    )
}

/// Format every field of one ticket.
#[must_use]
pub fn format_ticket_details(ticket: &Ticket) -> String {
    format!(
        "{} Ticket {} [{}] [{}]\nName:    {}\nIssue:   {}\nCreated: {}",
        format_status_icon(&ticket.status),
        ticket.id,
        ticket.priority,
        ticket.status,
        ticket.full_name(),
        ticket.issue,
        ticket.date,
    )
}

/// Format tickets as an aligned table followed by a count line.
#[must_use]
pub fn format_ticket_table<'a>(tickets: impl IntoIterator<Item = &'a Ticket>) -> String {
    let rows: Vec<(&str, [String; 6])> = tickets
        .into_iter()
        .map(|t| {
            (
                format_status_icon(&t.status),
                [
                    t.id.clone(),
                    t.full_name(),
                    t.issue.clone(),
                    t.date.to_string(),
                    t.priority.to_string(),
                    t.status.to_string(),
                ],
            )
        })
        .collect();

    if rows.is_empty() {
        return "No tickets found.".to_string();
    }

    let mut widths = HEADERS.map(|h| h.width());
    for (_, cells) in &rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.width());
        }
    }

    let mut out = String::new();
    push_row(&mut out, " ", HEADERS, &widths);
    for (icon, cells) in &rows {
        push_row(&mut out, icon, cells.iter().map(String::as_str), &widths);
    }
    out.push_str(&format!("\n{} ticket(s)", rows.len()));
    out
}

fn push_row<'a>(
    out: &mut String,
    icon: &str,
    cells: impl IntoIterator<Item = &'a str>,
    widths: &[usize],
) {
    let mut line = format!("{icon} ");
    for (i, (cell, width)) in cells.into_iter().zip(widths).enumerate() {
        if i > 0 {
            line.push_str(COLUMN_GAP);
        }
        line.push_str(cell);
        line.push_str(&" ".repeat(width.saturating_sub(cell.width())));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Format aggregate counts.
#[must_use]
pub fn format_statistics(stats: &Statistics) -> String {
    let mut out = format!(
        "Tickets: {} ({} open, {} closed)",
        stats.total, stats.open, stats.closed
    );
    for (priority, count) in &stats.by_priority {
        out.push_str(&format!("\n  {priority:<8} {count}"));
    }
    out
}
