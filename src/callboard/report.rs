//! Printable callboard table.
//!
//! Renders the per-actor call sheets as a plain-text summary table: one row
//! per actor, one column per day, cell contents the formatted window ranges
//! or "No Call". Suitable for print/export by the presentation layer.

use serde::{Deserialize, Serialize};

use super::ActorCallSheet;
use crate::models::RehearsalDay;

/// Formats a fractional-hour clock value as a 12-hour time.
///
/// `18.5` renders as `"6:30 PM"`, `0.0` as `"12:00 AM"`, `12.0` as
/// `"12:00 PM"`.
pub fn format_clock(hour: f64) -> String {
    let total_minutes = (hour * 60.0).round() as i64;
    let h24 = total_minutes.div_euclid(60).rem_euclid(24);
    let minutes = total_minutes.rem_euclid(60);
    let (h12, suffix) = match h24 {
        0 => (12, "AM"),
        1..=11 => (h24, "AM"),
        12 => (12, "PM"),
        _ => (h24 - 12, "PM"),
    };
    format!("{h12}:{minutes:02} {suffix}")
}

/// One actor's row of the callboard table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallboardRow {
    /// Actor name.
    pub actor: String,
    /// One formatted cell per day, "No Call" when the actor is free.
    pub cells: Vec<String>,
}

/// The printable per-actor summary table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallboardTable {
    /// Column days, in order.
    pub days: Vec<RehearsalDay>,
    /// Rows ordered by actor name.
    pub rows: Vec<CallboardRow>,
}

impl CallboardTable {
    /// Builds the table from call sheets.
    ///
    /// Sheets are expected in `build_call_sheets` order (actor, then day);
    /// each actor contributes one row with a cell for every requested day.
    pub fn from_sheets(sheets: &[ActorCallSheet], days: &[RehearsalDay]) -> Self {
        let mut rows: Vec<CallboardRow> = Vec::new();

        for sheet in sheets {
            if rows.last().map(|r| r.actor.as_str()) != Some(sheet.actor.as_str()) {
                rows.push(CallboardRow {
                    actor: sheet.actor.clone(),
                    cells: vec!["No Call".to_string(); days.len()],
                });
            }
            let (Some(row), Some(col)) = (
                rows.last_mut(),
                days.iter().position(|d| *d == sheet.day),
            ) else {
                continue;
            };

            let ranges: Vec<String> = sheet
                .windows
                .iter()
                .map(|w| format!("{} - {}", format_clock(w.start_hour), format_clock(w.end_hour)))
                .collect();
            if !ranges.is_empty() {
                row.cells[col] = ranges.join(", ");
            }
        }

        Self {
            days: days.to_vec(),
            rows,
        }
    }

    /// Renders the table as plain text with aligned columns.
    pub fn render(&self) -> String {
        let header: Vec<String> = std::iter::once("Actor".to_string())
            .chain(self.days.iter().map(|d| d.label().to_string()))
            .collect();

        let mut widths: Vec<usize> = header.iter().map(String::len).collect();
        for row in &self.rows {
            widths[0] = widths[0].max(row.actor.len());
            for (i, cell) in row.cells.iter().enumerate() {
                widths[i + 1] = widths[i + 1].max(cell.len());
            }
        }

        let render_line = |cells: Vec<&str>| -> String {
            cells
                .iter()
                .zip(&widths)
                .map(|(cell, &w)| format!("{cell:<w$}"))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        };

        let mut out = Vec::new();
        out.push(render_line(header.iter().map(String::as_str).collect()));
        for row in &self.rows {
            let mut cells = vec![row.actor.as_str()];
            cells.extend(row.cells.iter().map(String::as_str));
            out.push(render_line(cells));
        }
        out.join("\n")
    }
}
