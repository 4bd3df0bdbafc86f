//! Batch summary: one row per account, one column per endpoint.

use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Color, Table};
use voxelplay_types::models::{AccountResult, Endpoint, FailureReason, Outcome};

#[derive(Debug, Default)]
pub struct Reporter {
    rows: Vec<AccountResult>,
}

impl Reporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a row; rows keep arrival order.
    pub fn push(&mut self, result: AccountResult) {
        self.rows.push(result);
    }

    #[cfg(test)]
    pub fn rows(&self) -> &[AccountResult] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn fully_succeeded(&self) -> usize {
        self.rows.iter().filter(|row| row.all_succeeded()).count()
    }

    pub fn headers() -> Vec<String> {
        std::iter::once("Account".to_string())
            .chain(Endpoint::ALL.iter().map(|e| e.label()))
            .collect()
    }

    pub fn render(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Self::headers());

        for row in &self.rows {
            let account = Cell::new(row.account_label()).set_alignment(CellAlignment::Center);
            let mut cells = vec![account];
            cells.extend(row.outcomes().map(|(_, outcome)| outcome_cell(outcome)));
            table.add_row(cells);
        }
        table
    }

    /// Failure counts per cause, e.g. `Failures: timeout x2, http 403 x1`.
    pub fn failure_breakdown(&self) -> Option<String> {
        let mut counts: Vec<(FailureReason, usize)> = Vec::new();
        for reason in self
            .rows
            .iter()
            .flat_map(|row| row.outcomes())
            .filter_map(|(_, outcome)| outcome.failure_reason())
        {
            match counts.iter_mut().find(|(seen, _)| *seen == reason) {
                Some((_, count)) => *count += 1,
                None => counts.push((reason, 1)),
            }
        }

        if counts.is_empty() {
            return None;
        }
        let parts: Vec<String> =
            counts.iter().map(|(reason, count)| format!("{} x{}", reason, count)).collect();
        Some(format!("Failures: {}", parts.join(", ")))
    }
}

fn outcome_cell(outcome: Outcome) -> Cell {
    let color = if outcome.is_success() { Color::Green } else { Color::Red };
    Cell::new(outcome.label()).fg(color).set_alignment(CellAlignment::Center)
}
