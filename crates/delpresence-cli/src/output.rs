//! Terminal rendering: toasts, aligned tables and page footers.

use anyhow::anyhow;
use delpresence_core::{ApiError, Operation, PaginationMeta};

/// Prints the success toast for `op`.
pub fn success(op: Operation) {
    println!("✅ {}", op.success_message());
}

/// Maps a failed call to the operator-facing message for `op`.
pub fn check<T>(op: Operation, result: Result<T, ApiError>) -> anyhow::Result<T> {
    result.map_err(|error| {
        tracing::debug!(%error, ?op, "Operation failed");
        anyhow!(error.user_message(op))
    })
}

/// Left-aligned text table sized to its widest cells.
#[derive(Debug, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn render(&self) -> String {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                let len = cell.chars().count();
                match widths.get_mut(i) {
                    Some(width) => *width = (*width).max(len),
                    None => widths.push(len),
                }
            }
        }

        let line = |cells: &[String]| -> String {
            cells
                .iter()
                .enumerate()
                .map(|(i, cell)| {
                    let pad = widths[i].saturating_sub(cell.chars().count());
                    format!("{cell}{}", " ".repeat(pad))
                })
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        };

        let mut out = vec![line(&self.headers)];
        out.push(
            widths
                .iter()
                .map(|w| "-".repeat(*w))
                .collect::<Vec<_>>()
                .join("  "),
        );
        out.extend(self.rows.iter().map(|row| line(row)));
        out.join("\n")
    }

    pub fn print(&self) {
        if self.is_empty() {
            println!("Tidak ada data");
        } else {
            println!("{}", self.render());
        }
    }
}

/// "Halaman 2 dari 3 (25 data)"
#[must_use]
pub fn page_footer(meta: &PaginationMeta) -> String {
    format!(
        "Halaman {} dari {} ({} data)",
        meta.page.unwrap_or(1),
        meta.total_pages,
        meta.total
    )
}

/// Placeholder for missing optional values.
#[must_use]
pub fn or_dash(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}
