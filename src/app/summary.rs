use crate::metrics::SummaryRow;

use super::RunReport;

const HEADERS: [&str; 6] = [
    "Endpoint",
    "Method",
    "Count",
    "Avg Latency(ms)",
    "Success",
    "Failed",
];

pub fn print_summary(report: &RunReport) {
    for line in summary_lines(&report.summary, report.elapsed_ms()) {
        println!("{}", line);
    }
}

/// Renders the per-endpoint table followed by the total elapsed time.
#[must_use]
pub fn summary_lines(rows: &[SummaryRow], elapsed_ms: u64) -> Vec<String> {
    let cells: Vec<[String; 6]> = rows
        .iter()
        .map(|row| {
            [
                row.name.clone(),
                row.method.to_string(),
                row.count.to_string(),
                row.avg_latency_display(),
                row.success.to_string(),
                row.failed.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(cells.len().saturating_add(3));
    lines.push(render_row(&HEADERS.map(str::to_owned), &widths));
    lines.push(
        widths
            .iter()
            .map(|width| "-".repeat(width.saturating_add(2)))
            .collect::<Vec<_>>()
            .join("+"),
    );
    for row in &cells {
        lines.push(render_row(row, &widths));
    }
    lines.push(format!("Total elapsed: {} ms", elapsed_ms));
    lines
}

// Text columns are left-aligned, numeric columns right-aligned.
fn render_row(cells: &[String; 6], widths: &[usize; 6]) -> String {
    cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(column, (cell, width))| {
            if column < 2 {
                format!(" {:<width$} ", cell, width = width)
            } else {
                format!(" {:>width$} ", cell, width = width)
            }
        })
        .collect::<Vec<_>>()
        .join("|")
        .trim_end()
        .to_owned()
}
