//! Column-aligned text rendering for matrices.
//!
//! Values follow the "#.##" pattern: rounded to a fixed number of decimal
//! digits, trailing fractional zeros stripped, negative zero normalized to
//! zero. Columns are right-aligned to the widest cell they contain.

use std::fmt;

use crate::primitives::Matrix;

/// Rendering configuration, passed per call.
///
/// Kept as an explicit value so the core carries no process-wide formatting
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Number of decimal digits to round to.
    pub precision: usize,
}

impl Default for RenderOptions {
    /// The calculator's "#.##" pattern: two decimal digits.
    fn default() -> Self {
        Self { precision: 2 }
    }
}

/// Formats one value: round, normalize -0.0, strip trailing zeros.
fn format_value(value: f64, precision: usize) -> String {
    let factor = 10f64.powi(precision as i32);
    let rounded = (value * factor).round() / factor;
    // -0.0 == 0.0, so this also drops the sign of a negative zero
    let normalized = if rounded == 0.0 { 0.0 } else { rounded };
    let mut text = format!("{normalized:.precision$}");
    if text.contains('.') {
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
    }
    text
}

impl Matrix<f64> {
    /// Renders the matrix as a space-separated, column-aligned grid.
    ///
    /// Cells are right-aligned to the widest formatted value in their
    /// column, separated by a single space; every row, the last included,
    /// ends with a newline.
    #[must_use]
    pub fn render(&self, options: &RenderOptions) -> String {
        let (rows, cols) = self.shape();
        let cells: Vec<Vec<String>> = (0..rows)
            .map(|row| {
                (0..cols)
                    .map(|col| format_value(self.get(row, col), options.precision))
                    .collect()
            })
            .collect();
        let widths: Vec<usize> = (0..cols)
            .map(|col| cells.iter().map(|row| row[col].len()).max().unwrap_or(0))
            .collect();

        let mut out = String::new();
        for row in &cells {
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    out.push(' ');
                }
                for _ in cell.len()..widths[col] {
                    out.push(' ');
                }
                out.push_str(cell);
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Matrix<f64> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&RenderOptions::default()))
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
