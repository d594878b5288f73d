//! Boxed text rendering of the stats table

use std::fmt::Write;

use cntrlib::StatsTable;
use console::Style;

/// Minimum content width of each column. Longer values widen their cell.
const COLUMN_WIDTHS: [usize; 6] = [15, 14, 6, 9, 13, 15];

/// Width between the outer corners of the frame
fn inner_width() -> usize {
    COLUMN_WIDTHS.iter().map(|w| w + 2).sum::<usize>() + COLUMN_WIDTHS.len() - 1
}

/// Render the table inside an ASCII frame:
///
/// ```text
/// ,------------------------------------------------ ... ,
/// |   Description   |  No. of files  |  Size  | ...     |
/// |-----------------+----------------+--------+ ...     |
/// | C source        | 1              | 66.0B  | ...     |
/// `------------------------------------------------ ... `
/// ```
pub fn render_table(table: &StatsTable) -> String {
    let label_style = Style::new().bold();
    let rule = "-".repeat(inner_width());
    let mut out = String::new();

    let _ = writeln!(out, ",{rule},");

    out.push('|');
    for (header, width) in table.headers.iter().zip(COLUMN_WIDTHS) {
        let _ = write!(out, "{:^width$}|", header, width = width + 2);
    }
    out.push('\n');

    let separator: Vec<String> = COLUMN_WIDTHS.iter().map(|w| "-".repeat(w + 2)).collect();
    let _ = writeln!(out, "|{}|", separator.join("+"));

    for row in &table.rows {
        let label = format!("{:<width$}", row.label, width = COLUMN_WIDTHS[0]);
        let _ = write!(out, "| {} |", label_style.apply_to(label));
        for (value, width) in row.values.iter().zip(COLUMN_WIDTHS[1..].iter().copied()) {
            let _ = write!(out, " {:<width$} |", value, width = width);
        }
        out.push('\n');
    }

    let _ = writeln!(out, "`{rule}`");
    out
}
