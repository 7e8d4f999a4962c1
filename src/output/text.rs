//! Human-readable text output

use super::ColumnReport;

/// Print a column report to the console
///
/// Shows the fitted model, every candidate's criterion (winner marked) and the
/// first `preview` synthetic values.
pub fn print_report(report: &ColumnReport, preview: usize) {
    print!("{}", render_report(report, preview));
}

/// Render a column report as text
pub fn render_report(report: &ColumnReport, preview: usize) -> String {
    let mut out = String::new();
    out.push_str("═══════════════════════════════════════════════════════════\n");
    out.push_str(&format!("                    COLUMN: {}\n", report.column));
    out.push_str("═══════════════════════════════════════════════════════════\n\n");

    out.push_str(&format!("Rows:      {}\n", format_number(report.rows as u64)));
    out.push_str(&format!("Missing:   {:.1}%\n", report.prop_missing * 100.0));
    out.push_str(&format!("Selected:  {}\n\n", report.selected));

    if !report.scores.is_empty() {
        out.push_str("Information criterion (lower is better):\n");
        for score in &report.scores {
            let marker = if score.selected { "*" } else { " " };
            let criterion = match score.criterion {
                Some(value) => format!("{:.4}", value),
                None => "impossible".to_string(),
            };
            out.push_str(&format!("  {} {:<30} {:>14}\n", marker, score.name, criterion));
        }
        out.push('\n');
    }

    let shown: Vec<String> = report
        .synthetic
        .iter()
        .take(preview)
        .map(|value| match value {
            Some(v) => v.to_string(),
            None => "NA".to_string(),
        })
        .collect();
    out.push_str(&format!(
        "Synthetic ({} values): {}",
        format_number(report.synthetic.len() as u64),
        shown.join(", ")
    ));
    if report.synthetic.len() > preview {
        out.push_str(", ...");
    }
    out.push('\n');
    out
}

/// Format number with thousands separators
fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();

    for (count, c) in s.chars().rev().enumerate() {
        if count > 0 && count % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result.chars().rev().collect()
}
