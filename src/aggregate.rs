use std::collections::BTreeSet;

use crate::models::{Detection, SummaryRow};

const TABLE_HEADERS: [&str; 6] = ["Class Name", "Confidence", "x_min", "y_min", "x_max", "y_max"];

/// Distinct class names across all detections
pub fn unique_hazard_classes(detections: &[Detection]) -> BTreeSet<String> {
    detections.iter().map(|d| d.class_name.clone()).collect()
}

/// One row per detection, highest confidence first.
/// Equal confidences keep their detection order (stable sort).
pub fn build_summary_table(detections: &[Detection]) -> Vec<SummaryRow> {
    let mut rows: Vec<SummaryRow> = detections.iter().map(SummaryRow::from).collect();
    rows.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    rows
}

/// Render rows as a pipe-style markdown table (text left, numbers right aligned)
pub fn render_markdown_table(rows: &[SummaryRow]) -> String {
    let cells: Vec<[String; 6]> = rows
        .iter()
        .map(|r| {
            [
                r.class_name.clone(),
                r.confidence.to_string(),
                r.x_min.to_string(),
                r.y_min.to_string(),
                r.x_max.to_string(),
                r.y_max.to_string(),
            ]
        })
        .collect();

    let mut widths = TABLE_HEADERS.map(|h| h.chars().count());
    for row in &cells {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();

    let header: Vec<String> = TABLE_HEADERS
        .iter()
        .enumerate()
        .map(|(col, h)| pad(h, widths[col], col > 0))
        .collect();
    out.push_str(&format!("| {} |\n", header.join(" | ")));

    let rule: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(col, w)| {
            let dashes = "-".repeat(*w);
            if col == 0 { format!(":{}-", dashes) } else { format!("-{}:", dashes) }
        })
        .collect();
    out.push_str(&format!("|{}|", rule.join("|")));

    for row in &cells {
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(col, cell)| pad(cell, widths[col], col > 0))
            .collect();
        out.push_str(&format!("\n| {} |", line.join(" | ")));
    }

    out
}

fn pad(text: &str, width: usize, right_align: bool) -> String {
    if right_align {
        format!("{:>width$}", text, width = width)
    } else {
        format!("{:<width$}", text, width = width)
    }
}
