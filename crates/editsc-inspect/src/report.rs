use std::path::Path;

use crate::summary::{InspectSummary, RoundTrip};

/// Load a saved JSON report. Returns None if the file is missing or unreadable.
pub fn load_report(path: &Path) -> Option<InspectSummary> {
    let contents = std::fs::read_to_string(path).ok()?;
    serde_json::from_str(&contents).ok()
}

/// Save a summary as a JSON report.
pub fn save_report(path: &Path, summary: &InspectSummary) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(summary).map_err(std::io::Error::other)?;
    std::fs::write(path, json)
}

fn format_bounds(summary: &InspectSummary) -> String {
    match (summary.region_min, summary.region_max) {
        (Some(lo), Some(hi)) => format!("({}, {}) .. ({}, {})", lo[0], lo[1], hi[0], hi[1]),
        _ => "empty".to_string(),
    }
}

fn format_round_trip(round_trip: &RoundTrip) -> String {
    match round_trip {
        RoundTrip::Verified => "verified".to_string(),
        RoundTrip::Mismatch { offset } => format!("MISMATCH at byte {}", offset),
        RoundTrip::EncodeFailed { reason } => format!("FAILED: {}", reason),
        RoundTrip::Skipped => "skipped".to_string(),
        RoundTrip::Unsupported => "n/a".to_string(),
    }
}

/// Format a summary as markdown: a key/value table, then the block-type table.
pub fn format_markdown(summary: &InspectSummary) -> String {
    let mut out = String::new();
    out.push_str("| Field | Value |\n");
    out.push_str("|-------|-------|\n");
    out.push_str(&format!("| File | {} |\n", summary.file));
    out.push_str(&format!("| Size (bytes) | {} |\n", summary.size_bytes));
    out.push_str(&format!("| Layout | {} |\n", summary.layout));
    out.push_str(&format!("| Chunks | {} |\n", summary.chunk_count));
    out.push_str(&format!("| Region bounds | {} |\n", format_bounds(summary)));
    if let Some(used) = summary.directory_slots_used {
        out.push_str(&format!("| Directory slots used | {} |\n", used));
    }
    out.push_str(&format!(
        "| Round trip | {} |\n",
        format_round_trip(&summary.round_trip)
    ));

    if summary.top_block_types.is_empty() {
        return out;
    }

    out.push('\n');
    out.push_str("| Block type | Id | Count |\n");
    out.push_str("|------------|----|-------|\n");
    for t in &summary.top_block_types {
        out.push_str(&format!("| {} | {} | {} |\n", t.name, t.id, t.count));
    }
    out
}
