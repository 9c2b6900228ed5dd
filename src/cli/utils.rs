//! Result rendering and shared display helpers

use crate::invoker::ActionResult;
use colored::*;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde_json::Value;

/// Longest value shown in table output before truncation
pub const MAX_CELL_CHARS: usize = 100;

/// Display a user-friendly error headline on stderr
pub fn display_error<E: std::fmt::Display>(error: &E, context: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), context);
    eprintln!("   {}", error.to_string().red());
}

/// Truncate text to `max_chars` characters, appending an ellipsis when cut
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Text shown for one result field in table output
///
/// Strings are shown as is, maps and arrays (byte buffers included) as
/// compact JSON, other scalars by their JSON display.
pub fn display_value(value: &Value) -> String {
    let text = match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    };
    truncate_with_ellipsis(&text, MAX_CELL_CHARS)
}

/// Render a result as a two-column key/value table
pub fn render_table(result: &ActionResult) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    for (key, value) in result.iter() {
        table.add_row(vec![key.clone(), display_value(value)]);
    }

    table.to_string()
}

/// Render a result in the requested output format
pub fn render_result(result: &ActionResult, format: &str) -> serde_json::Result<String> {
    match format {
        "json" => result.to_pretty_json(),
        _ => Ok(render_table(result)),
    }
}
