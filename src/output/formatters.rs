//! Output formatting functionality
//!
//! Renders a [`DependencyIndex`] in each supported output format.

use crate::error::{Result, ScanError};
use crate::models::index::DependencyIndex;
use ansi_term::Colour::Cyan;
use ansi_term::Style;

/// Format the index as text: each module on its own line, its files indented below
pub fn format_index_text(index: &DependencyIndex, use_colors: bool) -> String {
    let mut output = String::new();

    for (module_name, files) in index {
        if use_colors {
            output.push_str(&format!(
                "{} {}\n",
                Cyan.bold().paint(module_name.as_str()),
                Style::new().dimmed().paint(format!("({})", files.len()))
            ));
        } else {
            output.push_str(&format!("{} ({})\n", module_name, files.len()));
        }

        for file in files {
            output.push_str(&format!("  {}\n", file));
        }
    }

    output
}

/// Format the index as a pretty-printed JSON object
pub fn format_index_json(index: &DependencyIndex) -> Result<String> {
    let mut json = serde_json::to_string_pretty(index)?;
    json.push('\n');
    Ok(json)
}

/// Format the index as CSV with one row per reference
pub fn format_index_csv(index: &DependencyIndex) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);

    writer.write_record(["module", "file"])?;

    for (module_name, file) in index.pairs() {
        writer.write_record([module_name, file])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ScanError::io_error(e.into_error()))?;

    String::from_utf8(bytes).map_err(|e| ScanError::Context {
        message: format!("CSV output is not valid UTF-8: {}", e),
    })
}
