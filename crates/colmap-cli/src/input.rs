//! Reading column-name lists from files.
//!
//! `.csv` files contribute their header row; no data rows are needed. Any
//! other file is read as one column name per line, with blank lines and
//! `#` comments skipped.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// Reads the column names listed in `path`, keeping file order.
pub fn read_columns(path: &Path) -> Result<Vec<String>> {
    let columns = if is_csv(path) {
        read_csv_header(path)?
    } else {
        read_name_list(path)?
    };
    debug!(path = %path.display(), count = columns.len(), "read column names");
    Ok(columns)
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

fn read_csv_header(path: &Path) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("open {}", path.display()))?;
    let headers = reader
        .headers()
        .with_context(|| format!("read header row of {}", path.display()))?;
    Ok(headers.iter().map(str::to_string).collect())
}

fn read_name_list(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    Ok(parse_name_list(&text))
}

/// Parses one column name per line.
pub fn parse_name_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_blank_lines_and_comments() {
        let names = parse_name_list("# target schema\nholder_id\n\n  sex \npremium\n");
        assert_eq!(names, vec!["holder_id", "sex", "premium"]);
    }

    #[test]
    fn detects_csv_extension() {
        assert!(is_csv(Path::new("schema.CSV")));
        assert!(!is_csv(Path::new("schema.txt")));
        assert!(!is_csv(Path::new("schema")));
    }
}
