//! Roster file loading.
//!
//! A roster file is the first sheet of the entry spreadsheet exported as JSON:
//! `{ "columns": [...], "rows": [[...], ...] }`. Cells may be strings, numbers
//! or null.

use anyhow::{Context, Result};
use kumite_pools::RosterTable;
use serde::Deserialize;
use serde_json::Value;
use std::{fs, path::Path};

#[derive(Debug, Deserialize)]
struct RawRoster {
    columns: Vec<Value>,
    #[serde(default)]
    rows: Vec<Vec<Value>>,
}

fn cell_text(cell: &Value) -> String {
    match cell {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Parse roster JSON into a table
pub fn parse_roster(json: &str) -> Result<RosterTable> {
    let raw: RawRoster = serde_json::from_str(json).context("Roster is not valid JSON")?;

    let columns = raw.columns.iter().map(cell_text).collect();
    let rows = raw
        .rows
        .iter()
        .map(|row| row.iter().map(cell_text).collect())
        // Spreadsheet exports often end with blank rows
        .filter(|row: &Vec<String>| row.iter().any(|cell| !cell.trim().is_empty()))
        .collect();

    Ok(RosterTable::new(columns, rows))
}

/// Read and parse a roster file
pub fn load_roster(path: &Path) -> Result<RosterTable> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read roster {}", path.display()))?;
    parse_roster(&json).with_context(|| format!("Failed to parse roster {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_cells() {
        let table = parse_roster(
            r#"{
                "columns": ["Name", "Age", "Weight (kg)", "Belt"],
                "rows": [
                    ["Ren", 12, 40.5, "yellow"],
                    ["Mio", "11", null],
                    [null, "", null, null]
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(table.columns, vec!["Name", "Age", "Weight (kg)", "Belt"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0], vec!["Ren", "12", "40.5", "yellow"]);
        assert_eq!(table.rows[1], vec!["Mio", "11", ""]);
    }

    #[test]
    fn test_parse_without_rows() {
        let table = parse_roster(r#"{ "columns": ["Name"] }"#).unwrap();
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_roster("name,age\nRen,12").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_roster(Path::new("/no/such/roster.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read roster"));
    }
}
