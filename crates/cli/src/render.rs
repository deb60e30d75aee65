// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use ad_lifecycle_domain::AdStatus;
use ad_lifecycle_domain::transitions::{EVENT_TRANSITIONS, TRANSITIONS};
use color_eyre::{Result, eyre::Context};
use serde_json::{Value, json};
use std::fmt::Write as _;
use std::io::Read;
use std::path::Path;

/// Renders both transition tables, as text or as JSON.
pub fn transition_table(as_json: bool) -> Result<String> {
    if as_json {
        let table: Value = json!({
            "actions": TRANSITIONS,
            "events": EVENT_TRANSITIONS,
        });
        return Ok(serde_json::to_string_pretty(&table)?);
    }

    let mut out: String = String::new();
    writeln!(out, "Operator actions")?;
    for rule in TRANSITIONS {
        let from: Vec<&str> = rule.from.iter().map(AdStatus::as_str).collect();
        writeln!(out, "  {:<16} {} -> {}", rule.action.as_str(), from.join(" | "), rule.to)?;
    }
    writeln!(out, "External events")?;
    for rule in EVENT_TRANSITIONS {
        writeln!(out, "  {:<16} {} -> {}", rule.event.as_str(), rule.from, rule.to)?;
    }
    Ok(out.trim_end().to_string())
}

/// Reads the `--fields` JSON from a file, or from standard input for `-`.
///
/// No path means no fields.
pub fn read_fields(source: Option<&Path>) -> Result<Value> {
    let Some(path) = source else {
        return Ok(Value::Null);
    };

    let raw: String = if path.as_os_str() == "-" {
        let mut buffer: String = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .wrap_err("Failed to read fields from standard input")?;
        buffer
    } else {
        std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read fields from {}", path.display()))?
    };

    serde_json::from_str(&raw).wrap_err("Fields are not valid JSON")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_text_table_lists_every_row() {
        let table: String = transition_table(false).unwrap();

        assert!(table.starts_with("Operator actions"));
        assert!(table.contains("update-schedule"));
        assert!(table.contains("SUBMITTED | UNDER_REVIEW | PENDING_PAYMENT -> CANCELLED"));
        assert!(table.contains("payment-confirmed"));
        assert_eq!(
            table.lines().count(),
            2 + TRANSITIONS.len() + EVENT_TRANSITIONS.len()
        );
    }

    #[test]
    fn test_json_table() {
        let table: Value = serde_json::from_str(&transition_table(true).unwrap()).unwrap();

        assert_eq!(table["actions"].as_array().unwrap().len(), TRANSITIONS.len());
        assert_eq!(table["actions"][0]["action"], "approve");
        assert_eq!(table["actions"][0]["from"], json!(["SUBMITTED"]));
        assert_eq!(table["events"][1]["to"], "RUNNING");
    }

    #[test]
    fn test_read_fields_without_source() {
        assert_eq!(read_fields(None).unwrap(), Value::Null);
    }

    #[test]
    fn test_read_fields_missing_file() {
        let result = read_fields(Some(Path::new("/nonexistent/ad-lifecycle/fields.json")));
        assert!(result.is_err());
    }
}
