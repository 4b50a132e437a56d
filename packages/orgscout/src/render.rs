//! Rendering of scout results.
//!
//! Human-readable output prints each address between horizontal rules:
//! the record's `name` as a header, then one row per field with camelCase
//! keys split into words. Bookkeeping fields (`@context`, `@type`, ...) and
//! `potentialAction` are not shown. JSON-LD output dumps the records as-is.

use serde_json::json;

use crate::pipeline::AddressOutcome;
use crate::types::record::{Record, Value};

const DEFAULT_WIDTH: usize = 80;
const INDENT: &str = "  ";
const HIDDEN_FIELDS: &[&str] = &["name", "potentialAction"];

/// Render outcomes for a terminal, sized to the current terminal width.
pub fn human_readable(outcomes: &[AddressOutcome]) -> String {
    human_readable_with_width(outcomes, terminal_width())
}

/// Render outcomes with rules of a fixed width.
pub fn human_readable_with_width(outcomes: &[AddressOutcome], width: usize) -> String {
    let rule = "─".repeat(width);
    let mut sections = Vec::with_capacity(outcomes.len() * 2 + 1);

    for outcome in outcomes {
        sections.push(rule.clone());
        sections.push(render_outcome(outcome));
    }
    sections.push(rule);

    sections.join("\n")
}

fn render_outcome(outcome: &AddressOutcome) -> String {
    match &outcome.result {
        Ok(record) if record.has_data() => pretty_record(record),
        Ok(_) => format!("No organisation data found for {}", outcome.domain),
        Err(e) => e.to_string(),
    }
}

/// Render one record as indented text.
pub fn pretty_record(record: &Record) -> String {
    let mut lines: Vec<String> = Vec::new();

    if let Some(name) = record.get("name") {
        lines.push(inline(name));
    }

    for (key, value) in record {
        if key.starts_with('@') || HIDDEN_FIELDS.contains(&key.as_str()) || value.is_null() {
            continue;
        }
        let label = split_camel_case(key);

        match value {
            Value::Sequence(items) => {
                lines.push(format!("{}:", label));
                for item in items.iter().filter(|item| !item.is_null()) {
                    match item {
                        Value::Record(nested) => push_indented(&mut lines, &pretty_record(nested)),
                        other => lines.push(format!("{}{}", INDENT, inline(other))),
                    }
                }
            }
            Value::Record(nested) => {
                lines.push(format!("{}:", label));
                push_indented(&mut lines, &pretty_record(nested));
            }
            Value::Scalar(scalar) => lines.push(format!("{}: {}", label, scalar)),
        }
    }

    lines.join("\n")
}

/// Render outcomes as a pretty-printed JSON array.
///
/// Failures appear as `{"address", "domain", "error"}` objects.
pub fn json_ld(outcomes: &[AddressOutcome]) -> serde_json::Result<String> {
    let values: Vec<serde_json::Value> = outcomes
        .iter()
        .map(|outcome| match &outcome.result {
            Ok(record) => serde_json::Value::from(record.clone()),
            Err(e) => json!({
                "address": outcome.address,
                "domain": outcome.domain,
                "error": e.to_string(),
            }),
        })
        .collect();

    serde_json::to_string_pretty(&values)
}

/// Split a camelCase key into capitalised words (`sameAs` -> `Same As`).
pub fn split_camel_case(key: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();

    for c in key.chars() {
        if c.is_uppercase() && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Rule width: `COLUMNS`, else the terminal's width, else 80.
pub fn terminal_width() -> usize {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|c| c.trim().parse::<usize>().ok())
        .filter(|w| *w > 0)
        .or_else(|| {
            console::Term::stdout()
                .size_checked()
                .map(|(_rows, cols)| cols as usize)
        })
        .unwrap_or(DEFAULT_WIDTH)
}

fn push_indented(lines: &mut Vec<String>, block: &str) {
    lines.extend(block.lines().map(|line| format!("{}{}", INDENT, line)));
}

/// One-line form of a value (sequences joined with commas).
fn inline(value: &Value) -> String {
    match value {
        Value::Scalar(scalar) => scalar.to_string(),
        Value::Sequence(items) => items
            .iter()
            .filter(|item| !item.is_null())
            .map(inline)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Record(record) => record
            .get("name")
            .map(inline)
            .unwrap_or_else(|| pretty_record(record).replace('\n', "; ")),
    }
}
