use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;

use crate::error::{PslError, Result};
use crate::rules::{RuleStore, RuleStoreBuilder};
use crate::types::Section;

/// Regex pattern for PSL section markers
/// Format: // ===BEGIN ICANN DOMAINS===
static SECTION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^//\s*===(BEGIN|END) (ICANN|PRIVATE) DOMAINS===")
        .expect("SECTION_PATTERN: hardcoded regex is invalid")
});

/// Parse Public Suffix List text into a rule store.
///
/// Only rules between a `BEGIN` and matching `END` marker are kept. Each rule
/// is the first whitespace-delimited token of its line; `//` starts a comment
/// line.
pub fn parse_rules(text: &str) -> Result<RuleStore> {
    let mut builder = RuleStoreBuilder::new();
    let mut section: Option<Section> = None;
    let mut counts = [0usize; 2];
    let mut skipped = 0usize;

    for (line_num, line) in text.lines().enumerate() {
        let line_num = line_num + 1; // 1-based line numbers
        let line = line.trim();

        if let Some(captures) = SECTION_PATTERN.captures(line) {
            let marked = match &captures[2] {
                "ICANN" => Section::Icann,
                _ => Section::Private,
            };
            section = match &captures[1] {
                "BEGIN" => Some(marked),
                _ if section == Some(marked) => None,
                _ => {
                    return Err(PslError::ParseErrorAtLine {
                        line: line_num,
                        message: format!("Unbalanced section marker: {}", line),
                    })
                }
            };
            continue;
        }

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with("//") {
            continue;
        }

        let Some(current) = section else {
            skipped += 1;
            continue;
        };

        let rule = line.split_whitespace().next().unwrap_or(line);
        builder
            .add_rule(current, rule)
            .map_err(|e| PslError::ParseErrorAtLine {
                line: line_num,
                message: e.to_string(),
            })?;
        counts[usize::from(current == Section::Private)] += 1;
    }

    if skipped > 0 {
        log::warn!("Skipped {} rule lines outside any section", skipped);
    }
    log::debug!(
        "Parsed {} ICANN and {} private rules",
        counts[0],
        counts[1]
    );

    Ok(builder.build())
}

/// Parse Public Suffix List text from a file.
pub fn parse_rules_from_file(path: impl AsRef<Path>) -> Result<RuleStore> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| {
        PslError::ParseError(format!(
            "Failed to read list file '{}': {}",
            path.display(),
            e
        ))
    })?;
    parse_rules(&text)
}
