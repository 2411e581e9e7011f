//! BDD harness (cucumber-rs).
//!
//! This crate exists to keep scenario tests isolated from the production crates.
//! The helpers here turn the human-readable pattern names used in feature files
//! into request-file lines.

use fracdraw_types::PatternKind;

/// Build a request-file line (`kind,depth`) from a pattern name used in a scenario.
pub fn request_line(pattern: &str, depth: u32) -> anyhow::Result<String> {
    let kind = PatternKind::parse_key(pattern)
        .ok_or_else(|| anyhow::anyhow!("unknown pattern in scenario: {pattern}"))?;
    Ok(format!("{},{}", kind.index(), depth))
}
