//! Diagnostics and batch results.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::location::Location;
use crate::message::MessageId;

/// A structure violation found during analysis.
///
/// Carries a stable [`MessageId`], the interpolation data its template
/// needs, and the source location to anchor the report at. Formatting and
/// display are the reporting sink's concern; [`Diagnostic::render`] exists
/// for hosts that want the canonical text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Stable message identifier.
    pub message_id: MessageId,
    /// Interpolation data, keyed by template slot name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub data: BTreeMap<String, String>,
    /// Location the finding is anchored at.
    pub location: Location,
}

impl Diagnostic {
    /// Creates a new diagnostic with no interpolation data.
    #[must_use]
    pub fn new(message_id: MessageId, location: Location) -> Self {
        Self {
            message_id,
            data: BTreeMap::new(),
            location,
        }
    }

    /// Adds one interpolation entry.
    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.data.insert(key.to_owned(), value.into());
        self
    }

    /// Renders the message template with this diagnostic's data.
    ///
    /// Unknown slots are left verbatim so a missing key is visible rather
    /// than silently dropped.
    #[must_use]
    pub fn render(&self) -> String {
        let mut message = self.message_id.template().to_owned();
        for (key, value) in &self.data {
            message = message.replace(&format!("{{{{{key}}}}}"), value);
        }
        message
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: [{}] {}", self.location, self.message_id, self.render())
    }
}

/// Result of running structure lint over a batch of files.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LintResult {
    /// All diagnostics found.
    pub diagnostics: Vec<Diagnostic>,
    /// Number of files checked.
    pub files_checked: usize,
    /// Number of files skipped as unclassifiable (outside the source root,
    /// test/stub companions, etc.).
    pub files_skipped: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if any diagnostics were found.
    #[must_use]
    pub fn has_violations(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Sorts diagnostics by file, then line, then column.
    pub fn sort(&mut self) {
        self.diagnostics.sort_by(|a, b| {
            a.location
                .file
                .cmp(&b.location.file)
                .then(a.location.line.cmp(&b.location.line))
                .then(a.location.column.cmp(&b.location.column))
        });
    }

    /// Adds diagnostics and counters from another result.
    pub fn extend(&mut self, other: Self) {
        self.diagnostics.extend(other.diagnostics);
        self.files_checked += other.files_checked;
        self.files_skipped += other.files_skipped;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_diagnostic(file: &str, line: usize) -> Diagnostic {
        Diagnostic::new(
            MessageId::NoDefaultExport,
            Location::new(file, line, 1),
        )
    }

    #[test]
    fn render_interpolates_data() {
        let d = Diagnostic::new(
            MessageId::ForbiddenFolder,
            Location::module_start("src/utils/format-date.ts"),
        )
        .with("folder", "utils")
        .with("suggestion", "adapters or transformers");

        assert_eq!(
            d.render(),
            "Lvl1: Folder \"utils/\" is forbidden. Use \"adapters or transformers/\" instead according to project standards."
        );
    }

    #[test]
    fn render_repeats_slot_occurrences() {
        let d = Diagnostic::new(
            MessageId::InvalidFolderDepth,
            Location::module_start("src/brokers/user-fetch-broker.ts"),
        )
        .with("folder", "brokers")
        .with("expected", "2")
        .with("actual", "0")
        .with("pattern", "brokers/[domain]/[action]/[domain]-[action]-broker.ts");

        let message = d.render();
        // {{folder}} appears twice in the template
        assert_eq!(message.matches("brokers").count(), 3);
        assert!(message.contains("requires depth 2 but file is at depth 0"));
    }

    #[test]
    fn render_leaves_unknown_slots_visible() {
        let d = Diagnostic::new(
            MessageId::UnknownFolder,
            Location::module_start("src/whatever/file.ts"),
        )
        .with("folder", "whatever");

        assert!(d.render().contains("{{allowed}}"));
    }

    #[test]
    fn sort_orders_by_file_then_line() {
        let mut result = LintResult::new();
        result.diagnostics.push(make_diagnostic("src/b.ts", 1));
        result.diagnostics.push(make_diagnostic("src/a.ts", 9));
        result.diagnostics.push(make_diagnostic("src/a.ts", 2));
        result.sort();

        let order: Vec<(String, usize)> = result
            .diagnostics
            .iter()
            .map(|d| (d.location.file.display().to_string(), d.location.line))
            .collect();
        assert_eq!(
            order,
            vec![
                ("src/a.ts".to_owned(), 2),
                ("src/a.ts".to_owned(), 9),
                ("src/b.ts".to_owned(), 1),
            ]
        );
    }

    #[test]
    fn json_round_trip_keeps_wire_names() {
        let d = make_diagnostic("src/a.ts", 1);
        let json = serde_json::to_string(&d).unwrap();
        assert!(json.contains("\"noDefaultExport\""));
        let back: Diagnostic = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
    }
}
