//! Level 2: depth and segment-case gate.

use structure_lint_core::{Diagnostic, FolderCategory, FolderConfig, Location, MessageId};

use crate::case::{is_kebab_case, to_kebab_case};
use crate::classifier::Classification;
use crate::pipeline::Gate;

/// Checks nesting depth against the category's requirement, then each
/// folder segment beneath the category against the kebab-case grammar.
///
/// Depth is checked first: until the segment count is right, there is
/// nothing meaningful to say about segment content.
pub fn run(
    classification: &Classification,
    category: FolderCategory,
    config: &FolderConfig,
    anchor: &Location,
) -> Gate<()> {
    if classification.depth != config.required_depth {
        return Gate::Halt(vec![Diagnostic::new(
            MessageId::InvalidFolderDepth,
            anchor.clone(),
        )
        .with("folder", category.as_str())
        .with("expected", config.required_depth.to_string())
        .with("actual", classification.depth.to_string())
        .with("pattern", config.folder_pattern)]);
    }

    for segment in &classification.segments[1..] {
        if !is_kebab_case(segment) {
            return Gate::Halt(vec![Diagnostic::new(
                MessageId::InvalidFilenameCase,
                anchor.clone(),
            )
            .with("actual", segment.clone())
            .with("expected", to_kebab_case(segment))]);
        }
    }

    Gate::Continue(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify;
    use structure_lint_core::Taxonomy;

    fn check(path: &str) -> Gate<()> {
        let classification = classify(path).unwrap();
        let taxonomy = Taxonomy::default();
        let category = FolderCategory::parse(&classification.category_name).unwrap();
        let config = taxonomy.config(category).unwrap();
        run(
            &classification,
            category,
            config,
            &Location::module_start(path),
        )
    }

    #[test]
    fn passes_correct_depth() {
        assert!(matches!(
            check("src/brokers/user/fetch/user-fetch-broker.ts"),
            Gate::Continue(())
        ));
        assert!(matches!(
            check("src/startup/start-server.ts"),
            Gate::Continue(())
        ));
    }

    #[test]
    fn too_shallow_broker_halts() {
        let Gate::Halt(diagnostics) = check("src/brokers/user-fetch-broker.ts") else {
            panic!("expected halt");
        };
        assert_eq!(diagnostics[0].message_id, MessageId::InvalidFolderDepth);
        assert_eq!(diagnostics[0].data.get("expected").map(String::as_str), Some("2"));
        assert_eq!(diagnostics[0].data.get("actual").map(String::as_str), Some("0"));
    }

    #[test]
    fn too_deep_guard_halts() {
        let Gate::Halt(diagnostics) =
            check("src/guards/auth/session/has-session-guard.ts")
        else {
            panic!("expected halt");
        };
        assert_eq!(diagnostics[0].message_id, MessageId::InvalidFolderDepth);
        assert_eq!(
            diagnostics[0].data.get("pattern").map(String::as_str),
            Some("guards/[domain]/[domain]-guard.ts")
        );
    }

    #[test]
    fn non_kebab_segment_reports_correction() {
        let Gate::Halt(diagnostics) =
            check("src/brokers/UserAccount/fetch/user-fetch-broker.ts")
        else {
            panic!("expected halt");
        };
        assert_eq!(diagnostics[0].message_id, MessageId::InvalidFilenameCase);
        assert_eq!(
            diagnostics[0].data.get("actual").map(String::as_str),
            Some("UserAccount")
        );
        assert_eq!(
            diagnostics[0].data.get("expected").map(String::as_str),
            Some("user-account")
        );
    }

    #[test]
    fn depth_reported_before_segment_case() {
        // Wrong depth and bad casing together: only the depth finding.
        let Gate::Halt(diagnostics) = check("src/brokers/UserAccount/user-fetch-broker.ts")
        else {
            panic!("expected halt");
        };
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message_id, MessageId::InvalidFolderDepth);
    }
}
