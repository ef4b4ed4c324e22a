//! Level 3: filename gate.
//!
//! Two independent violations, both reported when present:
//!
//! - A: the basename matches none of the category's suffixes.
//! - B: the pre-suffix base is not kebab-case, or does not equal the
//!   hyphen-join of the domain segments.
//!
//! Either one halts the pipeline. In categories that allow layer files the
//! diagnostics switch to the `...WithLayer` variants, which append the
//! decomposition-helper hint to the message.

use structure_lint_core::{Diagnostic, FolderCategory, FolderConfig, Location, MessageId};

use crate::case::{is_kebab_case, to_kebab_case};
use crate::classifier::Classification;
use crate::pipeline::Gate;
use crate::suffix::{strip_file_suffix, suffix_without_extension};

const PROXY_SUFFIX_TS: &[&str] = &[".proxy.ts"];
const PROXY_SUFFIX_TSX: &[&str] = &[".proxy.tsx"];

/// Checks the basename's suffix, case, and domain prefix.
///
/// On pass, carries the pre-suffix filename base forward for Level 4's
/// expected-name derivation.
pub fn run(
    classification: &Classification,
    category: FolderCategory,
    config: &FolderConfig,
    anchor: &Location,
) -> Gate<String> {
    // Proxy companions answer to the proxy suffix, not the category's.
    let suffixes: &[&'static str] = if classification.is_proxy_file {
        if classification.basename.ends_with(".tsx") {
            PROXY_SUFFIX_TSX
        } else {
            PROXY_SUFFIX_TS
        }
    } else {
        config.file_suffixes
    };

    let matched = strip_file_suffix(&classification.basename, suffixes);
    let mut diagnostics = Vec::new();

    if matched.matched.is_none() {
        let id = if config.allows_layer_files {
            MessageId::InvalidFileSuffixWithLayer
        } else {
            MessageId::InvalidFileSuffix
        };
        diagnostics.push(
            Diagnostic::new(id, anchor.clone())
                .with("expected", suffixes.join("\" or \""))
                .with("folderType", category.as_str()),
        );
    }

    if let Some(case_diagnostic) = base_violation(classification, config, &matched.base, anchor) {
        diagnostics.push(case_diagnostic);
    }

    if diagnostics.is_empty() {
        Gate::Continue(matched.base)
    } else {
        Gate::Halt(diagnostics)
    }
}

/// Violation B: kebab-case grammar, then domain-prefix equality.
///
/// The domain check is skipped for layer files (their base is a free-form
/// description) and for depth-0 categories (no domain segments exist).
fn base_violation(
    classification: &Classification,
    config: &FolderConfig,
    base: &str,
    anchor: &Location,
) -> Option<Diagnostic> {
    let id = if config.allows_layer_files {
        MessageId::InvalidFilenameCaseWithLayer
    } else {
        MessageId::InvalidFilenameCase
    };

    if !is_kebab_case(base) {
        return Some(
            Diagnostic::new(id, anchor.clone())
                .with("actual", base.to_owned())
                .with("expected", to_kebab_case(base)),
        );
    }

    if classification.is_layer_file || config.required_depth == 0 {
        return None;
    }

    // A proxy's base still carries the category suffix (`http-get-adapter`
    // for `http-get-adapter.proxy.ts`); peel it before the domain compare.
    let compared = if classification.is_proxy_file {
        strip_category_suffix(base, config)
    } else {
        base
    };

    let domain = classification.segments[1..].join("-");
    if compared != domain {
        return Some(
            Diagnostic::new(id, anchor.clone())
                .with("actual", compared.to_owned())
                .with("expected", domain),
        );
    }

    None
}

fn strip_category_suffix<'a>(base: &'a str, config: &FolderConfig) -> &'a str {
    let mut ordered: Vec<&str> = config
        .file_suffixes
        .iter()
        .map(|s| suffix_without_extension(s))
        .collect();
    ordered.sort_by_key(|s| std::cmp::Reverse(s.len()));
    for suffix in ordered {
        if let Some(stripped) = base.strip_suffix(suffix) {
            return stripped;
        }
    }
    base
}
