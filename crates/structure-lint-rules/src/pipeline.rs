//! Pipeline driver composing the four gates.

use structure_lint_core::{Diagnostic, Location, ModuleAst, Taxonomy};
use tracing::debug;

use crate::classifier::classify_with_marker;
use crate::{depth_gate, export_gate, filename_gate, location_gate};

/// Outcome of one gate.
///
/// The gate/accumulate distinction is a property of this type: Levels 1-3
/// halt the pipeline on failure, Level 4 returns its findings directly.
#[derive(Debug)]
pub enum Gate<T> {
    /// Gate passed; carry state to the next level.
    Continue(T),
    /// Gate failed; these diagnostics end the pipeline for this file.
    Halt(Vec<Diagnostic>),
}

/// Outcome of running the pipeline on one path.
#[derive(Debug)]
pub enum Outcome {
    /// The path is outside the pipeline's scope (not an error).
    Skipped,
    /// The file was validated; an empty list means full conformance.
    Checked(Vec<Diagnostic>),
}

impl Outcome {
    /// The diagnostics of a checked file, or an empty slice when skipped.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            Self::Skipped => &[],
            Self::Checked(diagnostics) => diagnostics,
        }
    }
}

/// The project-structure rule: a deterministic function from
/// `(path, module AST, taxonomy)` to a diagnostic list.
///
/// Holds only the read-only taxonomy, so one instance can be shared across
/// threads for concurrent batch runs.
#[derive(Debug, Clone)]
pub struct StructureRule {
    taxonomy: Taxonomy,
    source_marker: String,
}

impl Default for StructureRule {
    fn default() -> Self {
        Self::new(Taxonomy::default())
    }
}

impl StructureRule {
    /// Creates a rule over the given taxonomy.
    #[must_use]
    pub fn new(taxonomy: Taxonomy) -> Self {
        Self {
            taxonomy,
            source_marker: crate::classifier::SOURCE_MARKER.to_owned(),
        }
    }

    /// Overrides the source-root marker folder (default `src`).
    #[must_use]
    pub fn with_source_marker(mut self, marker: impl Into<String>) -> Self {
        self.source_marker = marker.into();
        self
    }

    /// Validates one file.
    ///
    /// Pure and idempotent: the same inputs always produce the same
    /// outcome, in the same order.
    #[must_use]
    pub fn check(&self, path: &str, module: &ModuleAst) -> Outcome {
        let Some(classification) = classify_with_marker(path, &self.source_marker) else {
            debug!(path, "skipped: not classifiable");
            return Outcome::Skipped;
        };

        let anchor = Location::module_start(path);

        let (category, config) =
            match location_gate::run(&classification, &self.taxonomy, &anchor) {
                Gate::Continue(state) => state,
                Gate::Halt(diagnostics) => return Outcome::Checked(diagnostics),
            };
        debug!(path, %category, "level 1 passed");

        if let Gate::Halt(diagnostics) = depth_gate::run(&classification, category, &config, &anchor)
        {
            return Outcome::Checked(diagnostics);
        }

        // Assets and migrations carry no naming contract at all.
        if config.exempt_from_naming() {
            return Outcome::Checked(Vec::new());
        }

        let filename_base =
            match filename_gate::run(&classification, category, &config, &anchor) {
                Gate::Continue(base) => base,
                Gate::Halt(diagnostics) => return Outcome::Checked(diagnostics),
            };
        debug!(path, base = %filename_base, "level 3 passed");

        let diagnostics = export_gate::run(
            module,
            category,
            &config,
            &classification,
            &filename_base,
            path,
        );
        Outcome::Checked(diagnostics)
    }
}
