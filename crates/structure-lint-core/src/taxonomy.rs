//! Folder taxonomy: the naming contract each project folder enforces.
//!
//! The table content is the project standard being enforced, so it is
//! compiled in rather than loaded from disk. [`Taxonomy::validate`] still
//! runs at startup: a malformed entry is a programmer error and must fail
//! loudly, never silently default.

use std::collections::BTreeMap;
use thiserror::Error;

/// Top-level classification folder with its own naming contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FolderCategory {
    /// External package wrappers (`adapters/`).
    Adapters,
    /// Static assets (`assets/`), exempt from naming rules.
    Assets,
    /// Framework bindings (`bindings/`).
    Bindings,
    /// Business operations (`brokers/`).
    Brokers,
    /// Data shape contracts (`contracts/`).
    Contracts,
    /// Error classes (`errors/`).
    Errors,
    /// Route-level flows (`flows/`).
    Flows,
    /// Boolean predicates (`guards/`).
    Guards,
    /// Cross-cutting middleware (`middleware/`).
    Middleware,
    /// Database migrations (`migrations/`), exempt from naming rules.
    Migrations,
    /// Request/route responders (`responders/`).
    Responders,
    /// Application entry points (`startup/`).
    Startup,
    /// Shared state containers (`state/`).
    State,
    /// Constant tables (`statics/`).
    Statics,
    /// Pure data transformations (`transformers/`).
    Transformers,
    /// UI widgets (`widgets/`).
    Widgets,
}

impl FolderCategory {
    /// All categories, in sorted order.
    pub const ALL: [Self; 16] = [
        Self::Adapters,
        Self::Assets,
        Self::Bindings,
        Self::Brokers,
        Self::Contracts,
        Self::Errors,
        Self::Flows,
        Self::Guards,
        Self::Middleware,
        Self::Migrations,
        Self::Responders,
        Self::Startup,
        Self::State,
        Self::Statics,
        Self::Transformers,
        Self::Widgets,
    ];

    /// The folder name of this category.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Adapters => "adapters",
            Self::Assets => "assets",
            Self::Bindings => "bindings",
            Self::Brokers => "brokers",
            Self::Contracts => "contracts",
            Self::Errors => "errors",
            Self::Flows => "flows",
            Self::Guards => "guards",
            Self::Middleware => "middleware",
            Self::Migrations => "migrations",
            Self::Responders => "responders",
            Self::Startup => "startup",
            Self::State => "state",
            Self::Statics => "statics",
            Self::Transformers => "transformers",
            Self::Widgets => "widgets",
        }
    }

    /// Parses a folder name into a category.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == name)
    }
}

impl std::fmt::Display for FolderCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Letter-case convention required of a category's export identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportCase {
    /// `camelCase`
    Camel,
    /// `PascalCase`
    Pascal,
    /// No convention; together with an empty export suffix this exempts the
    /// category from filename and export validation entirely.
    None,
}

impl ExportCase {
    /// Wire name used in diagnostic data (`camelCase` / `PascalCase`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Camel => "camelCase",
            Self::Pascal => "PascalCase",
            Self::None => "",
        }
    }
}

/// Naming conventions of one folder category.
#[derive(Debug, Clone, Copy)]
pub struct FolderConfig {
    /// Count of folders required strictly beneath the category folder.
    pub required_depth: usize,
    /// Accepted filename suffixes. Suffixes containing a dot match against
    /// the full basename; suffixes without one match after stripping the
    /// extension. Longest-match-first when stripping.
    pub file_suffixes: &'static [&'static str],
    /// Required export-name suffix; empty means no suffix requirement.
    pub export_suffix: &'static str,
    /// Required export-name case convention.
    pub export_case: ExportCase,
    /// Whether `-layer-` decomposition helpers are permitted.
    pub allows_layer_files: bool,
    /// Human-readable expected path pattern for depth diagnostics.
    pub folder_pattern: &'static str,
}

impl FolderConfig {
    /// True for categories (assets, migrations) that bypass filename and
    /// export validation entirely.
    #[must_use]
    pub fn exempt_from_naming(&self) -> bool {
        self.export_suffix.is_empty() && self.export_case == ExportCase::None
    }
}

/// Folders banned outright, with the replacement to suggest. A `None`
/// suggestion falls back to `contracts`.
const FORBIDDEN_FOLDERS: &[(&str, Option<&str>)] = &[
    ("utils", Some("adapters or transformers")),
    ("lib", Some("adapters")),
    ("helpers", Some("guards or transformers")),
    ("services", Some("brokers")),
    ("types", Some("contracts")),
    ("common", None),
    ("shared", None),
];

/// Returns the suggested replacement if `folder` is forbidden.
#[must_use]
pub fn forbidden_folder_suggestion(folder: &str) -> Option<&'static str> {
    FORBIDDEN_FOLDERS
        .iter()
        .find(|(name, _)| *name == folder)
        .map(|(_, suggestion)| suggestion.unwrap_or("contracts"))
}

/// Errors detected when validating the taxonomy table.
#[derive(Debug, Error)]
pub enum TaxonomyError {
    /// A category has no entry in the table.
    #[error("category '{0}' has no taxonomy entry")]
    MissingEntry(FolderCategory),
    /// An entry pairs an empty case with a non-empty suffix requirement.
    #[error("category '{0}': export case is empty but export suffix is '{1}'")]
    CaseSuffixMismatch(FolderCategory, String),
    /// A naming-checked entry has no filename suffixes.
    #[error("category '{0}': no file suffixes configured")]
    NoFileSuffixes(FolderCategory),
    /// A filename suffix does not begin with '-' or '.'.
    #[error("category '{0}': file suffix '{1}' must start with '-' or '.'")]
    MalformedSuffix(FolderCategory, String),
    /// A forbidden folder name collides with a category name.
    #[error("forbidden folder '{0}' is also a taxonomy category")]
    ForbiddenCollision(String),
}

/// The folder taxonomy table.
///
/// Read-only for the lifetime of the process; safe to share across
/// concurrent pipeline invocations.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    entries: BTreeMap<FolderCategory, FolderConfig>,
}

impl Default for Taxonomy {
    fn default() -> Self {
        use ExportCase::{Camel, None as NoCase, Pascal};

        let mut entries = BTreeMap::new();
        let mut add = |category: FolderCategory, config: FolderConfig| {
            entries.insert(category, config);
        };

        add(
            FolderCategory::Statics,
            FolderConfig {
                required_depth: 1,
                file_suffixes: &["-statics.ts"],
                export_suffix: "Statics",
                export_case: Camel,
                allows_layer_files: false,
                folder_pattern: "statics/[domain]/[domain]-statics.ts",
            },
        );
        add(
            FolderCategory::Contracts,
            FolderConfig {
                required_depth: 1,
                file_suffixes: &["-contract.ts", ".stub.ts"],
                export_suffix: "Contract",
                export_case: Camel,
                allows_layer_files: false,
                folder_pattern: "contracts/[domain]/[domain]-contract.ts",
            },
        );
        add(
            FolderCategory::Guards,
            FolderConfig {
                required_depth: 1,
                file_suffixes: &["-guard.ts"],
                export_suffix: "Guard",
                export_case: Camel,
                allows_layer_files: false,
                folder_pattern: "guards/[domain]/[domain]-guard.ts",
            },
        );
        add(
            FolderCategory::Transformers,
            FolderConfig {
                required_depth: 1,
                file_suffixes: &["-transformer.ts"],
                export_suffix: "Transformer",
                export_case: Camel,
                allows_layer_files: false,
                folder_pattern: "transformers/[domain]/[domain]-transformer.ts",
            },
        );
        add(
            FolderCategory::Errors,
            FolderConfig {
                required_depth: 1,
                file_suffixes: &["-error.ts"],
                export_suffix: "Error",
                export_case: Pascal,
                allows_layer_files: false,
                folder_pattern: "errors/[domain]/[domain]-error.ts",
            },
        );
        add(
            FolderCategory::Flows,
            FolderConfig {
                required_depth: 1,
                file_suffixes: &["-flow.ts", "-flow.tsx"],
                export_suffix: "Flow",
                export_case: Pascal,
                allows_layer_files: false,
                folder_pattern: "flows/[domain]/[domain]-flow.tsx",
            },
        );
        add(
            FolderCategory::Adapters,
            FolderConfig {
                required_depth: 1,
                file_suffixes: &["-adapter.ts"],
                export_suffix: "Adapter",
                export_case: Camel,
                allows_layer_files: false,
                folder_pattern: "adapters/[package]/[package]-[operation]-adapter.ts",
            },
        );
        add(
            FolderCategory::Middleware,
            FolderConfig {
                required_depth: 1,
                file_suffixes: &["-middleware.ts"],
                export_suffix: "Middleware",
                export_case: Camel,
                allows_layer_files: false,
                folder_pattern: "middleware/[name]/[name]-middleware.ts",
            },
        );
        add(
            FolderCategory::Brokers,
            FolderConfig {
                required_depth: 2,
                file_suffixes: &["-broker.ts"],
                export_suffix: "Broker",
                export_case: Camel,
                allows_layer_files: true,
                folder_pattern: "brokers/[domain]/[action]/[domain]-[action]-broker.ts",
            },
        );
        add(
            FolderCategory::Bindings,
            FolderConfig {
                required_depth: 1,
                file_suffixes: &["-binding.ts"],
                export_suffix: "Binding",
                export_case: Camel,
                allows_layer_files: false,
                folder_pattern: "bindings/[name]/[name]-binding.ts",
            },
        );
        add(
            FolderCategory::State,
            FolderConfig {
                required_depth: 1,
                file_suffixes: &["-state.ts"],
                export_suffix: "State",
                export_case: Camel,
                allows_layer_files: false,
                folder_pattern: "state/[name]/[name]-state.ts",
            },
        );
        add(
            FolderCategory::Responders,
            FolderConfig {
                required_depth: 2,
                file_suffixes: &["-responder.ts"],
                export_suffix: "Responder",
                export_case: Pascal,
                allows_layer_files: true,
                folder_pattern: "responders/[domain]/[action]/[domain]-[action]-responder.ts",
            },
        );
        add(
            FolderCategory::Widgets,
            FolderConfig {
                required_depth: 1,
                file_suffixes: &["-widget.tsx", "-widget.ts"],
                export_suffix: "Widget",
                export_case: Pascal,
                allows_layer_files: true,
                folder_pattern: "widgets/[name]/[name]-widget.tsx",
            },
        );
        add(
            FolderCategory::Startup,
            FolderConfig {
                required_depth: 0,
                file_suffixes: &[".ts"],
                export_suffix: "",
                export_case: Pascal,
                allows_layer_files: false,
                folder_pattern: "startup/start-[name].ts",
            },
        );
        add(
            FolderCategory::Assets,
            FolderConfig {
                required_depth: 1,
                file_suffixes: &[],
                export_suffix: "",
                export_case: NoCase,
                allows_layer_files: false,
                folder_pattern: "assets/[type]/[filename]",
            },
        );
        add(
            FolderCategory::Migrations,
            FolderConfig {
                required_depth: 1,
                file_suffixes: &[],
                export_suffix: "",
                export_case: NoCase,
                allows_layer_files: false,
                folder_pattern: "migrations/[version]/[number]-[name].sql",
            },
        );

        Self { entries }
    }
}

impl Taxonomy {
    /// Looks up the config for a category.
    #[must_use]
    pub fn config(&self, category: FolderCategory) -> Option<&FolderConfig> {
        self.entries.get(&category)
    }

    /// Sorted, comma-joined list of category names for diagnostics.
    #[must_use]
    pub fn allowed_list(&self) -> String {
        let names: Vec<&str> = self.entries.keys().map(|c| c.as_str()).collect();
        names.join(", ")
    }

    /// Validates table consistency.
    ///
    /// # Errors
    ///
    /// Returns the first problem found: a missing entry, an empty-case entry
    /// that still demands an export suffix, a naming-checked entry without
    /// filename suffixes, a malformed suffix, or a forbidden-folder name
    /// colliding with a category.
    pub fn validate(&self) -> Result<(), TaxonomyError> {
        for category in FolderCategory::ALL {
            let Some(config) = self.entries.get(&category) else {
                return Err(TaxonomyError::MissingEntry(category));
            };

            if config.export_case == ExportCase::None && !config.export_suffix.is_empty() {
                return Err(TaxonomyError::CaseSuffixMismatch(
                    category,
                    config.export_suffix.to_owned(),
                ));
            }

            if config.exempt_from_naming() {
                continue;
            }

            if config.file_suffixes.is_empty() {
                return Err(TaxonomyError::NoFileSuffixes(category));
            }
            for suffix in config.file_suffixes {
                if !suffix.starts_with('-') && !suffix.starts_with('.') {
                    return Err(TaxonomyError::MalformedSuffix(
                        category,
                        (*suffix).to_owned(),
                    ));
                }
            }
        }

        for (name, _) in FORBIDDEN_FOLDERS {
            if FolderCategory::parse(name).is_some() {
                return Err(TaxonomyError::ForbiddenCollision((*name).to_owned()));
            }
        }

        Ok(())
    }
}
