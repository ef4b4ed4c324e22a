//! Stable message identifiers and their templates.
//!
//! The identifier names and the data keys each template interpolates are a
//! compatibility contract: downstream tooling pattern-matches on them.

use serde::{Deserialize, Serialize};

/// Identifier of a structure violation message.
///
/// Serializes to the camelCase wire name (e.g. `forbiddenFolder`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MessageId {
    /// Level 1: file sits in a folder the standards explicitly ban.
    ForbiddenFolder,
    /// Level 1: file sits in a folder the taxonomy does not know.
    UnknownFolder,
    /// Level 1: `-layer-` helper file in a category that disallows them.
    LayerFilesNotAllowed,
    /// Level 2: nesting depth disagrees with the category's required depth.
    InvalidFolderDepth,
    /// Level 2/3: non-kebab-case segment or filename base, or domain-prefix
    /// mismatch (reused for the latter for wire compatibility).
    InvalidFilenameCase,
    /// Level 3 variant of [`MessageId::InvalidFilenameCase`] carrying the
    /// layer-pattern hint, emitted in categories that allow layer files.
    InvalidFilenameCaseWithLayer,
    /// Level 3: basename lacks the category's required suffix.
    InvalidFileSuffix,
    /// Level 3 variant of [`MessageId::InvalidFileSuffix`] with layer hint.
    InvalidFileSuffixWithLayer,
    /// Level 4: `export default` is forbidden.
    NoDefaultExport,
    /// Level 4: `export * from` is forbidden.
    NoNamespaceExport,
    /// Level 4: pure re-exports are forbidden.
    NoReExport,
    /// Level 4: file has zero value exports in a category that requires one.
    MissingExpectedExport,
    /// Level 4: file has more than one value export.
    MultipleValueExports,
    /// Level 4: export name lacks the category's required suffix.
    InvalidExportSuffix,
    /// Level 4: export name violates the category's case convention.
    InvalidExportCase,
    /// Level 4: export name does not equal the name derived from the path.
    FilenameMismatch,
    /// Level 4: adapter export is not an arrow function.
    AdapterMustBeArrowFunction,
    /// Level 4: proxy export is not an arrow function.
    ProxyMustBeArrowFunction,
}

impl MessageId {
    /// The camelCase wire name of this identifier.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ForbiddenFolder => "forbiddenFolder",
            Self::UnknownFolder => "unknownFolder",
            Self::LayerFilesNotAllowed => "layerFilesNotAllowed",
            Self::InvalidFolderDepth => "invalidFolderDepth",
            Self::InvalidFilenameCase => "invalidFilenameCase",
            Self::InvalidFilenameCaseWithLayer => "invalidFilenameCaseWithLayer",
            Self::InvalidFileSuffix => "invalidFileSuffix",
            Self::InvalidFileSuffixWithLayer => "invalidFileSuffixWithLayer",
            Self::NoDefaultExport => "noDefaultExport",
            Self::NoNamespaceExport => "noNamespaceExport",
            Self::NoReExport => "noReExport",
            Self::MissingExpectedExport => "missingExpectedExport",
            Self::MultipleValueExports => "multipleValueExports",
            Self::InvalidExportSuffix => "invalidExportSuffix",
            Self::InvalidExportCase => "invalidExportCase",
            Self::FilenameMismatch => "filenameMismatch",
            Self::AdapterMustBeArrowFunction => "adapterMustBeArrowFunction",
            Self::ProxyMustBeArrowFunction => "proxyMustBeArrowFunction",
        }
    }

    /// The human-readable template, with `{{key}}` interpolation slots.
    #[must_use]
    pub fn template(self) -> &'static str {
        match self {
            Self::ForbiddenFolder => {
                "Lvl1: Folder \"{{folder}}/\" is forbidden. Use \"{{suggestion}}/\" instead according to project standards."
            }
            Self::UnknownFolder => {
                "Unknown folder \"{{folder}}/\". Must use one of: {{allowed}}"
            }
            Self::LayerFilesNotAllowed => {
                "Layer files (-layer-) are not allowed in {{folderType}}/. Only allowed in: brokers/, widgets/, responders/"
            }
            Self::InvalidFolderDepth => {
                "Lvl2: Folder \"{{folder}}/\" requires depth {{expected}} but file is at depth {{actual}}. Expected pattern: src/{{folder}}/{{pattern}}"
            }
            Self::InvalidFilenameCase => {
                "Lvl3: Filename must use kebab-case before the suffix. Found \"{{actual}}\", expected \"{{expected}}\""
            }
            Self::InvalidFilenameCaseWithLayer => {
                "Lvl3: Filename must use kebab-case before the suffix. Found \"{{actual}}\", expected \"{{expected}}\". If this is a helper decomposing a complex parent (not a standalone operation), use the layer pattern: {descriptive-name}-layer-{suffix}.ts (e.g., validate-folder-depth-layer-broker.ts)"
            }
            Self::InvalidFileSuffix => {
                "Lvl3: File must end with \"{{expected}}\" for {{folderType}}/ folder"
            }
            Self::InvalidFileSuffixWithLayer => {
                "Lvl3: File must end with \"{{expected}}\" for {{folderType}}/ folder. If this is a helper decomposing a complex parent, use layer pattern: {descriptive-name}-layer-{suffix}.ts (e.g., validate-folder-depth-layer-broker.ts)"
            }
            Self::NoDefaultExport => {
                "Lvl4: Default exports are forbidden. Use named exports only."
            }
            Self::NoNamespaceExport => {
                "Lvl4: Namespace exports (export * from) are forbidden."
            }
            Self::NoReExport => {
                "Lvl4: Re-exports are forbidden in {{folderType}}/ files. Only the primary export is allowed."
            }
            Self::MissingExpectedExport => {
                "Lvl4: File must export exactly one value named \"{{expectedName}}\". Found {{actualCount}} value exports."
            }
            Self::MultipleValueExports => {
                "Lvl4: File must export exactly one value named \"{{expectedName}}\". Found {{actualCount}} value exports: {{exportNames}}"
            }
            Self::InvalidExportSuffix => {
                "Lvl4: Export name must end with \"{{expected}}\" for {{folderType}}/ folder"
            }
            Self::InvalidExportCase => {
                "Lvl4: Export must use {{expected}} for {{folderType}}/ folder"
            }
            Self::FilenameMismatch => {
                "Lvl4: Export name \"{{exportName}}\" does not match expected \"{{expectedName}}\" based on filename"
            }
            Self::AdapterMustBeArrowFunction => {
                "Lvl4: Adapters must export arrow functions (export const x = () => {}), not {{actualType}}"
            }
            Self::ProxyMustBeArrowFunction => {
                "Lvl4: Proxy must export arrow function (export const x = () => {}), not {{actualType}}"
            }
        }
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
