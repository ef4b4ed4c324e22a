//! Level 1: location gate.

use structure_lint_core::{
    forbidden_folder_suggestion, Diagnostic, FolderCategory, FolderConfig, Location, MessageId,
    Taxonomy,
};

use crate::classifier::Classification;
use crate::pipeline::Gate;

/// Checks that the category folder is known and permitted, and that layer
/// files only appear where the category allows them.
pub fn run(
    classification: &Classification,
    taxonomy: &Taxonomy,
    anchor: &Location,
) -> Gate<(FolderCategory, FolderConfig)> {
    let folder = &classification.category_name;

    if let Some(suggestion) = forbidden_folder_suggestion(folder) {
        return Gate::Halt(vec![Diagnostic::new(
            MessageId::ForbiddenFolder,
            anchor.clone(),
        )
        .with("folder", folder.clone())
        .with("suggestion", suggestion)]);
    }

    let Some(category) = FolderCategory::parse(folder) else {
        return Gate::Halt(vec![Diagnostic::new(
            MessageId::UnknownFolder,
            anchor.clone(),
        )
        .with("folder", folder.clone())
        .with("allowed", taxonomy.allowed_list())]);
    };

    let Some(config) = taxonomy.config(category) else {
        // A parseable category without a table entry is a configuration
        // error the host validates at startup; treat it as unknown here so
        // the pipeline stays total.
        return Gate::Halt(vec![Diagnostic::new(
            MessageId::UnknownFolder,
            anchor.clone(),
        )
        .with("folder", folder.clone())
        .with("allowed", taxonomy.allowed_list())]);
    };

    if classification.is_layer_file && !config.allows_layer_files {
        return Gate::Halt(vec![Diagnostic::new(
            MessageId::LayerFilesNotAllowed,
            anchor.clone(),
        )
        .with("folderType", category.as_str())]);
    }

    Gate::Continue((category, *config))
}
