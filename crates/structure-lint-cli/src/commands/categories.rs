//! Categories command implementation.

use structure_lint_core::{ExportCase, FolderCategory, Taxonomy};

/// Prints every folder category and its naming contract.
pub fn run() {
    let taxonomy = Taxonomy::default();

    println!("Folder categories:\n");
    for category in FolderCategory::ALL {
        let Some(config) = taxonomy.config(category) else {
            continue;
        };

        println!("  {category}/");
        println!("    pattern:      src/{}", config.folder_pattern);
        println!("    depth:        {}", config.required_depth);
        if config.file_suffixes.is_empty() {
            println!("    suffixes:     (none; naming exempt)");
        } else {
            println!("    suffixes:     {}", config.file_suffixes.join(", "));
        }
        if !config.export_suffix.is_empty() || config.export_case != ExportCase::None {
            let suffix = if config.export_suffix.is_empty() {
                "(none)"
            } else {
                config.export_suffix
            };
            println!(
                "    export:       {} suffix, {}",
                suffix,
                config.export_case.as_str()
            );
        }
        if config.allows_layer_files {
            println!("    layer files:  allowed");
        }
        println!();
    }
}
