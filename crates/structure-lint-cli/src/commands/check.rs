//! Check command implementation.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use structure_lint_core::{LintResult, Taxonomy};
use structure_lint_rules::{Outcome, StructureRule};
use structure_lint_ts::{ModuleExtractor, TypeScriptExtractor};

use crate::config::AnalyzerConfig;
use crate::OutputFormat;

/// Runs the check command.
pub fn run(
    path: &Path,
    format: OutputFormat,
    exclude: Vec<String>,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = AnalyzerConfig::resolve(path, config_path).context("Failed to load config")?;

    // A malformed taxonomy is a setup error; fail before touching files.
    let taxonomy = Taxonomy::default();
    taxonomy.validate().context("Invalid folder taxonomy")?;

    let rule = StructureRule::new(taxonomy).with_source_marker(config.source_marker.clone());
    let extractor = TypeScriptExtractor::new();

    let root = if config.root.is_absolute() {
        config.root.clone()
    } else {
        path.join(&config.root)
    };

    let mut exclude_patterns = config.exclude.clone();
    exclude_patterns.extend(exclude);

    let files = discover_files(
        &root,
        &exclude_patterns,
        extractor.extensions(),
        config.respect_gitignore,
    )?;

    tracing::info!("Checking {} files under {}", files.len(), root.display());

    let mut result = LintResult::new();

    for file_path in &files {
        let source = std::fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read {}", file_path.display()))?;

        let rel = file_path.strip_prefix(&root).unwrap_or(file_path);
        let rel_str = rel.to_string_lossy();

        let module = extractor
            .extract(&source, &rel_str)
            .with_context(|| format!("Failed to parse {}", file_path.display()))?;

        match rule.check(&rel_str, &module) {
            Outcome::Skipped => result.files_skipped += 1,
            Outcome::Checked(diagnostics) => {
                result.files_checked += 1;
                result.diagnostics.extend(diagnostics);
            }
        }
    }

    result.sort();
    output_and_exit(&result, format)
}

fn output_and_exit(result: &LintResult, format: OutputFormat) -> Result<()> {
    super::output::print(result, format)?;

    if result.has_violations() {
        std::process::exit(1);
    }
    Ok(())
}

fn discover_files(
    root: &Path,
    exclude: &[String],
    extensions: &[&str],
    respect_gitignore: bool,
) -> Result<Vec<PathBuf>> {
    let mut builder = ignore::WalkBuilder::new(root);
    builder.hidden(false).git_ignore(respect_gitignore);

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{e}"))
            .unwrap_or_default();

        if !extensions.contains(&ext.as_str()) {
            continue;
        }

        let rel_str = path.strip_prefix(root).unwrap_or(path).to_string_lossy();

        let excluded = exclude.iter().any(|pattern| {
            let clean = pattern.replace("**/", "").replace("/**", "");
            !clean.is_empty() && rel_str.contains(&clean)
        });

        if !excluded {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "export {};\n").unwrap();
    }

    #[test]
    fn discovers_only_typescript_sources() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "src/brokers/user/fetch/user-fetch-broker.ts");
        touch(dir.path(), "src/widgets/chat/chat-widget.tsx");
        touch(dir.path(), "src/assets/logos/logo.svg");
        touch(dir.path(), "README.md");

        let files = discover_files(dir.path(), &[], &[".ts", ".tsx"], true).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn exclude_patterns_filter_by_substring() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "src/brokers/user/fetch/user-fetch-broker.ts");
        touch(dir.path(), "node_modules/pkg/src/brokers/x/y/thing-broker.ts");

        let files = discover_files(
            dir.path(),
            &["node_modules".to_owned()],
            &[".ts", ".tsx"],
            true,
        )
        .unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].to_string_lossy().contains("user-fetch-broker"));
    }

    #[test]
    fn discovery_order_is_stable() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "src/guards/b/b-guard.ts");
        touch(dir.path(), "src/guards/a/a-guard.ts");

        let files = discover_files(dir.path(), &[], &[".ts"], true).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|f| {
                f.file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default()
            })
            .collect();
        assert_eq!(names, vec!["a-guard.ts", "b-guard.ts"]);
    }
}
