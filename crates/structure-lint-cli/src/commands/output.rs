//! Shared output formatting for lint results.

use anyhow::Result;
use structure_lint_core::LintResult;

use crate::OutputFormat;

/// Print lint results in the specified format.
pub fn print(result: &LintResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(result),
        OutputFormat::Json => return print_json(result),
        OutputFormat::Compact => print_compact(result),
    }
    Ok(())
}

fn print_text(result: &LintResult) {
    for diagnostic in &result.diagnostics {
        println!(
            "{} at {}:{}:{}",
            diagnostic.message_id,
            diagnostic.location.file.display(),
            diagnostic.location.line,
            diagnostic.location.column,
        );
        println!("  \x1b[31merror\x1b[0m: {}", diagnostic.render());
        println!();
    }

    let summary_color = if result.has_violations() {
        "\x1b[31m"
    } else {
        "\x1b[32m"
    };

    println!(
        "{}Found {} violation(s) in {} file(s) ({} skipped)\x1b[0m",
        summary_color,
        result.diagnostics.len(),
        result.files_checked,
        result.files_skipped,
    );
}

fn print_json(result: &LintResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}

fn print_compact(result: &LintResult) {
    for diagnostic in &result.diagnostics {
        println!(
            "{}:{}:{}: [{}] {}",
            diagnostic.location.file.display(),
            diagnostic.location.line,
            diagnostic.location.column,
            diagnostic.message_id,
            diagnostic.render(),
        );
    }
}
