//! Level 4: export gate.
//!
//! A single pass over the top-level statements. Structural violations
//! (default export, namespace export, re-export, wrong function form for
//! adapters/proxies) halt the scan with one diagnostic, because naming
//! comparison against a structurally invalid export is meaningless. Once
//! exactly one value export survives, its suffix, case, and exact name are
//! checked independently and every failing check is reported.

use structure_lint_core::{
    Declaration, Diagnostic, ExportCase, FolderCategory, FolderConfig, Initializer, Location,
    MessageId, ModuleAst, NamedExport, Span, StatementKind,
};

use crate::case::{is_camel_case, is_pascal_case};
use crate::classifier::Classification;
use crate::derive::expected_export_name;

/// One collected value export.
struct ValueExport {
    name: String,
    span: Span,
}

/// Runs the export checks for a structurally located file.
pub fn run(
    module: &ModuleAst,
    category: FolderCategory,
    config: &FolderConfig,
    classification: &Classification,
    filename_base: &str,
    path: &str,
) -> Vec<Diagnostic> {
    let mut collected: Vec<ValueExport> = Vec::new();

    for statement in &module.statements {
        let at = Location::new(path, statement.span.line, statement.span.column);
        match &statement.kind {
            StatementKind::ExportDefault => {
                return vec![Diagnostic::new(MessageId::NoDefaultExport, at)];
            }
            StatementKind::ExportAll => {
                return vec![Diagnostic::new(MessageId::NoNamespaceExport, at)];
            }
            StatementKind::ExportNamed(named) => {
                if named.is_type_only {
                    continue;
                }
                if named.source.is_some()
                    || (named.declaration.is_none() && !named.specifiers.is_empty())
                {
                    return vec![Diagnostic::new(MessageId::NoReExport, at)
                        .with("folderType", category.as_str())];
                }
                match collect(named, classification, category, statement.span, &at) {
                    Ok(mut exports) => collected.append(&mut exports),
                    Err(diagnostic) => return vec![diagnostic],
                }
            }
            StatementKind::Other => {}
        }
    }

    let effective_suffix = if classification.is_proxy_file {
        "Proxy"
    } else {
        config.export_suffix
    };
    let expected_name = expected_export_name(filename_base, effective_suffix, config.export_case);

    match collected.len() {
        0 => {
            // Entry-point files run for effect; an export is optional there.
            if category == FolderCategory::Startup {
                return Vec::new();
            }
            vec![
                Diagnostic::new(MessageId::MissingExpectedExport, Location::module_start(path))
                    .with("expectedName", expected_name)
                    .with("actualCount", "0"),
            ]
        }
        1 => naming_checks(
            &collected[0],
            &expected_name,
            effective_suffix,
            config.export_case,
            category,
            path,
        ),
        n => {
            let names: Vec<&str> = collected.iter().map(|e| e.name.as_str()).collect();
            let first = &collected[0];
            vec![Diagnostic::new(
                MessageId::MultipleValueExports,
                Location::new(path, first.span.line, first.span.column),
            )
            .with("expectedName", expected_name)
            .with("actualCount", n.to_string())
            .with("exportNames", names.join(", "))]
        }
    }
}

/// Collects the value exports of one named export statement, or fails it
/// on the arrow-function requirement for adapters and proxies.
fn collect(
    named: &NamedExport,
    classification: &Classification,
    category: FolderCategory,
    span: Span,
    at: &Location,
) -> Result<Vec<ValueExport>, Diagnostic> {
    let arrow_required = classification.is_proxy_file || category == FolderCategory::Adapters;
    let arrow_violation = |actual_type: &str| {
        // Proxy wording wins for a proxy file inside adapters/.
        let id = if classification.is_proxy_file {
            MessageId::ProxyMustBeArrowFunction
        } else {
            MessageId::AdapterMustBeArrowFunction
        };
        Diagnostic::new(id, at.clone()).with("actualType", actual_type)
    };

    let Some(declaration) = &named.declaration else {
        return Ok(Vec::new());
    };

    match declaration {
        Declaration::Function(name) => {
            if arrow_required {
                return Err(arrow_violation("function declaration"));
            }
            Ok(name
                .iter()
                .map(|n| ValueExport {
                    name: n.clone(),
                    span,
                })
                .collect())
        }
        Declaration::Class(name) => {
            if arrow_required {
                return Err(arrow_violation("class"));
            }
            Ok(name
                .iter()
                .map(|n| ValueExport {
                    name: n.clone(),
                    span,
                })
                .collect())
        }
        Declaration::Variable(declarators) => {
            let mut exports = Vec::new();
            for declarator in declarators {
                if arrow_required && declarator.init != Initializer::ArrowFunction {
                    return Err(arrow_violation(declarator.init.label()));
                }
                if let Some(name) = &declarator.name {
                    exports.push(ValueExport {
                        name: name.clone(),
                        span,
                    });
                }
            }
            Ok(exports)
        }
    }
}

/// Independent suffix, case, and exact-match checks on the sole export.
fn naming_checks(
    export: &ValueExport,
    expected_name: &str,
    effective_suffix: &str,
    export_case: ExportCase,
    category: FolderCategory,
    path: &str,
) -> Vec<Diagnostic> {
    let at = Location::new(path, export.span.line, export.span.column);
    let mut diagnostics = Vec::new();

    if !effective_suffix.is_empty() && !export.name.ends_with(effective_suffix) {
        diagnostics.push(
            Diagnostic::new(MessageId::InvalidExportSuffix, at.clone())
                .with("expected", effective_suffix)
                .with("folderType", category.as_str()),
        );
    }

    let case_ok = match export_case {
        ExportCase::Camel => is_camel_case(&export.name),
        ExportCase::Pascal => is_pascal_case(&export.name),
        ExportCase::None => true,
    };
    if !case_ok {
        diagnostics.push(
            Diagnostic::new(MessageId::InvalidExportCase, at.clone())
                .with("expected", export_case.as_str())
                .with("folderType", category.as_str()),
        );
    }

    if export.name != expected_name {
        diagnostics.push(
            Diagnostic::new(MessageId::FilenameMismatch, at)
                .with("exportName", export.name.clone())
                .with("expectedName", expected_name),
        );
    }

    diagnostics
}
