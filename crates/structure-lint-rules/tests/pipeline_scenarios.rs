//! End-to-end pipeline scenarios over hand-built module views.

use structure_lint_core::{
    Declaration, Declarator, Initializer, MessageId, ModuleAst, NamedExport, Span, Statement,
    StatementKind,
};
use structure_lint_rules::{Outcome, StructureRule};

fn arrow_export(name: &str, line: usize) -> Statement {
    Statement::new(
        Span::new(line, 1),
        StatementKind::ExportNamed(NamedExport {
            declaration: Some(Declaration::Variable(vec![Declarator {
                name: Some(name.to_owned()),
                init: Initializer::ArrowFunction,
            }])),
            ..NamedExport::default()
        }),
    )
}

fn function_export(name: &str, line: usize) -> Statement {
    Statement::new(
        Span::new(line, 1),
        StatementKind::ExportNamed(NamedExport {
            declaration: Some(Declaration::Function(Some(name.to_owned()))),
            ..NamedExport::default()
        }),
    )
}

fn message_ids(outcome: &Outcome) -> Vec<MessageId> {
    outcome.diagnostics().iter().map(|d| d.message_id).collect()
}

#[test]
fn conforming_broker_yields_no_diagnostics() {
    let rule = StructureRule::default();
    let module = ModuleAst::new(vec![arrow_export("userFetchBroker", 3)]);
    let outcome = rule.check("src/brokers/user/fetch/user-fetch-broker.ts", &module);
    assert!(matches!(&outcome, Outcome::Checked(d) if d.is_empty()), "{outcome:?}");
}

#[test]
fn depth_failure_suppresses_later_levels() {
    // The export would be correct; the depth gate must still be the only
    // finding.
    let rule = StructureRule::default();
    let module = ModuleAst::new(vec![arrow_export("userFetchBroker", 3)]);
    let outcome = rule.check("src/brokers/user-fetch-broker.ts", &module);
    assert_eq!(message_ids(&outcome), vec![MessageId::InvalidFolderDepth]);
}

#[test]
fn filename_double_violation_suppresses_export_level() {
    let rule = StructureRule::default();
    let module = ModuleAst::new(vec![arrow_export("wrongName", 1)]);
    let outcome = rule.check("src/brokers/user/fetch/UserFetch.ts", &module);
    assert_eq!(
        message_ids(&outcome),
        vec![
            MessageId::InvalidFileSuffixWithLayer,
            MessageId::InvalidFilenameCaseWithLayer,
        ]
    );
}

#[test]
fn export_triple_violation_accumulates() {
    let rule = StructureRule::default();
    let module = ModuleAst::new(vec![arrow_export("WrongNameTransformer", 3)]);
    let outcome = rule.check("src/brokers/user/fetch/user-fetch-broker.ts", &module);
    assert_eq!(
        message_ids(&outcome),
        vec![
            MessageId::InvalidExportSuffix,
            MessageId::InvalidExportCase,
            MessageId::FilenameMismatch,
        ]
    );
}

#[test]
fn adapter_function_declaration_rejected() {
    let rule = StructureRule::default();
    let module = ModuleAst::new(vec![function_export("axiosGetAdapter", 2)]);
    let outcome = rule.check("src/adapters/axios-get/axios-get-adapter.ts", &module);
    assert_eq!(
        message_ids(&outcome),
        vec![MessageId::AdapterMustBeArrowFunction]
    );
    assert_eq!(
        outcome.diagnostics()[0]
            .data
            .get("actualType")
            .map(String::as_str),
        Some("function declaration")
    );
}

#[test]
fn startup_tolerates_zero_exports_but_brokers_do_not() {
    let rule = StructureRule::default();
    let empty = ModuleAst::default();

    let startup = rule.check("src/startup/start-server.ts", &empty);
    assert!(matches!(&startup, Outcome::Checked(d) if d.is_empty()), "{startup:?}");

    let broker = rule.check("src/brokers/user/fetch/user-fetch-broker.ts", &empty);
    assert_eq!(message_ids(&broker), vec![MessageId::MissingExpectedExport]);
}

#[test]
fn forbidden_folder_halts_everything() {
    let rule = StructureRule::default();
    let module = ModuleAst::new(vec![arrow_export("formatDate", 1)]);
    let outcome = rule.check("src/utils/date/format-date.ts", &module);
    assert_eq!(message_ids(&outcome), vec![MessageId::ForbiddenFolder]);
}

#[test]
fn assets_pass_unconditionally() {
    let rule = StructureRule::default();
    // Even default exports are tolerated; assets carry no naming contract.
    let module = ModuleAst::new(vec![Statement::new(
        Span::new(1, 1),
        StatementKind::ExportDefault,
    )]);
    let outcome = rule.check("src/assets/logos/logo-main.ts", &module);
    assert!(matches!(&outcome, Outcome::Checked(d) if d.is_empty()), "{outcome:?}");
}

#[test]
fn test_and_stub_companions_are_skipped() {
    let rule = StructureRule::default();
    let module = ModuleAst::default();
    assert!(matches!(
        rule.check("src/brokers/user/fetch/user-fetch-broker.test.ts", &module),
        Outcome::Skipped
    ));
    assert!(matches!(
        rule.check("src/contracts/user/user-contract.stub.ts", &module),
        Outcome::Skipped
    ));
    assert!(matches!(
        rule.check("scripts/build.ts", &module),
        Outcome::Skipped
    ));
}

#[test]
fn proxy_companion_is_fully_validated() {
    let rule = StructureRule::default();
    let good = ModuleAst::new(vec![arrow_export("httpGetAdapterProxy", 2)]);
    let outcome = rule.check("src/adapters/http-get/http-get-adapter.proxy.ts", &good);
    assert!(matches!(&outcome, Outcome::Checked(d) if d.is_empty()), "{outcome:?}");

    let bad = ModuleAst::new(vec![function_export("httpGetAdapterProxy", 2)]);
    let outcome = rule.check("src/adapters/http-get/http-get-adapter.proxy.ts", &bad);
    assert_eq!(
        message_ids(&outcome),
        vec![MessageId::ProxyMustBeArrowFunction]
    );
}

#[test]
fn pipeline_is_idempotent() {
    let rule = StructureRule::default();
    let module = ModuleAst::new(vec![arrow_export("WrongNameTransformer", 3)]);
    let path = "src/brokers/user/fetch/user-fetch-broker.ts";
    let first = rule.check(path, &module);
    let second = rule.check(path, &module);
    assert_eq!(first.diagnostics(), second.diagnostics());
}

#[test]
fn custom_source_marker_is_honored() {
    let rule = StructureRule::default().with_source_marker("app");
    let module = ModuleAst::new(vec![arrow_export("userFetchBroker", 3)]);
    let outcome = rule.check("app/brokers/user/fetch/user-fetch-broker.ts", &module);
    assert!(matches!(&outcome, Outcome::Checked(d) if d.is_empty()), "{outcome:?}");
    assert!(matches!(
        rule.check("src/brokers/user/fetch/user-fetch-broker.ts", &module),
        Outcome::Skipped
    ));
}
