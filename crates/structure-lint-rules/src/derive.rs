//! Expected export name derivation.
//!
//! The expected identifier is a pure function of the filename base and the
//! category conventions: hyphen-split words joined per the case convention,
//! with the export suffix appended. Level 3 has already enforced that the
//! filename base equals the domain-segment join for depth > 0 categories,
//! so deriving from the filename also covers depth-0 categories (startup).

use structure_lint_core::ExportCase;

use crate::case::{join_camel, join_pascal};

/// Computes the expected export identifier.
///
/// `user-fetch` + `Broker`/camelCase -> `userFetchBroker`;
/// `http-get-adapter` + `Proxy`/camelCase -> `httpGetAdapterProxy`.
#[must_use]
pub fn expected_export_name(
    filename_base: &str,
    export_suffix: &str,
    export_case: ExportCase,
) -> String {
    let words: Vec<&str> = filename_base.split('-').filter(|w| !w.is_empty()).collect();
    let joined = match export_case {
        ExportCase::Camel => join_camel(&words),
        ExportCase::Pascal => join_pascal(&words),
        ExportCase::None => words.concat(),
    };
    joined + export_suffix
}
