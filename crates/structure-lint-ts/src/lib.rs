//! # structure-lint-ts
//!
//! Tree-sitter based extraction of the module view consumed by the
//! validation pipeline.
//!
//! The pipeline only needs top-level export statements and the shape of
//! their declarations; this crate parses TypeScript/TSX source and
//! projects the syntax tree down to that view
//! ([`structure_lint_core::ModuleAst`]).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod extractor;
mod typescript;

pub use extractor::{ExtractError, ModuleExtractor};
pub use typescript::TypeScriptExtractor;
