//! # structure-lint-core
//!
//! Core types for project-structure linting.
//!
//! This crate defines the data the validation pipeline consumes and
//! produces:
//!
//! - [`ModuleAst`] - closed tagged-union view of a file's top-level statements
//! - [`Taxonomy`] / [`FolderCategory`] / [`FolderConfig`] - the naming
//!   contract for each project folder
//! - [`Diagnostic`] / [`MessageId`] - structured findings with stable
//!   message identifiers and interpolation data
//! - [`LintResult`] - aggregation over a batch run
//!
//! The pipeline itself lives in `structure-lint-rules`; extraction of the
//! module AST from TypeScript source lives in `structure-lint-ts`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod ast;
mod diagnostic;
mod location;
mod message;
mod taxonomy;

pub use ast::{
    Declaration, Declarator, Initializer, ModuleAst, NamedExport, Span, Statement, StatementKind,
};
pub use diagnostic::{Diagnostic, LintResult};
pub use location::Location;
pub use message::MessageId;
pub use taxonomy::{
    forbidden_folder_suggestion, ExportCase, FolderCategory, FolderConfig, Taxonomy, TaxonomyError,
};
