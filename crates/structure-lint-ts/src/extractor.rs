//! Language-agnostic extraction trait.
//!
//! `ModuleExtractor` is the extension point for adding new source
//! languages: implement it to teach the host how to turn raw source text
//! into the module view the pipeline validates.

use structure_lint_core::ModuleAst;
use thiserror::Error;

/// Errors raised while extracting a module view from source text.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The grammar could not be loaded into the parser (version skew
    /// between the grammar crate and the tree-sitter runtime).
    #[error("failed to load grammar: {0}")]
    Grammar(#[from] tree_sitter::LanguageError),
    /// The parser produced no tree (cancelled or invalid input).
    #[error("parser produced no syntax tree")]
    NoTree,
}

/// Trait for language-specific Tree-sitter extraction.
pub trait ModuleExtractor: Send + Sync {
    /// Language identifier (e.g., `"typescript"`).
    fn language_id(&self) -> &'static str;

    /// File extensions this extractor handles (e.g., `&[".ts", ".tsx"]`).
    fn extensions(&self) -> &'static [&'static str];

    /// Parses source text into the module view.
    ///
    /// The path selects the grammar dialect where the language has several
    /// (`.tsx` files need the JSX-aware grammar).
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError`] when the grammar cannot be loaded or the
    /// parser yields no tree. Syntax errors in the source are not errors:
    /// tree-sitter produces a partial tree and extraction recovers what it
    /// can.
    fn extract(&self, source: &str, path: &str) -> Result<ModuleAst, ExtractError>;
}
