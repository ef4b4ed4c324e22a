//! TypeScript/TSX extractor using Tree-sitter.

use structure_lint_core::{
    Declaration, Declarator, Initializer, ModuleAst, NamedExport, Span, Statement, StatementKind,
};
use tree_sitter::{Language, Node, Parser};

use crate::extractor::{ExtractError, ModuleExtractor};

/// Extracts top-level export statements from TypeScript source.
pub struct TypeScriptExtractor {
    typescript: Language,
    tsx: Language,
}

impl TypeScriptExtractor {
    /// Creates a new TypeScript extractor with both grammar dialects.
    #[must_use]
    pub fn new() -> Self {
        Self {
            typescript: tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            tsx: tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }

    fn text<'a>(node: &Node<'_>, src: &'a [u8]) -> &'a str {
        std::str::from_utf8(&src[node.start_byte()..node.end_byte()]).unwrap_or("")
    }

    fn span_of(node: &Node<'_>) -> Span {
        let position = node.start_position();
        Span::new(position.row + 1, position.column + 1)
    }

    fn map_statement(node: &Node<'_>, src: &[u8]) -> StatementKind {
        if node.kind() != "export_statement" {
            return StatementKind::Other;
        }

        let mut has_default = false;
        let mut has_star = false;
        let mut is_type_only = false;
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            match child.kind() {
                "default" => has_default = true,
                "*" | "namespace_export" => has_star = true,
                // The bare `type` keyword of `export type { ... }`; a
                // type-alias declaration is handled below.
                "type" => is_type_only = true,
                _ => {}
            }
        }
        if has_default {
            return StatementKind::ExportDefault;
        }
        if has_star {
            return StatementKind::ExportAll;
        }

        let source = node
            .child_by_field_name("source")
            .map(|n| Self::text(&n, src).trim_matches(['"', '\'']).to_owned());

        let declaration = node
            .child_by_field_name("declaration")
            .map(|n| Self::map_declaration(&n, src));
        if matches!(declaration, Some(None)) {
            // Interfaces, type aliases and the like export only types.
            is_type_only = true;
        }

        let specifiers = Self::collect_specifiers(node, src);

        StatementKind::ExportNamed(NamedExport {
            is_type_only,
            source,
            declaration: declaration.flatten(),
            specifiers,
        })
    }

    /// Maps a declaration node, or `None` when it declares no value
    /// (interfaces, type aliases).
    fn map_declaration(node: &Node<'_>, src: &[u8]) -> Option<Declaration> {
        match node.kind() {
            "lexical_declaration" | "variable_declaration" => {
                let mut declarators = Vec::new();
                let mut cursor = node.walk();
                for child in node.children(&mut cursor) {
                    if child.kind() == "variable_declarator" {
                        declarators.push(Self::map_declarator(&child, src));
                    }
                }
                Some(Declaration::Variable(declarators))
            }
            "function_declaration" | "generator_function_declaration" => {
                Some(Declaration::Function(Self::declared_name(node, src)))
            }
            "class_declaration" | "abstract_class_declaration" | "enum_declaration" => {
                Some(Declaration::Class(Self::declared_name(node, src)))
            }
            _ => None,
        }
    }

    fn map_declarator(node: &Node<'_>, src: &[u8]) -> Declarator {
        let name = node.child_by_field_name("name").and_then(|n| {
            // Destructuring patterns bind no single name.
            (n.kind() == "identifier").then(|| Self::text(&n, src).to_owned())
        });
        let init = match node.child_by_field_name("value") {
            None => Initializer::None,
            Some(value) => match value.kind() {
                "arrow_function" => Initializer::ArrowFunction,
                "function_expression" | "function" => Initializer::FunctionExpression,
                "class" => Initializer::ClassExpression,
                "identifier" | "member_expression" => Initializer::Identifier,
                _ => Initializer::Other,
            },
        };
        Declarator { name, init }
    }

    fn declared_name(node: &Node<'_>, src: &[u8]) -> Option<String> {
        node.child_by_field_name("name")
            .map(|n| Self::text(&n, src).to_owned())
    }

    /// Exported names of an `export { a, b as c }` clause, post-rename.
    fn collect_specifiers(node: &Node<'_>, src: &[u8]) -> Vec<String> {
        let mut names = Vec::new();
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if child.kind() != "export_clause" {
                continue;
            }
            let mut clause_cursor = child.walk();
            for specifier in child.children(&mut clause_cursor) {
                if specifier.kind() != "export_specifier" {
                    continue;
                }
                let exported = specifier
                    .child_by_field_name("alias")
                    .or_else(|| specifier.child_by_field_name("name"));
                if let Some(name) = exported {
                    names.push(Self::text(&name, src).to_owned());
                }
            }
        }
        names
    }
}

impl Default for TypeScriptExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleExtractor for TypeScriptExtractor {
    fn language_id(&self) -> &'static str {
        "typescript"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &[".ts", ".tsx"]
    }

    fn extract(&self, source: &str, path: &str) -> Result<ModuleAst, ExtractError> {
        let language = if path.ends_with(".tsx") {
            &self.tsx
        } else {
            &self.typescript
        };

        let mut parser = Parser::new();
        parser.set_language(language)?;

        let src = source.as_bytes();
        let tree = parser.parse(src, None).ok_or(ExtractError::NoTree)?;
        let root = tree.root_node();

        let mut statements = Vec::new();
        let mut cursor = root.walk();
        for node in root.children(&mut cursor) {
            statements.push(Statement::new(
                Self::span_of(&node),
                Self::map_statement(&node, src),
            ));
        }

        Ok(ModuleAst::new(statements))
    }
}
