use crate::models::{ImportStatement, Language, Specifier, SpecifierKind, TextSpan};
use tree_sitter::{Node, Parser};

use super::{ImportParser, ParserError};

pub struct JavaScriptParser {
    parser: Parser,
    is_typescript: bool,
}

impl JavaScriptParser {
    pub fn new(typescript: bool) -> Result<Self, ParserError> {
        let mut parser = Parser::new();

        let language = if typescript {
            tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into()
        } else {
            tree_sitter_javascript::LANGUAGE.into()
        };

        parser
            .set_language(&language)
            .map_err(|e| ParserError::InitError(e.to_string()))?;

        Ok(Self {
            parser,
            is_typescript: typescript,
        })
    }

    /// Collect the static `import` declarations at the top level of the file
    ///
    /// `require()`, dynamic `import()`, and `export ... from` are not
    /// imports for ordering purposes and are left alone. Type-only imports
    /// parse like ordinary ones.
    fn extract_imports(&self, source: &str, tree: &tree_sitter::Tree) -> Vec<ImportStatement> {
        let mut imports = Vec::new();
        let root = tree.root_node();

        let mut cursor = root.walk();
        for child in root.children(&mut cursor) {
            if child.kind() == "import_statement" {
                if let Some(stmt) = self.parse_import_statement(&child, source) {
                    imports.push(stmt);
                }
            }
        }

        imports
    }

    fn parse_import_statement(&self, node: &Node, source: &str) -> Option<ImportStatement> {
        let mut module = String::new();
        let mut specifiers = Vec::new();

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            match child.kind() {
                "string" => {
                    module = self.extract_string_value(&child, source);
                }
                "import_clause" => {
                    self.parse_import_clause(&child, source, &mut specifiers);
                }
                _ => {}
            }
        }

        if module.is_empty() {
            return None;
        }

        Some(ImportStatement {
            source: module,
            specifiers,
            span: TextSpan {
                start: node.start_byte(),
                end: node.end_byte(),
            },
            line: node.start_position().row + 1,
            raw: self.get_node_text(node, source),
        })
    }

    fn parse_import_clause(&self, node: &Node, source: &str, specifiers: &mut Vec<Specifier>) {
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            match child.kind() {
                "identifier" => {
                    // Default import
                    specifiers.push(Specifier::new(
                        self.get_node_text(&child, source),
                        SpecifierKind::Default,
                    ));
                }
                "namespace_import" => {
                    self.parse_namespace_import(&child, source, specifiers);
                }
                "named_imports" => {
                    self.parse_named_imports(&child, source, specifiers);
                }
                _ => {}
            }
        }
    }

    fn parse_namespace_import(&self, node: &Node, source: &str, specifiers: &mut Vec<Specifier>) {
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if child.kind() == "identifier" {
                specifiers.push(Specifier::new(
                    self.get_node_text(&child, source),
                    SpecifierKind::Namespace,
                ));
            }
        }
    }

    fn parse_named_imports(&self, node: &Node, source: &str, specifiers: &mut Vec<Specifier>) {
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if child.kind() == "import_specifier" {
                // `a as b` binds b locally; plain `a` binds a
                let local = child
                    .child_by_field_name("alias")
                    .or_else(|| child.child_by_field_name("name"));

                if let Some(ident) = local {
                    specifiers.push(Specifier::new(
                        self.get_node_text(&ident, source),
                        SpecifierKind::Named,
                    ));
                }
            }
        }
    }

    fn extract_string_value(&self, node: &Node, source: &str) -> String {
        let text = self.get_node_text(node, source);
        // Remove quotes
        text.trim_matches(|c| c == '"' || c == '\'' || c == '`')
            .to_string()
    }

    fn get_node_text(&self, node: &Node, source: &str) -> String {
        source[node.byte_range()].to_string()
    }
}

impl ImportParser for JavaScriptParser {
    fn parse(&mut self, source: &str) -> Vec<ImportStatement> {
        match self.parser.parse(source, None) {
            Some(tree) => self.extract_imports(source, &tree),
            None => vec![],
        }
    }

    fn language(&self) -> Language {
        if self.is_typescript {
            Language::TypeScript
        } else {
            Language::JavaScript
        }
    }
}
