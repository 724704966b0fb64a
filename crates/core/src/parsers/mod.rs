mod javascript;

pub use javascript::JavaScriptParser;

use crate::models::{ImportStatement, Language};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParserError {
    #[error("Failed to initialize parser: {0}")]
    InitError(String),
    #[error("Failed to parse source code: {0}")]
    ParseError(String),
}

/// Trait for language-specific import extractors
pub trait ImportParser {
    /// Extract the import statements at the top level of a source file
    fn parse(&mut self, source: &str) -> Vec<ImportStatement>;

    /// Get the language this parser handles
    fn language(&self) -> Language;
}

/// Create a parser for the given language
pub fn create_parser(language: &Language) -> Result<Box<dyn ImportParser>, ParserError> {
    match language {
        Language::JavaScript => Ok(Box::new(JavaScriptParser::new(false)?)),
        Language::TypeScript => Ok(Box::new(JavaScriptParser::new(true)?)),
    }
}
