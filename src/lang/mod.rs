/*!
# Rust Language Module

This Rust module provides line preprocessing, lexical analysis and parsing
of AP CSP pseudocode.

*/

pub type LineNumber = Option<usize>;

#[macro_use]
mod error;
mod keyword;
mod lex;
mod line;
mod parse;

pub use error::Error;
pub use error::ErrorCode;
pub use error::ErrorKind;
pub use keyword::{is_ident, is_reserved, keyword, Keyword};
pub use lex::{lex, sanitize};
pub use line::{preprocess, Line};
pub use parse::{parse_expression, parse_expression_list, parse_procedure_header, parse_statement};

pub mod ast;
pub mod token;

#[cfg(test)]
mod tests;
