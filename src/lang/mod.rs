/*!
# Rust Language Module

This Rust module provides lexical analysis and parsing of the calculator language.

*/

#[macro_use]
mod error;
mod lex;
mod line;
mod parse;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use line::Line;
pub use parse::parse;

pub mod ast;
pub mod token;

/// Source line, counting from 1. `None` for a line entered on its own.
pub type LineNumber = Option<usize>;

/// Character offsets of a token within its line.
pub type Column = std::ops::Range<usize>;
