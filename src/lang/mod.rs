/*!
# Rust Language Module

This Rust module provides lexical analysis and parsing of arithmetic
expressions. Parsing emits code for the machine in [`crate::mach`].

*/

#[macro_use]
mod error;
mod lex;
mod number;
mod parse;
mod symbol;

pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use error::ErrorKind;
pub use lex::Lexer;
pub use number::is_numeric;
pub use parse::parse;
pub use parse::parse_with_limits;
pub use symbol::SymbolTable;

/// Half-open range of character offsets into the source text.
pub type Column = std::ops::Range<usize>;

/// Marks the start and the end of a comment.
pub const COMMENT_CHAR: char = '`';

fn is_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}
