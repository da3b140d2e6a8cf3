/*!
# Rust Language Module

This Rust module provides scanning, lexical analysis and parsing of
keystroke programs.

*/

#[macro_use]
mod error;
mod lex;
mod num;
mod parse;
mod scan;

pub mod ast;
pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use error::Stage;
pub use lex::lex;
pub use num::Num;
pub use parse::parse;
pub use scan::scan;

pub(crate) use num::magnitude;

/// Character offsets into the source text.
pub type Column = std::ops::Range<usize>;
