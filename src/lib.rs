//! # keycalc
//!
//! Keystroke programs for a programmable calculator, the way they were
//! keyed into pocket machines with a four register stack.
//!
//! ```
//! let runtime = keycalc::execute("lbl sq rcl x rcl x * rtn 6 sto x xeq sq").unwrap();
//! assert_eq!(runtime.x().to_string(), "36");
//! ```
//!
//! Source text goes through [`lang::scan`], [`lang::lex`] and
//! [`lang::parse`] to become a [`lang::ast::Program`], which a
//! [`mach::Runtime`] executes. Each stage stops at its first error.

#[path = "doc/language.rs"]
#[allow(non_snake_case)]
pub mod _Language;

pub mod lang;
pub mod mach;

use lang::ast::Program;
use lang::Error;
use mach::Runtime;

/// Scan, lex and parse source text.
pub fn compile(source: &str) -> Result<Program, Error> {
    let raw = lang::scan(source)?;
    let tokens = lang::lex(&raw)?;
    lang::parse(&tokens)
}

/// Compile and run source text on a default machine.
pub fn execute(source: &str) -> Result<Runtime, Error> {
    let program = compile(source)?;
    let mut runtime = Runtime::default();
    runtime.run(&program)?;
    Ok(runtime)
}
