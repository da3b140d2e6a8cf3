/*!
## Rust Machine Module

This Rust module is the register stack machine that runs keystroke programs.

*/

mod config;
mod operation;
mod registers;
mod runtime;
mod stack;
mod var;

pub use config::Config;
pub use operation::Operation;
pub use registers::Registers;
pub use runtime::Runtime;
pub use stack::Stack;
pub use var::Var;
