/*!
## Rust Machine Module

This Rust module is the stack machine that runs a compiled expression.

*/

/// One slot of the opcode tape: an opcode or the operand that follows it.
pub type Word = u16;

mod function;
mod limits;
mod opcode;
mod operation;
mod program;
mod runtime;
mod stack;

pub use function::Function;
pub use limits::Limits;
pub use limits::{MAX_CODE_LEN, MAX_CONSTANTS, MAX_DEPTH};
pub use opcode::Opcode;
pub use operation::Operation;
pub use program::Program;
pub use runtime::evaluate;
pub use stack::Stack;
