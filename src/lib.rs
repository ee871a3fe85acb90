//! # parseval
//!
//! Arithmetic expressions in two variables, compiled once to an opcode
//! tape and then evaluated as often as needed on a small stack machine.
//!
//! ```
//! let program = parseval::lang::parse("10*(x + y)/2.0 + sin(π*0.5)", "x", "y").unwrap();
//! let value = program.evaluate(1.0, 2.01).unwrap();
//! assert!((value - 16.05).abs() < 1e-9);
//! ```
//!
//! Names are matched without regard to case. The built-in functions are
//! `EXP`, `LOG` (or `LN`), `LOG10`, `SIN`, `COS`, `TAN`, `ATN` (or `ATAN`),
//! `SQR`, `SQRT`, `ABS` and `INT`, and `π` may also be written `PI`.
//! Text between a pair of backticks is a comment.
//!
//! Running the executable with an expression prints its value.
//! ```text
//! $ parseval -x 3 -y 4 'sqrt(x^2 + y^2)'
//! 5
//! ```

pub mod lang;
pub mod mach;

#[doc(hidden)]
pub mod term;
