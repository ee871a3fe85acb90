use super::{evaluate, Limits, Opcode, Stack, Word};
use crate::lang::{Error, ErrorCode};
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// ## Compiled expression
///
/// An opcode tape and the constant pool it indexes into.
/// Built by the parser, then only read.

#[derive(Debug, Clone)]
pub struct Program {
    tape: Stack<Word>,
    constants: Stack<f64>,
}

impl Program {
    pub fn new(limits: &Limits) -> Program {
        Program {
            tape: Stack::new(limits.max_code_len, ErrorCode::ExpressionTooLong),
            constants: Stack::new(limits.max_constants, ErrorCode::TooManyConstants),
        }
    }

    /// Wraps a tape produced elsewhere. Nothing is checked until evaluation.
    pub fn from_parts(tape: Vec<Word>, constants: Vec<f64>) -> Program {
        Program {
            tape: Stack::from_vec(tape, ErrorCode::ExpressionTooLong),
            constants: Stack::from_vec(constants, ErrorCode::TooManyConstants),
        }
    }

    pub fn tape(&self) -> &[Word] {
        self.tape.as_slice()
    }

    pub fn constants(&self) -> &[f64] {
        self.constants.as_slice()
    }

    pub fn plant(&mut self, opcode: Opcode) -> Result<()> {
        self.tape.push(Word::from(opcode))
    }

    pub fn plant_constant(&mut self, index: usize) -> Result<()> {
        self.plant(Opcode::LoadConst)?;
        match Word::try_from(index) {
            Ok(word) => self.tape.push(word),
            Err(_) => Err(Error::new(ErrorCode::TooManyConstants)),
        }
    }

    /// Index of `value` in the pool, appending it if no stored constant
    /// is exactly equal.
    pub fn store_constant(&mut self, value: f64) -> Result<usize> {
        if let Some(index) = self.constants.iter().position(|c| *c == value) {
            return Ok(index);
        }
        self.constants.push(value)?;
        Ok(self.constants.len() - 1)
    }

    pub fn evaluate(&self, x: f64, y: f64) -> Result<f64> {
        evaluate(self.tape(), self.constants(), x, y)
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut words = self.tape.iter();
        let mut first = true;
        while let Some(word) = words.next() {
            if !first {
                write!(f, " ")?;
            }
            first = false;
            match Opcode::try_from(*word) {
                Ok(opcode) if opcode.has_operand() => match words.next() {
                    Some(index) => match self.constants.get(*index as usize) {
                        Some(value) => write!(f, "{}({})", opcode, value)?,
                        None => write!(f, "{}(#{})", opcode, index)?,
                    },
                    None => write!(f, "{}(?)", opcode)?,
                },
                Ok(opcode) => write!(f, "{}", opcode)?,
                Err(_) => write!(f, "?{}", word)?,
            }
        }
        Ok(())
    }
}
