use super::{Function, Opcode, Operation, Stack, Word};
use crate::error;
use crate::lang::{Error, ErrorCode, ErrorKind};
use log::{debug, trace, warn};
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// Runs `tape` against `constants` with `x` and `y` bound to the two
/// variables. The stack lives only for this call.
pub fn evaluate(tape: &[Word], constants: &[f64], x: f64, y: f64) -> Result<f64> {
    let result = Runtime::new(tape, constants, x, y).execute();
    if let Err(error) = &result {
        match error.kind() {
            ErrorKind::Internal => warn!("corrupt tape {:?}: {}", tape, error),
            _ => debug!("evaluation failed: {}", error),
        }
    }
    result
}

struct Runtime<'a> {
    tape: &'a [Word],
    constants: &'a [f64],
    x: f64,
    y: f64,
    pc: usize,
    stack: Stack<f64>,
}

impl<'a> Runtime<'a> {
    fn new(tape: &'a [Word], constants: &'a [f64], x: f64, y: f64) -> Runtime<'a> {
        Runtime {
            tape,
            constants,
            x,
            y,
            pc: 0,
            stack: Stack::new(tape.len(), ErrorCode::InternalError),
        }
    }

    fn execute(mut self) -> Result<f64> {
        while let Some(word) = self.tape.get(self.pc) {
            self.pc += 1;
            let opcode = Opcode::try_from(*word)?;
            trace!("{:>3} {} {:?}", self.pc - 1, opcode, self.stack);
            use Opcode::*;
            match opcode {
                Add => self.binary(Operation::sum)?,
                Sub => self.binary(Operation::subtract)?,
                Mul => self.binary(Operation::multiply)?,
                Div => self.binary(Operation::divide)?,
                Pow => self.binary(Operation::power)?,
                VarX => self.stack.push(self.x)?,
                VarY => self.stack.push(self.y)?,
                Pi => self.stack.push(std::f64::consts::PI)?,
                LoadConst => {
                    let value = self.operand()?;
                    self.stack.push(value)?
                }
                Nop => return Err(error!(InternalError; "NOP ON TAPE")),
                _ => match Function::for_opcode(opcode) {
                    Some(function) => {
                        let top = self.stack.last_mut()?;
                        *top = function(*top)?;
                    }
                    None => return Err(error!(InternalError; "UNDEFINED OPCODE")),
                },
            }
        }
        let result = self.stack.pop()?;
        if !self.stack.is_empty() {
            return Err(error!(InternalError; "UNBALANCED TAPE"));
        }
        Ok(result)
    }

    fn binary(&mut self, op: fn(f64, f64) -> Result<f64>) -> Result<()> {
        let (lhs, rhs) = self.stack.pop_2()?;
        self.stack.push(op(lhs, rhs)?)
    }

    fn operand(&mut self) -> Result<f64> {
        let index = match self.tape.get(self.pc) {
            Some(index) => *index as usize,
            None => return Err(error!(InternalError; "MISSING OPERAND")),
        };
        self.pc += 1;
        match self.constants.get(index) {
            Some(value) => Ok(*value),
            None => Err(error!(InternalError; "CONSTANT OUT OF RANGE")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(opcode: Opcode) -> Word {
        Word::from(opcode)
    }

    #[test]
    fn test_post_order() {
        // 10*(x+y)/2
        let tape = [
            word(Opcode::LoadConst),
            0,
            word(Opcode::VarX),
            word(Opcode::VarY),
            word(Opcode::Add),
            word(Opcode::Mul),
            word(Opcode::LoadConst),
            1,
            word(Opcode::Div),
        ];
        assert_eq!(evaluate(&tape, &[10.0, 2.0], 1.0, 2.0).unwrap(), 15.0);
    }

    #[test]
    fn test_unary_in_place() {
        let tape = [word(Opcode::Pi), word(Opcode::Neg), word(Opcode::Abs)];
        assert_eq!(evaluate(&tape, &[], 0.0, 0.0).unwrap(), std::f64::consts::PI);
    }

    #[test]
    fn test_evaluation_errors() {
        let tape = [word(Opcode::VarX), word(Opcode::VarY), word(Opcode::Div)];
        let error = evaluate(&tape, &[], 1.0, 0.0).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Evaluation);
        let tape = [word(Opcode::VarX), word(Opcode::Sqrt)];
        assert!(evaluate(&tape, &[], -4.0, 0.0)
            .unwrap_err()
            .is(ErrorCode::SqrtOfNegative));
    }

    #[test]
    fn test_corrupt_tapes() {
        let cases: Vec<(Vec<Word>, &str)> = vec![
            (vec![200], "INTERNAL ERROR; UNDEFINED OPCODE"),
            (vec![word(Opcode::Nop)], "INTERNAL ERROR; NOP ON TAPE"),
            (vec![word(Opcode::LoadConst)], "INTERNAL ERROR; MISSING OPERAND"),
            (vec![word(Opcode::LoadConst), 3], "INTERNAL ERROR; CONSTANT OUT OF RANGE"),
            (vec![word(Opcode::Add)], "INTERNAL ERROR; STACK UNDERFLOW"),
            (vec![word(Opcode::Sin)], "INTERNAL ERROR; STACK UNDERFLOW"),
            (vec![], "INTERNAL ERROR; STACK UNDERFLOW"),
            (
                vec![word(Opcode::VarX), word(Opcode::VarY)],
                "INTERNAL ERROR; UNBALANCED TAPE",
            ),
        ];
        for (tape, message) in cases {
            let error = evaluate(&tape, &[1.0], 1.0, 2.0).unwrap_err();
            assert_eq!(error.kind(), ErrorKind::Internal);
            assert_eq!(error.to_string(), message);
        }
    }
}
