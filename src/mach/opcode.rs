use super::Word;
use crate::error;
use crate::lang::Error;
use std::convert::TryFrom;

/// ## Virtual machine instruction set
///
/// The machine has no registers.
/// Every operation is performed on the stack.
///
/// For example: `3*x+1` compiles to
/// `[LoadConst, 0, VarX, Mul, LoadConst, 1, Add]`
///
/// `LoadConst` is the only instruction with an operand. The operand is the
/// next word on the tape, an index into the constant pool.
///
/// See <https://en.wikipedia.org/wiki/Reverse_Polish_notation>

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    Nop = 0,

    // *** Binary operations
    Add = 1,
    Sub = 2,
    Mul = 3,
    Div = 4,
    Pow = 5,

    // *** Stack manipulation
    /// Push the value bound to the first variable.
    VarX = 6,
    /// Push the value bound to the second variable.
    VarY = 7,

    // *** Unary operations, applied to the top of the stack in place
    Neg = 8,
    Exp = 9,
    Log = 10,
    Log10 = 11,
    /// Square, not square root.
    Sqr = 12,
    Sqrt = 13,
    Sin = 14,
    Cos = 15,
    Tan = 16,
    Atn = 17,
    Abs = 18,
    /// Round toward negative infinity.
    Int = 19,

    // *** Stack manipulation
    Pi = 20,
    LoadConst = 21,
}

impl Opcode {
    pub fn has_operand(self) -> bool {
        self == Opcode::LoadConst
    }
}

impl From<Opcode> for Word {
    fn from(opcode: Opcode) -> Word {
        opcode as Word
    }
}

impl TryFrom<Word> for Opcode {
    type Error = Error;
    fn try_from(word: Word) -> Result<Self, Self::Error> {
        use Opcode::*;
        Ok(match word {
            0 => Nop,
            1 => Add,
            2 => Sub,
            3 => Mul,
            4 => Div,
            5 => Pow,
            6 => VarX,
            7 => VarY,
            8 => Neg,
            9 => Exp,
            10 => Log,
            11 => Log10,
            12 => Sqr,
            13 => Sqrt,
            14 => Sin,
            15 => Cos,
            16 => Tan,
            17 => Atn,
            18 => Abs,
            19 => Int,
            20 => Pi,
            21 => LoadConst,
            _ => return Err(error!(InternalError; "UNDEFINED OPCODE")),
        })
    }
}

impl std::fmt::Debug for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Opcode::*;
        match self {
            Nop => write!(f, "NOP"),

            Add => write!(f, "ADD"),
            Sub => write!(f, "SUB"),
            Mul => write!(f, "MUL"),
            Div => write!(f, "DIV"),
            Pow => write!(f, "POW"),

            VarX => write!(f, "VARX"),
            VarY => write!(f, "VARY"),

            Neg => write!(f, "NEG"),
            Exp => write!(f, "EXP"),
            Log => write!(f, "LOG"),
            Log10 => write!(f, "LOG10"),
            Sqr => write!(f, "SQR"),
            Sqrt => write!(f, "SQRT"),
            Sin => write!(f, "SIN"),
            Cos => write!(f, "COS"),
            Tan => write!(f, "TAN"),
            Atn => write!(f, "ATN"),
            Abs => write!(f, "ABS"),
            Int => write!(f, "INT"),

            Pi => write!(f, "PI"),
            LoadConst => write!(f, "LOADCONST"),
        }
    }
}
