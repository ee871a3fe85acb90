use crate::mach::Opcode;

/// A classified lexeme.
///
/// Operators, variables and functions carry the opcode the parser will
/// plant for them. A constant carries its index in the constant pool.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Token {
    PlusMinus(Opcode),
    TimesDivide(Opcode),
    Power(Opcode),
    LParen,
    RParen,
    Variable(Opcode),
    Function(Opcode),
    Constant(usize),
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            PlusMinus(Opcode::Add) => write!(f, "+"),
            PlusMinus(_) => write!(f, "-"),
            TimesDivide(Opcode::Mul) => write!(f, "*"),
            TimesDivide(_) => write!(f, "/"),
            Power(_) => write!(f, "^"),
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
            Variable(op) => write!(f, "{}", op),
            Function(op) => write!(f, "{}", op),
            Constant(index) => write!(f, "#{}", index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Token::PlusMinus(Opcode::Sub).to_string(), "-");
        assert_eq!(Token::TimesDivide(Opcode::Div).to_string(), "/");
        assert_eq!(Token::Function(Opcode::Log10).to_string(), "LOG10");
        assert_eq!(Token::Variable(Opcode::Pi).to_string(), "PI");
        assert_eq!(Token::Constant(3).to_string(), "#3");
    }
}
