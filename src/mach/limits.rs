/// Capacities of one parse session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Words of opcode tape, operands included.
    pub max_code_len: usize,
    /// Distinct literal values in the constant pool.
    pub max_constants: usize,
    /// Nesting of parentheses, function calls and unary signs.
    pub max_depth: usize,
}

pub const MAX_CODE_LEN: usize = 100;
pub const MAX_CONSTANTS: usize = 20;
pub const MAX_DEPTH: usize = 32;

impl Default for Limits {
    fn default() -> Limits {
        Limits {
            max_code_len: MAX_CODE_LEN,
            max_constants: MAX_CONSTANTS,
            max_depth: MAX_DEPTH,
        }
    }
}
