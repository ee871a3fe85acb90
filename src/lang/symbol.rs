use super::token::Token;
use super::Error;
use crate::mach::Opcode;

type Result<T> = std::result::Result<T, Error>;

const BUILTINS: [(&str, Token); 22] = [
    ("(", Token::LParen),
    (")", Token::RParen),
    ("+", Token::PlusMinus(Opcode::Add)),
    ("-", Token::PlusMinus(Opcode::Sub)),
    ("*", Token::TimesDivide(Opcode::Mul)),
    ("/", Token::TimesDivide(Opcode::Div)),
    ("^", Token::Power(Opcode::Pow)),
    ("π", Token::Variable(Opcode::Pi)),
    ("PI", Token::Variable(Opcode::Pi)),
    ("EXP", Token::Function(Opcode::Exp)),
    ("LOG", Token::Function(Opcode::Log)),
    ("LN", Token::Function(Opcode::Log)),
    ("LOG10", Token::Function(Opcode::Log10)),
    ("SIN", Token::Function(Opcode::Sin)),
    ("COS", Token::Function(Opcode::Cos)),
    ("TAN", Token::Function(Opcode::Tan)),
    ("ATN", Token::Function(Opcode::Atn)),
    ("ATAN", Token::Function(Opcode::Atn)),
    ("SQR", Token::Function(Opcode::Sqr)),
    ("SQRT", Token::Function(Opcode::Sqrt)),
    ("ABS", Token::Function(Opcode::Abs)),
    ("INT", Token::Function(Opcode::Int)),
];

const VARIABLE_OPCODES: [Opcode; 2] = [Opcode::VarX, Opcode::VarY];

thread_local!(
    static LONGEST_FIRST: Vec<(&'static str, Token)> = {
        let mut table = BUILTINS.to_vec();
        table.sort_by_key(|(spelling, _)| std::cmp::Reverse(spelling.chars().count()));
        table
    };
);

/// ## Lexeme spellings
///
/// The built-in operators, functions and `π` are shared and never change.
/// Each parse session adds up to two variable names on top of them.

#[derive(Debug, Default)]
pub struct SymbolTable {
    variables: Vec<(String, Token)>,
}

impl SymbolTable {
    pub fn new() -> SymbolTable {
        SymbolTable::default()
    }

    /// Binds `name` to the first free variable slot, x then y.
    pub fn add_variable(&mut self, name: &str) -> Result<Opcode> {
        let free = VARIABLE_OPCODES
            .iter()
            .copied()
            .find(|op| !self.variables.iter().any(|(_, t)| *t == Token::Variable(*op)));
        match free {
            Some(opcode) => {
                self.bind(name, opcode)?;
                Ok(opcode)
            }
            None => Err(error!(SymbolTableFull; "NO FREE VARIABLE SLOT")),
        }
    }

    /// Binds `name` to the variable read by `opcode`.
    pub fn bind(&mut self, name: &str, opcode: Opcode) -> Result<()> {
        if name.is_empty() {
            return Err(error!(InternalError; "EMPTY VARIABLE NAME"));
        }
        if !VARIABLE_OPCODES.contains(&opcode) {
            return Err(error!(InternalError; "NOT A VARIABLE OPCODE"));
        }
        let token = Token::Variable(opcode);
        if self.variables.iter().any(|(_, t)| *t == token) {
            return Err(error!(SymbolTableFull; "VARIABLE SLOT IN USE"));
        }
        let taken = self.variables.iter().any(|(s, _)| same_spelling(s, name))
            || LONGEST_FIRST.with(|table| table.iter().any(|(s, _)| same_spelling(s, name)));
        if taken {
            return Err(error!(DuplicateSymbol));
        }
        self.variables.push((name.to_string(), token));
        Ok(())
    }

    /// The longest spelling found at `pos` in `source`, ignoring case.
    /// Returns the spelling's length in characters with its token.
    pub fn lookup(&self, source: &[char], pos: usize) -> Option<(usize, Token)> {
        let variable = self
            .variables
            .iter()
            .filter(|(s, _)| matches_at(s, source, pos))
            .map(|(s, t)| (s.chars().count(), *t))
            .max_by_key(|(len, _)| *len);
        let builtin = LONGEST_FIRST.with(|table| {
            table
                .iter()
                .find(|(s, _)| matches_at(s, source, pos))
                .map(|(s, t)| (s.chars().count(), *t))
        });
        match (variable, builtin) {
            (Some(var), Some(sym)) if sym.0 > var.0 => Some(sym),
            (Some(var), _) => Some(var),
            (None, sym) => sym,
        }
    }
}

fn same_spelling(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_uppercase)
        .eq(b.chars().flat_map(char::to_uppercase))
}

fn matches_at(spelling: &str, source: &[char], pos: usize) -> bool {
    let mut rest = source.get(pos..).unwrap_or(&[]).iter();
    spelling.chars().all(|s| match rest.next() {
        Some(c) => c.to_uppercase().eq(s.to_uppercase()),
        None => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_builtins_are_distinct() {
        for (i, (a, _)) in BUILTINS.iter().enumerate() {
            for (b, _) in BUILTINS.iter().skip(i + 1) {
                assert!(!same_spelling(a, b), "{} and {}", a, b);
            }
        }
    }

    #[test]
    fn test_longest_match() {
        let table = SymbolTable::new();
        let source = chars("log10(2)");
        assert_eq!(
            table.lookup(&source, 0),
            Some((5, Token::Function(Opcode::Log10)))
        );
        let source = chars("Sqrt(2)");
        assert_eq!(
            table.lookup(&source, 0),
            Some((4, Token::Function(Opcode::Sqrt)))
        );
        assert_eq!(table.lookup(&chars("log(2)"), 0).map(|(l, _)| l), Some(3));
    }

    #[test]
    fn test_lookup_position() {
        let table = SymbolTable::new();
        let source = chars("2*pi");
        assert_eq!(table.lookup(&source, 0), None);
        assert_eq!(
            table.lookup(&source, 1),
            Some((1, Token::TimesDivide(Opcode::Mul)))
        );
        assert_eq!(table.lookup(&source, 2), Some((2, Token::Variable(Opcode::Pi))));
        assert_eq!(table.lookup(&source, 4), None);
        assert_eq!(table.lookup(&chars("π"), 0), Some((1, Token::Variable(Opcode::Pi))));
    }

    #[test]
    fn test_variables() {
        let mut table = SymbolTable::new();
        assert_eq!(table.add_variable("rate").unwrap(), Opcode::VarX);
        assert_eq!(table.add_variable("t").unwrap(), Opcode::VarY);
        assert!(table
            .add_variable("z")
            .unwrap_err()
            .is(ErrorCode::SymbolTableFull));
        assert_eq!(
            table.lookup(&chars("RATE*2"), 0),
            Some((4, Token::Variable(Opcode::VarX)))
        );
        // TAN is longer than T
        assert_eq!(
            table.lookup(&chars("tan(1)"), 0),
            Some((3, Token::Function(Opcode::Tan)))
        );
    }

    #[test]
    fn test_variable_longer_than_builtin() {
        let mut table = SymbolTable::new();
        table.bind("cost", Opcode::VarY).unwrap();
        assert_eq!(
            table.lookup(&chars("cost"), 0),
            Some((4, Token::Variable(Opcode::VarY)))
        );
        assert_eq!(
            table.lookup(&chars("cos(0)"), 0),
            Some((3, Token::Function(Opcode::Cos)))
        );
    }

    #[test]
    fn test_duplicates() {
        let mut table = SymbolTable::new();
        assert!(table.add_variable("Sin").unwrap_err().is(ErrorCode::DuplicateSymbol));
        assert!(table.add_variable("pI").unwrap_err().is(ErrorCode::DuplicateSymbol));
        table.add_variable("x").unwrap();
        assert!(table.add_variable("X").unwrap_err().is(ErrorCode::DuplicateSymbol));
        assert!(table.bind("y", Opcode::Add).is_err());
        assert!(table.bind("", Opcode::VarY).is_err());
    }
}
