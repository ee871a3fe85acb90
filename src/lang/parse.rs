use super::{token::Token, Error, Lexer, SymbolTable};
use crate::mach::{Limits, Opcode, Program};
use log::debug;

type Result<T> = std::result::Result<T, Error>;

/// Compiles `text` with the default [`Limits`].
///
/// `x_name` and `y_name` are the spellings of the two variables; an empty
/// name leaves that variable out.
pub fn parse(text: &str, x_name: &str, y_name: &str) -> Result<Program> {
    parse_with_limits(text, x_name, y_name, &Limits::default())
}

pub fn parse_with_limits(text: &str, x_name: &str, y_name: &str, limits: &Limits) -> Result<Program> {
    let mut symbols = SymbolTable::new();
    for (name, opcode) in [(x_name, Opcode::VarX), (y_name, Opcode::VarY)].iter() {
        if !name.is_empty() {
            symbols.bind(name, *opcode)?;
        }
    }
    let program = Parser::parse(text, &symbols, limits)?;
    debug!("{:?} => {}", text, program);
    Ok(program)
}

struct Parser<'a> {
    lexer: Lexer<'a>,
    program: Program,
    current: Option<Token>,
    depth: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    fn parse(text: &str, symbols: &'a SymbolTable, limits: &Limits) -> Result<Program> {
        let mut parse = Parser {
            lexer: Lexer::new(text, symbols),
            program: Program::new(limits),
            current: None,
            depth: 0,
            max_depth: limits.max_depth,
        };
        parse.next()?;
        if parse.current.is_none() {
            return Err(error!(MissingExpression));
        }
        parse.expression()?;
        if parse.current.is_some() {
            return Err(error!(SyntaxError, ..&parse.lexer.column(); "UNEXPECTED LEXEME"));
        }
        Ok(parse.program)
    }

    fn next(&mut self) -> Result<()> {
        self.current = self.lexer.next_lexeme(&mut self.program)?;
        Ok(())
    }

    fn plant(&mut self, opcode: Opcode) -> Result<()> {
        match self.program.plant(opcode) {
            Ok(()) => Ok(()),
            Err(e) => Err(e.in_column(&self.lexer.column())),
        }
    }

    fn nested(&mut self, production: fn(&mut Parser<'a>) -> Result<()>) -> Result<()> {
        if self.depth >= self.max_depth {
            return Err(error!(TooDeeplyNested, ..&self.lexer.column()));
        }
        self.depth += 1;
        let result = production(self);
        self.depth -= 1;
        result
    }

    fn expression(&mut self) -> Result<()> {
        self.term()?;
        while let Some(Token::PlusMinus(opcode)) = self.current {
            self.next()?;
            self.term()?;
            self.plant(opcode)?;
        }
        Ok(())
    }

    fn term(&mut self) -> Result<()> {
        self.power_term()?;
        while let Some(Token::TimesDivide(opcode)) = self.current {
            self.next()?;
            self.power_term()?;
            self.plant(opcode)?;
        }
        Ok(())
    }

    /// `^` chains apply left to right: `2^3^2` is `(2^3)^2`.
    fn power_term(&mut self) -> Result<()> {
        self.factor()?;
        while let Some(Token::Power(opcode)) = self.current {
            self.next()?;
            self.factor()?;
            self.plant(opcode)?;
        }
        Ok(())
    }

    fn factor(&mut self) -> Result<()> {
        match self.current {
            Some(Token::Constant(index)) => {
                if let Err(e) = self.program.plant_constant(index) {
                    return Err(e.in_column(&self.lexer.column()));
                }
                self.next()
            }
            Some(Token::Variable(opcode)) => {
                self.plant(opcode)?;
                self.next()
            }
            Some(Token::LParen) => {
                self.next()?;
                self.nested(Parser::expression)?;
                self.expect_right_parenthesis()
            }
            Some(Token::PlusMinus(sign)) => {
                self.next()?;
                self.nested(Parser::factor)?;
                if sign == Opcode::Sub {
                    self.plant(Opcode::Neg)?;
                }
                Ok(())
            }
            Some(Token::Function(opcode)) => {
                self.next()?;
                self.expect_left_parenthesis()?;
                self.nested(Parser::expression)?;
                self.expect_right_parenthesis()?;
                self.plant(opcode)
            }
            Some(_) => Err(error!(SyntaxError, ..&self.lexer.column())),
            None => Err(error!(SyntaxError, ..&self.lexer.column(); "EXPECTED OPERAND")),
        }
    }

    fn expect_left_parenthesis(&mut self) -> Result<()> {
        if let Some(Token::LParen) = self.current {
            return self.next();
        }
        Err(error!(ExpectingLeftParenthesis, ..&self.lexer.column()))
    }

    fn expect_right_parenthesis(&mut self) -> Result<()> {
        if let Some(Token::RParen) = self.current {
            return self.next();
        }
        Err(error!(ExpectingRightParenthesis, ..&self.lexer.column()))
    }
}
