use super::number::{self, NUMBER_CONTENT, NUMBER_START};
use super::{is_whitespace, token::Token, Column, Error, SymbolTable, COMMENT_CHAR};
use crate::mach::Program;
use log::trace;

type Result<T> = std::result::Result<T, Error>;

/// ## Lexeme stream
///
/// Pulled one lexeme at a time by the parser. Numeric literals go straight
/// into the constant pool of the program being built.

pub struct Lexer<'a> {
    source: Vec<char>,
    pos: usize,
    col: Column,
    symbols: &'a SymbolTable,
}

impl<'a> Lexer<'a> {
    pub fn new(text: &str, symbols: &'a SymbolTable) -> Lexer<'a> {
        Lexer {
            source: text.chars().collect(),
            pos: 0,
            col: 0..0,
            symbols,
        }
    }

    /// Where the most recent lexeme, or the most recent error, was found.
    pub fn column(&self) -> Column {
        self.col.clone()
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Moves past whitespace and whole comments.
    pub fn skip(&mut self) -> Result<()> {
        let mut comment_start = None;
        while let Some(&ch) = self.source.get(self.pos) {
            if ch == COMMENT_CHAR {
                comment_start = match comment_start {
                    None => Some(self.pos),
                    Some(_) => None,
                };
            } else if comment_start.is_none() && !is_whitespace(ch) {
                break;
            }
            self.pos += 1;
        }
        if let Some(start) = comment_start {
            self.col = start..self.pos;
            return Err(error!(UnterminatedComment, ..&self.col));
        }
        Ok(())
    }

    /// The next lexeme, or `None` once the source is used up.
    pub fn next_lexeme(&mut self, program: &mut Program) -> Result<Option<Token>> {
        self.skip()?;
        let start = self.pos;
        self.col = start..start;
        if let Some((len, token)) = self.symbols.lookup(&self.source, self.pos) {
            self.pos += len;
            self.col = start..self.pos;
            trace!("{} at {:?}", token, self.col);
            return Ok(Some(token));
        }
        if NUMBER_START.iter().any(|s| self.is_at(s)) {
            let index = self.number(program)?;
            trace!("{} at {:?}", Token::Constant(index), self.col);
            return Ok(Some(Token::Constant(index)));
        }
        if self.at_end() {
            return Ok(None);
        }
        self.col = start..start + 1;
        Err(error!(NotRecognisable, ..&self.col))
    }

    fn number(&mut self, program: &mut Program) -> Result<usize> {
        let start = self.pos;
        while let Some(piece) = NUMBER_CONTENT.iter().find(|s| self.is_at(s)) {
            self.pos += piece.chars().count();
        }
        self.col = start..self.pos;
        let text: String = self.source[start..self.pos].iter().collect();
        match number::value(&text) {
            Some(value) => match program.store_constant(value) {
                Ok(index) => Ok(index),
                Err(error) => Err(error.in_column(&self.col)),
            },
            None => Err(error!(BadNumberFormat, ..&self.col)),
        }
    }

    fn is_at(&self, s: &str) -> bool {
        let mut rest = self.source[self.pos.min(self.source.len())..].iter();
        s.chars().all(|c| match rest.next() {
            Some(r) => r.to_ascii_uppercase() == c,
            None => false,
        })
    }
}
