use super::Column;

pub struct Error {
    code: u16,
    column: Column,
    message: &'static str,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_column($col)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, ..$col:expr;  $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_column($col)
            .message($msg)
    };
}

/// Which stage an error belongs to.
///
/// `Internal` means the core itself is inconsistent: a corrupt tape or a
/// symbol table that could not be set up. User input never produces one.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorKind {
    Parse,
    Evaluation,
    Internal,
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            column: 0..0,
            message: "",
        }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn is(&self, code: ErrorCode) -> bool {
        self.code == code as u16
    }

    pub fn kind(&self) -> ErrorKind {
        match self.code {
            1..=19 => ErrorKind::Parse,
            20..=39 => ErrorKind::Evaluation,
            _ => ErrorKind::Internal,
        }
    }

    pub fn column(&self) -> Column {
        self.column.clone()
    }

    pub fn in_column(&self, column: &Column) -> Error {
        debug_assert_eq!(self.column, 0..0);
        Error {
            code: self.code,
            column: column.clone(),
            message: self.message,
        }
    }

    pub fn message(&self, message: &'static str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            code: self.code,
            column: self.column.clone(),
            message,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorCode {
    SyntaxError = 2,
    UnterminatedComment = 3,
    BadNumberFormat = 4,
    NotRecognisable = 5,
    ExpectingLeftParenthesis = 6,
    ExpectingRightParenthesis = 7,
    ExpressionTooLong = 8,
    TooManyConstants = 9,
    MissingExpression = 10,
    EndOfExpressionExpected = 11,
    TooDeeplyNested = 12,

    DivisionByZero = 20,
    LogOfNonPositive = 21,
    SqrtOfNegative = 22,
    ComplexPower = 23,

    InternalError = 51,
    SymbolTableFull = 52,
    DuplicateSymbol = 53,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            2 => "SYNTAX ERROR",
            3 => "UNTERMINATED COMMENT",
            4 => "BAD NUMBER FORMAT",
            5 => "NAME OR SYMBOL NOT RECOGNISABLE",
            6 => "EXPECTING LEFT PARENTHESIS",
            7 => "EXPECTING RIGHT PARENTHESIS",
            8 => "EXPRESSION TOO LONG",
            9 => "TOO MANY CONSTANTS",
            10 => "MISSING EXPRESSION",
            11 => "END OF EXPRESSION EXPECTED",
            12 => "TOO DEEPLY NESTED",
            20 => "DIVISION BY ZERO",
            21 => "LOGARITHM OF NON-POSITIVE VALUE",
            22 => "SQUARE ROOT OF NEGATIVE VALUE",
            23 => "NON-INTEGER POWER OF NEGATIVE VALUE",
            51 => "INTERNAL ERROR",
            52 => "SYMBOL TABLE FULL",
            53 => "SYMBOL TABLE ENTRY DUPLICATED",
            _ => "",
        };
        let mut suffix = String::new();
        if (0..0) != self.column {
            suffix.push_str(&format!(" ({}..{})", self.column.start, self.column.end));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        if code_str.is_empty() {
            if suffix.is_empty() {
                write!(f, "PROGRAM ERROR {}", self.code)
            } else {
                write!(f, "PROGRAM ERROR {} IN{}", self.code, suffix)
            }
        } else if suffix.starts_with(';') {
            write!(f, "{}{}", code_str, suffix)
        } else if suffix.is_empty() {
            write!(f, "{}", code_str)
        } else {
            write!(f, "{} IN{}", code_str, suffix)
        }
    }
}

impl std::error::Error for Error {}
