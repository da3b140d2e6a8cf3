use super::Column;

/// ## Pipeline error
///
/// Every stage fails fast with exactly one of these. The column points at
/// the offending character, token or statement; the message carries its
/// text or name.

#[derive(Clone, PartialEq, thiserror::Error)]
#[error("{code}{}", suffix(.column, .message))]
pub struct Error {
    code: ErrorCode,
    column: Column,
    message: String,
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
    ($err:ident, ..$col:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_column($col)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            column: 0..0,
            message: String::new(),
        }
    }

    pub fn in_column(self, column: &Column) -> Error {
        debug_assert_eq!(self.column, 0..0);
        Error {
            column: column.clone(),
            ..self
        }
    }

    pub fn message<S: Into<String>>(self, message: S) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            message: message.into(),
            ..self
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn stage(&self) -> Stage {
        self.code.stage()
    }

    pub fn column(&self) -> Column {
        self.column.clone()
    }

    pub fn text(&self) -> &str {
        &self.message
    }
}

fn suffix(column: &Column, message: &str) -> String {
    let mut suffix = String::new();
    if (0..0) != *column {
        suffix.push_str(&format!(" AT {}..{}", column.start, column.end));
    }
    if !message.is_empty() {
        suffix.push_str(&format!("; {}", message));
    }
    suffix
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

/// The pipeline stage an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Scan,
    Lex,
    Parse,
    Runtime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ErrorCode {
    #[error("UNEXPECTED CHARACTER")]
    UnexpectedCharacter = 1,
    #[error("MALFORMED NUMBER")]
    MalformedNumber = 10,
    #[error("UNKNOWN SYMBOL")]
    UnknownSymbol = 11,
    #[error("EXPECTED IDENTIFIER")]
    ExpectedIdentifier = 20,
    #[error("UNEXPECTED TOKEN")]
    UnexpectedToken = 21,
    #[error("MISSING RTN")]
    MissingReturn = 22,
    #[error("NESTED LBL NOT ALLOWED")]
    NestedLabel = 23,
    #[error("UNDEFINED VARIABLE")]
    UndefinedVariable = 30,
    #[error("UNDEFINED LABEL")]
    UndefinedLabel = 31,
    #[error("DIVISION BY ZERO")]
    DivisionByZero = 32,
    #[error("DIVISION PRECISION UNDEFINED")]
    DivisionPrecisionUndefined = 33,
    #[error("CALL STACK OVERFLOW")]
    CallStackOverflow = 34,
    #[error("STEP LIMIT EXCEEDED")]
    StepLimitExceeded = 35,
}

impl ErrorCode {
    pub fn stage(self) -> Stage {
        use ErrorCode::*;
        match self {
            UnexpectedCharacter => Stage::Scan,
            MalformedNumber | UnknownSymbol => Stage::Lex,
            ExpectedIdentifier | UnexpectedToken | MissingReturn | NestedLabel => Stage::Parse,
            UndefinedVariable | UndefinedLabel | DivisionByZero | DivisionPrecisionUndefined
            | CallStackOverflow | StepLimitExceeded => Stage::Runtime,
        }
    }
}
