use super::{Line, LineNumber};

pub struct Error {
    code: u16,
    line_number: LineNumber,
    text: String,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            line_number: None,
            text: String::new(),
            message: String::new(),
        }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn line_number(&self) -> LineNumber {
        self.line_number
    }

    /// Diagnostics are written into the program output instead of
    /// aborting the run.
    pub fn is_diagnostic(&self) -> bool {
        self.code == ErrorCode::UndefinedFunction as u16
            || self.code == ErrorCode::UnrecognizedStatement as u16
    }

    pub fn in_line(self, line: &Line) -> Error {
        debug_assert!(self.line_number.is_none());
        Error {
            line_number: Some(line.number()),
            text: line.text().to_string(),
            ..self
        }
    }

    pub fn message(self, message: &str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            message: message.to_string(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ErrorCode {
    SyntaxError = 2,
    UnterminatedBlock = 3,
    UndefinedFunction = 18,
    UnrecognizedStatement = 21,
    RecursionLimitExceeded = 24,
    StepLimitExceeded = 25,
    NestingLimitExceeded = 26,
    Break = 27,
    InternalError = 51,
    FileNotFound = 53,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            2 => "SYNTAX ERROR",
            3 => "UNTERMINATED BLOCK",
            18 => "UNDEFINED FUNCTION",
            21 => "UNRECOGNIZED STATEMENT",
            24 => "CALL DEPTH EXCEEDED",
            25 => "EXECUTION STEPS EXCEEDED",
            26 => "NESTING TOO DEEP",
            27 => "BREAK",
            51 => "INTERNAL ERROR",
            53 => "FILE NOT FOUND",
            _ => "",
        };
        let mut suffix = String::new();
        if let Some(line_number) = self.line_number {
            suffix.push_str(&format!(" {}", line_number));
            if !self.text.is_empty() {
                suffix.push_str(&format!(": {}", self.text));
            }
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
        } else if self.line_number.is_none() {
            write!(f, "{}{}", code_str, suffix)
        } else {
            write!(f, "{} IN{}", code_str, suffix)
        }
    }
}
