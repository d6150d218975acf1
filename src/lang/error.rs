use super::LineNumber;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    line_number: LineNumber,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn kind(&self) -> ErrorKind {
        self.code.kind()
    }

    /// Zero-based index of the offending line.
    pub fn line_number(&self) -> LineNumber {
        self.line_number
    }

    pub fn detail(&self) -> &str {
        &self.message
    }

    pub fn in_line_number(self, line: LineNumber) -> Error {
        Error {
            line_number: line,
            ..self
        }
    }

    /// Attach a line only if the error does not carry one yet.
    pub fn or_line_number(self, line: LineNumber) -> Error {
        if self.line_number.is_some() {
            self
        } else {
            self.in_line_number(line)
        }
    }

    pub fn message<S: AsRef<str>>(self, message: S) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            message: message.as_ref().to_string(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Parse,
    Expression,
    Arity,
    UnknownStatement,
    InputCancelled,
    StepLimitExceeded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    ElseWithoutIf,
    EndIfWithoutIf,
    EndRepeatWithoutRepeat,
    UnclosedBlock,
    NestedProcedure,
    MalformedProcedure,
    EndProcedureWithoutProcedure,
    UnclosedProcedure,
    DuplicateProcedure,
    ReservedName,
    InvalidCharacters,
    SyntaxError,
    UndefinedVariable,
    UndefinedProcedure,
    TypeMismatch,
    SubscriptOutOfRange,
    IllegalFunctionCall,
    WrongNumberOfArguments,
    UnknownStatement,
    ReturnWithoutProcedure,
    InternalError,
    InputCancelled,
    StepLimitExceeded,
}

impl ErrorCode {
    pub fn kind(self) -> ErrorKind {
        use ErrorCode::*;
        match self {
            ElseWithoutIf
            | EndIfWithoutIf
            | EndRepeatWithoutRepeat
            | UnclosedBlock
            | NestedProcedure
            | MalformedProcedure
            | EndProcedureWithoutProcedure
            | UnclosedProcedure
            | DuplicateProcedure
            | ReservedName => ErrorKind::Parse,
            InvalidCharacters
            | SyntaxError
            | UndefinedVariable
            | UndefinedProcedure
            | TypeMismatch
            | SubscriptOutOfRange
            | IllegalFunctionCall => ErrorKind::Expression,
            WrongNumberOfArguments => ErrorKind::Arity,
            UnknownStatement | ReturnWithoutProcedure | InternalError => {
                ErrorKind::UnknownStatement
            }
            InputCancelled => ErrorKind::InputCancelled,
            StepLimitExceeded => ErrorKind::StepLimitExceeded,
        }
    }

    fn as_str(self) -> &'static str {
        use ErrorCode::*;
        match self {
            ElseWithoutIf => "ELSE WITHOUT IF",
            EndIfWithoutIf => "END IF WITHOUT IF",
            EndRepeatWithoutRepeat => "END REPEAT WITHOUT REPEAT",
            UnclosedBlock => "BLOCK NOT CLOSED",
            NestedProcedure => "NESTED PROCEDURE",
            MalformedProcedure => "MALFORMED PROCEDURE",
            EndProcedureWithoutProcedure => "END PROCEDURE WITHOUT PROCEDURE",
            UnclosedProcedure => "PROCEDURE NOT CLOSED",
            DuplicateProcedure => "DUPLICATE PROCEDURE",
            ReservedName => "RESERVED NAME",
            InvalidCharacters => "INVALID CHARACTERS",
            SyntaxError => "SYNTAX ERROR",
            UndefinedVariable => "UNDEFINED VARIABLE",
            UndefinedProcedure => "UNDEFINED PROCEDURE",
            TypeMismatch => "TYPE MISMATCH",
            SubscriptOutOfRange => "SUBSCRIPT OUT OF RANGE",
            IllegalFunctionCall => "ILLEGAL FUNCTION CALL",
            WrongNumberOfArguments => "WRONG NUMBER OF ARGUMENTS",
            UnknownStatement => "UNKNOWN STATEMENT",
            ReturnWithoutProcedure => "RETURN WITHOUT PROCEDURE",
            InternalError => "INTERNAL ERROR",
            InputCancelled => "INPUT CANCELLED",
            StepLimitExceeded => "STEP LIMIT EXCEEDED",
        }
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.code.as_str())?;
        if let Some(line_number) = self.line_number {
            write!(f, " IN LINE {}", line_number + 1)?;
        }
        if !self.message.is_empty() {
            write!(f, "; {}", self.message)?;
        }
        Ok(())
    }
}
