/// Parsing errors.
///
/// Defines the errors found before any arithmetic happens: unbalanced
/// parentheses, operators with no operand between them, and malformed
/// assignment targets.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while the postfix sequence is executed:
/// division by zero, a short value stack, a malformed postfix sequence, and
/// operands that are not numbers.
pub mod runtime_error;

pub use parse_error::{ParenMismatch, ParseError};
pub use runtime_error::RuntimeError;

/// The coarse category of an [`EvalError`].
///
/// Callers that only need to branch on what went wrong match on this; the
/// error's `Display` carries the details.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A `)` with nothing to close, or a `(` left open.
    MismatchedParentheses,
    /// Two operators with no operand between them.
    ConsecutiveOperators,
    /// `/` or `%` by zero.
    DivisionByZero,
    /// The value stack ran short or ended with other than one value. Covers
    /// any postfix sequence that is malformed.
    StackUnderflow,
    /// An operand that is neither a literal nor a known name.
    MalformedNumber,
    /// An assignment whose target is not a usable variable name.
    InvalidAssignment,
}

/// Any failure while processing one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// Rejected before evaluation.
    Parse(ParseError),
    /// Failed during evaluation.
    Runtime(RuntimeError),
}

impl EvalError {
    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(ParseError::MismatchedParentheses { .. }) => {
                ErrorKind::MismatchedParentheses
            },
            Self::Parse(ParseError::ConsecutiveOperators { .. }) => {
                ErrorKind::ConsecutiveOperators
            },
            Self::Parse(ParseError::InvalidVariableName { .. }
                        | ParseError::ConstantReassignment { .. }) => ErrorKind::InvalidAssignment,
            Self::Runtime(RuntimeError::DivisionByZero { .. }) => ErrorKind::DivisionByZero,
            Self::Runtime(RuntimeError::StackUnderflow { .. }
                          | RuntimeError::UnexpectedToken { .. }) => ErrorKind::StackUnderflow,
            Self::Runtime(RuntimeError::MalformedNumber { .. }) => ErrorKind::MalformedNumber,
        }
    }
}

impl From<ParseError> for EvalError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for EvalError {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
