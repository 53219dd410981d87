use crate::token::Operator;

/// Which way a parenthesis check failed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ParenMismatch {
    /// A `)` appeared with no open `(` to close.
    TooManyClosing,
    /// The input ended while a `(` was still open.
    Unclosed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors detected before evaluation starts.
pub enum ParseError {
    /// Parentheses do not pair up.
    MismatchedParentheses {
        /// Whether a `)` was extra or a `(` was left open.
        reason: ParenMismatch,
    },
    /// Two operators follow each other with no operand in between.
    ConsecutiveOperators {
        /// The operator seen first.
        first:  Operator,
        /// The operator that directly followed it.
        second: Operator,
    },
    /// The left-hand side of an assignment is not a valid name.
    InvalidVariableName {
        /// The rejected text.
        name: String,
    },
    /// An assignment targeted the name of a constant.
    ConstantReassignment {
        /// The constant's name.
        name: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MismatchedParentheses { reason: ParenMismatch::TooManyClosing } => {
                write!(f, "Mismatched parentheses: Too many closing parentheses.")
            },
            Self::MismatchedParentheses { reason: ParenMismatch::Unclosed } => {
                write!(f, "Mismatched parentheses: Not all parentheses are closed.")
            },
            Self::ConsecutiveOperators { first, second } => {
                write!(f, "Invalid sequence of operators: '{first}' followed by '{second}'.")
            },
            Self::InvalidVariableName { name } => write!(f,
                                                         "Invalid variable name '{name}'. Names start with a letter or '_' and contain only letters, digits and '_'."),
            Self::ConstantReassignment { name } => {
                write!(f, "'{name}' is a constant and cannot be assigned.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
