use crate::token::Operator;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a postfix sequence.
pub enum RuntimeError {
    /// Attempted division (or remainder) by zero.
    DivisionByZero {
        /// The operator that failed, `/` or `%`.
        operator: Operator,
    },
    /// The value stack did not hold what the sequence needed.
    ///
    /// With an operator, fewer than two operands were available to it.
    /// Without one, evaluation finished with other than exactly one value.
    StackUnderflow {
        /// The operator that ran short, if any.
        operator: Option<Operator>,
        /// How many values the stack held at that point.
        depth:    usize,
    },
    /// A postfix sequence contained a parenthesis.
    UnexpectedToken {
        /// The token as written.
        token: String,
    },
    /// An operand could not be read as a number.
    MalformedNumber {
        /// The offending text.
        text: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { operator: Operator::Mod } => {
                write!(f, "Division by zero: remainder with a divisor that truncates to 0.")
            },
            Self::DivisionByZero { .. } => write!(f, "Division by zero."),
            Self::StackUnderflow { operator: Some(op),
                                   depth, } => write!(f,
                                                      "Stack underflow: '{op}' needs two operands but only {depth} available."),
            Self::StackUnderflow { operator: None,
                                   depth, } => write!(f,
                                                      "Stack underflow: expression left {depth} values instead of one."),
            Self::UnexpectedToken { token } => {
                write!(f, "Malformed postfix sequence: unexpected '{token}'.")
            },
            Self::MalformedNumber { text } => {
                write!(f, "Malformed number or unknown name: '{text}'.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
