use std::fmt;

use crate::error::RuntimeError;

/// Represents a binary arithmetic operator.
///
/// Every operator is left-associative, including `^`: `2 ^ 3 ^ 2` groups as
/// `(2 ^ 3) ^ 2`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Truncating remainder (`%`)
    Mod,
    /// Exponentiation (`^`)
    Pow,
}

impl Operator {
    /// Returns the binding strength of the operator.
    ///
    /// `+ -` bind loosest (1), `* / %` tighter (2) and `^` tightest (3).
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div | Self::Mod => 2,
            Self::Pow => 3,
        }
    }

    /// The character this operator is written as.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Mod => '%',
            Self::Pow => '^',
        }
    }

    /// Applies the operator to `a` and `b`, in that order.
    ///
    /// `%` truncates both operands toward zero before taking the remainder,
    /// so `5.7 % 2` is `1`. The result carries the sign of the dividend.
    ///
    /// # Errors
    /// Returns `RuntimeError::DivisionByZero` for `/` with a zero divisor and
    /// for `%` when the truncated divisor is zero.
    ///
    /// # Example
    /// ```
    /// use rpcalc::token::Operator;
    ///
    /// assert_eq!(Operator::Mod.apply(5.7, 2.0).unwrap(), 1.0);
    /// assert_eq!(Operator::Pow.apply(2.0, -1.0).unwrap(), 0.5);
    /// assert!(Operator::Div.apply(5.0, 0.0).is_err());
    /// ```
    pub fn apply(self, a: f64, b: f64) -> Result<f64, RuntimeError> {
        match self {
            Self::Add => Ok(a + b),
            Self::Sub => Ok(a - b),
            Self::Mul => Ok(a * b),
            Self::Div => {
                if b == 0.0 {
                    return Err(RuntimeError::DivisionByZero { operator: self });
                }
                Ok(a / b)
            },
            Self::Mod => {
                let divisor = b.trunc();
                if divisor == 0.0 {
                    return Err(RuntimeError::DivisionByZero { operator: self });
                }
                Ok(a.trunc() % divisor)
            },
            Self::Pow => Ok(a.powf(b)),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A resolved token, as produced by the lexer.
///
/// Names never appear here: the lexer replaces every known constant or
/// variable with its value. A word it could not resolve is kept as
/// [`Token::Unresolved`] and only rejected once the evaluator reaches it.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A numeric literal or the value of a resolved name.
    Number(f64),
    /// One of `+ - * / % ^`.
    Operator(Operator),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// Operand text that is neither a valid literal nor a known name.
    Unresolved(String),
}

impl Token {
    /// Whether the token stands for a value.
    ///
    /// This is the single classification used by the converter and the
    /// evaluator, so the two stages always agree on what an operand is.
    #[must_use]
    pub const fn is_operand(&self) -> bool {
        matches!(self, Self::Number(_) | Self::Unresolved(_))
    }

    /// Returns the operator if this token is one.
    #[must_use]
    pub const fn as_operator(&self) -> Option<Operator> {
        match self {
            Self::Operator(op) => Some(*op),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
            Self::Unresolved(text) => write!(f, "{text}"),
        }
    }
}

/// An expression in postfix (Reverse Polish) order.
///
/// Holds only operands and operators; parentheses have been consumed by the
/// conversion. Displays as space separated tokens, e.g. `3 4 2 * +`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PostfixSequence {
    tokens: Vec<Token>,
}

impl PostfixSequence {
    /// Wraps an already ordered list of tokens.
    #[must_use]
    pub const fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// The tokens in evaluation order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of tokens in the sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the sequence is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub(crate) fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }
}

impl fmt::Display for PostfixSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a PostfixSequence {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
