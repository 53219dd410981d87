use crate::{
    error::{ParenMismatch, ParseError},
    token::Token,
};

/// Checks that a token sequence is structurally sound.
///
/// Parentheses are checked first, then operator adjacency; when both are
/// wrong, the parenthesis error is the one reported. Only a sequence that
/// passes both may be handed to the converter.
///
/// # Errors
/// - `ParseError::MismatchedParentheses` if a `)` has no `(` to close, or a
///   `(` is never closed.
/// - `ParseError::ConsecutiveOperators` if two operators are adjacent.
///
/// # Example
/// ```
/// use rpcalc::{
///     error::{ParenMismatch, ParseError},
///     interpreter::validator::validate,
///     token::{Operator, Token},
/// };
///
/// let tokens = [Token::LeftParen, Token::Number(1.0)];
/// assert_eq!(validate(&tokens),
///            Err(ParseError::MismatchedParentheses { reason: ParenMismatch::Unclosed }));
///
/// let tokens = [Token::Number(1.0), Token::Operator(Operator::Add), Token::Number(2.0)];
/// assert!(validate(&tokens).is_ok());
/// ```
pub fn validate(tokens: &[Token]) -> Result<(), ParseError> {
    check_parentheses(tokens)?;
    check_consecutive_operators(tokens)
}

/// Verifies that parentheses pair up, scanning left to right.
pub fn check_parentheses(tokens: &[Token]) -> Result<(), ParseError> {
    let mut open = 0usize;

    for token in tokens {
        match token {
            Token::LeftParen => open += 1,
            Token::RightParen => {
                if open == 0 {
                    return Err(ParseError::MismatchedParentheses { reason:
                                                                       ParenMismatch::TooManyClosing, });
                }
                open -= 1;
            },
            _ => {},
        }
    }

    if open != 0 {
        return Err(ParseError::MismatchedParentheses { reason: ParenMismatch::Unclosed });
    }
    Ok(())
}

/// Verifies that no operator directly follows another one.
///
/// Only operators set the flag; operands and parentheses clear it.
pub fn check_consecutive_operators(tokens: &[Token]) -> Result<(), ParseError> {
    let mut previous = None;

    for token in tokens {
        match (previous, token.as_operator()) {
            (Some(first), Some(second)) => {
                return Err(ParseError::ConsecutiveOperators { first, second });
            },
            (_, current) => previous = current,
        }
    }
    Ok(())
}
