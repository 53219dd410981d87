use crate::{
    error::RuntimeError,
    token::{PostfixSequence, Token},
};

/// Result type used by the evaluator.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Executes a postfix sequence on a value stack and returns the result.
///
/// Operands are pushed. Each operator pops `b`, then `a`, and pushes
/// `a op b`. Exactly one value must remain once the sequence is exhausted.
///
/// # Errors
/// - `RuntimeError::MalformedNumber` when an operand is not a number.
/// - `RuntimeError::StackUnderflow` when an operator finds fewer than two
///   values, or when the sequence does not leave exactly one value (an empty
///   sequence included).
/// - `RuntimeError::DivisionByZero` from `/` or `%`.
/// - `RuntimeError::UnexpectedToken` when the sequence holds a parenthesis.
///
/// # Example
/// ```
/// use rpcalc::{
///     interpreter::evaluator::evaluate,
///     token::{Operator, PostfixSequence, Token},
/// };
///
/// // 2 3 ^ 2 ^
/// let postfix = PostfixSequence::new(vec![Token::Number(2.0),
///                                         Token::Number(3.0),
///                                         Token::Operator(Operator::Pow),
///                                         Token::Number(2.0),
///                                         Token::Operator(Operator::Pow)]);
/// assert_eq!(evaluate(&postfix).unwrap(), 64.0);
/// ```
pub fn evaluate(postfix: &PostfixSequence) -> EvalResult<f64> {
    let mut stack: Vec<f64> = Vec::with_capacity(postfix.len());

    for token in postfix {
        if token.is_operand() {
            stack.push(operand_value(token)?);
            continue;
        }

        match token {
            Token::Operator(op) => {
                let depth = stack.len();
                let underflow = || RuntimeError::StackUnderflow { operator: Some(*op),
                                                                  depth };
                let b = stack.pop().ok_or_else(underflow)?;
                let a = stack.pop().ok_or_else(underflow)?;
                stack.push(op.apply(a, b)?);
            },
            other => {
                return Err(RuntimeError::UnexpectedToken { token: other.to_string() });
            },
        }
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        values => Err(RuntimeError::StackUnderflow { operator: None,
                                                     depth:    values.len(), }),
    }
}

fn operand_value(token: &Token) -> EvalResult<f64> {
    match token {
        Token::Number(value) => Ok(*value),
        other => Err(RuntimeError::MalformedNumber { text: other.to_string() }),
    }
}
