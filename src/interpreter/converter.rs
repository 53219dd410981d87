use log::trace;

use crate::token::{PostfixSequence, Token};

/// Converts a validated infix token sequence to postfix order using the
/// shunting-yard algorithm.
///
/// - Operands go straight to the output, in the order they appear.
/// - `(` is pushed onto the operator stack.
/// - `)` pops operators to the output until the matching `(`, which is
///   discarded.
/// - An operator first pops every stacked operator of greater or equal
///   precedence (stopping at `(`), then is pushed. Popping on equal
///   precedence makes every operator left-associative, `^` included.
/// - At the end the remaining operators are popped to the output.
///
/// The input is expected to have passed
/// [`validate`](crate::interpreter::validator::validate). Should unbalanced
/// parentheses get through anyway, a stray `(` is dropped and a stray `)`
/// simply stops popping.
///
/// Every step is logged at `trace` level.
///
/// # Example
/// ```
/// use rpcalc::{
///     interpreter::{converter::to_postfix, lexer::tokenize},
///     symbols::SymbolTable,
/// };
///
/// let empty = SymbolTable::new();
/// let postfix = to_postfix(&tokenize("3 + 4 * 2", &empty, &empty));
/// assert_eq!(postfix.to_string(), "3 4 2 * +");
/// ```
#[must_use]
pub fn to_postfix(tokens: &[Token]) -> PostfixSequence {
    let mut output = PostfixSequence::default();
    let mut stack: Vec<Token> = Vec::new();

    for token in tokens {
        if token.is_operand() {
            trace!("added to output: {token}");
            output.push(token.clone());
            continue;
        }

        match token {
            Token::LeftParen => {
                trace!("pushed to stack: (");
                stack.push(Token::LeftParen);
            },
            Token::RightParen => {
                while let Some(top) = stack.pop() {
                    if top == Token::LeftParen {
                        trace!("popped from stack: (");
                        break;
                    }
                    trace!("popped from stack to output: {top}");
                    output.push(top);
                }
            },
            Token::Operator(op) => {
                while let Some(Token::Operator(top)) = stack.last()
                      && top.precedence() >= op.precedence()
                {
                    trace!("popped from stack to output: {top} (precedence)");
                    output.push(Token::Operator(*top));
                    stack.pop();
                }
                trace!("pushed to stack: {op}");
                stack.push(token.clone());
            },
            _ => {},
        }
    }

    while let Some(top) = stack.pop() {
        if top == Token::LeftParen {
            continue;
        }
        trace!("popped from stack to output at end: {top}");
        output.push(top);
    }

    output
}
