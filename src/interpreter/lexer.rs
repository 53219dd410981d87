use std::iter::Peekable;

use log::trace;
use logos::Logos;

use crate::{
    symbols::SymbolTable,
    token::{Operator, Token},
};

/// A raw lexical token, before names are resolved.
///
/// Whitespace separates tokens and is never emitted. Operators and
/// parentheses also separate tokens and are emitted on their own. Any other
/// run of characters is a number, an identifier or, failing both, a word.
/// The longest match wins, so `1.2.3` and `12abc` come out as single words.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\x0B\f]+")]
pub enum RawToken {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5`, `2.` or `2.1e-10`.
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", parse_float, priority = 4)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_float, priority = 4)]
    Number(f64),
    /// Identifier tokens; constant or variable names such as `pi` or `x_1`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string(), priority = 4)]
    Identifier(String),
    /// Anything else that is not a delimiter.
    #[regex(r"[^ \t\r\n\x0B\f+\-*/%^()]+", |lex| lex.slice().to_string(), priority = 1)]
    Word(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// Parses a floating-point literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the slice is not a valid float.
fn parse_float(lex: &logos::Lexer<RawToken>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Splits `text` into tokens, resolving names along the way.
///
/// Identifiers are looked up in `constants` first and then in `variables`;
/// a constant always wins over a variable of the same name. Names found in
/// neither table, and words that are not valid literals, are kept as
/// [`Token::Unresolved`] so the evaluator can report them.
///
/// A `-` is folded into the following operand when it starts the
/// expression or comes right after an operator or `(`. Everywhere else it
/// is subtraction, so `3-5` is `3 - 5` while `2 * -3` multiplies by `-3`.
///
/// # Example
/// ```
/// use rpcalc::{
///     interpreter::lexer::tokenize,
///     symbols::SymbolTable,
///     token::{Operator, Token},
/// };
///
/// let constants: SymbolTable = [("pi", 3.14159)].into_iter().collect();
/// let tokens = tokenize("pi * -2", &constants, &SymbolTable::new());
/// assert_eq!(tokens,
///            vec![Token::Number(3.14159), Token::Operator(Operator::Mul), Token::Number(-2.0)]);
/// ```
#[must_use]
pub fn tokenize(text: &str, constants: &SymbolTable, variables: &SymbolTable) -> Vec<Token> {
    let mut lexer = RawToken::lexer(text);
    let mut resolved = Vec::new();

    while let Some(raw) = lexer.next() {
        let token = match raw {
            Ok(raw) => resolve(raw, constants, variables),
            Err(()) => Token::Unresolved(lexer.slice().to_string()),
        };
        resolved.push(token);
    }

    let tokens = fold_unary_minus(resolved.into_iter().peekable());
    trace!("tokenized {text:?} into {tokens:?}");
    tokens
}

fn resolve(raw: RawToken, constants: &SymbolTable, variables: &SymbolTable) -> Token {
    match raw {
        RawToken::Number(value) => Token::Number(value),
        RawToken::Identifier(name) => constants.get(&name)
                                               .or_else(|| variables.get(&name))
                                               .map_or(Token::Unresolved(name), Token::Number),
        RawToken::Word(text) => Token::Unresolved(text),
        RawToken::Plus => Token::Operator(Operator::Add),
        RawToken::Minus => Token::Operator(Operator::Sub),
        RawToken::Star => Token::Operator(Operator::Mul),
        RawToken::Slash => Token::Operator(Operator::Div),
        RawToken::Percent => Token::Operator(Operator::Mod),
        RawToken::Caret => Token::Operator(Operator::Pow),
        RawToken::LParen => Token::LeftParen,
        RawToken::RParen => Token::RightParen,
    }
}

fn fold_unary_minus<I>(mut tokens: Peekable<I>) -> Vec<Token>
    where I: Iterator<Item = Token>
{
    let mut out: Vec<Token> = Vec::new();

    while let Some(token) = tokens.next() {
        let expects_operand =
            matches!(out.last(), None | Some(Token::Operator(_) | Token::LeftParen));

        if token == Token::Operator(Operator::Sub)
           && expects_operand
           && let Some(operand) = tokens.next_if(Token::is_operand)
        {
            out.push(negate(operand));
            continue;
        }
        out.push(token);
    }

    out
}

fn negate(operand: Token) -> Token {
    match operand {
        Token::Number(value) => Token::Number(-value),
        Token::Unresolved(text) => Token::Unresolved(format!("-{text}")),
        other => other,
    }
}
