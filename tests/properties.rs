use proptest::prelude::*;
use rpcalc::{
    error::RuntimeError,
    interpreter::{converter::to_postfix, evaluator::evaluate, lexer::tokenize,
                  validator::validate},
    symbols::SymbolTable,
    token::{Operator, Token},
};

/// Evaluates infix tokens directly by precedence climbing, using the same
/// table as the converter: higher precedence binds tighter and equal
/// precedence groups to the left.
struct Recursive<'a> {
    tokens: &'a [Token],
    pos:    usize,
}

impl Recursive<'_> {
    fn peek_operator(&self) -> Option<Operator> {
        self.tokens.get(self.pos).and_then(Token::as_operator)
    }

    fn expression(&mut self, min_precedence: u8) -> Result<f64, RuntimeError> {
        let mut left = self.primary()?;
        while let Some(op) = self.peek_operator()
              && op.precedence() >= min_precedence
        {
            self.pos += 1;
            let right = self.expression(op.precedence() + 1)?;
            left = op.apply(left, right)?;
        }
        Ok(left)
    }

    fn primary(&mut self) -> Result<f64, RuntimeError> {
        let token = self.tokens.get(self.pos).cloned();
        self.pos += 1;
        match token {
            Some(Token::Number(value)) => Ok(value),
            Some(Token::LeftParen) => {
                let value = self.expression(1)?;
                // closing parenthesis
                self.pos += 1;
                Ok(value)
            },
            other => panic!("unexpected token in generated expression: {other:?}"),
        }
    }
}

fn recursive_eval(tokens: &[Token]) -> Result<f64, RuntimeError> {
    Recursive { tokens, pos: 0 }.expression(1)
}

fn operator() -> impl Strategy<Value = Operator> {
    prop_oneof![Just(Operator::Add),
                Just(Operator::Sub),
                Just(Operator::Mul),
                Just(Operator::Div),
                Just(Operator::Mod),
                Just(Operator::Pow)]
}

/// Well-formed infix text: non-negative literals joined by binary operators,
/// with random parenthesised groups.
fn infix() -> impl Strategy<Value = String> {
    let literal = prop_oneof![(0u32..=12).prop_map(|n| n.to_string()),
                              (0u32..40).prop_map(|n| (f64::from(n) / 4.0).to_string())];

    literal.prop_recursive(5, 32, 2, |inner| {
               prop_oneof![(inner.clone(), operator(), inner.clone()).prop_map(|(l, op, r)| {
                                                                          format!("{l} {op} {r}")
                                                                      }),
                           inner.prop_map(|e| format!("({e})"))]
           })
}

fn same_outcome(left: &Result<f64, RuntimeError>, right: &Result<f64, RuntimeError>) -> bool {
    match (left, right) {
        (Ok(a), Ok(b)) => {
            a == b || (a.is_nan() && b.is_nan()) || (a - b).abs() <= 1e-9 * a.abs().max(b.abs())
        },
        (Err(RuntimeError::DivisionByZero { .. }), Err(RuntimeError::DivisionByZero { .. })) => {
            true
        },
        _ => false,
    }
}

proptest! {
    #[test]
    fn shunting_yard_matches_recursive_evaluation(src in infix()) {
        let empty = SymbolTable::new();
        let tokens = tokenize(&src, &empty, &empty);
        prop_assert!(validate(&tokens).is_ok(), "{src} did not validate");

        let via_postfix = evaluate(&to_postfix(&tokens));
        let direct = recursive_eval(&tokens);
        prop_assert!(same_outcome(&via_postfix, &direct),
                     "{src}: postfix gave {via_postfix:?}, recursive gave {direct:?}");
    }

    #[test]
    fn postfix_keeps_operands_and_operators_only(src in infix()) {
        let empty = SymbolTable::new();
        let tokens = tokenize(&src, &empty, &empty);
        let postfix = to_postfix(&tokens);

        let parens = tokens.iter()
                           .filter(|t| matches!(t, Token::LeftParen | Token::RightParen))
                           .count();
        prop_assert_eq!(postfix.len(), tokens.len() - parens);
        prop_assert!(postfix.tokens()
                            .iter()
                            .all(|t| t.is_operand() || t.as_operator().is_some()));
    }
}
