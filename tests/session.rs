use pretty_assertions::assert_eq;
use rpcalc::{
    error::{ErrorKind, EvalError, ParseError},
    interpreter::session::{HistoryEntry, Outcome, Session},
    symbols::SymbolTable,
};

fn session_with_pi() -> Session {
    Session::new([("pi", 3.14159)].into_iter().collect())
}

fn value_of(session: &mut Session, line: &str) -> f64 {
    match session.process_line(line) {
        Ok(Outcome::Evaluated(evaluation)) => evaluation.value,
        other => panic!("{line:?} did not evaluate: {other:?}"),
    }
}

fn kind_of(session: &mut Session, line: &str) -> ErrorKind {
    session.process_line(line)
           .expect_err("line should have failed")
           .kind()
}

#[test]
fn evaluation_reports_postfix_and_records_history() {
    let mut session = Session::default();

    let Ok(Outcome::Evaluated(evaluation)) = session.process_line("3 + 4 * 2") else {
        panic!("expected an evaluation");
    };
    assert_eq!(evaluation.value, 11.0);
    assert_eq!(evaluation.postfix.to_string(), "3 4 2 * +");
    assert_eq!(session.history(),
               &[HistoryEntry { expression: "3 + 4 * 2".into(),
                                result:     11.0, }]);
}

#[test]
fn history_keeps_evaluation_order() {
    let mut session = Session::default();

    value_of(&mut session, "  1 + 1  ");
    value_of(&mut session, "2 * 3");
    value_of(&mut session, "10 / 4");

    let lines: Vec<String> = session.history().iter().map(ToString::to_string).collect();
    assert_eq!(lines, vec!["1 + 1 = 2", "2 * 3 = 6", "10 / 4 = 2.5"]);
}

#[test]
fn assignment_binds_without_history() {
    let mut session = Session::default();

    assert_eq!(session.process_line("x = 10"),
               Ok(Outcome::Assigned { name:  "x".into(),
                                      value: 10.0, }));
    assert!(session.history().is_empty());
    assert_eq!(session.variables().get("x"), Some(10.0));
    assert_eq!(value_of(&mut session, "x * 2"), 20.0);
}

#[test]
fn assignment_overwrites_and_may_use_itself() {
    let mut session = Session::default();

    session.process_line("x=2").unwrap();
    session.process_line("x = x ^ 3 + 1").unwrap();

    assert_eq!(session.variables().get("x"), Some(9.0));
    assert_eq!(session.variables().len(), 1);
}

#[test]
fn assignment_without_spaces_and_with_expression() {
    let mut session = Session::default();

    session.process_line("rate=(1 + 2) * 3").unwrap();
    assert_eq!(value_of(&mut session, "rate - 1"), 8.0);
}

#[test]
fn constants_resolve_in_expressions() {
    let mut session = session_with_pi();

    assert_eq!(value_of(&mut session, "pi * 2"), 6.28318);
}

#[test]
fn constants_cannot_be_reassigned() {
    let mut session = session_with_pi();

    assert_eq!(session.process_line("pi = 3"),
               Err(EvalError::Parse(ParseError::ConstantReassignment { name: "pi".into() })));
    assert!(session.variables().is_empty());
    assert_eq!(value_of(&mut session, "pi"), 3.14159);
}

#[test]
fn invalid_assignment_targets_are_rejected() {
    let mut session = Session::default();

    assert_eq!(kind_of(&mut session, "1x = 3"), ErrorKind::InvalidAssignment);
    assert_eq!(kind_of(&mut session, " = 3"), ErrorKind::InvalidAssignment);
    assert_eq!(kind_of(&mut session, "a b = 3"), ErrorKind::InvalidAssignment);
    assert!(session.variables().is_empty());
}

#[test]
fn failures_leave_state_untouched() {
    let mut session = Session::default();
    session.process_line("x = 10").unwrap();
    value_of(&mut session, "x + 1");

    assert_eq!(kind_of(&mut session, "5 / 0"), ErrorKind::DivisionByZero);
    assert_eq!(kind_of(&mut session, "x = 1 / 0"), ErrorKind::DivisionByZero);
    assert_eq!(kind_of(&mut session, "x = (1"), ErrorKind::MismatchedParentheses);
    assert_eq!(kind_of(&mut session, "1 + * x"), ErrorKind::ConsecutiveOperators);
    assert_eq!(kind_of(&mut session, "y * 2"), ErrorKind::MalformedNumber);

    assert_eq!(session.variables().get("x"), Some(10.0));
    assert_eq!(session.history().len(), 1);
}

#[test]
fn evaluate_does_not_record_history() {
    let session = session_with_pi();

    assert_eq!(session.evaluate("pi - pi").map(|e| e.value), Ok(0.0));
    assert!(session.history().is_empty());
}

#[test]
fn unknown_name_in_assignment_is_malformed() {
    let mut session = Session::default();

    assert_eq!(kind_of(&mut session, "x = y + 1"), ErrorKind::MalformedNumber);
    assert!(!session.variables().contains("x"));
}

#[test]
fn constants_are_exposed_read_only() {
    let session = Session::new(SymbolTable::parse_definitions("g=9.81"));

    assert_eq!(session.constants().get("g"), Some(9.81));
}
