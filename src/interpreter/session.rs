use std::fmt;

use log::debug;

use crate::{
    error::{EvalError, ParseError},
    interpreter::{converter::to_postfix, evaluator::evaluate, lexer::tokenize,
                  validator::validate},
    symbols::{SymbolTable, is_identifier},
    token::PostfixSequence,
};

/// One successfully evaluated expression, kept in the session history.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    /// The expression as entered, without surrounding whitespace.
    pub expression: String,
    /// The value it evaluated to.
    pub result:     f64,
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.expression, self.result)
    }
}

/// The value of an expression together with the postfix form it was
/// computed from.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// The computed value.
    pub value:   f64,
    /// The expression in postfix order.
    pub postfix: PostfixSequence,
}

/// What processing a line produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A plain expression was evaluated and recorded in the history.
    Evaluated(Evaluation),
    /// A variable was bound.
    Assigned {
        /// The variable's name.
        name:  String,
        /// The value it now holds.
        value: f64,
    },
}

/// Holds the state of one interactive session.
///
/// Constants are fixed when the session is created. Variables are bound by
/// `name = expression` lines and history records every plain evaluation, in
/// order. A line that fails leaves all three untouched.
///
/// ## Usage
///
/// ```
/// use rpcalc::{
///     interpreter::session::{Outcome, Session},
///     symbols::SymbolTable,
/// };
///
/// let mut session = Session::new(SymbolTable::new());
/// session.process_line("x = 10").unwrap();
///
/// let Outcome::Evaluated(evaluation) = session.process_line("x * 2").unwrap() else {
///     panic!("expected an evaluation");
/// };
/// assert_eq!(evaluation.value, 20.0);
/// assert_eq!(session.history().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    constants: SymbolTable,
    variables: SymbolTable,
    history:   Vec<HistoryEntry>,
}

impl Session {
    /// Creates a session with the given constants, no variables and an empty
    /// history.
    #[must_use]
    pub fn new(constants: SymbolTable) -> Self {
        Self { constants,
               variables: SymbolTable::new(),
               history: Vec::new() }
    }

    /// Processes one input line.
    ///
    /// A line containing `=` is an assignment: the text before the first `=`
    /// names the variable and the text after it is evaluated and bound to
    /// it, replacing any previous value. Assignments are not recorded in the
    /// history. Any other line is evaluated and, on success, appended to the
    /// history.
    ///
    /// # Errors
    /// Returns the first error raised by any pipeline stage, or a
    /// `ParseError` if the assignment target is not a valid name or is the
    /// name of a constant. Session state is unchanged on error.
    pub fn process_line(&mut self, line: &str) -> Result<Outcome, EvalError> {
        if let Some((name, expression)) = line.split_once('=') {
            let name = name.trim();
            let value = self.assign(name, expression)?;
            return Ok(Outcome::Assigned { name: name.to_string(),
                                          value });
        }

        let evaluation = self.evaluate(line)?;
        let entry = HistoryEntry { expression: line.trim().to_string(),
                                   result:     evaluation.value, };
        debug!("history += {entry}");
        self.history.push(entry);
        Ok(Outcome::Evaluated(evaluation))
    }

    /// Runs an expression through the full pipeline without touching the
    /// session state.
    ///
    /// # Errors
    /// Returns the first error raised by validation or evaluation.
    pub fn evaluate(&self, expression: &str) -> Result<Evaluation, EvalError> {
        let tokens = tokenize(expression, &self.constants, &self.variables);
        validate(&tokens)?;
        let postfix = to_postfix(&tokens);
        let value = evaluate(&postfix)?;
        debug!("{:?} -> [{postfix}] -> {value}", expression.trim());
        Ok(Evaluation { value, postfix })
    }

    fn assign(&mut self, name: &str, expression: &str) -> Result<f64, EvalError> {
        if !is_identifier(name) {
            return Err(ParseError::InvalidVariableName { name: name.to_string() }.into());
        }
        if self.constants.contains(name) {
            return Err(ParseError::ConstantReassignment { name: name.to_string() }.into());
        }

        let value = self.evaluate(expression)?.value;
        self.variables.insert(name, value);
        debug!("variable {name} = {value}");
        Ok(value)
    }

    /// Every successful plain evaluation, oldest first.
    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// The session's constants.
    #[must_use]
    pub const fn constants(&self) -> &SymbolTable {
        &self.constants
    }

    /// The variables bound so far.
    #[must_use]
    pub const fn variables(&self) -> &SymbolTable {
        &self.variables
    }
}
