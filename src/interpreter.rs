/// The converter module reorders infix tokens into postfix form.
///
/// It implements the shunting-yard algorithm: operands pass straight
/// through while operators wait on a stack until precedence says they may be
/// emitted.
///
/// # Responsibilities
/// - Applies the precedence table `+ -` < `* / %` < `^`.
/// - Treats every operator as left-associative.
/// - Consumes parentheses; the output contains only operands and operators.
pub mod converter;
/// The evaluator module executes postfix sequences.
///
/// A single value stack is enough once the expression is in postfix order.
///
/// # Responsibilities
/// - Pushes operands and applies operators to the top two values.
/// - Reports division by zero, stack underflow and malformed operands.
pub mod evaluator;
/// The lexer module tokenizes expression text.
///
/// The lexer reads the raw input and produces numbers, operators and
/// parentheses. Names are resolved against the constant and variable tables
/// here, so no later stage ever sees an identifier.
///
/// # Responsibilities
/// - Splits input on whitespace, operators and parentheses.
/// - Replaces known names with their values, constants first.
/// - Folds a leading or post-operator `-` into the operand that follows.
pub mod lexer;
/// The session module ties the stages together for each input line.
///
/// # Responsibilities
/// - Distinguishes assignments from plain expressions.
/// - Owns the constants, the variables and the history.
/// - Leaves all state untouched when a line fails.
pub mod session;
/// The validator module rejects structurally broken token sequences.
///
/// # Responsibilities
/// - Checks that parentheses are balanced.
/// - Checks that no two operators are adjacent.
pub mod validator;
