//! # rpcalc
//!
//! rpcalc is an interactive arithmetic calculator written in Rust.
//! It tokenizes infix expressions, resolves named constants and variables,
//! converts the expression to postfix with the shunting-yard algorithm and
//! evaluates it on a value stack.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{error::EvalError, interpreter::session::Session, symbols::SymbolTable};

/// Provides the error types for validation and evaluation.
///
/// Errors are split by the phase that raises them and unified under
/// `EvalError`, which also exposes a coarse `ErrorKind` for callers that
/// only need to branch on the category.
///
/// # Responsibilities
/// - Defines error enums for every failure mode of the pipeline.
/// - Implements `Display` with messages meant for the user.
pub mod error;
/// Orchestrates the evaluation pipeline.
///
/// This module contains each stage, from raw text to a number, plus the
/// session that runs them line by line.
///
/// # Responsibilities
/// - Lexing and name resolution.
/// - Validation, shunting-yard conversion and postfix evaluation.
/// - Variable binding and history.
pub mod interpreter;
/// Named values.
///
/// Declares the `SymbolTable` used for constants and variables, and the
/// loader for `name=value` constant files.
pub mod symbols;
/// Defines the tokens, operators and postfix sequences that flow between
/// the pipeline stages.
pub mod token;

/// Evaluates a single expression with no constants or variables.
///
/// # Errors
/// Returns an error if validation or evaluation fails.
///
/// # Examples
/// ```
/// use rpcalc::get_result;
///
/// assert_eq!(get_result("(1 + 2) * 3").unwrap(), 9.0);
/// assert!(get_result("5 / 0").is_err());
/// ```
pub fn get_result(source: &str) -> Result<f64, EvalError> {
    Session::new(SymbolTable::new()).evaluate(source)
                                    .map(|evaluation| evaluation.value)
}
