/// The command layer on top of the evaluator.
///
/// Recognises the commands of one input line (`help`, `list`, `value`,
/// `save as`, `load`, assignment, bare expressions) without executing them.
pub mod command;
/// The evaluator turns expression strings into polynomials.
///
/// Expressions are not parsed into a tree. The evaluator tries a fixed
/// sequence of forms (bound name, coefficient list, operators, function
/// calls) and recurses into the pieces of the first one that matches.
///
/// # Responsibilities
/// - Resolves names against a read-only binding table.
/// - Selects scalar or polynomial multiplication.
/// - Reports unknown names, malformed expressions and division by zero.
pub mod evaluator;
/// The lexer normalizes the whitespace of an expression.
///
/// Whitespace next to operators is insignificant, whitespace between numbers
/// separates coefficients. The lexer classifies the input so the evaluator can
/// work on a canonical string.
pub mod lexer;
/// The session owns the binding table and executes commands against it.
///
/// # Responsibilities
/// - Executes recognised commands and produces the lines to print.
/// - Saves and loads the table through the storage module.
/// - Runs multi-line scripts, reporting the line of the first failure.
pub mod session;
