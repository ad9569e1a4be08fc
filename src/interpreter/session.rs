use tracing::debug;

use crate::{
    error::{Error, RuntimeError, ScriptError},
    interpreter::{
        command::{Command, HELP, parse_command},
        evaluator::core::{Bindings, EvalResult, Evaluator},
    },
    polynomial::core::Polynomial,
    storage,
};

/// What the caller should do after a command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print these lines (possibly none) and read the next command.
    Continue(Vec<String>),
    /// Stop reading commands.
    Exit,
}

/// A calculator session: the binding table and the commands that act on it.
///
/// The session owns the only long-lived polynomials. Expressions see the
/// table read-only; assignment and `load` are the only writers.
#[derive(Debug, Default)]
pub struct Session {
    bindings: Bindings,
}

impl Session {
    /// Creates a session with no polynomials.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session over an existing table.
    #[must_use]
    pub const fn with_bindings(bindings: Bindings) -> Self {
        Self { bindings }
    }

    /// The current binding table.
    #[must_use]
    pub const fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    /// Looks up a bound polynomial.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnknownVariable` if `name` is not bound.
    pub fn get(&self, name: &str) -> Result<&Polynomial, RuntimeError> {
        self.bindings
            .get(name)
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string() })
    }

    /// Evaluates an expression against the current table without changing
    /// it.
    ///
    /// # Errors
    /// See [`Evaluator::eval`].
    pub fn evaluate(&self, expression: &str) -> EvalResult<Polynomial> {
        Evaluator::new(&self.bindings).eval(expression)
    }

    /// Runs one line of input.
    ///
    /// A failing command leaves the table unchanged.
    ///
    /// # Errors
    /// Any parse, evaluation or persistence error of the command.
    ///
    /// # Example
    /// ```
    /// use polycalc::interpreter::session::{Outcome, Session};
    ///
    /// let mut session = Session::new();
    /// assert_eq!(session.execute("p = 1 2 1").unwrap(),
    ///            Outcome::Continue(vec!["p = (1x^2)+(2x)+(1)".to_string()]));
    /// assert_eq!(session.execute("value p 2").unwrap(),
    ///            Outcome::Continue(vec!["9".to_string()]));
    /// assert!(session.execute("value q 2").is_err());
    /// ```
    pub fn execute(&mut self, line: &str) -> Result<Outcome, Error> {
        let command = parse_command(line)?;
        debug!(?command, "executing");

        let lines = match command {
            Command::Empty => Vec::new(),
            Command::Help => HELP.lines().map(str::to_string).collect(),
            Command::Exit => return Ok(Outcome::Exit),
            Command::List => self.bindings
                                 .iter()
                                 .map(|(name, polynomial)| format!("{name} = {polynomial}"))
                                 .collect(),
            Command::Value { name, x } => vec![self.get(name)?.value_at(x).to_string()],
            Command::Save { path } => {
                storage::save(&path, &self.bindings)?;
                vec![format!("Polynomials saved to {}", path.display())]
            },
            Command::Load { path } => {
                self.bindings = storage::load(&path)?;
                vec![format!("Polynomials loaded from {}", path.display())]
            },
            Command::Assign { name, expression } => {
                let polynomial = self.evaluate(expression)?;
                let echo = format!("{name} = {polynomial}");
                self.bindings.insert(name.to_string(), polynomial);
                vec![echo]
            },
            Command::Evaluate { expression } => vec![self.evaluate(expression)?.to_string()],
        };

        Ok(Outcome::Continue(lines))
    }

    /// Runs a newline-separated script and returns everything it printed.
    ///
    /// Blank lines and lines starting with `#` are skipped. Execution stops
    /// at `exit` or at the first failing command.
    ///
    /// # Errors
    /// Returns a `ScriptError` carrying the 1-based line number of the first
    /// failing command.
    pub fn run_script(&mut self, source: &str) -> Result<Vec<String>, ScriptError> {
        let mut output = Vec::new();

        for (index, line) in source.lines().enumerate() {
            if line.trim_start().starts_with('#') {
                continue;
            }

            match self.execute(line) {
                Ok(Outcome::Continue(lines)) => output.extend(lines),
                Ok(Outcome::Exit) => break,
                Err(error) => return Err(ScriptError { line: index + 1,
                                                       error }),
            }
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn printed(session: &mut Session, line: &str) -> Vec<String> {
        match session.execute(line) {
            Ok(Outcome::Continue(lines)) => lines,
            other => panic!("unexpected outcome for '{line}': {other:?}"),
        }
    }

    #[test]
    fn assignment_prints_and_binds() {
        let mut session = Session::new();
        assert_eq!(printed(&mut session, "p1 = 1 2 3"), vec!["p1 = (1x^2)+(2x)+(3)"]);
        assert_eq!(printed(&mut session, "p2=p1"), vec!["p2 = (1x^2)+(2x)+(3)"]);
        assert_eq!(session.bindings().len(), 2);
    }

    #[test]
    fn list_is_ordered_by_name() {
        let mut session = Session::new();
        printed(&mut session, "b = 1");
        printed(&mut session, "a = 1 0");
        assert_eq!(printed(&mut session, "list"), vec!["a = (1x)", "b = (1)"]);
    }

    #[test]
    fn failed_assignment_keeps_old_value() {
        let mut session = Session::new();
        printed(&mut session, "p = 1 1");
        assert!(session.execute("p = p / 0").is_err());
        assert_eq!(session.get("p").unwrap(), &Polynomial::from_coefficients(vec![1.0, 1.0]));
    }

    #[test]
    fn bare_expressions_are_printed() {
        let mut session = Session::new();
        printed(&mut session, "a = 1 2 5");
        printed(&mut session, "b = 1 1");
        assert_eq!(printed(&mut session, "a / b"), vec!["(1x)+(1)"]);
        assert_eq!(printed(&mut session, "a % b"), vec!["(4)"]);
        assert_eq!(printed(&mut session, "a - a"), vec!["(0)"]);
    }

    #[test]
    fn exit_and_help() {
        let mut session = Session::new();
        assert_eq!(session.execute("exit").unwrap(), Outcome::Exit);
        assert!(printed(&mut session, "help").len() > 10);
    }

    #[test]
    fn scripts_report_the_failing_line() {
        let mut session = Session::new();
        let err = session.run_script("# setup\np = 1 1\n\nq = r + p\n").unwrap_err();
        assert_eq!(err.line, 4);
        assert!(matches!(err.error, Error::Runtime(RuntimeError::UnknownVariable { .. })));

        let output = Session::new().run_script("p = 1 1\nexit\np = oops").unwrap();
        assert_eq!(output, vec!["p = (1x)+(1)"]);
    }
}
