use std::collections::HashMap;

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::{console::Console, value::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime state of a program.
///
/// The interpreter owns the single global variable environment. It is created
/// once per run, lives for the whole run, and there are no nested scopes: an
/// assignment anywhere is visible everywhere afterwards.
///
/// ## Usage
///
/// Create one `Interpreter` per program run and hand it the parsed statement
/// sequence via [`Interpreter::run`]. Expressions can also be evaluated
/// standalone with [`Interpreter::eval`].
pub struct Interpreter {
    globals: HashMap<String, Value>,
}

#[allow(clippy::new_without_default)]
impl Interpreter {
    /// Creates a new interpreter with an empty variable environment.
    #[must_use]
    pub fn new() -> Self {
        Self { globals: HashMap::new(), }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches based on expression variant: literals, variable references,
    /// unary and binary operations.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The computed [`Value`].
    ///
    /// # Errors
    /// - `UnboundVariable` when a variable is read before any assignment.
    /// - Any arithmetic error from the operator implementations.
    ///
    /// # Example
    /// ```
    /// use gotolang::{
    ///     ast::Expr,
    ///     interpreter::{evaluator::core::Interpreter, value::Value},
    /// };
    ///
    /// let interpreter = Interpreter::new();
    /// let expr = Expr::Literal { value: 7.into(),
    ///                            line:  1, };
    ///
    /// assert_eq!(interpreter.eval(&expr).unwrap(), Value::Integer(7));
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::Variable { name, line } => self.eval_variable(name, *line),
            Expr::UnaryOp { op, expr, line } => {
                let value = self.eval(expr)?;
                Self::eval_unary(*op, &value, *line)
            },
            Expr::BinaryOp { left, op, right, line } => {
                let lval = self.eval(left)?;
                let rval = self.eval(right)?;
                Self::eval_binary(*op, &lval, &rval, *line)
            },
        }
    }

    /// Executes a single statement.
    ///
    /// The return value is the statement's control-flow effect: `Some(index)`
    /// when a `GOTO` computed an explicit next statement index, `None` when
    /// the program counter should simply advance by one. Returning the jump
    /// rather than mutating a shared counter keeps [`Interpreter::run`] the
    /// single authority over control transfer.
    ///
    /// # Parameters
    /// - `statement`: Statement to execute.
    /// - `console`: The input/output capability used by `INPUT` and `OUTPUT`.
    ///
    /// # Returns
    /// `Some(index)` for a computed jump, otherwise `None`.
    ///
    /// # Errors
    /// Any evaluation error, `InvalidJumpTarget` for an unusable `GOTO`
    /// value, and `InputFailed` when no input line can be obtained.
    pub fn exec(&mut self,
                statement: &Statement,
                console: &mut dyn Console)
                -> EvalResult<Option<i64>> {
        match statement {
            Statement::Assignment { name, value, .. } => {
                let value = self.eval(value)?;
                self.define(name, value);
                Ok(None)
            },

            Statement::Input { name, line } => {
                let Ok(text) = console.read_line() else {
                    return Err(RuntimeError::InputFailed { line: *line });
                };
                self.define(name, parse_input_line(text));
                Ok(None)
            },

            Statement::Output { expr, .. } => {
                let value = self.eval(expr)?;
                console.print_line(&value.to_string());
                Ok(None)
            },

            Statement::Goto { target, line } => {
                let value = self.eval(target)?;
                Ok(Some(value.jump_index(*line)?))
            },

            Statement::NoOp => Ok(None),
        }
    }

    /// Runs a parsed program to completion.
    ///
    /// This is the defining loop of the language: a mutable statement index
    /// starts at 0; each executed statement either yields an explicit next
    /// index (a computed jump) or advances the index by one. The loop halts
    /// normally as soon as the index leaves `[0, len)` in either direction,
    /// and that boundary check is the only termination condition: a program
    /// that keeps jumping inside the range runs forever, which is a property
    /// of the language rather than an interpreter limit.
    ///
    /// # Parameters
    /// - `program`: The ordered statement sequence.
    /// - `console`: The input/output capability.
    ///
    /// # Errors
    /// The first fatal [`RuntimeError`] raised by any statement; there is no
    /// recovery or partial-result mode.
    ///
    /// # Example
    /// ```
    /// use gotolang::interpreter::{
    ///     console::MemoryConsole,
    ///     evaluator::core::Interpreter,
    ///     lexer::tokenize,
    ///     parser::statement::parse_program,
    /// };
    ///
    /// let tokens = tokenize("x = 5; OUTPUT x + 1; GOTO 9;").unwrap();
    /// let program = parse_program(&mut tokens.iter().peekable()).unwrap();
    ///
    /// let mut console = MemoryConsole::new();
    /// Interpreter::new().run(&program, &mut console).unwrap();
    ///
    /// assert_eq!(console.output(), ["6"]);
    /// ```
    #[allow(clippy::cast_possible_wrap)]
    #[allow(clippy::cast_sign_loss)]
    pub fn run(&mut self, program: &[Statement], console: &mut dyn Console) -> EvalResult<()> {
        let len = program.len() as i64;
        let mut pc: i64 = 0;

        while 0 <= pc && pc < len {
            match self.exec(&program[pc as usize], console)? {
                Some(target) => pc = target,
                None => pc += 1,
            }
        }

        Ok(())
    }

    /// Looks up a variable by name.
    ///
    /// If the variable has never been assigned, an `UnboundVariable` error is
    /// returned.
    fn eval_variable(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.get_variable(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UnboundVariable { name: name.to_owned(),
                                                           line })
    }

    /// Retrieves a variable from the environment.
    ///
    /// # Parameters
    /// - `name`: Variable name.
    ///
    /// # Returns
    /// A reference to the value if bound, otherwise `None`.
    ///
    /// # Example
    /// ```
    /// use gotolang::interpreter::{evaluator::core::Interpreter, value::Value};
    ///
    /// let mut interpreter = Interpreter::new();
    /// interpreter.define("x", Value::Integer(5));
    ///
    /// assert_eq!(interpreter.get_variable("x"), Some(&Value::Integer(5)));
    /// assert_eq!(interpreter.get_variable("y"), None);
    /// ```
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<&Value> {
        self.globals.get(name)
    }

    /// Binds a variable in the environment, replacing any previous value.
    ///
    /// # Parameters
    /// - `name`: Variable name.
    /// - `value`: Value to store.
    pub fn define(&mut self, name: &str, value: Value) {
        self.globals.insert(name.to_string(), value);
    }
}

/// Converts one line of external input into a runtime value.
///
/// A line that parses as an integer binds `Integer`; a line that parses as a
/// floating-point number binds `Real`; everything else is kept as raw `Text`.
/// Parsing ignores surrounding whitespace, but a non-numeric line is stored
/// exactly as read.
fn parse_input_line(text: String) -> Value {
    let trimmed = text.trim();
    if let Ok(n) = trimmed.parse::<i64>() {
        Value::Integer(n)
    } else if let Ok(r) = trimmed.parse::<f64>() {
        Value::Real(r)
    } else {
        Value::Text(text)
    }
}
