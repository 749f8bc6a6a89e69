/// Represents a literal value in the language.
///
/// `LiteralValue` covers the raw, constant values that can appear directly in
/// source code: integer and real numbers, and double-quoted text. A numeric
/// literal is tagged `Real` exactly when the source spelling contains a
/// decimal point.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Real(f64),
    /// A text literal, stored without its surrounding quotes.
    Text(String),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` covers every expression form of the language: literals, variable
/// references, and unary and binary operations. Each variant carries the
/// source line it was parsed from for error reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number or text).
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name, resolved at evaluation time.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A unary operation (e.g. negation).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use gotolang::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Variable { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::BinaryOp { line, .. } => *line,
        }
    }
}

/// Represents a top-level statement.
///
/// One statement is parsed per `;`-terminated form, and the parsed program is
/// the ordered sequence of statements. A statement's position in that
/// sequence is its jump index: `Goto` targets address statements by position,
/// not by source line.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A variable assignment binding a name to an expression.
    Assignment {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// An `INPUT` statement reading one external line into a variable.
    Input {
        /// The name of the variable receiving the value.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// An `OUTPUT` statement emitting the value of an expression.
    Output {
        /// The expression to evaluate and emit.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// A `GOTO` statement transferring control to a computed statement index.
    Goto {
        /// The expression whose numeric value becomes the next index.
        target: Expr,
        /// Line number in the source code.
        line:   usize,
    },
    /// An empty statement (a bare `;`), which only advances the program
    /// counter.
    NoOp,
}

/// Represents a binary operator.
///
/// Only the arithmetic subset (`+ - * / % ^`) carries evaluation semantics;
/// the relational, equality and logical operators are tokenized and parsed
/// into `BinaryOp` nodes so that future statement forms remain parseable, but
/// evaluating them is a runtime error.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Exponentiation (`^`)
    Pow,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Logical and (`&&`)
    And,
    /// Logical or (`||`)
    Or,
}

impl BinaryOperator {
    /// Returns `true` when the operator has evaluation semantics.
    ///
    /// ## Example
    /// ```
    /// use gotolang::ast::BinaryOperator;
    ///
    /// assert!(BinaryOperator::Pow.is_arithmetic());
    /// assert!(!BinaryOperator::Less.is_arithmetic());
    /// ```
    #[must_use]
    pub const fn is_arithmetic(self) -> bool {
        matches!(self,
                 Self::Add | Self::Sub | Self::Mul | Self::Div | Self::Mod | Self::Pow)
    }
}

/// Represents a unary operator.
///
/// `Plus` and `Negate` are evaluated arithmetically; `Not` is parseable but
/// reserved, and evaluating it is a runtime error.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Numeric identity (e.g. `+x`).
    Plus,
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `!x`).
    Not,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or,
            Pow, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Pow => "^",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
            And => "&&",
            Or => "||",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Negate => "-",
            Self::Not => "!",
        };
        write!(f, "{operator}")
    }
}
