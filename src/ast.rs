use std::fmt::{self, Display, Formatter};

use crate::interpreter::token::TokenKind;

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every node exclusively owns its children; the tree has no sharing and no
/// cycles. Each variant records the source line it started on.
///
/// The `Display` implementation produces the canonical rendering used by tests
/// and printers: prefix and infix expressions are fully parenthesized, so the
/// rendering makes the parsed precedence explicit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// Reference to a name, e.g. `foobar`.
    Identifier {
        /// The identifier text.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// An integer literal, e.g. `5`.
    IntegerLiteral {
        /// The literal value.
        value: i64,
        /// Line number in the source code.
        line:  usize,
    },
    /// `true` or `false`.
    BooleanLiteral {
        /// The literal value.
        value: bool,
        /// Line number in the source code.
        line:  usize,
    },
    /// A prefix operation such as `!x` or `-5`.
    Prefix {
        /// The operator.
        op:    PrefixOperator,
        /// The operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A binary operation such as `a + b`.
    Infix {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    InfixOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `if (condition) { consequence } else { alternative }`.
    If {
        /// The condition expression.
        condition:   Box<Self>,
        /// Block evaluated when the condition is truthy.
        consequence: BlockStatement,
        /// Optional block evaluated otherwise.
        alternative: Option<BlockStatement>,
        /// Line number in the source code.
        line:        usize,
    },
    /// `fn(a, b) { body }`.
    FunctionLiteral {
        /// Parameter names.
        parameters: Vec<String>,
        /// The function body.
        body:       BlockStatement,
        /// Line number in the source code.
        line:       usize,
    },
    /// `callee(arg1, arg2)`.
    Call {
        /// The expression being called.
        function:  Box<Self>,
        /// Arguments to the call.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
}

impl Expression {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use monkey::ast::Expression;
    ///
    /// let expr = Expression::Identifier { name: "x".to_string(),
    ///                                     line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Identifier { line, .. }
            | Self::IntegerLiteral { line, .. }
            | Self::BooleanLiteral { line, .. }
            | Self::Prefix { line, .. }
            | Self::Infix { line, .. }
            | Self::If { line, .. }
            | Self::FunctionLiteral { line, .. }
            | Self::Call { line, .. } => *line,
        }
    }
}

/// A sequence of statements delimited by braces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockStatement {
    /// Statements inside the block, in source order.
    pub statements: Vec<Statement>,
    /// Line number of the opening brace.
    pub line:       usize,
}

/// Represents a statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `let <name> = <value>;`
    Let {
        /// The bound name.
        name:  String,
        /// The initializer.
        value: Expression,
        /// Line number in the source code.
        line:  usize,
    },
    /// `return <value>;`
    Return {
        /// The returned expression.
        value: Expression,
        /// Line number in the source code.
        line:  usize,
    },
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr: Expression,
        /// Line number in the source code.
        line: usize,
    },
    /// A standalone `{ ... }` block.
    Block(BlockStatement),
}

/// The root of the tree: every top-level statement, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    /// Top-level statements.
    pub statements: Vec<Statement>,
}

/// Represents a prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrefixOperator {
    /// Logical NOT (`!x`).
    Not,
    /// Arithmetic negation (`-x`).
    Negate,
}

impl PrefixOperator {
    /// Maps a token type to its prefix operator, if it is one.
    #[must_use]
    pub const fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Bang => Some(Self::Not),
            TokenKind::Minus => Some(Self::Negate),
            _ => None,
        }
    }
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic and comparisons.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InfixOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

impl InfixOperator {
    /// Maps a token type to its binary operator.
    ///
    /// # Example
    /// ```
    /// use monkey::{ast::InfixOperator, interpreter::token::TokenKind};
    ///
    /// assert_eq!(InfixOperator::from_token(TokenKind::Plus),
    ///            Some(InfixOperator::Add));
    /// assert_eq!(InfixOperator::from_token(TokenKind::Comma), None);
    /// ```
    #[must_use]
    pub const fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(Self::Add),
            TokenKind::Minus => Some(Self::Sub),
            TokenKind::Asterisk => Some(Self::Mul),
            TokenKind::Slash => Some(Self::Div),
            TokenKind::Lt => Some(Self::Less),
            TokenKind::Gt => Some(Self::Greater),
            TokenKind::Eq => Some(Self::Equal),
            TokenKind::NotEq => Some(Self::NotEqual),
            _ => None,
        }
    }

    /// Returns `true` for `==` and `!=`, the only operators defined on booleans.
    #[must_use]
    pub const fn is_equality(self) -> bool {
        matches!(self, Self::Equal | Self::NotEqual)
    }
}

/// A borrowed reference to any evaluable part of the tree.
///
/// This is the input type of the evaluator, so a whole program, a single
/// statement or a bare expression can all be reduced to a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node<'a> {
    /// A whole program.
    Program(&'a Program),
    /// A single statement.
    Statement(&'a Statement),
    /// A single expression.
    Expression(&'a Expression),
}

impl<'a> From<&'a Program> for Node<'a> {
    fn from(program: &'a Program) -> Self {
        Self::Program(program)
    }
}

impl<'a> From<&'a Statement> for Node<'a> {
    fn from(statement: &'a Statement) -> Self {
        Self::Statement(statement)
    }
}

impl<'a> From<&'a Expression> for Node<'a> {
    fn from(expression: &'a Expression) -> Self {
        Self::Expression(expression)
    }
}

/// Writes `items` separated by `", "`.
fn write_comma_separated<T: Display>(f: &mut Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier { name, .. } => write!(f, "{name}"),
            Self::IntegerLiteral { value, .. } => write!(f, "{value}"),
            Self::BooleanLiteral { value, .. } => write!(f, "{value}"),
            Self::Prefix { op, right, .. } => write!(f, "({op}{right})"),
            Self::Infix { left, op, right, .. } => write!(f, "({left} {op} {right})"),
            Self::If { condition,
                       consequence,
                       alternative,
                       .. } => {
                write!(f, "if {condition} {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, " else {alternative}")?;
                }
                Ok(())
            },
            Self::FunctionLiteral { parameters, body, .. } => {
                write!(f, "fn(")?;
                write_comma_separated(f, parameters)?;
                write!(f, ") {body}")
            },
            Self::Call { function, arguments, .. } => {
                write!(f, "{function}(")?;
                write_comma_separated(f, arguments)?;
                write!(f, ")")
            },
        }
    }
}

impl Display for BlockStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{ ")?;
        for statement in &self.statements {
            write!(f, "{statement} ")?;
        }
        write!(f, "}}")
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { name, value, .. } => write!(f, "let {name} = {value};"),
            Self::Return { value, .. } => write!(f, "return {value};"),
            Self::Expression { expr, .. } => write!(f, "{expr}"),
            Self::Block(block) => write!(f, "{block}"),
        }
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            writeln!(f, "{statement}")?;
        }
        Ok(())
    }
}

impl Display for Node<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Program(program) => program.fmt(f),
            Self::Statement(statement) => statement.fmt(f),
            Self::Expression(expression) => expression.fmt(f),
        }
    }
}

impl Display for PrefixOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Not => "!",
            Self::Negate => "-",
        };
        write!(f, "{operator}")
    }
}

impl Display for InfixOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        use InfixOperator::{Add, Div, Equal, Greater, Less, Mul, NotEqual, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Less => "<",
            Greater => ">",
            Equal => "==",
            NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}
