use log::trace;

use crate::{
    ast::{BlockStatement, Expression, InfixOperator, Node, PrefixOperator, Program, Statement},
    interpreter::value::Value,
};

/// A pending unit of work.
///
/// `Visit` frames expand a node into its children plus a combining frame.
/// The combining frames pop the values their children left on the value
/// stack.
#[derive(Debug, Clone, Copy)]
enum Frame<'a> {
    /// Evaluate a node and leave its value, if any, on the value stack.
    Visit(Node<'a>),
    /// Apply a prefix operator to the top value.
    Prefix { op: PrefixOperator, line: usize },
    /// Apply an infix operator to the two top values.
    Infix { op: InfixOperator, line: usize },
    /// Pop a condition and enter the matching branch.
    Branch {
        consequence: &'a BlockStatement,
        alternative: Option<&'a BlockStatement>,
    },
    /// Pop the top value and halt with it.
    Return,
    /// Drop the value of a `let` initializer.
    Discard,
    /// Reduce everything a block or program pushed above `depth` to its last
    /// value, or `null` if it pushed nothing.
    EndBlock { depth: usize },
}

/// Reduces syntax trees to runtime values.
///
/// Evaluation runs on an explicit work-list of frames and a value stack
/// instead of recursing over the tree, so the depth of a tree does not bound
/// how far evaluation can descend. The parser caps nesting at
/// [`MAX_NESTING_DEPTH`](crate::interpreter::parser::core::MAX_NESTING_DEPTH), which keeps parsed trees cheap to build and drop.
///
/// ## Halting
///
/// Two things stop the machine before the work-list is empty:
/// - a `return` statement, whose value becomes the result of the whole
///   evaluation,
/// - an operation producing [`Value::Error`], which becomes the result.
///
/// ## Usage
///
/// An `Evaluator` may be reused for any number of nodes; each call to
/// [`Evaluator::eval`] starts from empty stacks.
#[derive(Debug, Default)]
pub struct Evaluator<'a> {
    frames: Vec<Frame<'a>>,
    values: Vec<Value>,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator with empty stacks.
    #[must_use]
    pub const fn new() -> Self {
        Self { frames: Vec::new(),
               values: Vec::new() }
    }

    /// Evaluates a program, a statement or an expression.
    ///
    /// Literals evaluate to their values. Identifiers, function literals and
    /// calls evaluate to `null`. A block or program evaluates to the value of
    /// its last value-producing statement; `let` statements produce none.
    ///
    /// # Parameters
    /// - `node`: The node to evaluate. Anything convertible into a [`Node`].
    ///
    /// # Returns
    /// The resulting value. Runtime errors are returned as [`Value::Error`].
    ///
    /// # Example
    /// ```
    /// use monkey::{
    ///     interpreter::{evaluator::core::Evaluator, value::Value},
    ///     parse,
    /// };
    ///
    /// let (program, errors) = parse("if (10 > 1) { if (10 > 1) { return 10; } return 1; }");
    /// assert!(errors.is_empty());
    ///
    /// let mut evaluator = Evaluator::new();
    /// assert_eq!(evaluator.eval(&program), Value::Integer(10));
    /// ```
    pub fn eval(&mut self, node: impl Into<Node<'a>>) -> Value {
        self.frames.clear();
        self.values.clear();
        self.frames.push(Frame::Visit(node.into()));

        while let Some(frame) = self.frames.pop() {
            match frame {
                Frame::Visit(Node::Program(program)) => self.enter_program(program),
                Frame::Visit(Node::Statement(statement)) => self.enter_statement(statement),
                Frame::Visit(Node::Expression(expression)) => self.enter_expression(expression),
                Frame::Prefix { op, line } => {
                    let right = self.pop();
                    self.push(Self::eval_prefix(op, &right, line));
                },
                Frame::Infix { op, line } => {
                    let right = self.pop();
                    let left = self.pop();
                    self.push(Self::eval_infix(op, &left, &right, line));
                },
                Frame::Branch { consequence,
                                alternative, } => {
                    let condition = self.pop();
                    if condition.is_truthy() {
                        self.enter_block(consequence);
                    } else if let Some(alternative) = alternative {
                        self.enter_block(alternative);
                    } else {
                        self.values.push(Value::Null);
                    }
                },
                Frame::Return => {
                    let value = self.pop();
                    trace!("return with {value}");
                    self.halt(value);
                },
                Frame::Discard => {
                    self.pop();
                },
                Frame::EndBlock { depth } => {
                    let last = if self.values.len() > depth { self.pop() } else { Value::Null };
                    self.values.truncate(depth);
                    self.values.push(last);
                },
            }
        }

        self.values.pop().unwrap_or(Value::Null)
    }

    fn enter_program(&mut self, program: &'a Program) {
        self.frames.push(Frame::EndBlock { depth: self.values.len() });
        self.push_statements(&program.statements);
    }

    fn enter_block(&mut self, block: &'a BlockStatement) {
        self.frames.push(Frame::EndBlock { depth: self.values.len() });
        self.push_statements(&block.statements);
    }

    /// Schedules statements so that the first one runs first.
    fn push_statements(&mut self, statements: &'a [Statement]) {
        self.frames.extend(statements.iter().rev().map(|s| Frame::Visit(Node::Statement(s))));
    }

    fn enter_statement(&mut self, statement: &'a Statement) {
        match statement {
            Statement::Let { value, .. } => {
                self.frames.push(Frame::Discard);
                self.frames.push(Frame::Visit(Node::Expression(value)));
            },
            Statement::Return { value, .. } => {
                self.frames.push(Frame::Return);
                self.frames.push(Frame::Visit(Node::Expression(value)));
            },
            Statement::Expression { expr, .. } => {
                self.frames.push(Frame::Visit(Node::Expression(expr)));
            },
            Statement::Block(block) => self.enter_block(block),
        }
    }

    fn enter_expression(&mut self, expression: &'a Expression) {
        match expression {
            Expression::IntegerLiteral { value, .. } => self.values.push(Value::Integer(*value)),
            Expression::BooleanLiteral { value, .. } => self.values.push(Value::Boolean(*value)),
            Expression::Identifier { .. } | Expression::FunctionLiteral { .. } | Expression::Call { .. } => {
                self.values.push(Value::Null);
            },
            Expression::Prefix { op, right, line } => {
                self.frames.push(Frame::Prefix { op: *op, line: *line });
                self.frames.push(Frame::Visit(Node::Expression(right)));
            },
            Expression::Infix { left,
                                op,
                                right,
                                line, } => {
                self.frames.push(Frame::Infix { op: *op, line: *line });
                self.frames.push(Frame::Visit(Node::Expression(right)));
                self.frames.push(Frame::Visit(Node::Expression(left)));
            },
            Expression::If { condition,
                             consequence,
                             alternative,
                             .. } => {
                self.frames.push(Frame::Branch { consequence,
                                                 alternative: alternative.as_ref() });
                self.frames.push(Frame::Visit(Node::Expression(condition)));
            },
        }
    }

    /// Pushes the result of an operation, halting on errors.
    fn push(&mut self, value: Value) {
        if value.is_error() {
            trace!("halting with {value}");
            self.halt(value);
        } else {
            self.values.push(value);
        }
    }

    /// Every combining frame runs after its children pushed a value, so an
    /// empty stack only arises from a malformed frame sequence.
    fn pop(&mut self) -> Value {
        debug_assert!(!self.values.is_empty(), "combining frame ran on an empty value stack");
        self.values.pop().unwrap_or(Value::Null)
    }

    /// Abandons all pending work and makes `value` the final result.
    fn halt(&mut self, value: Value) {
        self.frames.clear();
        self.values.clear();
        self.values.push(value);
    }
}
