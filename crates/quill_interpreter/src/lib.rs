//! quill_interpreter: a tree-walking evaluator for quill programs.
//!
//! Values are 64-bit integers. Variables live in a scope stack: the
//! bottom scope holds globals, and every function call pushes a fresh
//! scope, so `:=` inside a function shadows rather than overwrites.
//! `print` writes to an injected sink, which keeps execution testable
//! and lets the driver decide where program output goes.

use lasso::{Rodeo, Spur};
use quill_ast::{Block, Expr, Program, Stmt};
use quill_diagnostics::RuntimeError;
use rustc_hash::FxHashMap;
use std::io::{self, Write};

/// Maximum function call depth before execution is aborted.
pub const MAX_CALL_DEPTH: usize = 256;

/// Executes a parsed program.
pub struct Interpreter<'a, W: Write> {
    interner: &'a Rodeo,
    /// Innermost scope last; the bottom scope holds globals.
    scopes: Vec<FxHashMap<Spur, i64>>,
    /// Function bodies by name. Definitions execute in program order,
    /// so a call only sees functions defined before it ran.
    functions: FxHashMap<Spur, Block<'a>>,
    call_depth: usize,
    out: W,
}

impl<'a> Interpreter<'a, io::Stdout> {
    /// An interpreter that prints to stdout.
    pub fn new(interner: &'a Rodeo) -> Self {
        Self::with_output(interner, io::stdout())
    }
}

impl<'a, W: Write> Interpreter<'a, W> {
    /// An interpreter that prints to `out`.
    pub fn with_output(interner: &'a Rodeo, out: W) -> Self {
        Self {
            interner,
            scopes: vec![FxHashMap::default()],
            functions: FxHashMap::default(),
            call_depth: 0,
            out,
        }
    }

    /// Execute the program's statements from top to bottom.
    pub fn run(&mut self, program: &Program<'a>) -> Result<(), RuntimeError> {
        tracing::debug!(statements = program.statements.len(), "executing program");
        self.exec_block(program.statements)
    }

    /// Consume the interpreter, returning the output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    // ========================================================================
    // Statements
    // ========================================================================

    fn exec_block(&mut self, block: Block<'a>) -> Result<(), RuntimeError> {
        for stmt in block {
            self.exec_statement(stmt)?;
        }
        Ok(())
    }

    fn exec_statement(&mut self, stmt: &Stmt<'a>) -> Result<(), RuntimeError> {
        match *stmt {
            Stmt::Declaration { name, value, .. } => {
                let value = self.eval(&value)?;
                self.declare(name, value);
                Ok(())
            }
            Stmt::Print { value, .. } => {
                let value = self.eval(&value)?;
                writeln!(self.out, "{value}")?;
                Ok(())
            }
            Stmt::Function { name, body, .. } => {
                self.functions.insert(name, body);
                Ok(())
            }
            Stmt::Call { name, line } => self.call(name, line),
        }
    }

    fn call(&mut self, name: Spur, line: usize) -> Result<(), RuntimeError> {
        let body = match self.functions.get(&name) {
            Some(body) => *body,
            None => {
                return Err(RuntimeError::UndefinedFunction {
                    name: self.resolve(name),
                    line,
                })
            }
        };
        if self.call_depth >= MAX_CALL_DEPTH {
            return Err(RuntimeError::CallDepthExceeded {
                limit: MAX_CALL_DEPTH,
                line,
            });
        }
        self.call_depth += 1;
        self.scopes.push(FxHashMap::default());
        let result = self.exec_block(body);
        self.scopes.pop();
        self.call_depth -= 1;
        result
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    fn eval(&mut self, expr: &Expr<'a>) -> Result<i64, RuntimeError> {
        match *expr {
            Expr::Number { value } => Ok(value),
            Expr::Variable { name, line } => self.lookup(name, line),
            Expr::Add { .. } => self.eval_add_chain(expr),
        }
    }

    /// Left-associative `+` chains nest through the left operand. Walk
    /// that spine iteratively so chain length does not become recursion
    /// depth; only parenthesized operands recurse, and the parser bounds
    /// those.
    fn eval_add_chain(&mut self, expr: &Expr<'a>) -> Result<i64, RuntimeError> {
        let mut rights = Vec::new();
        let mut current = expr;
        while let Expr::Add { lhs, rhs, line } = *current {
            rights.push((rhs, line));
            current = lhs;
        }
        let mut total = self.eval(current)?;
        while let Some((rhs, line)) = rights.pop() {
            let rhs = self.eval(rhs)?;
            total = total
                .checked_add(rhs)
                .ok_or(RuntimeError::IntegerOverflow { line })?;
        }
        Ok(total)
    }

    // ========================================================================
    // Environment
    // ========================================================================

    /// Bind in the innermost scope, shadowing any outer binding.
    fn declare(&mut self, name: Spur, value: i64) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name, value);
        }
    }

    /// Walk the scope stack innermost-out.
    fn lookup(&self, name: Spur, line: usize) -> Result<i64, RuntimeError> {
        for scope in self.scopes.iter().rev() {
            if let Some(&value) = scope.get(&name) {
                return Ok(value);
            }
        }
        Err(RuntimeError::UndefinedVariable {
            name: self.resolve(name),
            line,
        })
    }

    fn resolve(&self, name: Spur) -> String {
        self.interner.resolve(&name).to_string()
    }
}
