//! Static resolution pass.
//!
//! One depth-first walk over the AST that computes, for every variable
//! reference and assignment target, the lexical distance to its binding,
//! and detects a closed set of static errors:
//!
//! - duplicate declaration in one scope
//! - reading a variable inside its own initializer
//! - `return` outside a function
//! - `break` / `continue` outside a loop
//!
//! The pass never aborts: errors go to the diagnostic queue and traversal
//! continues so several errors surface in one run. Whether to interpret
//! after errors is the host's decision.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::trace;

use ember_diagnostic::{Diagnostic, DiagnosticQueue};
use ember_ir::{ExprArena, ExprId, ExprKind, Module, Name, Span, StmtId, StmtKind, StringInterner};

/// The resolver's output: reference node → lexical distance.
///
/// Distance counts enclosing-scope hops from the reference's frame to the
/// binding's frame (0 = innermost). A reference absent from the map takes
/// the global path at evaluation time: that is not an error.
#[derive(Clone, Debug, Default)]
pub struct ResolvedLocals {
    map: FxHashMap<ExprId, u32>,
}

impl ResolvedLocals {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a reference's distance.
    pub(crate) fn insert(&mut self, id: ExprId, distance: u32) {
        self.map.insert(id, distance);
    }

    /// The recorded distance for a reference, if any.
    #[inline]
    pub fn distance(&self, id: ExprId) -> Option<u32> {
        self.map.get(&id).copied()
    }

    /// Number of resolved references.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if no references were resolved.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Merge another map in (the REPL accumulates one map across lines).
    pub fn extend(&mut self, other: ResolvedLocals) {
        self.map.extend(other.map);
    }
}

/// Declaration state of a name within a scope frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum VarState {
    /// Declared but its initializer has not finished resolving.
    Declared,
    /// Fully defined; reads are legal.
    Defined,
}

/// Whether the walker is inside a function body.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum FunctionKind {
    None,
    Function,
}

/// Whether the walker is inside a loop body.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum LoopKind {
    None,
    Loop,
}

/// Static resolver.
pub struct Resolver<'a> {
    interner: &'a StringInterner,
    arena: &'a ExprArena,
    queue: &'a mut DiagnosticQueue,
    /// Lexical scope stack; empty means the walker is at global scope.
    scopes: Vec<FxHashMap<Name, VarState>>,
    current_function: FunctionKind,
    current_loop: LoopKind,
    /// Global names defined earlier (by this pass or seeded by the host),
    /// used to tell re-binding from self-reference at global scope.
    known_globals: FxHashSet<Name>,
    /// Global name whose initializer is currently resolving.
    global_declaring: Option<Name>,
    locals: ResolvedLocals,
}

impl<'a> Resolver<'a> {
    pub fn new(
        interner: &'a StringInterner,
        arena: &'a ExprArena,
        queue: &'a mut DiagnosticQueue,
    ) -> Self {
        Resolver {
            interner,
            arena,
            queue,
            scopes: Vec::new(),
            current_function: FunctionKind::None,
            current_loop: LoopKind::None,
            known_globals: FxHashSet::default(),
            global_declaring: None,
            locals: ResolvedLocals::new(),
        }
    }

    /// Seed a global name the host has already defined (natives, bindings
    /// from earlier REPL lines), so re-binding it is not mistaken for a
    /// self-referential initializer.
    pub fn add_known_global(&mut self, name: Name) {
        self.known_globals.insert(name);
    }

    /// Resolve a whole module, consuming the resolver.
    pub fn resolve(mut self, module: &Module) -> ResolvedLocals {
        for &stmt in &module.stmts {
            self.resolve_stmt(stmt);
        }
        self.locals
    }

    fn error(&mut self, span: Span, message: String) {
        self.queue.add(Diagnostic::error(message).with_span(span));
    }

    // ---- scopes ----

    fn begin_scope(&mut self) {
        trace!(depth = self.scopes.len() + 1, "begin scope");
        self.scopes.push(FxHashMap::default());
    }

    fn end_scope(&mut self) {
        self.scopes.pop();
        trace!(depth = self.scopes.len(), "end scope");
    }

    /// Mark a name declared-but-not-yet-defined in the innermost frame.
    ///
    /// No-op at global scope: the global frame supports re-declaration.
    fn declare(&mut self, name: Name, span: Span) {
        if self.scopes.is_empty() {
            return;
        }
        let duplicate = self
            .scopes
            .last()
            .is_some_and(|scope| scope.contains_key(&name));
        if duplicate {
            let message = format!(
                "already a variable named '{}' in this scope",
                self.interner.lookup(name)
            );
            self.error(span, message);
        }
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name, VarState::Declared);
        }
    }

    /// Flip a name to defined in the innermost frame.
    fn define(&mut self, name: Name) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name, VarState::Defined);
        }
    }

    /// Record the distance from the innermost frame to the binding frame.
    ///
    /// No frame contains the name ⇒ leave unresolved (global path).
    fn resolve_local(&mut self, id: ExprId, name: Name) {
        for (distance, scope) in self.scopes.iter().rev().enumerate() {
            if scope.contains_key(&name) {
                let distance = u32::try_from(distance).unwrap_or(u32::MAX);
                self.locals.insert(id, distance);
                return;
            }
        }
    }

    // ---- statements ----

    fn resolve_stmt(&mut self, id: StmtId) {
        let arena = self.arena;
        match *arena.stmt(id) {
            StmtKind::Expr(expr) | StmtKind::Print(expr) => self.resolve_expr(expr),

            StmtKind::Var { name, init } => {
                let span = arena.stmt_span(id);
                self.declare(name, span);

                let at_global = self.scopes.is_empty();
                let watch_self_reference = at_global && !self.known_globals.contains(&name);
                if watch_self_reference {
                    self.global_declaring = Some(name);
                }
                if init.is_present() {
                    self.resolve_expr(init);
                }
                if watch_self_reference {
                    self.global_declaring = None;
                }

                self.define(name);
                if at_global {
                    self.known_globals.insert(name);
                }
            }

            StmtKind::Block(range) => {
                self.begin_scope();
                for &stmt in arena.stmts_in(range) {
                    self.resolve_stmt(stmt);
                }
                self.end_scope();
            }

            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                self.resolve_expr(cond);
                self.resolve_stmt(then_branch);
                if else_branch.is_present() {
                    self.resolve_stmt(else_branch);
                }
            }

            StmtKind::While { cond, body } => {
                let enclosing = self.current_loop;
                self.current_loop = LoopKind::Loop;
                self.resolve_expr(cond);
                self.resolve_stmt(body);
                self.current_loop = enclosing;
            }

            StmtKind::Break => {
                if self.current_loop == LoopKind::None {
                    self.error(arena.stmt_span(id), "'break' outside loop".to_string());
                }
            }

            StmtKind::Continue => {
                if self.current_loop == LoopKind::None {
                    self.error(arena.stmt_span(id), "'continue' outside loop".to_string());
                }
            }

            StmtKind::Function { name, params, body } => {
                // Defined before the body resolves, so the function can
                // call itself by name.
                self.declare(name, arena.stmt_span(id));
                self.define(name);
                if self.scopes.is_empty() {
                    self.known_globals.insert(name);
                }
                self.resolve_function(id, params, body);
            }

            StmtKind::Return { value } => {
                if self.current_function == FunctionKind::None {
                    self.error(
                        arena.stmt_span(id),
                        "can't return from top-level code".to_string(),
                    );
                }
                if value.is_present() {
                    self.resolve_expr(value);
                }
            }
        }
    }

    /// Resolve a function body under fresh function/loop markers.
    ///
    /// The loop marker resets: `break` inside a function is an error even
    /// when the declaration sits inside a loop.
    fn resolve_function(&mut self, id: StmtId, params: ember_ir::ParamRange, body: ember_ir::StmtRange) {
        let arena = self.arena;
        let enclosing_function = self.current_function;
        let enclosing_loop = self.current_loop;
        self.current_function = FunctionKind::Function;
        self.current_loop = LoopKind::None;

        self.begin_scope();
        let span = arena.stmt_span(id);
        for &param in arena.params(params) {
            self.declare(param, span);
            self.define(param);
        }
        for &stmt in arena.stmts_in(body) {
            self.resolve_stmt(stmt);
        }
        self.end_scope();

        self.current_function = enclosing_function;
        self.current_loop = enclosing_loop;
    }

    // ---- expressions ----

    fn resolve_expr(&mut self, id: ExprId) {
        let arena = self.arena;
        match *arena.expr(id) {
            ExprKind::Nil | ExprKind::Bool(_) | ExprKind::Number(_) | ExprKind::Str(_) => {}

            ExprKind::Grouping(inner) => self.resolve_expr(inner),

            ExprKind::Unary { operand, .. } => self.resolve_expr(operand),

            ExprKind::Binary { left, right, .. } | ExprKind::Logical { left, right, .. } => {
                self.resolve_expr(left);
                self.resolve_expr(right);
            }

            ExprKind::Ternary {
                cond,
                then_branch,
                else_branch,
            } => {
                self.resolve_expr(cond);
                self.resolve_expr(then_branch);
                self.resolve_expr(else_branch);
            }

            ExprKind::Variable(name) => {
                let in_own_initializer = match self.scopes.last() {
                    Some(scope) => scope.get(&name) == Some(&VarState::Declared),
                    None => self.global_declaring == Some(name),
                };
                if in_own_initializer {
                    let message = format!(
                        "can't read local variable '{}' in its own initializer",
                        self.interner.lookup(name)
                    );
                    self.error(arena.expr_span(id), message);
                }
                self.resolve_local(id, name);
            }

            ExprKind::Assign { name, value } => {
                self.resolve_expr(value);
                self.resolve_local(id, name);
            }

            ExprKind::Call { callee, args } => {
                self.resolve_expr(callee);
                for &arg in arena.exprs_in(args) {
                    self.resolve_expr(arg);
                }
            }
        }
    }
}
