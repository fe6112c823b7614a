//! Grammar: declarations and statements.
//!
//! ```text
//! program     → declaration* EOF
//! declaration → funDecl | varDecl | statement
//! statement   → exprStmt | printStmt | block | ifStmt | whileStmt
//!             | forStmt | returnStmt | breakStmt | continueStmt
//! ```
//!
//! `for` has no AST node: it desugars here into `while` plus blocks, with
//! the initializer in an enclosing block and the increment appended to the
//! body block.

mod expr;

use ember_diagnostic::{Diagnostic, DiagnosticQueue};
use ember_ir::{
    ExprArena, ExprId, ExprKind, Module, Name, Span, StmtId, StmtKind, Token, TokenKind, TokenList,
};
use smallvec::SmallVec;
use tracing::trace;

use crate::cursor::Cursor;
use crate::error::{ParseError, ParseResult};

/// Maximum parameters or call arguments.
pub(crate) const MAX_ARITY: usize = 255;

pub(crate) struct Parser<'a> {
    pub(crate) cursor: Cursor<'a>,
    pub(crate) arena: &'a mut ExprArena,
    queue: &'a mut DiagnosticQueue,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(
        tokens: &'a TokenList,
        arena: &'a mut ExprArena,
        queue: &'a mut DiagnosticQueue,
    ) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            arena,
            queue,
        }
    }

    /// Parse the whole token stream into a module.
    pub(crate) fn parse_module(&mut self) -> Module {
        let mut stmts = Vec::new();
        while !self.cursor.is_at_end() {
            if let Some(stmt) = self.declaration() {
                stmts.push(stmt);
            }
        }
        Module::new(stmts)
    }

    // ---- error reporting ----

    /// Report an error at the current token and return the recovery marker.
    pub(crate) fn error_at_current(&mut self, message: &str) -> ParseError {
        let span = self.cursor.current_span();
        self.queue.add(Diagnostic::error(message).with_span(span));
        ParseError
    }

    /// Report an error at an explicit span without failing the production.
    ///
    /// Used for recoverable mistakes (too many arguments, invalid
    /// assignment target) where the original parse can continue.
    pub(crate) fn report_at(&mut self, span: Span, message: &str) {
        self.queue.add(Diagnostic::error(message).with_span(span));
    }

    /// Consume a token of `kind` or report `message` and fail.
    pub(crate) fn consume(&mut self, kind: TokenKind, message: &str) -> ParseResult<Token> {
        if self.cursor.check(kind) {
            Ok(self.cursor.advance())
        } else {
            Err(self.error_at_current(message))
        }
    }

    /// Consume an identifier or report `message` and fail.
    pub(crate) fn consume_ident(&mut self, message: &str) -> ParseResult<(Name, Span)> {
        match self.cursor.current_kind() {
            TokenKind::Ident(name) => {
                let span = self.cursor.current_span();
                self.cursor.advance();
                Ok((name, span))
            }
            _ => Err(self.error_at_current(message)),
        }
    }

    /// Skip tokens until a likely statement boundary.
    fn synchronize(&mut self) {
        self.cursor.advance();
        while !self.cursor.is_at_end() {
            if self.cursor.previous_kind() == TokenKind::Semicolon {
                return;
            }
            match self.cursor.current_kind() {
                TokenKind::Class
                | TokenKind::Fun
                | TokenKind::Var
                | TokenKind::For
                | TokenKind::If
                | TokenKind::While
                | TokenKind::Print
                | TokenKind::Return => return,
                _ => {
                    self.cursor.advance();
                }
            }
        }
    }

    // ---- declarations ----

    /// Parse one declaration, recovering to the next statement boundary on
    /// error. Returns `None` when the declaration failed to parse.
    fn declaration(&mut self) -> Option<StmtId> {
        trace!(pos = self.cursor.position(), "parse declaration");
        let result = if self.cursor.match_kind(TokenKind::Fun) {
            self.fun_declaration()
        } else if self.cursor.match_kind(TokenKind::Var) {
            self.var_declaration()
        } else {
            self.statement()
        };
        match result {
            Ok(stmt) => Some(stmt),
            Err(ParseError) => {
                self.synchronize();
                None
            }
        }
    }

    /// `fun` already consumed.
    fn fun_declaration(&mut self) -> ParseResult<StmtId> {
        let start = self.cursor.previous_span();
        let (name, _) = self.consume_ident("expect function name")?;

        self.consume(TokenKind::LParen, "expect '(' after function name")?;
        let mut params: SmallVec<[Name; 8]> = SmallVec::new();
        if !self.cursor.check(TokenKind::RParen) {
            loop {
                if params.len() >= MAX_ARITY {
                    let span = self.cursor.current_span();
                    self.report_at(span, "can't have more than 255 parameters");
                }
                let (param, _) = self.consume_ident("expect parameter name")?;
                params.push(param);
                if !self.cursor.match_kind(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.consume(TokenKind::RParen, "expect ')' after parameters")?;

        self.consume(TokenKind::LBrace, "expect '{' before function body")?;
        let body = self.block()?;

        let params = self.arena.push_params(&params);
        let span = start.merge(self.cursor.previous_span());
        Ok(self
            .arena
            .push_stmt(StmtKind::Function { name, params, body }, span))
    }

    /// `var` already consumed.
    fn var_declaration(&mut self) -> ParseResult<StmtId> {
        let start = self.cursor.previous_span();
        let (name, _) = self.consume_ident("expect variable name")?;

        let init = if self.cursor.match_kind(TokenKind::Equal) {
            self.expression()?
        } else {
            ExprId::INVALID
        };

        self.consume(
            TokenKind::Semicolon,
            "expect ';' after variable declaration",
        )?;
        let span = start.merge(self.cursor.previous_span());
        Ok(self.arena.push_stmt(StmtKind::Var { name, init }, span))
    }

    // ---- statements ----

    fn statement(&mut self) -> ParseResult<StmtId> {
        if self.cursor.match_kind(TokenKind::If) {
            return self.if_statement();
        }
        if self.cursor.match_kind(TokenKind::While) {
            return self.while_statement();
        }
        if self.cursor.match_kind(TokenKind::For) {
            return self.for_statement();
        }
        if self.cursor.match_kind(TokenKind::Print) {
            return self.print_statement();
        }
        if self.cursor.match_kind(TokenKind::Return) {
            return self.return_statement();
        }
        if self.cursor.match_kind(TokenKind::Break) {
            return self.break_statement();
        }
        if self.cursor.match_kind(TokenKind::Continue) {
            return self.continue_statement();
        }
        if self.cursor.match_kind(TokenKind::LBrace) {
            let start = self.cursor.previous_span();
            let range = self.block()?;
            let span = start.merge(self.cursor.previous_span());
            return Ok(self.arena.push_stmt(StmtKind::Block(range), span));
        }
        self.expression_statement()
    }

    /// Statements up to and including the closing `}`.
    ///
    /// The opening `{` is already consumed.
    fn block(&mut self) -> ParseResult<ember_ir::StmtRange> {
        let mut stmts: SmallVec<[StmtId; 16]> = SmallVec::new();
        while !self.cursor.check(TokenKind::RBrace) && !self.cursor.is_at_end() {
            if let Some(stmt) = self.declaration() {
                stmts.push(stmt);
            }
        }
        self.consume(TokenKind::RBrace, "expect '}' after block")?;
        Ok(self.arena.push_stmt_list(&stmts))
    }

    fn if_statement(&mut self) -> ParseResult<StmtId> {
        let start = self.cursor.previous_span();
        self.consume(TokenKind::LParen, "expect '(' after 'if'")?;
        let cond = self.expression()?;
        self.consume(TokenKind::RParen, "expect ')' after if condition")?;

        let then_branch = self.statement()?;
        let else_branch = if self.cursor.match_kind(TokenKind::Else) {
            self.statement()?
        } else {
            StmtId::INVALID
        };

        let span = start.merge(self.cursor.previous_span());
        Ok(self.arena.push_stmt(
            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            },
            span,
        ))
    }

    fn while_statement(&mut self) -> ParseResult<StmtId> {
        let start = self.cursor.previous_span();
        self.consume(TokenKind::LParen, "expect '(' after 'while'")?;
        let cond = self.expression()?;
        self.consume(TokenKind::RParen, "expect ')' after condition")?;
        let body = self.statement()?;
        let span = start.merge(self.cursor.previous_span());
        Ok(self.arena.push_stmt(StmtKind::While { cond, body }, span))
    }

    /// Desugars into `{ init; while (cond) { body; increment; } }`.
    fn for_statement(&mut self) -> ParseResult<StmtId> {
        let start = self.cursor.previous_span();
        self.consume(TokenKind::LParen, "expect '(' after 'for'")?;

        let initializer = if self.cursor.match_kind(TokenKind::Semicolon) {
            None
        } else if self.cursor.match_kind(TokenKind::Var) {
            Some(self.var_declaration()?)
        } else {
            Some(self.expression_statement()?)
        };

        let cond = if self.cursor.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };
        self.consume(TokenKind::Semicolon, "expect ';' after loop condition")?;

        let increment = if self.cursor.check(TokenKind::RParen) {
            None
        } else {
            Some(self.expression()?)
        };
        self.consume(TokenKind::RParen, "expect ')' after for clauses")?;

        let mut body = self.statement()?;
        let span = start.merge(self.cursor.previous_span());

        if let Some(inc) = increment {
            let inc_span = self.arena.expr_span(inc);
            let inc_stmt = self.arena.push_stmt(StmtKind::Expr(inc), inc_span);
            let range = self.arena.push_stmt_list(&[body, inc_stmt]);
            body = self.arena.push_stmt(StmtKind::Block(range), span);
        }

        let cond = cond.unwrap_or_else(|| self.arena.push_expr(ExprKind::Bool(true), span));
        let mut stmt = self.arena.push_stmt(StmtKind::While { cond, body }, span);

        if let Some(init) = initializer {
            let range = self.arena.push_stmt_list(&[init, stmt]);
            stmt = self.arena.push_stmt(StmtKind::Block(range), span);
        }
        Ok(stmt)
    }

    fn print_statement(&mut self) -> ParseResult<StmtId> {
        let start = self.cursor.previous_span();
        let value = self.expression()?;
        self.consume(TokenKind::Semicolon, "expect ';' after value")?;
        let span = start.merge(self.cursor.previous_span());
        Ok(self.arena.push_stmt(StmtKind::Print(value), span))
    }

    fn return_statement(&mut self) -> ParseResult<StmtId> {
        let start = self.cursor.previous_span();
        let value = if self.cursor.check(TokenKind::Semicolon) {
            ExprId::INVALID
        } else {
            self.expression()?
        };
        self.consume(TokenKind::Semicolon, "expect ';' after return value")?;
        let span = start.merge(self.cursor.previous_span());
        Ok(self.arena.push_stmt(StmtKind::Return { value }, span))
    }

    fn break_statement(&mut self) -> ParseResult<StmtId> {
        let start = self.cursor.previous_span();
        self.consume(TokenKind::Semicolon, "expect ';' after 'break'")?;
        let span = start.merge(self.cursor.previous_span());
        Ok(self.arena.push_stmt(StmtKind::Break, span))
    }

    fn continue_statement(&mut self) -> ParseResult<StmtId> {
        let start = self.cursor.previous_span();
        self.consume(TokenKind::Semicolon, "expect ';' after 'continue'")?;
        let span = start.merge(self.cursor.previous_span());
        Ok(self.arena.push_stmt(StmtKind::Continue, span))
    }

    fn expression_statement(&mut self) -> ParseResult<StmtId> {
        let start = self.cursor.current_span();
        let expr = self.expression()?;
        self.consume(TokenKind::Semicolon, "expect ';' after expression")?;
        let span = start.merge(self.cursor.previous_span());
        Ok(self.arena.push_stmt(StmtKind::Expr(expr), span))
    }
}
