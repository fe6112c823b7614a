//! Grammar: expressions.
//!
//! Precedence, loosest to tightest:
//!
//! ```text
//! assignment → IDENT "=" assignment | logic_or
//! logic_or   → logic_and ( "or" logic_and )*
//! logic_and  → ternary ( "and" ternary )*
//! ternary    → equality ( "?" expression ":" ternary )?
//! equality   → comparison ( ( "!=" | "==" ) comparison )*
//! comparison → term ( ( ">" | ">=" | "<" | "<=" ) term )*
//! term       → factor ( ( "-" | "+" ) factor )*
//! factor     → unary ( ( "/" | "*" ) unary )*
//! unary      → ( "!" | "-" ) unary | call
//! call       → primary ( "(" arguments? ")" )*
//! ```

use ember_ir::{BinaryOp, ExprId, ExprKind, LogicalOp, TokenKind, UnaryOp};
use smallvec::SmallVec;

use super::{Parser, MAX_ARITY};
use crate::error::ParseResult;

impl Parser<'_> {
    pub(crate) fn expression(&mut self) -> ParseResult<ExprId> {
        self.assignment()
    }

    fn assignment(&mut self) -> ParseResult<ExprId> {
        let expr = self.logic_or()?;

        if self.cursor.match_kind(TokenKind::Equal) {
            let equals_span = self.cursor.previous_span();
            let value = self.assignment()?;

            if let ExprKind::Variable(name) = *self.arena.expr(expr) {
                let span = self.arena.expr_span(expr).merge(self.arena.expr_span(value));
                return Ok(self.arena.push_expr(ExprKind::Assign { name, value }, span));
            }

            // Not fatal: the right-hand side parsed fine, keep going.
            self.report_at(equals_span, "invalid assignment target");
        }

        Ok(expr)
    }

    fn logic_or(&mut self) -> ParseResult<ExprId> {
        let mut expr = self.logic_and()?;
        while self.cursor.match_kind(TokenKind::Or) {
            let right = self.logic_and()?;
            expr = self.push_logical(LogicalOp::Or, expr, right);
        }
        Ok(expr)
    }

    fn logic_and(&mut self) -> ParseResult<ExprId> {
        let mut expr = self.ternary()?;
        while self.cursor.match_kind(TokenKind::And) {
            let right = self.ternary()?;
            expr = self.push_logical(LogicalOp::And, expr, right);
        }
        Ok(expr)
    }

    fn ternary(&mut self) -> ParseResult<ExprId> {
        let expr = self.equality()?;

        if self.cursor.match_kind(TokenKind::Question) {
            let then_branch = self.expression()?;
            self.consume(TokenKind::Colon, "expect ':' after expression")?;
            let else_branch = self.ternary()?;
            let span = self
                .arena
                .expr_span(expr)
                .merge(self.arena.expr_span(else_branch));
            return Ok(self.arena.push_expr(
                ExprKind::Ternary {
                    cond: expr,
                    then_branch,
                    else_branch,
                },
                span,
            ));
        }

        Ok(expr)
    }

    fn equality(&mut self) -> ParseResult<ExprId> {
        let mut expr = self.comparison()?;
        loop {
            let op = if self.cursor.match_kind(TokenKind::BangEqual) {
                BinaryOp::NotEqual
            } else if self.cursor.match_kind(TokenKind::EqualEqual) {
                BinaryOp::Equal
            } else {
                break;
            };
            let right = self.comparison()?;
            expr = self.push_binary(op, expr, right);
        }
        Ok(expr)
    }

    fn comparison(&mut self) -> ParseResult<ExprId> {
        let mut expr = self.term()?;
        loop {
            let op = if self.cursor.match_kind(TokenKind::Greater) {
                BinaryOp::Greater
            } else if self.cursor.match_kind(TokenKind::GreaterEqual) {
                BinaryOp::GreaterEqual
            } else if self.cursor.match_kind(TokenKind::Less) {
                BinaryOp::Less
            } else if self.cursor.match_kind(TokenKind::LessEqual) {
                BinaryOp::LessEqual
            } else {
                break;
            };
            let right = self.term()?;
            expr = self.push_binary(op, expr, right);
        }
        Ok(expr)
    }

    fn term(&mut self) -> ParseResult<ExprId> {
        let mut expr = self.factor()?;
        loop {
            let op = if self.cursor.match_kind(TokenKind::Minus) {
                BinaryOp::Sub
            } else if self.cursor.match_kind(TokenKind::Plus) {
                BinaryOp::Add
            } else {
                break;
            };
            let right = self.factor()?;
            expr = self.push_binary(op, expr, right);
        }
        Ok(expr)
    }

    fn factor(&mut self) -> ParseResult<ExprId> {
        let mut expr = self.unary()?;
        loop {
            let op = if self.cursor.match_kind(TokenKind::Slash) {
                BinaryOp::Div
            } else if self.cursor.match_kind(TokenKind::Star) {
                BinaryOp::Mul
            } else {
                break;
            };
            let right = self.unary()?;
            expr = self.push_binary(op, expr, right);
        }
        Ok(expr)
    }

    fn unary(&mut self) -> ParseResult<ExprId> {
        let op = if self.cursor.match_kind(TokenKind::Bang) {
            Some(UnaryOp::Not)
        } else if self.cursor.match_kind(TokenKind::Minus) {
            Some(UnaryOp::Neg)
        } else {
            None
        };

        if let Some(op) = op {
            let op_span = self.cursor.previous_span();
            let operand = self.unary()?;
            let span = op_span.merge(self.arena.expr_span(operand));
            return Ok(self.arena.push_expr(ExprKind::Unary { op, operand }, span));
        }

        self.call()
    }

    fn call(&mut self) -> ParseResult<ExprId> {
        let mut expr = self.primary()?;
        while self.cursor.match_kind(TokenKind::LParen) {
            expr = self.finish_call(expr)?;
        }
        Ok(expr)
    }

    /// `(` already consumed; parses arguments and the closing `)`.
    fn finish_call(&mut self, callee: ExprId) -> ParseResult<ExprId> {
        let mut args: SmallVec<[ExprId; 8]> = SmallVec::new();

        if !self.cursor.check(TokenKind::RParen) {
            loop {
                if args.len() >= MAX_ARITY {
                    let span = self.cursor.current_span();
                    self.report_at(span, "can't have more than 255 arguments");
                }
                args.push(self.expression()?);
                if !self.cursor.match_kind(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.consume(TokenKind::RParen, "expect ')' after arguments")?;

        let args = self.arena.push_expr_list(&args);
        let span = self
            .arena
            .expr_span(callee)
            .merge(self.cursor.previous_span());
        Ok(self.arena.push_expr(ExprKind::Call { callee, args }, span))
    }

    fn primary(&mut self) -> ParseResult<ExprId> {
        let span = self.cursor.current_span();
        let kind = match self.cursor.current_kind() {
            TokenKind::False => ExprKind::Bool(false),
            TokenKind::True => ExprKind::Bool(true),
            TokenKind::Nil => ExprKind::Nil,
            TokenKind::Number(bits) => ExprKind::Number(bits),
            TokenKind::Str(name) => ExprKind::Str(name),
            TokenKind::Ident(name) => ExprKind::Variable(name),
            TokenKind::LParen => {
                self.cursor.advance();
                let inner = self.expression()?;
                self.consume(TokenKind::RParen, "expect ')' after expression")?;
                let span = span.merge(self.cursor.previous_span());
                return Ok(self.arena.push_expr(ExprKind::Grouping(inner), span));
            }
            _ => return Err(self.error_at_current("expect expression")),
        };
        self.cursor.advance();
        Ok(self.arena.push_expr(kind, span))
    }

    fn push_binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId) -> ExprId {
        let span = self.arena.expr_span(left).merge(self.arena.expr_span(right));
        self.arena.push_expr(ExprKind::Binary { op, left, right }, span)
    }

    fn push_logical(&mut self, op: LogicalOp, left: ExprId, right: ExprId) -> ExprId {
        let span = self.arena.expr_span(left).merge(self.arena.expr_span(right));
        self.arena.push_expr(ExprKind::Logical { op, left, right }, span)
    }
}
