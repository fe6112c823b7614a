//! RAII scope guards for the current-environment cursor.
//!
//! Block entry and function calls swap the cursor to a new frame; the guard
//! swaps the previous frame back when dropped, so restoration happens on
//! every exit path: normal fall-through, a propagating control-flow
//! signal, or `?` on a runtime error.

use std::ops::{Deref, DerefMut};

use crate::environment::{Scope, ScopeRef};

use super::Interpreter;

/// Guard that restores the previous current frame on drop.
///
/// Access the interpreter through the guard: it implements `Deref` and
/// `DerefMut`, so evaluation continues transparently inside the new scope.
pub struct ScopedInterpreter<'guard, 'a> {
    interpreter: &'guard mut Interpreter<'a>,
    previous: Option<ScopeRef>,
}

impl Drop for ScopedInterpreter<'_, '_> {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            self.interpreter.env.swap_current(previous);
        }
    }
}

impl<'a> Deref for ScopedInterpreter<'_, 'a> {
    type Target = Interpreter<'a>;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl<'a> Interpreter<'a> {
    /// Enter a child frame of the current frame (block scope).
    pub(crate) fn scoped(&mut self) -> ScopedInterpreter<'_, 'a> {
        let current = self.env.current().clone();
        self.enter_frame(current)
    }

    /// Enter a child frame of `parent` (function call: the parent is the
    /// callee's captured frame, not the caller's current frame).
    pub(crate) fn scoped_at(&mut self, parent: &ScopeRef) -> ScopedInterpreter<'_, 'a> {
        self.enter_frame(parent.clone())
    }

    fn enter_frame(&mut self, parent: ScopeRef) -> ScopedInterpreter<'_, 'a> {
        let frame = ScopeRef::new(Scope::with_parent(parent));
        let previous = self.env.swap_current(frame);
        ScopedInterpreter {
            interpreter: self,
            previous: Some(previous),
        }
    }
}
