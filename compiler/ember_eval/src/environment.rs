//! Environment: the scope-frame chain.
//!
//! Frames are reference-counted with interior mutability because closures
//! keep their captured frame alive past the call that created it: a frame's
//! lifetime is that of its longest holder, not the call stack. The model is
//! single-threaded, so `Rc<RefCell<_>>` and no locking.

// Rc is the intentional implementation detail of ScopeRef.
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use ember_ir::Name;

use crate::Value;

/// A shared, mutable scope frame handle.
///
/// Wraps `Rc<RefCell<Scope>>` so all frame allocations go through the
/// factory and so the single-threaded sharing model is explicit at the type.
pub struct ScopeRef(Rc<RefCell<Scope>>);

impl ScopeRef {
    /// Create a new frame handle.
    #[inline]
    pub fn new(scope: Scope) -> Self {
        ScopeRef(Rc::new(RefCell::new(scope)))
    }

    /// Borrow the frame immutably.
    #[inline]
    pub fn borrow(&self) -> std::cell::Ref<'_, Scope> {
        self.0.borrow()
    }

    /// Borrow the frame mutably.
    #[inline]
    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, Scope> {
        self.0.borrow_mut()
    }

    /// Identity comparison: do both handles refer to the same frame?
    #[inline]
    pub fn ptr_eq(&self, other: &ScopeRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Clone for ScopeRef {
    #[inline]
    fn clone(&self) -> Self {
        ScopeRef(Rc::clone(&self.0))
    }
}

impl fmt::Debug for ScopeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScopeRef({:p})", Rc::as_ptr(&self.0))
    }
}

/// A single scope frame: name → value bindings plus the enclosing frame.
#[derive(Debug, Default)]
pub struct Scope {
    bindings: FxHashMap<Name, Value>,
    parent: Option<ScopeRef>,
}

impl Scope {
    /// Create an empty frame with no enclosing frame (the global frame).
    pub fn new() -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: None,
        }
    }

    /// Create a frame enclosed by `parent`.
    pub fn with_parent(parent: ScopeRef) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    /// Introduce or overwrite a binding in this frame only. Always succeeds;
    /// re-declaration at the same level is allowed.
    #[inline]
    pub fn define(&mut self, name: Name, value: Value) {
        self.bindings.insert(name, value);
    }

    /// Look up a name, walking the chain to the global frame.
    pub fn get(&self, name: Name) -> Option<Value> {
        if let Some(value) = self.bindings.get(&name) {
            return Some(value.clone());
        }
        if let Some(parent) = &self.parent {
            return parent.borrow().get(name);
        }
        None
    }

    /// Look up a name in this frame only.
    #[inline]
    pub fn get_here(&self, name: Name) -> Option<Value> {
        self.bindings.get(&name).cloned()
    }

    /// Assign to an existing binding, walking the chain. Never creates a
    /// binding; returns false if the name is absent from every frame.
    pub fn assign(&mut self, name: Name, value: Value) -> bool {
        if let Some(slot) = self.bindings.get_mut(&name) {
            *slot = value;
            return true;
        }
        if let Some(parent) = &self.parent {
            return parent.borrow_mut().assign(name, value);
        }
        false
    }

    /// Assign in this frame only; returns false if the name is absent here.
    pub fn assign_here(&mut self, name: Name, value: Value) -> bool {
        if let Some(slot) = self.bindings.get_mut(&name) {
            *slot = value;
            true
        } else {
            false
        }
    }

    /// The enclosing frame, if any.
    pub fn parent(&self) -> Option<ScopeRef> {
        self.parent.clone()
    }

    /// The names bound in this frame (unordered).
    pub fn names(&self) -> Vec<Name> {
        self.bindings.keys().copied().collect()
    }
}

/// Walk exactly `distance` enclosing links from `frame`.
///
/// Returns `None` if the chain is shorter; a resolver-produced distance
/// never is.
fn ancestor(frame: &ScopeRef, distance: u32) -> Option<ScopeRef> {
    let mut current = frame.clone();
    for _ in 0..distance {
        let parent = current.borrow().parent();
        current = parent?;
    }
    Some(current)
}

/// The interpreter's environment: a current-frame cursor plus the global
/// frame.
///
/// Scope entry and exit go through the interpreter's RAII guard
/// ([`crate::interpreter::ScopedInterpreter`]), which restores the previous
/// current frame on every exit path.
#[derive(Debug)]
pub struct Environment {
    current: ScopeRef,
    globals: ScopeRef,
}

impl Environment {
    /// Create an environment whose current frame is the global frame.
    pub fn new() -> Self {
        let globals = ScopeRef::new(Scope::new());
        Environment {
            current: globals.clone(),
            globals,
        }
    }

    /// The current frame.
    #[inline]
    pub fn current(&self) -> &ScopeRef {
        &self.current
    }

    /// The global frame.
    #[inline]
    pub fn globals(&self) -> &ScopeRef {
        &self.globals
    }

    /// Define in the current frame.
    #[inline]
    pub fn define(&mut self, name: Name, value: Value) {
        self.current.borrow_mut().define(name, value);
    }

    /// Define in the global frame, regardless of the current frame.
    #[inline]
    pub fn define_global(&mut self, name: Name, value: Value) {
        self.globals.borrow_mut().define(name, value);
    }

    /// Name-only lookup: walk from the current frame to the global frame.
    pub fn get(&self, name: Name) -> Option<Value> {
        self.current.borrow().get(name)
    }

    /// Lookup in the global frame only (the unresolved path).
    pub fn get_global(&self, name: Name) -> Option<Value> {
        self.globals.borrow().get_here(name)
    }

    /// Distance-aware lookup: walk exactly `distance` links, then read.
    ///
    /// The resolver guarantees the binding exists at that depth; `None`
    /// here means the distance map and the frame chain disagree.
    pub fn get_at(&self, distance: u32, name: Name) -> Option<Value> {
        ancestor(&self.current, distance).and_then(|frame| frame.borrow().get_here(name))
    }

    /// Name-only assignment: walk from the current frame. Never creates a
    /// binding.
    pub fn assign(&mut self, name: Name, value: Value) -> bool {
        self.current.borrow_mut().assign(name, value)
    }

    /// Assignment in the global frame only (the unresolved path).
    pub fn assign_global(&mut self, name: Name, value: Value) -> bool {
        self.globals.borrow_mut().assign_here(name, value)
    }

    /// Distance-aware assignment: walk exactly `distance` links, then write.
    pub fn assign_at(&mut self, distance: u32, name: Name, value: Value) -> bool {
        ancestor(&self.current, distance)
            .is_some_and(|frame| frame.borrow_mut().assign_here(name, value))
    }

    /// Swap the current frame for `frame`, returning the previous one.
    ///
    /// Used by the interpreter's scope guard; callers must restore the
    /// returned frame.
    pub(crate) fn swap_current(&mut self, frame: ScopeRef) -> ScopeRef {
        std::mem::replace(&mut self.current, frame)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
