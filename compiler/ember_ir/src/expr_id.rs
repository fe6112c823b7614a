//! Expression and statement IDs and ranges for the flat AST.
//!
//! Children are `u32` indices into the arena instead of boxes. An id is
//! also a node's identity: the resolver's distance map is keyed by `ExprId`,
//! so syntactically identical expressions at different positions stay
//! distinct.

use std::fmt;

/// Index into the expression arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct ExprId(u32);

impl ExprId {
    /// Invalid expression ID (sentinel for "no expression").
    pub const INVALID: ExprId = ExprId(u32::MAX);

    /// Create a new `ExprId`.
    #[inline]
    pub const fn new(index: u32) -> Self {
        ExprId(index)
    }

    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check if this ID represents a present (non-sentinel) value.
    #[inline]
    pub const fn is_present(self) -> bool {
        self.0 != u32::MAX
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_present() {
            write!(f, "ExprId({})", self.0)
        } else {
            write!(f, "ExprId::INVALID")
        }
    }
}

impl Default for ExprId {
    fn default() -> Self {
        Self::INVALID
    }
}

/// Index into the statement arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct StmtId(u32);

impl StmtId {
    /// Invalid statement ID (sentinel for "no statement").
    pub const INVALID: StmtId = StmtId(u32::MAX);

    #[inline]
    pub const fn new(index: u32) -> Self {
        StmtId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn is_present(self) -> bool {
        self.0 != u32::MAX
    }
}

impl fmt::Debug for StmtId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_present() {
            write!(f, "StmtId({})", self.0)
        } else {
            write!(f, "StmtId::INVALID")
        }
    }
}

impl Default for StmtId {
    fn default() -> Self {
        Self::INVALID
    }
}

macro_rules! define_range {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
        #[repr(C)]
        pub struct $name {
            pub start: u32,
            pub len: u16,
        }

        impl $name {
            /// Empty range.
            pub const EMPTY: $name = $name { start: 0, len: 0 };

            /// Create a new range.
            #[inline]
            pub const fn new(start: u32, len: u16) -> Self {
                $name { start, len }
            }

            /// Check if the range is empty.
            #[inline]
            pub const fn is_empty(&self) -> bool {
                self.len == 0
            }

            /// Number of elements in the range.
            #[inline]
            pub const fn len(&self) -> usize {
                self.len as usize
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(
                    f,
                    concat!(stringify!($name), "({}..{})"),
                    self.start,
                    self.start + u32::from(self.len)
                )
            }
        }
    };
}

define_range! {
    /// Range of expression ids in the arena's flattened argument list.
    ExprRange
}

define_range! {
    /// Range of statement ids in the arena's flattened statement list.
    StmtRange
}

define_range! {
    /// Range of parameter names in the arena's flattened parameter list.
    ParamRange
}

crate::static_assert_size!(ExprId, 4);
crate::static_assert_size!(ExprRange, 8);

#[cfg(test)]
mod tests;
