//! String interner for identifier and string-literal storage.
//!
//! Provides O(1) interning and lookup. Interned strings are leaked to get
//! `'static` lifetime, so looked-up `&str` values stay valid for the whole
//! run without holding a lock.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::Name;

struct InternState {
    /// Map from string content to index.
    map: FxHashMap<&'static str, u32>,
    /// Storage for string contents.
    strings: Vec<&'static str>,
}

impl InternState {
    fn with_empty() -> Self {
        // Pre-intern the empty string at index 0 so Name::EMPTY is valid.
        let empty: &'static str = "";
        let mut map = FxHashMap::default();
        map.insert(empty, 0);
        InternState {
            map,
            strings: vec![empty],
        }
    }
}

/// String interner.
///
/// Interning the same spelling twice returns the same [`Name`], so `Name`
/// equality is string equality.
pub struct StringInterner {
    state: RwLock<InternState>,
}

impl StringInterner {
    /// Create a new interner with the empty string pre-interned.
    pub fn new() -> Self {
        StringInterner {
            state: RwLock::new(InternState::with_empty()),
        }
    }

    /// Intern a string, returning its `Name`.
    pub fn intern(&self, s: &str) -> Name {
        // Fast path: already interned.
        {
            let guard = self.state.read();
            if let Some(&index) = guard.map.get(s) {
                return Name::from_raw(index);
            }
        }

        let mut guard = self.state.write();
        // Double-check after acquiring the write lock.
        if let Some(&index) = guard.map.get(s) {
            return Name::from_raw(index);
        }

        // Leak the string to get 'static lifetime.
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        let index = u32::try_from(guard.strings.len())
            .unwrap_or_else(|_| panic!("interner exceeded capacity at {} strings", u32::MAX));
        guard.strings.push(leaked);
        guard.map.insert(leaked, index);
        Name::from_raw(index)
    }

    /// Look up the string for a `Name`.
    ///
    /// # Panics
    /// Panics if the `Name` was not produced by this interner.
    pub fn lookup(&self, name: Name) -> &'static str {
        let guard = self.state.read();
        guard
            .strings
            .get(name.index())
            .copied()
            .unwrap_or_else(|| panic!("{name:?} not found in interner"))
    }

    /// Number of interned strings (including the pre-interned empty string).
    pub fn len(&self) -> usize {
        self.state.read().strings.len()
    }

    /// Check if only the pre-interned empty string is present.
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}
