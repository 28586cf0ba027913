//! String interner for names that appear inside type descriptors.
//!
//! Property names, hole names, application names (`Promise`) and string
//! literal values are interned into a shared pool and passed around as `u32`
//! handles (Atoms). Comparisons become integer comparisons, which keeps
//! structural identity checks on descriptors cheap.

use rustc_hash::FxHashMap;
use std::sync::{Arc, RwLock};

/// An interned string identifier.
///
/// Atoms are cheap to copy (just a u32) and can be compared with == in O(1).
/// To get the actual string, use `Interner::resolve(atom)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Atom(pub u32);

impl Atom {
    /// A sentinel value representing no atom / empty string.
    pub const NONE: Atom = Atom(0);

    /// Check if this is the empty/none atom.
    #[inline]
    pub fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Get the raw index value.
    #[inline]
    pub fn index(self) -> u32 {
        self.0
    }
}

const COMMON_STRINGS: &[&str] = &[
    "Promise", "length", "args", "T", "U", "K", "P", "R", "L", "Head", "Tail", "key", "value",
];

#[derive(Default)]
struct InternerState {
    map: FxHashMap<Arc<str>, Atom>,
    strings: Vec<Arc<str>>,
}

/// String interner that deduplicates strings and returns Atom handles.
///
/// Interning takes `&self`: the pool sits behind a `RwLock` so a single
/// interner can be shared by every component that builds descriptors.
///
/// # Example
/// ```
/// use tyx_common::Interner;
/// let interner = Interner::new();
/// let a1 = interner.intern("hello");
/// let a2 = interner.intern("hello");
/// assert_eq!(a1, a2);
/// assert_eq!(&*interner.resolve(a1), "hello");
/// ```
pub struct Interner {
    state: RwLock<InternerState>,
}

impl Interner {
    /// Create a new interner with the empty string pre-interned at index 0.
    pub fn new() -> Self {
        let mut state = InternerState::default();
        let empty: Arc<str> = Arc::from("");
        state.strings.push(empty.clone());
        state.map.insert(empty, Atom::NONE);
        Interner {
            state: RwLock::new(state),
        }
    }

    /// Intern a string, returning its Atom handle.
    /// If the string was already interned, returns the existing Atom.
    pub fn intern(&self, s: &str) -> Atom {
        if s.is_empty() {
            return Atom::NONE;
        }
        if let Ok(state) = self.state.read()
            && let Some(&atom) = state.map.get(s)
        {
            return atom;
        }

        let Ok(mut state) = self.state.write() else {
            // Poisoned lock: keep going with the empty atom rather than panic.
            return Atom::NONE;
        };
        if let Some(&atom) = state.map.get(s) {
            return atom;
        }
        let atom = Atom(state.strings.len() as u32);
        let owned: Arc<str> = Arc::from(s);
        state.strings.push(owned.clone());
        state.map.insert(owned, atom);
        atom
    }

    /// Resolve an Atom back to its string value.
    /// Returns empty string if atom is out of bounds.
    pub fn resolve(&self, atom: Atom) -> Arc<str> {
        self.try_resolve(atom).unwrap_or_else(|| Arc::from(""))
    }

    /// Try to resolve an Atom, returning None if invalid.
    pub fn try_resolve(&self, atom: Atom) -> Option<Arc<str>> {
        let state = self.state.read().ok()?;
        state.strings.get(atom.0 as usize).cloned()
    }

    /// Get the number of interned strings.
    pub fn len(&self) -> usize {
        self.state.read().map(|state| state.strings.len()).unwrap_or(0)
    }

    /// Check if the interner is empty (only has the empty string).
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }

    /// Pre-intern the names the engine reaches for most often.
    pub fn intern_common(&self) {
        for s in COMMON_STRINGS {
            self.intern(s);
        }
    }
}

impl Default for Interner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../tests/interner_tests.rs"]
mod tests;
