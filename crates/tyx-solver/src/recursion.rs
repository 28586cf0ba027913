//! Recursion guards for cycle detection and depth limiting in recursive
//! descriptor walks.
//!
//! Descriptors are acyclic, so recursion always bottoms out. The guards here
//! turn an unexpectedly deep walk into a clean rejection instead of a stack
//! overflow, and give the subtype checker coinductive cycle handling.
//!
//! [`RecursionProfile`] provides named presets so each call site states
//! *what* it is guarding instead of repeating raw numbers:
//!
//! ```ignore
//! let guard = RecursionGuard::with_profile(RecursionProfile::SubtypeCheck);
//! ```

use rustc_hash::FxHashSet;
use std::hash::Hash;
use tyx_common::limits;

// ---------------------------------------------------------------------------
// RecursionProfile
// ---------------------------------------------------------------------------

/// Named recursion limit presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecursionProfile {
    /// Structural subtype comparison (`SubtypeChecker`).
    SubtypeCheck,

    /// Recursive field and tuple transforms (`DeepReadonly`).
    Transform,

    /// Pattern inference and hole substitution.
    Inference,

    /// `Promise<...>` unwrapping.
    Unwrap,

    /// Head/tail tuple walks driven by operators such as `Includes`.
    TupleWalk,

    /// Custom limits for one-off or test scenarios.
    Custom { max_depth: u32, max_iterations: u32 },
}

impl RecursionProfile {
    /// Maximum recursion depth for this profile.
    pub const fn max_depth(self) -> u32 {
        match self {
            Self::SubtypeCheck => limits::MAX_SUBTYPE_DEPTH,
            Self::Transform => limits::MAX_TRANSFORM_DEPTH,
            Self::Inference => limits::MAX_INFER_DEPTH,
            Self::Unwrap => limits::MAX_UNWRAP_DEPTH,
            Self::TupleWalk => limits::MAX_TUPLE_WALK,
            Self::Custom { max_depth, .. } => max_depth,
        }
    }

    /// Maximum iteration count for this profile.
    pub const fn max_iterations(self) -> u32 {
        match self {
            Self::Custom { max_iterations, .. } => max_iterations,
            _ => 100_000,
        }
    }
}

// ---------------------------------------------------------------------------
// RecursionResult
// ---------------------------------------------------------------------------

/// Result of attempting to enter a recursive computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecursionResult {
    /// Proceed with the computation.
    Entered,
    /// This key is already being visited.
    Cycle,
    /// Maximum recursion depth exceeded.
    DepthExceeded,
    /// Maximum iteration count exceeded.
    IterationExceeded,
}

impl RecursionResult {
    #[inline]
    pub fn is_entered(self) -> bool {
        matches!(self, Self::Entered)
    }

    #[inline]
    pub fn is_cycle(self) -> bool {
        matches!(self, Self::Cycle)
    }

    /// Returns `true` if any limit was exceeded (depth or iterations).
    #[inline]
    pub fn is_exceeded(self) -> bool {
        matches!(self, Self::DepthExceeded | Self::IterationExceeded)
    }
}

// ---------------------------------------------------------------------------
// RecursionGuard
// ---------------------------------------------------------------------------

/// Tracks recursion state for cycle detection, depth limiting and iteration
/// bounding.
///
/// On `Entered` the caller **must** call [`leave`](Self::leave) with the same
/// key. In debug builds a guard dropped with active entries panics.
pub struct RecursionGuard<K: Hash + Eq + Copy> {
    visiting: FxHashSet<K>,
    depth: u32,
    iterations: u32,
    max_depth: u32,
    max_iterations: u32,
    exceeded: bool,
}

impl<K: Hash + Eq + Copy> RecursionGuard<K> {
    /// Create a guard with explicit limits.
    pub fn new(max_depth: u32, max_iterations: u32) -> Self {
        Self {
            visiting: FxHashSet::default(),
            depth: 0,
            iterations: 0,
            max_depth,
            max_iterations,
            exceeded: false,
        }
    }

    /// Create a guard from a named [`RecursionProfile`].
    pub fn with_profile(profile: RecursionProfile) -> Self {
        Self::new(profile.max_depth(), profile.max_iterations())
    }

    /// Try to enter a recursive computation for `key`.
    pub fn enter(&mut self, key: K) -> RecursionResult {
        self.iterations = self.iterations.saturating_add(1);

        if self.iterations > self.max_iterations {
            self.exceeded = true;
            return RecursionResult::IterationExceeded;
        }
        if self.depth >= self.max_depth {
            self.exceeded = true;
            return RecursionResult::DepthExceeded;
        }
        if self.visiting.contains(&key) {
            return RecursionResult::Cycle;
        }

        self.visiting.insert(key);
        self.depth += 1;
        RecursionResult::Entered
    }

    /// Leave a recursive computation for `key`.
    pub fn leave(&mut self, key: K) {
        let was_present = self.visiting.remove(&key);
        debug_assert!(
            was_present,
            "RecursionGuard::leave() called with a key that is not in the visiting set"
        );
        self.depth = self.depth.saturating_sub(1);
    }

    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Returns `true` if any limit was previously exceeded. Sticky until
    /// [`reset`](Self::reset).
    #[inline]
    pub fn is_exceeded(&self) -> bool {
        self.exceeded
    }

    /// Reset all state while preserving configured limits.
    pub fn reset(&mut self) {
        self.visiting.clear();
        self.depth = 0;
        self.iterations = 0;
        self.exceeded = false;
    }
}

#[cfg(debug_assertions)]
impl<K: Hash + Eq + Copy> Drop for RecursionGuard<K> {
    fn drop(&mut self) {
        if !std::thread::panicking() && !self.visiting.is_empty() {
            panic!(
                "RecursionGuard dropped with {} active entries still in the visiting set",
                self.visiting.len(),
            );
        }
    }
}

// ---------------------------------------------------------------------------
// DepthCounter
// ---------------------------------------------------------------------------

/// A depth-only guard (no cycle detection).
///
/// Used where the same descriptor may legitimately be revisited, e.g. the
/// same field type appearing under two different keys of a record.
///
/// ```ignore
/// let mut counter = DepthCounter::with_profile(RecursionProfile::Transform);
/// if !counter.enter() {
///     return Err(ShapeError::DepthExceeded { limit: counter.max_depth() });
/// }
/// let result = do_work();
/// counter.leave();
/// ```
#[derive(Debug)]
pub struct DepthCounter {
    depth: u32,
    max_depth: u32,
}

impl DepthCounter {
    pub fn new(max_depth: u32) -> Self {
        Self {
            depth: 0,
            max_depth,
        }
    }

    pub fn with_profile(profile: RecursionProfile) -> Self {
        Self::new(profile.max_depth())
    }

    /// Enter one level. Returns `false` (without incrementing) if the limit
    /// is reached.
    #[inline]
    pub fn enter(&mut self) -> bool {
        if self.depth >= self.max_depth {
            return false;
        }
        self.depth += 1;
        true
    }

    #[inline]
    pub fn leave(&mut self) {
        debug_assert!(self.depth > 0, "DepthCounter::leave() called at depth 0");
        self.depth = self.depth.saturating_sub(1);
    }

    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[inline]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }
}

#[cfg(test)]
#[path = "../tests/recursion_tests.rs"]
mod tests;
