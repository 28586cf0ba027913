//! Centralized limits and thresholds for the type-computation engine.
//!
//! Descriptors are finite and acyclic, so every recursive operation in the
//! solver terminates on its own. These limits exist so that a pathological
//! (very deep) descriptor produces a `DepthExceeded` rejection instead of a
//! stack overflow. The solver applies them through
//! `tyx_solver::recursion::RecursionProfile`.

// =============================================================================
// Recursion Depth Limits
// =============================================================================

/// Maximum nesting depth for subtype and structural comparison.
///
/// # Example
///
/// ```typescript
/// // Each level of nesting adds one frame:
/// type Deep = { a: { b: { c: { d: string } } } };
/// type Check = Deep extends { a: { b: { c: { d: string } } } } ? 1 : 0;
/// ```
pub const MAX_SUBTYPE_DEPTH: u32 = 100;

/// Maximum depth for recursive field/tuple transforms (DeepReadonly).
pub const MAX_TRANSFORM_DEPTH: u32 = 64;

/// Maximum depth for pattern inference and hole substitution.
pub const MAX_INFER_DEPTH: u32 = 100;

/// Maximum number of `Promise<...>` layers `awaited` will peel.
///
/// ```typescript
/// type Z1 = Promise<Promise<Promise<string | boolean>>>;
/// type R = MyAwaited<Z1>; // string | boolean, three layers
/// ```
pub const MAX_UNWRAP_DEPTH: u32 = 50;

/// Maximum number of head/tail steps for recursive tuple walks (Includes).
pub const MAX_TUPLE_WALK: u32 = 1_000;

// =============================================================================
// Capacity Limits
// =============================================================================

/// Inline capacity for small type lists (union members, tuple elements).
pub const TYPE_LIST_INLINE: usize = 8;

/// Upper bound on members produced by distributing a conditional over a union.
pub const MAX_DISTRIBUTION_MEMBERS: usize = 10_000;
