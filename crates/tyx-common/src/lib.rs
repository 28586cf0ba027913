//! Common types and utilities for the tyx type-computation engine.
//!
//! This crate provides foundational types used across all tyx crates:
//! - String interning (`Atom`, `Interner`)
//! - Engine limits and thresholds

// String interning for property names, hole names and string literals
pub mod interner;
pub use interner::{Atom, Interner};

// Centralized limits and thresholds
pub mod limits;
