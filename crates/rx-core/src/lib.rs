//! # rx-core — Foundational Types for the Rx Schema Engine
//!
//! This crate is the leaf of the workspace. It defines the data the engine
//! operates on and the ways the engine can fail; it knows nothing about
//! schema kinds or registries.
//!
//! ## Key Design Principles
//!
//! 1. **One generic value model.** Schemas and checked values are the same
//!    `Value` type: booleans, numbers, strings, sequences, string-keyed maps,
//!    null, and opaque dates/times. Text parsing lives outside the engine.
//!
//! 2. **Two disjoint error types.** `ValidationError` (a value failed a
//!    check, with a location path) and `SchemaError` (a schema or registry
//!    definition is malformed). A definition failure can never be mistaken
//!    for a rejected value.
//!
//! 3. **`Range` is shared.** Length and numeric-range constraints use the
//!    same bound checker, so inclusive/exclusive semantics cannot drift
//!    between kinds.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `rx-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod range;
pub mod value;

// Re-export primary types for ergonomic imports.
pub use error::{SchemaError, ValidationError};
pub use range::Range;
pub use value::{Map, Number, Value};
