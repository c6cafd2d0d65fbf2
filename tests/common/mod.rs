//! Shared test utilities for pressroom integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file.

pub mod assertions;
pub mod builders;
pub mod capture;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use capture::*;
pub use fixtures::*;
