//! Public API traits and types for FrodoKEXP
//!
//! This crate provides the public API surface shared by the workspace:
//! the error taxonomy, the [`SplitKex`] trait implemented by the core, the
//! serialization contracts and the zeroizing byte containers.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::*;

pub use traits::{Serialize, SerializeSecret, SplitKex};

// Re-export trait modules for direct access
pub use traits::{kex, serialize};
