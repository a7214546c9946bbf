//! Trait definitions for the key exchange

pub mod kex;
pub mod serialize;

pub use kex::SplitKex;
pub use serialize::{Serialize, SerializeSecret};
