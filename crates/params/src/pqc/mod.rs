//! Constants for post-quantum key exchange

pub mod frodokexp;
