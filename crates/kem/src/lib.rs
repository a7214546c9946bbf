//! FrodoKEXP key exchange
//!
//! This crate implements the FrodoKEXP split key exchange over unstructured
//! LWE: public-parameter expansion, role-specific keypair generation,
//! encapsulation with a reconciliation hint and decapsulation.

pub mod error;
pub mod frodokexp;

// Re-exports
pub use frodokexp::FrodoKexp1452;
