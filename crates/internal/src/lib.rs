//! Internal utilities for the FrodoKEXP workspace
//!
//! Nothing in here is part of the public contract; the helpers exist so the
//! api and kem crates share one constant-time and one byte-order vocabulary.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod constant_time;
pub mod endian;
