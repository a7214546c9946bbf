//! Parameter constants for the FrodoKEXP key exchange
//!
//! This crate carries no code and no dependencies. Every other crate in the
//! workspace sizes its buffers from the values defined here.

#![no_std]

pub mod pqc;
