//! Testing utilities for the FrodoKEXP workspace
//!
//! - [`constant_time`]: Welch t-test timing comparison of two inputs
//! - [`noise`]: reconciliation noise analysis and failure-rate runner

pub mod noise;
