//! Common utilities for the Tessera selector builder.
//!
//! This crate provides shared infrastructure used by the builder crates:
//! - **Warning System** - colored terminal output for suspicious input

pub mod warning;
