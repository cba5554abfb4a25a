//! Unit test suite for vracfg
//!
//! Library-level tests that exercise the public API the way an embedding host
//! would, without going through the CLI.
//!
//! ```bash
//! cargo test --test unit
//! ```
//!
//! - **flatten_properties**: properties every flattened map must have
//! - **resource_configurations**: expansion and re-flattening of records

mod resource_configurations;
