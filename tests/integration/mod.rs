//! Integration test suite for vracfg
//!
//! End-to-end tests that run the `vracfg` binary against files and stdin and
//! check its stdout, stderr and exit status.
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! - **config**: `config init|show|path` and config file discovery
//! - **expand**: record validation and its error reporting
//! - **flatten**: data maps and record lists, formats, strict mode
//! - **mappings**: effective property table with config overrides
//! - **schema**: schema declaration output

mod common;

mod config;
mod flatten;
mod mappings;
mod schema;
