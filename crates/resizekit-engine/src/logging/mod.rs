//! Logging utilities.
//!
//! Centralizes logger initialization. Library code only talks to the `log`
//! facade; binaries and tests pick the backend through [`init_logging`].

mod init;

pub use init::{init_logging, LoggingConfig};
