//! # lakewatch-common
//!
//! Pieces shared by the lakewatch batch tools. Currently this is only the
//! `tracing` setup: both binaries read a log level (and optionally a log
//! file) from their config and initialize the subscriber through [`logging`].

pub mod logging;

pub use logging::{init_console, init_file, parse_level, LoggingError};
