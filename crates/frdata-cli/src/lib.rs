//! Library side of the `frdata` command line tool.

pub mod cli;
pub mod config;
pub mod logging;
pub mod pipeline;
pub mod types;
