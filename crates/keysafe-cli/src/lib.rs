//! Library components of the `keysafe` command line tool.

pub mod logging;
pub mod report;
