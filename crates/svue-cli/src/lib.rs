//! Library side of the `svue` binary: digest rendering and logging setup.

pub mod digest;
pub mod logging;
