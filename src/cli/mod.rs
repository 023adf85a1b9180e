//! Command-line front end for the `xh` binary.

pub mod args;
pub mod constants;
