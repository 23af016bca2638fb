//! Exit codes for the CLI

#![allow(dead_code)]

/// Success
pub const SUCCESS: i32 = 0;

/// Fatal data or API error
pub const ERROR: i32 = 1;

/// Command-line usage error, reported by the argument parser
pub const USAGE: i32 = 2;
