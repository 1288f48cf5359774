//! Terminal output formatting
//!
//! Display utilities for the line-based front ends.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_check_result, print_message, print_share};
