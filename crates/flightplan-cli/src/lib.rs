//! Flight planner CLI library.
//!
//! This crate provides the command handlers, terminal styling and output
//! formatting behind the `flightplan` binary.

pub mod commands;
pub mod output;
pub mod terminal;

#[cfg(test)]
pub(crate) mod test_helpers;
