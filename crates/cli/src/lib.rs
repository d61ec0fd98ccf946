//! `cashbox` command-line front end.
//!
//! Each invocation loads the accounts file, runs one operation, and (for
//! mutating commands) saves it again.

pub mod cli;
pub mod commands;

pub use cli::{CashboxCli, Command};
pub use commands::run;
