//! 平台适配层：终端输出

pub mod cli;

pub use cli::{print_error, write_tokens};
