//! CLI 错误类型

use std::io;
use std::path::PathBuf;

use calx_core::LexerError;

use crate::config::ConfigError;
use crate::logging::LogInitError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Logging(#[from] LogInitError),

    #[error("cannot open '{}': {source}", .path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Lex(#[from] LexerError),

    #[error("cannot write output: {0}")]
    Output(#[source] io::Error),
}

impl CliError {
    /// 进程退出码：配置类错误为 2，其余为 1
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Config(_) | CliError::Logging(_) => 2,
            CliError::Input { .. } | CliError::Lex(_) | CliError::Output(_) => 1,
        }
    }
}
