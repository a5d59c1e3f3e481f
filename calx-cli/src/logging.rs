//! CLI 日志系统初始化
//!
//! 基于 `tracing-subscriber` 实现按目标的日志控制。日志写到 stderr，
//! stdout 只留给 token 输出。

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use serde::Deserialize;
use tracing_subscriber::{
    filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError,
    Layer,
};

use crate::config::CliConfig;

/// 日志输出格式
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// 彩色格式化（开发使用）
    Pretty,
    /// 紧凑格式
    #[default]
    Compact,
    /// JSON 格式（工具集成）
    Json,
}

/// 日志初始化错误
#[derive(Debug, thiserror::Error)]
pub enum LogInitError {
    #[error("cannot open log file '{}': {source}", .path.display())]
    OpenFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot install log subscriber: {0}")]
    Install(#[from] TryInitError),
}

/// 构建目标过滤器
pub fn targets(config: &CliConfig) -> Targets {
    Targets::new()
        .with_default(config.log.global)
        .with_target("calx::lexer", config.log.level_for("calx::lexer"))
        .with_target("calx::cli", config.log.global)
}

/// 使用配置初始化日志系统
///
/// 配置了日志文件时同时输出到 stderr 和文件
pub fn init(config: &CliConfig) -> Result<(), LogInitError> {
    let targets = targets(config);
    let console_layer = create_format_layer(config.log_format, io::stderr).with_filter(targets.clone());

    if let Some(path) = &config.log_file {
        let file_handle = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| LogInitError::OpenFile {
                path: path.clone(),
                source,
            })?;

        let file_layer = fmt::layer()
            .with_ansi(false)
            .with_writer(Mutex::new(file_handle))
            .with_filter(targets);

        tracing_subscriber::registry()
            .with(console_layer)
            .with(file_layer)
            .try_init()?;
    } else {
        tracing_subscriber::registry().with(console_layer).try_init()?;
    }
    Ok(())
}

/// Create formatter layer based on format
fn create_format_layer<W, F>(format: LogFormat, make_writer: F) -> impl Layer<tracing_subscriber::Registry>
where
    W: io::Write + Send + Sync + 'static,
    F: Fn() -> W + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(false)
            .without_time()
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_writer(make_writer)
            .boxed(),
    }
}
