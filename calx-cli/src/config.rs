//! CLI 配置
//!
//! 配置来源（优先级从低到高）：默认值 → JSON 配置文件 → 命令行参数

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::Level;

use crate::logging::LogFormat;

/// 默认配置文件名（当前目录下存在时自动读取）
pub const DEFAULT_CONFIG_FILE: &str = "calx.json";

/// 配置加载错误
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown log level '{0}' (expected silent, error, warn, info, debug or trace)")]
    InvalidLevel(String),
}

/// token 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `Number(12)` / `Operator("+")`
    #[default]
    Debug,
    /// 每行一个 JSON 对象
    Json,
}

/// 配置文件结构（calx.json）
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// 全局日志级别: "silent", "error", "warn", "info", "debug", "trace"
    pub log_level: Option<String>,
    /// lexer 日志级别，缺省时使用全局级别
    pub lexer_log_level: Option<String>,
    /// 日志格式
    pub log_format: Option<LogFormat>,
    /// 日志文件（追加写入）
    pub log_file: Option<PathBuf>,
    /// token 输出格式
    pub output: Option<OutputFormat>,
}

impl FileConfig {
    /// 读取并解析配置文件
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// 读取显式指定的配置文件；未指定时尝试默认文件，不存在则使用默认值
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::read(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    Self::read(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

/// CLI 日志配置
#[derive(Debug, Clone, PartialEq)]
pub struct LogConfig {
    pub global: Level,
    pub lexer: Option<Level>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            global: Level::ERROR,
            lexer: None,
        }
    }
}

impl LogConfig {
    /// Get log level for a specific target
    pub fn level_for(&self, target: &str) -> Level {
        match target {
            "calx::lexer" => self.lexer.unwrap_or(self.global),
            _ => self.global,
        }
    }
}

/// 合并后的运行配置
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliConfig {
    pub log: LogConfig,
    pub log_format: LogFormat,
    pub log_file: Option<PathBuf>,
    pub output: OutputFormat,
}

impl CliConfig {
    /// 从配置文件构建，未给出的字段取默认值
    pub fn from_file(file: FileConfig) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(level) = file.log_level {
            config.log.global = parse_log_level(&level)?;
        }
        if let Some(level) = file.lexer_log_level {
            config.log.lexer = Some(parse_log_level(&level)?);
        }
        if let Some(format) = file.log_format {
            config.log_format = format;
        }
        config.log_file = file.log_file;
        if let Some(output) = file.output {
            config.output = output;
        }
        Ok(config)
    }
}

/// Parse log level string
pub fn parse_log_level(s: &str) -> Result<Level, ConfigError> {
    match s.to_lowercase().as_str() {
        "silent" => Ok(Level::ERROR), // silent = only errors
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        _ => Err(ConfigError::InvalidLevel(s.to_string())),
    }
}
