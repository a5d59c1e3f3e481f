//! Calx Core - 算术表达式的流式词法分析（纯逻辑，无终端输出）
//!
//! 输入是按需产出的文本行序列，输出是 [`Token`] 流。
//! 日志通过 `tracing` 输出到 `calx::lexer` 目标，由调用方决定是否订阅。

pub mod lexer;

// Re-export common types
pub use lexer::{tokenize, Coordinate, LexError, Lexer, LexerError, LineSource, Token};
