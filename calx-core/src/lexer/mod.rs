//! Calx 流式词法分析器
//!
//! 设计要点：
//! - 流式：按行从行源拉取输入，只保留一个预读字符和一个累积中的 token
//! - 纯转移函数：状态机与字符获取分离，便于单独测试
//! - 精准定位：错误携带 1-based 行列号和出错行原文

pub mod core;
pub mod error;
#[allow(clippy::module_inception)]
pub mod lexer;
pub mod machine;
pub mod token;

pub use self::core::{Coordinate, Cursor, LineSource, MemoryLines, ReaderLines};
pub use error::{ErrorKind, LexError, LexerError};
pub use lexer::{tokenize, Lexer, Tokens};
pub use machine::{is_operator_char, transition, CharClass, State, Step, OPERATOR_CHARS};
pub use token::Token;
