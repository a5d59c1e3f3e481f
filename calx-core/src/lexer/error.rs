//! Lexer 错误类型
//!
//! 提供结构化的词法错误信息，包含错误类型、位置和出错的源码行。

use std::io;

use super::core::Coordinate;

/// 错误类型
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    /// 不属于空白、数字、运算符任何一类的字符
    #[error("cannot accept character {0:?}")]
    UnacceptableCharacter(char),
    /// 数字字面量超出 u64 范围
    #[error("number literal exceeds {}", u64::MAX)]
    NumberOverflow,
}

/// 词法错误，包含结构化信息
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{position}: {kind}")]
pub struct LexError {
    /// 错误类型
    pub kind: ErrorKind,
    /// 出错字符的位置
    pub position: Coordinate,
    /// 出错字符所在的完整源码行
    pub line: String,
}

impl LexError {
    /// 在指定位置创建错误
    pub fn at(kind: ErrorKind, position: Coordinate, line: impl Into<String>) -> Self {
        Self {
            kind,
            position,
            line: line.into(),
        }
    }

    /// 获取行号（1-based）
    pub fn line_number(&self) -> usize {
        self.position.line
    }

    /// 获取列号（1-based）
    pub fn column(&self) -> usize {
        self.position.column
    }

    /// 渲染为带插入符的多行错误信息
    ///
    /// ```text
    /// 1:3: cannot accept character '@'
    ///  1 | 12@4
    ///    |   ^
    /// ```
    pub fn render(&self) -> String {
        let line_str = self.position.line.to_string();
        let gutter = " ".repeat(line_str.len());

        // 保留制表符，使插入符与终端中的显示列对齐
        let marker: String = self
            .line
            .chars()
            .take(self.position.column.saturating_sub(1))
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .collect();

        format!(
            "{}\n {line_str} | {}\n {gutter} | {marker}^",
            self, self.line
        )
    }
}

/// Lexer 对外的统一错误
#[derive(Debug, thiserror::Error)]
pub enum LexerError {
    /// 词法错误
    #[error(transparent)]
    Lex(#[from] LexError),

    /// 行源读取失败（不会被当作输入结束）
    #[error("failed to read line {line}: {source}")]
    Source {
        /// 读取失败的行号
        line: usize,
        #[source]
        source: io::Error,
    },
}

impl LexerError {
    /// 如果是词法错误，返回其详情
    pub fn as_lex(&self) -> Option<&LexError> {
        match self {
            LexerError::Lex(e) => Some(e),
            LexerError::Source { .. } => None,
        }
    }

    /// 渲染为适合终端显示的信息
    pub fn render(&self) -> String {
        match self {
            LexerError::Lex(e) => e.render(),
            LexerError::Source { .. } => self.to_string(),
        }
    }
}
