//! 字符游标
//!
//! 把行源转换为字符流，支持单字符预读和位置追踪。
//! 行号/列号只在取行和消费字符时更新，是错误定位的唯一依据。

use tracing::{trace, warn};

use super::position::Coordinate;
use super::source::LineSource;
use crate::lexer::error::LexerError;

/// 字符游标
///
/// 持有当前行，按需从行源拉取下一行；空行被透明跳过。
pub struct Cursor<S> {
    /// 底层行源
    source: S,
    /// 当前行原文（错误显示用）
    line: String,
    /// 当前行的字符，按列随机访问
    chars: Vec<char>,
    /// 下一个将被消费字符的位置
    position: Coordinate,
    /// 行源是否已耗尽
    exhausted: bool,
}

impl<S: LineSource> Cursor<S> {
    /// 创建游标；第一行在首次取行时才读取
    pub fn new(source: S) -> Self {
        Self {
            source,
            line: String::new(),
            chars: Vec::new(),
            position: Coordinate::before_input(),
            exhausted: false,
        }
    }

    /// 获取当前位置
    pub fn position(&self) -> Coordinate {
        self.position
    }

    /// 当前行原文
    pub fn line_text(&self) -> &str {
        &self.line
    }

    /// 行源是否已耗尽
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// 预读当前字符（不消费）
    ///
    /// 当前行已读完时返回 `None`，不会触发取行
    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.position.column - 1).copied()
    }

    /// 读取并消费一个字符
    ///
    /// 当前行已读完时先取下一个非空行；行源耗尽则返回 `Ok(None)`
    pub fn advance(&mut self) -> Result<Option<char>, LexerError> {
        if self.peek().is_none() && !self.next_line()? {
            return Ok(None);
        }
        let c = self.peek();
        if c.is_some() {
            self.position.advance();
        }
        Ok(c)
    }

    /// 跳到下一个非空行行首，不消费任何字符
    ///
    /// 当前行剩余的字符会被丢弃。返回 `false` 表示行源已耗尽，
    /// 之后不会再调用行源。
    pub fn next_line(&mut self) -> Result<bool, LexerError> {
        if self.exhausted {
            return Ok(false);
        }

        loop {
            match self.source.next_line() {
                Ok(Some(line)) => {
                    self.position.next_line();
                    self.chars = line.chars().collect();
                    self.line = line;
                    trace!(
                        target: "calx::lexer",
                        line = self.position.line,
                        len = self.chars.len(),
                        "Fetched line"
                    );
                    if !self.chars.is_empty() {
                        return Ok(true);
                    }
                }
                Ok(None) => {
                    trace!(target: "calx::lexer", line = self.position.line, "Line source exhausted");
                    self.exhausted = true;
                    return Ok(false);
                }
                Err(source) => {
                    let line = self.position.line + 1;
                    warn!(target: "calx::lexer", line, error = %source, "Line source failed");
                    return Err(LexerError::Source { line, source });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::core::MemoryLines;
    use std::io;

    fn cursor(lines: &[&str]) -> Cursor<MemoryLines> {
        Cursor::new(MemoryLines::new(lines.iter().copied()))
    }

    /// 读出若干行后失败的行源
    struct FailingSource {
        lines: Vec<&'static str>,
    }

    impl LineSource for FailingSource {
        fn next_line(&mut self) -> io::Result<Option<String>> {
            if self.lines.is_empty() {
                Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
            } else {
                Ok(Some(self.lines.remove(0).to_string()))
            }
        }
    }

    #[test]
    fn test_cursor_before_first_line() {
        let c = cursor(&["12"]);
        assert_eq!(c.peek(), None);
        assert_eq!(c.position(), Coordinate::new(0, 1));
        assert!(!c.is_exhausted());
    }

    #[test]
    fn test_cursor_peek_does_not_consume() {
        let mut c = cursor(&["ab"]);
        assert!(c.next_line().unwrap());
        assert_eq!(c.peek(), Some('a'));
        assert_eq!(c.peek(), Some('a'));
        assert_eq!(c.position(), Coordinate::new(1, 1));
    }

    #[test]
    fn test_cursor_advance_tracks_position() {
        let mut c = cursor(&["ab", "c"]);
        assert_eq!(c.advance().unwrap(), Some('a'));
        assert_eq!(c.position(), Coordinate::new(1, 2));
        assert_eq!(c.advance().unwrap(), Some('b'));
        assert_eq!(c.position(), Coordinate::new(1, 3));
        assert_eq!(c.peek(), None);

        assert_eq!(c.advance().unwrap(), Some('c'));
        assert_eq!(c.position(), Coordinate::new(2, 2));
        assert_eq!(c.line_text(), "c");

        assert_eq!(c.advance().unwrap(), None);
        assert!(c.is_exhausted());
        assert_eq!(c.advance().unwrap(), None);
    }

    #[test]
    fn test_cursor_skips_empty_lines() {
        let mut c = cursor(&["", "", "x"]);
        assert!(c.next_line().unwrap());
        assert_eq!(c.position(), Coordinate::new(3, 1));
        assert_eq!(c.peek(), Some('x'));
    }

    #[test]
    fn test_cursor_only_empty_lines() {
        let mut c = cursor(&["", ""]);
        assert!(!c.next_line().unwrap());
        assert!(c.is_exhausted());
        assert_eq!(c.position().line, 2);
        assert_eq!(c.peek(), None);
    }

    #[test]
    fn test_cursor_next_line_keeps_first_char() {
        let mut c = cursor(&["1", "2"]);
        assert_eq!(c.advance().unwrap(), Some('1'));
        assert!(c.next_line().unwrap());
        assert_eq!(c.peek(), Some('2'));
        assert_eq!(c.position(), Coordinate::new(2, 1));
    }

    #[test]
    fn test_cursor_counts_chars_not_bytes() {
        let mut c = cursor(&["中+"]);
        assert_eq!(c.advance().unwrap(), Some('中'));
        assert_eq!(c.position().column, 2);
        assert_eq!(c.peek(), Some('+'));
    }

    #[test]
    fn test_cursor_source_error_is_not_eof() {
        let mut c = Cursor::new(FailingSource { lines: vec!["7"] });
        assert_eq!(c.advance().unwrap(), Some('7'));

        let err = c.advance().unwrap_err();
        match err {
            LexerError::Source { line, source } => {
                assert_eq!(line, 2);
                assert_eq!(source.kind(), io::ErrorKind::Other);
            }
            other => panic!("expected source error, got {other:?}"),
        }
        assert!(!c.is_exhausted());
    }
}
