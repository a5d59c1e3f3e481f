//! Lexer 主入口
//!
//! 拉取式接口：每次调用 [`Lexer::next_token`] 返回一个完整 token、
//! 输入结束标记（`Ok(None)`）或错误，从不返回半个 token。
//!
//! # 示例
//!
//! ```
//! use calx_core::lexer::{Lexer, MemoryLines, Token};
//!
//! let mut lexer = Lexer::new(MemoryLines::from_text("12+34"));
//! assert_eq!(lexer.next_token().unwrap(), Some(Token::number(12)));
//! assert_eq!(lexer.next_token().unwrap(), Some(Token::operator("+")));
//! assert_eq!(lexer.next_token().unwrap(), Some(Token::number(34)));
//! assert_eq!(lexer.next_token().unwrap(), None);
//! ```

use tracing::{debug, trace, warn};

use super::core::{Coordinate, Cursor, LineSource, MemoryLines};
use super::error::{LexError, LexerError};
use super::machine::{transition, State, Step};
use super::token::Token;

/// 流式词法分析器
///
/// 不可重入：同一时间只能被一个调用方驱动
pub struct Lexer<S> {
    cursor: Cursor<S>,
    state: State,
}

impl<S: LineSource> Lexer<S> {
    /// 基于行源创建 Lexer
    pub fn new(source: S) -> Self {
        trace!(target: "calx::lexer", "Creating new Lexer");
        Self {
            cursor: Cursor::new(source),
            state: State::Start,
        }
    }

    /// 当前游标位置
    pub fn position(&self) -> Coordinate {
        self.cursor.position()
    }

    /// 获取下一个 Token
    ///
    /// # Returns
    /// - `Ok(Some(token))` - 完整的 token
    /// - `Ok(None)` - 输入结束，之后的调用也都返回 `Ok(None)`
    /// - `Err(e)` - 非法字符、数字溢出或行源读取失败
    pub fn next_token(&mut self) -> Result<Option<Token>, LexerError> {
        trace!(target: "calx::lexer", "Requesting next token");

        loop {
            let lookahead = self.cursor.peek();
            match transition(&self.state, lookahead) {
                Step::Emit(token) => {
                    debug!(
                        target: "calx::lexer",
                        token = %token,
                        line = self.cursor.position().line,
                        column = self.cursor.position().column,
                        "Produced token"
                    );
                    self.state = State::Start;
                    return Ok(Some(token));
                }
                Step::Next(state) => {
                    self.state = state;
                    if lookahead.is_some() {
                        self.cursor.advance()?;
                    } else if !self.cursor.next_line()? {
                        // 只有 Start 状态会在行尾得到 Next
                        trace!(target: "calx::lexer", "Reached end of input");
                        return Ok(None);
                    }
                }
                Step::Reject(kind) => {
                    let error = LexError::at(kind, self.cursor.position(), self.cursor.line_text());
                    warn!(target: "calx::lexer", error = %error, "Lex error encountered");
                    return Err(error.into());
                }
            }
        }
    }

    /// 转换为 token 迭代器
    pub fn tokens(self) -> Tokens<S> {
        Tokens {
            inner: TokensInner::Lex(self),
        }
    }
}

/// token 迭代器，输入结束或出错后不再产出
#[must_use]
pub struct Tokens<S> {
    inner: TokensInner<S>,
}

enum TokensInner<S> {
    Lex(Lexer<S>),
    Done,
}

impl<S: LineSource> Iterator for Tokens<S> {
    type Item = Result<Token, LexerError>;

    fn next(&mut self) -> Option<Self::Item> {
        let TokensInner::Lex(lexer) = &mut self.inner else {
            return None;
        };
        match lexer.next_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                self.inner = TokensInner::Done;
                None
            }
            Err(e) => {
                self.inner = TokensInner::Done;
                Some(Err(e))
            }
        }
    }
}

impl<S: LineSource> std::iter::FusedIterator for Tokens<S> {}

/// 对内存中的文本做完整词法分析
pub fn tokenize(text: &str) -> Result<Vec<Token>, LexerError> {
    Lexer::new(MemoryLines::from_text(text)).tokens().collect()
}
