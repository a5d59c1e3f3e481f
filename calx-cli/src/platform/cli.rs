//! CLI 格式化输出
//!
//! token 写到 stdout，错误连同源码行和插入符写到 stderr。

use std::io::{self, Write};

use calx_core::lexer::{Lexer, LineSource, Token};
use tracing::debug;

use crate::config::OutputFormat;
use crate::error::CliError;

/// 按指定格式写出单个 token
pub fn write_token<W: Write>(out: &mut W, token: &Token, format: OutputFormat) -> Result<(), CliError> {
    match format {
        OutputFormat::Debug => writeln!(out, "{token}").map_err(CliError::Output)?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, token).map_err(|e| CliError::Output(e.into()))?;
            writeln!(out).map_err(CliError::Output)?;
        }
    }
    Ok(())
}

/// 驱动 Lexer 直到输入结束，逐个写出 token
///
/// 出错前产出的 token 已经写入 `out`
pub fn write_tokens<S, W>(source: S, format: OutputFormat, out: &mut W) -> Result<usize, CliError>
where
    S: LineSource,
    W: Write,
{
    let mut count = 0;
    for token in Lexer::new(source).tokens() {
        write_token(out, &token?, format)?;
        count += 1;
    }
    debug!(target: "calx::cli", count, "Tokenization finished");
    Ok(count)
}

/// 打印错误；词法错误附带源码上下文
pub fn print_error(e: &CliError) {
    let mut stderr = io::stderr().lock();
    let message = match e {
        CliError::Lex(lex) => lex.render(),
        other => other.to_string(),
    };
    // stderr 已不可写时没有别的地方可以报告
    let _ = writeln!(stderr, "error: {message}");
}
