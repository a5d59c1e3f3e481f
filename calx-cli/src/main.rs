//! Calx CLI - Command line interface
//!
//! `calx lex [FILE]` 对文件或标准输入做词法分析并逐行打印 token

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use tracing::info;

mod config;
mod error;
mod logging;
mod platform;

use calx_core::lexer::{LineSource, ReaderLines};
use config::{parse_log_level, CliConfig, FileConfig, OutputFormat};
use error::CliError;
use logging::LogFormat;
use platform::{print_error, write_tokens};

#[derive(Parser)]
#[command(
    name = "calx",
    about = "Calx - streaming lexer for arithmetic expressions",
    version
)]
struct Cli {
    /// Configuration file path (default: ./calx.json when present)
    #[arg(long, value_name = "CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Global log level: silent, error, warn, info, debug, trace
    #[arg(long, value_name = "LEVEL", global = true)]
    log_level: Option<String>,

    /// Log level for the lexer only
    #[arg(long, value_name = "LEVEL", global = true)]
    lexer_log_level: Option<String>,

    /// Log output format
    #[arg(long, value_enum, global = true)]
    log_format: Option<LogFormat>,

    /// Also append logs to this file
    #[arg(long, value_name = "PATH", global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Tokenize FILE (or stdin) and print one token per line
    Lex {
        /// Input file; `-` or omitted reads stdin
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Token output format
        #[arg(long, value_enum)]
        output: Option<OutputFormat>,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        print_error(&e);
        process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut config = CliConfig::from_file(FileConfig::discover(cli.config.as_deref())?)?;
    apply_overrides(&mut config, &cli)?;
    logging::init(&config)?;

    match cli.command {
        Command::Lex { file, output } => {
            let format = output.unwrap_or(config.output);
            lex(file.as_deref(), format)
        }
    }
}

/// 命令行参数覆盖配置文件
fn apply_overrides(config: &mut CliConfig, cli: &Cli) -> Result<(), CliError> {
    if let Some(level) = &cli.log_level {
        config.log.global = parse_log_level(level)?;
    }
    if let Some(level) = &cli.lexer_log_level {
        config.log.lexer = Some(parse_log_level(level)?);
    }
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }
    if let Some(path) = &cli.log_file {
        config.log_file = Some(path.clone());
    }
    Ok(())
}

fn lex(file: Option<&Path>, format: OutputFormat) -> Result<(), CliError> {
    match file {
        Some(path) if path != Path::new("-") => {
            info!(target: "calx::cli", path = %path.display(), "Lexing file");
            let handle = File::open(path).map_err(|source| CliError::Input {
                path: path.to_path_buf(),
                source,
            })?;
            lex_source(ReaderLines::new(BufReader::new(handle)), format)
        }
        _ => {
            info!(target: "calx::cli", "Lexing stdin");
            lex_source(ReaderLines::new(io::stdin().lock()), format)
        }
    }
}

fn lex_source<S: LineSource>(source: S, format: OutputFormat) -> Result<(), CliError> {
    let mut out = BufWriter::new(io::stdout().lock());
    let result = write_tokens(source, format, &mut out);
    // 出错前的 token 也要输出
    let flushed = out.flush();
    let count = result?;
    flushed.map_err(CliError::Output)?;
    info!(target: "calx::cli", count, "Done");
    Ok(())
}
