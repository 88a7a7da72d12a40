//! Lox CLI - The Lox language command line interface.
//! Lox CLI - Lox 语言的命令行界面。

mod commands;
mod error;
mod logging;
mod output;

use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};

use crate::error::CliError;

/// Main CLI structure.
/// 主 CLI 结构体。
#[derive(Parser)]
#[command(name = "lox")]
#[command(author, version, about = "Lox - tools for a small scripting language", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output. / 启用详细输出。
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress output. / 抑制输出。
    #[arg(short, long, global = true)]
    quiet: bool,

    /// How lexical errors are reported. / 词法错误的报告格式。
    #[arg(long, value_enum, global = true, default_value = "plain")]
    format: Format,
}

/// Available CLI commands.
/// 可用的 CLI 命令。
#[derive(Subcommand)]
enum Commands {
    /// Print the tokens of a file. / 打印文件的 token。
    Tokenize {
        /// The file to scan. / 要扫描的文件。
        file: String,
    },
}

/// Diagnostic rendering style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// `[line N] Error: <message>`
    Plain,
    /// Annotated source report.
    Pretty,
}

/// Main entry point.
/// 主入口点。
fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Tokenize { file } => commands::tokenize::run(&file, cli.format, cli.verbose),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Lexical errors were already reported one by one.
            if !cli.quiet && !matches!(e, CliError::Lexical { .. }) {
                output::error(&e.to_string());
            }
            ExitCode::from(e.exit_code())
        }
    }
}
