//! CLI argument definitions for the WriteAble analyzer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "writeable",
    version,
    about = "WriteAble Document Analyzer - Find grammar, clarity, and tone issues in text",
    long_about = "Analyze plain-text or markdown documents for writing issues.\n\n\
                  Runs a registry of analyzers (grammar, clarity, tone) over the text\n\
                  and reports findings per category. Accepts a file, a directory of\n\
                  documents, stdin, or inline text."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Analyze a document, a directory of documents, stdin, or inline text.
    Analyze(AnalyzeArgs),

    /// List registered analyzer categories.
    Categories,
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Path to a .txt/.md file, a directory of such files, or '-' for stdin.
    #[arg(value_name = "PATH", required_unless_present = "text")]
    pub path: Option<PathBuf>,

    /// Analyze this text instead of reading a file.
    #[arg(long = "text", value_name = "TEXT", conflicts_with = "path")]
    pub text: Option<String>,

    /// Write a JSON report for each analyzed document.
    #[arg(long = "json")]
    pub json: bool,

    /// Output directory for JSON reports (default: <PATH>/output for
    /// directories, the document's directory otherwise).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Word count above which a sentence is flagged as a run-on.
    #[arg(long = "run-on-words", value_name = "N", default_value_t = 40)]
    pub run_on_words: usize,

    /// Word count above which a sentence is flagged as hard to follow.
    #[arg(long = "max-sentence-words", value_name = "N", default_value_t = 30)]
    pub max_sentence_words: usize,

    /// Target register for the tone analyzer.
    #[arg(long = "register", value_enum, default_value = "neutral")]
    pub register: RegisterArg,

    /// Exit successfully even when error-severity findings are present.
    ///
    /// By default the analyzer exits with a non-zero status when any finding
    /// of severity "error" is reported. Use this flag in pipelines that only
    /// want the report, not the gating.
    #[arg(long = "no-fail-on-findings")]
    pub no_fail_on_findings: bool,
}

/// Target register choices for the tone analyzer.
#[derive(Clone, Copy, ValueEnum)]
pub enum RegisterArg {
    Formal,
    Neutral,
    Casual,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
