//! sqfvm-diag: inspect the SQF toolchain's diagnostic catalog and logging setup.
//!
//! Provides `sqfvm-diag codes` to list catalog entries, `sqfvm-diag explain` to
//! describe a single code, and `sqfvm-diag check-config` to show which severity
//! gates a `sqfvm.toml` leaves open.

#![warn(missing_docs)]

mod check_config;
mod codes;
mod explain;
mod settings;

use std::process;

use clap::{Args, Parser, Subcommand, ValueEnum};
use sqfvm_diagnostics::{Domain, Severity};

/// sqfvm-diag: diagnostic catalog and logging configuration tool.
#[derive(Parser, Debug)]
#[command(name = "sqfvm-diag", version, about = "SQF toolchain diagnostics")]
pub struct Cli {
    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List catalog entries.
    Codes(CodesArgs),
    /// Describe one diagnostic by code or name.
    Explain {
        /// A numeric code (`60070`) or kind name (`VariableNotFound`).
        query: String,
    },
    /// Load the configuration and print the resulting severity gates.
    CheckConfig(CheckConfigArgs),
}

/// Arguments for the `sqfvm-diag codes` subcommand.
#[derive(Parser, Debug)]
pub struct CodesArgs {
    /// Only list codes of this domain.
    #[arg(short, long, value_enum)]
    pub domain: Option<DomainArg>,

    /// Only list codes of this severity.
    #[arg(short, long, value_enum)]
    pub severity: Option<SeverityArg>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Arguments for the `sqfvm-diag check-config` subcommand.
#[derive(Args, Debug, Default)]
pub struct CheckConfigArgs {
    /// Close every gate below error.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Open every gate, including trace.
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to a `sqfvm.toml` file or a directory containing one.
    #[arg(long)]
    pub config: Option<String>,
}

/// Domain selection on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DomainArg {
    /// Macro preprocessor (`10xxx`).
    Preprocessor,
    /// Assembly parser (`20xxx`).
    Assembly,
    /// Script parser (`30xxx`).
    Parser,
    /// Config parser (`40xxx`).
    Config,
    /// Static analysis (`50xxx`).
    Linting,
    /// Virtual machine (`60xxx`).
    Runtime,
}

impl From<DomainArg> for Domain {
    fn from(arg: DomainArg) -> Self {
        match arg {
            DomainArg::Preprocessor => Domain::Preprocessor,
            DomainArg::Assembly => Domain::Assembly,
            DomainArg::Parser => Domain::Parser,
            DomainArg::Config => Domain::Config,
            DomainArg::Linting => Domain::Linting,
            DomainArg::Runtime => Domain::Runtime,
        }
    }
}

/// Severity selection on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SeverityArg {
    /// Fatal.
    Fatal,
    /// Error.
    Error,
    /// Warning.
    Warning,
    /// Info.
    Info,
    /// Verbose.
    Verbose,
    /// Trace.
    Trace,
}

impl From<SeverityArg> for Severity {
    fn from(arg: SeverityArg) -> Self {
        match arg {
            SeverityArg::Fatal => Severity::Fatal,
            SeverityArg::Error => Severity::Error,
            SeverityArg::Warning => Severity::Warning,
            SeverityArg::Info => Severity::Info,
            SeverityArg::Verbose => Severity::Verbose,
            SeverityArg::Trace => Severity::Trace,
        }
    }
}

/// Catalog listing format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable table.
    Text,
    /// Machine-readable JSON array.
    Json,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Codes(ref args) => codes::run(args),
        Command::Explain { ref query } => explain::run(query),
        Command::CheckConfig(ref args) => check_config::run(args),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
