//! Global arguments that apply to every subcommand.
//!
//! Declared here and flattened into [`super::Cli`] so that `-v`, `-q`,
//! `--interfaces` etc. are available on any invocation without repetition

use clap::Args;
use std::path::PathBuf;

/// Global arguments for all commands.
#[derive(Debug, Default, Args)]
pub struct GlobalArgs {
    /// Increase logging verbosity.
    ///
    /// Pass once for INFO (`-v`), twice for DEBUG (`-vv`), three times for
    /// TRACE (`-vvv`).  Conflicts with `--quiet`.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Increase logging verbosity:
    (none)  - Only warnings and errors
    -v      - Info level (progress messages)
    -vv     - Debug level (detailed diagnostics)
    -vvv    - Trace level (very verbose)"
    )]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Disable ANSI colour codes.
    ///
    /// Automatically honoured when `NO_COLOR` is set in the environment
    /// (see <https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Emit log events as JSON lines on stderr.
    #[arg(long = "log-json", global = true, help = "Write logs as JSON")]
    pub log_json: bool,

    /// Configuration file path.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,

    /// Number of network interfaces on the BIG-IP VM, management included.
    #[arg(
        short = 'n',
        long = "interfaces",
        global = true,
        value_name = "N",
        help = "Number of interfaces to generate for, 1 to 8 [default: 3]"
    )]
    pub interfaces: Option<i32>,

    /// URL hashed into the declaration id.
    #[arg(
        long = "url",
        global = true,
        value_name = "URL",
        help = "URL used to derive a stable declaration id"
    )]
    pub url: Option<String>,

    /// Write the declaration here instead of stdout.
    #[arg(
        short = 'o',
        long = "output",
        global = true,
        value_name = "FILE",
        help = "Write output to FILE (default: stdout)"
    )]
    pub output: Option<PathBuf>,
}
