//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod extensions;
pub mod global;
pub use extensions::{AppFlags, As3Flags, CfeFlags, DoFlags, ExtensionFlags, TsFlags};
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "declgen",
    bin_name = "declgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate BIG-IP onboarding declarations for Google Cloud",
    long_about = "declgen renders AS3, Declarative Onboarding, Cloud Failover, \
                  Telemetry Streaming and runtime-init declarations, plus the \
                  cloud-config that ties them together, for BIG-IP VMs on \
                  Google Cloud.",
    after_help = "EXAMPLES:\n\
        \x20 declgen bigip my-bigip > cloud-config.yaml\n\
        \x20 declgen bigip as3 my_app --interfaces 4\n\
        \x20 declgen bigip runtime-init my-bigip --cfe-enable false -o runtime-init.yaml\n\
        \x20 declgen completions bash > /usr/share/bash-completion/completions/declgen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate declarations for a BIG-IP VM.
    #[command(
        about = "Generate a cloud-config or a single declaration",
        after_help = "EXAMPLES:\n\
            \x20 declgen bigip my-bigip --proxy-url http://proxy:3128\n\
            \x20 declgen bigip do my-bigip --license-pool-name pool --bigiq-host 10.1.1.4\n\
            \x20 declgen bigip cfe my-bigip --cfe-scoping-tags f5_cloud_failover_label=prod"
    )]
    Bigip(BigipArgs),

    /// Initialise a declgen configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 declgen init           # ~/.declgen.toml\n\
            \x20 declgen init --local   # ./.declgen.toml"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 declgen completions bash > ~/.local/share/bash-completion/completions/declgen\n\
            \x20 declgen completions zsh  > ~/.zfunc/_declgen\n\
            \x20 declgen completions fish > ~/.config/fish/completions/declgen.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the declgen configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 declgen config get generator.interfaces\n\
            \x20 declgen config list"
    )]
    Config(ConfigCommands),
}

// ── bigip ─────────────────────────────────────────────────────────────────────

/// Arguments for `declgen bigip`.
///
/// Without a subcommand, renders the cloud-config for a full runtime-init
/// onboarding of `NAME`.
#[derive(Debug, Args)]
#[command(args_conflicts_with_subcommands = true)]
pub struct BigipArgs {
    #[command(subcommand)]
    pub command: Option<BigipCommands>,

    /// BIG-IP name; must be a valid AS3 label.
    #[arg(value_name = "NAME", help = "BIG-IP or scenario name")]
    pub name: Option<String>,

    #[command(flatten)]
    pub extensions: ExtensionFlags,

    #[arg(
        long = "proxy-url",
        value_name = "URL",
        help = "HTTP(S) proxy used to download runtime-init"
    )]
    pub proxy_url: Option<String>,
}

/// Single-declaration subcommands of `declgen bigip`.
#[derive(Debug, Subcommand)]
pub enum BigipCommands {
    /// Generate an AS3 declaration.
    #[command(
        visible_alias = "as",
        aliases = ["application-services", "appsvcs"]
    )]
    As3(As3Args),

    /// Generate a Declarative Onboarding declaration.
    #[command(visible_alias = "onboarding", alias = "declarative-onboarding")]
    Do(DoArgs),

    /// Generate a Cloud Failover Extension declaration.
    #[command(visible_alias = "failover", alias = "cloud-failover")]
    Cfe(CfeArgs),

    /// Generate a Telemetry Streaming declaration.
    #[command(visible_alias = "telemetry", alias = "telemetry-streaming")]
    Ts(TsArgs),

    /// Generate an AS3 application declaration with static entries.
    #[command(visible_alias = "application")]
    App(AppArgs),

    /// Generate a runtime-init configuration with placeholder addresses.
    #[command(visible_alias = "ri")]
    RuntimeInit(RuntimeInitArgs),
}

#[derive(Debug, Args)]
pub struct As3Args {
    #[arg(value_name = "NAME")]
    pub name: String,

    #[command(flatten)]
    pub flags: As3Flags,
}

#[derive(Debug, Args)]
pub struct DoArgs {
    #[arg(value_name = "NAME")]
    pub name: String,

    #[command(flatten)]
    pub flags: DoFlags,
}

#[derive(Debug, Args)]
pub struct CfeArgs {
    #[arg(value_name = "NAME")]
    pub name: String,

    #[command(flatten)]
    pub flags: CfeFlags,
}

#[derive(Debug, Args)]
pub struct TsArgs {
    #[arg(value_name = "NAME")]
    pub name: String,

    #[command(flatten)]
    pub flags: TsFlags,
}

#[derive(Debug, Args)]
pub struct AppArgs {
    #[arg(value_name = "NAME")]
    pub name: String,

    #[command(flatten)]
    pub flags: AppFlags,
}

#[derive(Debug, Args)]
pub struct RuntimeInitArgs {
    #[arg(value_name = "NAME")]
    pub name: String,

    #[command(flatten)]
    pub extensions: ExtensionFlags,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `declgen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.declgen.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `declgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `declgen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `generator.interfaces`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the user configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bigip_without_subcommand_takes_a_name() {
        let cli = Cli::parse_from(["declgen", "bigip", "my-bigip", "--proxy-url", "http://p"]);
        let Commands::Bigip(args) = cli.command else {
            panic!("expected bigip command");
        };
        assert!(args.command.is_none());
        assert_eq!(args.name.as_deref(), Some("my-bigip"));
        assert_eq!(args.proxy_url.as_deref(), Some("http://p"));
        assert!(args.extensions.runtime_init.as3_enable);
        assert!(!args.extensions.runtime_init.app_enable);
    }

    #[test]
    fn as3_aliases_resolve() {
        for alias in ["as3", "as", "application-services"] {
            let cli = Cli::parse_from(["declgen", "bigip", alias, "my_app"]);
            let Commands::Bigip(BigipArgs {
                command: Some(BigipCommands::As3(args)),
                ..
            }) = cli.command
            else {
                panic!("{alias} did not resolve to as3");
            };
            assert_eq!(args.name, "my_app");
            assert!(args.flags.as3_livez_health_check);
            assert_eq!(args.flags.as3_livez_health_check_port, 26000);
        }
    }

    #[test]
    fn global_flags_follow_subcommands() {
        let cli = Cli::parse_from([
            "declgen", "bigip", "ts", "x", "--interfaces", "5", "--url", "https://e", "-vv",
        ]);
        assert_eq!(cli.global.interfaces, Some(5));
        assert_eq!(cli.global.url.as_deref(), Some("https://e"));
        assert_eq!(cli.global.verbose, 2);
    }

    #[test]
    fn boolean_flags_take_explicit_values() {
        let cli = Cli::parse_from([
            "declgen",
            "bigip",
            "runtime-init",
            "x",
            "--cfe-enable",
            "false",
            "--app-enable",
            "true",
        ]);
        let Commands::Bigip(BigipArgs {
            command: Some(BigipCommands::RuntimeInit(args)),
            ..
        }) = cli.command
        else {
            panic!("expected runtime-init");
        };
        assert!(!args.extensions.runtime_init.cfe_enable);
        assert!(args.extensions.runtime_init.app_enable);
        assert!(args.extensions.runtime_init.do_enable);
    }

    #[test]
    fn scoping_tags_are_comma_separated() {
        let cli = Cli::parse_from([
            "declgen",
            "bigip",
            "cfe",
            "x",
            "--cfe-scoping-tags",
            "a=1,b=2",
        ]);
        let Commands::Bigip(BigipArgs {
            command: Some(BigipCommands::Cfe(args)),
            ..
        }) = cli.command
        else {
            panic!("expected cfe");
        };
        assert_eq!(
            args.flags.cfe_scoping_tags,
            vec![("a".into(), "1".into()), ("b".into(), "2".into())]
        );
    }

    #[test]
    fn license_pool_requires_bigiq_host() {
        let result =
            Cli::try_parse_from(["declgen", "bigip", "do", "x", "--license-pool-name", "pool"]);
        assert!(result.is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["declgen", "--quiet", "--verbose", "config", "list"]);
        assert!(result.is_err());
    }
}
