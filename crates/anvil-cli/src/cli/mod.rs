//! CLI argument definitions using the clap derive API.
//!
//! Only argument names, help text and value enums live here. Turning them
//! into a `ProjectConfig` is the job of `commands::new`.

use std::path::PathBuf;

use anvil_core::domain::{ApiStyle, DbDriver};
use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

pub const BIN_NAME: &str = "anvil";

// ── Top-level CLI ─────────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(
    name     = "anvil",
    bin_name = "anvil",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Multi-module Spring Boot project scaffolding",
    long_about = "Anvil generates a Gradle multi-module Spring Boot skeleton \
                  (domain, application, infrastructure, api) with build files \
                  and placeholder sources.",
    after_help = "EXAMPLES:\n\
        \x20 anvil new clinic --group-id com.example --jpa true --db postgresql\n\
        \x20 anvil new clinic --yes --offline --api rest,graphql\n\
        \x20 anvil versions\n\
        \x20 anvil completions bash > ~/.local/share/bash-completion/completions/anvil",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a new project.
    #[command(
        visible_alias = "n",
        about = "Generate a new project",
        after_help = "EXAMPLES:\n\
            \x20 anvil new                                # ask every question\n\
            \x20 anvil new clinic --yes                   # defaults from config\n\
            \x20 anvil new clinic --jpa true --db postgresql,h2 --lombok false\n\
            \x20 anvil new clinic --no-api --dry-run"
    )]
    New(NewArgs),

    /// Show the Java and Spring Boot versions offered for new projects.
    #[command(about = "Show available Java and Spring Boot versions")]
    Versions(VersionsArgs),

    /// Write a default configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 anvil init           # platform config directory\n\
            \x20 anvil init --local   # ./anvil.toml"
    )]
    Init(InitArgs),

    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 anvil completions bash > ~/.local/share/bash-completion/completions/anvil\n\
            \x20 anvil completions zsh  > ~/.zfunc/_anvil\n\
            \x20 anvil completions fish > ~/.config/fish/completions/anvil.fish"
    )]
    Completions(CompletionsArgs),

    #[command(
        about = "Inspect the effective configuration",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 anvil config get defaults.group_id\n\
            \x20 anvil config list\n\
            \x20 anvil config path"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Args)]
pub struct NewArgs {
    /// The generated root directory is `<NAME>-api`.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: Option<String>,

    #[arg(long = "group-id", value_name = "GROUP", help = "Base Java package, e.g. com.example")]
    pub group_id: Option<String>,

    #[arg(long = "java-version", value_name = "VERSION", help = "Java toolchain version")]
    pub java_version: Option<String>,

    #[arg(long = "boot-version", value_name = "VERSION", help = "Spring Boot version")]
    pub boot_version: Option<String>,

    #[arg(long = "jpa", value_name = "BOOL", help = "Add Spring Data JPA")]
    pub jpa: Option<bool>,

    /// Ignored unless JPA is enabled.
    #[arg(
        long = "db",
        value_name = "DRIVERS",
        value_enum,
        value_delimiter = ',',
        help = "Database drivers (comma separated)"
    )]
    pub db: Vec<DriverArg>,

    #[arg(long = "lombok", value_name = "BOOL", help = "Add Lombok")]
    pub lombok: Option<bool>,

    #[arg(long = "mapstruct", value_name = "BOOL", help = "Add MapStruct")]
    pub mapstruct: Option<bool>,

    #[arg(
        long = "api",
        value_name = "STYLES",
        value_enum,
        value_delimiter = ',',
        conflicts_with = "no_api",
        help = "API styles (comma separated)"
    )]
    pub api: Vec<ApiStyleArg>,

    #[arg(long = "no-api", help = "Generate neither a REST controller nor a GraphQL resolver")]
    pub no_api: bool,

    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory (default: current directory)"
    )]
    pub output: Option<PathBuf>,

    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip all questions and use flags plus configured defaults"
    )]
    pub yes: bool,

    #[arg(long = "force", help = "Overwrite generated files in an existing directory")]
    pub force: bool,

    #[arg(long = "dry-run", help = "Show what would be created without writing")]
    pub dry_run: bool,

    #[arg(long = "offline", help = "Use built-in version lists instead of start.spring.io")]
    pub offline: bool,
}

// ── versions ──────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct VersionsArgs {
    #[arg(long = "offline", help = "Show the built-in version lists only")]
    pub offline: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct InitArgs {
    #[arg(long = "local", help = "Write ./anvil.toml instead of the platform config file")]
    pub local: bool,

    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: clap_complete::Shell,
}

// ── config ────────────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print one value of the effective configuration.
    Get {
        /// Dotted key path, e.g. `defaults.group_id`.
        key: String,
    },
    /// Print the effective configuration as TOML.
    List,
    /// Print where configuration files are read from.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DriverArg {
    #[value(name = "postgresql", alias = "postgres", alias = "pg")]
    PostgreSql,
    #[value(name = "h2")]
    H2,
    #[value(name = "mysql")]
    MySql,
    #[value(name = "mongodb", alias = "mongo")]
    MongoDb,
}

impl From<DriverArg> for DbDriver {
    fn from(arg: DriverArg) -> Self {
        match arg {
            DriverArg::PostgreSql => DbDriver::PostgreSql,
            DriverArg::H2 => DbDriver::H2,
            DriverArg::MySql => DbDriver::MySql,
            DriverArg::MongoDb => DbDriver::MongoDb,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ApiStyleArg {
    #[value(name = "rest")]
    Rest,
    #[value(name = "graphql", alias = "gql")]
    GraphQl,
}

impl From<ApiStyleArg> for ApiStyle {
    fn from(arg: ApiStyleArg) -> Self {
        match arg {
            ApiStyleArg::Rest => ApiStyle::Rest,
            ApiStyleArg::GraphQl => ApiStyle::GraphQl,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
