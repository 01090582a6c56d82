//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::descriptor::ModuleType;

/// cb - Crowdbotics modules CLI
///
/// Validate, scaffold and install reusable React Native and Django modules.
#[derive(Parser, Debug)]
#[command(
    name = "cb",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Manage Crowdbotics modules",
    long_about = "cb validates module descriptors (meta.json), scaffolds new modules and \
                  installs them into a demo app through yarn and pipenv.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  cb parse --source modules --write build/modules.json\n    \
                  cb create --name my-module --type all\n    \
                  cb add react-native-chat django-blog\n    \
                  cb remove react-native-chat\n    \
                  cb commit react-native-chat\n    \
                  cb init --name my-modules\n\n\
                  \x1b[1m\x1b[32mDocumentation:\x1b[0m\n    \
                  https://github.com/crowdbotics/modules"
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Probe external tools again instead of trusting cached versions
    #[arg(long, global = true)]
    pub refresh_env: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate module descriptors and optionally write the valid set
    Parse(ParseArgs),

    /// Scaffold a new module
    Create(CreateArgs),

    /// Install modules into an app
    Add(AddArgs),

    /// Remove modules from an app
    Remove(RemoveArgs),

    /// Copy edited module files from an app back into the modules directory
    Commit(CommitArgs),

    /// Initialize a blank modules repository
    Init(InitArgs),

    /// Generate the demo app from the scaffold templates
    Demo(DemoArgs),

    /// Read or change CLI configuration
    Config(ConfigArgs),

    /// Opt in to usage data collection
    Optin,

    /// Opt out of usage data collection
    Optout,

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the parse command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Validate the repository modules:\n    cb parse\n\n\
                  Validate a directory and write the valid modules:\n    \
                  cb parse --source modules --write build/modules.json")]
pub struct ParseArgs {
    /// Directory holding one subdirectory per module (defaults to <git root>/modules)
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Write the valid modules as JSON to this file
    #[arg(long, value_name = "PATH")]
    pub write: Option<PathBuf>,
}

/// Arguments for the create command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Create a React Native module:\n    cb create --name chat --type react-native\n\n\
                  Create a Django module in another directory:\n    \
                  cb create --name blog --type django --target ./my-modules")]
pub struct CreateArgs {
    /// Module name: a letter followed by letters, digits, '-' or '_'
    #[arg(long)]
    pub name: String,

    /// Module type (all, react-native, django, custom)
    #[arg(long = "type", value_name = "TYPE")]
    pub module_type: ModuleType,

    /// Directory to create the module in (defaults to <git root>/modules)
    #[arg(long)]
    pub target: Option<PathBuf>,

    #[arg(long)]
    pub search_description: Option<String>,

    #[arg(long)]
    pub acceptance_criteria: Option<String>,
}

/// Arguments for the add command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Add modules to the demo app:\n    cb add react-native-chat django-blog\n\n\
                  Add a module to another app:\n    cb add react-native-chat --project ../my-app")]
pub struct AddArgs {
    /// Module directory names
    #[arg(required = true)]
    pub modules: Vec<String>,

    /// Modules directory (defaults to <git root>/modules)
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// App to install into (defaults to <git root>/demo)
    #[arg(long)]
    pub project: Option<PathBuf>,
}

/// Arguments for the remove command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Remove a module from the demo app:\n    cb remove react-native-chat\n\n\
                  Remove a module from another app:\n    cb remove react-native-chat --project ../my-app")]
pub struct RemoveArgs {
    /// Module directory names
    #[arg(required = true)]
    pub modules: Vec<String>,

    /// Modules directory (defaults to <git root>/modules)
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// App to remove from (defaults to <git root>/demo)
    #[arg(long)]
    pub project: Option<PathBuf>,
}

/// Arguments for the commit command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Update a module from the demo app:\n    cb commit react-native-chat\n\n\
                  Update a module from another app:\n    cb commit react-native-chat --source ../my-app")]
pub struct CommitArgs {
    /// Module directory names
    #[arg(required = true)]
    pub modules: Vec<String>,

    /// App to copy from (defaults to <git root>/demo)
    #[arg(long)]
    pub source: Option<PathBuf>,
}

/// Arguments for the init command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Initialize a modules repository:\n    cb init --name my-modules")]
pub struct InitArgs {
    /// Name of the repository directory to create
    #[arg(long)]
    pub name: String,
}

/// Arguments for the demo command
#[derive(Parser, Debug)]
pub struct DemoArgs {
    /// Scaffold branch or tag to render
    #[arg(long, value_name = "REF")]
    pub source: Option<String>,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show a value:\n    cb config get opted-in\n\n\
                  Change a value:\n    cb config set host https://example.com")]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print a configuration value
    Get {
        key: String,
    },
    /// Store a configuration value
    Set {
        key: String,
        value: String,
    },
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    cb completions --shell bash > ~/.bash_completion.d/cb\n\n\
                  Generate zsh completions:\n    cb completions --shell zsh > ~/.zfunc/_cb\n\n\
                  Generate fish completions:\n    cb completions --shell fish > ~/.config/fish/completions/cb.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
