use clap::{Parser, Subcommand};
use folio::content::Locale;
use folio::render::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio", version, about = "Folio: a portfolio you browse like a terminal")]
pub struct Cli {
    /// Content language (en, it)
    #[arg(long, global = true)]
    pub lang: Option<Locale>,

    /// Use the compact content meant for small screens
    #[arg(long, global = true)]
    pub narrow: bool,

    /// Config file to use instead of ./folio.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive terminal (default)
    Shell {
        /// Do not show the first-run tour
        #[arg(long)]
        no_tour: bool,
    },

    /// Run a single command and print its result
    Run {
        /// Working directory inside the portfolio tree
        #[arg(long, default_value = "~")]
        path: String,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },

    /// Print the welcome banner
    Welcome,

    /// Walk through the onboarding tour
    Tour {
        /// Forget that the tour was already seen
        #[arg(long)]
        reset: bool,
    },

    /// Show page metadata and window copy
    Info,
}
