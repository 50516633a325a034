//! Session configuration and the command-line flags that produce it.

use clap::Parser;

pub const DEFAULT_SEPARATOR_LENGTH: usize = 25;

/// Settings for one interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Width of the `=` rules around the product table.
    pub separator_length: usize,
    /// Whether the registry starts with the seed catalogue.
    pub seed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            separator_length: DEFAULT_SEPARATOR_LENGTH,
            seed: true,
        }
    }
}

/// Interactive in-memory inventory menu.
#[derive(Debug, Parser)]
#[command(name = "inventory-menu", version, about)]
pub struct Cli {
    /// Width of the separator lines around the product table.
    #[arg(long, default_value_t = DEFAULT_SEPARATOR_LENGTH)]
    pub separator_length: usize,

    /// Start with an empty inventory instead of the sample catalogue.
    #[arg(long)]
    pub empty: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            separator_length: cli.separator_length,
            seed: !cli.empty,
        }
    }
}
