//! Entry point: parse flags, set up tracing, run the menu on stdin/stdout.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use inventory_menu::controller::Controller;
use inventory_menu::registry::{InventoryError, ProductRegistry};
use inventory_menu::runtime::{setup_tracing, Cli, Config};
use tracing::{error, info};

fn main() -> ExitCode {
    let config = Config::from(Cli::parse());
    setup_tracing();

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Menu terminated");
            ExitCode::FAILURE
        }
    }
}

fn run(config: Config) -> Result<(), InventoryError> {
    info!(?config, "Starting inventory menu");

    let registry = if config.seed {
        ProductRegistry::seeded()?
    } else {
        ProductRegistry::new()
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut controller = Controller::new(registry, stdin.lock(), stdout.lock(), config);
    controller.run()
}
