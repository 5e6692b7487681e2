//! Wayfarer game client binary.
//!
//! Composition root: loads content into the registry, resolves or creates
//! the player, and runs the session over a stdin/stdout console.

mod config;
mod console;

use anyhow::Result;
use game_content::ContentFactory;
use runtime::{FileSaveRepository, Session, start_player};

use crate::config::ClientConfig;
use crate::console::StdioConsole;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let client_config = ClientConfig::from_env();
    tracing::info!(data_dir = %client_config.data_dir.display(), "starting Wayfarer client");

    let factory = ContentFactory::new(&client_config.data_dir);
    let game_config = factory.load_config()?;
    let registry = factory.load_registry()?;

    let repository = FileSaveRepository::new(&client_config.save_dir)?;
    let mut console = StdioConsole::new();

    let player = start_player(&registry, &game_config, &repository, &mut console)?;
    let mut session = Session::new(&registry, &game_config, repository, player)?;
    session.run(&mut console)?;

    Ok(())
}
