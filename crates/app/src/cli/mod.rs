use clap::{Parser, Subcommand};

mod db;
mod sessions;

#[derive(Debug, Parser)]
#[command(name = "souk-app", about = "Souk operator CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    Sessions(sessions::SessionsCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::Sessions(command) => sessions::run(command).await,
        }
    }
}
