use clap::{Parser, Subcommand};
use std::process::ExitCode;
use std::sync::{Arc, LazyLock};

use crate::api::{client::ApiClient, error::Error};
use crate::configs::PreferenceStore;
use crate::modules::{
    file::{FileCommand, FileService, UploadedFileSqliteRepository},
    settings::ConfigCommand,
    shortlink::{ShortLinkCommand, ShortLinkService, ShortLinkSqliteRepository},
    tag::{TagCommand, TagService},
    textshare::{TextShareCommand, TextShareService, TextShareSqliteRepository},
    usage::UsageService,
};

mod api;
mod configs;
mod constants;
mod format;
mod modules;
mod utils;

pub static ENV: LazyLock<constants::Env> = LazyLock::new(|| {
    dotenvy::dotenv().ok();
    env_logger::init();
    log::debug!("Environment variables loaded from .env file");
    constants::Env::default()
});

#[derive(Debug, Parser)]
#[command(
    name = "see",
    version,
    about = "Client for the SEE link shortening, text sharing and file hosting service"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Short links
    #[command(subcommand)]
    Link(ShortLinkCommand),
    /// Text shares
    #[command(subcommand)]
    Text(TextShareCommand),
    /// File hosting
    #[command(subcommand)]
    File(FileCommand),
    /// Tags
    #[command(subcommand)]
    Tag(TagCommand),
    /// Account usage and quota
    Usage,
    /// Client preferences
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Error> {
    let db_pool = configs::connect_database().await?;
    let prefs = PreferenceStore::new(db_pool.clone());
    let api = Arc::new(ApiClient::new(
        ENV.base_url.clone(),
        ENV.api_key.clone(),
        ENV.request_timeout,
    )?);

    match cli.command {
        Command::Link(command) => {
            let repo = Arc::new(ShortLinkSqliteRepository::new(db_pool.clone()));
            let service = ShortLinkService::with_dependencies(api, repo);
            modules::shortlink::route::dispatch(command, &service, &prefs).await
        }
        Command::Text(command) => {
            let repo = Arc::new(TextShareSqliteRepository::new(db_pool.clone()));
            let service = TextShareService::with_dependencies(api, repo);
            modules::textshare::route::dispatch(command, &service, &prefs).await
        }
        Command::File(command) => {
            let repo = Arc::new(UploadedFileSqliteRepository::new(db_pool.clone()));
            let service = FileService::with_dependencies(api, repo);
            modules::file::route::dispatch(command, &service, &prefs).await
        }
        Command::Tag(command) => {
            let service = TagService::with_dependencies(api);
            modules::tag::route::dispatch(command, &service).await
        }
        Command::Usage => {
            let service = UsageService::with_dependencies(api);
            modules::usage::handle::show(&service).await
        }
        Command::Config(command) => modules::settings::route::dispatch(command, &prefs).await,
    }
}
