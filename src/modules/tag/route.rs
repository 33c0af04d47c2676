use clap::Subcommand;

use crate::api::error;
use crate::modules::tag::handle;
use crate::modules::tag::service::TagService;

#[derive(Debug, Subcommand)]
pub enum TagCommand {
    /// List the account's tags
    List,
}

pub async fn dispatch(command: TagCommand, service: &TagService) -> Result<(), error::Error> {
    match command {
        TagCommand::List => handle::list(service).await,
    }
}
