use clap::Subcommand;

use crate::api::error;
use crate::configs::PreferenceStore;
use crate::modules::file::handle;
use crate::modules::file::repository::UploadedFileRepository;
use crate::modules::file::service::FileService;

#[derive(Debug, Subcommand)]
pub enum FileCommand {
    /// Upload a file and print its link
    Upload {
        path: std::path::PathBuf,
        /// Output format identifier, e.g. MARKDOWN; falls back to the
        /// configured preference
        #[arg(long)]
        format: Option<String>,
    },
    /// Delete an upload by its hash
    Delete { hash: String },
    /// List the domains available for file hosting
    Domains,
    /// List cached uploads, newest first
    List {
        /// Filter by substring over filename and URL
        #[arg(long)]
        query: Option<String>,
    },
    /// Print a cached upload's link in the requested format
    Link {
        hash: String,
        #[arg(long)]
        format: Option<String>,
    },
    /// Clear the local upload history
    Clear,
}

pub async fn dispatch<R>(
    command: FileCommand,
    service: &FileService<R>,
    prefs: &PreferenceStore,
) -> Result<(), error::Error>
where
    R: UploadedFileRepository + Send + Sync,
{
    match command {
        FileCommand::Upload { path, format } => {
            handle::upload(service, prefs, &path, format).await
        }
        FileCommand::Delete { hash } => handle::delete(service, &hash).await,
        FileCommand::Domains => handle::domains(service).await,
        FileCommand::List { query } => handle::list(service, query).await,
        FileCommand::Link { hash, format } => handle::link(service, prefs, &hash, format).await,
        FileCommand::Clear => handle::clear(service).await,
    }
}
