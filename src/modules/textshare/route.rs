use clap::{Args, Subcommand};

use crate::api::error;
use crate::configs::{PreferenceStore, KEY_DEFAULT_TEXT_DOMAIN};
use crate::modules::textshare::handle;
use crate::modules::textshare::repository::TextShareRepository;
use crate::modules::textshare::schema::{CreateTextShareRequest, UpdateTextShareRequest};
use crate::modules::textshare::service::TextShareService;

#[derive(Debug, Subcommand)]
pub enum TextShareCommand {
    /// Share a piece of text; reads stdin when neither --content nor --file is given
    Create(CreateArgs),
    /// Replace the content or title of an existing text share
    Update(UpdateArgs),
    /// Delete a text share
    Delete { domain: String, slug: String },
    /// List the domains available for text shares
    Domains,
    /// List cached text shares, newest first
    List {
        /// Filter by substring over domain, slug, title and content
        #[arg(long)]
        query: Option<String>,
    },
    /// Print the cached content of a text share
    Show { domain: String, slug: String },
    /// Clear the local text share history
    Clear,
}

#[derive(Debug, Args)]
pub struct CreateArgs {
    #[arg(long, default_value = "")]
    pub title: String,
    /// Text to share
    #[arg(long, conflicts_with = "file")]
    pub content: Option<String>,
    /// Read the text from a file
    #[arg(long)]
    pub file: Option<std::path::PathBuf>,
    /// Text share domain; falls back to the configured default
    #[arg(long)]
    pub domain: Option<String>,
    /// Request a specific slug instead of a generated one
    #[arg(long)]
    pub slug: Option<String>,
    /// Content type hint, e.g. plain_text or markdown
    #[arg(long)]
    pub text_type: Option<String>,
    #[arg(long)]
    pub password: Option<String>,
    /// Expiry as a unix timestamp
    #[arg(long)]
    pub expire_at: Option<i64>,
    /// Tag id to attach; repeatable
    #[arg(long = "tag")]
    pub tag_ids: Vec<i64>,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    pub domain: String,
    pub slug: String,
    #[arg(long)]
    pub content: String,
    #[arg(long, default_value = "")]
    pub title: String,
}

pub async fn dispatch<R>(
    command: TextShareCommand,
    service: &TextShareService<R>,
    prefs: &PreferenceStore,
) -> Result<(), error::Error>
where
    R: TextShareRepository + Send + Sync,
{
    match command {
        TextShareCommand::Create(args) => {
            let content = match (args.content, args.file) {
                (Some(content), _) => content,
                (None, Some(path)) => tokio::fs::read_to_string(path)
                    .await
                    .map_err(error::SystemError::from)?,
                (None, None) => std::io::read_to_string(std::io::stdin())
                    .map_err(error::SystemError::from)?,
            };

            let domain = match args.domain {
                Some(domain) => Some(domain),
                None => prefs.get::<String>(KEY_DEFAULT_TEXT_DOMAIN).await?,
            };

            let request = CreateTextShareRequest {
                content,
                title: args.title,
                domain,
                custom_slug: args.slug,
                text_type: args.text_type,
                password: args.password,
                expire_at: args.expire_at,
                tag_ids: (!args.tag_ids.is_empty()).then_some(args.tag_ids),
            };
            handle::create(service, request).await
        }
        TextShareCommand::Update(args) => {
            let request = UpdateTextShareRequest {
                domain: args.domain,
                slug: args.slug,
                content: args.content,
                title: args.title,
            };
            handle::update(service, request).await
        }
        TextShareCommand::Delete { domain, slug } => handle::delete(service, &domain, &slug).await,
        TextShareCommand::Domains => handle::domains(service).await,
        TextShareCommand::List { query } => handle::list(service, query).await,
        TextShareCommand::Show { domain, slug } => handle::show(service, &domain, &slug).await,
        TextShareCommand::Clear => handle::clear(service).await,
    }
}
