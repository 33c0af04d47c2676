use clap::{Args, Subcommand};

use crate::api::error;
use crate::configs::PreferenceStore;
use crate::modules::shortlink::handle;
use crate::modules::shortlink::repository::ShortLinkRepository;
use crate::modules::shortlink::schema::{CreateShortLinkRequest, UpdateShortLinkRequest};
use crate::modules::shortlink::service::ShortLinkService;

#[derive(Debug, Subcommand)]
pub enum ShortLinkCommand {
    /// Shorten a URL
    Create(CreateArgs),
    /// Change the target or title of an existing short link
    Update(UpdateArgs),
    /// Delete a short link
    Delete { domain: String, slug: String },
    /// Show visit statistics for a short link
    Stats {
        domain: String,
        slug: String,
        #[arg(long, default_value = "totally")]
        period: String,
    },
    /// List the domains available for short links
    Domains,
    /// List cached short links, newest first
    List {
        /// Filter by substring over domain, slug, target URL and title
        #[arg(long)]
        query: Option<String>,
    },
    /// Clear the local short link history
    Clear,
}

#[derive(Debug, Args)]
pub struct CreateArgs {
    /// The URL to shorten
    pub target_url: String,
    /// Short link domain; falls back to the configured default
    #[arg(long)]
    pub domain: Option<String>,
    /// Request a specific slug instead of a generated one
    #[arg(long)]
    pub slug: Option<String>,
    #[arg(long)]
    pub title: Option<String>,
    /// Password-protect the link
    #[arg(long)]
    pub password: Option<String>,
    /// Expiry as a unix timestamp
    #[arg(long)]
    pub expire_at: Option<i64>,
    /// Where visitors go after the link expires
    #[arg(long)]
    pub expiration_redirect_url: Option<String>,
    /// Tag id to attach; repeatable
    #[arg(long = "tag")]
    pub tag_ids: Vec<i64>,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    pub domain: String,
    pub slug: String,
    pub target_url: String,
    #[arg(long, default_value = "")]
    pub title: String,
}

pub async fn dispatch<R>(
    command: ShortLinkCommand,
    service: &ShortLinkService<R>,
    prefs: &PreferenceStore,
) -> Result<(), error::Error>
where
    R: ShortLinkRepository + Send + Sync,
{
    match command {
        ShortLinkCommand::Create(args) => {
            let request = CreateShortLinkRequest {
                target_url: args.target_url,
                domain: args.domain.unwrap_or_default(),
                custom_slug: args.slug,
                title: args.title,
                password: args.password,
                expire_at: args.expire_at,
                expiration_redirect_url: args.expiration_redirect_url,
                tag_ids: (!args.tag_ids.is_empty()).then_some(args.tag_ids),
            };
            handle::create(service, prefs, request).await
        }
        ShortLinkCommand::Update(args) => {
            let request = UpdateShortLinkRequest {
                domain: args.domain,
                slug: args.slug,
                target_url: args.target_url,
                title: args.title,
            };
            handle::update(service, request).await
        }
        ShortLinkCommand::Delete { domain, slug } => handle::delete(service, &domain, &slug).await,
        ShortLinkCommand::Stats { domain, slug, period } => {
            handle::stats(service, &domain, &slug, &period).await
        }
        ShortLinkCommand::Domains => handle::domains(service).await,
        ShortLinkCommand::List { query } => handle::list(service, query).await,
        ShortLinkCommand::Clear => handle::clear(service).await,
    }
}
