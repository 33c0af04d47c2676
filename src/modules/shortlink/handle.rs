use crate::api::error;
use crate::configs::{PreferenceStore, KEY_DEFAULT_LINK_DOMAIN};
use crate::modules::shortlink::repository::ShortLinkRepository;
use crate::modules::shortlink::schema::{CreateShortLinkRequest, UpdateShortLinkRequest};
use crate::modules::shortlink::service::ShortLinkService;
use crate::utils;

/// Looks up the configured default domain when none was given explicitly.
pub async fn default_domain(
    prefs: &PreferenceStore,
    key: &str,
) -> Result<String, error::Error> {
    prefs.get::<String>(key).await?.ok_or_else(|| {
        error::Error::bad_request("no domain given and no default configured (see `see config`)")
    })
}

pub async fn create<R>(
    service: &ShortLinkService<R>,
    prefs: &PreferenceStore,
    mut request: CreateShortLinkRequest,
) -> Result<(), error::Error>
where
    R: ShortLinkRepository + Send + Sync,
{
    if request.domain.is_empty() {
        request.domain = default_domain(prefs, KEY_DEFAULT_LINK_DOMAIN).await?;
    }

    let created = service.create(request).await?;
    println!("{}", created.short_url);
    Ok(())
}

pub async fn update<R>(
    service: &ShortLinkService<R>,
    request: UpdateShortLinkRequest,
) -> Result<(), error::Error>
where
    R: ShortLinkRepository + Send + Sync,
{
    service.update(request).await?;
    println!("Short link updated");
    Ok(())
}

pub async fn delete<R>(
    service: &ShortLinkService<R>,
    domain: &str,
    slug: &str,
) -> Result<(), error::Error>
where
    R: ShortLinkRepository + Send + Sync,
{
    service.delete(domain, slug).await?;
    println!("Deleted {}/{}", domain, slug);
    Ok(())
}

pub async fn stats<R>(
    service: &ShortLinkService<R>,
    domain: &str,
    slug: &str,
    period: &str,
) -> Result<(), error::Error>
where
    R: ShortLinkRepository + Send + Sync,
{
    let stat = service.visit_stat(domain, slug, period).await?;
    println!("{}/{}: {} visits ({})", domain, slug, stat.visit_count, period);
    Ok(())
}

pub async fn domains<R>(service: &ShortLinkService<R>) -> Result<(), error::Error>
where
    R: ShortLinkRepository + Send + Sync,
{
    for domain in service.domains().await? {
        println!("{}", domain);
    }
    Ok(())
}

pub async fn list<R>(
    service: &ShortLinkService<R>,
    query: Option<String>,
) -> Result<(), error::Error>
where
    R: ShortLinkRepository + Send + Sync,
{
    let links = match &query {
        Some(query) => service.search_local(query).await?,
        None => service.list_local().await?,
    };

    if links.is_empty() {
        println!("No cached short links");
        return Ok(());
    }

    for link in links {
        println!(
            "{}  {}  ->  {}{}",
            utils::format_timestamp(&link.created_at),
            link.short_url,
            link.target_url,
            link.title.map(|title| format!("  ({})", title)).unwrap_or_default(),
        );
    }
    Ok(())
}

pub async fn clear<R>(service: &ShortLinkService<R>) -> Result<(), error::Error>
where
    R: ShortLinkRepository + Send + Sync,
{
    service.clear_local().await?;
    println!("Local short link history cleared");
    Ok(())
}
