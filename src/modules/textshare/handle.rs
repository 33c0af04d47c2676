use crate::api::error;
use crate::modules::textshare::repository::TextShareRepository;
use crate::modules::textshare::schema::{CreateTextShareRequest, UpdateTextShareRequest};
use crate::modules::textshare::service::TextShareService;
use crate::utils;

pub async fn create<R>(
    service: &TextShareService<R>,
    request: CreateTextShareRequest,
) -> Result<(), error::Error>
where
    R: TextShareRepository + Send + Sync,
{
    let created = service.create(request).await?;
    println!("{}", created.short_url);
    Ok(())
}

pub async fn update<R>(
    service: &TextShareService<R>,
    request: UpdateTextShareRequest,
) -> Result<(), error::Error>
where
    R: TextShareRepository + Send + Sync,
{
    service.update(request).await?;
    println!("Text share updated");
    Ok(())
}

pub async fn delete<R>(
    service: &TextShareService<R>,
    domain: &str,
    slug: &str,
) -> Result<(), error::Error>
where
    R: TextShareRepository + Send + Sync,
{
    service.delete(domain, slug).await?;
    println!("Deleted {}/{}", domain, slug);
    Ok(())
}

pub async fn domains<R>(service: &TextShareService<R>) -> Result<(), error::Error>
where
    R: TextShareRepository + Send + Sync,
{
    for domain in service.domains().await? {
        println!("{}", domain);
    }
    Ok(())
}

pub async fn list<R>(
    service: &TextShareService<R>,
    query: Option<String>,
) -> Result<(), error::Error>
where
    R: TextShareRepository + Send + Sync,
{
    let shares = match &query {
        Some(query) => service.search_local(query).await?,
        None => service.list_local().await?,
    };

    if shares.is_empty() {
        println!("No cached text shares");
        return Ok(());
    }

    for share in shares {
        println!(
            "{}  {}  {}",
            utils::format_timestamp(&share.created_at),
            share.short_url,
            share.title,
        );
    }
    Ok(())
}

pub async fn show<R>(
    service: &TextShareService<R>,
    domain: &str,
    slug: &str,
) -> Result<(), error::Error>
where
    R: TextShareRepository + Send + Sync,
{
    let shares = service.list_local().await?;
    let share = shares
        .into_iter()
        .find(|share| share.domain == domain && share.slug == slug)
        .ok_or_else(|| error::Error::not_found("text share not in the local cache"))?;

    println!("{}", share.content);
    Ok(())
}

pub async fn clear<R>(service: &TextShareService<R>) -> Result<(), error::Error>
where
    R: TextShareRepository + Send + Sync,
{
    service.clear_local().await?;
    println!("Local text share history cleared");
    Ok(())
}
