use std::path::Path;

use crate::api::error;
use crate::configs::{PreferenceStore, KEY_FILE_LINK_DISPLAY_TYPE};
use crate::format::{FileLink, LinkDisplayType};
use crate::modules::file::repository::UploadedFileRepository;
use crate::modules::file::service::FileService;
use crate::utils;

/// Resolves the display type: explicit argument first, then the persisted
/// preference. Both parse through the total fallback, so a stale preference
/// degrades to a direct link instead of failing.
pub async fn resolve_display_type(
    display_type: Option<String>,
    prefs: &PreferenceStore,
) -> Result<LinkDisplayType, error::Error> {
    let identifier = match display_type {
        Some(identifier) => Some(identifier),
        None => prefs.get::<String>(KEY_FILE_LINK_DISPLAY_TYPE).await?,
    };

    Ok(identifier
        .as_deref()
        .map(LinkDisplayType::from_str)
        .unwrap_or(LinkDisplayType::DirectLink))
}

pub async fn upload<R>(
    service: &FileService<R>,
    prefs: &PreferenceStore,
    path: &Path,
    display_type: Option<String>,
) -> Result<(), error::Error>
where
    R: UploadedFileRepository + Send + Sync,
{
    let display_type = resolve_display_type(display_type, prefs).await?;
    let uploaded = service.upload(path).await?;

    let link = FileLink {
        filename: &uploaded.filename,
        direct_url: &uploaded.url,
        page_url: uploaded.page.as_deref(),
    };
    println!("{}", display_type.render(&link));
    Ok(())
}

pub async fn delete<R>(service: &FileService<R>, hash: &str) -> Result<(), error::Error>
where
    R: UploadedFileRepository + Send + Sync,
{
    service.delete(hash).await?;
    println!("Deleted {}", hash);
    Ok(())
}

pub async fn domains<R>(service: &FileService<R>) -> Result<(), error::Error>
where
    R: UploadedFileRepository + Send + Sync,
{
    for domain in service.domains().await? {
        println!("{}", domain);
    }
    Ok(())
}

pub async fn list<R>(
    service: &FileService<R>,
    query: Option<String>,
) -> Result<(), error::Error>
where
    R: UploadedFileRepository + Send + Sync,
{
    let files = match &query {
        Some(query) => service.search_local(query).await?,
        None => service.list_local().await?,
    };

    if files.is_empty() {
        println!("No cached uploads");
        return Ok(());
    }

    for file in files {
        println!(
            "{}  {}  {}  {}  {}",
            utils::format_timestamp(&file.created_at),
            file.hash,
            file.filename,
            utils::format_file_size(file.size),
            file.url,
        );
    }
    Ok(())
}

/// Prints one file's link in the requested format, from the local cache.
pub async fn link<R>(
    service: &FileService<R>,
    prefs: &PreferenceStore,
    hash: &str,
    display_type: Option<String>,
) -> Result<(), error::Error>
where
    R: UploadedFileRepository + Send + Sync,
{
    let display_type = resolve_display_type(display_type, prefs).await?;
    let file = service
        .find_local(hash)
        .await?
        .ok_or_else(|| error::Error::not_found("upload not in the local cache"))?;

    println!("{}", display_type.render(&file.as_link()));
    Ok(())
}

pub async fn clear<R>(service: &FileService<R>) -> Result<(), error::Error>
where
    R: UploadedFileRepository + Send + Sync,
{
    service.clear_local().await?;
    println!("Local upload history cleared");
    Ok(())
}
