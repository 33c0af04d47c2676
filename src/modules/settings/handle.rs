use crate::api::error;
use crate::configs::{
    PreferenceStore, KEY_DEFAULT_FILE_DOMAIN, KEY_DEFAULT_LINK_DOMAIN, KEY_DEFAULT_TEXT_DOMAIN,
    KEY_FILE_LINK_DISPLAY_TYPE,
};
use crate::format::LinkDisplayType;
use crate::ENV;

pub async fn show(prefs: &PreferenceStore) -> Result<(), error::Error> {
    let link_domain = prefs.get::<String>(KEY_DEFAULT_LINK_DOMAIN).await?;
    let text_domain = prefs.get::<String>(KEY_DEFAULT_TEXT_DOMAIN).await?;
    let file_domain = prefs.get::<String>(KEY_DEFAULT_FILE_DOMAIN).await?;
    let display_type = prefs
        .get::<String>(KEY_FILE_LINK_DISPLAY_TYPE)
        .await?
        .as_deref()
        .map(LinkDisplayType::from_str)
        .unwrap_or(LinkDisplayType::DirectLink);

    println!("base URL             {}", ENV.base_url);
    println!("API key              {}", if ENV.api_key.is_some() { "set" } else { "not set" });
    println!("database             {}", ENV.database_path);
    println!("default link domain  {}", link_domain.as_deref().unwrap_or("-"));
    println!("default text domain  {}", text_domain.as_deref().unwrap_or("-"));
    println!("default file domain  {}", file_domain.as_deref().unwrap_or("-"));
    println!("file link format     {} ({})", display_type.as_str(), display_type.label());
    Ok(())
}

pub async fn set(prefs: &PreferenceStore, key: &str, value: String) -> Result<(), error::Error> {
    prefs.set(key, &value).await?;
    println!("{} = {}", key, value);
    Ok(())
}

pub async fn unset(prefs: &PreferenceStore, key: &str) -> Result<(), error::Error> {
    prefs.delete(key).await?;
    println!("{} cleared", key);
    Ok(())
}

/// Setting the format validates the identifier instead of leaning on the
/// rendering fallback: silently storing a typo as a direct link would be
/// confusing at set time.
pub async fn set_display_type(
    prefs: &PreferenceStore,
    identifier: &str,
) -> Result<(), error::Error> {
    let display_type = LinkDisplayType::ALL
        .iter()
        .find(|display_type| display_type.as_str().eq_ignore_ascii_case(identifier))
        .copied()
        .ok_or_else(|| {
            error::Error::bad_request(format!(
                "unknown display type {:?}; one of: {}",
                identifier,
                LinkDisplayType::ALL.map(|display_type| display_type.as_str()).join(", ")
            ))
        })?;

    prefs.set(KEY_FILE_LINK_DISPLAY_TYPE, &display_type.as_str().to_string()).await?;
    println!("{} = {}", KEY_FILE_LINK_DISPLAY_TYPE, display_type.as_str());
    Ok(())
}

pub fn list_display_types() {
    for display_type in LinkDisplayType::ALL {
        println!("{:<20} {}", display_type.as_str(), display_type.label());
    }
}
