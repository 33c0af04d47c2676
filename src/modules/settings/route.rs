use clap::Subcommand;

use crate::api::error;
use crate::configs::{
    PreferenceStore, KEY_DEFAULT_FILE_DOMAIN, KEY_DEFAULT_LINK_DOMAIN, KEY_DEFAULT_TEXT_DOMAIN,
};
use crate::modules::settings::handle;

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
    /// Set the default domain for short links
    SetLinkDomain { domain: String },
    /// Set the default domain for text shares
    SetTextDomain { domain: String },
    /// Set the default domain for file uploads
    SetFileDomain { domain: String },
    /// Set the default output format for file links
    SetFormat { identifier: String },
    /// List the available file link formats
    Formats,
    /// Clear a default domain (link, text or file)
    UnsetDomain { which: String },
}

pub async fn dispatch(
    command: ConfigCommand,
    prefs: &PreferenceStore,
) -> Result<(), error::Error> {
    match command {
        ConfigCommand::Show => handle::show(prefs).await,
        ConfigCommand::SetLinkDomain { domain } => {
            handle::set(prefs, KEY_DEFAULT_LINK_DOMAIN, domain).await
        }
        ConfigCommand::SetTextDomain { domain } => {
            handle::set(prefs, KEY_DEFAULT_TEXT_DOMAIN, domain).await
        }
        ConfigCommand::SetFileDomain { domain } => {
            handle::set(prefs, KEY_DEFAULT_FILE_DOMAIN, domain).await
        }
        ConfigCommand::SetFormat { identifier } => {
            handle::set_display_type(prefs, &identifier).await
        }
        ConfigCommand::Formats => {
            handle::list_display_types();
            Ok(())
        }
        ConfigCommand::UnsetDomain { which } => {
            let key = match which.as_str() {
                "link" => KEY_DEFAULT_LINK_DOMAIN,
                "text" => KEY_DEFAULT_TEXT_DOMAIN,
                "file" => KEY_DEFAULT_FILE_DOMAIN,
                other => {
                    return Err(error::Error::bad_request(format!(
                        "unknown domain kind {:?}; one of: link, text, file",
                        other
                    )))
                }
            };
            handle::unset(prefs, key).await
        }
    }
}
