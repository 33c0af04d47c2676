pub const DEFAULT_TEXT_TYPE: &str = "plain_text";

/// New cache row, built from the create request and the server's response.
#[derive(Debug, Clone)]
pub struct NewTextShare {
    pub domain: String,
    pub slug: String,
    pub short_url: String,
    pub title: String,
    pub content: String,
    pub text_type: String,
    pub custom_slug: Option<String>,
}
