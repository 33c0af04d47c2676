/// New cache row, built from the create request and the server's response.
#[derive(Debug, Clone)]
pub struct NewShortLink {
    pub domain: String,
    pub slug: String,
    pub short_url: String,
    pub target_url: String,
    pub title: Option<String>,
    pub custom_slug: Option<String>,
}
