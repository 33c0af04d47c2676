use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TagsResponse {
    pub tags: Vec<Tag>,
}
