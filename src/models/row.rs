use serde::Serialize;

/// Display-ready fields for one story row.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StoryRow {
    pub index: String,
    pub title: String,
    pub domain: String,
    /// Local redirect carrying the referrer-tagged link.
    pub outbound: String,
    pub story_path: String,
    pub age: String,
    pub submitter: String,
    pub sponsored: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_eth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_preview: Option<CommentPreview>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CommentPreview {
    pub author: String,
    pub avatar: String,
    pub text: String,
}
