use serde::{Deserialize, Serialize};

/// One post as handed over by the retrieval layer.
///
/// Field names follow the retrieval layer's JSON dump. `created_at` is kept
/// as the raw string: analysis must tolerate values that do not parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub author_id: String,
    /// Author handle, without the leading `@`.
    pub username: String,
    /// Author display name.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub author_followers: u64,
    #[serde(default)]
    pub author_following: u64,
    #[serde(default)]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
    #[serde(default)]
    pub metrics: PostMetrics,
    /// Every expanded URL in the post, including links back to X itself.
    #[serde(default)]
    pub urls: Vec<String>,
    /// Resolved metadata for external links only.
    #[serde(default)]
    pub url_meta: Vec<UrlMeta>,
    #[serde(default)]
    pub media: Vec<MediaItem>,
    #[serde(default)]
    pub mentions: Vec<String>,
    #[serde(default)]
    pub hashtags: Vec<String>,
}

/// Public engagement counters for a post. Missing counters read as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostMetrics {
    pub likes: u64,
    pub retweets: u64,
    pub replies: u64,
    pub quotes: u64,
    pub impressions: u64,
    pub bookmarks: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlMeta {
    #[serde(default)]
    pub url: String,
    pub expanded_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Photo,
    Video,
    AnimatedGif,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub key: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
}

impl Post {
    /// Engagement counted by the analysis: likes + retweets + replies,
    /// clamped at `u64::MAX`.
    #[must_use]
    pub fn engagement(&self) -> u64 {
        self.metrics
            .likes
            .saturating_add(self.metrics.retweets)
            .saturating_add(self.metrics.replies)
    }

    #[must_use]
    pub fn has_media(&self) -> bool {
        !self.media.is_empty()
    }

    #[must_use]
    pub fn has_links(&self) -> bool {
        !self.url_meta.is_empty()
    }
}
