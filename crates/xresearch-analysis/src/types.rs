//! Report types produced by the analysis engine.
//!
//! Everything serializes with camelCase keys; this is the handoff shape
//! consumed by renderers and exporters.

use std::collections::BTreeMap;

use serde::Serialize;
use xresearch_core::Post;

/// Distribution summary of one metric over a set of posts.
///
/// All fields are zero for an empty set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MetricStats {
    pub avg: f64,
    pub median: f64,
    pub max: u64,
    pub total: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HourBucket {
    pub count: usize,
    pub avg_likes: f64,
    pub avg_impressions: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentBucket {
    pub count: usize,
    pub avg_likes: f64,
    pub avg_impressions: f64,
}

/// Per content type breakdown.
///
/// Buckets are not a partition: a post with both media and links is counted
/// under `with_media` only, and `with_links` requires no media.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentTypeBreakdown {
    pub text_only: ContentBucket,
    pub with_media: ContentBucket,
    pub with_links: ContentBucket,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementStats {
    pub count: usize,
    pub likes: MetricStats,
    pub impressions: MetricStats,
    pub retweets: MetricStats,
    pub replies: MetricStats,
    /// (likes + retweets + replies) / impressions; 0 when impressions sum to 0.
    pub engagement_rate: f64,
    /// Keyed by UTC hour (0-23). Hours with no posts are absent.
    pub by_hour: BTreeMap<u32, HourBucket>,
    pub by_content_type: ContentTypeBreakdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InfluencerCategory {
    HighFollower,
    EmergingVoice,
    Regular,
}

impl std::fmt::Display for InfluencerCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InfluencerCategory::HighFollower => write!(f, "high_follower"),
            InfluencerCategory::EmergingVoice => write!(f, "emerging_voice"),
            InfluencerCategory::Regular => write!(f, "regular"),
        }
    }
}

/// Aggregated profile of one author within the batch.
///
/// `name`, `followers` and `following` are captured from the author's first
/// post in the batch and never updated from later posts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Influencer {
    pub username: String,
    pub name: String,
    pub followers: u64,
    pub following: u64,
    pub post_count: usize,
    pub total_likes: u64,
    pub total_impressions: u64,
    pub total_retweets: u64,
    pub avg_engagement_rate: f64,
    pub category: InfluencerCategory,
    pub top_post: Post,
}

impl Influencer {
    /// Ranking score: followers weighted by engagement rate.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn score(&self) -> f64 {
        self.followers as f64 * self.avg_engagement_rate
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HashtagCount {
    pub tag: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlCount {
    pub url: String,
    pub title: String,
    pub count: usize,
}

/// Per-post lexicon classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentTally {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    /// Lexicon terms that matched at least once, in first-match order.
    pub positive_keywords: Vec<String>,
    pub negative_keywords: Vec<String>,
}

impl SentimentTally {
    #[must_use]
    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordAnalysis {
    pub top_words: Vec<WordCount>,
    pub top_hashtags: Vec<HashtagCount>,
    pub top_urls: Vec<UrlCount>,
    pub sentiment: SentimentTally,
}

/// ISO 8601 bounds of the batch. Both empty when no timestamp parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub from: String,
    pub to: String,
}

impl DateRange {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.from.is_empty() && self.to.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub query: String,
    pub post_count: usize,
    pub date_range: DateRange,
    pub engagement: EngagementStats,
    pub influencers: Vec<Influencer>,
    pub keywords: KeywordAnalysis,
}
