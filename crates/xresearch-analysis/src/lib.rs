//! Analysis engine for X research batches.
//!
//! Takes an in-memory batch of [`Post`]s and produces an [`AnalysisReport`]:
//! engagement distribution statistics, a ranked influencer list, and
//! keyword, hashtag, URL and lexicon-based sentiment tallies. Every function
//! here is pure and synchronous; none of them can fail.

pub mod freq;
pub mod influencers;
pub mod keywords;
pub mod lexicon;
pub mod pipeline;
pub mod stats;
pub mod types;

pub use influencers::{analyze_influencers, categorize};
pub use keywords::{analyze_keywords, sentiment_of, tokenize};
pub use pipeline::{analyze, date_range};
pub use stats::{analyze_engagement, median};
pub use types::{
    AnalysisReport, ContentBucket, ContentTypeBreakdown, DateRange, EngagementStats,
    HashtagCount, HourBucket, Influencer, InfluencerCategory, KeywordAnalysis, MetricStats,
    Sentiment, SentimentTally, UrlCount, WordCount,
};
pub use xresearch_core::Post;
