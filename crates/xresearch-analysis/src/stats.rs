//! Engagement distribution statistics over a batch.

use std::collections::BTreeMap;

use chrono::Timelike;
use xresearch_core::Post;

use crate::pipeline::parse_instant;
use crate::types::{ContentBucket, ContentTypeBreakdown, EngagementStats, HourBucket, MetricStats};

/// Median of `values`. Even-length input averages the two middle values;
/// empty input yields `0.0`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn median(values: &[u64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] as f64 + sorted[mid] as f64) / 2.0
    } else {
        sorted[mid] as f64
    }
}

/// Sum that clamps at `u64::MAX` instead of overflowing.
pub(crate) fn saturating_sum<I>(values: I) -> u64
where
    I: IntoIterator<Item = u64>,
{
    values.into_iter().fold(0, u64::saturating_add)
}

#[allow(clippy::cast_precision_loss)]
fn mean(total: u64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        total as f64 / count as f64
    }
}

#[allow(clippy::cast_precision_loss)]
pub(crate) fn rate(engagement: u64, impressions: u64) -> f64 {
    if impressions == 0 {
        0.0
    } else {
        engagement as f64 / impressions as f64
    }
}

fn metric_stats(values: &[u64]) -> MetricStats {
    let total = saturating_sum(values.iter().copied());
    MetricStats {
        avg: mean(total, values.len()),
        median: median(values),
        max: values.iter().copied().max().unwrap_or(0),
        total,
    }
}

fn content_bucket<'a, I>(posts: I) -> ContentBucket
where
    I: IntoIterator<Item = &'a Post>,
{
    let (count, likes, impressions) = posts
        .into_iter()
        .fold((0_usize, 0_u64, 0_u64), |(n, l, i), p| {
            (
                n + 1,
                l.saturating_add(p.metrics.likes),
                i.saturating_add(p.metrics.impressions),
            )
        });
    ContentBucket {
        count,
        avg_likes: mean(likes, count),
        avg_impressions: mean(impressions, count),
    }
}

/// UTC hour of an ISO 8601 timestamp, or `None` if it does not parse.
pub(crate) fn utc_hour(created_at: &str) -> Option<u32> {
    parse_instant(created_at).map(|dt| dt.hour())
}

#[derive(Default)]
struct HourAccumulator {
    count: usize,
    likes: u64,
    impressions: u64,
}

fn hour_buckets(posts: &[Post]) -> BTreeMap<u32, HourBucket> {
    let mut acc: BTreeMap<u32, HourAccumulator> = BTreeMap::new();
    let mut unparsed = 0_usize;

    for post in posts {
        let Some(hour) = utc_hour(&post.created_at) else {
            unparsed += 1;
            continue;
        };
        let slot = acc.entry(hour).or_default();
        slot.count += 1;
        slot.likes = slot.likes.saturating_add(post.metrics.likes);
        slot.impressions = slot.impressions.saturating_add(post.metrics.impressions);
    }

    if unparsed > 0 {
        tracing::debug!(unparsed, "posts with unparseable timestamps left out of hour buckets");
    }

    acc.into_iter()
        .map(|(hour, a)| {
            (
                hour,
                HourBucket {
                    count: a.count,
                    avg_likes: mean(a.likes, a.count),
                    avg_impressions: mean(a.impressions, a.count),
                },
            )
        })
        .collect()
}

/// Compute engagement statistics for a batch.
///
/// Empty input returns [`EngagementStats::default`]: zero counts, zeroed
/// metric stats and an empty hour map.
#[must_use]
pub fn analyze_engagement(posts: &[Post]) -> EngagementStats {
    if posts.is_empty() {
        return EngagementStats::default();
    }

    let likes: Vec<u64> = posts.iter().map(|p| p.metrics.likes).collect();
    let impressions: Vec<u64> = posts.iter().map(|p| p.metrics.impressions).collect();
    let retweets: Vec<u64> = posts.iter().map(|p| p.metrics.retweets).collect();
    let replies: Vec<u64> = posts.iter().map(|p| p.metrics.replies).collect();

    let likes = metric_stats(&likes);
    let impressions = metric_stats(&impressions);
    let retweets = metric_stats(&retweets);
    let replies = metric_stats(&replies);

    let engagement_rate = rate(
        saturating_sum(posts.iter().map(Post::engagement)),
        impressions.total,
    );

    let by_content_type = ContentTypeBreakdown {
        text_only: content_bucket(posts.iter().filter(|p| !p.has_media() && !p.has_links())),
        with_media: content_bucket(posts.iter().filter(|p| p.has_media())),
        with_links: content_bucket(posts.iter().filter(|p| p.has_links() && !p.has_media())),
    };

    tracing::debug!(posts = posts.len(), engagement_rate, "computed engagement stats");

    EngagementStats {
        count: posts.len(),
        likes,
        impressions,
        retweets,
        replies,
        engagement_rate,
        by_hour: hour_buckets(posts),
        by_content_type,
    }
}
