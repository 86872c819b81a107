//! Per-author grouping, categorization and ranking.

use xresearch_core::Post;

use crate::freq::OrderedMap;
use crate::stats::{rate, saturating_sum};
use crate::types::{Influencer, InfluencerCategory};

/// Followers at or above this count make an author a high-follower account.
pub const HIGH_FOLLOWER_MIN: u64 = 10_000;
/// Emerging voices have fewer followers than this...
pub const EMERGING_FOLLOWER_MAX: u64 = 5_000;
/// ...and an engagement rate strictly above this.
pub const EMERGING_RATE_MIN: f64 = 0.05;

/// Assign a category from follower count and engagement rate.
///
/// Rules are checked in order: high follower, then emerging voice, else regular.
#[must_use]
pub fn categorize(followers: u64, engagement_rate: f64) -> InfluencerCategory {
    if followers >= HIGH_FOLLOWER_MIN {
        InfluencerCategory::HighFollower
    } else if followers < EMERGING_FOLLOWER_MAX && engagement_rate > EMERGING_RATE_MIN {
        InfluencerCategory::EmergingVoice
    } else {
        InfluencerCategory::Regular
    }
}

/// Build one profile from an author's posts, in batch order. `None` for an empty group.
fn build_profile(username: String, posts: &[&Post]) -> Option<Influencer> {
    let first = *posts.first()?;

    let total_likes = saturating_sum(posts.iter().map(|p| p.metrics.likes));
    let total_impressions = saturating_sum(posts.iter().map(|p| p.metrics.impressions));
    let total_retweets = saturating_sum(posts.iter().map(|p| p.metrics.retweets));
    let total_engagement = saturating_sum(posts.iter().map(|p| p.engagement()));
    let avg_engagement_rate = rate(total_engagement, total_impressions);

    // Only a strictly greater like count replaces the running best.
    let top_post = posts
        .iter()
        .copied()
        .fold(first, |best, p| {
            if p.metrics.likes > best.metrics.likes {
                p
            } else {
                best
            }
        })
        .clone();

    Some(Influencer {
        username,
        name: first.name.clone(),
        followers: first.author_followers,
        following: first.author_following,
        post_count: posts.len(),
        total_likes,
        total_impressions,
        total_retweets,
        avg_engagement_rate,
        category: categorize(first.author_followers, avg_engagement_rate),
        top_post,
    })
}

/// Group posts by author handle and rank authors by
/// `followers × engagement rate`, descending.
///
/// Handles are matched exactly (case-sensitive). Authors with equal scores
/// keep the order in which they first appear in the batch.
#[must_use]
pub fn analyze_influencers(posts: &[Post]) -> Vec<Influencer> {
    let mut groups: OrderedMap<Vec<&Post>> = OrderedMap::new();
    for post in posts {
        groups.entry_or_insert_with(&post.username, Vec::new).push(post);
    }

    let mut influencers: Vec<Influencer> = groups
        .into_entries()
        .into_iter()
        .filter_map(|(username, author_posts)| build_profile(username, &author_posts))
        .collect();

    influencers.sort_by(|a, b| b.score().total_cmp(&a.score()));

    tracing::debug!(posts = posts.len(), authors = influencers.len(), "ranked influencers");

    influencers
}
