//! End-to-end tests for `analyze` over batches shaped like the retrieval
//! layer's JSON dump.

use serde_json::json;

use xresearch_analysis::{
    analyze, analyze_engagement, analyze_influencers, analyze_keywords, InfluencerCategory, Post,
};

fn posts_from(value: serde_json::Value) -> Vec<Post> {
    serde_json::from_value(value).expect("fixture should deserialize into posts")
}

/// A small mixed batch: two authors, media and link posts, hashtags,
/// positive and negative text, and one unparseable timestamp.
fn mixed_batch() -> Vec<Post> {
    posts_from(json!([
        {
            "id": "100",
            "text": "Shipped the new borrow checker docs, amazing work #RustLang",
            "author_id": "1",
            "username": "ferris",
            "name": "Ferris",
            "author_followers": 12000,
            "author_following": 300,
            "created_at": "2025-02-10T14:05:00.000Z",
            "metrics": { "likes": 120, "retweets": 30, "replies": 10, "quotes": 2, "impressions": 4000, "bookmarks": 5 },
            "url_meta": [{ "url": "https://t.co/a", "expanded_url": "https://blog.rust-lang.org/2025/02/10/docs.html", "title": "Docs update" }],
            "hashtags": ["RustLang"]
        },
        {
            "id": "101",
            "text": "Compile times feel slow and the error is broken",
            "author_id": "2",
            "username": "crab_dev",
            "name": "Crab Dev",
            "author_followers": 800,
            "author_following": 150,
            "created_at": "2025-02-11T09:00:00Z",
            "metrics": { "likes": 12, "retweets": 1, "replies": 3, "impressions": 200 },
            "media": [{ "key": "3_9", "type": "photo" }],
            "hashtags": ["rustlang", "compilers"]
        },
        {
            "id": "102",
            "text": "Borrow checker docs thread https://example.com/thread",
            "author_id": "1",
            "username": "ferris",
            "name": "Ferris (renamed)",
            "author_followers": 99999,
            "author_following": 1,
            "created_at": "whenever",
            "metrics": { "likes": 120, "retweets": 0, "replies": 0, "impressions": 1000 },
            "url_meta": [{ "url": "https://t.co/b", "expanded_url": "https://blog.rust-lang.org/2025/02/10/docs.html" }]
        }
    ]))
}

#[test]
fn mixed_batch_report_shape() {
    let posts = mixed_batch();
    let report = analyze(&posts, "rust borrow checker");

    assert_eq!(report.query, "rust borrow checker");
    assert_eq!(report.post_count, 3);
    assert_eq!(report.date_range.from, "2025-02-10T14:05:00.000Z");
    assert_eq!(report.date_range.to, "2025-02-11T09:00:00.000Z");

    let eng = &report.engagement;
    assert_eq!(eng.count, 3);
    assert_eq!(eng.likes.total, 252);
    assert_eq!(eng.likes.max, 120);
    assert!((eng.likes.median - 120.0).abs() < f64::EPSILON);
    assert_eq!(eng.impressions.total, 5200);
    // (252 + 31 + 13) / 5200
    assert!((eng.engagement_rate - 296.0 / 5200.0).abs() < 1e-12);
    assert_eq!(eng.by_hour.len(), 2);
    assert_eq!(eng.by_content_type.with_media.count, 1);
    assert_eq!(eng.by_content_type.with_links.count, 2);
    assert_eq!(eng.by_content_type.text_only.count, 0);
}

#[test]
fn mixed_batch_influencers() {
    let ranked = analyze_influencers(&mixed_batch());
    assert_eq!(ranked.len(), 2);

    let ferris = &ranked[0];
    assert_eq!(ferris.username, "ferris");
    assert_eq!(ferris.name, "Ferris");
    assert_eq!(ferris.followers, 12_000);
    assert_eq!(ferris.post_count, 2);
    assert_eq!(ferris.total_likes, 240);
    assert_eq!(ferris.category, InfluencerCategory::HighFollower);
    // Equal likes: the earlier post stays on top.
    assert_eq!(ferris.top_post.id, "100");

    let crab = &ranked[1];
    assert_eq!(crab.username, "crab_dev");
    // 16 / 200 = 0.08
    assert_eq!(crab.category, InfluencerCategory::EmergingVoice);
}

#[test]
fn mixed_batch_keywords() {
    let analysis = analyze_keywords(&mixed_batch());

    let top: Vec<(&str, usize)> = analysis
        .top_words
        .iter()
        .take(3)
        .map(|w| (w.word.as_str(), w.count))
        .collect();
    assert_eq!(top, [("borrow", 2), ("checker", 2), ("docs", 2)]);
    assert!(analysis.top_words.iter().all(|w| w.word.len() > 2));
    assert!(!analysis.top_words.iter().any(|w| w.word.contains("example")));

    assert_eq!(analysis.top_hashtags[0].tag, "rustlang");
    assert_eq!(analysis.top_hashtags[0].count, 2);

    assert_eq!(analysis.top_urls.len(), 1);
    assert_eq!(analysis.top_urls[0].title, "Docs update");
    assert_eq!(analysis.top_urls[0].count, 2);

    let sentiment = &analysis.sentiment;
    assert_eq!(sentiment.positive, 1);
    assert_eq!(sentiment.negative, 1);
    assert_eq!(sentiment.neutral, 1);
    assert_eq!(sentiment.positive_keywords, ["amazing", "shipped"]);
    assert_eq!(sentiment.negative_keywords, ["broken", "slow"]);
}

#[test]
fn repeated_runs_serialize_identically() {
    let posts = mixed_batch();
    let first = serde_json::to_string(&analyze(&posts, "q")).unwrap();
    let second = serde_json::to_string(&analyze(&posts, "q")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn analyzers_run_concurrently_on_shared_batch() {
    let posts = mixed_batch();
    let expected = analyze(&posts, "q");

    let (engagement, influencers, keywords) = std::thread::scope(|s| {
        let e = s.spawn(|| analyze_engagement(&posts));
        let i = s.spawn(|| analyze_influencers(&posts));
        let k = s.spawn(|| analyze_keywords(&posts));
        (e.join().unwrap(), i.join().unwrap(), k.join().unwrap())
    });

    assert_eq!(engagement, expected.engagement);
    assert_eq!(influencers, expected.influencers);
    assert_eq!(keywords, expected.keywords);
}

#[test]
fn report_serializes_with_camel_case_keys() {
    let report = analyze(&mixed_batch(), "q");
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["postCount"], 3);
    assert!(value["dateRange"]["from"].is_string());
    assert!(value["engagement"]["engagementRate"].is_number());
    assert!(value["engagement"]["byContentType"]["withMedia"]["avgLikes"].is_number());
    assert_eq!(value["engagement"]["byHour"]["14"]["count"], 1);
    assert_eq!(value["influencers"][0]["category"], "high_follower");
    assert_eq!(value["influencers"][1]["category"], "emerging_voice");
    assert_eq!(value["influencers"][0]["topPost"]["id"], "100");
    assert!(value["keywords"]["sentiment"]["positiveKeywords"].is_array());
}

#[test]
fn empty_report_serializes_zeroed() {
    let value = serde_json::to_value(analyze(&[], "nothing")).unwrap();
    assert_eq!(value["postCount"], 0);
    assert_eq!(value["dateRange"]["from"], "");
    assert_eq!(value["dateRange"]["to"], "");
    assert_eq!(value["engagement"]["likes"]["avg"], 0.0);
    assert_eq!(value["engagement"]["likes"]["max"], 0);
    assert_eq!(value["engagement"]["byHour"], json!({}));
    assert_eq!(value["influencers"], json!([]));
    assert_eq!(value["keywords"]["topWords"], json!([]));
}
