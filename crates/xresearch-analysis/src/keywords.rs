//! Keyword, hashtag and URL frequency tables plus lexicon sentiment.

use std::sync::LazyLock;

use regex::Regex;
use xresearch_core::{Post, UrlMeta};

use crate::freq::{top_by, Counter, OrderedMap};
use crate::lexicon::{is_stop_word, matched_terms, NEGATIVE_KEYWORDS, POSITIVE_KEYWORDS};
use crate::types::{HashtagCount, KeywordAnalysis, Sentiment, SentimentTally, UrlCount, WordCount};

pub const TOP_WORDS: usize = 30;
pub const TOP_HASHTAGS: usize = 15;
pub const TOP_URLS: usize = 15;

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("valid url regex"));

/// Split post text into countable keyword tokens.
///
/// Lowercases, removes `http(s)://` links, turns every character other than
/// `a-z`, `0-9`, `'`, `-` and whitespace into a space, then drops tokens of
/// two characters or fewer and stop words.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let without_urls = URL_RE.replace_all(&lowered, "");
    let cleaned: String = without_urls
        .chars()
        .map(|c| {
            let keep = c.is_ascii_lowercase()
                || c.is_ascii_digit()
                || c == '\''
                || c == '-'
                || c.is_whitespace();
            if keep {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|w| w.len() > 2 && !is_stop_word(w))
        .map(str::to_owned)
        .collect()
}

/// Display title for a shared link: the provided title, else the host, else
/// the raw expanded URL.
fn url_title(meta: &UrlMeta) -> String {
    if let Some(title) = meta.title.as_deref().filter(|t| !t.is_empty()) {
        return title.to_owned();
    }
    url::Url::parse(&meta.expanded_url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_owned))
        .filter(|host| !host.is_empty())
        .unwrap_or_else(|| meta.expanded_url.clone())
}

/// Classify text by counting positive and negative lexicon substrings.
///
/// Returns the classification with the matched terms of each polarity.
/// Equal counts, including none at all, are neutral.
#[must_use]
pub fn sentiment_of(text: &str) -> (Sentiment, Vec<&'static str>, Vec<&'static str>) {
    let lowered = text.to_lowercase();
    let positive = matched_terms(POSITIVE_KEYWORDS, &lowered);
    let negative = matched_terms(NEGATIVE_KEYWORDS, &lowered);

    let sentiment = match positive.len().cmp(&negative.len()) {
        std::cmp::Ordering::Greater => Sentiment::Positive,
        std::cmp::Ordering::Less => Sentiment::Negative,
        std::cmp::Ordering::Equal => Sentiment::Neutral,
    };
    (sentiment, positive, negative)
}

fn remember(found: &mut Vec<String>, terms: &[&str]) {
    for term in terms {
        if !found.iter().any(|f| f == term) {
            found.push((*term).to_owned());
        }
    }
}

/// Build keyword, hashtag, URL and sentiment tables for a batch.
#[must_use]
pub fn analyze_keywords(posts: &[Post]) -> KeywordAnalysis {
    let mut words = Counter::new();
    let mut hashtags = Counter::new();
    let mut urls: OrderedMap<(String, usize)> = OrderedMap::new();
    let mut sentiment = SentimentTally::default();

    for post in posts {
        for word in tokenize(&post.text) {
            words.bump(&word);
        }

        for tag in &post.hashtags {
            hashtags.bump(&tag.to_lowercase());
        }

        for meta in &post.url_meta {
            // The title is fixed by the first occurrence of a URL.
            let entry = urls.entry_or_insert_with(&meta.expanded_url, || (url_title(meta), 0));
            entry.1 += 1;
        }

        let (class, positive, negative) = sentiment_of(&post.text);
        match class {
            Sentiment::Positive => sentiment.positive += 1,
            Sentiment::Negative => sentiment.negative += 1,
            Sentiment::Neutral => sentiment.neutral += 1,
        }
        remember(&mut sentiment.positive_keywords, &positive);
        remember(&mut sentiment.negative_keywords, &negative);
    }

    tracing::debug!(
        posts = posts.len(),
        distinct_words = words.len(),
        distinct_hashtags = hashtags.len(),
        distinct_urls = urls.len(),
        "computed keyword tables"
    );

    KeywordAnalysis {
        top_words: words
            .top(TOP_WORDS)
            .into_iter()
            .map(|(word, count)| WordCount { word, count })
            .collect(),
        top_hashtags: hashtags
            .top(TOP_HASHTAGS)
            .into_iter()
            .map(|(tag, count)| HashtagCount { tag, count })
            .collect(),
        top_urls: top_by(urls.into_entries(), TOP_URLS, |(_, count)| *count)
            .into_iter()
            .map(|(url, (title, count))| UrlCount { url, title, count })
            .collect(),
        sentiment,
    }
}
