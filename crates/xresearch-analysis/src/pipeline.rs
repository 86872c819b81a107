//! Report assembly.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use xresearch_core::Post;

use crate::influencers::analyze_influencers;
use crate::keywords::analyze_keywords;
use crate::stats::analyze_engagement;
use crate::types::{AnalysisReport, DateRange};

/// Offset-bearing forms tried after RFC 3339 (minutes without seconds).
const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M%:z", "%Y-%m-%dT%H:%M%z"];

/// Forms without an offset; read as UTC. A trailing `Z` is stripped first.
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parse an ISO 8601 timestamp into a UTC instant.
///
/// Accepts full RFC 3339, date-times missing seconds or an offset (read as
/// UTC), and bare dates (midnight UTC). Anything else is `None`.
pub(crate) fn parse_instant(created_at: &str) -> Option<DateTime<Utc>> {
    let raw = created_at.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Some(dt) = OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(raw, fmt).ok())
    {
        return Some(dt.with_timezone(&Utc));
    }

    let naive = raw.strip_suffix('Z').unwrap_or(raw);
    if let Some(dt) = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(naive, fmt).ok())
    {
        return Some(dt.and_utc());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

fn iso(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Earliest and latest post timestamps as ISO 8601 UTC strings.
///
/// Unparseable timestamps are ignored. If none parse, both bounds are empty.
#[must_use]
pub fn date_range(posts: &[Post]) -> DateRange {
    let instants: Vec<DateTime<Utc>> = posts
        .iter()
        .filter_map(|p| parse_instant(&p.created_at))
        .collect();

    let skipped = posts.len() - instants.len();
    if skipped > 0 {
        tracing::debug!(skipped, "ignored unparseable timestamps in date range");
    }

    match (instants.iter().min(), instants.iter().max()) {
        (Some(&from), Some(&to)) => DateRange {
            from: iso(from),
            to: iso(to),
        },
        _ => DateRange::default(),
    }
}

/// Run every analyzer once over `posts` and assemble the report.
#[must_use]
pub fn analyze(posts: &[Post], query: &str) -> AnalysisReport {
    tracing::debug!(query, posts = posts.len(), "analyzing batch");

    AnalysisReport {
        query: query.to_owned(),
        post_count: posts.len(),
        date_range: date_range(posts),
        engagement: analyze_engagement(posts),
        influencers: analyze_influencers(posts),
        keywords: analyze_keywords(posts),
    }
}
