//! Text renderers for an [`AnalysisReport`].
//!
//! Writing into a `String` cannot fail, so `writeln!` results are discarded.

use std::fmt::Write;

use xresearch_analysis::{AnalysisReport, ContentBucket, InfluencerCategory, MetricStats};
use xresearch_core::DisplayLimits;

/// Compact human number: `1.2M`, `3.4K`, or a rounded integer.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn compact(n: f64) -> String {
    if n >= 1_000_000.0 {
        format!("{:.1}M", n / 1_000_000.0)
    } else if n >= 1_000.0 {
        format!("{:.1}K", n / 1_000.0)
    } else {
        format!("{}", n.round())
    }
}

#[allow(clippy::cast_precision_loss)]
fn compact_u(n: u64) -> String {
    compact(n as f64)
}

pub(crate) fn pct(rate: f64) -> String {
    format!("{:.2}%", rate * 100.0)
}

/// Whole-percent share of `part` in `total`.
#[allow(clippy::cast_precision_loss)]
fn share(part: usize, total: usize) -> String {
    if total == 0 {
        return "0".to_string();
    }
    format!("{}", (part as f64 / total as f64 * 100.0).round())
}

fn date_part(iso: &str) -> &str {
    iso.split('T').next().unwrap_or(iso)
}

fn category_tag(category: InfluencerCategory) -> &'static str {
    match category {
        InfluencerCategory::HighFollower => " [HF]",
        InfluencerCategory::EmergingVoice => " [EV]",
        InfluencerCategory::Regular => "",
    }
}

fn metric_line(m: &MetricStats) -> String {
    format!(
        "avg {} | med {} | max {} | total {}",
        compact(m.avg),
        compact(m.median),
        compact_u(m.max),
        compact_u(m.total)
    )
}

fn bucket_line(b: &ContentBucket) -> String {
    format!(
        "{} posts (avg {} likes, {} imp)",
        b.count,
        compact(b.avg_likes),
        compact(b.avg_impressions)
    )
}

/// Hours ordered by average likes, best first. Equal averages keep hour order.
fn top_hours(report: &AnalysisReport, limit: usize) -> Vec<(u32, usize, f64)> {
    let mut hours: Vec<(u32, usize, f64)> = report
        .engagement
        .by_hour
        .iter()
        .map(|(&hour, b)| (hour, b.count, b.avg_likes))
        .collect();
    hours.sort_by(|a, b| b.2.total_cmp(&a.2));
    hours.truncate(limit);
    hours
}

fn first_terms(terms: &[String], n: usize) -> String {
    terms.iter().take(n).map(String::as_str).collect::<Vec<_>>().join(", ")
}

/// Render the report as plain console text.
#[must_use]
pub(crate) fn console(report: &AnalysisReport, limits: &DisplayLimits) -> String {
    let eng = &report.engagement;
    let kw = &report.keywords;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "\n=== Analysis: \"{}\" ({} posts) ===",
        report.query, report.post_count
    );
    if !report.date_range.is_empty() {
        let _ = writeln!(
            out,
            "Period: {} → {}",
            date_part(&report.date_range.from),
            date_part(&report.date_range.to)
        );
    }

    let _ = writeln!(out, "\n--- Engagement ---");
    let _ = writeln!(out, "Likes:       {}", metric_line(&eng.likes));
    let _ = writeln!(out, "Impressions: {}", metric_line(&eng.impressions));
    let _ = writeln!(out, "Retweets:    {}", metric_line(&eng.retweets));
    let _ = writeln!(out, "Replies:     {}", metric_line(&eng.replies));
    let _ = writeln!(out, "Engagement rate: {}", pct(eng.engagement_rate));

    let ct = &eng.by_content_type;
    let _ = writeln!(out, "\n--- Content Type ---");
    let _ = writeln!(out, "Text only:  {}", bucket_line(&ct.text_only));
    let _ = writeln!(out, "With media: {}", bucket_line(&ct.with_media));
    let _ = writeln!(out, "With links: {}", bucket_line(&ct.with_links));

    let hours = top_hours(report, limits.hours);
    if !hours.is_empty() {
        let _ = writeln!(out, "\n--- Top Hours (UTC) ---");
        for (hour, count, avg_likes) in hours {
            let _ = writeln!(
                out,
                "{hour:02}:00  {count} posts, avg {} likes",
                compact(avg_likes)
            );
        }
    }

    if !report.influencers.is_empty() {
        let _ = writeln!(out, "\n--- Top Influencers ---");
        for inf in report.influencers.iter().take(limits.influencers) {
            let _ = writeln!(
                out,
                "@{}{} — {} followers, {} posts, {} likes, eng {}",
                inf.username,
                category_tag(inf.category),
                compact_u(inf.followers),
                inf.post_count,
                compact_u(inf.total_likes),
                pct(inf.avg_engagement_rate)
            );
        }
    }

    if !kw.top_words.is_empty() {
        let words: Vec<String> = kw
            .top_words
            .iter()
            .take(limits.keywords)
            .map(|w| format!("{}({})", w.word, w.count))
            .collect();
        let _ = writeln!(out, "\n--- Top Keywords ---");
        let _ = writeln!(out, "{}", words.join(", "));
    }

    if !kw.top_hashtags.is_empty() {
        let tags: Vec<String> = kw
            .top_hashtags
            .iter()
            .map(|h| format!("#{}({})", h.tag, h.count))
            .collect();
        let _ = writeln!(out, "\n--- Top Hashtags ---");
        let _ = writeln!(out, "{}", tags.join(", "));
    }

    if !kw.top_urls.is_empty() {
        let _ = writeln!(out, "\n--- Shared URLs ---");
        for u in kw.top_urls.iter().take(limits.urls) {
            let _ = writeln!(out, "({}x) {} — {}", u.count, u.title, u.url);
        }
    }

    let s = &kw.sentiment;
    let total = s.total();
    if total > 0 {
        let _ = writeln!(out, "\n--- Sentiment ---");
        let _ = write!(out, "Positive: {} ({}%)", s.positive, share(s.positive, total));
        if !s.positive_keywords.is_empty() {
            let _ = write!(out, " [{}]", first_terms(&s.positive_keywords, 5));
        }
        let _ = writeln!(out);
        let _ = write!(out, "Negative: {} ({}%)", s.negative, share(s.negative, total));
        if !s.negative_keywords.is_empty() {
            let _ = write!(out, " [{}]", first_terms(&s.negative_keywords, 5));
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "Neutral:  {} ({}%)", s.neutral, share(s.neutral, total));
    }

    out
}

/// Render the report as a markdown research note.
#[must_use]
pub(crate) fn markdown(report: &AnalysisReport, limits: &DisplayLimits) -> String {
    let eng = &report.engagement;
    let kw = &report.keywords;
    let mut out = String::new();

    let _ = writeln!(out, "# Analysis: {}", report.query);
    let _ = writeln!(out);
    let _ = writeln!(out, "**Posts**: {}", report.post_count);
    if !report.date_range.is_empty() {
        let _ = writeln!(
            out,
            "**Period**: {} to {}",
            date_part(&report.date_range.from),
            date_part(&report.date_range.to)
        );
    }
    let _ = writeln!(out, "**Engagement rate**: {}", pct(eng.engagement_rate));
    let _ = writeln!(out);

    let _ = writeln!(out, "## Engagement");
    let _ = writeln!(out);
    let _ = writeln!(out, "| Metric | Avg | Median | Max | Total |");
    let _ = writeln!(out, "|--------|-----|--------|-----|-------|");
    for (label, m) in [
        ("Likes", &eng.likes),
        ("Impressions", &eng.impressions),
        ("Retweets", &eng.retweets),
        ("Replies", &eng.replies),
    ] {
        let _ = writeln!(
            out,
            "| {label} | {} | {} | {} | {} |",
            compact(m.avg),
            compact(m.median),
            compact_u(m.max),
            compact_u(m.total)
        );
    }
    let _ = writeln!(out);

    let ct = &eng.by_content_type;
    let _ = writeln!(out, "## Content Type");
    let _ = writeln!(out);
    let _ = writeln!(out, "| Type | Posts | Avg Likes | Avg Impressions |");
    let _ = writeln!(out, "|------|-------|-----------|-----------------|");
    for (label, b) in [
        ("Text only", &ct.text_only),
        ("With media", &ct.with_media),
        ("With links", &ct.with_links),
    ] {
        let _ = writeln!(
            out,
            "| {label} | {} | {} | {} |",
            b.count,
            compact(b.avg_likes),
            compact(b.avg_impressions)
        );
    }
    let _ = writeln!(out);

    let hours = top_hours(report, limits.hours);
    if !hours.is_empty() {
        let _ = writeln!(out, "## Top Hours (UTC)");
        let _ = writeln!(out);
        for (hour, count, avg_likes) in hours {
            let _ = writeln!(
                out,
                "- {hour:02}:00: {count} posts, avg {} likes",
                compact(avg_likes)
            );
        }
        let _ = writeln!(out);
    }

    if !report.influencers.is_empty() {
        let _ = writeln!(out, "## Top Influencers");
        let _ = writeln!(out);
        let _ = writeln!(out, "| Handle | Category | Followers | Posts | Likes | Eng. Rate |");
        let _ = writeln!(out, "|--------|----------|-----------|-------|-------|-----------|");
        for inf in report.influencers.iter().take(limits.influencers) {
            let _ = writeln!(
                out,
                "| @{} | {} | {} | {} | {} | {} |",
                inf.username,
                inf.category,
                compact_u(inf.followers),
                inf.post_count,
                compact_u(inf.total_likes),
                pct(inf.avg_engagement_rate)
            );
        }
        let _ = writeln!(out);
    }

    if !kw.top_words.is_empty() {
        let words: Vec<String> = kw
            .top_words
            .iter()
            .take(limits.keywords)
            .map(|w| format!("`{}` ({})", w.word, w.count))
            .collect();
        let _ = writeln!(out, "## Top Keywords");
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", words.join(", "));
        let _ = writeln!(out);
    }

    if !kw.top_hashtags.is_empty() {
        let tags: Vec<String> = kw
            .top_hashtags
            .iter()
            .map(|h| format!("#{} ({})", h.tag, h.count))
            .collect();
        let _ = writeln!(out, "## Top Hashtags");
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", tags.join(", "));
        let _ = writeln!(out);
    }

    if !kw.top_urls.is_empty() {
        let _ = writeln!(out, "## Shared URLs");
        let _ = writeln!(out);
        for u in kw.top_urls.iter().take(limits.urls) {
            let _ = writeln!(out, "- [{}]({}) ({}x)", u.title, u.url, u.count);
        }
        let _ = writeln!(out);
    }

    let s = &kw.sentiment;
    let total = s.total();
    if total > 0 {
        let _ = writeln!(out, "## Sentiment");
        let _ = writeln!(out);
        let _ = writeln!(out, "| Polarity | Posts | Share | Terms |");
        let _ = writeln!(out, "|----------|-------|-------|-------|");
        let _ = writeln!(
            out,
            "| Positive | {} | {}% | {} |",
            s.positive,
            share(s.positive, total),
            first_terms(&s.positive_keywords, 5)
        );
        let _ = writeln!(
            out,
            "| Negative | {} | {}% | {} |",
            s.negative,
            share(s.negative, total),
            first_terms(&s.negative_keywords, 5)
        );
        let _ = writeln!(
            out,
            "| Neutral | {} | {}% |  |",
            s.neutral,
            share(s.neutral, total)
        );
    }

    out
}
