//! Loading of saved post batches (the JSON array written by the retrieval
//! layer's cache or raw serializer).

use std::collections::HashSet;
use std::path::Path;

use crate::post::Post;
use crate::LoadError;

/// Read and parse a JSON array of posts from `path`. Repeated ids are
/// collapsed by [`dedupe_by_id`].
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read and
/// [`LoadError::Parse`] if it is not a JSON array of posts.
pub fn load_posts(path: &Path) -> Result<Vec<Post>, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    let posts = dedupe_by_id(parse_posts(&content, &path.display().to_string())?);
    tracing::debug!(path = %path.display(), posts = posts.len(), "loaded post batch");
    Ok(posts)
}

/// Parse a JSON array of posts. `origin` labels the source in errors.
///
/// # Errors
///
/// Returns [`LoadError::Parse`] if `content` is not a JSON array of posts.
pub fn parse_posts(content: &str, origin: &str) -> Result<Vec<Post>, LoadError> {
    serde_json::from_str(content).map_err(|e| LoadError::Parse {
        path: origin.to_string(),
        source: e,
    })
}

/// Drop posts whose id was already seen, keeping the first occurrence in
/// batch order.
#[must_use]
pub fn dedupe_by_id(posts: Vec<Post>) -> Vec<Post> {
    let before = posts.len();
    let mut seen = HashSet::with_capacity(before);
    let unique: Vec<Post> = posts
        .into_iter()
        .filter(|post| seen.insert(post.id.clone()))
        .collect();

    let dropped = before - unique.len();
    if dropped > 0 {
        tracing::debug!(dropped, kept = unique.len(), "dropped duplicate posts");
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_posts_accepts_empty_array() {
        let posts = parse_posts("[]", "inline").unwrap();
        assert!(posts.is_empty());
    }

    #[test]
    fn parse_posts_preserves_order() {
        let posts = parse_posts(
            r#"[{"id": "b", "username": "x"}, {"id": "a", "username": "y"}]"#,
            "inline",
        )
        .unwrap();
        let ids: Vec<&str> = posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn parse_posts_rejects_object() {
        let err = parse_posts(r#"{"posts": []}"#, "inline").unwrap_err();
        assert!(matches!(err, LoadError::Parse { ref path, .. } if path == "inline"));
    }

    #[test]
    fn dedupe_keeps_first_occurrence_in_order() {
        let posts = parse_posts(
            r#"[
                {"id": "1", "username": "first", "metrics": {"likes": 10}},
                {"id": "2", "username": "other"},
                {"id": "1", "username": "again", "metrics": {"likes": 99}},
                {"id": "3", "username": "last"},
                {"id": "2", "username": "other"}
            ]"#,
            "inline",
        )
        .unwrap();

        let unique = dedupe_by_id(posts);
        let ids: Vec<&str> = unique.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
        assert_eq!(unique[0].username, "first");
        assert_eq!(unique[0].metrics.likes, 10);
    }

    #[test]
    fn dedupe_leaves_distinct_batch_alone() {
        let posts = parse_posts(
            r#"[{"id": "a", "username": "x"}, {"id": "b", "username": "x"}]"#,
            "inline",
        )
        .unwrap();
        assert_eq!(dedupe_by_id(posts).len(), 2);
        assert!(dedupe_by_id(Vec::new()).is_empty());
    }

    #[test]
    fn load_posts_collapses_repeated_ids() {
        let path = std::env::temp_dir().join(format!(
            "xresearch-load-dedupe-{}.json",
            std::process::id()
        ));
        std::fs::write(
            &path,
            r#"[{"id": "7", "username": "a"}, {"id": "7", "username": "b"}]"#,
        )
        .unwrap();

        let posts = load_posts(&path);
        std::fs::remove_file(&path).unwrap();
        let posts = posts.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].username, "a");
    }

    #[test]
    fn load_posts_reports_missing_file() {
        let err = load_posts(Path::new("/nonexistent/xresearch/posts.json")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
