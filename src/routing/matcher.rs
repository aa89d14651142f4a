//! Route matching module
//!
//! Implements path pattern matching with named parameter segments
//! (e.g. `/catalog/:id`) and segment-aware prefix matching for
//! style middleware rules.

/// Named parameters captured from a matched path pattern.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn push(&mut self, name: &str, value: &str) {
        self.0.push((name.to_string(), value.to_string()));
    }
}

/// Match a path against a pattern, capturing `:name` segments.
///
/// Segments are compared one to one; a literal segment must match exactly
/// and a `:name` segment captures the path segment under that name.
/// Returns `None` when the segment counts differ or a literal mismatches.
pub fn match_pattern(pattern: &str, path: &str) -> Option<Params> {
    let pattern_segments: Vec<&str> = segments(pattern);
    let path_segments: Vec<&str> = segments(path);

    if pattern_segments.len() != path_segments.len() {
        return None;
    }

    let mut params = Params::new();
    for (pat, seg) in pattern_segments.iter().zip(&path_segments) {
        if let Some(name) = pat.strip_prefix(':') {
            params.push(name, seg);
        } else if pat != seg {
            return None;
        }
    }

    Some(params)
}

/// Check whether a middleware prefix applies to a request path.
///
/// Matching is segment-aware: `/catalog` covers `/catalog` and
/// `/catalog/CS121` but not `/catalogue`. The root prefix covers every path.
pub fn prefix_matches(prefix: &str, path: &str) -> bool {
    if prefix == "/" {
        return true;
    }
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}
