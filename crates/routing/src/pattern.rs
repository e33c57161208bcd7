use shared_types::{ConfigurationError, RouteParams};

/// One `/`-separated piece of a route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    /// `:name`: matches any non-empty segment and captures it under `name`.
    Param(String),
}

/// A parsed route pattern such as `/receptionist/registered/:faydaID`.
///
/// Matching is exact-segment-count: a pattern with three segments only
/// matches paths with three segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    pub fn parse(pattern: &str) -> Result<Self, ConfigurationError> {
        let invalid = |reason: &str| ConfigurationError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        };

        if pattern.contains(['?', '#']) {
            return Err(invalid("query and fragment are not allowed"));
        }
        if pattern.len() > 1 && pattern.ends_with('/') {
            return Err(invalid("trailing slash"));
        }
        let raw_segments = split_path(pattern).ok_or_else(|| invalid("malformed path"))?;

        let mut segments = Vec::with_capacity(raw_segments.len());
        let mut names: Vec<&str> = Vec::new();
        for seg in raw_segments {
            match seg.strip_prefix(':') {
                Some(name) => {
                    if name.is_empty() {
                        return Err(invalid("parameter without a name"));
                    }
                    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                        return Err(invalid("parameter names must be alphanumeric"));
                    }
                    if names.contains(&name) {
                        return Err(invalid("duplicate parameter name"));
                    }
                    names.push(name);
                    segments.push(Segment::Param(name.to_string()));
                }
                None => segments.push(Segment::Literal(seg.to_string())),
            }
        }

        Ok(Self {
            raw: pattern.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn has_params(&self) -> bool {
        self.segments.iter().any(|s| matches!(s, Segment::Param(_)))
    }

    /// Match already-split path segments, returning the captured parameters.
    ///
    /// Parameter values are percent-decoded; a value that does not decode
    /// to UTF-8 is treated as no match.
    pub fn match_segments(&self, path: &[&str]) -> Option<RouteParams> {
        if path.len() != self.segments.len() {
            return None;
        }
        let mut params = RouteParams::new();
        for (pattern_seg, value) in self.segments.iter().zip(path) {
            match pattern_seg {
                Segment::Literal(lit) => {
                    if lit != value {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    let decoded = urlencoding::decode(value).ok()?;
                    if decoded.is_empty() {
                        return None;
                    }
                    params.insert(name.clone(), decoded.into_owned());
                }
            }
        }
        Some(params)
    }

    pub fn matches(&self, path: &str) -> Option<RouteParams> {
        let segments = split_path(path)?;
        self.match_segments(&segments)
    }

    /// True when some concrete path is matched by both patterns.
    pub fn overlaps(&self, other: &RoutePattern) -> bool {
        self.segments.len() == other.segments.len()
            && self
                .segments
                .iter()
                .zip(&other.segments)
                .all(|pair| match pair {
                    (Segment::Literal(a), Segment::Literal(b)) => a == b,
                    _ => true,
                })
    }
}

/// Split a requested path into segments.
///
/// Query string and fragment are dropped and a single trailing slash is
/// tolerated. Returns `None` for a malformed path: empty, missing the
/// leading `/`, or containing an empty interior segment.
pub fn split_path(path: &str) -> Option<Vec<&str>> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let rest = path.strip_prefix('/')?;
    if rest.starts_with('/') {
        return None;
    }
    let rest = rest.strip_suffix('/').unwrap_or(rest);
    if rest.is_empty() {
        return Some(Vec::new());
    }
    let segments: Vec<&str> = rest.split('/').collect();
    if segments.iter().any(|s| s.is_empty()) {
        return None;
    }
    Some(segments)
}
