use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_MAX_DEPTH: usize = 12;

/// How the top level of a dump is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForcedKind {
    #[default]
    Auto,
    Xml,
    Array,
    Object,
}

impl ForcedKind {
    /// Lenient parse: case and surrounding whitespace are ignored, anything
    /// unrecognised means [`ForcedKind::Auto`].
    pub fn parse(input: &str) -> Self {
        match input.trim().to_ascii_lowercase().as_str() {
            "xml" => ForcedKind::Xml,
            "array" => ForcedKind::Array,
            "object" => ForcedKind::Object,
            _ => ForcedKind::Auto,
        }
    }
}

impl fmt::Display for ForcedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForcedKind::Auto => write!(f, "auto"),
            ForcedKind::Xml => write!(f, "xml"),
            ForcedKind::Array => write!(f, "array"),
            ForcedKind::Object => write!(f, "object"),
        }
    }
}

/// Options of a single dump call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DumpOptions {
    /// Caller-supplied label shown in the dump title.
    #[serde(default)]
    pub sequence: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default)]
    pub forced_kind: ForcedKind,

    #[serde(default)]
    pub collapsed: bool,

    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self {
            sequence: 0,
            title: None,
            forced_kind: ForcedKind::Auto,
            collapsed: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl DumpOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sequence(mut self, sequence: i64) -> Self {
        self.sequence = sequence;
        self
    }

    /// Empty titles are treated as no title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        self.title = if title.is_empty() { None } else { Some(title) };
        self
    }

    pub fn kind(mut self, kind: ForcedKind) -> Self {
        self.forced_kind = kind;
        self
    }

    pub fn collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = collapsed;
        self
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Depth limit actually applied; never below 1.
    pub fn depth_limit(&self) -> usize {
        self.max_depth.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forced_kind_parse_is_lenient() {
        assert_eq!(ForcedKind::parse(" XML "), ForcedKind::Xml);
        assert_eq!(ForcedKind::parse("Array"), ForcedKind::Array);
        assert_eq!(ForcedKind::parse("object"), ForcedKind::Object);
        assert_eq!(ForcedKind::parse(""), ForcedKind::Auto);
        assert_eq!(ForcedKind::parse("json"), ForcedKind::Auto);
    }

    #[test]
    fn test_defaults() {
        let options = DumpOptions::default();
        assert_eq!(options.sequence, 0);
        assert_eq!(options.title, None);
        assert_eq!(options.forced_kind, ForcedKind::Auto);
        assert!(!options.collapsed);
        assert_eq!(options.depth_limit(), 12);
    }

    #[test]
    fn test_depth_limit_never_below_one() {
        assert_eq!(DumpOptions::new().max_depth(0).depth_limit(), 1);
    }

    #[test]
    fn test_empty_title_is_none() {
        assert_eq!(DumpOptions::new().title("").title, None);
        assert_eq!(DumpOptions::new().title("t").title.as_deref(), Some("t"));
    }

    #[test]
    fn test_deserialize_partial() {
        let options: DumpOptions =
            serde_json::from_str(r#"{"forced_kind":"xml","sequence":4}"#).unwrap();
        assert_eq!(options.forced_kind, ForcedKind::Xml);
        assert_eq!(options.sequence, 4);
        assert_eq!(options.max_depth, DEFAULT_MAX_DEPTH);
    }
}
