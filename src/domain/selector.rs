use crate::utils::error::{ClientError, Result};
use regex::Regex;
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

pub const FLASH_MESSAGE_SELECTOR: &str = ".alert";
pub const PHONE_INPUT_SELECTOR: &str = r#"input[type="tel"]"#;

static CLASS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\.(-?[_a-zA-Z][\w-]*)$").expect("class pattern is valid"));

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9-]*$").expect("tag pattern is valid"));

static ATTRIBUTE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(?P<tag>[a-zA-Z][a-zA-Z0-9-]*)?\[(?P<name>[_a-zA-Z][\w-]*)=(?:"(?P<dq>[^"]*)"|'(?P<sq>[^']*)'|(?P<bare>[\w-]+))\]$"#,
    )
    .expect("attribute pattern is valid")
});

/// The small subset of CSS selectors the page helpers need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// `.name`
    Class(String),
    /// `tag`
    Tag(String),
    /// `tag[attr="value"]` or `[attr="value"]`
    Attribute {
        tag: Option<String>,
        name: String,
        value: String,
    },
}

impl Selector {
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let invalid = |reason: &str| ClientError::InvalidSelector {
            selector: input.to_string(),
            reason: reason.to_string(),
        };

        if trimmed.is_empty() {
            return Err(invalid("selector is empty"));
        }

        if let Some(caps) = CLASS_RE.captures(trimmed) {
            return Ok(Selector::Class(caps[1].to_string()));
        }

        if TAG_RE.is_match(trimmed) {
            return Ok(Selector::Tag(trimmed.to_ascii_lowercase()));
        }

        if let Some(caps) = ATTRIBUTE_RE.captures(trimmed) {
            let value = caps
                .name("dq")
                .or_else(|| caps.name("sq"))
                .or_else(|| caps.name("bare"))
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();
            return Ok(Selector::Attribute {
                tag: caps.name("tag").map(|m| m.as_str().to_ascii_lowercase()),
                name: caps["name"].to_ascii_lowercase(),
                value,
            });
        }

        Err(invalid(
            "expected `.class`, `tag` or `tag[attr=\"value\"]`",
        ))
    }

    pub fn flash_messages() -> Self {
        Selector::Class("alert".to_string())
    }

    pub fn phone_inputs() -> Self {
        Selector::Attribute {
            tag: Some("input".to_string()),
            name: "type".to_string(),
            value: "tel".to_string(),
        }
    }

    /// Tags compare case-insensitively, attribute values and classes exactly.
    pub fn matches(&self, tag: &str, attributes: &HashMap<String, String>) -> bool {
        match self {
            Selector::Class(class) => attributes
                .get("class")
                .map(|classes| classes.split_whitespace().any(|c| c == class))
                .unwrap_or(false),
            Selector::Tag(expected) => tag.eq_ignore_ascii_case(expected),
            Selector::Attribute {
                tag: expected_tag,
                name,
                value,
            } => {
                let tag_ok = expected_tag
                    .as_deref()
                    .map_or(true, |t| tag.eq_ignore_ascii_case(t));
                tag_ok && attributes.get(name).map(String::as_str) == Some(value.as_str())
            }
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Class(class) => write!(f, ".{}", class),
            Selector::Tag(tag) => write!(f, "{}", tag),
            Selector::Attribute { tag, name, value } => {
                write!(f, "{}[{}=\"{}\"]", tag.as_deref().unwrap_or(""), name, value)
            }
        }
    }
}
