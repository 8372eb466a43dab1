//! Concerns: the failure half of a validation outcome.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Immutable description of why a value failed validation.
///
/// A concern holds a message template and a set of substitution tokens.
/// Rendering replaces every literal occurrence of each token key in the
/// template with the token's value.
///
/// Rendering is a single left-to-right scan. At each position the longest
/// key that matches is replaced, and substituted text is never rescanned, so
/// overlapping keys (`{min}` and `{minimum}`) cannot corrupt one another.
///
/// # Example
///
/// ```rust
/// use vetting::core::Concern;
///
/// let concern = Concern::new("Too small; must be greater than {min}.").token("{min}", "5");
/// assert_eq!(concern.render(), "Too small; must be greater than 5.");
/// assert_eq!(concern.to_string(), concern.render());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concern {
    message: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    tokens: BTreeMap<String, String>,
}

impl Concern {
    /// Create a concern with a fixed message and no tokens.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            tokens: BTreeMap::new(),
        }
    }

    /// Create a concern with a message template and its tokens.
    pub fn with_tokens<I, K, V>(message: impl Into<String>, tokens: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            message: message.into(),
            tokens: tokens
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Add a substitution token.
    pub fn token(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tokens.insert(key.into(), value.into());
        self
    }

    /// The unrendered message template.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn tokens(&self) -> &BTreeMap<String, String> {
        &self.tokens
    }

    /// Produce the final text with all tokens substituted.
    pub fn render(&self) -> String {
        // Empty keys would match at every position.
        let mut keys: Vec<(&str, &str)> = self
            .tokens
            .iter()
            .filter(|(k, _)| !k.is_empty())
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();

        if keys.is_empty() {
            return self.message.clone();
        }

        keys.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(b.0)));

        let mut rendered = String::with_capacity(self.message.len());
        let mut rest = self.message.as_str();

        while !rest.is_empty() {
            if let Some((key, value)) = keys.iter().find(|(key, _)| rest.starts_with(*key)) {
                rendered.push_str(value);
                rest = &rest[key.len()..];
            } else {
                let mut chars = rest.chars();
                if let Some(ch) = chars.next() {
                    rendered.push(ch);
                }
                rest = chars.as_str();
            }
        }

        rendered
    }
}

impl Default for Concern {
    fn default() -> Self {
        Self::new("Unspecified error")
    }
}

impl fmt::Display for Concern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl std::error::Error for Concern {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_message_renders_unchanged() {
        let concern = Concern::new("Set to always fail.");
        assert_eq!(concern.render(), "Set to always fail.");
        assert_eq!(concern.to_string(), "Set to always fail.");
    }

    #[test]
    fn default_concern_is_unspecified() {
        assert_eq!(Concern::default().render(), "Unspecified error");
    }

    #[test]
    fn tokens_are_substituted_everywhere() {
        let concern = Concern::with_tokens("{x} and {x} and {y}", [("{x}", "1"), ("{y}", "2")]);
        assert_eq!(concern.render(), "1 and 1 and 2");
    }

    #[test]
    fn longest_key_wins_when_keys_overlap() {
        let concern = Concern::new("minimum=min")
            .token("min", "3")
            .token("minimum", "floor");
        assert_eq!(concern.render(), "floor=3");
    }

    #[test]
    fn substituted_text_is_not_rescanned() {
        let concern = Concern::new("ab").token("a", "b").token("b", "c");
        assert_eq!(concern.render(), "bc");
    }

    #[test]
    fn empty_keys_are_ignored() {
        let concern = Concern::new("abc").token("", "X");
        assert_eq!(concern.render(), "abc");
    }

    #[test]
    fn unmatched_tokens_leave_message_intact() {
        let concern = Concern::new("Value is héllo.").token("{missing}", "x");
        assert_eq!(concern.render(), "Value is héllo.");
    }

    #[test]
    fn rendering_is_deterministic() {
        let concern = Concern::new("{a}{ab}{abc}")
            .token("{a}", "1")
            .token("{ab}", "2")
            .token("{abc}", "3");
        let first = concern.render();
        let second = concern.clone().render();
        assert_eq!(first, "123");
        assert_eq!(first, second);
    }

    #[test]
    fn concern_serializes_with_tokens() {
        let concern = Concern::new("Offstep; must follow a step of {step}.").token("{step}", "2");
        let json = serde_json::to_string(&concern).unwrap();
        let restored: Concern = serde_json::from_str(&json).unwrap();
        assert_eq!(concern, restored);
    }
}
